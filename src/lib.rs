//! Office locator: pick an office, get a driving route to it from where you
//! are, and keep the map in sync as results arrive.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod directions;
pub mod geo;
pub mod location;
pub mod logging;
pub mod mvi;
pub mod presenter;
pub mod workflow;
