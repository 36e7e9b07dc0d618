//! Route workflow: destination selection → origin → route → state.
//!
//! [`WorkflowReducer`] holds every transition; [`RouteWorkflow`] runs the
//! asynchronous steps and feeds their results back as intents tagged with the
//! generation of the selection that started them.

mod error;
mod intent;
mod liveness;
mod reducer;
mod runtime;
mod state;

pub use error::{ErrorKind, Severity, WorkflowError};
pub use intent::WorkflowIntent;
pub use reducer::WorkflowReducer;
pub use runtime::{OriginSource, RouteWorkflow};
pub use state::{Phase, WorkflowState};
