//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Presenter
//!    ↑                                │
//!    └─ async results, timers, picks ─┘
//! ```
//!
//! - **State**: snapshot of everything a presenter needs
//! - **Intent**: a selection, an async completion or a timer tick
//! - **Reducer**: pure function from (state, intent) to the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
