//! Counter feature module.
//!
//! A counter that can be stepped by hand, advanced by a recurring timer,
//! and asked for a trivia fact about its current value.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Counter state record
//! - `action.rs` - User gestures and effect results
//! - `effect.rs` - Descriptions of async work and their cancellation ids
//! - `reducer.rs` - State transitions (pure, no side effects)

mod action;
mod effect;
mod reducer;
mod state;

pub use action::CounterAction;
pub use effect::{CancelId, CounterEffect};
pub use reducer::CounterReducer;
pub use state::CounterState;
