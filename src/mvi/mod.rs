//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow with effect descriptions.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ (State, Effect)
//!    ↑                          │
//!    │                          ↓
//!    └──────────────── Effect runtime
//! ```
//!
//! - **State**: Immutable representation of feature state
//! - **Action**: User gestures or effect results
//! - **Reducer**: Pure function from (State, Action) to (State, Effect)

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::FeatureState;
