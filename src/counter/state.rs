//! State for the counter feature.

use crate::mvi::FeatureState;

/// Counter feature state.
///
/// Owned by the store and replaced wholesale on every processed action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: i64,
    /// Fact about `count`, present only right after a successful fetch.
    pub fact: Option<String>,
    pub is_timer_on: bool,
    /// True while a fact fetch is in flight.
    pub is_loading: bool,
}

impl FeatureState for CounterState {}
