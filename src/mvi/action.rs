//! Base trait for actions in MVI architecture.

use std::fmt::Debug;

/// Marker trait for action objects.
///
/// Actions represent:
/// - User gestures (button taps, typed commands)
/// - Effect results (fetch responses, timer ticks)
///
/// Actions are consumed exactly once by a reducer. They must be comparable
/// so tests can assert which follow-up actions an effect produced.
pub trait Action: Debug + Clone + PartialEq + Send + 'static {}
