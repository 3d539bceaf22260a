//! Base trait for feature state in MVI architecture.

use std::fmt::Debug;

/// Marker trait for feature state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data an observer needs)
/// - Comparable (PartialEq for detecting changes)
pub trait FeatureState: Debug + Clone + PartialEq + Default + Send + Sync + 'static {}
