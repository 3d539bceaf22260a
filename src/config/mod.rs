//! Configuration for the live capabilities.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, FactsConfig, TimerConfig};
