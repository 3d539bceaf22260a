//! Effect execution.
//!
//! The reducer only describes work; this module runs it against the
//! capabilities injected through [`Environment`] and feeds the results
//! back to the store as actions.

mod runtime;

use std::sync::Arc;

use crate::clock::{Clock, LiveClock};
use crate::config::FactsConfig;
use crate::facts::{FactClient, HttpFactClient, LookupError};

pub use runtime::{ActionSink, EffectRuntime, EffectTicket};

/// Capabilities available to effects.
///
/// Always passed explicitly at construction; nothing is looked up globally.
#[derive(Clone)]
pub struct Environment {
    pub clock: Arc<dyn Clock>,
    pub facts: Arc<dyn FactClient>,
}

impl Environment {
    pub fn new(clock: impl Clock, facts: impl FactClient) -> Self {
        Self {
            clock: Arc::new(clock),
            facts: Arc::new(facts),
        }
    }

    /// Wall-clock time and the HTTP fact service.
    pub fn live(config: &FactsConfig) -> Result<Self, LookupError> {
        Ok(Self::new(LiveClock, HttpFactClient::new(config)?))
    }
}
