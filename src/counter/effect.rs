//! Effect descriptions produced by the counter reducer.

use std::fmt;

/// Logical identity under which at most one effect may run at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CancelId {
    Timer,
    FactRequest,
}

impl fmt::Display for CancelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelId::Timer => write!(f, "timer"),
            CancelId::FactRequest => write!(f, "fact-request"),
        }
    }
}

/// Work the store must perform after a transition.
///
/// This is a description only; the effect runtime decides how to run it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterEffect {
    None,
    /// Look up a fact for `number`. Runs under [`CancelId::FactRequest`].
    FetchFact { number: i64 },
    /// Start a recurring timer under `id`, replacing any running one.
    StartTimer { id: CancelId },
    /// Stop whatever runs under `id`. No-op when nothing does.
    Cancel { id: CancelId },
}

impl CounterEffect {
    pub fn is_none(&self) -> bool {
        matches!(self, CounterEffect::None)
    }
}
