use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use super::{FactClient, LookupError};

type LookupFn = dyn Fn(i64) -> Result<String, LookupError> + Send + Sync;

/// Closure-backed fact client for deterministic tests.
#[derive(Clone)]
pub struct StubFactClient {
    lookup: Arc<LookupFn>,
}

impl StubFactClient {
    pub fn new<F>(lookup: F) -> Self
    where
        F: Fn(i64) -> Result<String, LookupError> + Send + Sync + 'static,
    {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    /// Always answers `"{n} is a great number!"`.
    pub fn great_numbers() -> Self {
        Self::new(|n| Ok(format!("{n} is a great number!")))
    }

    /// Always fails.
    pub fn failing() -> Self {
        Self::new(|_| Err(LookupError::Stub("lookup unavailable".to_string())))
    }
}

impl fmt::Debug for StubFactClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StubFactClient").finish_non_exhaustive()
    }
}

#[async_trait]
impl FactClient for StubFactClient {
    async fn fetch(&self, number: i64) -> Result<String, LookupError> {
        (self.lookup)(number)
    }
}
