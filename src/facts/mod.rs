//! Fact-lookup capability.
//!
//! Given a number, asynchronously produce a short trivia text about it.
//! The live implementation talks HTTP to a numbers-facts service; tests
//! inject a [`StubFactClient`] instead.

mod error;
mod http;
mod stub;

use async_trait::async_trait;

pub use error::LookupError;
pub use http::HttpFactClient;
pub use stub::StubFactClient;

/// Looks up a descriptive text for a number.
#[async_trait]
pub trait FactClient: Send + Sync + 'static {
    /// Returns the fact text, or why it could not be produced.
    async fn fetch(&self, number: i64) -> Result<String, LookupError>;
}
