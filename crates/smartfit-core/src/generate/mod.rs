//! Text generation: the transport seam, the Gemini adapter, and the
//! retrying client that sits in front of them.
//!
//! ```text
//! create_program
//!     |
//!     v
//! GenerationClient --generate(prompt)--> Arc<dyn TextGenerator>
//!     |                                     |
//!     |   retry on "" / "Error: ..." <------+
//!     v
//! plan text
//! ```

pub mod gemini;
pub mod retry;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::{DEFAULT_MODEL, GeminiConfig, GeminiGenerator};
pub use retry::{GenerationClient, RetryPolicy, is_transient};

/// Failure talking to the text generation service.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode generation response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure of a retried generation call.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation failed after {attempts} attempts: {last_message}")]
    Exhausted { attempts: u32, last_message: String },

    #[error("invalid generation config: {0}")]
    InvalidConfig(String),
}

/// A service that turns a prompt into text in a single round trip.
///
/// Implementations do not retry. A reply that is empty or starts with
/// `Error:` is returned as `Ok`; the caller decides whether to retry it.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Human-readable name for logs (e.g. "gemini").
    fn name(&self) -> &str;

    async fn complete(&self, prompt: &str) -> Result<String, TransportError>;
}

const _: () = {
    fn _assert_object_safe(_: &dyn TextGenerator) {}
};
