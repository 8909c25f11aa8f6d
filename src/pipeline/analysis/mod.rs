pub mod capability;
pub mod client;
pub mod decode;
pub mod orchestrator;
pub mod prompt;
pub mod request;
pub mod types;

pub use capability::*;
pub use client::*;
pub use decode::*;
pub use orchestrator::*;
pub use prompt::*;
pub use request::*;
pub use types::*;

use thiserror::Error;

/// Errors that cross the pipeline boundary. Everything else is absorbed by
/// the retry ladder; a rejection always means "no result available".
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("API key is missing: set GEMINI_API_KEY or provide one in AnalyzerConfig")]
    MissingApiKey,

    /// All tiers failed. The message is intentionally generic; the last
    /// underlying cause is retained as the error source for diagnostics.
    #[error("analysis failed: the document could not be analyzed")]
    Exhausted {
        #[source]
        source: AttemptError,
    },

    #[error("analysis was cancelled")]
    Cancelled,
}

/// Per-tier failures, recovered by advancing to the next tier and surfaced
/// only as the retained cause of an exhausted ladder.
#[derive(Error, Debug)]
pub enum AttemptError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("backend returned error (status {status}): {body}")]
    Backend { status: u16, body: String },

    #[error("empty response body")]
    EmptyResponse,

    #[error("response parsing error: {0}")]
    ResponseParsing(String),

    #[error("malformed analysis payload: {0}")]
    Decode(String),
}
