//! Error types for the Gemini adapter

use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Gemini API.
///
/// The classification exists for diagnostics only; at the application
/// port every variant flattens into the same upstream failure kind.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("response contained no candidates")]
    NoCandidates,

    #[error("response contained no reply text")]
    EmptyReply,
}
