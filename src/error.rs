//! AI-path failure taxonomy
//!
//! Every variant is a soft "unavailable" signal: the orchestrator absorbs it
//! and falls back to the rule-based segmenter. None reach the end user.

use thiserror::Error;

/// Why the AI-delegated segmenter could not produce slides
#[derive(Error, Debug)]
pub enum Unavailable {
    /// Credential missing, blank, or the sample placeholder
    #[error("completion service credential not configured")]
    ConfigurationUnavailable,

    /// Non-success status from the completion service
    #[error("completion service failed ({status}): {body}")]
    ServiceFailure {
        status: u16,
        body: String,
    },

    /// Response carried no completion text
    #[error("completion service returned no text")]
    EmptyCompletion,

    /// Completion text is not the expected JSON document
    #[error("malformed completion payload: {detail}")]
    MalformedPayload {
        detail: String,
        raw: String,
    },

    /// Request could not be sent or the response could not be read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Unavailable {
    /// Stable code (for logs and `fallbackReason`)
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigurationUnavailable => "configuration_unavailable",
            Self::ServiceFailure { .. } => "service_failure",
            Self::EmptyCompletion => "empty_completion",
            Self::MalformedPayload { .. } => "malformed_payload",
            Self::Transport(_) => "transport_error",
        }
    }

    pub(crate) fn malformed(detail: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::MalformedPayload {
            detail: detail.into(),
            raw: raw.into(),
        }
    }
}

/// Result type for AI-path operations
pub type Result<T> = std::result::Result<T, Unavailable>;
