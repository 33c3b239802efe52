//! Orchestrator output with strategy attribution

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::SlideSequence;

/// Which segmenter produced the slides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// AI-delegated segmenter
    Ai,
    /// Rule-based segmenter
    Rules,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::Ai => "AI",
            Strategy::Rules => "RULES",
        };
        write!(f, "{}", name)
    }
}

/// Result of one `parse` call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    pub slides: SlideSequence,
    pub strategy: Strategy,
    /// Code of the AI-path failure that forced the rules path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl ParseOutcome {
    pub fn new(slides: SlideSequence, strategy: Strategy) -> Self {
        Self {
            slides,
            strategy,
            fallback_reason: None,
            generated_at: Utc::now(),
        }
    }

    /// Rules outcome that replaced a failed AI attempt
    pub fn fell_back(slides: SlideSequence, reason: impl Into<String>) -> Self {
        Self {
            fallback_reason: Some(reason.into()),
            ..Self::new(slides, Strategy::Rules)
        }
    }

    /// True when the rule-based segmenter produced the slides
    pub fn fallback(&self) -> bool {
        self.strategy == Strategy::Rules
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
