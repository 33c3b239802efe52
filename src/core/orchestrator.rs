//! Parsing Orchestrator: which segmenter wins
//!
//! One AI attempt (when preferred and available), then an unconditional
//! fallback to the rule-based segmenter. No retries, no merging.

use std::future::Future;

use crate::core::{AiSegmenter, RuleSegmenter};
use crate::error::Result;
use crate::types::{ParseOutcome, SlideSequence, Strategy};

/// Text → slides strategy
pub trait Segmenter {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Segment `content`; `Err` means "unavailable, use the fallback"
    fn try_segment(&self, content: &str) -> impl Future<Output = Result<SlideSequence>> + Send;
}

impl Segmenter for RuleSegmenter {
    fn name(&self) -> &'static str {
        "rules"
    }

    async fn try_segment(&self, content: &str) -> Result<SlideSequence> {
        Ok(self.segment(content))
    }
}

impl Segmenter for AiSegmenter {
    fn name(&self) -> &'static str {
        "ai"
    }

    async fn try_segment(&self, content: &str) -> Result<SlideSequence> {
        self.segment(content).await
    }
}

/// Strategy selection with deterministic fallback
#[derive(Debug, Clone)]
pub struct Orchestrator<A = AiSegmenter> {
    ai: Option<A>,
    rules: RuleSegmenter,
}

impl Orchestrator<AiSegmenter> {
    /// Orchestrator without an AI path
    pub fn rules_only() -> Self {
        Self::new(None)
    }
}

impl<A: Segmenter + Sync> Orchestrator<A> {
    pub fn new(ai: Option<A>) -> Self {
        Self {
            ai,
            rules: RuleSegmenter::new(),
        }
    }

    /// Orchestrator with an AI path
    pub fn with_ai(ai: A) -> Self {
        Self::new(Some(ai))
    }

    pub fn has_ai(&self) -> bool {
        self.ai.is_some()
    }

    /// Segment `content`, attributing the winning strategy
    pub async fn parse(&self, content: &str, prefer_ai: bool) -> ParseOutcome {
        if content.trim().is_empty() {
            return ParseOutcome::new(SlideSequence::new(), Strategy::Rules);
        }

        let ai = match (&self.ai, prefer_ai) {
            (Some(ai), true) => ai,
            _ => return ParseOutcome::new(self.rules.segment(content), Strategy::Rules),
        };

        let reason = match ai.try_segment(content).await {
            Ok(slides) if !slides.is_empty() => {
                log::info!("{} segmenter produced {} slides", ai.name(), slides.len());
                return ParseOutcome::new(slides, Strategy::Ai);
            }
            Ok(_) => "empty_slides",
            Err(e) => e.code(),
        };

        log::info!("{} segmenter unavailable ({}); using rules", ai.name(), reason);
        ParseOutcome::fell_back(self.rules.segment(content), reason)
    }
}

impl Default for Orchestrator<AiSegmenter> {
    fn default() -> Self {
        Self::rules_only()
    }
}
