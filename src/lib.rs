//! Carousel: newsletter text to carousel slides
//!
//! Two segmentation strategies feed one slide shape:
//! - AI-delegated: a chat-completion call, decoded and normalized
//! - Rule-based: deterministic paragraph/sentence heuristics, never fails
//!
//! The orchestrator tries the AI path once and falls back to the rules.

pub mod config;
pub mod core;
pub mod error;
pub mod types;

// =============================================================================
// RULE-BASED SEGMENTATION CONSTANTS
// =============================================================================

/// Hook headline cap (characters) before truncation
pub const HOOK_HEADLINE_MAX_CHARS: usize = 80;

/// CTA subheadline cap (characters) before truncation
pub const CTA_SUBHEADLINE_MAX_CHARS: usize = 100;

/// Appended to truncated text
pub const ELLIPSIS: &str = "...";

/// Max sentences taken as problem bullet points
pub const PROBLEM_MAX_BULLETS: usize = 3;

/// Paragraph index where middle (solution/benefit) slides begin
pub const MIDDLE_START_PARAGRAPH: usize = 3;

/// Fixed labels
pub const PROBLEM_HEADLINE: &str = "The Problem";
pub const MIDDLE_FALLBACK_HEADLINE: &str = "Key Point";
pub const CTA_HEADLINE: &str = "Ready to Start?";
pub const CTA_BUTTON_TEXT: &str = "Get Started";

/// Headline used when an AI slide arrives without one
pub const AI_DEFAULT_HEADLINE: &str = "Slide";

// =============================================================================
// COMPLETION SERVICE [C] - OpenRouter chat-completions dialect
// =============================================================================

pub const DEFAULT_COMPLETION_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "meta-llama/llama-3.1-8b-instruct:free";
pub const DEFAULT_REFERER: &str = "https://carousel-generator.vercel.app";
pub const DEFAULT_TITLE: &str = "Carousel Generator";

/// Sampling temperature sent with every completion request
pub const COMPLETION_TEMPERATURE: f64 = 0.3;

/// Output token cap sent with every completion request
pub const COMPLETION_MAX_TOKENS: u32 = 2000;

/// Key shipped in sample env files; treated as "no key"
pub const PLACEHOLDER_API_KEY: &str = "sk-or-v1-your-key-here";

/// Transport timeout (seconds) for the completion call
pub const COMPLETION_TIMEOUT_SECS: u64 = 60;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
