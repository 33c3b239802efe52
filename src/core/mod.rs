//! Core modules for Carousel

pub mod id;
pub mod rules;
pub mod normalize;
pub mod ai;
pub mod orchestrator;
pub mod api;

pub use id::next_slide_id;
pub use rules::{RuleSegmenter, split_paragraphs, split_sentences};
pub use normalize::{RawSlide, normalize_slides, check_bookends};
pub use ai::{AiSegmenter, CompletionRequest, ChatMessage, extract_payload, decode_slides, SYSTEM_PROMPT, USER_PROMPT_PREFIX};
pub use orchestrator::{Orchestrator, Segmenter};
pub use api::{AppState, create_router, run_server};
