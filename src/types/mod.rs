//! Core types for Carousel

mod template;
mod slide;
mod outcome;

pub use template::{GradientStyle, AnimationStyle, SlideTemplate};
pub use slide::{SlideType, SlideRecord, SlideSequence, is_contiguous};
pub use outcome::{Strategy, ParseOutcome};
