//! Slide records - the single data product of the segmenters

use serde::{Deserialize, Serialize};
use crate::core::id::next_slide_id;
use crate::types::{AnimationStyle, GradientStyle, SlideTemplate};

/// Closed set of slide roles; drives styling only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideType {
    Hook,
    Problem,
    Solution,
    Benefit,
    SocialProof,
    Cta,
    Content,
}

impl SlideType {
    /// Every slide type, in declaration order
    pub const ALL: [SlideType; 7] = [
        SlideType::Hook,
        SlideType::Problem,
        SlideType::Solution,
        SlideType::Benefit,
        SlideType::SocialProof,
        SlideType::Cta,
        SlideType::Content,
    ];

    /// Parse a wire name ("hook", "social-proof", ...). Exact match only.
    pub fn parse(name: &str) -> Option<SlideType> {
        Self::ALL.into_iter().find(|t| t.wire_name() == name)
    }

    /// Name used on the wire and in prompts
    pub fn wire_name(&self) -> &'static str {
        match self {
            SlideType::Hook => "hook",
            SlideType::Problem => "problem",
            SlideType::Solution => "solution",
            SlideType::Benefit => "benefit",
            SlideType::SocialProof => "social-proof",
            SlideType::Cta => "cta",
            SlideType::Content => "content",
        }
    }

    /// Default gradient/animation for this type
    pub fn template(&self) -> SlideTemplate {
        use crate::types::AnimationStyle as A;
        use crate::types::GradientStyle as G;
        match self {
            SlideType::Hook => SlideTemplate::new(G::Burgundy, A::Emerge),
            SlideType::Problem => SlideTemplate::new(G::Noir, A::SlideUp),
            SlideType::Solution => SlideTemplate::new(G::Accent, A::Materialize),
            SlideType::Benefit => SlideTemplate::new(G::Mesh, A::SlideIn),
            SlideType::SocialProof => SlideTemplate::new(G::Noir, A::Emerge),
            SlideType::Cta => SlideTemplate::new(G::Burgundy, A::Materialize),
            SlideType::Content => SlideTemplate::new(G::Noir, A::SlideUp),
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            SlideType::Hook => "Hook",
            SlideType::Problem => "Problem",
            SlideType::Solution => "Solution",
            SlideType::Benefit => "Benefit",
            SlideType::SocialProof => "Social Proof",
            SlideType::Cta => "Call to Action",
            SlideType::Content => "Content",
        }
    }

    /// One-line purpose of the slide type
    pub fn description(&self) -> &'static str {
        match self {
            SlideType::Hook => "Grab attention with a powerful opening",
            SlideType::Problem => "Identify the pain point",
            SlideType::Solution => "Present your solution",
            SlideType::Benefit => "Highlight key benefits",
            SlideType::SocialProof => "Show testimonials or stats",
            SlideType::Cta => "Drive action",
            SlideType::Content => "Custom content slide",
        }
    }
}

impl std::fmt::Display for SlideType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// One typed unit of carousel content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRecord {
    /// Opaque id, unique within its sequence
    pub id: String,
    #[serde(rename = "type")]
    pub slide_type: SlideType,
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_points: Option<Vec<String>>,
    /// Only meaningful on CTA slides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    pub gradient: GradientStyle,
    pub animation: AnimationStyle,
    /// Zero-based position in the owning sequence
    pub order: usize,
}

impl SlideRecord {
    /// New record with a fresh id and the type's template
    pub fn new(slide_type: SlideType, headline: impl Into<String>, order: usize) -> Self {
        let template = slide_type.template();
        Self {
            id: next_slide_id(),
            slide_type,
            headline: headline.into(),
            subheadline: None,
            body: None,
            bullet_points: None,
            cta_text: None,
            gradient: template.gradient,
            animation: template.animation,
            order,
        }
    }

    pub fn with_subheadline(mut self, subheadline: impl Into<String>) -> Self {
        self.subheadline = Some(subheadline.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_bullet_points(mut self, bullets: Vec<String>) -> Self {
        self.bullet_points = Some(bullets);
        self
    }

    pub fn with_cta_text(mut self, cta_text: impl Into<String>) -> Self {
        self.cta_text = Some(cta_text.into());
        self
    }

    /// Field-wise equality ignoring `id`
    pub fn same_content(&self, other: &SlideRecord) -> bool {
        self.slide_type == other.slide_type
            && self.headline == other.headline
            && self.subheadline == other.subheadline
            && self.body == other.body
            && self.bullet_points == other.bullet_points
            && self.cta_text == other.cta_text
            && self.gradient == other.gradient
            && self.animation == other.animation
            && self.order == other.order
    }
}

/// Ordered slides; `order` matches the index
pub type SlideSequence = Vec<SlideRecord>;

/// True when every record's `order` equals its index
pub fn is_contiguous(slides: &[SlideRecord]) -> bool {
    slides.iter().enumerate().all(|(i, s)| s.order == i)
}
