//! Cosmetic slide templates (gradient + animation) for the renderer

use serde::{Deserialize, Serialize};

/// Background gradient the renderer applies to a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientStyle {
    Noir,
    Burgundy,
    Accent,
    Mesh,
    Subtle,
}

/// Entrance animation the renderer applies to a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationStyle {
    Emerge,
    SlideUp,
    SlideIn,
    Materialize,
    None,
}

/// Default look for a slide type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideTemplate {
    pub gradient: GradientStyle,
    pub animation: AnimationStyle,
}

impl SlideTemplate {
    pub const fn new(gradient: GradientStyle, animation: AnimationStyle) -> Self {
        Self { gradient, animation }
    }
}

impl std::fmt::Display for GradientStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GradientStyle::Noir => "noir",
            GradientStyle::Burgundy => "burgundy",
            GradientStyle::Accent => "accent",
            GradientStyle::Mesh => "mesh",
            GradientStyle::Subtle => "subtle",
        };
        write!(f, "{}", name)
    }
}

impl std::fmt::Display for AnimationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AnimationStyle::Emerge => "emerge",
            AnimationStyle::SlideUp => "slide-up",
            AnimationStyle::SlideIn => "slide-in",
            AnimationStyle::Materialize => "materialize",
            AnimationStyle::None => "none",
        };
        write!(f, "{}", name)
    }
}
