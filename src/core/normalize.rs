//! Normalizer: AI slide objects → `SlideRecord`
//!
//! Never fails. Unknown or missing `type` becomes `content`, a missing
//! headline becomes "Slide", `order` is the position in the returned list.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::AI_DEFAULT_HEADLINE;
use crate::types::{SlideRecord, SlideSequence, SlideType};

/// One slide as returned by the completion service, fields already
/// type-checked (anything of the wrong JSON type is dropped)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSlide {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub slide_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_points: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
}

impl RawSlide {
    /// Lenient field extraction; `None` only when `value` is not an object
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);

        let bullet_points = obj.get("bulletPoints").and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        });

        Some(Self {
            slide_type: text("type"),
            headline: text("headline"),
            subheadline: text("subheadline"),
            body: text("body"),
            bullet_points,
            cta_text: text("ctaText"),
        })
    }

    /// Declared type, `content` when absent or unrecognized
    pub fn resolved_type(&self) -> SlideType {
        self.slide_type
            .as_deref()
            .and_then(SlideType::parse)
            .unwrap_or(SlideType::Content)
    }
}

/// Map raw slides to records in list order
pub fn normalize_slides(raw: Vec<RawSlide>) -> SlideSequence {
    raw.into_iter()
        .enumerate()
        .map(|(order, slide)| normalize_slide(slide, order))
        .collect()
}

fn normalize_slide(raw: RawSlide, order: usize) -> SlideRecord {
    let slide_type = raw.resolved_type();
    let headline = raw.headline.unwrap_or_else(|| AI_DEFAULT_HEADLINE.to_string());

    let mut record = SlideRecord::new(slide_type, headline, order);
    record.subheadline = raw.subheadline;
    record.body = raw.body;
    record.bullet_points = raw.bullet_points;
    record.cta_text = raw.cta_text;
    record
}

/// Hook first and, for two or more slides, cta last
pub fn check_bookends(slides: &[SlideRecord]) -> bool {
    match slides {
        [] => true,
        [only] => only.slide_type == SlideType::Hook,
        [first, .., last] => first.slide_type == SlideType::Hook && last.slide_type == SlideType::Cta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnimationStyle, GradientStyle};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_unknown_type_becomes_content() {
        let raw = vec![
            RawSlide { slide_type: Some("intro".into()), headline: Some("A".into()), ..Default::default() },
            RawSlide { slide_type: None, headline: Some("B".into()), ..Default::default() },
        ];
        let slides = normalize_slides(raw);
        for slide in &slides {
            assert_eq!(slide.slide_type, SlideType::Content);
            assert_eq!(slide.gradient, GradientStyle::Noir);
            assert_eq!(slide.animation, AnimationStyle::SlideUp);
        }
    }

    #[test]
    fn test_missing_headline_defaults() {
        let slides = normalize_slides(vec![RawSlide::default()]);
        assert_eq!(slides[0].headline, "Slide");
    }

    #[test]
    fn test_fields_and_order_carried() {
        let raw = vec![
            RawSlide { slide_type: Some("hook".into()), headline: Some("Open".into()), ..Default::default() },
            RawSlide {
                slide_type: Some("social-proof".into()),
                headline: Some("Loved".into()),
                body: Some("10k readers".into()),
                bullet_points: Some(vec!["fast".into()]),
                ..Default::default()
            },
            RawSlide {
                slide_type: Some("cta".into()),
                headline: Some("Join".into()),
                cta_text: Some("Subscribe".into()),
                ..Default::default()
            },
        ];
        let slides = normalize_slides(raw);
        let orders: Vec<usize> = slides.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        assert_eq!(slides[1].slide_type, SlideType::SocialProof);
        assert_eq!(slides[1].body.as_deref(), Some("10k readers"));
        assert_eq!(slides[1].bullet_points, Some(vec!["fast".to_string()]));
        assert_eq!(slides[2].cta_text.as_deref(), Some("Subscribe"));
        assert_eq!(slides[2].gradient, GradientStyle::Burgundy);
        assert!(check_bookends(&slides));
    }

    #[test]
    fn test_from_value_filters_bullets() {
        let raw = RawSlide::from_value(&json!({"bulletPoints": ["a", 1, null, "b"], "ctaText": false})).unwrap();
        assert_eq!(raw.bullet_points, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(raw.cta_text, None);
        assert!(RawSlide::from_value(&json!("hook")).is_none());
    }

    #[test]
    fn test_check_bookends() {
        let hook = SlideRecord::new(SlideType::Hook, "h", 0);
        let cta = SlideRecord::new(SlideType::Cta, "c", 1);
        let content = SlideRecord::new(SlideType::Content, "x", 1);
        assert!(check_bookends(&[]));
        assert!(check_bookends(&[hook.clone()]));
        assert!(check_bookends(&[hook.clone(), cta]));
        assert!(!check_bookends(&[hook, content]));
    }
}
