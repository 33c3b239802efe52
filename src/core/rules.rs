//! Rule-Based Segmenter: deterministic paragraph/sentence heuristics
//!
//! Layout produced for paragraphs p[0..n]:
//! - hook     ← p[0] (+ p[1] as subheadline when the hook is short)
//! - problem  ← p[1] + p[2] split into ≤3 sentence bullets   (n ≥ 3)
//! - solution / benefit, alternating ← each of p[3..n-1]
//! - cta      ← p[n-1] as subheadline                         (n ≥ 2)
//!
//! Never fails: empty or whitespace-only text yields no slides.

use lazy_static::lazy_static;
use regex::Regex;
use crate::{
    CTA_BUTTON_TEXT, CTA_HEADLINE, CTA_SUBHEADLINE_MAX_CHARS, ELLIPSIS,
    HOOK_HEADLINE_MAX_CHARS, MIDDLE_FALLBACK_HEADLINE, MIDDLE_START_PARAGRAPH,
    PROBLEM_HEADLINE, PROBLEM_MAX_BULLETS,
};
use crate::types::{SlideRecord, SlideSequence, SlideType};

lazy_static! {
    /// Two or more newlines separate paragraphs
    static ref RE_PARAGRAPH_BREAK: Regex = Regex::new(r"\n\n+").unwrap();

    /// One or more sentence terminators
    static ref RE_SENTENCE_END: Regex = Regex::new(r"[.!?]+").unwrap();
}

/// Rule-based segmenter
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleSegmenter;

impl RuleSegmenter {
    /// Create new segmenter
    pub fn new() -> Self {
        Self
    }

    /// Convert text into slides
    pub fn segment(&self, content: &str) -> SlideSequence {
        let content = content.replace("\r\n", "\n");
        let paragraphs = split_paragraphs(&content);
        let mut slides = SlideSequence::new();

        let Some(first) = paragraphs.first() else {
            return slides;
        };

        slides.push(hook_slide(first, paragraphs.get(1).copied()));

        if paragraphs.len() > 2 {
            slides.push(problem_slide(&paragraphs[1..3], slides.len()));
        }

        if paragraphs.len() > MIDDLE_START_PARAGRAPH + 1 {
            let middle = &paragraphs[MIDDLE_START_PARAGRAPH..paragraphs.len() - 1];
            for (index, para) in middle.iter().enumerate() {
                let slide_type = if index % 2 == 0 {
                    SlideType::Solution
                } else {
                    SlideType::Benefit
                };
                slides.push(middle_slide(para, slide_type, slides.len()));
            }
        }

        if let [_, .., last] = paragraphs.as_slice() {
            slides.push(cta_slide(last, slides.len()));
        }

        slides
    }
}

fn hook_slide(text: &str, next: Option<&str>) -> SlideRecord {
    if char_len(text) > HOOK_HEADLINE_MAX_CHARS {
        SlideRecord::new(SlideType::Hook, truncate(text, HOOK_HEADLINE_MAX_CHARS), 0)
            .with_subheadline("")
    } else {
        SlideRecord::new(SlideType::Hook, text, 0).with_subheadline(next.unwrap_or(""))
    }
}

fn problem_slide(paragraphs: &[&str], order: usize) -> SlideRecord {
    let joined = paragraphs.join(" ");
    let bullets = split_sentences(&joined)
        .into_iter()
        .take(PROBLEM_MAX_BULLETS)
        .map(str::to_string)
        .collect();
    SlideRecord::new(SlideType::Problem, PROBLEM_HEADLINE, order).with_bullet_points(bullets)
}

fn middle_slide(paragraph: &str, slide_type: SlideType, order: usize) -> SlideRecord {
    let sentences = split_sentences(paragraph);
    let headline = sentences.first().copied().unwrap_or(MIDDLE_FALLBACK_HEADLINE);
    let body = sentences.iter().skip(1).take(2).copied().collect::<Vec<_>>().join(". ");
    SlideRecord::new(slide_type, headline, order).with_body(body)
}

fn cta_slide(text: &str, order: usize) -> SlideRecord {
    let subheadline = if char_len(text) > CTA_SUBHEADLINE_MAX_CHARS {
        truncate(text, CTA_SUBHEADLINE_MAX_CHARS)
    } else {
        text.to_string()
    };
    SlideRecord::new(SlideType::Cta, CTA_HEADLINE, order)
        .with_subheadline(subheadline)
        .with_cta_text(CTA_BUTTON_TEXT)
}

/// Trimmed, non-empty paragraphs
pub fn split_paragraphs(content: &str) -> Vec<&str> {
    RE_PARAGRAPH_BREAK
        .split(content)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Trimmed, non-empty sentence fragments
pub fn split_sentences(text: &str) -> Vec<&str> {
    RE_SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// First `max` chars plus the ellipsis marker
fn truncate(text: &str, max: usize) -> String {
    let mut out: String = text.chars().take(max).collect();
    out.push_str(ELLIPSIS);
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn types(slides: &[SlideRecord]) -> Vec<SlideType> {
        slides.iter().map(|s| s.slide_type).collect()
    }

    #[test]
    fn test_empty_input() {
        let segmenter = RuleSegmenter::new();
        assert!(segmenter.segment("").is_empty());
        assert!(segmenter.segment("   \n\n \t \n\n\n").is_empty());
    }

    #[test]
    fn test_single_paragraph_is_hook_only() {
        let slides = RuleSegmenter::new().segment("Just a headline");
        assert_eq!(types(&slides), vec![SlideType::Hook]);
        assert_eq!(slides[0].headline, "Just a headline");
        assert_eq!(slides[0].subheadline.as_deref(), Some(""));
    }

    #[test]
    fn test_two_paragraphs() {
        let slides = RuleSegmenter::new().segment("Big Headline Here\n\nClick now to subscribe.");
        assert_eq!(types(&slides), vec![SlideType::Hook, SlideType::Cta]);
        assert_eq!(slides[0].subheadline.as_deref(), Some("Click now to subscribe."));
        assert_eq!(slides[1].headline, CTA_HEADLINE);
        assert_eq!(slides[1].subheadline.as_deref(), Some("Click now to subscribe."));
        assert_eq!(slides[1].cta_text.as_deref(), Some(CTA_BUTTON_TEXT));
    }

    #[test]
    fn test_problem_bullets_capped_at_three() {
        let text = "Hook\n\nOne. Two! Three?\n\nFour. Five.\n\nEnd";
        let slides = RuleSegmenter::new().segment(text);
        let problem = &slides[1];
        assert_eq!(problem.slide_type, SlideType::Problem);
        assert_eq!(problem.headline, PROBLEM_HEADLINE);
        assert_eq!(
            problem.bullet_points.clone().unwrap(),
            vec!["One".to_string(), "Two".to_string(), "Three".to_string()]
        );
        assert!(problem.body.is_none());
    }

    #[test]
    fn test_problem_joins_across_paragraphs() {
        let text = "Hook\n\nFirst half\n\nsecond half. Next.\n\nEnd";
        let slides = RuleSegmenter::new().segment(text);
        assert_eq!(
            slides[1].bullet_points.clone().unwrap(),
            vec!["First half second half".to_string(), "Next".to_string()]
        );
    }

    #[test]
    fn test_four_paragraphs_has_no_middle() {
        let text = "Hook\n\nP1.\n\nP2.\n\nLast";
        let slides = RuleSegmenter::new().segment(text);
        assert_eq!(types(&slides), vec![SlideType::Hook, SlideType::Problem, SlideType::Cta]);
    }

    #[test]
    fn test_middle_alternates_solution_benefit() {
        let text = "Hook\n\nP1.\n\nP2.\n\nM1 first. M1 second. M1 third. M1 fourth.\n\nM2.\n\nM3!\n\nLast";
        let slides = RuleSegmenter::new().segment(text);
        assert_eq!(
            types(&slides),
            vec![
                SlideType::Hook,
                SlideType::Problem,
                SlideType::Solution,
                SlideType::Benefit,
                SlideType::Solution,
                SlideType::Cta,
            ]
        );
        assert_eq!(slides[2].headline, "M1 first");
        assert_eq!(slides[2].body.as_deref(), Some("M1 second. M1 third"));
        assert_eq!(slides[3].headline, "M2");
        assert_eq!(slides[3].body.as_deref(), Some(""));
    }

    #[test]
    fn test_middle_without_sentences_uses_fallback_headline() {
        let text = "Hook\n\nP1.\n\nP2.\n\n...!!!\n\nLast";
        let slides = RuleSegmenter::new().segment(text);
        assert_eq!(slides[2].headline, MIDDLE_FALLBACK_HEADLINE);
    }

    #[test]
    fn test_long_hook_truncated_without_subheadline() {
        let long = "x".repeat(120);
        let text = format!("{}\n\nSecond", long);
        let slides = RuleSegmenter::new().segment(&text);
        assert_eq!(slides[0].headline, format!("{}...", "x".repeat(80)));
        assert_eq!(slides[0].subheadline.as_deref(), Some(""));
    }

    #[test]
    fn test_hook_of_exactly_80_chars_untouched() {
        let exact = "y".repeat(80);
        let slides = RuleSegmenter::new().segment(&exact);
        assert_eq!(slides[0].headline, exact);
    }

    #[test]
    fn test_long_cta_truncated() {
        let long = "z".repeat(150);
        let text = format!("Hook\n\n{}", long);
        let slides = RuleSegmenter::new().segment(&text);
        assert_eq!(slides[1].subheadline, Some(format!("{}...", "z".repeat(100))));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let long = "é".repeat(90);
        let slides = RuleSegmenter::new().segment(&long);
        assert_eq!(slides[0].headline.chars().count(), 83);
    }

    #[test]
    fn test_crlf_paragraphs() {
        let slides = RuleSegmenter::new().segment("Hook\r\n\r\nSign up today.");
        assert_eq!(types(&slides), vec![SlideType::Hook, SlideType::Cta]);
        assert_eq!(slides[1].subheadline.as_deref(), Some("Sign up today."));
    }

    #[test]
    fn test_orders_are_contiguous() {
        let text = "A\n\nB.\n\nC.\n\nD. E.\n\nF.\n\nG";
        let slides = RuleSegmenter::new().segment(text);
        for (i, slide) in slides.iter().enumerate() {
            assert_eq!(slide.order, i);
        }
    }

    #[test]
    fn test_paragraph_split_drops_blank_runs() {
        assert_eq!(split_paragraphs("  a \n\n\n\n b\n\n  \n\nc  "), vec!["a", "b", "c"]);
        assert_eq!(split_paragraphs("line one\nline two"), vec!["line one\nline two"]);
    }

    #[test]
    fn test_sentence_split_collapses_runs() {
        assert_eq!(split_sentences("Wait?! Really... yes"), vec!["Wait", "Really", "yes"]);
        assert!(split_sentences("?!.").is_empty());
    }
}
