//! AI-Delegated Segmenter: one chat-completion call per parse
//!
//! Failure points, each mapped to an `Unavailable` variant:
//! - no usable key            → ConfigurationUnavailable (no request sent)
//! - send/read failure        → Transport
//! - non-2xx status           → ServiceFailure (body logged)
//! - no completion text       → EmptyCompletion
//! - not `{ "slides": [...] }`→ MalformedPayload (raw text logged)

use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::AiConfig;
use crate::core::normalize::{check_bookends, normalize_slides, RawSlide};
use crate::error::{Result, Unavailable};
use crate::types::{SlideSequence, SlideType};
use crate::{COMPLETION_MAX_TOKENS, COMPLETION_TEMPERATURE};

/// Literal prefix of the user message
pub const USER_PROMPT_PREFIX: &str = "Convert this newsletter into carousel slides:";

/// Fixed system instruction: target shape and hard rules
pub const SYSTEM_PROMPT: &str = r#"You are an expert at converting newsletter content into engaging carousel slides for social media.

Your task is to analyze the newsletter text and break it into 4-7 slides optimized for conversion.

Rules:
1. NEVER modify or rewrite the original copy - use the exact words from the newsletter
2. Classify every slide as one of: hook, problem, solution, benefit, social-proof, cta, content
3. Headlines must be impactful and under 80 characters
4. Extract bullet points from lists in the content
5. The first slide must always be a "hook" type
6. The last slide must always be a "cta" type

Respond ONLY with valid JSON in this exact format:
{
  "slides": [
    {
      "type": "hook" | "problem" | "solution" | "benefit" | "social-proof" | "cta" | "content",
      "headline": "string (max 80 chars)",
      "subheadline": "string (optional)",
      "body": "string (optional)",
      "bulletPoints": ["string"] (optional),
      "ctaText": "string (optional, only for cta type)"
    }
  ]
}"#;

lazy_static! {
    /// ```json ... ``` or ``` ... ```; captures the interior
    static ref RE_FENCED_BLOCK: Regex = Regex::new(r"```(?:json)?\s*((?s:.*?))\s*```").unwrap();
}

/// Chat message in a completion request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Completion request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Request for one newsletter
    pub fn for_newsletter(model: &str, content: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!("{}\n\n{}", USER_PROMPT_PREFIX, content),
                },
            ],
            temperature: COMPLETION_TEMPERATURE,
            max_tokens: COMPLETION_MAX_TOKENS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Default, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Default, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// AI-delegated segmenter
#[derive(Debug, Clone)]
pub struct AiSegmenter {
    config: AiConfig,
    client: Client,
}

impl AiSegmenter {
    /// Create a segmenter; the transport timeout comes from `config`
    pub fn new(config: AiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        Self { config, client }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// False when no usable credential is configured
    pub fn is_configured(&self) -> bool {
        self.config.has_credential()
    }

    /// Slides from the completion service, normalized
    pub async fn segment(&self, content: &str) -> Result<SlideSequence> {
        let raw = self.request_slides(content).await?;
        let slides = normalize_slides(raw);
        if !check_bookends(&slides) {
            log::warn!(
                "AI slides do not run hook → cta (first={:?}, last={:?}); keeping them as returned",
                slides.first().map(|s| s.slide_type),
                slides.last().map(|s| s.slide_type),
            );
        }
        Ok(slides)
    }

    /// Raw slide list from the completion service
    pub async fn request_slides(&self, content: &str) -> Result<Vec<RawSlide>> {
        let result = self.fetch_slides(content).await;
        if let Err(ref e) = result {
            log_unavailable(e);
        }
        result
    }

    async fn fetch_slides(&self, content: &str) -> Result<Vec<RawSlide>> {
        let key = self.config.credential().ok_or(Unavailable::ConfigurationUnavailable)?;
        let request = CompletionRequest::for_newsletter(&self.config.model, content);

        log::debug!("requesting slides from {} ({})", self.config.endpoint, self.config.model);

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(key)
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.title)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Unavailable::ServiceFailure {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let message = completion_text(&body)?;
        decode_slides(extract_payload(&message))
    }
}

/// First choice's message text
fn completion_text(body: &str) -> Result<String> {
    let parsed: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| Unavailable::malformed(format!("completion envelope: {}", e), body))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|text| !text.trim().is_empty())
        .ok_or(Unavailable::EmptyCompletion)
}

/// Interior of the first fenced block, or the whole text
pub fn extract_payload(text: &str) -> &str {
    RE_FENCED_BLOCK
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(text)
}

/// Validating decode of `{ "slides": [ {...}, ... ] }`
///
/// Bad fields inside a slide degrade to absent; a non-object slide or a
/// missing/non-array `slides` rejects the whole payload.
pub fn decode_slides(payload: &str) -> Result<Vec<RawSlide>> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| Unavailable::malformed(format!("invalid JSON: {}", e), payload))?;

    let slides = value
        .get("slides")
        .and_then(Value::as_array)
        .ok_or_else(|| Unavailable::malformed("missing `slides` array", payload))?;

    slides
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            RawSlide::from_value(slide)
                .ok_or_else(|| Unavailable::malformed(format!("slide {} is not an object", i), payload))
        })
        .collect()
}

fn log_unavailable(err: &Unavailable) {
    match err {
        Unavailable::ConfigurationUnavailable => {
            log::debug!("AI segmentation skipped: {}", err);
        }
        Unavailable::ServiceFailure { status, body } => {
            log::error!("completion service error ({}): {}", status, body);
        }
        Unavailable::EmptyCompletion => {
            log::warn!("completion service returned an empty response");
        }
        Unavailable::MalformedPayload { detail, raw } => {
            log::error!("failed to parse completion as slides ({}): {}", detail, raw);
        }
        Unavailable::Transport(e) => {
            log::error!("completion request failed: {}", e);
        }
    }
}

/// Names accepted in the `type` field, as listed in the prompt
pub fn allowed_type_names() -> Vec<&'static str> {
    SlideType::ALL.iter().map(|t| t.wire_name()).collect()
}

// =============================================================================
// TESTS
// =============================================================================
