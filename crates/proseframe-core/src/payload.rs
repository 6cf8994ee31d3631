//! Generation backend payloads
//!
//! The backend answers a request keyed by topic, tone and answer with a JSON
//! object holding the prose plus summary and keywords. Model output often
//! arrives wrapped in a markdown code fence, so decoding strips that first.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A ```` ```json ```` opening fence or a closing fence on its own line
static JSON_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```json\n|\n```").unwrap());

/// Request key sent to the generation backend
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default)]
    pub answer: String,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Default::default()
        }
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = answer.into();
        self
    }
}

/// Response payload from the generation backend
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// The raw document text
    #[serde(rename = "blogContent")]
    pub blog_content: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Deserialize)]
struct ErrorPayload {
    error: String,
}

impl GenerationResponse {
    /// Decode a JSON payload, tolerating a surrounding code fence
    ///
    /// # Errors
    ///
    /// * `CoreError::Upstream` - the payload is an `{"error": ...}` object
    /// * `CoreError::Payload` - the payload is not a valid response
    pub fn from_json(text: &str) -> Result<Self> {
        let cleaned = JSON_FENCE.replace_all(text, "");
        let cleaned = cleaned.trim();

        let value: serde_json::Value = serde_json::from_str(cleaned)?;
        if value.get("blogContent").is_none() {
            if let Ok(payload) = serde_json::from_value::<ErrorPayload>(value.clone()) {
                return Err(CoreError::Upstream(payload.error));
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Decode model output, falling back to treating it as raw prose
    ///
    /// When decoding fails the whole output becomes the document text and
    /// summary and keywords are derived from `topic`.
    pub fn from_model_output(raw: &str, topic: &str) -> Self {
        match Self::from_json(raw) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, topic, "response is not a JSON payload, using raw text");
                Self::fallback(raw, topic)
            }
        }
    }

    fn fallback(raw: &str, topic: &str) -> Self {
        let keywords = [topic.to_lowercase().as_str(), "blog", "guide", "tips", "insights"]
            .into_iter()
            .filter(|k| !k.trim().is_empty())
            .map(str::to_string)
            .collect();

        Self {
            blog_content: raw.to_string(),
            summary: format!("A comprehensive blog post about {}", topic),
            keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_json() {
        let json = r#"{"blogContent": "Hello\n\nWorld.", "summary": "S", "keywords": ["a", "b"]}"#;
        let response = GenerationResponse::from_json(json).unwrap();
        assert_eq!(response.blog_content, "Hello\n\nWorld.");
        assert_eq!(response.summary, "S");
        assert_eq!(response.keywords, ["a", "b"]);
    }

    #[test]
    fn test_decode_fenced_json() {
        let json = "```json\n{\"blogContent\": \"Body.\"}\n```";
        let response = GenerationResponse::from_json(json).unwrap();
        assert_eq!(response.blog_content, "Body.");
        assert!(response.summary.is_empty());
        assert!(response.keywords.is_empty());
    }

    #[test]
    fn test_upstream_error() {
        let err = GenerationResponse::from_json(r#"{"error": "Topic is required"}"#).unwrap_err();
        assert!(matches!(err, CoreError::Upstream(ref msg) if msg == "Topic is required"));
    }

    #[test]
    fn test_missing_content_is_payload_error() {
        let err = GenerationResponse::from_json(r#"{"summary": "no body"}"#).unwrap_err();
        assert!(matches!(err, CoreError::Payload(_)));
    }

    #[test]
    fn test_model_output_fallback() {
        let response = GenerationResponse::from_model_output("Just prose.", "Solar Power");
        assert_eq!(response.blog_content, "Just prose.");
        assert_eq!(response.summary, "A comprehensive blog post about Solar Power");
        assert_eq!(
            response.keywords,
            ["solar power", "blog", "guide", "tips", "insights"]
        );
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerationRequest::new("Rust").with_tone("Casual").with_answer("yes");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["topic"], "Rust");
        assert_eq!(json["tone"], "Casual");
        assert_eq!(json["answer"], "yes");
    }
}
