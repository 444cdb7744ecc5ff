//! Gemini adapter - receipt scanning and cost advice via Google Gemini.
//!
//! Implements both AI-facing ports against the `generateContent` endpoint.
//! Receipt scanning uses structured JSON output; advice generation is a
//! plain text completion.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key).with_model("gemini-2.5-flash");
//! let client = GeminiClient::new(config);
//! ```

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::ports::{
    AdviceError, AdviceProvider, AdviceRequest, ParsedReceipt, ReceiptError, ReceiptParser,
};

/// Fallback note when the receipt carries no readable vendor.
const DEFAULT_RECEIPT_NOTE: &str = "Gas Receipt";

const RECEIPT_PROMPT: &str = "Extract the total amount, date (YYYY-MM-DD), and a short vendor \
     name from this gas receipt. Return JSON.";

/// Configuration for the Gemini adapter.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL (used by tests to point at a local server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API client implementing the receipt-parser and advice ports.
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    /// Creates a new Gemini client with the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url,
            self.config.model,
            self.config.api_key()
        )
    }

    async fn generate(&self, body: serde_json::Value) -> Result<String, GeminiCallError> {
        let response = self
            .client
            .post(self.generate_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeminiCallError::Timeout
                } else {
                    GeminiCallError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    GeminiCallError::AuthenticationFailed
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    GeminiCallError::Unavailable(format!("rate limited: {}", detail))
                }
                s if s.is_server_error() => GeminiCallError::Unavailable(detail),
                _ => GeminiCallError::Network(format!("HTTP {}: {}", status, detail)),
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiCallError::MalformedResponse(e.to_string()))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(GeminiCallError::EmptyResponse)
    }

    fn receipt_body(&self, image_base64: &str) -> serde_json::Value {
        json!({
            "contents": [{
                "parts": [
                    { "inline_data": { "mime_type": "image/jpeg", "data": image_base64 } },
                    { "text": RECEIPT_PROMPT }
                ]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "amount": { "type": "NUMBER" },
                        "date": { "type": "STRING" },
                        "vendor": { "type": "STRING" }
                    },
                    "required": ["amount", "date"]
                }
            }
        })
    }

    fn advice_body(&self, request: &AdviceRequest) -> serde_json::Value {
        let prompt = format!(
            "We have a car rental trip. Total cost is {} {}. There are {} unique people \
             involved. Provide a short, friendly tips on how to manage this group expense \
             fairly, and mentioned Zelle as a payment method. Keep it under 50 words.",
            request.total_cost, request.currency, request.people_count
        );
        json!({ "contents": [{ "parts": [{ "text": prompt }] }] })
    }
}

/// Internal error shared by both port translations.
enum GeminiCallError {
    AuthenticationFailed,
    Unavailable(String),
    Network(String),
    Timeout,
    MalformedResponse(String),
    EmptyResponse,
}

impl GeminiCallError {
    fn into_receipt_error(self, timeout: Duration) -> ReceiptError {
        match self {
            GeminiCallError::AuthenticationFailed => ReceiptError::AuthenticationFailed,
            GeminiCallError::Unavailable(m) => ReceiptError::unavailable(m),
            GeminiCallError::Network(m) => ReceiptError::network(m),
            GeminiCallError::Timeout => ReceiptError::Timeout {
                timeout_secs: timeout.as_secs(),
            },
            GeminiCallError::MalformedResponse(m) => ReceiptError::unreadable(m),
            GeminiCallError::EmptyResponse => ReceiptError::unreadable("empty response"),
        }
    }

    fn into_advice_error(self) -> AdviceError {
        match self {
            GeminiCallError::AuthenticationFailed => AdviceError::AuthenticationFailed,
            GeminiCallError::Unavailable(m) => AdviceError::unavailable(m),
            GeminiCallError::Network(m) => AdviceError::network(m),
            GeminiCallError::Timeout => AdviceError::network("request timed out"),
            GeminiCallError::MalformedResponse(_) | GeminiCallError::EmptyResponse => {
                AdviceError::EmptyResponse
            }
        }
    }
}

#[async_trait]
impl ReceiptParser for GeminiClient {
    async fn parse_receipt(&self, image_base64: &str) -> Result<ParsedReceipt, ReceiptError> {
        let text = self
            .generate(self.receipt_body(image_base64))
            .await
            .map_err(|e| e.into_receipt_error(self.config.timeout))?;

        let fields: ReceiptFields = serde_json::from_str(&text)
            .map_err(|e| ReceiptError::unreadable(format!("bad JSON from model: {}", e)))?;

        // Missing fields fall back the way the manual-entry form would
        let date = fields
            .date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .unwrap_or_else(|| Utc::now().date_naive());

        Ok(ParsedReceipt {
            amount: fields.amount.unwrap_or(0.0),
            date,
            note: fields
                .vendor
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_RECEIPT_NOTE.to_string()),
        })
    }
}

#[async_trait]
impl AdviceProvider for GeminiClient {
    async fn cost_advice(&self, request: AdviceRequest) -> Result<String, AdviceError> {
        self.generate(self.advice_body(&request))
            .await
            .map_err(GeminiCallError::into_advice_error)
    }
}

/// Structured fields the model is asked to return for a receipt.
#[derive(Debug, Deserialize)]
struct ReceiptFields {
    amount: Option<f64>,
    date: Option<String>,
    vendor: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize, Serialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Part {
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_url_includes_model_and_key() {
        let config = GeminiConfig::new("test-key").with_base_url("http://localhost:9999");
        let client = GeminiClient::new(config);
        assert_eq!(
            client.generate_url(),
            "http://localhost:9999/models/gemini-2.5-flash:generateContent?key=test-key"
        );
    }

    #[test]
    fn receipt_body_requests_structured_json() {
        let client = GeminiClient::new(GeminiConfig::new("k"));
        let body = client.receipt_body("aGVsbG8=");

        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            body["contents"][0]["parts"][0]["inline_data"]["data"],
            "aGVsbG8="
        );
    }

    #[test]
    fn advice_body_mentions_cost_and_people() {
        let client = GeminiClient::new(GeminiConfig::new("k"));
        let body = client.advice_body(&AdviceRequest::new(325.0, 4));

        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("325"));
        assert!(prompt.contains("4 unique people"));
        assert!(prompt.contains("USD"));
    }

    #[test]
    fn response_text_extraction() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"hello"}]}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.candidates[0].content.parts[0].text, "hello");
    }

    #[test]
    fn receipt_fields_tolerate_missing_vendor() {
        let fields: ReceiptFields =
            serde_json::from_str(r#"{"amount": 42.5, "date": "2025-07-04"}"#).unwrap();
        assert_eq!(fields.amount, Some(42.5));
        assert!(fields.vendor.is_none());
    }
}
