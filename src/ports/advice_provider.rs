//! Advice Provider Port - Interface for AI-generated cost-splitting tips.
//!
//! Optional, latency-bearing and fallible; the caller substitutes a static
//! fallback line when it fails.

use async_trait::async_trait;

/// Port for advice generation services.
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    /// Produces a short tip on managing the group expense fairly.
    async fn cost_advice(&self, request: AdviceRequest) -> Result<String, AdviceError>;
}

/// Inputs for advice generation.
#[derive(Debug, Clone, PartialEq)]
pub struct AdviceRequest {
    /// Total trip cost.
    pub total_cost: f64,
    /// Number of distinct people involved.
    pub people_count: usize,
    /// Currency label for the prompt (display only).
    pub currency: String,
}

impl AdviceRequest {
    /// Creates a request with the default currency label.
    pub fn new(total_cost: f64, people_count: usize) -> Self {
        Self {
            total_cost,
            people_count,
            currency: "USD".to_string(),
        }
    }

    /// Sets the currency label.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

/// Advice generation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AdviceError {
    /// The service is unavailable.
    #[error("advice service unavailable: {message}")]
    Unavailable { message: String },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// The service returned an empty or malformed response.
    #[error("empty response from advice service")]
    EmptyResponse,

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,
}

impl AdviceError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Returns true if retrying could help.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AdviceError::Unavailable { .. } | AdviceError::Network(_)
        )
    }
}
