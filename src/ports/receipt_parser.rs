//! Receipt Parser Port - Interface for AI-assisted receipt scanning.
//!
//! Abstracts the external service that extracts an amount, date and vendor
//! from a photographed fuel receipt. The booking and sharing engines never
//! call this themselves; only the expense-entry flow does, and its failure
//! degrades to manual entry without ever blocking booking or calculation.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Port for receipt scanning services.
#[async_trait]
pub trait ReceiptParser: Send + Sync {
    /// Extracts expense fields from a base64-encoded receipt image.
    async fn parse_receipt(&self, image_base64: &str) -> Result<ParsedReceipt, ReceiptError>;
}

/// Fields extracted from a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedReceipt {
    /// Total amount on the receipt.
    pub amount: f64,
    /// Receipt date.
    pub date: NaiveDate,
    /// Short vendor name for the expense note.
    pub note: String,
}

/// Receipt scanning errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReceiptError {
    /// The service is unavailable.
    #[error("receipt service unavailable: {message}")]
    Unavailable { message: String },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// The service response could not be interpreted.
    #[error("unreadable receipt: {0}")]
    Unreadable(String),

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

impl ReceiptError {
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

    /// Creates an unreadable receipt error.
    pub fn unreadable(message: impl Into<String>) -> Self {
        Self::Unreadable(message.into())
    }

    /// Returns true if retrying the scan could help.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ReceiptError::Unavailable { .. }
                | ReceiptError::Network(_)
                | ReceiptError::Timeout { .. }
        )
    }
}
