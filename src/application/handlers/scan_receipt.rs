//! Scan Receipt Handler - turns a receipt photo into an expense draft.

use std::sync::Arc;

use crate::ports::{ParsedReceipt, ReceiptError, ReceiptParser};

/// Handler for receipt scanning.
pub struct ScanReceiptHandler {
    parser: Arc<dyn ReceiptParser>,
}

impl ScanReceiptHandler {
    /// Creates a new handler with the given parser.
    pub fn new(parser: Arc<dyn ReceiptParser>) -> Self {
        Self { parser }
    }

    /// Extracts an expense draft from a base64-encoded receipt image.
    ///
    /// The draft is for the user to confirm or edit; nothing is logged
    /// until they do.
    ///
    /// # Errors
    ///
    /// Propagates parser failures. Retryable ones (`is_retryable`) are
    /// worth one more attempt before surfacing to the user.
    pub async fn handle(&self, image_base64: &str) -> Result<ParsedReceipt, ReceiptError> {
        let draft = self.parser.parse_receipt(image_base64).await.map_err(|e| {
            tracing::warn!(error = %e, retryable = e.is_retryable(), "receipt scan failed");
            e
        })?;
        tracing::debug!(amount = draft.amount, date = %draft.date, "receipt scanned");
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockReceiptParser;
    use chrono::NaiveDate;

    fn receipt() -> ParsedReceipt {
        ParsedReceipt {
            amount: 42.5,
            date: "2025-07-04".parse::<NaiveDate>().unwrap(),
            note: "Shell".to_string(),
        }
    }

    #[tokio::test]
    async fn returns_parsed_draft() {
        let parser = MockReceiptParser::new().with_receipt(receipt());
        let handler = ScanReceiptHandler::new(Arc::new(parser));

        let draft = handler.handle("base64data").await.unwrap();
        assert_eq!(draft.amount, 42.5);
        assert_eq!(draft.note, "Shell");
    }

    #[tokio::test]
    async fn propagates_parser_errors() {
        let parser = MockReceiptParser::new().with_error(ReceiptError::unreadable("blurry"));
        let handler = ScanReceiptHandler::new(Arc::new(parser));

        let err = handler.handle("base64data").await.unwrap_err();
        assert!(matches!(err, ReceiptError::Unreadable(_)));
    }
}
