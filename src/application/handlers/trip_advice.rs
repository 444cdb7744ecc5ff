//! Trip Advice Handler - fetches a cost-splitting tip, with a fallback.
//!
//! Advice is decoration, never load-bearing: any provider failure degrades
//! to a canned line instead of an error.

use std::sync::Arc;

use crate::ports::{AdviceProvider, AdviceRequest};

/// Line shown when the advice provider is unavailable.
pub const FALLBACK_ADVICE: &str = "Ensure everyone pays their share promptly!";

/// Handler for cost-splitting advice.
pub struct TripAdviceHandler {
    advisor: Arc<dyn AdviceProvider>,
}

impl TripAdviceHandler {
    /// Creates a new handler with the given provider.
    pub fn new(advisor: Arc<dyn AdviceProvider>) -> Self {
        Self { advisor }
    }

    /// Returns a short tip for the given trip totals. Never fails.
    pub async fn handle(&self, request: AdviceRequest) -> String {
        match self.advisor.cost_advice(request).await {
            Ok(advice) => advice,
            Err(e) => {
                tracing::warn!(error = %e, "advice provider failed, using fallback");
                FALLBACK_ADVICE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAdviceProvider;
    use crate::ports::AdviceError;

    #[tokio::test]
    async fn returns_provider_advice() {
        let advisor = MockAdviceProvider::new().with_advice("Collect via Zelle within a week.");
        let handler = TripAdviceHandler::new(Arc::new(advisor));

        let advice = handler.handle(AdviceRequest::new(325.0, 4)).await;
        assert_eq!(advice, "Collect via Zelle within a week.");
    }

    #[tokio::test]
    async fn falls_back_on_provider_error() {
        let advisor = MockAdviceProvider::new().with_error(AdviceError::unavailable("down"));
        let handler = TripAdviceHandler::new(Arc::new(advisor));

        let advice = handler.handle(AdviceRequest::new(325.0, 4)).await;
        assert_eq!(advice, FALLBACK_ADVICE);
    }

    #[tokio::test]
    async fn passes_totals_through_to_provider() {
        let advisor = MockAdviceProvider::new().with_advice("ok");
        let handler = TripAdviceHandler::new(Arc::new(advisor.clone()));

        handler.handle(AdviceRequest::new(512.75, 6)).await;

        let requests = advisor.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].total_cost, 512.75);
        assert_eq!(requests[0].people_count, 6);
    }
}
