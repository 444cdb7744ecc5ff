//! Mock AI adapters for testing.
//!
//! Configurable implementations of the receipt-parser and advice ports so
//! tests run without calling real AI APIs. Responses are consumed in
//! order; calls are recorded for verification.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    AdviceError, AdviceProvider, AdviceRequest, ParsedReceipt, ReceiptError, ReceiptParser,
};

/// Mock receipt parser for testing.
#[derive(Debug, Clone, Default)]
pub struct MockReceiptParser {
    /// Pre-configured outcomes (consumed in order).
    responses: Arc<Mutex<VecDeque<Result<ParsedReceipt, ReceiptError>>>>,
    /// Images passed to `parse_receipt`, for verification.
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockReceiptParser {
    /// Creates a new mock with no configured responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful parse result.
    pub fn with_receipt(self, receipt: ParsedReceipt) -> Self {
        self.responses.lock().unwrap().push_back(Ok(receipt));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: ReceiptError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns the number of calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ReceiptParser for MockReceiptParser {
    async fn parse_receipt(&self, image_base64: &str) -> Result<ParsedReceipt, ReceiptError> {
        self.calls.lock().unwrap().push(image_base64.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ReceiptError::unreadable("no mock response configured")))
    }
}

/// Mock advice provider for testing.
#[derive(Debug, Clone, Default)]
pub struct MockAdviceProvider {
    responses: Arc<Mutex<VecDeque<Result<String, AdviceError>>>>,
    calls: Arc<Mutex<Vec<AdviceRequest>>>,
}

impl MockAdviceProvider {
    /// Creates a new mock with no configured responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful advice string.
    pub fn with_advice(self, advice: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(advice.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: AdviceError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns all recorded requests.
    pub fn requests(&self) -> Vec<AdviceRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AdviceProvider for MockAdviceProvider {
    async fn cost_advice(&self, request: AdviceRequest) -> Result<String, AdviceError> {
        self.calls.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AdviceError::unavailable("no mock response configured")))
    }
}
