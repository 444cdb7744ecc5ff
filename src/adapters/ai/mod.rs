//! AI adapters: Gemini-backed and mock implementations of the
//! receipt-parser and advice ports.

mod gemini;
mod mock;

pub use gemini::{GeminiClient, GeminiConfig};
pub use mock::{MockAdviceProvider, MockReceiptParser};
