//! Ports: interfaces to external collaborators.
//!
//! The engine depends only on these traits; adapters supply concrete
//! implementations (HTTP-backed or mock). Tests never need network
//! availability.

mod access_gate;
mod advice_provider;
mod receipt_parser;

pub use access_gate::{AccessDenied, AccessGate};
pub use advice_provider::{AdviceError, AdviceProvider, AdviceRequest};
pub use receipt_parser::{ParsedReceipt, ReceiptError, ReceiptParser};
