//! Operation dispatch layer for the ArcNest registry.
//!
//! The external harness submits operations (singly or as ordered batches)
//! against a shared [`Registry`](arcnest_core::Registry) and reads back
//! receipts: the new identifier for mutations, a named-field payload or null
//! for lookups, or a stable error code.

mod dispatch;
mod op;

pub use dispatch::Dispatcher;
pub use op::{Operation, Receipt};

/// Result type for dispatched operations.
pub type OpResult = std::result::Result<serde_json::Value, arcnest_core::RegistryError>;
