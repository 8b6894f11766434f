//! Remote synchronization module.
//!
//! `SequenceClient` speaks HTTP to the remote collection; `SyncGateway`
//! layers the reconciliation, confirmation and notification policy on top.

pub mod client;
pub mod sync;

// Re-exports for convenience
pub use client::SequenceClient;
pub use sync::SyncGateway;
