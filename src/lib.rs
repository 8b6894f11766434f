//! seqsync - Client-side editor and HTTP sync gateway for executable step
//! sequences.
//!
//! A sequence is a named, colored, ordered list of executable steps. This
//! crate keeps a local working collection of sequences in sync with a remote
//! collection resource:
//!
//! - **Local-first editing**: step and field edits apply synchronously to the
//!   in-memory collection and mark the sequence dirty
//! - **Command dispatch**: every mutation flows through one tagged-command
//!   entry point, applied atomically and in call order
//! - **Canonical reconciliation**: saves replace the working copy with the
//!   server's response, capturing the assigned id and clearing dirty
//!
//! # Example
//!
//! ```rust
//! use seqsync::{Command, SequenceStore, Step};
//!
//! // Seed the working collection with a fresh unsaved sequence.
//! let mut store = SequenceStore::new();
//! store.apply(Command::Add).unwrap();
//!
//! // Edit its body; order is execution order.
//! store.apply(Command::PushStep(Step::new("find_home"))).unwrap();
//! store
//!     .apply(Command::SpliceStep {
//!         step: Step::new("wait").with_arg("milliseconds", 1500),
//!         insert_before: 0,
//!     })
//!     .unwrap();
//!
//! let seq = store.current().unwrap();
//! assert_eq!(seq.body[0].kind, "wait");
//! assert!(seq.dirty); // cleared only by a successful persist
//! ```
//!
//! Persisting and deleting go through [`SyncGateway`], which owns the HTTP
//! calls, the destructive-action confirmation and the user notifications.

pub mod error;
pub mod notify;
pub mod store;

// Sequence domain
pub mod sequence;

// Remote synchronization
pub mod gateway;

// Re-exports for convenience
pub use error::{SyncError, SyncResult};
pub use gateway::{SequenceClient, SyncGateway};
pub use notify::{ConfirmDestructive, LogNotifier, NotificationSink, Notice};
pub use sequence::{Color, Sequence, SequenceId, Step};
pub use store::{Command, SequenceStore};
