//! Core types and traits for slotring arena lists.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the list implementation, its test utilities,
//! and any external visualizer: configuration and constants, error types,
//! the read-only [`ListSnapshot`] view, and the [`SnapshotSink`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod snapshot;
pub mod traits;

pub use config::{ListConfig, ListElem, FREE_MARK, INITIAL_CAPACITY};
pub use error::{ErrorKind, ListError, Violation};
pub use snapshot::{ListSnapshot, SlotState};
pub use traits::{NullSink, SnapshotSink};
