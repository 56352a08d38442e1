//! slotring: an arena-backed circular doubly-linked list with stable indices.
//!
//! This is the top-level facade crate that re-exports the public API from the
//! slotring sub-crates. Adding `slotring` as a single dependency is enough for
//! most users.
//!
//! # Quick start
//!
//! ```rust
//! use slotring::prelude::*;
//!
//! let mut list = SlotList::with_config(ListConfig::new(4).with_max_capacity(64)).unwrap();
//! let a = list.push_back(10).unwrap();
//! let c = list.push_back(30).unwrap();
//! let b = list.insert_after(a, 20).unwrap();
//!
//! assert_eq!(list.read_head(), a);
//! assert_eq!(list.read_next(b).unwrap(), c);
//! assert_eq!(list.read_value(b).unwrap(), 20);
//!
//! list.delete(a).unwrap();
//! list.linearize().unwrap();
//! assert!(list.is_linearized());
//! assert_eq!(list.read_value(list.read_head()).unwrap(), 20);
//! list.verify().unwrap();
//!
//! // Deleted and sentinel slots are rejected, never silently read.
//! let err = list.read_value(0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::BadArg);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `slotring-core` | Config, errors, snapshots, the snapshot sink trait |
//! | [`list`] | `slotring-list` | `SlotList`, verification, linearization |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Configuration, error types, and read-only snapshots (`slotring-core`).
///
/// Implement [`types::SnapshotSink`] to receive the raw arrays of a list
/// that failed verification.
pub use slotring_core as types;

/// The list itself (`slotring-list`).
///
/// [`list::SlotList`] for all operations, [`list::verify_snapshot`] to check
/// arrays that did not come from a live list.
pub use slotring_list as list;

/// Common imports for typical slotring usage.
///
/// ```rust
/// use slotring::prelude::*;
/// ```
pub mod prelude {
    pub use slotring_core::{
        ErrorKind, ListConfig, ListElem, ListError, ListSnapshot, SlotState, SnapshotSink,
        Violation,
    };
    pub use slotring_list::{SlotList, TracingSink};
}
