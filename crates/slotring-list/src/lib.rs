//! Arena-backed circular doubly-linked list for slotring.
//!
//! Every node lives at a stable index in three parallel arrays
//! (`data`, `next`, `prev`). Slot 0 is a sentinel carrying the endpoints
//! (`next[0]` is the head, `prev[0]` the tail); unused slots are threaded
//! through the same `next` array as an intrusive free chain, so insertion
//! and deletion never touch the heap unless the store must grow.
//!
//! # Architecture
//!
//! ```text
//! SlotList (public operations, index validation)
//! └── SlotStore (data[], next[], prev[], size, free_head)
//!     ├── free chain: acquire / release / grow     (free_list.rs, store.rs)
//!     ├── ring:       link_after / link_before / unlink   (ring.rs)
//!     └── packed rebuild for construction and linearize   (linearize.rs)
//! verify_snapshot (reads a ListSnapshot, reports to a SnapshotSink)
//! ```
//!
//! # Handles
//!
//! Indices returned by inserts stay valid until that slot is deleted or
//! [`SlotList::linearize`] runs; after linearization the logical order
//! equals physical order `1..=len`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod free_list;
pub mod linearize;
pub mod list;
mod ring;
pub mod sink;
mod store;
pub mod verify;

pub use list::SlotList;
pub use sink::TracingSink;
pub use verify::verify_snapshot;

pub use slotring_core::{
    ErrorKind, ListConfig, ListElem, ListError, ListSnapshot, NullSink, SlotState, SnapshotSink,
    Violation, FREE_MARK, INITIAL_CAPACITY,
};
