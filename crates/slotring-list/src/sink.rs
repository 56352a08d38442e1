//! Default diagnostic sink for failed verification.

use slotring_core::{ListSnapshot, SnapshotSink, Violation};

/// Emits one `tracing` error event per failed verification.
///
/// The event carries the violation plus the snapshot's scalar bookkeeping
/// (size, capacity, endpoints, free head). Array contents are left to
/// richer sinks such as graph renderers.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl SnapshotSink for TracingSink {
    fn report(&mut self, snapshot: &ListSnapshot<'_>, violation: &Violation) {
        tracing::error!(
            %violation,
            size = snapshot.size(),
            capacity = snapshot.capacity(),
            head = snapshot.head(),
            tail = snapshot.tail(),
            free_head = snapshot.free_head(),
            "slot list failed verification"
        );
    }
}
