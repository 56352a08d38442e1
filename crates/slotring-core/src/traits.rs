//! Collaborator traits at the boundary of the list core.

use crate::error::Violation;
use crate::snapshot::ListSnapshot;

/// Receives a snapshot of a list that failed verification.
///
/// This is the seam to diagnostic tooling (graph dumps, HTML reports,
/// log lines). The verifier calls [`report`](SnapshotSink::report) exactly
/// once per failed `verify_with` call, before returning the error.
pub trait SnapshotSink {
    /// Record a failed verification.
    ///
    /// `snapshot` borrows the list's storage and is valid only for the
    /// duration of the call.
    fn report(&mut self, snapshot: &ListSnapshot<'_>, violation: &Violation);
}

/// A sink that discards every report.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn report(&mut self, _snapshot: &ListSnapshot<'_>, _violation: &Violation) {}
}
