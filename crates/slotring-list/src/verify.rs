//! Structural self-verification.
//!
//! [`verify_snapshot`] reads a [`ListSnapshot`] and proves, or refutes, the
//! complete invariant set:
//!
//! 1. Capacity is at least the configured minimum; the arrays agree in length.
//! 2. The sentinel names no endpoints iff the list is empty.
//! 3. A non-empty ring closes on itself (`prev[head] = tail`,
//!    `next[tail] = head`) and walking `next` from the head visits exactly
//!    `size` distinct live slots, each mutually linked with its neighbours.
//! 4. The free chain from `free_head` visits only marked, non-live slots,
//!    never repeats, and ends at 0.
//! 5. Live and free slots partition `{1, …, capacity-1}`.
//!
//! Both walks are bounded by `capacity` steps. The two scratch bitsets are
//! allocated fallibly; an allocation failure is reported as
//! [`ListError::AllocFailed`], never as corruption.

use slotring_core::{ListError, ListSnapshot, SnapshotSink, Violation, FREE_MARK};

use crate::list::SlotList;
use crate::sink::TracingSink;

impl SlotList {
    /// Check every structural invariant, logging failures via [`TracingSink`].
    ///
    /// # Errors
    ///
    /// [`ListError::Corrupt`] on the first violated invariant, or
    /// [`ListError::AllocFailed`] if scratch space cannot be allocated.
    pub fn verify(&self) -> Result<(), ListError> {
        self.verify_with(&mut TracingSink)
    }

    /// Check every structural invariant, handing a snapshot of the list to
    /// `sink` if one is violated.
    pub fn verify_with(&self, sink: &mut dyn SnapshotSink) -> Result<(), ListError> {
        let snapshot = self.snapshot();
        match verify_snapshot(&snapshot, self.config.initial_capacity) {
            Err(ListError::Corrupt(violation)) => {
                sink.report(&snapshot, &violation);
                Err(ListError::Corrupt(violation))
            }
            other => other,
        }
    }
}

/// Verify raw list storage against the full invariant set.
///
/// `min_capacity` is the configured initial capacity. The snapshot need not
/// come from a [`SlotList`]; visualizers and tests may build one over
/// arbitrary arrays.
pub fn verify_snapshot(snapshot: &ListSnapshot<'_>, min_capacity: usize) -> Result<(), ListError> {
    let capacity = snapshot.capacity();
    let (data, prev) = (snapshot.data().len(), snapshot.prev().len());
    if data != capacity || prev != capacity {
        return Err(Violation::ArrayLengthMismatch {
            data,
            next: capacity,
            prev,
        }
        .into());
    }
    let minimum = min_capacity.max(1);
    if capacity < minimum {
        return Err(Violation::CapacityTooSmall { capacity, minimum }.into());
    }

    let mut on_ring = scratch_bitset(capacity)?;
    let mut on_free = scratch_bitset(capacity)?;

    let live = walk_ring(snapshot, &mut on_ring)?;
    let free = walk_free_chain(snapshot, &on_ring, &mut on_free)?;

    let expected = capacity - 1;
    if live + free != expected {
        return Err(Violation::PartitionMismatch {
            live,
            free,
            expected,
        }
        .into());
    }
    Ok(())
}

fn scratch_bitset(len: usize) -> Result<Vec<bool>, ListError> {
    let mut bits = Vec::new();
    bits.try_reserve_exact(len)
        .map_err(|_| ListError::AllocFailed { requested: len })?;
    bits.resize(len, false);
    Ok(bits)
}

/// Walk the ring from the head, marking each live slot. Returns the count.
fn walk_ring(snapshot: &ListSnapshot<'_>, on_ring: &mut [bool]) -> Result<usize, Violation> {
    let (next, prev) = (snapshot.next(), snapshot.prev());
    let capacity = next.len();
    let (size, head, tail) = (snapshot.size(), snapshot.head(), snapshot.tail());

    if size == 0 || head == 0 || tail == 0 {
        if size == 0 && head == 0 && tail == 0 {
            return Ok(0);
        }
        return Err(Violation::SentinelEndpoints { size, head, tail });
    }
    for end in [head, tail] {
        if end >= capacity {
            return Err(Violation::LiveOutOfRange { index: end });
        }
        if prev[end] == FREE_MARK {
            return Err(Violation::LiveMarkedFree { index: end });
        }
    }
    if prev[head] != tail || next[tail] != head {
        return Err(Violation::RingNotClosed { head, tail });
    }

    let mut counted = 0;
    let mut cur = head;
    for _ in 0..capacity {
        if cur == 0 || cur >= capacity {
            return Err(Violation::LiveOutOfRange { index: cur });
        }
        if prev[cur] == FREE_MARK {
            return Err(Violation::LiveMarkedFree { index: cur });
        }
        if on_ring[cur] {
            return Err(Violation::RingRevisit { index: cur });
        }
        on_ring[cur] = true;
        counted += 1;

        let (left, right) = (prev[cur], next[cur]);
        let linked = |i: usize| i != 0 && i < capacity;
        if !linked(left) || !linked(right) || next[left] != cur || prev[right] != cur {
            return Err(Violation::LinkMismatch { index: cur });
        }

        if cur == tail {
            if counted != size {
                return Err(Violation::SizeMismatch { counted, size });
            }
            return Ok(counted);
        }
        cur = right;
    }
    Err(Violation::RingOverrun)
}

/// Walk the free chain, marking each free slot. Returns the count.
fn walk_free_chain(
    snapshot: &ListSnapshot<'_>,
    on_ring: &[bool],
    on_free: &mut [bool],
) -> Result<usize, Violation> {
    let (next, prev) = (snapshot.next(), snapshot.prev());
    let capacity = next.len();

    let mut free = 0;
    let mut cur = snapshot.free_head();
    for _ in 0..capacity {
        if cur == 0 {
            return Ok(free);
        }
        if cur >= capacity {
            return Err(Violation::FreeOutOfRange { index: cur });
        }
        if on_ring[cur] {
            return Err(Violation::FreeOverlapsLive { index: cur });
        }
        if prev[cur] != FREE_MARK {
            return Err(Violation::FreeNotMarked { index: cur });
        }
        if on_free[cur] {
            return Err(Violation::FreeRevisit { index: cur });
        }
        on_free[cur] = true;
        free += 1;
        cur = next[cur];
    }
    Err(Violation::FreeOverrun)
}
