//! Read-only view of a slot list's raw storage.
//!
//! [`ListSnapshot`] borrows the three parallel arrays and the scalar
//! bookkeeping of a list. It is what the verifier hands to a
//! [`SnapshotSink`](crate::SnapshotSink) on failure and what external
//! visualizers render. The view performs no validation: a snapshot of a
//! corrupt list shows the corruption as-is.

use crate::config::{ListElem, FREE_MARK};

/// Classification of a single slot, derived from its markers alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotState {
    /// Slot 0, carrying `head` in `next` and `tail` in `prev`.
    Sentinel,
    /// Any non-zero slot whose `prev` is not [`FREE_MARK`].
    Live,
    /// A non-zero slot whose `prev` is [`FREE_MARK`].
    Free,
}

/// Borrowed view of `(data, next, prev, size, capacity, free_head)`.
///
/// Stable for the lifetime `'a`, which ties it to a shared borrow of the
/// list: no mutation can happen while a snapshot exists.
#[derive(Clone, Copy, Debug)]
pub struct ListSnapshot<'a> {
    data: &'a [ListElem],
    next: &'a [usize],
    prev: &'a [usize],
    size: usize,
    free_head: usize,
}

impl<'a> ListSnapshot<'a> {
    /// Create a snapshot over raw parts.
    pub fn new(
        data: &'a [ListElem],
        next: &'a [usize],
        prev: &'a [usize],
        size: usize,
        free_head: usize,
    ) -> Self {
        Self {
            data,
            next,
            prev,
            size,
            free_head,
        }
    }

    /// Payload array, one entry per slot.
    pub fn data(&self) -> &'a [ListElem] {
        self.data
    }

    /// Successor array (`next[0]` is the head).
    pub fn next(&self) -> &'a [usize] {
        self.next
    }

    /// Predecessor array (`prev[0]` is the tail, free slots hold [`FREE_MARK`]).
    pub fn prev(&self) -> &'a [usize] {
        self.prev
    }

    /// Number of live slots.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total slot count, sentinel included.
    ///
    /// Taken from the `next` array; a snapshot of a list whose arrays
    /// disagree in length reports the `next` length.
    pub fn capacity(&self) -> usize {
        self.next.len()
    }

    /// First slot of the free chain, or 0 if none.
    pub fn free_head(&self) -> usize {
        self.free_head
    }

    /// First live slot, or 0 when empty.
    pub fn head(&self) -> usize {
        self.next.first().copied().unwrap_or(0)
    }

    /// Last live slot, or 0 when empty.
    pub fn tail(&self) -> usize {
        self.prev.first().copied().unwrap_or(0)
    }

    /// State of slot `index`, or `None` if it is out of range.
    pub fn slot_state(&self, index: usize) -> Option<SlotState> {
        let prev = *self.prev.get(index)?;
        Some(if index == 0 {
            SlotState::Sentinel
        } else if prev == FREE_MARK {
            SlotState::Free
        } else {
            SlotState::Live
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_four_slot_layout() {
        let data = [0; 4];
        let next = [0, 2, 3, 0];
        let prev = [0, FREE_MARK, FREE_MARK, FREE_MARK];
        let snap = ListSnapshot::new(&data, &next, &prev, 0, 1);

        assert_eq!(snap.capacity(), 4);
        assert_eq!(snap.head(), 0);
        assert_eq!(snap.tail(), 0);
        assert_eq!(snap.free_head(), 1);
        assert_eq!(snap.slot_state(0), Some(SlotState::Sentinel));
        assert_eq!(snap.slot_state(3), Some(SlotState::Free));
        assert_eq!(snap.slot_state(4), None);
    }

    #[test]
    fn single_live_slot() {
        let data = [0, 10, 0, 0];
        let next = [1, 1, 3, 0];
        let prev = [1, 1, FREE_MARK, FREE_MARK];
        let snap = ListSnapshot::new(&data, &next, &prev, 1, 2);

        assert_eq!(snap.head(), 1);
        assert_eq!(snap.tail(), 1);
        assert_eq!(snap.slot_state(1), Some(SlotState::Live));
        assert_eq!(snap.data()[1], 10);
    }
}
