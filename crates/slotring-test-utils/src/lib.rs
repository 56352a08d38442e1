//! Test utilities for slotring development.
//!
//! Provides raw-index walkers over a [`SlotList`], a [`RecordingSink`]
//! that captures verification failures, a [`ReferenceModel`] to check
//! operation sequences against, and the fixtures and proptest strategies
//! in [`fixtures`] and [`ops`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod ops;

use slotring_core::{ListElem, ListSnapshot, SnapshotSink, Violation};
use slotring_list::SlotList;

/// Slot indices in ring order, starting at the head.
///
/// Walks exactly `len()` steps through `read_next`; panics on a bad index,
/// which in a test means the list is broken.
pub fn ring_slots(list: &SlotList) -> Vec<usize> {
    let mut out = Vec::with_capacity(list.len());
    let mut cur = list.read_head();
    for _ in 0..list.len() {
        out.push(cur);
        cur = list.read_next(cur).expect("ring slot must be live");
    }
    out
}

/// Values in ring order, starting at the head.
pub fn values(list: &SlotList) -> Vec<ListElem> {
    ring_slots(list)
        .into_iter()
        .map(|i| list.read_value(i).expect("ring slot must be live"))
        .collect()
}

/// Values in reverse ring order, walking `read_prev` from the tail.
pub fn values_rev(list: &SlotList) -> Vec<ListElem> {
    let mut out = Vec::with_capacity(list.len());
    let mut cur = list.read_tail();
    for _ in 0..list.len() {
        out.push(list.read_value(cur).expect("ring slot must be live"));
        cur = list.read_prev(cur).expect("ring slot must be live");
    }
    out
}

/// Free-chain slots in chain order, bounded by capacity.
pub fn free_slots(list: &SlotList) -> Vec<usize> {
    let snap = list.snapshot();
    let mut out = Vec::new();
    let mut cur = snap.free_head();
    while cur != 0 && out.len() < snap.capacity() {
        out.push(cur);
        cur = snap.next()[cur];
    }
    out
}

/// A captured verification failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub violation: Violation,
    pub size: usize,
    pub capacity: usize,
    pub head: usize,
    pub tail: usize,
    pub free_head: usize,
}

/// Sink that records every report it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub reports: Vec<Report>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotSink for RecordingSink {
    fn report(&mut self, snapshot: &ListSnapshot<'_>, violation: &Violation) {
        self.reports.push(Report {
            violation: violation.clone(),
            size: snapshot.size(),
            capacity: snapshot.capacity(),
            head: snapshot.head(),
            tail: snapshot.tail(),
            free_head: snapshot.free_head(),
        });
    }
}

/// Logical contents of a list: `(slot, value)` pairs in ring order.
///
/// Mirrors every operation so tests can compare both the value sequence
/// and the slot each value is expected to occupy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceModel {
    entries: Vec<(usize, ListElem)>,
}

impl ReferenceModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slot at ring position `pos`.
    pub fn slot_at(&self, pos: usize) -> usize {
        self.entries[pos].0
    }

    pub fn values(&self) -> Vec<ListElem> {
        self.entries.iter().map(|&(_, v)| v).collect()
    }

    pub fn slots(&self) -> Vec<usize> {
        self.entries.iter().map(|&(s, _)| s).collect()
    }

    pub fn push_front(&mut self, slot: usize, value: ListElem) {
        self.entries.insert(0, (slot, value));
    }

    pub fn push_back(&mut self, slot: usize, value: ListElem) {
        self.entries.push((slot, value));
    }

    /// Insert after ring position `pos`.
    pub fn insert_after(&mut self, pos: usize, slot: usize, value: ListElem) {
        self.entries.insert(pos + 1, (slot, value));
    }

    /// Insert before ring position `pos`.
    pub fn insert_before(&mut self, pos: usize, slot: usize, value: ListElem) {
        self.entries.insert(pos, (slot, value));
    }

    pub fn remove(&mut self, pos: usize) -> (usize, ListElem) {
        self.entries.remove(pos)
    }

    /// Renumber slots to `1..=len`, as linearization does.
    pub fn linearize(&mut self) {
        for (k, entry) in self.entries.iter_mut().enumerate() {
            entry.0 = k + 1;
        }
    }

    /// Assert that `list` holds exactly this model's contents.
    pub fn assert_matches(&self, list: &SlotList) {
        assert_eq!(list.len(), self.len(), "size mismatch");
        assert_eq!(ring_slots(list), self.slots(), "slot order mismatch");
        assert_eq!(values(list), self.values(), "value order mismatch");
        let mut reversed = self.values();
        reversed.reverse();
        assert_eq!(values_rev(list), reversed, "reverse walk mismatch");
        let head = self.entries.first().map_or(0, |&(s, _)| s);
        let tail = self.entries.last().map_or(0, |&(s, _)| s);
        assert_eq!(list.read_head(), head, "head mismatch");
        assert_eq!(list.read_tail(), tail, "tail mismatch");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walkers_agree_on_simple_list() {
        let mut list = SlotList::new().unwrap();
        list.push_back(1).unwrap();
        list.push_back(2).unwrap();
        list.push_front(0).unwrap();
        assert_eq!(values(&list), vec![0, 1, 2]);
        assert_eq!(values_rev(&list), vec![2, 1, 0]);
        assert_eq!(ring_slots(&list), vec![3, 1, 2]);
        assert!(free_slots(&list).is_empty());
    }

    #[test]
    fn model_tracks_pushes() {
        let mut list = SlotList::new().unwrap();
        let mut model = ReferenceModel::new();
        let a = list.push_back(5).unwrap();
        model.push_back(a, 5);
        let b = list.push_front(4).unwrap();
        model.push_front(b, 4);
        model.assert_matches(&list);
    }

    #[test]
    fn recording_sink_captures_counters() {
        let data = [0, 1, 0, 0];
        let next = [1, 1, 3, 0];
        let prev = [1, 0, slotring_core::FREE_MARK, slotring_core::FREE_MARK];
        let snap = ListSnapshot::new(&data, &next, &prev, 1, 2);
        let mut sink = RecordingSink::new();
        sink.report(&snap, &Violation::RingNotClosed { head: 1, tail: 1 });
        assert_eq!(sink.reports.len(), 1);
        assert_eq!(sink.reports[0].capacity, 4);
        assert_eq!(sink.reports[0].free_head, 2);
    }
}
