//! Parallel-array slot storage and capacity growth.
//!
//! [`SlotStore`] owns the `data`, `next`, and `prev` arrays plus the
//! `size` and `free_head` scalars. All three arrays always have the same
//! length (the capacity). Every reallocation reserves memory for all three
//! arrays before touching any of them, so a failed allocation leaves the
//! store exactly as it was.

use slotring_core::{ListConfig, ListElem, ListError, ListSnapshot, FREE_MARK};

/// Raw storage for one list.
#[derive(Clone, Debug)]
pub(crate) struct SlotStore {
    pub(crate) data: Vec<ListElem>,
    pub(crate) next: Vec<usize>,
    pub(crate) prev: Vec<usize>,
    /// Live slots, sentinel excluded.
    pub(crate) size: usize,
    /// First slot of the free chain, or 0 when every slot is live.
    pub(crate) free_head: usize,
}

impl SlotStore {
    /// An empty store: sentinel at 0, slots `1..capacity` on the free chain.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        Self::packed(capacity, 0, || 0)
    }

    /// Build a store whose first `len` slots after the sentinel form the
    /// ring `1 → 2 → … → len → 1`, taking values from `values` in order.
    /// Slots `len+1..capacity` form the free chain in ascending order.
    ///
    /// Requires `len < capacity`.
    pub(crate) fn packed(
        capacity: usize,
        len: usize,
        mut values: impl FnMut() -> ListElem,
    ) -> Result<Self, ListError> {
        debug_assert!(len < capacity);
        let mut data = Vec::new();
        let mut next = Vec::new();
        let mut prev = Vec::new();
        reserve(&mut data, capacity, capacity)?;
        reserve(&mut next, capacity, capacity)?;
        reserve(&mut prev, capacity, capacity)?;

        // Sentinel: head is 1 and tail is `len`, or both 0 when empty.
        data.push(0);
        next.push(if len > 0 { 1 } else { 0 });
        prev.push(len);

        for k in 1..=len {
            data.push(values());
            next.push(if k == len { 1 } else { k + 1 });
            prev.push(if k == 1 { len } else { k - 1 });
        }

        for k in len + 1..capacity {
            data.push(0);
            next.push(if k + 1 < capacity { k + 1 } else { 0 });
            prev.push(FREE_MARK);
        }

        let free_head = if len + 1 < capacity { len + 1 } else { 0 };
        Ok(Self {
            data,
            next,
            prev,
            size: len,
            free_head,
        })
    }

    /// Total slot count, sentinel included.
    pub(crate) fn capacity(&self) -> usize {
        self.next.len()
    }

    /// Borrow the storage as a read-only snapshot.
    pub(crate) fn snapshot(&self) -> ListSnapshot<'_> {
        ListSnapshot::new(
            &self.data,
            &self.next,
            &self.prev,
            self.size,
            self.free_head,
        )
    }

    /// Double the capacity (clamped to `config.max_capacity`) and push the
    /// new slots onto the front of the free chain.
    ///
    /// New slots `old_cap..new_cap` are threaded in ascending order and the
    /// last one links to the previous `free_head` (usually 0, since growth
    /// only happens once the chain is exhausted).
    ///
    /// # Errors
    ///
    /// - [`ListError::CapacityExceeded`] if the store is already at the
    ///   configured ceiling.
    /// - [`ListError::AllocFailed`] if doubling overflows or the allocator
    ///   refuses. The store is unchanged in both cases.
    pub(crate) fn grow(&mut self, config: &ListConfig) -> Result<(), ListError> {
        let old_cap = self.capacity();
        let new_cap = match config.grown_capacity(old_cap) {
            Some(cap) => cap,
            None => {
                return Err(match config.max_capacity {
                    Some(max_capacity) if max_capacity <= old_cap => {
                        ListError::CapacityExceeded { max_capacity }
                    }
                    _ => ListError::AllocFailed {
                        requested: old_cap.saturating_mul(2),
                    },
                })
            }
        };

        let additional = new_cap - old_cap;
        reserve(&mut self.data, additional, new_cap)?;
        reserve(&mut self.next, additional, new_cap)?;
        reserve(&mut self.prev, additional, new_cap)?;

        self.data.resize(new_cap, 0);
        self.next
            .extend((old_cap + 1..new_cap).chain(std::iter::once(self.free_head)));
        self.prev.resize(new_cap, FREE_MARK);
        self.free_head = old_cap;

        tracing::debug!(old_cap, new_cap, "slot store grew");
        Ok(())
    }
}

/// Reserve room for `additional` more elements, mapping allocator refusal
/// to [`ListError::AllocFailed`] with the total slot count being built.
fn reserve<T>(vec: &mut Vec<T>, additional: usize, requested: usize) -> Result<(), ListError> {
    vec.try_reserve_exact(additional)
        .map_err(|_| ListError::AllocFailed { requested })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_threads_every_slot_onto_free_chain() {
        let store = SlotStore::with_capacity(4).unwrap();
        assert_eq!(store.capacity(), 4);
        assert_eq!(store.size, 0);
        assert_eq!(store.free_head, 1);
        assert_eq!(store.next, vec![0, 2, 3, 0]);
        assert_eq!(store.prev, vec![0, FREE_MARK, FREE_MARK, FREE_MARK]);
        assert_eq!(store.data, vec![0; 4]);
    }

    #[test]
    fn two_slot_store_has_single_free_slot() {
        let store = SlotStore::with_capacity(2).unwrap();
        assert_eq!(store.free_head, 1);
        assert_eq!(store.next, vec![0, 0]);
        assert_eq!(store.prev, vec![0, FREE_MARK]);
    }

    #[test]
    fn packed_builds_ring_and_tail_free_chain() {
        let mut values = [7, 8, 9].into_iter();
        let store = SlotStore::packed(6, 3, || values.next().unwrap()).unwrap();
        assert_eq!(store.data, vec![0, 7, 8, 9, 0, 0]);
        assert_eq!(store.next, vec![1, 2, 3, 1, 5, 0]);
        assert_eq!(store.prev, vec![3, 3, 1, 2, FREE_MARK, FREE_MARK]);
        assert_eq!(store.size, 3);
        assert_eq!(store.free_head, 4);
    }

    #[test]
    fn packed_full_store_has_empty_free_chain() {
        let mut values = [1, 2, 3].into_iter();
        let store = SlotStore::packed(4, 3, || values.next().unwrap()).unwrap();
        assert_eq!(store.free_head, 0);
        assert_eq!(store.next, vec![1, 2, 3, 1]);
        assert_eq!(store.prev, vec![3, 3, 1, 2]);
    }

    #[test]
    fn grow_doubles_and_prepends_new_slots() {
        let mut store = SlotStore::with_capacity(4).unwrap();
        // Pretend every slot is live so the chain is empty.
        store.free_head = 0;
        store.grow(&ListConfig::default()).unwrap();

        assert_eq!(store.capacity(), 8);
        assert_eq!(store.free_head, 4);
        assert_eq!(&store.next[4..], &[5, 6, 7, 0]);
        assert!(store.prev[4..].iter().all(|&p| p == FREE_MARK));
        assert!(store.data[4..].iter().all(|&v| v == 0));
    }

    #[test]
    fn grow_links_last_new_slot_to_old_free_head() {
        let mut store = SlotStore::with_capacity(4).unwrap();
        store.grow(&ListConfig::default()).unwrap();
        // Old chain 1 → 2 → 3 hangs off the new segment.
        assert_eq!(store.free_head, 4);
        assert_eq!(store.next[7], 1);
    }

    #[test]
    fn grow_clamps_to_max_capacity() {
        let config = ListConfig::new(4).with_max_capacity(6);
        let mut store = SlotStore::with_capacity(4).unwrap();
        store.free_head = 0;
        store.grow(&config).unwrap();
        assert_eq!(store.capacity(), 6);
        assert_eq!(&store.next[4..], &[5, 0]);
    }

    #[test]
    fn grow_at_ceiling_fails_and_leaves_store_unchanged() {
        let config = ListConfig::new(4).with_max_capacity(4);
        let mut store = SlotStore::with_capacity(4).unwrap();
        let before = store.clone();

        let err = store.grow(&config).unwrap_err();
        assert_eq!(err, ListError::CapacityExceeded { max_capacity: 4 });
        assert_eq!(store.next, before.next);
        assert_eq!(store.prev, before.prev);
        assert_eq!(store.free_head, before.free_head);
    }

    #[test]
    fn snapshot_mirrors_storage() {
        let store = SlotStore::with_capacity(4).unwrap();
        let snap = store.snapshot();
        assert_eq!(snap.capacity(), 4);
        assert_eq!(snap.free_head(), 1);
        assert_eq!(snap.size(), 0);
        assert_eq!(snap.next(), store.next.as_slice());
    }
}
