//! The public slot list: index validation over the ring and free chain.
//!
//! All operations take raw slot indices. Index 0 names the sentinel and is
//! accepted wherever an anchor is expected (`insert_after(0, ..)` inserts
//! at the front, `insert_before(0, ..)` at the back). Every other index must
//! be live. Failing operations leave the list exactly as it was.

use slotring_core::{ListConfig, ListElem, ListError, ListSnapshot};

use crate::store::SlotStore;

/// Arena-backed circular doubly-linked list of [`ListElem`] values.
///
/// # Example
///
/// ```rust
/// use slotring_list::SlotList;
///
/// let mut list = SlotList::new().unwrap();
/// let a = list.push_back(10).unwrap();
/// let b = list.push_back(30).unwrap();
/// let m = list.insert_after(a, 20).unwrap();
///
/// assert_eq!(list.read_head(), a);
/// assert_eq!(list.read_next(m).unwrap(), b);
/// assert_eq!(list.read_value(m).unwrap(), 20);
/// list.verify().unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct SlotList {
    pub(crate) store: SlotStore,
    pub(crate) config: ListConfig,
}

impl SlotList {
    /// Create an empty list with [`ListConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`ListError::AllocFailed`] if the initial arrays cannot be
    /// allocated.
    pub fn new() -> Result<Self, ListError> {
        Self::with_config(ListConfig::default())
    }

    /// Create an empty list with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidConfig`] if `config` fails validation,
    /// or [`ListError::AllocFailed`] if the arrays cannot be allocated.
    pub fn with_config(config: ListConfig) -> Result<Self, ListError> {
        config.validate()?;
        let store = SlotStore::with_capacity(config.initial_capacity)?;
        Ok(Self { store, config })
    }

    /// The configuration this list was created with.
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Number of live slots.
    pub fn len(&self) -> usize {
        self.store.size
    }

    /// Whether the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.store.size == 0
    }

    /// Total slot count, sentinel included.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// First slot of the free chain, or 0 if the next insert must grow.
    pub fn free_head(&self) -> usize {
        self.store.free_head
    }

    /// Borrow the raw storage for inspection or rendering.
    pub fn snapshot(&self) -> ListSnapshot<'_> {
        self.store.snapshot()
    }

    /// Value stored at live slot `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::SentinelSlot`] for index 0, otherwise see
    /// [`read_next`](Self::read_next).
    pub fn read_value(&self, index: usize) -> Result<ListElem, ListError> {
        self.check_value_slot(index)?;
        Ok(self.store.data[index])
    }

    /// Successor of `index` in ring order. `read_next(0)` is the head.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] or [`ListError::FreeSlot`].
    pub fn read_next(&self, index: usize) -> Result<usize, ListError> {
        self.check_anchor(index)?;
        Ok(self.store.next[index])
    }

    /// Predecessor of `index` in ring order. `read_prev(0)` is the tail.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] or [`ListError::FreeSlot`].
    pub fn read_prev(&self, index: usize) -> Result<usize, ListError> {
        self.check_anchor(index)?;
        Ok(self.store.prev[index])
    }

    /// First live slot, or 0 when empty.
    pub fn read_head(&self) -> usize {
        self.store.head()
    }

    /// Last live slot, or 0 when empty.
    pub fn read_tail(&self) -> usize {
        self.store.tail()
    }

    /// Insert `value` immediately after `index` and return its slot.
    ///
    /// `index == 0` inserts at the front. Grows the store if no free slot
    /// is left.
    ///
    /// # Errors
    ///
    /// - [`ListError::IndexOutOfRange`] / [`ListError::FreeSlot`] for a bad
    ///   anchor.
    /// - [`ListError::AllocFailed`] / [`ListError::CapacityExceeded`] if
    ///   growth was needed and failed.
    pub fn insert_after(&mut self, index: usize, value: ListElem) -> Result<usize, ListError> {
        self.check_anchor(index)?;
        let n = self.acquire_with(value)?;
        self.store.link_after(index, n);
        tracing::trace!(anchor = index, slot = n, value, "insert_after");
        Ok(n)
    }

    /// Insert `value` immediately before `index` and return its slot.
    ///
    /// `index == 0` inserts at the back. Errors as for
    /// [`insert_after`](Self::insert_after).
    pub fn insert_before(&mut self, index: usize, value: ListElem) -> Result<usize, ListError> {
        self.check_anchor(index)?;
        let n = self.acquire_with(value)?;
        self.store.link_before(index, n);
        tracing::trace!(anchor = index, slot = n, value, "insert_before");
        Ok(n)
    }

    /// Remove live slot `index` and return it to the free chain.
    ///
    /// # Errors
    ///
    /// [`ListError::SentinelSlot`] for index 0, [`ListError::IndexOutOfRange`]
    /// or [`ListError::FreeSlot`] otherwise.
    pub fn delete(&mut self, index: usize) -> Result<(), ListError> {
        self.check_value_slot(index)?;
        self.store.unlink(index);
        self.store.release(index);
        tracing::trace!(slot = index, "delete");
        Ok(())
    }

    /// Insert at the front and return the new slot.
    pub fn push_front(&mut self, value: ListElem) -> Result<usize, ListError> {
        self.insert_after(0, value)
    }

    /// Insert at the back and return the new slot.
    pub fn push_back(&mut self, value: ListElem) -> Result<usize, ListError> {
        self.insert_before(0, value)
    }

    /// Take a slot off the free chain (growing first if needed) and store
    /// `value` in it. The slot is not yet linked.
    fn acquire_with(&mut self, value: ListElem) -> Result<usize, ListError> {
        self.store.reserve_slot(&self.config)?;
        let n = self.store.acquire();
        self.store.data[n] = value;
        Ok(n)
    }

    /// Accept the sentinel or any live slot.
    fn check_anchor(&self, index: usize) -> Result<(), ListError> {
        let capacity = self.store.capacity();
        if index >= capacity {
            return Err(ListError::IndexOutOfRange { index, capacity });
        }
        if self.store.is_free(index) {
            return Err(ListError::FreeSlot { index });
        }
        Ok(())
    }

    /// Accept only live slots.
    fn check_value_slot(&self, index: usize) -> Result<(), ListError> {
        if index == 0 {
            return Err(ListError::SentinelSlot);
        }
        self.check_anchor(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotring_core::{ErrorKind, FREE_MARK};

    fn values(list: &SlotList) -> Vec<ListElem> {
        let mut out = Vec::new();
        let mut cur = list.read_head();
        for _ in 0..list.len() {
            out.push(list.read_value(cur).unwrap());
            cur = list.read_next(cur).unwrap();
        }
        out
    }

    #[test]
    fn new_list_is_empty() {
        let list = SlotList::new().unwrap();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 4);
        assert_eq!(list.read_head(), 0);
        assert_eq!(list.read_tail(), 0);
        assert_eq!(list.free_head(), 1);
    }

    #[test]
    fn invalid_config_rejected() {
        let err = SlotList::with_config(ListConfig::new(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadArg);
    }

    #[test]
    fn push_front_into_empty_returns_slot_one() {
        let mut list = SlotList::new().unwrap();
        assert_eq!(list.push_front(10).unwrap(), 1);
        assert_eq!((list.read_head(), list.read_tail()), (1, 1));
        assert_eq!(list.read_next(1).unwrap(), 1);
        assert_eq!(list.read_prev(1).unwrap(), 1);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn front_and_back() {
        let mut list = SlotList::new().unwrap();
        assert_eq!(list.push_front(10).unwrap(), 1);
        assert_eq!(list.push_back(20).unwrap(), 2);
        assert_eq!(values(&list), vec![10, 20]);
        assert_eq!(list.read_prev(1).unwrap(), 2);
        assert_eq!(list.read_next(2).unwrap(), 1);
    }

    #[test]
    fn insert_middle_and_delete_endpoints() {
        let mut list = SlotList::new().unwrap();
        list.push_front(10).unwrap();
        list.push_back(20).unwrap();
        assert_eq!(list.insert_after(1, 15).unwrap(), 3);
        assert_eq!(values(&list), vec![10, 15, 20]);

        list.delete(1).unwrap();
        assert_eq!(values(&list), vec![15, 20]);
        assert_eq!(list.read_head(), 3);

        list.delete(2).unwrap();
        assert_eq!(values(&list), vec![15]);
        assert_eq!((list.read_head(), list.read_tail()), (3, 3));
        assert_eq!(list.read_next(3).unwrap(), 3);
        assert_eq!(list.read_prev(3).unwrap(), 3);
    }

    #[test]
    fn insert_before_head_becomes_head() {
        let mut list = SlotList::new().unwrap();
        let a = list.push_back(2).unwrap();
        let b = list.insert_before(a, 1).unwrap();
        assert_eq!(list.read_head(), b);
        assert_eq!(list.read_tail(), a);
        assert_eq!(values(&list), vec![1, 2]);
    }

    #[test]
    fn sentinel_reads_return_endpoints() {
        let mut list = SlotList::new().unwrap();
        let a = list.push_back(1).unwrap();
        let b = list.push_back(2).unwrap();
        assert_eq!(list.read_next(0).unwrap(), a);
        assert_eq!(list.read_prev(0).unwrap(), b);
    }

    #[test]
    fn deleting_only_element_zeroes_endpoints() {
        let mut list = SlotList::new().unwrap();
        let a = list.push_back(5).unwrap();
        list.delete(a).unwrap();
        assert!(list.is_empty());
        assert_eq!((list.read_head(), list.read_tail()), (0, 0));
        assert_eq!(list.snapshot().prev()[a], FREE_MARK);
    }

    #[test]
    fn bad_indices_rejected_without_mutation() {
        let mut list = SlotList::new().unwrap();
        let a = list.push_back(1).unwrap();
        let before = list.snapshot().next().to_vec();

        assert_eq!(
            list.insert_after(4, 9),
            Err(ListError::IndexOutOfRange {
                index: 4,
                capacity: 4
            })
        );
        assert_eq!(list.insert_before(2, 9), Err(ListError::FreeSlot { index: 2 }));
        assert_eq!(list.delete(0), Err(ListError::SentinelSlot));
        assert_eq!(list.delete(3), Err(ListError::FreeSlot { index: 3 }));
        assert_eq!(list.read_value(0), Err(ListError::SentinelSlot));
        assert!(list.read_next(99).is_err());

        assert_eq!(list.snapshot().next(), before.as_slice());
        assert_eq!(list.len(), 1);
        assert_eq!(list.read_value(a).unwrap(), 1);
    }

    #[test]
    fn double_delete_rejected() {
        let mut list = SlotList::new().unwrap();
        let a = list.push_back(1).unwrap();
        list.delete(a).unwrap();
        assert_eq!(list.delete(a), Err(ListError::FreeSlot { index: a }));
    }

    #[test]
    fn growth_is_transparent() {
        let mut list = SlotList::new().unwrap();
        for v in 1..=5 {
            list.push_back(v).unwrap();
        }
        assert_eq!(list.capacity(), 8);
        assert_eq!(values(&list), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn full_list_at_ceiling_fails_atomically() {
        let config = ListConfig::new(4).with_max_capacity(4);
        let mut list = SlotList::with_config(config).unwrap();
        for v in 0..3 {
            list.push_back(v).unwrap();
        }
        let err = list.push_back(3).unwrap_err();
        assert_eq!(err, ListError::CapacityExceeded { max_capacity: 4 });
        assert_eq!(err.kind(), ErrorKind::AllocError);
        assert_eq!(values(&list), vec![0, 1, 2]);
        assert_eq!(list.free_head(), 0);
    }

    #[test]
    fn released_slot_is_reused_first() {
        let mut list = SlotList::new().unwrap();
        let a = list.push_back(1).unwrap();
        list.push_back(2).unwrap();
        list.delete(a).unwrap();
        assert_eq!(list.free_head(), a);
        assert_eq!(list.push_front(3).unwrap(), a);
    }
}
