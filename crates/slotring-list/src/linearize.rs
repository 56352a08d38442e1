//! Compaction of the logical sequence into contiguous slots.
//!
//! After [`SlotList::linearize`] the value at ring position `k` lives in
//! slot `k` (1-based), the ring is `1 → 2 → … → len → 1`, and the free chain
//! is the ascending run `len+1..capacity`. The rebuild goes through a fresh
//! store, so an allocation failure leaves the old one untouched.

use slotring_core::ListError;

use crate::list::SlotList;
use crate::store::SlotStore;

impl SlotList {
    /// Rebuild the list so that ring order equals index order.
    ///
    /// The new capacity is `max(initial_capacity, len + 1)`, so a list that
    /// grew and then shrank gives memory back. Every index obtained before
    /// the call is invalid afterwards: the value that was at ring position
    /// `k` is now at slot `k`.
    ///
    /// # Errors
    ///
    /// [`ListError::AllocFailed`] if the new arrays cannot be allocated; the
    /// list is unchanged.
    pub fn linearize(&mut self) -> Result<(), ListError> {
        let old = &self.store;
        let len = old.size;
        let capacity = self.config.initial_capacity.max(len + 1);

        let mut cur = old.head();
        let store = SlotStore::packed(capacity, len, || {
            let value = old.data[cur];
            cur = old.next[cur];
            value
        })?;

        tracing::debug!(
            len,
            old_capacity = old.capacity(),
            new_capacity = capacity,
            "slot list linearized"
        );
        self.store = store;
        Ok(())
    }

    /// Whether ring order already equals index order `1..=len`.
    ///
    /// An empty list is trivially linearized. Free-chain layout is not
    /// considered.
    pub fn is_linearized(&self) -> bool {
        let store = &self.store;
        let len = store.size;
        if len == 0 {
            return true;
        }
        if store.head() != 1 || store.tail() != len {
            return false;
        }
        (1..len).all(|k| store.next[k] == k + 1) && store.next[len] == 1
    }
}
