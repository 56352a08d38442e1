//! Intrusive free chain threaded through `next`.
//!
//! Free slots carry [`FREE_MARK`] in `prev` and link to the next free slot
//! (or 0) in `next`. The chain is LIFO: the most recently released slot is
//! the next one handed out.

use slotring_core::{ListConfig, ListError, FREE_MARK};

use crate::store::SlotStore;

impl SlotStore {
    /// Whether `index` is on the free chain. Slot 0 is never free.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the capacity.
    pub(crate) fn is_free(&self, index: usize) -> bool {
        index != 0 && self.prev[index] == FREE_MARK
    }

    /// Make sure at least one free slot exists, growing if necessary.
    pub(crate) fn reserve_slot(&mut self, config: &ListConfig) -> Result<(), ListError> {
        if self.free_head != 0 {
            return Ok(());
        }
        self.grow(config)
    }

    /// Pop the head of the free chain and count it as live.
    ///
    /// The slot comes back unlinked (`next` and `prev` both 0); the caller
    /// splices it into the ring. Requires `free_head != 0`.
    pub(crate) fn acquire(&mut self) -> usize {
        debug_assert_ne!(self.free_head, 0, "acquire on exhausted free chain");
        let index = self.free_head;
        self.free_head = self.next[index];
        self.next[index] = 0;
        self.prev[index] = 0;
        self.size += 1;
        index
    }

    /// Push `index` onto the free chain and zero its payload.
    ///
    /// The caller must already have unlinked it from the ring.
    pub(crate) fn release(&mut self, index: usize) {
        debug_assert_ne!(index, 0, "sentinel cannot be released");
        self.data[index] = 0;
        self.prev[index] = FREE_MARK;
        self.next[index] = self.free_head;
        self.free_head = index;
        self.size -= 1;
    }
}
