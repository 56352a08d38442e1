//! Circular doubly-linked ring of live slots, anchored at the sentinel.
//!
//! `next[0]` is the head and `prev[0]` the tail; both are 0 when the ring
//! is empty. A non-empty ring closes on itself (`next[tail] = head`,
//! `prev[head] = tail`), so the sentinel is never a neighbour of a live
//! slot and splicing needs no "first element" branches.

use crate::store::SlotStore;

impl SlotStore {
    /// First live slot, or 0 when empty.
    pub(crate) fn head(&self) -> usize {
        self.next[0]
    }

    /// Last live slot, or 0 when empty.
    pub(crate) fn tail(&self) -> usize {
        self.prev[0]
    }

    /// Link freshly acquired slot `n` right after `anchor` in ring order.
    /// `anchor == 0` places it at the front.
    pub(crate) fn link_after(&mut self, anchor: usize, n: usize) {
        let (head, tail) = (self.head(), self.tail());
        if head == 0 {
            self.link_singleton(n);
        } else if anchor == 0 {
            self.splice(n, tail, head);
            self.next[0] = n;
        } else {
            let right = self.next[anchor];
            self.splice(n, anchor, right);
            if anchor == tail {
                self.prev[0] = n;
            }
        }
    }

    /// Link freshly acquired slot `n` right before `anchor` in ring order.
    /// `anchor == 0` places it at the back.
    pub(crate) fn link_before(&mut self, anchor: usize, n: usize) {
        let (head, tail) = (self.head(), self.tail());
        if head == 0 {
            self.link_singleton(n);
        } else if anchor == 0 {
            self.splice(n, tail, head);
            self.prev[0] = n;
        } else {
            let left = self.prev[anchor];
            self.splice(n, left, anchor);
            if anchor == head {
                self.next[0] = n;
            }
        }
    }

    /// Remove live slot `i` from the ring, moving the endpoints off it.
    /// Does not release the slot.
    pub(crate) fn unlink(&mut self, i: usize) {
        let (left, right) = (self.prev[i], self.next[i]);
        if right == i {
            // Last element: the ring becomes empty.
            self.next[0] = 0;
            self.prev[0] = 0;
            return;
        }
        self.next[left] = right;
        self.prev[right] = left;
        if self.head() == i {
            self.next[0] = right;
        }
        if self.tail() == i {
            self.prev[0] = left;
        }
    }

    fn link_singleton(&mut self, n: usize) {
        self.next[n] = n;
        self.prev[n] = n;
        self.next[0] = n;
        self.prev[0] = n;
    }

    fn splice(&mut self, n: usize, left: usize, right: usize) {
        self.next[left] = n;
        self.prev[n] = left;
        self.next[n] = right;
        self.prev[right] = n;
    }
}
