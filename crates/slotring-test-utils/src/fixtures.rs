//! Prebuilt lists in interesting physical layouts.

use slotring_core::ListElem;
use slotring_list::SlotList;

/// A list holding `values` in ring order via repeated `push_back`.
///
/// With the default config the result is already linearized.
pub fn filled_list(values: &[ListElem]) -> SlotList {
    let mut list = SlotList::new().expect("default config is valid");
    for &v in values {
        list.push_back(v).expect("push into unbounded list");
    }
    list
}

/// A list holding `values` in ring order whose slots run backwards and
/// skip every other index, with the gaps on the free chain.
///
/// Built by prepending each value together with a filler, then deleting
/// the fillers. For two or more values the result is not linearized.
pub fn scattered_list(values: &[ListElem]) -> SlotList {
    let mut list = SlotList::new().expect("default config is valid");
    let mut fillers = Vec::with_capacity(values.len());
    for &v in values.iter().rev() {
        list.push_front(v).expect("push into unbounded list");
        fillers.push(list.push_front(-1).expect("push into unbounded list"));
    }
    for slot in fillers {
        list.delete(slot).expect("filler is live");
    }
    list
}
