//! Random operation sequences for property tests.
//!
//! Operations address existing elements by ring position (a proptest
//! [`Index`]) rather than by slot, so every generated sequence is valid
//! regardless of how earlier operations shuffled the slots.

use proptest::prelude::*;
use proptest::sample::Index;
use slotring_core::{ListElem, ListError};
use slotring_list::SlotList;

use crate::ReferenceModel;

/// One mutating list operation.
#[derive(Clone, Debug)]
pub enum Op {
    PushFront(ListElem),
    PushBack(ListElem),
    /// Insert after the element at ring position `at` (front if empty).
    InsertAfter { at: Index, value: ListElem },
    /// Insert before the element at ring position `at` (back if empty).
    InsertBefore { at: Index, value: ListElem },
    /// Delete the element at ring position `at` (no-op if empty).
    Delete { at: Index },
    Linearize,
}

/// Strategy for a single operation, biased towards inserts and deletes.
pub fn arb_op() -> impl Strategy<Value = Op> {
    let value = -1_000i64..1_000;
    prop_oneof![
        3 => value.clone().prop_map(Op::PushFront),
        3 => value.clone().prop_map(Op::PushBack),
        2 => (any::<Index>(), value.clone())
            .prop_map(|(at, value)| Op::InsertAfter { at, value }),
        2 => (any::<Index>(), value)
            .prop_map(|(at, value)| Op::InsertBefore { at, value }),
        4 => any::<Index>().prop_map(|at| Op::Delete { at }),
        1 => Just(Op::Linearize),
    ]
}

/// Strategy for a sequence of up to `max_len` operations.
pub fn arb_ops(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(arb_op(), 0..max_len)
}

/// Apply `op` to both the list and the model.
pub fn apply(list: &mut SlotList, model: &mut ReferenceModel, op: &Op) -> Result<(), ListError> {
    match op {
        Op::PushFront(value) => {
            let slot = list.push_front(*value)?;
            model.push_front(slot, *value);
        }
        Op::PushBack(value) => {
            let slot = list.push_back(*value)?;
            model.push_back(slot, *value);
        }
        Op::InsertAfter { at, value } => {
            if model.is_empty() {
                let slot = list.insert_after(0, *value)?;
                model.push_front(slot, *value);
            } else {
                let pos = at.index(model.len());
                let slot = list.insert_after(model.slot_at(pos), *value)?;
                model.insert_after(pos, slot, *value);
            }
        }
        Op::InsertBefore { at, value } => {
            if model.is_empty() {
                let slot = list.insert_before(0, *value)?;
                model.push_back(slot, *value);
            } else {
                let pos = at.index(model.len());
                let slot = list.insert_before(model.slot_at(pos), *value)?;
                model.insert_before(pos, slot, *value);
            }
        }
        Op::Delete { at } => {
            if !model.is_empty() {
                let pos = at.index(model.len());
                list.delete(model.slot_at(pos))?;
                model.remove(pos);
            }
        }
        Op::Linearize => {
            list.linearize()?;
            model.linearize();
        }
    }
    Ok(())
}
