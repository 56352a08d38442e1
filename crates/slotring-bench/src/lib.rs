//! Benchmark workloads and the demo script for slotring.
//!
//! - [`HARNESS_SCRIPT`]: the fixed insert/delete sequence replayed by the
//!   `harness_replay` example
//! - [`churn_workload`]: deterministic random insert/delete mix via seed
//! - [`churned_list`]: a list left physically scattered by churn

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt;

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use slotring_core::{ListElem, ListError};
use slotring_list::SlotList;

/// One step of a scripted run, addressed by raw slot index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// `insert_after(anchor, value)`.
    InsertAfter {
        /// Slot to insert after.
        anchor: usize,
        /// Payload.
        value: ListElem,
    },
    /// `insert_before(anchor, value)`.
    InsertBefore {
        /// Slot to insert before.
        anchor: usize,
        /// Payload.
        value: ListElem,
    },
    /// `delete(index)`.
    Delete {
        /// Slot to delete.
        index: usize,
    },
}

impl Step {
    /// Apply this step to `list`.
    pub fn apply(self, list: &mut SlotList) -> Result<(), ListError> {
        match self {
            Step::InsertAfter { anchor, value } => list.insert_after(anchor, value).map(drop),
            Step::InsertBefore { anchor, value } => list.insert_before(anchor, value).map(drop),
            Step::Delete { index } => list.delete(index),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::InsertAfter { anchor, value } => write!(f, "insert {value} after {anchor}"),
            Step::InsertBefore { anchor, value } => write!(f, "insert {value} before {anchor}"),
            Step::Delete { index } => write!(f, "delete index {index}"),
        }
    }
}

const fn after(anchor: usize, value: ListElem) -> Step {
    Step::InsertAfter { anchor, value }
}

const fn before(anchor: usize, value: ListElem) -> Step {
    Step::InsertBefore { anchor, value }
}

const fn delete(index: usize) -> Step {
    Step::Delete { index }
}

/// Demo script for a fresh default list.
///
/// Grows twice (at the 4th and 8th insert), deletes from the middle, the
/// head and the tail, and reuses freed slots in LIFO order.
pub const HARNESS_SCRIPT: [Step; 17] = [
    after(0, 10),
    after(1, 20),
    after(2, 30),
    after(3, 40),
    after(4, 50),
    after(5, 60),
    after(3, 35),
    after(7, 36),
    after(8, 37),
    after(9, 38),
    after(10, 39),
    delete(9),
    before(10, 37),
    delete(1),
    delete(6),
    before(2, 10),
    after(5, 60),
];

/// Apply `steps` in order, stopping at the first error.
pub fn replay(list: &mut SlotList, steps: &[Step]) -> Result<(), ListError> {
    for step in steps {
        step.apply(list)?;
    }
    Ok(())
}

/// One churn operation. `pick` selects a live slot uniformly at run time,
/// so a workload stays valid whatever the list looks like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChurnOp {
    /// Insert after a picked slot (at the front when empty).
    InsertAfter {
        /// Raw draw reduced modulo the live count.
        pick: u64,
        /// Payload.
        value: ListElem,
    },
    /// Insert before a picked slot (at the back when empty).
    InsertBefore {
        /// Raw draw reduced modulo the live count.
        pick: u64,
        /// Payload.
        value: ListElem,
    },
    /// Delete a picked slot (no-op when empty).
    Delete {
        /// Raw draw reduced modulo the live count.
        pick: u64,
    },
}

/// Deterministic churn workload of `ops` operations.
///
/// Half inserts, half deletes, so a prefilled list keeps roughly its size.
pub fn churn_workload(ops: usize, seed: u64) -> Vec<ChurnOp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..ops)
        .map(|_| {
            let pick = rng.next_u64();
            let value = ListElem::from(rng.next_u32() as i32);
            match rng.next_u32() % 4 {
                0 => ChurnOp::InsertAfter { pick, value },
                1 => ChurnOp::InsertBefore { pick, value },
                _ => ChurnOp::Delete { pick },
            }
        })
        .collect()
}

/// Run `ops` against `list`.
///
/// Live slots are collected once from the ring and then tracked alongside
/// the list, so each operation is O(1).
pub fn run_churn(list: &mut SlotList, ops: &[ChurnOp]) -> Result<(), ListError> {
    let mut live = Vec::with_capacity(list.len());
    let mut cur = list.read_head();
    for _ in 0..list.len() {
        live.push(cur);
        cur = list.read_next(cur)?;
    }

    for op in ops {
        match *op {
            ChurnOp::InsertAfter { pick, value } => {
                let anchor = pick_slot(&live, pick).unwrap_or(0);
                live.push(list.insert_after(anchor, value)?);
            }
            ChurnOp::InsertBefore { pick, value } => {
                let anchor = pick_slot(&live, pick).unwrap_or(0);
                live.push(list.insert_before(anchor, value)?);
            }
            ChurnOp::Delete { pick } => {
                if live.is_empty() {
                    continue;
                }
                let k = (pick % live.len() as u64) as usize;
                list.delete(live.swap_remove(k))?;
            }
        }
    }
    Ok(())
}

fn pick_slot(live: &[usize], pick: u64) -> Option<usize> {
    if live.is_empty() {
        None
    } else {
        Some(live[(pick % live.len() as u64) as usize])
    }
}

/// A default list of `len` sequential values put through `ops` churn
/// operations drawn from `seed`.
pub fn churned_list(len: usize, ops: usize, seed: u64) -> Result<SlotList, ListError> {
    let mut list = SlotList::new()?;
    for v in 0..len {
        list.push_back(v as ListElem)?;
    }
    run_churn(&mut list, &churn_workload(ops, seed))?;
    Ok(list)
}
