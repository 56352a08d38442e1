//! Error types for slot list operations.
//!
//! Every failure maps onto one of three kinds (see [`ErrorKind`]):
//! caller precondition violations, allocation failures, and structural
//! corruption found by the verifier. Detailed variants carry the offending
//! index so callers can report something more useful than a bare code.

use std::error::Error;
use std::fmt;

/// Coarse classification of a [`ListError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller violated a precondition: out-of-range index, free slot,
    /// sentinel used as a value slot, or an invalid configuration.
    BadArg,
    /// The backing allocator failed or the growth ceiling was reached.
    /// The list is unchanged.
    AllocError,
    /// The verifier found an invariant violation. The list may be unusable.
    Corrupt,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadArg => write!(f, "bad argument"),
            Self::AllocError => write!(f, "allocation failure"),
            Self::Corrupt => write!(f, "corrupt list"),
        }
    }
}

/// Errors returned by slot list operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// Index is not below the current capacity.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Capacity at the time of the call.
        capacity: usize,
    },
    /// Index refers to a slot on the free chain.
    FreeSlot {
        /// The rejected index.
        index: usize,
    },
    /// Slot 0 was used where a value slot is required (delete, value read).
    SentinelSlot,
    /// A [`ListConfig`](crate::ListConfig) failed validation.
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// The allocator could not provide storage for the requested slots.
    AllocFailed {
        /// Total slot count that was requested.
        requested: usize,
    },
    /// The list is at its configured `max_capacity` and has no free slot.
    CapacityExceeded {
        /// The configured ceiling.
        max_capacity: usize,
    },
    /// The verifier detected an invariant violation.
    Corrupt(Violation),
}

impl ListError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfRange { .. }
            | Self::FreeSlot { .. }
            | Self::SentinelSlot
            | Self::InvalidConfig { .. } => ErrorKind::BadArg,
            Self::AllocFailed { .. } | Self::CapacityExceeded { .. } => ErrorKind::AllocError,
            Self::Corrupt(_) => ErrorKind::Corrupt,
        }
    }
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, capacity } => {
                write!(f, "index {index} out of range for capacity {capacity}")
            }
            Self::FreeSlot { index } => write!(f, "index {index} refers to a free slot"),
            Self::SentinelSlot => write!(f, "slot 0 is the sentinel and holds no value"),
            Self::InvalidConfig { reason } => write!(f, "invalid list config: {reason}"),
            Self::AllocFailed { requested } => {
                write!(f, "allocation failed for {requested} slots")
            }
            Self::CapacityExceeded { max_capacity } => {
                write!(f, "list is full at max capacity {max_capacity}")
            }
            Self::Corrupt(violation) => write!(f, "list corrupt: {violation}"),
        }
    }
}

impl Error for ListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Corrupt(violation) => Some(violation),
            _ => None,
        }
    }
}

/// A specific structural invariant the verifier found broken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// Capacity is below the configured initial capacity.
    CapacityTooSmall {
        /// Observed capacity.
        capacity: usize,
        /// Required minimum.
        minimum: usize,
    },
    /// The three parallel arrays disagree in length.
    ArrayLengthMismatch {
        /// Length of `data`.
        data: usize,
        /// Length of `next`.
        next: usize,
        /// Length of `prev`.
        prev: usize,
    },
    /// `size` is zero but the sentinel still names endpoints, or `size` is
    /// non-zero and an endpoint is zero.
    SentinelEndpoints {
        /// Live slot count.
        size: usize,
        /// `next[0]`.
        head: usize,
        /// `prev[0]`.
        tail: usize,
    },
    /// A slot reached on the ring lies outside `[0, capacity)` or is 0.
    LiveOutOfRange {
        /// The offending index.
        index: usize,
    },
    /// A slot reached on the ring is marked free.
    LiveMarkedFree {
        /// The offending index.
        index: usize,
    },
    /// The ring does not close: `prev[head] != tail` or `next[tail] != head`.
    RingNotClosed {
        /// `next[0]`.
        head: usize,
        /// `prev[0]`.
        tail: usize,
    },
    /// `next[prev[i]] != i` or `prev[next[i]] != i`.
    LinkMismatch {
        /// The slot whose neighbours disagree.
        index: usize,
    },
    /// The ring walk reached a slot twice before arriving at the tail.
    RingRevisit {
        /// The revisited index.
        index: usize,
    },
    /// The ring walk did not reach the tail within `capacity` steps.
    RingOverrun,
    /// The ring holds a different number of slots than `size`.
    SizeMismatch {
        /// Slots counted on the ring.
        counted: usize,
        /// Recorded `size`.
        size: usize,
    },
    /// A slot reached on the free chain lies outside `[1, capacity)`.
    FreeOutOfRange {
        /// The offending index.
        index: usize,
    },
    /// A slot reached on the free chain lacks the free marker.
    FreeNotMarked {
        /// The offending index.
        index: usize,
    },
    /// The free chain visits a slot twice.
    FreeRevisit {
        /// The revisited index.
        index: usize,
    },
    /// A slot is both on the ring and on the free chain.
    FreeOverlapsLive {
        /// The shared index.
        index: usize,
    },
    /// The free chain did not terminate within `capacity` steps.
    FreeOverrun,
    /// Live and free slots together do not cover `{1, …, capacity-1}`.
    PartitionMismatch {
        /// Live slot count.
        live: usize,
        /// Free slot count.
        free: usize,
        /// Expected total (`capacity - 1`).
        expected: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityTooSmall { capacity, minimum } => {
                write!(f, "capacity {capacity} below minimum {minimum}")
            }
            Self::ArrayLengthMismatch { data, next, prev } => write!(
                f,
                "parallel arrays disagree: data={data}, next={next}, prev={prev}"
            ),
            Self::SentinelEndpoints { size, head, tail } => write!(
                f,
                "sentinel endpoints head={head}, tail={tail} inconsistent with size {size}"
            ),
            Self::LiveOutOfRange { index } => write!(f, "ring slot {index} out of range"),
            Self::LiveMarkedFree { index } => write!(f, "ring slot {index} is marked free"),
            Self::RingNotClosed { head, tail } => {
                write!(f, "ring not closed between head {head} and tail {tail}")
            }
            Self::LinkMismatch { index } => write!(f, "next/prev disagree around slot {index}"),
            Self::RingRevisit { index } => write!(f, "ring revisits slot {index}"),
            Self::RingOverrun => write!(f, "ring walk exceeded capacity"),
            Self::SizeMismatch { counted, size } => {
                write!(f, "ring holds {counted} slots but size is {size}")
            }
            Self::FreeOutOfRange { index } => write!(f, "free slot {index} out of range"),
            Self::FreeNotMarked { index } => {
                write!(f, "free chain slot {index} lacks the free marker")
            }
            Self::FreeRevisit { index } => write!(f, "free chain revisits slot {index}"),
            Self::FreeOverlapsLive { index } => {
                write!(f, "slot {index} is both live and free")
            }
            Self::FreeOverrun => write!(f, "free chain walk exceeded capacity"),
            Self::PartitionMismatch {
                live,
                free,
                expected,
            } => write!(
                f,
                "{live} live + {free} free slots do not cover {expected} slots"
            ),
        }
    }
}

impl Error for Violation {}

impl From<Violation> for ListError {
    fn from(violation: Violation) -> Self {
        Self::Corrupt(violation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_partition_variants() {
        assert_eq!(
            ListError::IndexOutOfRange {
                index: 9,
                capacity: 4
            }
            .kind(),
            ErrorKind::BadArg
        );
        assert_eq!(ListError::FreeSlot { index: 2 }.kind(), ErrorKind::BadArg);
        assert_eq!(ListError::SentinelSlot.kind(), ErrorKind::BadArg);
        assert_eq!(
            ListError::AllocFailed { requested: 8 }.kind(),
            ErrorKind::AllocError
        );
        assert_eq!(
            ListError::CapacityExceeded { max_capacity: 4 }.kind(),
            ErrorKind::AllocError
        );
        assert_eq!(
            ListError::Corrupt(Violation::RingOverrun).kind(),
            ErrorKind::Corrupt
        );
    }

    #[test]
    fn corrupt_exposes_violation_as_source() {
        let err: ListError = Violation::LinkMismatch { index: 3 }.into();
        let source = err.source().expect("corrupt carries a source");
        assert_eq!(source.to_string(), "next/prev disagree around slot 3");
    }

    #[test]
    fn display_names_the_index() {
        let err = ListError::IndexOutOfRange {
            index: 12,
            capacity: 8,
        };
        assert_eq!(err.to_string(), "index 12 out of range for capacity 8");
        assert!(ListError::FreeSlot { index: 5 }.source().is_none());
    }
}
