//! List configuration parameters and layout constants.

use crate::error::ListError;

/// Payload stored in every live slot.
pub type ListElem = i64;

/// Default number of slots (including the sentinel) in a fresh list.
pub const INITIAL_CAPACITY: usize = 4;

/// Marker stored in `prev[i]` for every slot on the free chain.
///
/// Always outside `[0, capacity)` because a `Vec` can never hold
/// `usize::MAX` elements.
pub const FREE_MARK: usize = usize::MAX;

/// Smallest capacity a list may be configured with: the sentinel plus
/// one allocatable slot.
const MIN_CAPACITY: usize = 2;

/// Configuration for a slot list.
///
/// Controls the initial slot count and an optional hard ceiling on growth.
/// Validated at construction; immutable for the lifetime of the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListConfig {
    /// Number of slots allocated at construction, sentinel included.
    ///
    /// Default: [`INITIAL_CAPACITY`] (4). Must be at least 2. This is also
    /// the floor `linearize` never shrinks below.
    pub initial_capacity: usize,

    /// Upper bound on capacity, sentinel included.
    ///
    /// Default: `None` (grow until the allocator refuses). When set,
    /// growth is clamped to this value and an insert into a full list at
    /// the ceiling fails with [`ListError::CapacityExceeded`].
    pub max_capacity: Option<usize>,
}

impl ListConfig {
    /// Create a config with the given initial capacity and no ceiling.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            max_capacity: None,
        }
    }

    /// Set a growth ceiling.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// Check the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidConfig`] if:
    /// - `initial_capacity` is below 2 (no room for a value slot)
    /// - `max_capacity` is smaller than `initial_capacity`
    pub fn validate(&self) -> Result<(), ListError> {
        if self.initial_capacity < MIN_CAPACITY {
            return Err(ListError::InvalidConfig {
                reason: format!(
                    "initial_capacity must be at least {MIN_CAPACITY}, got {}",
                    self.initial_capacity
                ),
            });
        }
        if let Some(max) = self.max_capacity {
            if max < self.initial_capacity {
                return Err(ListError::InvalidConfig {
                    reason: format!(
                        "max_capacity {max} is below initial_capacity {}",
                        self.initial_capacity
                    ),
                });
            }
        }
        Ok(())
    }

    /// Capacity after one growth step from `current`, or `None` if the
    /// ceiling has been reached or doubling would overflow.
    pub fn grown_capacity(&self, current: usize) -> Option<usize> {
        let doubled = current.checked_mul(2)?;
        let next = match self.max_capacity {
            Some(max) => doubled.min(max),
            None => doubled,
        };
        (next > current).then_some(next)
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new(INITIAL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn default_uses_initial_capacity_constant() {
        let config = ListConfig::default();
        assert_eq!(config.initial_capacity, INITIAL_CAPACITY);
        assert_eq!(config.max_capacity, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn capacity_below_two_rejected() {
        for cap in [0, 1] {
            let err = ListConfig::new(cap).validate().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::BadArg);
            assert!(matches!(err, ListError::InvalidConfig { .. }));
        }
    }

    #[test]
    fn max_below_initial_rejected() {
        let config = ListConfig::new(8).with_max_capacity(4);
        assert!(matches!(
            config.validate(),
            Err(ListError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn max_equal_to_initial_accepted() {
        assert!(ListConfig::new(4).with_max_capacity(4).validate().is_ok());
    }

    #[test]
    fn growth_doubles_without_ceiling() {
        let config = ListConfig::default();
        assert_eq!(config.grown_capacity(4), Some(8));
        assert_eq!(config.grown_capacity(8), Some(16));
    }

    #[test]
    fn growth_clamps_to_ceiling() {
        let config = ListConfig::new(4).with_max_capacity(6);
        assert_eq!(config.grown_capacity(4), Some(6));
        assert_eq!(config.grown_capacity(6), None);
    }

    #[test]
    fn growth_overflow_returns_none() {
        let config = ListConfig::default();
        assert_eq!(config.grown_capacity(usize::MAX / 2 + 1), None);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn grown_capacity_is_strictly_larger_and_bounded(
                current in 2usize..1_000_000,
                max in proptest::option::of(2usize..2_000_000),
            ) {
                let config = ListConfig { initial_capacity: 2, max_capacity: max };
                if let Some(next) = config.grown_capacity(current) {
                    prop_assert!(next > current);
                    prop_assert!(next <= current * 2);
                    if let Some(m) = max {
                        prop_assert!(next <= m);
                    }
                } else {
                    prop_assert!(max.is_some_and(|m| m <= current));
                }
            }
        }
    }
}
