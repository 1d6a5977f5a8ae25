//! Capacity growth policy.

use crate::error::{AllocError, VecError};

/// How a container picks its next capacity when the current one is too small.
///
/// The target is `max(required, factor * capacity)`, or
/// `max(required, min_capacity)` when nothing is allocated yet. Multiplying
/// by a factor of at least 2 keeps the total relocation work of `N` appends
/// at `O(N)` and the number of reallocations at `O(log N)`.
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    factor: usize,
    min_capacity: usize,
}

impl GrowthPolicy {
    /// Default multiplier applied to the current capacity.
    pub const DEFAULT_FACTOR: usize = 2;

    /// Default capacity of the first allocation.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// The doubling policy: factor 2, first allocation of 1 element.
    pub const DOUBLING: Self = Self {
        factor: Self::DEFAULT_FACTOR,
        min_capacity: Self::DEFAULT_MIN_CAPACITY,
    };

    /// Create a policy, rejecting `factor < 2` and `min_capacity == 0`.
    pub fn new(factor: usize, min_capacity: usize) -> Result<Self, VecError> {
        if factor < 2 || min_capacity == 0 {
            return Err(VecError::InvalidPolicy {
                factor,
                min_capacity,
            });
        }
        Ok(Self {
            factor,
            min_capacity,
        })
    }

    /// Growth multiplier.
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Capacity of the first allocation made from an empty container.
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Capacity to grow to from `current` so that `required` slots fit.
    ///
    /// The multiplied capacity saturates at `usize::MAX`; the caller's
    /// layout computation rejects anything that is still too large.
    pub fn next_capacity(&self, current: usize, required: usize) -> usize {
        let grown = if current == 0 {
            self.min_capacity
        } else {
            current.saturating_mul(self.factor)
        };
        grown.max(required)
    }

    /// Capacity needed to hold `len + additional` elements, grown by this policy.
    ///
    /// Returns [`AllocError::CapacityOverflow`] when `len + additional`
    /// overflows `usize`.
    pub fn grow_for(
        &self,
        current: usize,
        len: usize,
        additional: usize,
    ) -> Result<usize, AllocError> {
        let required = len
            .checked_add(additional)
            .ok_or(AllocError::CapacityOverflow {
                requested: usize::MAX,
            })?;
        Ok(self.next_capacity(current, required))
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DOUBLING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_doubling_from_one() {
        let p = GrowthPolicy::default();
        assert_eq!(p.factor(), 2);
        assert_eq!(p.min_capacity(), 1);
        assert_eq!(p, GrowthPolicy::DOUBLING);
    }

    #[test]
    fn empty_grows_to_min_or_required() {
        let p = GrowthPolicy::default();
        assert_eq!(p.next_capacity(0, 1), 1);
        assert_eq!(p.next_capacity(0, 0), 1);
        assert_eq!(p.next_capacity(0, 10), 10);
    }

    #[test]
    fn non_empty_doubles_unless_required_is_larger() {
        let p = GrowthPolicy::default();
        assert_eq!(p.next_capacity(4, 5), 8);
        assert_eq!(p.next_capacity(4, 20), 20);
    }

    #[test]
    fn rejects_degenerate_policies() {
        assert_eq!(
            GrowthPolicy::new(1, 1),
            Err(VecError::InvalidPolicy {
                factor: 1,
                min_capacity: 1
            })
        );
        assert!(GrowthPolicy::new(2, 0).is_err());
        assert!(GrowthPolicy::new(3, 8).is_ok());
    }

    #[test]
    fn multiplication_saturates() {
        let p = GrowthPolicy::default();
        assert_eq!(p.next_capacity(usize::MAX / 2 + 1, 1), usize::MAX);
    }

    #[test]
    fn grow_for_reports_length_overflow() {
        let p = GrowthPolicy::default();
        assert!(matches!(
            p.grow_for(8, usize::MAX, 1),
            Err(AllocError::CapacityOverflow { .. })
        ));
        assert_eq!(p.grow_for(8, 8, 1), Ok(16));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_capacity_always_fits_requirement(
                factor in 2usize..8,
                min in 1usize..64,
                current in 0usize..1_000_000,
                required in 0usize..4_000_000,
            ) {
                let p = GrowthPolicy::new(factor, min).unwrap();
                let next = p.next_capacity(current, required);
                prop_assert!(next >= required);
                if current > 0 {
                    prop_assert!(next >= current * factor);
                } else {
                    prop_assert!(next >= min);
                }
            }
        }
    }
}
