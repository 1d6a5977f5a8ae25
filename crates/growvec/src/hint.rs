//! Reservation hint for pre-sizing at construction.

use crate::vec::GrowVec;

/// Requested capacity for a vector that starts with no elements.
///
/// Converting a hint gives `len() == 0` and `capacity() == hint.0`:
///
/// ```
/// use growvec::{reserve, GrowVec};
///
/// let v: GrowVec<String> = reserve(5).into();
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReserveHint(pub usize);

/// Shorthand for [`ReserveHint`].
pub fn reserve(capacity: usize) -> ReserveHint {
    ReserveHint(capacity)
}

impl<T> From<ReserveHint> for GrowVec<T> {
    fn from(hint: ReserveHint) -> Self {
        GrowVec::with_capacity(hint.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_reserves_without_adding_elements() {
        let v: GrowVec<u64> = GrowVec::from(reserve(12));
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 12);
        assert!(v.is_empty());
    }

    #[test]
    fn zero_hint_is_unallocated() {
        let v: GrowVec<u64> = ReserveHint(0).into();
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn pushes_after_hint_do_not_reallocate() {
        let mut v: GrowVec<u32> = reserve(4).into();
        let ptr = v.as_ptr();
        for i in 0..4 {
            v.push(i);
        }
        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(v.capacity(), 4);
    }
}
