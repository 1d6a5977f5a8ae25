//! Standard trait impls: slice access, comparison, hashing and conversions.
//!
//! Comparisons only look at the live range `[0, len)`. Equality is
//! element-wise with equal lengths; ordering is lexicographic using the
//! element type's own ordering. Capacity and growth policy never take part.

use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::SliceIndex;

use growvec_buffer::Buffer;

use crate::vec::GrowVec;

impl<T> Deref for GrowVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowVec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Indexing panics when out of range, like slices. Use
/// [`GrowVec::at`] for a reported error or [`GrowVec::get_unchecked`] for
/// the unchecked path.
impl<T, I: SliceIndex<[T]>> Index<I> for GrowVec<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for GrowVec<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for GrowVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for GrowVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for GrowVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for GrowVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq<U>, U> PartialEq<GrowVec<U>> for GrowVec<T> {
    fn eq(&self, other: &GrowVec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for GrowVec<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for GrowVec<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for GrowVec<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for GrowVec<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for GrowVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(items: [T; N]) -> Self {
        let mut v = GrowVec::with_capacity(N);
        for item in items {
            v.push_within_capacity(item);
        }
        v
    }
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
    fn from(items: &[T]) -> Self {
        GrowVec::from_slice(items)
    }
}

/// Adopts the boxed allocation; no element is copied.
impl<T> From<Box<[T]>> for GrowVec<T> {
    fn from(boxed: Box<[T]>) -> Self {
        let len = boxed.len();
        let raw = Box::into_raw(boxed) as *mut [MaybeUninit<T>];
        // SAFETY: `MaybeUninit<T>` has the layout of `T`, so the box is a
        // valid `Box<[MaybeUninit<T>]>` of the same allocation.
        let buf = Buffer::from_boxed_slice(unsafe { Box::from_raw(raw) });
        // SAFETY: all `len` slots of the adopted allocation are initialised.
        unsafe { GrowVec::from_raw_buffer(buf, len) }
    }
}

impl<T> From<Vec<T>> for GrowVec<T> {
    fn from(vec: Vec<T>) -> Self {
        GrowVec::from(vec.into_boxed_slice())
    }
}

impl<T> From<GrowVec<T>> for Box<[T]> {
    fn from(v: GrowVec<T>) -> Self {
        v.into_boxed_slice()
    }
}

impl<T> From<GrowVec<T>> for Vec<T> {
    fn from(v: GrowVec<T>) -> Self {
        v.into_boxed_slice().into_vec()
    }
}
