//! The growable array and its reallocation machinery.
//!
//! A [`GrowVec`] stores its elements in a single
//! `Buffer<MaybeUninit<T>>`. Slots `[0, len)` are initialised; slots
//! `[len, capacity)` are reserved storage. Every operation that needs more
//! room goes through one path:
//!
//! 1. compute the target capacity ([`GrowthPolicy`], or the exact request
//!    for [`GrowVec::reserve`]),
//! 2. allocate a fresh buffer (the only step that can fail),
//! 3. move the live elements across bitwise,
//! 4. swap the fresh buffer in and let the old one drop.
//!
//! Because a failed allocation happens before anything is touched and
//! bitwise moves cannot fail, every growing operation gives the strong
//! guarantee: on error the container is exactly as it was.
//!
//! # Invalidation
//!
//! Borrows of the contents cannot outlive a mutation, so references are
//! safe by construction. Raw pointers obtained from
//! [`as_ptr_range`](GrowVec::as_ptr_range) are invalidated by any
//! reallocation, and a shifting [`insert`](GrowVec::insert) or
//! [`remove`](GrowVec::remove) changes which element lives at every
//! position at or after the mutation point.

use std::mem::{self, ManuallyDrop, MaybeUninit};
use std::ops::Range;
use std::ptr;

use growvec_buffer::{unwrap_alloc, AllocError, Buffer};
use growvec_core::{GrowthPolicy, VecError};

/// A contiguous growable array with explicit capacity control.
///
/// See the [module documentation](self) for the storage model.
pub struct GrowVec<T> {
    buf: Buffer<MaybeUninit<T>>,
    len: usize,
    policy: GrowthPolicy,
}

impl<T> GrowVec<T> {
    /// An empty vector. Does not allocate.
    pub const fn new() -> Self {
        Self::with_policy(GrowthPolicy::DOUBLING)
    }

    /// An empty vector that grows according to `policy`.
    pub const fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            buf: Buffer::new(),
            len: 0,
            policy,
        }
    }

    /// An empty vector with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        unwrap_alloc(Self::try_with_capacity(capacity))
    }

    /// Fallible [`with_capacity`](GrowVec::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Ok(Self {
            buf: Buffer::try_uninit(capacity)?,
            len: 0,
            policy: GrowthPolicy::DOUBLING,
        })
    }

    /// `len` elements produced by `f`, with capacity exactly `len`.
    pub fn from_fn<F>(len: usize, f: F) -> Self
    where
        F: FnMut() -> T,
    {
        let mut v = Self::with_capacity(len);
        v.fill_with(len, f);
        v
    }

    /// `len` copies of `value`, with capacity exactly `len`.
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut v = Self::with_capacity(len);
        if len > 0 {
            v.fill_with(len - 1, || value.clone());
            v.push_within_capacity(value);
        }
        v
    }

    /// Copies of every element of `items`, with capacity exactly `items.len()`.
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        let mut v = Self::with_capacity(items.len());
        v.extend_within_capacity(items);
        v
    }

    /// Move the contents out, leaving `self` with no elements and no
    /// allocation. The policy stays with both.
    pub fn take(&mut self) -> Self {
        let policy = self.policy;
        mem::replace(self, Self::with_policy(policy))
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Whether there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The growth policy used when a reallocation is triggered.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Raw pointer to the first slot.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr().cast::<T>()
    }

    /// Mutable raw pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr().cast::<T>()
    }

    /// The live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialised.
        unsafe { std::slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// The live elements, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `[0, len)` is initialised and uniquely borrowed.
        unsafe { std::slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// The `[begin, end)` pointer pair bounding the live elements.
    ///
    /// `end - begin` is always `len()`. For an empty vector both may be
    /// dangling. Invalidated by any reallocation.
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }

    /// Checked access.
    ///
    /// Returns [`VecError::OutOfRange`] when `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, VecError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(VecError::OutOfRange { index, len })
    }

    /// Checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VecError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(VecError::OutOfRange { index, len })
    }

    /// Element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees `index < len`, so the slot is initialised.
        unsafe { &*self.as_ptr().add(index) }
    }

    /// Mutable element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees `index < len`, so the slot is initialised.
        unsafe { &mut *self.as_mut_ptr().add(index) }
    }

    /// Iterator over the live elements, front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutable iterator over the live elements, front to back.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Drop every element. Capacity and allocation are kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drop the elements at `[new_len, len)`. No effect if `new_len >= len`.
    ///
    /// `len` is lowered before any destructor runs, so a panicking `Drop`
    /// leaks the remaining tail instead of dropping it twice.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail_len = self.len - new_len;
        self.len = new_len;
        // SAFETY: `[new_len, new_len + tail_len)` was initialised and is no
        // longer reachable through `len`.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.as_mut_ptr().add(new_len), tail_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Grow the capacity to exactly `new_capacity` if it is larger than the
    /// current one. Never shrinks and never changes `len`.
    ///
    /// Strong guarantee: on failure nothing changes.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), VecError> {
        if new_capacity > self.capacity() {
            self.relocate(new_capacity)?;
        }
        Ok(())
    }

    /// Infallible [`try_reserve`](GrowVec::try_reserve).
    pub fn reserve(&mut self, new_capacity: usize) {
        unwrap_alloc(self.try_reserve(new_capacity).map_err(expect_alloc))
    }

    /// Set `len` to `new_len`, filling new slots with `T::default()` or
    /// dropping the excess.
    ///
    /// Growing past the capacity reallocates through the growth policy
    /// first; that step is all-or-nothing. If `T::default()` panics the
    /// elements written so far stay and `len` counts them.
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), VecError>
    where
        T: Default,
    {
        self.try_resize_with(new_len, T::default)
    }

    /// Infallible [`try_resize`](GrowVec::try_resize).
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// [`try_resize`](GrowVec::try_resize) with new elements produced by `f`.
    pub fn try_resize_with<F>(&mut self, new_len: usize, f: F) -> Result<(), VecError>
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        if new_len > self.capacity() {
            let target = self.policy.next_capacity(self.capacity(), new_len);
            self.relocate(target)?;
        }
        self.fill_with(new_len, f);
        Ok(())
    }

    /// Infallible [`try_resize_with`](GrowVec::try_resize_with).
    pub fn resize_with<F>(&mut self, new_len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        unwrap_alloc(self.try_resize_with(new_len, f).map_err(expect_alloc))
    }

    /// Append `value`, growing through the policy when full.
    ///
    /// Amortized O(1). Returns the element just pushed. Strong guarantee:
    /// on failure the vector is unchanged and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<&mut T, VecError> {
        self.grow_for(1)?;
        Ok(self.push_within_capacity(value))
    }

    /// Infallible [`try_push`](GrowVec::try_push).
    pub fn push(&mut self, value: T) -> &mut T {
        unwrap_alloc(self.grow_for(1));
        self.push_within_capacity(value)
    }

    /// Remove and return the last element. Capacity is kept.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` was initialised and is now
        // outside `[0, len)`, so it is read exactly once.
        Some(unsafe { self.as_ptr().add(self.len).read() })
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len()` appends. With spare capacity the tail is moved in
    /// place; otherwise the prefix, the new value and the suffix are moved
    /// into a fresh allocation in one pass. Either way the only fallible
    /// step is the allocation, so on failure nothing changes.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, VecError> {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        if index == len {
            return self.try_push(value);
        }

        if len == self.capacity() {
            let target = self.policy.grow_for(self.capacity(), len, 1)?;
            let mut fresh = Buffer::<MaybeUninit<T>>::try_uninit(target)?;
            let src = self.as_ptr();
            let dst = fresh.as_mut_ptr().cast::<T>();
            // SAFETY: `fresh` has room for `len + 1` elements and does not
            // overlap the current storage. Each live element is moved once.
            unsafe {
                ptr::copy_nonoverlapping(src, dst, index);
                dst.add(index).write(value);
                ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), len - index);
            }
            log::trace!(
                "growvec: insert at {} reallocated {} -> {} slots",
                index,
                self.capacity(),
                target
            );
            self.buf.swap_with(&mut fresh);
        } else {
            // SAFETY: `len < capacity`, so `[index + 1, len + 1)` is in bounds.
            // `ptr::copy` handles the overlap by moving the tail right to left.
            unsafe {
                let slot = self.as_mut_ptr().add(index);
                ptr::copy(slot, slot.add(1), len - index);
                slot.write(value);
            }
        }
        self.len = len + 1;
        // SAFETY: `index < len` and the slot was just written.
        Ok(unsafe { &mut *self.as_mut_ptr().add(index) })
    }

    /// Infallible [`try_insert`](GrowVec::try_insert).
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        unwrap_alloc(self.try_insert(index, value).map_err(expect_alloc))
    }

    /// Remove and return the element at `index`, shifting `[index + 1, len)`
    /// one slot left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );
        // SAFETY: `index < len`. The element is read out, then the tail is
        // moved over its slot, leaving `[0, len - 1)` initialised.
        unsafe {
            let slot = self.as_mut_ptr().add(index);
            let removed = slot.read();
            ptr::copy(slot.add(1), slot, len - index - 1);
            self.len = len - 1;
            removed
        }
    }

    /// Drop the element at `index` and return the position of the element
    /// that now occupies the erased slot.
    ///
    /// The returned position equals `index`, which is `len()` when the last
    /// element was erased.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Exchange contents, capacity and policy with `other`. O(1).
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Clone every element of `items` onto the end.
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        unwrap_alloc(self.grow_for(items.len()));
        self.extend_within_capacity(items);
    }

    /// Shrink the allocation to `len()` and hand it over as a boxed slice.
    pub fn into_boxed_slice(mut self) -> Box<[T]> {
        if self.len != self.capacity() {
            unwrap_alloc(self.relocate(self.len));
        }
        let this = ManuallyDrop::new(self);
        // SAFETY: the buffer is read out once and `this` is never dropped.
        let mut buf = unsafe { ptr::read(&this.buf) };
        let raw = Box::into_raw(buf.release());
        // SAFETY: `len == capacity`, so every slot is initialised and
        // `MaybeUninit<T>` has the layout of `T`.
        unsafe { Box::from_raw(raw as *mut [T]) }
    }

    /// Build a vector around an existing storage buffer.
    ///
    /// # Safety
    ///
    /// `len <= buf.len()` and the first `len` slots of `buf` are initialised.
    pub(crate) unsafe fn from_raw_buffer(buf: Buffer<MaybeUninit<T>>, len: usize) -> Self {
        debug_assert!(len <= buf.len());
        Self {
            buf,
            len,
            policy: GrowthPolicy::DOUBLING,
        }
    }

    /// Split into the storage buffer and the number of initialised slots.
    pub(crate) fn into_parts(self) -> (Buffer<MaybeUninit<T>>, usize) {
        let this = ManuallyDrop::new(self);
        // SAFETY: the buffer is read out once and `this` is never dropped.
        let buf = unsafe { ptr::read(&this.buf) };
        (buf, this.len)
    }

    /// Ensure room for `additional` more elements, growing via the policy.
    pub(crate) fn grow_for(&mut self, additional: usize) -> Result<(), AllocError> {
        if self.capacity() - self.len >= additional {
            return Ok(());
        }
        let target = self.policy.grow_for(self.capacity(), self.len, additional)?;
        self.relocate(target)
    }

    /// Move the live elements into a fresh buffer of `new_capacity` slots.
    fn relocate(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        debug_assert!(new_capacity >= self.len);
        let mut fresh = Buffer::<MaybeUninit<T>>::try_uninit(new_capacity)?;
        // SAFETY: `fresh` holds at least `len` slots and is a distinct
        // allocation. The old slots become logically uninitialised; dropping
        // the old `Buffer<MaybeUninit<T>>` only frees memory.
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr(), fresh.as_mut_ptr().cast::<T>(), self.len);
        }
        log::trace!(
            "growvec: reallocated {} -> {} slots ({} live)",
            self.capacity(),
            new_capacity,
            self.len
        );
        self.buf.swap_with(&mut fresh);
        Ok(())
    }

    /// Write `value` at `len`. Requires `len < capacity`.
    pub(crate) fn push_within_capacity(&mut self, value: T) -> &mut T {
        assert!(self.len < self.capacity());
        // SAFETY: the slot at `len` is in bounds and uninitialised.
        unsafe {
            let slot = self.as_mut_ptr().add(self.len);
            slot.write(value);
            self.len += 1;
            &mut *slot
        }
    }

    /// Append values from `f` until `len == new_len`. Requires
    /// `new_len <= capacity`. `len` tracks every write, so a panic in `f`
    /// leaves a consistent vector.
    fn fill_with<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        debug_assert!(new_len <= self.capacity());
        while self.len < new_len {
            self.push_within_capacity(f());
        }
    }

    fn extend_within_capacity(&mut self, items: &[T])
    where
        T: Clone,
    {
        debug_assert!(self.capacity() - self.len >= items.len());
        for item in items {
            self.push_within_capacity(item.clone());
        }
    }
}

impl<T: Default> GrowVec<T> {
    /// `len` default values, with capacity exactly `len`.
    pub fn with_len(len: usize) -> Self {
        Self::from_fn(len, T::default)
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` is initialised and dropped exactly once. The
        // buffer field then frees the allocation without touching slots.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.as_mut_ptr(),
                self.len,
            ));
        }
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    fn clone(&self) -> Self {
        let mut v = Self::from_slice(self.as_slice());
        v.policy = self.policy;
        v
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.policy = source.policy;
        self.extend_from_slice(source.as_slice());
    }
}

/// Every error the growing paths can produce is an allocation error.
fn expect_alloc(e: VecError) -> AllocError {
    match e {
        VecError::Alloc(inner) => inner,
        other => unreachable!("growing path reported {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use growvec_test_utils::{self as tu, MoveOnly, Tracked};

    fn contents<T: Clone>(v: &GrowVec<T>) -> Vec<T> {
        v.as_slice().to_vec()
    }

    #[test]
    fn new_is_empty_without_allocation() {
        let v: GrowVec<u8> = GrowVec::new();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
    }

    #[test]
    fn with_len_fills_defaults() {
        let v: GrowVec<i32> = GrowVec::with_len(4);
        assert_eq!(v.len(), 4);
        assert_eq!(v.capacity(), 4);
        assert_eq!(contents(&v), vec![0; 4]);
    }

    #[test]
    fn from_elem_repeats_value() {
        let v = GrowVec::from_elem(3, String::from("x"));
        assert_eq!(contents(&v), vec!["x", "x", "x"]);
        let empty = GrowVec::from_elem(0, String::from("unused"));
        assert!(empty.is_empty());
    }

    #[test]
    fn with_capacity_has_zero_len() {
        let v: GrowVec<u64> = GrowVec::with_capacity(10);
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn push_follows_doubling_policy() {
        let mut v = GrowVec::new();
        let mut caps = Vec::new();
        for i in 0..9 {
            v.push(i);
            caps.push(v.capacity());
        }
        assert_eq!(caps, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn push_returns_new_element() {
        let mut v = GrowVec::new();
        *v.push(1) += 10;
        assert_eq!(v[0], 11);
    }

    #[test]
    fn custom_policy_controls_growth() {
        let policy = GrowthPolicy::new(3, 4).unwrap();
        let mut v = GrowVec::with_policy(policy);
        v.push(0u8);
        assert_eq!(v.capacity(), 4);
        for i in 1..5 {
            v.push(i);
        }
        assert_eq!(v.capacity(), 12);
        assert_eq!(v.policy(), policy);
    }

    #[test]
    fn at_reports_out_of_range() {
        let mut v = GrowVec::from_slice(&[1, 2]);
        assert_eq!(v.at(1), Ok(&2));
        assert_eq!(v.at(2), Err(VecError::OutOfRange { index: 2, len: 2 }));
        *v.at_mut(0).unwrap() = 5;
        assert_eq!(v[0], 5);
        v.clear();
        assert_eq!(v.at(0), Err(VecError::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn unchecked_access_matches_checked() {
        let v = GrowVec::from_slice(&[4, 5, 6]);
        for i in 0..v.len() {
            // SAFETY: i < len.
            assert_eq!(unsafe { v.get_unchecked(i) }, v.at(i).unwrap());
        }
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut v = GrowVec::from_slice(&[1, 2, 3]);
        let cap = v.capacity();
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), cap);
    }

    #[test]
    fn reserve_is_exact_and_never_shrinks() {
        let mut v = GrowVec::from_slice(&[1, 2]);
        v.reserve(7);
        assert_eq!(v.capacity(), 7);
        assert_eq!(v.len(), 2);
        v.reserve(3);
        assert_eq!(v.capacity(), 7);
        assert_eq!(contents(&v), vec![1, 2]);
    }

    #[test]
    fn try_reserve_overflow_leaves_vector_intact() {
        let mut v = GrowVec::from_slice(&[1u64, 2]);
        let ptr = v.as_ptr();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert!(matches!(err, VecError::Alloc(AllocError::CapacityOverflow { .. })));
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(contents(&v), vec![1, 2]);
    }

    #[test]
    fn resize_grows_with_defaults_and_truncates() {
        let mut v = GrowVec::from_slice(&[7, 8]);
        v.resize(5);
        assert_eq!(contents(&v), vec![7, 8, 0, 0, 0]);
        assert_eq!(v.capacity(), 5);
        v.resize(1);
        assert_eq!(contents(&v), vec![7]);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn resize_uses_policy_when_doubling_is_larger() {
        let mut v = GrowVec::from_slice(&[1, 2, 3, 4]);
        v.resize(5);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn resize_within_capacity_does_not_reallocate() {
        let mut v: GrowVec<u32> = GrowVec::with_capacity(8);
        let ptr = v.as_ptr();
        v.resize(6);
        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(v.len(), 6);
    }

    #[test]
    fn pop_returns_last_and_keeps_capacity() {
        let mut v = GrowVec::from_slice(&[1, 2]);
        let cap = v.capacity();
        assert_eq!(v.pop(), Some(2));
        assert_eq!(v.pop(), Some(1));
        assert_eq!(v.pop(), None);
        assert_eq!(v.capacity(), cap);
    }

    #[test]
    fn insert_in_place_shifts_tail() {
        let mut v: GrowVec<u32> = GrowVec::with_capacity(8);
        v.extend_from_slice(&[1, 2, 3]);
        let ptr = v.as_ptr();
        assert_eq!(*v.insert(1, 9), 9);
        assert_eq!(contents(&v), vec![1, 9, 2, 3]);
        assert_eq!(v.as_ptr(), ptr);
    }

    #[test]
    fn insert_when_full_reallocates_in_one_pass() {
        let mut v = GrowVec::from_slice(&[1, 2, 3, 4]);
        assert_eq!(v.capacity(), 4);
        v.insert(2, 0);
        assert_eq!(contents(&v), vec![1, 2, 0, 3, 4]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn insert_at_front_and_end() {
        let mut v = GrowVec::new();
        v.insert(0, 'b');
        v.insert(0, 'a');
        v.insert(2, 'c');
        assert_eq!(contents(&v), vec!['a', 'b', 'c']);
    }

    #[test]
    #[should_panic(expected = "insertion index (is 3) should be <= len (is 2)")]
    fn insert_past_end_panics() {
        let mut v = GrowVec::from_slice(&[1, 2]);
        v.insert(3, 0);
    }

    #[test]
    fn remove_shifts_left() {
        let mut v = GrowVec::from_slice(&['a', 'b', 'c', 'd']);
        assert_eq!(v.remove(1), 'b');
        assert_eq!(contents(&v), vec!['a', 'c', 'd']);
        assert_eq!(v.remove(2), 'd');
        assert_eq!(contents(&v), vec!['a', 'c']);
    }

    #[test]
    fn erase_returns_position_of_successor() {
        let mut v = GrowVec::from_slice(&[10, 20, 30]);
        let pos = v.erase(0);
        assert_eq!(pos, 0);
        assert_eq!(v[pos], 20);
        let pos = v.erase(1);
        assert_eq!(pos, v.len());
    }

    #[test]
    #[should_panic(expected = "removal index (is 0) should be < len (is 0)")]
    fn remove_from_empty_panics() {
        let mut v: GrowVec<u8> = GrowVec::new();
        v.remove(0);
    }

    #[test]
    fn take_leaves_source_unallocated() {
        let mut a = GrowVec::from_slice(&[1, 2, 3]);
        let b = a.take();
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 0);
        assert_eq!(contents(&b), vec![1, 2, 3]);
    }

    #[test]
    fn swap_with_exchanges_everything() {
        let mut a = GrowVec::from_slice(&[1]);
        let mut b = GrowVec::with_policy(GrowthPolicy::new(4, 2).unwrap());
        b.push(5);
        b.push(6);
        a.swap_with(&mut b);
        assert_eq!(contents(&a), vec![5, 6]);
        assert_eq!(a.policy().factor(), 4);
        assert_eq!(contents(&b), vec![1]);
        assert_eq!(b.capacity(), 1);
    }

    #[test]
    fn clone_is_independent() {
        let a = GrowVec::from_slice(&[String::from("a"), String::from("b")]);
        let mut b = a.clone();
        b[0].push('!');
        b.push(String::from("c"));
        assert_eq!(contents(&a), vec!["a", "b"]);
        assert_eq!(contents(&b), vec!["a!", "b", "c"]);
    }

    #[test]
    fn clone_from_reuses_capacity() {
        let src = GrowVec::from_slice(&[1, 2]);
        let mut dst: GrowVec<i32> = GrowVec::with_capacity(16);
        dst.push(9);
        dst.clone_from(&src);
        assert_eq!(contents(&dst), vec![1, 2]);
        assert_eq!(dst.capacity(), 16);
    }

    #[test]
    fn move_only_elements_survive_reallocation() {
        let mut v = GrowVec::new();
        for i in 0..20 {
            v.push(MoveOnly::new(i));
        }
        v.insert(0, MoveOnly::new(100));
        assert_eq!(v.remove(5).get(), 4);
        let values: Vec<u32> = v.iter().map(MoveOnly::get).collect();
        assert_eq!(values[0], 100);
        assert_eq!(values.len(), 20);
    }

    #[test]
    fn zero_sized_elements() {
        let mut v = GrowVec::new();
        for _ in 0..5 {
            v.push(());
        }
        v.insert(2, ());
        assert_eq!(v.len(), 6);
        assert_eq!(v.pop(), Some(()));
        assert_eq!(v.len(), 5);
    }

    #[test]
    fn into_boxed_slice_shrinks_to_len() {
        let mut v: GrowVec<u8> = GrowVec::with_capacity(10);
        v.extend_from_slice(&[1, 2, 3]);
        let boxed = v.into_boxed_slice();
        assert_eq!(&*boxed, &[1, 2, 3]);
    }

    #[test]
    fn every_element_dropped_once() {
        tu::reset();
        {
            let mut v = GrowVec::new();
            for i in 0..10 {
                v.push(Tracked::new(i));
            }
            v.insert(3, Tracked::new(99));
            drop(v.remove(0));
            v.truncate(6);
            v.resize_with(8, || Tracked::new(7));
            drop(v.pop());
            assert_eq!(tu::live(), v.len());
        }
        assert_eq!(tu::live(), 0);
    }

    #[test]
    fn clear_drops_elements() {
        tu::reset();
        let mut v = GrowVec::new();
        v.push(Tracked::new(1));
        v.push(Tracked::new(2));
        v.clear();
        assert_eq!(tu::live(), 0);
        assert_eq!(tu::dropped(), 2);
    }
}
