//! The owning buffer type.

use std::fmt;
use std::marker::PhantomData;
use std::mem::{self, ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};

use growvec_core::AllocError;

use crate::raw;

/// A fixed-length, heap-allocated array with exactly one owner.
///
/// `Buffer<T>` is the manual counterpart of `Box<[T]>`: it owns a pointer
/// and an element count, every element in `[0, len)` is initialised, and
/// dropping the buffer drops every element and releases the allocation
/// exactly once.
///
/// Ownership is move-only. There is no `Clone` impl, so two buffers can
/// never alias the same allocation; [`swap_with`](Buffer::swap_with) exchanges
/// allocations in O(1) without touching elements.
///
/// A buffer of length 0 holds no allocation, and neither does a buffer of
/// a zero-sized `T`.
pub struct Buffer<T> {
    ptr: NonNull<T>,
    len: usize,
    _owns: PhantomData<T>,
}

// SAFETY: `Buffer<T>` owns its elements uniquely, like `Box<[T]>`.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for Buffer<T> {}

impl<T> Buffer<T> {
    /// An empty buffer. Does not allocate.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Allocate `len` elements, initialising slot `i` with `f(i)`.
    ///
    /// Either every element is constructed or none survives: if `f` panics,
    /// the elements built so far are dropped and the allocation is released
    /// before the panic continues.
    pub fn try_from_fn<F>(len: usize, mut f: F) -> Result<Self, AllocError>
    where
        F: FnMut(usize) -> T,
    {
        let ptr = raw::allocate::<T>(len)?;
        let mut guard = PartialInit {
            ptr,
            capacity: len,
            initialized: 0,
        };
        while guard.initialized < len {
            let value = f(guard.initialized);
            // SAFETY: `initialized < len`, so the slot is in bounds and not
            // yet initialised.
            unsafe { ptr.as_ptr().add(guard.initialized).write(value) };
            guard.initialized += 1;
        }
        mem::forget(guard);
        Ok(Self {
            ptr,
            len,
            _owns: PhantomData,
        })
    }

    /// Infallible [`try_from_fn`](Buffer::try_from_fn).
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through
    /// [`std::alloc::handle_alloc_error`] when out of memory.
    pub fn from_fn<F>(len: usize, f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        raw::unwrap_alloc(Self::try_from_fn(len, f))
    }

    /// Take ownership of a boxed slice without copying.
    pub fn from_boxed_slice(boxed: Box<[T]>) -> Self {
        let len = boxed.len();
        let raw_slice = Box::into_raw(boxed);
        // SAFETY: `Box::into_raw` never returns null.
        let ptr = unsafe { NonNull::new_unchecked(raw_slice.cast::<T>()) };
        Self {
            ptr,
            len,
            _owns: PhantomData,
        }
    }

    /// Adopt an allocation produced elsewhere.
    ///
    /// # Safety
    ///
    /// `ptr` must point to `len` initialised `T` allocated by the global
    /// allocator with `Layout::array::<T>(len)` (for instance the pointer of
    /// a `Box<[T]>` of length `len`), or be dangling when that layout has
    /// size zero. The caller gives up all access to it.
    pub unsafe fn from_raw_parts(ptr: NonNull<T>, len: usize) -> Self {
        Self {
            ptr,
            len,
            _owns: PhantomData,
        }
    }

    /// Give up ownership, returning the storage as a boxed slice.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        let (ptr, len) = self.into_raw_parts();
        let slice = ptr::slice_from_raw_parts_mut(ptr.as_ptr(), len);
        // SAFETY: the allocation uses the `Box<[T]>` layout (see `raw`) and
        // ownership moves into the box.
        unsafe { Box::from_raw(slice) }
    }

    /// Give up ownership, returning the pointer and length.
    ///
    /// The caller becomes responsible for dropping the elements and
    /// releasing the allocation, typically via
    /// [`from_raw_parts`](Buffer::from_raw_parts).
    pub fn into_raw_parts(self) -> (NonNull<T>, usize) {
        let this = ManuallyDrop::new(self);
        (this.ptr, this.len)
    }

    /// Move the storage out, leaving `self` empty.
    pub fn release(&mut self) -> Box<[T]> {
        mem::take(self).into_boxed_slice()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the buffer owns a heap allocation.
    pub fn is_allocated(&self) -> bool {
        self.len != 0 && mem::size_of::<T>() != 0
    }

    /// Raw pointer to the first element. Dangling when nothing is allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable raw pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// All elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialised and owned by `self`.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// All elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `[0, len)` is initialised and uniquely borrowed.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index {index} >= len {}", self.len);
        // SAFETY: caller guarantees `index < len`.
        unsafe { &*self.ptr.as_ptr().add(index) }
    }

    /// Mutable element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "index {index} >= len {}", self.len);
        // SAFETY: caller guarantees `index < len`.
        unsafe { &mut *self.ptr.as_ptr().add(index) }
    }

    /// Exchange allocations with `other`. O(1), no element is touched.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<T: Default> Buffer<T> {
    /// Allocate `len` elements, each `T::default()`.
    pub fn try_new_default(len: usize) -> Result<Self, AllocError> {
        Self::try_from_fn(len, |_| T::default())
    }

    /// Infallible [`try_new_default`](Buffer::try_new_default).
    pub fn new_default(len: usize) -> Self {
        raw::unwrap_alloc(Self::try_new_default(len))
    }
}

impl<T> Buffer<MaybeUninit<T>> {
    /// Allocate `len` uninitialised slots.
    pub fn try_uninit(len: usize) -> Result<Self, AllocError> {
        let ptr = raw::allocate::<MaybeUninit<T>>(len)?;
        Ok(Self {
            ptr,
            len,
            _owns: PhantomData,
        })
    }

    /// Infallible [`try_uninit`](Buffer::try_uninit).
    pub fn uninit(len: usize) -> Self {
        raw::unwrap_alloc(Self::try_uninit(len))
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        // Release the allocation even if an element's destructor panics.
        let _release = Release {
            ptr: self.ptr,
            len: self.len,
        };
        // SAFETY: `[0, len)` is initialised and dropped exactly once here.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr(),
                self.len,
            ));
        }
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Buffer<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Buffer<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> From<Box<[T]>> for Buffer<T> {
    fn from(boxed: Box<[T]>) -> Self {
        Self::from_boxed_slice(boxed)
    }
}

impl<T> From<Buffer<T>> for Box<[T]> {
    fn from(buffer: Buffer<T>) -> Self {
        buffer.into_boxed_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Drops the initialised prefix and frees the allocation if construction
/// unwinds.
struct PartialInit<T> {
    ptr: NonNull<T>,
    capacity: usize,
    initialized: usize,
}

impl<T> Drop for PartialInit<T> {
    fn drop(&mut self) {
        let _release = Release {
            ptr: self.ptr,
            len: self.capacity,
        };
        // SAFETY: exactly the first `initialized` slots were written.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr(),
                self.initialized,
            ));
        }
    }
}

struct Release<T> {
    ptr: NonNull<T>,
    len: usize,
}

impl<T> Drop for Release<T> {
    fn drop(&mut self) {
        // SAFETY: `ptr` was allocated for `len` elements and nothing uses it
        // after this guard runs.
        unsafe { raw::deallocate(self.ptr, self.len) };
    }
}
