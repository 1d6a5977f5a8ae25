//! Allocator primitives.
//!
//! Every allocation made here uses `Layout::array::<T>(len)` with the
//! global allocator, which is the layout `Box<[T]>` uses. That is what
//! makes `Buffer::from_boxed_slice` and `Buffer::into_boxed_slice` sound.
//! Zero-sized layouts are never passed to the allocator; they are
//! represented by a dangling, well-aligned pointer.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use growvec_core::AllocError;

/// Layout of `len` contiguous `T`.
pub(crate) fn array_layout<T>(len: usize) -> Result<Layout, AllocError> {
    Layout::array::<T>(len).map_err(|_| AllocError::CapacityOverflow { requested: len })
}

/// Allocate uninitialised storage for `len` values of `T`.
pub(crate) fn allocate<T>(len: usize) -> Result<NonNull<T>, AllocError> {
    let layout = array_layout::<T>(len)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    // SAFETY: `layout` has a non-zero size.
    let ptr = unsafe { alloc::alloc(layout) };
    NonNull::new(ptr.cast::<T>()).ok_or_else(|| {
        log::debug!(
            "allocation of {} elements ({} bytes) failed",
            len,
            layout.size()
        );
        AllocError::OutOfMemory { layout }
    })
}

/// Release storage obtained from [`allocate`].
///
/// # Safety
///
/// `ptr` must come from `allocate::<T>(len)` (or an equivalent
/// `Box<[T]>` of length `len`) and must not be used afterwards.
pub(crate) unsafe fn deallocate<T>(ptr: NonNull<T>, len: usize) {
    // `Layout::array` succeeded for this `len` when the storage was made.
    let Ok(layout) = Layout::array::<T>(len) else {
        return;
    };
    if layout.size() != 0 {
        // SAFETY: per the caller contract, `ptr` was allocated by the global
        // allocator with exactly this layout.
        unsafe { alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout) };
    }
}

/// Unwrap the result of a fallible allocation, diverging on failure the
/// way `std` collections do.
///
/// [`AllocError::OutOfMemory`] goes to [`std::alloc::handle_alloc_error`];
/// [`AllocError::CapacityOverflow`] panics.
pub fn unwrap_alloc<R>(result: Result<R, AllocError>) -> R {
    match result {
        Ok(value) => value,
        Err(AllocError::OutOfMemory { layout }) => alloc::handle_alloc_error(layout),
        Err(AllocError::CapacityOverflow { requested }) => {
            panic!("capacity overflow: {requested} elements requested")
        }
    }
}
