//! Exclusive-ownership heap storage for the growvec containers.
//!
//! A [`Buffer<T>`] owns zero or one contiguous heap allocation holding a
//! fixed number of `T`. It has no notion of a logical length smaller than
//! its allocation; that distinction belongs to `GrowVec`, which stores its
//! elements in a `Buffer<MaybeUninit<T>>`.
//!
//! This crate and `growvec` are the only ones in the workspace that
//! contain `unsafe` code. All calls into the global allocator go through
//! the private `raw` module.
//!
//! ```
//! use growvec_buffer::Buffer;
//!
//! let mut a: Buffer<u32> = Buffer::new_default(3);
//! a[1] = 7;
//! let mut b = Buffer::new();
//! a.swap_with(&mut b);
//! assert!(a.is_empty());
//! assert_eq!(&*b, &[0, 7, 0]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod buffer;
mod raw;

pub use buffer::Buffer;
pub use growvec_core::AllocError;
pub use raw::unwrap_alloc;
