//! A growable array built from scratch on an exclusive-ownership heap buffer.
//!
//! [`GrowVec<T>`] keeps a logical length `len` on top of a single
//! [`Buffer`] whose element count is the capacity. It offers amortized
//! O(1) [`push`](GrowVec::push), shifting [`insert`](GrowVec::insert) and
//! [`remove`](GrowVec::remove), exact [`reserve`](GrowVec::reserve),
//! [`resize`](GrowVec::resize), deep copy via `Clone` and storage transfer
//! via [`take`](GrowVec::take).
//!
//! ```
//! use growvec::growvec;
//!
//! let mut v = growvec![1, 2, 3];
//! v.insert(1, 9);
//! assert_eq!(v, [1, 9, 2, 3]);
//! v.erase(0);
//! assert_eq!(v, [9, 2, 3]);
//! v.resize(5);
//! assert_eq!(v, [9, 2, 3, 0, 0]);
//! assert_eq!(v.at(7).unwrap_err().to_string(), "index 7 out of range for length 5");
//! ```
//!
//! # Crates
//!
//! | Crate | Contents |
//! |-------|----------|
//! | `growvec-core` | [`AllocError`], [`VecError`], [`GrowthPolicy`] |
//! | `growvec-buffer` | [`Buffer`], the owning fixed-length allocation |
//! | `growvec` | [`GrowVec`], [`IntoIter`], [`ReserveHint`], [`growvec!`] |
//!
//! # Error handling
//!
//! Operations that can run out of memory come in pairs: `try_*` returns
//! [`VecError::Alloc`] and leaves the vector untouched, the plain method
//! diverges the way `std` collections do. [`GrowVec::at`] reports
//! [`VecError::OutOfRange`]. Indexing and the position arguments of
//! `insert`/`remove` panic when out of range; the truly unchecked path is
//! the `unsafe` [`GrowVec::get_unchecked`].
//!
//! # Logging
//!
//! Reallocations are logged at `trace` level through the [`log`] facade.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod hint;
pub mod iter;
mod macros;
mod traits;
pub mod vec;

pub use growvec_buffer::Buffer;
pub use growvec_core::{AllocError, GrowthPolicy, VecError};
pub use hint::{reserve, ReserveHint};
pub use iter::IntoIter;
pub use vec::GrowVec;
