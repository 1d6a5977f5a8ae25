//! Core types for the growvec workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! error taxonomy shared by [`Buffer`] and [`GrowVec`] and the
//! [`GrowthPolicy`] that decides how much capacity a reallocation asks for.
//!
//! [`Buffer`]: https://docs.rs/growvec-buffer
//! [`GrowVec`]: https://docs.rs/growvec

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod policy;

pub use error::{AllocError, VecError};
pub use policy::GrowthPolicy;
