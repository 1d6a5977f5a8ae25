//! Error types for buffer allocation and container access.
//!
//! Two layers, matching the two containers: [`AllocError`] is what the raw
//! buffer can report, [`VecError`] is what the growable array reports and
//! wraps allocation failures from its storage.

use std::alloc::Layout;
use std::error::Error;
use std::fmt;

/// Errors from obtaining heap storage for a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested element count does not fit in a valid allocation layout
    /// (more than `isize::MAX` bytes, or `usize` overflow while computing
    /// a new capacity).
    CapacityOverflow {
        /// Number of elements that was requested.
        requested: usize,
    },
    /// The global allocator returned null.
    OutOfMemory {
        /// Layout of the failed allocation.
        layout: Layout,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} elements requested")
            }
            Self::OutOfMemory { layout } => {
                write!(f, "allocation of {} bytes failed", layout.size())
            }
        }
    }
}

impl Error for AllocError {}

/// Errors reported by `GrowVec` operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VecError {
    /// Checked access with `index >= len`.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The logical length at the time of the call.
        len: usize,
    },
    /// A reallocation could not obtain storage. The container is unchanged.
    Alloc(AllocError),
    /// A growth policy with a factor below 2 or a zero minimum capacity.
    InvalidPolicy {
        /// The rejected growth factor.
        factor: usize,
        /// The rejected minimum capacity.
        min_capacity: usize,
    },
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::Alloc(e) => write!(f, "reallocation failed: {e}"),
            Self::InvalidPolicy {
                factor,
                min_capacity,
            } => {
                write!(
                    f,
                    "invalid growth policy: factor {factor}, min capacity {min_capacity}"
                )
            }
        }
    }
}

impl Error for VecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Alloc(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AllocError> for VecError {
    fn from(e: AllocError) -> Self {
        Self::Alloc(e)
    }
}
