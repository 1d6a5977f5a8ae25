//! Benchmark fixtures for the growvec containers.
//!
//! - [`filled`]: a vector of `0..n` built with exact capacity
//! - [`positions`]: deterministic index sequences for insert/erase workloads

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use growvec::GrowVec;

/// A vector holding `0..n` with `capacity() == n`.
pub fn filled(n: usize) -> GrowVec<u64> {
    let mut v = GrowVec::with_capacity(n);
    v.extend(0..n as u64);
    v
}

/// Generate `count` pseudo-random positions for a vector whose length
/// starts at `start_len` and changes by `step` (+1 for inserts, -1 for
/// erases) after each position is used.
///
/// Every position is valid at the moment it is used: for inserts it is
/// `<= len`, for erases `< len`. Deterministic for a given `seed`.
pub fn positions(start_len: usize, count: usize, step: isize, seed: u64) -> Vec<usize> {
    let mut out = Vec::with_capacity(count);
    let mut state = seed;
    let mut len = start_len;
    for _ in 0..count {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let bound = if step > 0 { len + 1 } else { len };
        if bound == 0 {
            break;
        }
        out.push(((state >> 33) % bound as u64) as usize);
        len = len.saturating_add_signed(step);
    }
    out
}
