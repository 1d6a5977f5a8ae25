//! Instrumented element types for growvec development.
//!
//! Containers that manage raw storage have to construct and drop every
//! element exactly once, including when a user-supplied `Clone` or
//! `Default` panics part-way through an operation. The types here make
//! that observable:
//!
//! - [`Tracked`] counts live instances per thread and can be armed to panic
//!   on the N-th `clone()` or `default()`.
//! - [`MoveOnly`] has no `Clone`, for exercising by-value paths.
//!
//! Counters are thread-local, so tests running in parallel do not see each
//! other's instances. Call [`reset`] at the start of a test.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;

thread_local! {
    static LIVE: Cell<usize> = const { Cell::new(0) };
    static DROPPED: Cell<usize> = const { Cell::new(0) };
    static CLONE_FUSE: Cell<Option<usize>> = const { Cell::new(None) };
    static DEFAULT_FUSE: Cell<Option<usize>> = const { Cell::new(None) };
}

/// An integer wrapper whose construction and destruction are counted.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tracked(pub u32);

impl Tracked {
    pub fn new(value: u32) -> Self {
        LIVE.with(|c| c.set(c.get() + 1));
        Tracked(value)
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        burn(&CLONE_FUSE, "clone");
        Tracked::new(self.0)
    }
}

impl Default for Tracked {
    fn default() -> Self {
        burn(&DEFAULT_FUSE, "default");
        Tracked::new(0)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        LIVE.with(|c| c.set(c.get() - 1));
        DROPPED.with(|c| c.set(c.get() + 1));
    }
}

fn burn(fuse: &'static std::thread::LocalKey<Cell<Option<usize>>>, what: &str) {
    let remaining = fuse.with(|f| f.get());
    match remaining {
        Some(0) => panic!("Tracked::{what} armed to panic"),
        Some(n) => fuse.with(|f| f.set(Some(n - 1))),
        None => {}
    }
}

/// Number of [`Tracked`] values currently alive on this thread.
pub fn live() -> usize {
    LIVE.with(|c| c.get())
}

/// Number of [`Tracked`] values dropped on this thread since the last [`reset`].
pub fn dropped() -> usize {
    DROPPED.with(|c| c.get())
}

/// Clear counters and disarm both fuses.
pub fn reset() {
    LIVE.with(|c| c.set(0));
    DROPPED.with(|c| c.set(0));
    disarm();
}

/// Let `n` more clones succeed, then panic on the next one.
pub fn panic_on_clone_after(n: usize) {
    CLONE_FUSE.with(|f| f.set(Some(n)));
}

/// Let `n` more `Default::default()` calls succeed, then panic on the next one.
pub fn panic_on_default_after(n: usize) {
    DEFAULT_FUSE.with(|f| f.set(Some(n)));
}

/// Stop panicking on clone and default.
pub fn disarm() {
    CLONE_FUSE.with(|f| f.set(None));
    DEFAULT_FUSE.with(|f| f.set(None));
}

/// A value that can only be moved.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct MoveOnly(pub Box<u32>);

impl MoveOnly {
    pub fn new(value: u32) -> Self {
        MoveOnly(Box::new(value))
    }

    pub fn get(&self) -> u32 {
        *self.0
    }
}
