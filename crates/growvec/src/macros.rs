//! The `growvec!` literal macro.

/// Build a [`GrowVec`](crate::GrowVec) from a literal sequence or a
/// repeated value.
///
/// ```
/// use growvec::growvec;
///
/// let a = growvec![1, 2, 3];
/// assert_eq!(a.capacity(), 3);
///
/// let b = growvec![String::from("x"); 2];
/// assert_eq!(b, ["x", "x"]);
///
/// let c: growvec::GrowVec<u8> = growvec![];
/// assert!(c.is_empty());
/// ```
#[macro_export]
macro_rules! growvec {
    () => {
        $crate::GrowVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::GrowVec::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::GrowVec::from([$($x),+])
    };
}
