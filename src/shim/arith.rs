//! Integer arithmetic exposed through the shim.

/// Add two native-width signed integers.
///
/// Overflow wraps in two's complement in every build profile, so
/// `add(isize::MAX, 1) == isize::MIN`.
#[inline]
pub fn add(a: isize, b: isize) -> isize {
    a.wrapping_add(b)
}
