//! Integer addition across the C boundary.

use crate::shim;

/// Add two native-width signed integers, wrapping on overflow.
///
/// C signature: `intptr_t add(intptr_t a, intptr_t b)`.
#[no_mangle]
pub extern "C" fn add(a: isize, b: isize) -> isize {
    tracing::trace!(a, b, "add");
    shim::add(a, b)
}
