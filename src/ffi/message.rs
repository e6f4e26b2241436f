//! Message printing across the C boundary.

use std::ffi::CStr;
use std::os::raw::c_char;

use crate::shim::{self, ShimError};

/// Write `Dummy message: <message>\n` to standard output.
///
/// The text is borrowed for the duration of the call only. Its bytes are
/// written as-is. Write failures are logged and swallowed so nothing
/// unwinds into the caller.
///
/// # Safety
/// - `message` must point to a valid null-terminated string, or be null
/// - The string must not be mutated or freed while the call runs
///
/// A null `message` prints as the empty string: `Dummy message: \n`.
#[no_mangle]
pub unsafe extern "C" fn print_message(message: *const c_char) {
    let message = if message.is_null() {
        let err = ShimError::NullPointer { arg: "message" };
        tracing::warn!(%err, "print_message treating null as empty");
        c""
    } else {
        CStr::from_ptr(message)
    };
    tracing::trace!(len = message.to_bytes().len(), "print_message");

    if let Err(err) = shim::print_to_stdout(message) {
        tracing::error!(%err, "print_message failed to write");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_print_message_null_does_not_crash() {
        unsafe {
            // Should not crash
            print_message(ptr::null());
        }
    }

    #[test]
    fn test_print_message_valid() {
        unsafe {
            print_message(c"hello".as_ptr());
            print_message(c"".as_ptr());
        }
    }
}
