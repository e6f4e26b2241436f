//! Safe core of the shim.
//!
//! The FFI layer in `ffi/` converts raw arguments and calls into these
//! functions. Nothing in here touches raw pointers.

pub mod arith;
pub mod error;
pub mod message;

pub use arith::add;
pub use error::{ShimError, ShimResult};
pub use message::{format_line, print_to_stdout, write_message, MESSAGE_LABEL};
