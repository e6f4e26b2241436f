//! C FFI layer.
//!
//! Every function here is `#[no_mangle] extern "C"`; the symbol names are
//! the contract with foreign callers. These are thin wrappers that handle
//! null checks and C-to-Rust conversion. The logic lives in `shim`.

pub mod abi;
pub mod message;
pub mod simple;

pub use abi::{shim_abi_version, shim_init_logging, SHIM_ABI_VERSION};
pub use message::print_message;
pub use simple::add;
