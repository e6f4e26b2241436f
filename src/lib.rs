//! Export Shim - minimal C ABI bridge
//!
//! Exposes two functions to foreign callers by stable symbol name:
//! `add`, a wrapping integer adder, and `print_message`, which writes a
//! borrowed C string to stdout behind a fixed label.

pub mod config;
pub mod ffi;
pub mod shim;

pub use ffi::{add, print_message, shim_abi_version, shim_init_logging};
