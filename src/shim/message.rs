//! Message line formatting and output.
//!
//! A message line is `Dummy message: ` followed by the caller's bytes and a
//! newline. The bytes are copied verbatim; no encoding conversion happens.

use std::ffi::CStr;
use std::io::{self, Write};

use super::error::ShimResult;

/// Fixed label written before every message.
pub const MESSAGE_LABEL: &[u8] = b"Dummy message: ";

/// Build the complete output line for a message, newline included.
pub fn format_line(message: &CStr) -> Vec<u8> {
    let text = message.to_bytes();
    let mut line = Vec::with_capacity(MESSAGE_LABEL.len() + text.len() + 1);
    line.extend_from_slice(MESSAGE_LABEL);
    line.extend_from_slice(text);
    line.push(b'\n');
    line
}

/// Write one message line to `out` with a single `write_all`, then flush.
pub fn write_message<W: Write>(out: &mut W, message: &CStr) -> ShimResult<()> {
    let line = format_line(message);
    out.write_all(&line)?;
    out.flush()?;
    Ok(())
}

/// Write one message line to standard output while holding the stdout lock.
pub fn print_to_stdout(message: &CStr) -> ShimResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_message(&mut handle, message)
}
