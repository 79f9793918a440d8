//! Utility functions and constants for the RESP wire grammar.

use crate::error::DecodeError;

/// CRLF line ending
pub const CRLF: &[u8] = b"\r\n";

/// Type markers
pub const SIMPLE_STRING: u8 = b'+';
pub const ERROR: u8 = b'-';
pub const INTEGER: u8 = b':';
pub const BULK_STRING: u8 = b'$';
pub const ARRAY: u8 = b'*';

/// Find the position of the next CRLF at or after `from`
#[inline]
pub fn find_crlf(buf: &[u8], from: usize) -> Option<usize> {
	let mut at = from;
	while at < buf.len() {
		let i = memchr::memchr(b'\r', &buf[at..])?;
		let pos = at + i;
		if pos + 1 >= buf.len() {
			return None;
		}
		if buf[pos + 1] == b'\n' {
			return Some(pos);
		}
		at = pos + 1;
	}
	None
}

/// Read the line starting at `at` (without its CRLF), returning the line
/// and the offset just past the terminator
#[inline]
pub fn read_line(buf: &[u8], at: usize) -> Result<(&[u8], usize), DecodeError> {
	match find_crlf(buf, at) {
		Some(pos) => Ok((&buf[at..pos], pos + 2)),
		None => Err(DecodeError::Incomplete),
	}
}

/// Parse a signed decimal integer from a byte slice
#[inline]
pub fn parse_integer(buf: &[u8]) -> Result<i64, DecodeError> {
	let s = std::str::from_utf8(buf)?;
	s.parse::<i64>()
		.map_err(|e| DecodeError::InvalidInteger(e.to_string()))
}
