//! Error types for RESP decoding.

use thiserror::Error;

/// Outcome of a failed decode attempt.
///
/// `Incomplete` is retryable: the buffer simply ends before the frame does,
/// and the same decode call may succeed once more bytes have arrived. Every
/// other variant is a protocol violation and is never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
	/// Buffer ends before the frame can be fully read
	#[error("incomplete frame, need more bytes")]
	Incomplete,

	/// Unknown leading type marker
	#[error("invalid type marker: {0:?}")]
	InvalidTypeMarker(char),

	/// Integer or length payload that does not parse as a signed integer
	#[error("invalid integer: {0}")]
	InvalidInteger(String),

	/// Declared bulk string length below -1
	#[error("invalid bulk string length: {0}")]
	InvalidBulkLength(i64),

	/// Declared array element count below -1
	#[error("invalid array length: {0}")]
	InvalidArrayLength(i64),

	/// Non-UTF-8 bytes where the wire grammar requires decimal text
	#[error("invalid UTF-8: {0}")]
	Utf8(String),
}

impl From<std::str::Utf8Error> for DecodeError {
	fn from(e: std::str::Utf8Error) -> Self {
		DecodeError::Utf8(e.to_string())
	}
}
