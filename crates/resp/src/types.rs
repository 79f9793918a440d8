//! RESP frame types.

use bytes::Bytes;

/// One decoded RESP2 protocol value.
///
/// Nil bulk strings and nil arrays (declared length `-1` on the wire) are
/// kept distinct from their empty counterparts: `BulkString(None)` is not
/// `BulkString(Some(b""))`, and `Array(None)` is not `Array(Some(vec![]))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
	/// Simple string: `+OK\r\n`
	SimpleString(Bytes),

	/// Error reply: `-ERR message\r\n`
	///
	/// Decodes successfully, but is tagged so callers can surface it as a
	/// command failure rather than a value.
	Error(Bytes),

	/// Integer: `:1000\r\n`
	Integer(i64),

	/// Bulk string: `$6\r\nfoobar\r\n`; `$-1\r\n` is `None`
	BulkString(Option<Bytes>),

	/// Array: `*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n`; `*-1\r\n` is `None`
	Array(Option<Vec<Frame>>),
}

impl Frame {
	/// Check if the frame is an error reply
	pub fn is_error(&self) -> bool {
		matches!(self, Frame::Error(_))
	}

	/// Check if the frame is a nil bulk string or nil array
	pub fn is_nil(&self) -> bool {
		matches!(self, Frame::BulkString(None) | Frame::Array(None))
	}

	/// Try to view the frame as a string slice
	pub fn as_str(&self) -> Option<&str> {
		match self.as_bytes() {
			Some(b) => std::str::from_utf8(b).ok(),
			None => None,
		}
	}

	/// Try to view the frame's text payload as bytes
	pub fn as_bytes(&self) -> Option<&Bytes> {
		match self {
			Frame::SimpleString(b) | Frame::BulkString(Some(b)) => Some(b),
			_ => None,
		}
	}

	/// Try to view the frame as an integer
	pub fn as_integer(&self) -> Option<i64> {
		match self {
			Frame::Integer(i) => Some(*i),
			_ => None,
		}
	}

	/// Try to view the frame as an array of frames
	pub fn as_array(&self) -> Option<&[Frame]> {
		match self {
			Frame::Array(Some(items)) => Some(items),
			_ => None,
		}
	}

	/// Convert the frame's text payload to a String, lossily
	pub fn to_string_lossy(&self) -> Option<String> {
		self.as_bytes()
			.map(|b| String::from_utf8_lossy(b).into_owned())
	}
}
