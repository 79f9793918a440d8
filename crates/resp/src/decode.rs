//! Offset-based recursive-descent RESP decoder.

use bytes::Bytes;

use crate::error::DecodeError;
use crate::types::Frame;
use crate::utils::*;

/// Decode one frame from `buf` starting at `offset`.
///
/// On success, returns the frame together with the offset of the first byte
/// after the frame's final terminator. The buffer is never mutated, so the
/// same call can be repeated against a growing buffer until it no longer
/// reports [`DecodeError::Incomplete`].
///
/// An array whose elements are not all present reports `Incomplete` as a
/// whole; no partially filled array is ever returned.
pub fn decode(buf: &[u8], offset: usize) -> Result<(Frame, usize), DecodeError> {
	if offset >= buf.len() {
		return Err(DecodeError::Incomplete);
	}

	let marker = buf[offset];
	let at = offset + 1;

	match marker {
		SIMPLE_STRING => {
			let (line, next) = read_line(buf, at)?;
			Ok((Frame::SimpleString(Bytes::copy_from_slice(line)), next))
		}
		ERROR => {
			let (line, next) = read_line(buf, at)?;
			Ok((Frame::Error(Bytes::copy_from_slice(line)), next))
		}
		INTEGER => {
			let (line, next) = read_line(buf, at)?;
			let num = parse_integer(line)?;
			Ok((Frame::Integer(num), next))
		}
		BULK_STRING => decode_bulk_string(buf, at),
		ARRAY => decode_array(buf, at),
		other => Err(DecodeError::InvalidTypeMarker(other as char)),
	}
}

/// `$6\r\nfoobar\r\n`, or `$-1\r\n` for nil. The payload's trailing CRLF is
/// consumed without being inspected.
fn decode_bulk_string(buf: &[u8], at: usize) -> Result<(Frame, usize), DecodeError> {
	let (line, next) = read_line(buf, at)?;
	let length = parse_integer(line)?;

	if length == -1 {
		return Ok((Frame::BulkString(None), next));
	}
	if length < -1 {
		return Err(DecodeError::InvalidBulkLength(length));
	}

	let length = length as usize;
	if buf.len() < next + length + 2 {
		return Err(DecodeError::Incomplete);
	}

	let data = Bytes::copy_from_slice(&buf[next..next + length]);
	Ok((Frame::BulkString(Some(data)), next + length + 2))
}

/// `*2\r\n<frame><frame>`, or `*-1\r\n` for nil. Recurses once per declared
/// element; any element reporting `Incomplete` aborts the whole array so the
/// caller can retry from the original offset once more bytes arrive.
fn decode_array(buf: &[u8], at: usize) -> Result<(Frame, usize), DecodeError> {
	let (line, next) = read_line(buf, at)?;
	let count = parse_integer(line)?;

	if count == -1 {
		return Ok((Frame::Array(None), next));
	}
	if count < -1 {
		return Err(DecodeError::InvalidArrayLength(count));
	}

	let mut items = Vec::new();
	let mut at = next;
	for _ in 0..count {
		let (item, after) = decode(buf, at)?;
		items.push(item);
		at = after;
	}

	Ok((Frame::Array(Some(items)), at))
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[test]
	fn test_decode_simple_string() {
		let (frame, consumed) = decode(b"+OK\r\n", 0).unwrap();
		assert_eq!(frame, Frame::SimpleString(Bytes::from("OK")));
		assert_eq!(consumed, 5);
	}

	#[test]
	fn test_decode_error() {
		let (frame, _) = decode(b"-ERR unknown command\r\n", 0).unwrap();
		assert_eq!(frame, Frame::Error(Bytes::from("ERR unknown command")));
		assert!(frame.is_error());
	}

	#[rstest]
	#[case(b":1000\r\n", 1000)]
	#[case(b":-42\r\n", -42)]
	#[case(b":0\r\n", 0)]
	fn test_decode_integer(#[case] input: &[u8], #[case] expected: i64) {
		let (frame, consumed) = decode(input, 0).unwrap();
		assert_eq!(frame, Frame::Integer(expected));
		assert_eq!(consumed, input.len());
	}

	#[test]
	fn test_decode_integer_non_numeric() {
		let result = decode(b":abc\r\n", 0);
		assert!(matches!(result, Err(DecodeError::InvalidInteger(_))));
	}

	#[test]
	fn test_decode_bulk_string() {
		let (frame, consumed) = decode(b"$6\r\nfoobar\r\n", 0).unwrap();
		assert_eq!(frame, Frame::BulkString(Some(Bytes::from("foobar"))));
		assert_eq!(consumed, 12);
	}

	#[test]
	fn test_decode_nil_bulk_string() {
		let (frame, consumed) = decode(b"$-1\r\n", 0).unwrap();
		assert_eq!(frame, Frame::BulkString(None));
		assert_eq!(consumed, 5);
	}

	#[test]
	fn test_decode_empty_bulk_string() {
		let (frame, consumed) = decode(b"$0\r\n\r\n", 0).unwrap();
		assert_eq!(frame, Frame::BulkString(Some(Bytes::new())));
		assert_eq!(consumed, 6);
		assert_ne!(frame, Frame::BulkString(None));
	}

	#[test]
	fn test_decode_bulk_string_binary_payload() {
		// Payload bytes are raw; an embedded CRLF is data, not a terminator
		let (frame, consumed) = decode(b"$4\r\na\r\nb\r\n", 0).unwrap();
		assert_eq!(frame, Frame::BulkString(Some(Bytes::from(&b"a\r\nb"[..]))));
		assert_eq!(consumed, 10);
	}

	#[test]
	fn test_decode_bulk_length_below_minus_one() {
		let result = decode(b"$-2\r\n\r\n", 0);
		assert_eq!(result, Err(DecodeError::InvalidBulkLength(-2)));
	}

	#[test]
	fn test_decode_array() {
		let (frame, consumed) = decode(b"*2\r\n$1\r\na\r\n$1\r\nb\r\n", 0).unwrap();
		let expected = Frame::Array(Some(vec![
			Frame::BulkString(Some(Bytes::from("a"))),
			Frame::BulkString(Some(Bytes::from("b"))),
		]));
		assert_eq!(frame, expected);
		assert_eq!(consumed, 18);
	}

	#[test]
	fn test_decode_nil_array() {
		let (frame, consumed) = decode(b"*-1\r\n", 0).unwrap();
		assert_eq!(frame, Frame::Array(None));
		assert_eq!(consumed, 5);
	}

	#[test]
	fn test_decode_empty_array() {
		let (frame, consumed) = decode(b"*0\r\n", 0).unwrap();
		assert_eq!(frame, Frame::Array(Some(Vec::new())));
		assert_eq!(consumed, 4);
		assert_ne!(frame, Frame::Array(None));
	}

	#[test]
	fn test_decode_nested_array() {
		let (frame, consumed) = decode(b"*2\r\n*2\r\n:1\r\n:2\r\n:3\r\n", 0).unwrap();
		let expected = Frame::Array(Some(vec![
			Frame::Array(Some(vec![Frame::Integer(1), Frame::Integer(2)])),
			Frame::Integer(3),
		]));
		assert_eq!(frame, expected);
		assert_eq!(consumed, 20);
	}

	#[test]
	fn test_decode_array_count_below_minus_one() {
		let result = decode(b"*-3\r\n", 0);
		assert_eq!(result, Err(DecodeError::InvalidArrayLength(-3)));
	}

	#[rstest]
	#[case(b"")]
	#[case(b"+")]
	#[case(b"+OK")]
	#[case(b"+OK\r")]
	#[case(b":10")]
	#[case(b"$6\r\nfoo")]
	#[case(b"$6\r\nfoobar")]
	#[case(b"$6\r\nfoobar\r")]
	#[case(b"*1\r\n")]
	#[case(b"*2\r\n$1\r\na\r\n")]
	fn test_decode_incomplete(#[case] input: &[u8]) {
		assert_eq!(decode(input, 0), Err(DecodeError::Incomplete));
	}

	#[test]
	fn test_partial_array_never_returned() {
		// Declares 2 elements, carries 1: the whole decode is incomplete,
		// not a one-element array
		let buf = b"*2\r\n$1\r\na\r\n";
		assert_eq!(decode(buf, 0), Err(DecodeError::Incomplete));

		let mut full = buf.to_vec();
		full.extend_from_slice(b"$1\r\nb\r\n");
		let (frame, consumed) = decode(&full, 0).unwrap();
		assert_eq!(frame.as_array().map(|a| a.len()), Some(2));
		assert_eq!(consumed, full.len());
	}

	#[test]
	fn test_decode_invalid_marker() {
		let result = decode(b"!3\r\nERR\r\n", 0);
		assert_eq!(result, Err(DecodeError::InvalidTypeMarker('!')));
	}

	#[test]
	fn test_decode_at_offset() {
		let buf = b"+OK\r\n:7\r\n";
		let (first, next) = decode(buf, 0).unwrap();
		assert_eq!(first, Frame::SimpleString(Bytes::from("OK")));

		let (second, end) = decode(buf, next).unwrap();
		assert_eq!(second, Frame::Integer(7));
		assert_eq!(end, buf.len());
	}

	#[test]
	fn test_decode_is_idempotent() {
		let buf = b"*2\r\n$3\r\nfoo\r\n:12\r\n";
		let first = decode(buf, 0).unwrap();
		let second = decode(buf, 0).unwrap();
		assert_eq!(first, second);
	}
}
