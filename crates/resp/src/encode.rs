//! Request encoder.
//!
//! Requests are always an array of bulk strings, so they are rendered
//! straight to bytes; no [`Frame`](crate::Frame) is ever built on the way
//! out.

use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

use crate::utils::ARRAY;
use crate::utils::BULK_STRING;
use crate::utils::CRLF;

/// Encode a command name and its arguments as a RESP request.
///
/// The wire form is an array of `1 + args.len()` bulk strings: the command,
/// then each argument in order. Lengths are byte lengths, so multi-byte text
/// is measured after encoding. The command name is transmitted exactly as
/// given; case normalization is the caller's business.
pub fn encode_command<S>(command: &str, args: &[S]) -> Bytes
where
	S: AsRef<[u8]>,
{
	let mut buf = BytesMut::new();
	encode_length(&mut buf, ARRAY, 1 + args.len());
	encode_bulk_string(&mut buf, command.as_bytes());
	for arg in args {
		encode_bulk_string(&mut buf, arg.as_ref());
	}
	buf.freeze()
}

#[inline]
fn encode_length(buf: &mut BytesMut, marker: u8, length: usize) {
	buf.put_u8(marker);
	buf.put_slice(length.to_string().as_bytes());
	buf.put_slice(CRLF);
}

#[inline]
fn encode_bulk_string(buf: &mut BytesMut, data: &[u8]) {
	encode_length(buf, BULK_STRING, data.len());
	buf.put_slice(data);
	buf.put_slice(CRLF);
}
