//! The transport loop: one connection, one request, one response.

use std::io;

use bytes::BytesMut;
use resp::DecodeError;
use resp::Frame;
use thiserror::Error;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::config::ClientConfig;

/// Give up on a response once this much data has accumulated without
/// resolving into a frame. 512 MiB is the protocol's conventional bulk
/// string ceiling.
pub const MAX_RESPONSE_BYTES: usize = 512 * 1024 * 1024;

/// Failures of one request/response exchange.
///
/// Each invocation is independent; nothing here is retried automatically,
/// and a server `Error` reply is not a transport failure — it comes back as
/// a successfully decoded [`Frame::Error`].
#[derive(Error, Debug)]
pub enum TransportError {
	/// Connect or read exceeded its configured timeout
	#[error("connection timed out")]
	Timeout,

	/// The peer actively refused the connection
	#[error("connection refused")]
	Refused,

	/// The peer closed the connection before a complete response arrived
	#[error("connection closed before a complete response")]
	ConnectionClosed,

	/// The accumulated response passed [`MAX_RESPONSE_BYTES`] unresolved
	#[error("response of {0} bytes exceeds the maximum size")]
	ResponseTooLarge(usize),

	/// The peer sent bytes that violate the wire grammar
	#[error("protocol error: {0}")]
	Protocol(#[from] DecodeError),

	/// Any other I/O failure
	#[error("i/o error: {0}")]
	Io(#[from] io::Error),
}

/// Execute one command against the configured server.
///
/// Opens a connection, sends the encoded request, then accumulates reads
/// until the decoder consumes the buffer exactly — the response is one
/// frame with no trailing bytes. The socket lives only for this call and
/// is closed on every exit path.
pub async fn execute<S>(
	config: &ClientConfig,
	command: &str,
	args: &[S],
) -> Result<Frame, TransportError>
where
	S: AsRef<[u8]>,
{
	let request = resp::encode_command(command, args);

	let mut stream = connect(config).await?;
	stream.write_all(&request).await?;

	let mut buffer = BytesMut::with_capacity(4096);

	loop {
		let n = match timeout(config.io_timeout(), stream.read_buf(&mut buffer)).await {
			Ok(read) => read?,
			Err(_) => return Err(TransportError::Timeout),
		};

		if n == 0 {
			return Err(TransportError::ConnectionClosed);
		}

		match resp::decode(&buffer, 0) {
			Ok((frame, consumed)) if consumed == buffer.len() => return Ok(frame),
			// A frame that leaves trailing bytes is not settled yet:
			// the stopping condition is "exactly one fully-consuming
			// frame", not merely "decodable"
			Ok(_) | Err(DecodeError::Incomplete) => {}
			Err(e) => return Err(TransportError::Protocol(e)),
		}

		if buffer.len() > MAX_RESPONSE_BYTES {
			return Err(TransportError::ResponseTooLarge(buffer.len()));
		}
	}
}

async fn connect(config: &ClientConfig) -> Result<TcpStream, TransportError> {
	match timeout(config.connect_timeout(), TcpStream::connect(config.addr())).await {
		Ok(Ok(stream)) => Ok(stream),
		Ok(Err(e)) if e.kind() == io::ErrorKind::ConnectionRefused => Err(TransportError::Refused),
		Ok(Err(e)) if e.kind() == io::ErrorKind::TimedOut => Err(TransportError::Timeout),
		Ok(Err(e)) => Err(TransportError::Io(e)),
		Err(_) => Err(TransportError::Timeout),
	}
}
