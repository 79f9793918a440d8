//! # RESP codec
//!
//! Encoder and decoder for the RESP2 wire format used by Redis-compatible
//! key-value servers.
//!
//! The decoder is a pure function over a byte slice: it takes a buffer and
//! an offset and returns one [`Frame`] plus the offset of the first
//! unconsumed byte. A buffer that ends mid-frame yields
//! [`DecodeError::Incomplete`], so a caller accumulating partial network
//! reads can simply retry from offset 0 as more bytes arrive.
//!
//! ## Example
//!
//! ```rust
//! let (frame, consumed) = resp::decode(b"+OK\r\n", 0).unwrap();
//! assert_eq!(frame.as_str(), Some("OK"));
//! assert_eq!(consumed, 5);
//! ```

mod decode;
mod encode;
mod error;
mod types;
mod utils;

pub use decode::decode;
pub use encode::encode_command;
pub use error::DecodeError;
pub use types::Frame;
