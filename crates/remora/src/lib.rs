//! # Remora
//!
//! A minimal command line client for RESP key-value servers: one
//! connection per command, one request, one response.
//!
//! The protocol codec lives in the `resp` crate; this crate supplies the
//! pieces around it — configuration, the transport loop that reassembles a
//! response from partial reads, shell-style tokenization of typed command
//! lines, reply formatting, and the interactive prompt.

pub mod config;
pub mod format;
pub mod logger;
pub mod repl;
pub mod tokenize;
pub mod transport;
