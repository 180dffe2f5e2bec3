// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cursor parser with sticky failure.
//!
//! `MessageParser` owns a private copy of its input and reads typed values
//! from a moving pointer. The first bounds violation latches the parser into
//! a failed state and records a [`FailureContext`]; from then on every read
//! returns `None` (or `false` for pointer moves) without touching the state.
//!
//! Callers run a batch of reads and check once at the end:
//!
//! ```rust
//! use varwire_parser::{MessageParser, ParseError};
//!
//! fn example() -> Result<(), ParseError> {
//!     let mut parser = MessageParser::new(&[0x7f, 0x11, 0x01, 0x00, 0x05, b'h', b'e']);
//!
//!     let version = parser.read_uint32_le();
//!     let agent = parser.read_var_string(); // claims 5 bytes, only 2 remain
//!     let after = parser.read_int8(); // inert
//!
//!     assert_eq!(version, Some(70_015));
//!     assert_eq!(agent, None);
//!     assert_eq!(after, None);
//!     assert!(parser.finish().is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! The 8-byte VarInt form is returned undecoded as
//! [`VarInt::Wide`](varwire_core::VarInt::Wide).

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod parser;
mod state;

pub use error::ParseError;
pub use parser::MessageParser;
pub use state::{FailureContext, FailureReason, ParseOp, ParserState};
pub use varwire_core::VarInt;
