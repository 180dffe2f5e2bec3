// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Capacity-capped message building and sticky-failure parsing for VarInt-framed wire formats.</em></p>
//!
//! ---
//!
//! varwire writes and reads the little-endian, selector-prefixed layout used by
//! peer-to-peer node protocols: fixed-width integers, VarInts and VarInt-prefixed
//! strings.
//!
//! # Features
//!
//! - **Hard size ceiling**: a builder refuses any write that would cross its limit, before
//!   touching the buffer
//! - **Amortized growth**: storage grows with a spare margin instead of on every append
//! - **Sticky failure**: the first out-of-bounds read latches the parser; later reads are inert
//! - **Diagnostics**: the failing operation, offset and reason are kept for later inspection
//! - **`no_std` compatible**: needs only `alloc`
//!
//! # Quick Start
//!
//! ```rust
//! use varwire::builder::MessageBuilder;
//! use varwire::parser::MessageParser;
//! use varwire::wire::VarInt;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut builder = MessageBuilder::new();
//!     builder
//!         .put_int32(70_015u32)?
//!         .put_int64(1u64)?
//!         .put_var_int(300)?
//!         .put_var_string("/varwire:0.1/")?;
//!
//!     let mut parser = MessageParser::from(builder.raw());
//!
//!     let version = parser.read_uint32_le();
//!     let services = parser.raw(8);
//!     let count = parser.read_var_int();
//!     let agent = parser.read_var_string();
//!     parser.finish()?;
//!
//!     assert_eq!(version, Some(70_015));
//!     assert_eq!(services, Some(vec![1, 0, 0, 0, 0, 0, 0, 0]));
//!     assert_eq!(count, Some(VarInt::Value(300)));
//!     assert_eq!(agent.as_deref(), Some("/varwire:0.1/"));
//!     Ok(())
//! }
//! ```
//!
//! # Limits
//!
//! - The 64-bit writer only fills the low four bytes; numbers above `u32::MAX` are rejected.
//! - The 8-byte VarInt form is read back undecoded as [`VarInt::Wide`](wire::VarInt::Wide).
//! - Strings are one byte per character; only code points below 256 survive a round trip.

#![cfg_attr(not(test), no_std)]

pub use varwire_builder as builder;
pub use varwire_parser as parser;
pub use varwire_util as util;

/// Wire vocabulary: VarInt selectors, widths and decoded VarInts.
pub mod wire {
    pub use varwire_core::*;
}
