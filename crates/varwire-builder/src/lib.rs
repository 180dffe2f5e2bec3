// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message builder with a hard size ceiling.
//!
//! `MessageBuilder` appends little-endian integers, VarInts and single-byte
//! strings to an owned buffer. Storage grows on demand with a spare margin to
//! amortize small appends, but never past the configured capacity limit: a
//! write that would cross it fails with [`BuilderError::CapacityExceeded`]
//! before any byte is written.
//!
//! # Example
//!
//! ```rust
//! use varwire_builder::{BuilderError, MessageBuilder};
//!
//! fn example() -> Result<(), BuilderError> {
//!     let mut builder = MessageBuilder::with_capacity_limit(64);
//!     builder
//!         .put_int32(70_015u32)?
//!         .put_var_int(0x1234)?
//!         .put_var_string("/varwire:0.1/")?;
//!
//!     let bytes = builder.raw();
//!     assert_eq!(&bytes[..4], &[0x7f, 0x11, 0x01, 0x00]);
//!     assert_eq!(&bytes[4..7], &[0xfd, 0x34, 0x12]);
//!     assert_eq!(bytes[7], 13);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Fixed-width inputs
//!
//! `put_int8` through `put_int64` take anything convertible into a
//! [`FieldValue`]: a number (negative signed values are rejected with
//! [`BuilderError::NegativeValue`]), a pre-encoded byte slice (copied verbatim, at most
//! `width` bytes) or a `chrono::DateTime` (32 and 64-bit only, written as whole
//! seconds since the epoch).
//!
//! The 64-bit writer fills the low four bytes only. Values above `u32::MAX`
//! are rejected with [`BuilderError::ValueOutOfRange`], which also applies to
//! VarInts that would need the `0xff` form.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod buffer;
mod builder;
mod config;
mod error;
mod field;

pub use buffer::CappedBuffer;
pub use builder::{INT64_WRITABLE_MAX, MessageBuilder};
pub use config::{
    BuilderConfig, DEFAULT_CAPACITY_LIMIT, DEFAULT_INITIAL_ALLOCATION, DEFAULT_SPARE_MARGIN,
};
pub use error::BuilderError;
pub use field::FieldValue;
