// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Wire vocabulary for selector-prefixed messages.
//!
//! A VarInt is written as a single byte when it is below [`VARINT_U16_MARKER`],
//! otherwise as a marker byte followed by a little-endian integer:
//!
//! | Value range                    | Bytes on the wire             |
//! |--------------------------------|-------------------------------|
//! | `0x00..=0xfc`                  | the value                     |
//! | `0xfd..=0xffff`                | `0xfd` + 2 bytes LE           |
//! | `0x1_0000..=0xffff_ffff`       | `0xfe` + 4 bytes LE           |
//! | above `0xffff_ffff`            | `0xff` + 8 bytes LE           |
//!
//! A VarString is a VarInt length followed by one byte per character.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod varint;
mod width;

pub use varint::{VarInt, VarIntPrefix};
pub use width::Width;

/// Selector for a 2-byte VarInt payload.
pub const VARINT_U16_MARKER: u8 = 0xfd;
/// Selector for a 4-byte VarInt payload.
pub const VARINT_U32_MARKER: u8 = 0xfe;
/// Selector for an 8-byte VarInt payload.
pub const VARINT_U64_MARKER: u8 = 0xff;

/// Largest VarInt on the wire: marker plus 8 payload bytes.
pub const VARINT_MAX_LEN: usize = 9;
