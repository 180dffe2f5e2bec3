// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use varwire_util::{bytes_to_hex, u64_from_le};

use crate::width::Width;
use crate::{VARINT_U16_MARKER, VARINT_U32_MARKER, VARINT_U64_MARKER};

/// The leading byte of a VarInt and what follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarIntPrefix {
    /// The marker byte is the value itself.
    Inline(u8),
    /// `0xfd`, followed by a `u16`.
    U16,
    /// `0xfe`, followed by a `u32`.
    U32,
    /// `0xff`, followed by 8 bytes.
    U64,
}

impl VarIntPrefix {
    /// Picks the shortest prefix able to carry `value`.
    #[inline(always)]
    pub const fn for_value(value: u64) -> Self {
        if value < VARINT_U16_MARKER as u64 {
            Self::Inline(value as u8)
        } else if value <= u16::MAX as u64 {
            Self::U16
        } else if value <= u32::MAX as u64 {
            Self::U32
        } else {
            Self::U64
        }
    }

    /// Classifies a marker byte read off the wire.
    #[inline(always)]
    pub const fn from_marker(marker: u8) -> Self {
        match marker {
            VARINT_U16_MARKER => Self::U16,
            VARINT_U32_MARKER => Self::U32,
            VARINT_U64_MARKER => Self::U64,
            value => Self::Inline(value),
        }
    }

    /// The byte written first: the value itself or a selector marker.
    #[inline(always)]
    pub const fn marker(self) -> u8 {
        match self {
            Self::Inline(value) => value,
            Self::U16 => VARINT_U16_MARKER,
            Self::U32 => VARINT_U32_MARKER,
            Self::U64 => VARINT_U64_MARKER,
        }
    }

    /// Width of the integer following the marker, if any.
    #[inline(always)]
    pub const fn payload_width(self) -> Option<Width> {
        match self {
            Self::Inline(_) => None,
            Self::U16 => Some(Width::Int16),
            Self::U32 => Some(Width::Int32),
            Self::U64 => Some(Width::Int64),
        }
    }

    /// Total bytes on the wire, marker included: 1, 3, 5 or 9.
    #[inline(always)]
    pub const fn encoded_len(self) -> usize {
        match self.payload_width() {
            None => 1,
            Some(width) => 1 + width.bytes(),
        }
    }
}

/// A VarInt as read off the wire.
///
/// The 8-byte form is handed back undecoded. Callers that know the peer
/// writes a plain little-endian integer there can opt in with
/// [`VarInt::decode_wide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarInt {
    /// Decoded from the inline, `0xfd` or `0xfe` forms.
    Value(u64),
    /// The raw payload of the `0xff` form.
    Wide([u8; 8]),
}

impl VarInt {
    /// The numeric value, or `None` for the undecoded 8-byte form.
    #[inline]
    pub const fn value(&self) -> Option<u64> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Wide(_) => None,
        }
    }

    /// Raw payload of the 8-byte form.
    #[inline]
    pub const fn wide_bytes(&self) -> Option<&[u8; 8]> {
        match self {
            Self::Value(_) => None,
            Self::Wide(bytes) => Some(bytes),
        }
    }

    /// Returns `true` for the undecoded 8-byte form.
    #[inline]
    pub const fn is_wide(&self) -> bool {
        matches!(self, Self::Wide(_))
    }

    /// Reads the value, interpreting the 8-byte form as little-endian.
    pub fn decode_wide(&self) -> u64 {
        match self {
            Self::Value(value) => *value,
            Self::Wide(bytes) => u64_from_le(bytes),
        }
    }
}

impl From<u64> for VarInt {
    fn from(value: u64) -> Self {
        Self::Value(value)
    }
}

impl fmt::Display for VarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Wide(bytes) => write!(f, "wide:{}", bytes_to_hex(bytes)),
        }
    }
}
