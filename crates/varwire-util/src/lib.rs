// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte utilities shared by the varwire builder and parser.
//!
//! Every multi-byte integer on the wire is little-endian. The conversions here
//! work on fixed-size arrays so callers slice exactly once and never index past
//! a checked range.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Parses a hexadecimal string into bytes.
///
/// The string must have an even number of characters and contain only
/// valid hexadecimal digits (0-9, a-f, A-F). Whitespace is skipped so wire
/// fixtures can be grouped by field.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use varwire_util::hex_to_bytes;
///
/// let bytes = hex_to_bytes("fd 3412");
/// assert_eq!(bytes, vec![0xfd, 0x34, 0x12]);
/// ```
#[inline]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    let digits: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
    assert!(digits.len() % 2 == 0, "odd number of hex digits");

    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}

/// Renders bytes as lowercase hex, two digits per byte.
///
/// # Example
///
/// ```
/// use varwire_util::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0xfe, 0x01, 0x00]), "fe0100");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(char::from(DIGITS[usize::from(byte >> 4)]));
        out.push(char::from(DIGITS[usize::from(byte & 0x0f)]));
    }
    out
}

/// Generates `{type}_from_le` and `{type}_to_le` functions for integer types.
macro_rules! impl_le_conversions {
    ($type:ty, $size:expr, $fn_from:ident, $fn_to:ident) => {
        #[doc = concat!("Reads a little-endian `", stringify!($type), "` from exactly ", stringify!($size), " bytes.")]
        #[inline(always)]
        pub fn $fn_from(bytes: &[u8; $size]) -> $type {
            let mut value: $type = 0;
            for (i, byte) in bytes.iter().enumerate() {
                value |= (*byte as $type) << (8 * i);
            }
            value
        }

        #[doc = concat!("Writes a `", stringify!($type), "` as ", stringify!($size), " little-endian bytes.")]
        #[inline(always)]
        pub fn $fn_to(value: $type) -> [u8; $size] {
            let mut bytes = [0u8; $size];
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (value >> (8 * i)) as u8;
            }
            bytes
        }
    };
}

impl_le_conversions!(u16, 2, u16_from_le, u16_to_le);
impl_le_conversions!(u32, 4, u32_from_le, u32_to_le);
impl_le_conversions!(u64, 8, u64_from_le, u64_to_le);

/// Copies the first `N` bytes of `src` into an array.
///
/// Returns `None` when `src` is shorter than `N`.
#[inline(always)]
pub fn take_array<const N: usize>(src: &[u8]) -> Option<[u8; N]> {
    let head = src.get(..N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(head);
    Some(out)
}
