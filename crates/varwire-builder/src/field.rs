// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use chrono::{DateTime, TimeZone, Utc};

/// Input accepted by the fixed-width writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Encoded little-endian at the requested width.
    Number(u64),
    /// Signed input, so unsuffixed literals work; negatives are rejected.
    Signed(i64),
    /// Pre-encoded bytes; at most `width` of them are copied verbatim.
    Raw(&'a [u8]),
    /// Written as whole seconds since the Unix epoch.
    Timestamp(DateTime<Utc>),
}

macro_rules! impl_from_unsigned {
    ($($type:ty),*) => {
        $(
            impl From<$type> for FieldValue<'_> {
                #[inline(always)]
                fn from(value: $type) -> Self {
                    Self::Number(value as u64)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);

macro_rules! impl_from_signed {
    ($($type:ty),*) => {
        $(
            impl From<$type> for FieldValue<'_> {
                #[inline(always)]
                fn from(value: $type) -> Self {
                    Self::Signed(value as i64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);

impl<'a> From<&'a [u8]> for FieldValue<'a> {
    #[inline(always)]
    fn from(bytes: &'a [u8]) -> Self {
        Self::Raw(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for FieldValue<'a> {
    #[inline(always)]
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Raw(bytes.as_slice())
    }
}

impl<'a> From<&'a Vec<u8>> for FieldValue<'a> {
    #[inline(always)]
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Raw(bytes.as_slice())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for FieldValue<'_> {
    fn from(timestamp: DateTime<Tz>) -> Self {
        Self::Timestamp(timestamp.with_timezone(&Utc))
    }
}
