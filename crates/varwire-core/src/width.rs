// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

/// Fixed integer widths used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Width {
    /// 1 byte.
    Int8 = 1,
    /// 2 bytes.
    Int16 = 2,
    /// 4 bytes.
    Int32 = 4,
    /// 8 bytes.
    Int64 = 8,
}

impl Width {
    /// Number of bytes this width occupies.
    #[inline(always)]
    pub const fn bytes(self) -> usize {
        self as usize
    }

    /// Largest unsigned value the width can hold.
    #[inline(always)]
    pub const fn max_value(self) -> u64 {
        match self {
            Self::Int8 => u8::MAX as u64,
            Self::Int16 => u16::MAX as u64,
            Self::Int32 => u32::MAX as u64,
            Self::Int64 => u64::MAX,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "int{}", self.bytes() * 8)
    }
}
