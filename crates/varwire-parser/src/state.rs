// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use core::fmt;

/// Parser operation that can latch a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseOp {
    /// [`MessageParser::pointer_check`](crate::MessageParser::pointer_check)
    PointerCheck,
    /// [`MessageParser::incr_pointer`](crate::MessageParser::incr_pointer)
    IncrPointer,
    /// [`MessageParser::set_pointer`](crate::MessageParser::set_pointer)
    SetPointer,
    /// [`MessageParser::read_int8`](crate::MessageParser::read_int8)
    ReadInt8,
    /// [`MessageParser::read_uint16_le`](crate::MessageParser::read_uint16_le)
    ReadUInt16Le,
    /// [`MessageParser::read_uint32_le`](crate::MessageParser::read_uint32_le)
    ReadUInt32Le,
    /// [`MessageParser::read_var_int`](crate::MessageParser::read_var_int)
    ReadVarInt,
    /// [`MessageParser::read_var_string`](crate::MessageParser::read_var_string),
    /// including its length prefix.
    ReadVarString,
    /// [`MessageParser::raw`](crate::MessageParser::raw)
    Raw,
}

impl ParseOp {
    /// Method name of the operation, as used in log events.
    pub const fn name(self) -> &'static str {
        match self {
            Self::PointerCheck => "pointer_check",
            Self::IncrPointer => "incr_pointer",
            Self::SetPointer => "set_pointer",
            Self::ReadInt8 => "read_int8",
            Self::ReadUInt16Le => "read_uint16_le",
            Self::ReadUInt32Le => "read_uint32_le",
            Self::ReadVarInt => "read_var_int",
            Self::ReadVarString => "read_var_string",
            Self::Raw => "raw",
        }
    }
}

impl fmt::Display for ParseOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why the parser failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// Fewer than `requested` bytes remained at the pointer.
    OutOfBounds {
        /// Bytes the operation needed.
        requested: usize,
    },
    /// A relative move would take the pointer below zero or past `usize::MAX`.
    InvalidPointerMove {
        /// Signed move that was refused.
        amount: isize,
    },
    /// A length prefix used the undecoded 8-byte VarInt form.
    NonNumericLength,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { requested } => write!(f, "OutOfBounds: {requested} bytes requested"),
            Self::InvalidPointerMove { amount } => write!(f, "InvalidPointerMove: by {amount}"),
            Self::NonNumericLength => f.write_str("NonNumericLength"),
        }
    }
}

/// Snapshot taken when the parser first fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureContext {
    /// Public operation that failed.
    pub operation: ParseOp,
    /// Pointer at the moment of failure.
    pub pointer: usize,
    /// Length of the parsed buffer.
    pub buffer_len: usize,
    /// Why the operation failed.
    pub reason: FailureReason,
}

impl fmt::Display for FailureContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed at offset {} of {}: {}",
            self.operation, self.pointer, self.buffer_len, self.reason
        )
    }
}

/// Sticky parser state. `Failed` is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParserState {
    /// Reads proceed normally.
    #[default]
    Active,
    /// A read went out of bounds; every later call is inert.
    Failed(Box<FailureContext>),
}

impl ParserState {
    /// Returns `true` once a failure has been latched.
    #[inline(always)]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The snapshot captured at the first failure, if any.
    #[inline]
    pub fn failure(&self) -> Option<&FailureContext> {
        match self {
            Self::Active => None,
            Self::Failed(context) => Some(context),
        }
    }
}
