// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use varwire_core::{VarInt, VarIntPrefix};
use varwire_util::{take_array, u16_from_le, u32_from_le};

use crate::error::ParseError;
use crate::state::{FailureContext, FailureReason, ParseOp, ParserState};

/// Reads typed values from an owned copy of a message.
///
/// Invariant: while the parser is active, `pointer <= buffer.len()`. The
/// pointer only overshoots after a move that immediately latches a failure.
#[derive(Debug, Clone)]
pub struct MessageParser {
    buffer: Box<[u8]>,
    pointer: usize,
    state: ParserState,
}

impl MessageParser {
    /// Copies `raw` so later changes by the caller cannot reach the parser.
    pub fn new(raw: &[u8]) -> Self {
        Self::from(raw)
    }

    /// Length of the parsed buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` for an empty buffer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Offset of the next read.
    #[inline]
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Bytes left between the pointer and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.pointer)
    }

    /// Returns `true` once any operation has failed.
    #[inline]
    pub fn has_failed(&self) -> bool {
        self.state.is_failed()
    }

    /// Current sticky state.
    #[inline]
    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// The snapshot captured at the first failure.
    #[inline]
    pub fn failure(&self) -> Option<&FailureContext> {
        self.state.failure()
    }

    /// Turns the sticky state into a `Result`, for use after a batch of reads.
    pub fn finish(&self) -> Result<(), ParseError> {
        match self.state.failure() {
            None => Ok(()),
            Some(context) => Err(ParseError::from(*context)),
        }
    }

    /// Latches the failed state. Only the first call records a snapshot.
    fn mark_failed(&mut self, operation: ParseOp, reason: FailureReason) -> bool {
        if self.has_failed() {
            return false;
        }

        let context = FailureContext {
            operation,
            pointer: self.pointer,
            buffer_len: self.buffer.len(),
            reason,
        };

        tracing::debug!(
            operation = operation.name(),
            pointer = context.pointer,
            buffer_len = context.buffer_len,
            reason = %reason,
            "message parser failed"
        );

        self.state = ParserState::Failed(Box::new(context));
        true
    }

    /// Fails unless `n` bytes remain at the pointer.
    fn check(&mut self, operation: ParseOp, n: usize) -> bool {
        let in_bounds = self
            .pointer
            .checked_add(n)
            .is_some_and(|end| end <= self.buffer.len());

        if !in_bounds {
            self.mark_failed(operation, FailureReason::OutOfBounds { requested: n });
        }

        in_bounds
    }

    /// Takes `n` bytes at the pointer and advances past them.
    fn take(&mut self, operation: ParseOp, n: usize) -> Option<&[u8]> {
        if self.has_failed() || !self.check(operation, n) {
            return None;
        }

        let start = self.pointer;
        self.pointer += n;
        Some(&self.buffer[start..self.pointer])
    }

    fn take_array<const N: usize>(&mut self, operation: ParseOp) -> Option<[u8; N]> {
        self.take(operation, N).and_then(take_array::<N>)
    }

    /// Returns `true` if at least `n` bytes remain at the pointer.
    ///
    /// With `n == 0` this only checks that the pointer itself is in range.
    pub fn pointer_check(&mut self, n: usize) -> bool {
        if self.has_failed() {
            return false;
        }

        self.check(ParseOp::PointerCheck, n)
    }

    /// Moves the pointer by a signed `amount` and re-validates it.
    pub fn incr_pointer(&mut self, amount: isize) -> bool {
        if self.has_failed() {
            return false;
        }

        let Some(target) = self.pointer.checked_add_signed(amount) else {
            self.mark_failed(
                ParseOp::IncrPointer,
                FailureReason::InvalidPointerMove { amount },
            );
            return false;
        };

        self.pointer = target;
        self.check(ParseOp::IncrPointer, 0)
    }

    /// Moves the pointer to `position` and re-validates it.
    pub fn set_pointer(&mut self, position: usize) -> bool {
        if self.has_failed() {
            return false;
        }

        self.pointer = position;
        self.check(ParseOp::SetPointer, 0)
    }

    /// Reads one byte.
    pub fn read_int8(&mut self) -> Option<u8> {
        self.take_array::<1>(ParseOp::ReadInt8).map(|[byte]| byte)
    }

    /// Reads a little-endian `u16`.
    pub fn read_uint16_le(&mut self) -> Option<u16> {
        self.take_array::<2>(ParseOp::ReadUInt16Le)
            .map(|bytes| u16_from_le(&bytes))
    }

    /// Reads a little-endian `u32`.
    pub fn read_uint32_le(&mut self) -> Option<u32> {
        self.take_array::<4>(ParseOp::ReadUInt32Le)
            .map(|bytes| u32_from_le(&bytes))
    }

    /// Reads a VarInt. The `0xff` form comes back as [`VarInt::Wide`].
    pub fn read_var_int(&mut self) -> Option<VarInt> {
        self.var_int(ParseOp::ReadVarInt)
    }

    fn var_int(&mut self, operation: ParseOp) -> Option<VarInt> {
        let [marker] = self.take_array::<1>(operation)?;

        match VarIntPrefix::from_marker(marker) {
            VarIntPrefix::Inline(value) => Some(VarInt::Value(u64::from(value))),
            VarIntPrefix::U16 => self
                .take_array::<2>(operation)
                .map(|bytes| VarInt::Value(u64::from(u16_from_le(&bytes)))),
            VarIntPrefix::U32 => self
                .take_array::<4>(operation)
                .map(|bytes| VarInt::Value(u64::from(u32_from_le(&bytes)))),
            VarIntPrefix::U64 => self.take_array::<8>(operation).map(VarInt::Wide),
        }
    }

    /// Reads a VarInt length and that many single-byte characters.
    ///
    /// Each byte maps to the character with the same code point.
    pub fn read_var_string(&mut self) -> Option<String> {
        let operation = ParseOp::ReadVarString;

        let len = match self.var_int(operation)? {
            VarInt::Value(len) => len,
            VarInt::Wide(_) => {
                self.mark_failed(operation, FailureReason::NonNumericLength);
                return None;
            }
        };

        // A length that does not fit usize cannot fit the buffer either.
        let len = usize::try_from(len).unwrap_or(usize::MAX);

        self.take(operation, len)
            .map(|bytes| bytes.iter().copied().map(char::from).collect())
    }

    /// Copies out exactly `length` bytes and advances past them.
    pub fn raw(&mut self, length: usize) -> Option<Vec<u8>> {
        self.take(ParseOp::Raw, length).map(<[u8]>::to_vec)
    }
}

impl From<&[u8]> for MessageParser {
    fn from(raw: &[u8]) -> Self {
        Self::from(raw.to_vec())
    }
}

impl From<Vec<u8>> for MessageParser {
    fn from(raw: Vec<u8>) -> Self {
        Self {
            buffer: raw.into_boxed_slice(),
            pointer: 0,
            state: ParserState::Active,
        }
    }
}
