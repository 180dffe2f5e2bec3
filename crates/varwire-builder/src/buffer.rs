// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable byte buffer with a hard ceiling.
use alloc::vec;
use alloc::vec::Vec;

use crate::config::BuilderConfig;
use crate::error::BuilderError;

/// Owned byte buffer that grows with a spare margin up to a fixed limit.
///
/// The physical allocation is zero-filled and always at least as long as the
/// written region. Growth never shrinks the buffer and never goes past the
/// limit, even when the spare margin would ask for more.
#[derive(Debug, Clone)]
pub struct CappedBuffer {
    cursor: usize,
    limit: usize,
    spare_margin: usize,
    bytes: Vec<u8>,
}

impl Default for CappedBuffer {
    fn default() -> Self {
        Self::with_config(&BuilderConfig::default())
    }
}

impl CappedBuffer {
    #[inline(always)]
    fn debug_assert_invariant(&self) {
        debug_assert!(
            self.cursor <= self.bytes.len() && self.bytes.len() <= self.limit,
            "Invariant violated: cursor ({}) <= allocated ({}) <= limit ({})",
            self.cursor,
            self.bytes.len(),
            self.limit
        );
    }

    /// Creates an empty buffer sized by `config`.
    pub fn with_config(config: &BuilderConfig) -> Self {
        Self {
            cursor: 0,
            limit: config.capacity_limit,
            spare_margin: config.spare_margin,
            bytes: vec![0u8; config.effective_initial_allocation()],
        }
    }

    /// Bytes written so far.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cursor
    }

    /// Returns `true` if nothing has been written.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Physical size of the current allocation.
    #[inline(always)]
    pub fn allocated(&self) -> usize {
        self.bytes.len()
    }

    /// Hard ceiling on [`len`](Self::len).
    #[inline(always)]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Bytes that can still be written before hitting the limit.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.limit - self.cursor
    }

    /// Makes room for `additional` more bytes.
    ///
    /// Fails with [`BuilderError::CapacityExceeded`] when the write would
    /// cross the limit. Nothing is reallocated in that case.
    pub fn ensure_size(&mut self, additional: usize) -> Result<(), BuilderError> {
        let required = self
            .cursor
            .checked_add(additional)
            .ok_or(BuilderError::Overflow)?;

        if required > self.limit {
            tracing::debug!(
                limit = self.limit,
                required,
                written = self.cursor,
                "rejected write past message capacity"
            );
            return Err(BuilderError::CapacityExceeded {
                limit: self.limit,
                required,
            });
        }

        if required > self.bytes.len() {
            self.grow_to(required);
        }

        Ok(())
    }

    /// Reallocates to `required` plus the spare margin, capped at the limit.
    #[cold]
    #[inline(never)]
    fn grow_to(&mut self, required: usize) {
        let new_len = self
            .limit
            .min(required.saturating_add(self.spare_margin));

        tracing::trace!(
            from = self.bytes.len(),
            to = new_len,
            "growing message buffer"
        );

        self.bytes.resize(new_len, 0);
        self.debug_assert_invariant();
    }

    /// Appends `src`, growing if needed.
    pub fn write(&mut self, src: &[u8]) -> Result<(), BuilderError> {
        self.ensure_size(src.len())?;

        let end = self.cursor + src.len();
        self.bytes[self.cursor..end].copy_from_slice(src);
        self.cursor = end;

        // Invariant must be preserved before returning.
        self.debug_assert_invariant();

        Ok(())
    }

    /// Appends `count` zero bytes.
    pub fn write_zeros(&mut self, count: usize) -> Result<(), BuilderError> {
        self.ensure_size(count)?;

        let end = self.cursor + count;
        self.bytes[self.cursor..end].fill(0);
        self.cursor = end;

        self.debug_assert_invariant();

        Ok(())
    }

    /// The written region, without the spare allocation behind it.
    #[inline(always)]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.cursor]
    }

    /// Copies the written region into a vector of exactly [`len`](Self::len) bytes.
    #[inline]
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }
}
