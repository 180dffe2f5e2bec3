// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Default ceiling for a single message, in bytes.
pub const DEFAULT_CAPACITY_LIMIT: usize = 20_000_000;
/// Default physical allocation made when a builder is created.
pub const DEFAULT_INITIAL_ALLOCATION: usize = 10_000;
/// Default extra room reserved whenever the buffer has to grow.
pub const DEFAULT_SPARE_MARGIN: usize = 512;

/// Sizing policy for a [`MessageBuilder`](crate::MessageBuilder).
///
/// The initial allocation is clamped to the capacity limit, so a builder
/// never holds more memory than the largest message it may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Hard ceiling on the total message length.
    pub capacity_limit: usize,
    /// Bytes allocated up front.
    pub initial_allocation: usize,
    /// Bytes allocated beyond the immediate need on every growth.
    pub spare_margin: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            capacity_limit: DEFAULT_CAPACITY_LIMIT,
            initial_allocation: DEFAULT_INITIAL_ALLOCATION,
            spare_margin: DEFAULT_SPARE_MARGIN,
        }
    }
}

impl BuilderConfig {
    /// Sets the hard ceiling on the total message length.
    #[must_use]
    pub fn with_capacity_limit(mut self, capacity_limit: usize) -> Self {
        self.capacity_limit = capacity_limit;
        self
    }

    /// Sets the number of bytes allocated up front.
    #[must_use]
    pub fn with_initial_allocation(mut self, initial_allocation: usize) -> Self {
        self.initial_allocation = initial_allocation;
        self
    }

    /// Sets the growth margin.
    #[must_use]
    pub fn with_spare_margin(mut self, spare_margin: usize) -> Self {
        self.spare_margin = spare_margin;
        self
    }

    /// Physical size of the first allocation.
    #[inline]
    pub fn effective_initial_allocation(&self) -> usize {
        self.initial_allocation.min(self.capacity_limit)
    }
}
