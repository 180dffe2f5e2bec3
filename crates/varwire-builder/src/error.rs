// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for varwire-builder.

use thiserror::Error;
use varwire_core::Width;

/// Error type for [`MessageBuilder`](crate::MessageBuilder) writes.
///
/// Every variant is raised before the buffer is touched, so a failed call
/// leaves the message exactly as it was.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BuilderError {
    /// The write would push the message past its capacity limit.
    #[error("Message size is limited to {limit} bytes (write requires {required})")]
    CapacityExceeded {
        /// Configured ceiling.
        limit: usize,
        /// Total length the write would have produced.
        required: usize,
    },

    /// Integer overflow when computing the required length.
    #[error("Integer overflow: message length would exceed usize::MAX")]
    Overflow,

    /// A numeric value does not fit the requested width.
    #[error("ValueOutOfRange: {value} does not fit in {width}")]
    ValueOutOfRange {
        /// Rejected value.
        value: u64,
        /// Target width.
        width: Width,
    },

    /// Fixed-width fields are unsigned.
    #[error("NegativeValue: {value} cannot be written to {width}")]
    NegativeValue {
        /// Rejected value.
        value: i64,
        /// Target width.
        width: Width,
    },

    /// A timestamp lies before the epoch or beyond what the width can store.
    #[error("TimestampOutOfRange: {seconds}s since epoch does not fit in {width}")]
    TimestampOutOfRange {
        /// Whole seconds since the epoch.
        seconds: i64,
        /// Target width.
        width: Width,
    },

    /// Timestamps are only written to 32 and 64-bit fields.
    #[error("UnsupportedTimestamp: {width} fields cannot carry a timestamp")]
    UnsupportedTimestamp {
        /// Target width.
        width: Width,
    },
}
