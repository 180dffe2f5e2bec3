// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use varwire_core::Width;

use crate::error::BuilderError;

#[test]
fn test_builder_error_display() {
    assert_eq!(
        BuilderError::CapacityExceeded {
            limit: 10,
            required: 11
        }
        .to_string(),
        "Message size is limited to 10 bytes (write requires 11)"
    );
    assert_eq!(
        BuilderError::ValueOutOfRange {
            value: 256,
            width: Width::Int8
        }
        .to_string(),
        "ValueOutOfRange: 256 does not fit in int8"
    );
    assert_eq!(
        BuilderError::NegativeValue {
            value: -5,
            width: Width::Int16
        }
        .to_string(),
        "NegativeValue: -5 cannot be written to int16"
    );
    assert_eq!(
        BuilderError::TimestampOutOfRange {
            seconds: -1,
            width: Width::Int32
        }
        .to_string(),
        "TimestampOutOfRange: -1s since epoch does not fit in int32"
    );
    assert_eq!(
        BuilderError::UnsupportedTimestamp { width: Width::Int16 }.to_string(),
        "UnsupportedTimestamp: int16 fields cannot carry a timestamp"
    );
}
