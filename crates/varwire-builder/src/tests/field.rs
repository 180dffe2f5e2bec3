// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use crate::field::FieldValue;

#[test]
fn test_field_value_from_unsigned() {
    assert_eq!(FieldValue::from(7u8), FieldValue::Number(7));
    assert_eq!(FieldValue::from(0x1234u16), FieldValue::Number(0x1234));
    assert_eq!(FieldValue::from(70_015u32), FieldValue::Number(70_015));
    assert_eq!(FieldValue::from(u64::MAX), FieldValue::Number(u64::MAX));
    assert_eq!(FieldValue::from(42usize), FieldValue::Number(42));
}

#[test]
fn test_field_value_from_signed() {
    assert_eq!(FieldValue::from(0x1234), FieldValue::Signed(0x1234));
    assert_eq!(FieldValue::from(-1i8), FieldValue::Signed(-1));
    assert_eq!(FieldValue::from(i64::MIN), FieldValue::Signed(i64::MIN));
    assert_eq!(FieldValue::from(-3isize), FieldValue::Signed(-3));
}

#[test]
fn test_field_value_from_bytes() {
    let array = [0x34u8, 0x12];
    let vec = vec![0x01u8, 0x02, 0x03];

    assert_eq!(FieldValue::from(&array), FieldValue::Raw(&[0x34, 0x12]));
    assert_eq!(FieldValue::from(&array[..1]), FieldValue::Raw(&[0x34]));
    assert_eq!(FieldValue::from(&vec), FieldValue::Raw(&[0x01, 0x02, 0x03]));
}

#[test]
fn test_field_value_from_timestamp_normalizes_to_utc() {
    let utc: DateTime<Utc> = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("Failed to build timestamp");

    let offset = FixedOffset::east_opt(2 * 3600).expect("Failed to build offset");
    let local = utc.with_timezone(&offset);

    assert_eq!(FieldValue::from(utc), FieldValue::Timestamp(utc));
    assert_eq!(FieldValue::from(local), FieldValue::Timestamp(utc));
}
