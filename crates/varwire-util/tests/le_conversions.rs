// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod le_conversions_tests {
    use varwire_util::*;

    #[test]
    fn test_u16_from_le() {
        assert_eq!(u16_from_le(&[0x01, 0x02]), 0x0201);
    }

    #[test]
    fn test_u16_to_le() {
        assert_eq!(u16_to_le(0x1234), [0x34, 0x12]);
    }

    #[test]
    fn test_u32_from_le() {
        assert_eq!(u32_from_le(&[0x01, 0x02, 0x03, 0x04]), 0x04030201);
    }

    #[test]
    fn test_u32_to_le() {
        assert_eq!(u32_to_le(1), [0x01, 0x00, 0x00, 0x00]);
        assert_eq!(u32_to_le(u32::MAX), [0xff; 4]);
    }

    #[test]
    fn test_u64_from_le() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(u64_from_le(&bytes), 0x0807060504030201);
    }

    #[test]
    fn test_u64_to_le() {
        assert_eq!(
            u64_to_le(0x0807060504030201),
            [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
        );
    }

    #[test]
    fn test_u64_to_le_keeps_high_half_zero_for_u32_values() {
        let bytes = u64_to_le(u64::from(u32::MAX));
        assert_eq!(&bytes[4..], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_take_array() {
        assert_eq!(take_array::<2>(&[9, 8, 7]), Some([9, 8]));
        assert_eq!(take_array::<4>(&[9, 8, 7]), None);
        assert_eq!(take_array::<0>(&[]), Some([]));
    }
}
