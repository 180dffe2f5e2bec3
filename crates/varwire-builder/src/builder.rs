// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use varwire_core::{VarIntPrefix, Width};
use varwire_util::u64_to_le;

use crate::buffer::CappedBuffer;
use crate::config::BuilderConfig;
use crate::error::BuilderError;
use crate::field::FieldValue;

/// Largest value the 64-bit writer accepts.
///
/// Only the low four bytes of an 8-byte field are populated; the high four
/// are always zero on the wire.
pub const INT64_WRITABLE_MAX: u64 = u32::MAX as u64;

/// Appends typed values to a capacity-capped message.
///
/// Every writer returns `Result<&mut Self, BuilderError>` so calls chain
/// with `?`.
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    buffer: CappedBuffer,
}

impl MessageBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose messages may not exceed `capacity_limit` bytes.
    pub fn with_capacity_limit(capacity_limit: usize) -> Self {
        Self::with_config(BuilderConfig::default().with_capacity_limit(capacity_limit))
    }

    /// Creates a builder sized by `config`.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            buffer: CappedBuffer::with_config(&config),
        }
    }

    /// Bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Hard ceiling on the message length.
    #[inline]
    pub fn capacity_limit(&self) -> usize {
        self.buffer.limit()
    }

    /// Physical size of the backing allocation.
    #[inline]
    pub fn allocated(&self) -> usize {
        self.buffer.allocated()
    }

    /// Borrows the bytes written so far.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    /// Copies out exactly the bytes written so far.
    #[inline]
    pub fn raw(&self) -> Vec<u8> {
        self.buffer.to_vec()
    }

    /// Appends a raw byte sequence.
    ///
    /// A single byte can be passed as a one-element array: `put([0xfd])`.
    pub fn put(&mut self, data: impl AsRef<[u8]>) -> Result<&mut Self, BuilderError> {
        self.buffer.write(data.as_ref())?;
        Ok(self)
    }

    /// Appends a single byte.
    #[inline]
    pub fn put_byte(&mut self, byte: u8) -> Result<&mut Self, BuilderError> {
        self.put([byte])
    }

    /// Appends `count` zero bytes.
    pub fn pad(&mut self, count: usize) -> Result<&mut Self, BuilderError> {
        self.buffer.write_zeros(count)?;
        Ok(self)
    }

    /// Writes a 1-byte field.
    pub fn put_int8<'a>(
        &mut self,
        value: impl Into<FieldValue<'a>>,
    ) -> Result<&mut Self, BuilderError> {
        self.put_fixed(Width::Int8, value.into())
    }

    /// Writes a 2-byte little-endian field.
    pub fn put_int16<'a>(
        &mut self,
        value: impl Into<FieldValue<'a>>,
    ) -> Result<&mut Self, BuilderError> {
        self.put_fixed(Width::Int16, value.into())
    }

    /// Writes a 4-byte little-endian field.
    pub fn put_int32<'a>(
        &mut self,
        value: impl Into<FieldValue<'a>>,
    ) -> Result<&mut Self, BuilderError> {
        self.put_fixed(Width::Int32, value.into())
    }

    /// Writes an 8-byte little-endian field.
    ///
    /// Numbers above [`INT64_WRITABLE_MAX`] are rejected.
    pub fn put_int64<'a>(
        &mut self,
        value: impl Into<FieldValue<'a>>,
    ) -> Result<&mut Self, BuilderError> {
        self.put_fixed(Width::Int64, value.into())
    }

    /// Writes one byte per UTF-16 code unit, keeping the low eight bits.
    ///
    /// Characters outside Latin-1 do not survive the trip.
    pub fn put_string(&mut self, s: &str) -> Result<&mut Self, BuilderError> {
        let bytes: Vec<u8> = s.encode_utf16().map(|unit| unit as u8).collect();
        self.put(bytes)
    }

    /// Writes `value` in its shortest VarInt form.
    pub fn put_var_int(&mut self, value: u64) -> Result<&mut Self, BuilderError> {
        let prefix = VarIntPrefix::for_value(value);

        let Some(width) = prefix.payload_width() else {
            return self.put([prefix.marker()]);
        };

        let payload = Self::encode_number(width, value)?;
        self.buffer.ensure_size(prefix.encoded_len())?;
        self.put([prefix.marker()])?.put(&payload[..width.bytes()])
    }

    /// Writes a VarInt length followed by [`put_string`](Self::put_string).
    ///
    /// The whole field is checked against the capacity limit up front, so a
    /// string that does not fit leaves no dangling length prefix behind.
    pub fn put_var_string(&mut self, s: &str) -> Result<&mut Self, BuilderError> {
        let len = s.encode_utf16().count();
        let prefix = VarIntPrefix::for_value(len as u64);

        let total = prefix
            .encoded_len()
            .checked_add(len)
            .ok_or(BuilderError::Overflow)?;
        self.buffer.ensure_size(total)?;

        self.put_var_int(len as u64)?.put_string(s)
    }

    fn put_fixed(&mut self, width: Width, value: FieldValue<'_>) -> Result<&mut Self, BuilderError> {
        match value {
            FieldValue::Raw(bytes) => {
                let take = bytes.len().min(width.bytes());
                self.put(&bytes[..take])
            }
            FieldValue::Timestamp(timestamp) => {
                if matches!(width, Width::Int8 | Width::Int16) {
                    return Err(BuilderError::UnsupportedTimestamp { width });
                }

                let seconds = timestamp.timestamp();
                let in_range = u64::try_from(seconds)
                    .ok()
                    .filter(|secs| *secs <= Self::writable_max(width));

                match in_range {
                    Some(secs) => self.put_fixed(width, FieldValue::Number(secs)),
                    None => Err(BuilderError::TimestampOutOfRange { seconds, width }),
                }
            }
            FieldValue::Signed(value) => match u64::try_from(value) {
                Ok(number) => self.put_fixed(width, FieldValue::Number(number)),
                Err(_) => Err(BuilderError::NegativeValue { value, width }),
            },
            FieldValue::Number(number) => {
                let bytes = Self::encode_number(width, number)?;
                self.put(&bytes[..width.bytes()])
            }
        }
    }

    /// Little-endian bytes of `value`, of which the first `width` are used.
    fn encode_number(width: Width, value: u64) -> Result<[u8; 8], BuilderError> {
        if value > Self::writable_max(width) {
            return Err(BuilderError::ValueOutOfRange { value, width });
        }

        Ok(u64_to_le(value))
    }

    #[inline(always)]
    fn writable_max(width: Width) -> u64 {
        match width {
            Width::Int64 => INT64_WRITABLE_MAX,
            other => other.max_value(),
        }
    }
}
