// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod message_tests {
    use chrono::{DateTime, TimeZone, Utc};
    use varwire::builder::{BuilderConfig, BuilderError, MessageBuilder};
    use varwire::parser::{FailureReason, MessageParser, ParseError, ParseOp};
    use varwire::wire::VarInt;

    const PROTOCOL_VERSION: u32 = 70_015;
    const NODE_NETWORK: u64 = 1;
    const USER_AGENT: &str = "/varwire:0.1/";

    struct Version {
        version: u32,
        services: u64,
        timestamp: DateTime<Utc>,
        nonce: [u8; 8],
        user_agent: String,
        start_height: u32,
        relay: bool,
    }

    fn sample() -> Version {
        Version {
            version: PROTOCOL_VERSION,
            services: NODE_NETWORK,
            timestamp: Utc
                .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .expect("Failed to build timestamp"),
            nonce: [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88],
            user_agent: USER_AGENT.to_string(),
            start_height: 830_000,
            relay: true,
        }
    }

    fn encode(message: &Version, builder: &mut MessageBuilder) -> Result<(), BuilderError> {
        builder
            .put_int32(message.version)?
            .put_int64(message.services)?
            .put_int64(message.timestamp)?
            .put_int64(&message.nonce)?
            .put_var_string(&message.user_agent)?
            .put_int32(message.start_height)?
            .put_int8(u8::from(message.relay))?;
        Ok(())
    }

    fn decode(parser: &mut MessageParser) -> Result<Version, ParseError> {
        let version = parser.read_uint32_le();
        let services = parser.read_uint32_le();
        parser.incr_pointer(4);
        let seconds = parser.read_uint32_le();
        parser.incr_pointer(4);
        let nonce = parser.raw(8);
        let user_agent = parser.read_var_string();
        let start_height = parser.read_uint32_le();
        let relay = parser.read_int8();

        parser.finish()?;

        // finish() succeeded, so every read above returned a value.
        let timestamp = Utc
            .timestamp_opt(i64::from(seconds.unwrap_or_default()), 0)
            .single()
            .unwrap_or_default();
        let mut nonce_bytes = [0u8; 8];
        nonce_bytes.copy_from_slice(&nonce.unwrap_or_default());

        Ok(Version {
            version: version.unwrap_or_default(),
            services: u64::from(services.unwrap_or_default()),
            timestamp,
            nonce: nonce_bytes,
            user_agent: user_agent.unwrap_or_default(),
            start_height: start_height.unwrap_or_default(),
            relay: relay == Some(1),
        })
    }

    #[test]
    fn test_version_message_roundtrip() {
        let message = sample();
        let mut builder = MessageBuilder::new();

        encode(&message, &mut builder).expect("Failed to encode(..)");
        assert_eq!(builder.len(), 4 + 8 + 8 + 8 + 1 + 13 + 4 + 1);

        let mut parser = MessageParser::from(builder.raw());
        let decoded = decode(&mut parser).expect("Failed to decode(..)");

        assert_eq!(decoded.version, message.version);
        assert_eq!(decoded.services, message.services);
        assert_eq!(decoded.timestamp, message.timestamp);
        assert_eq!(decoded.nonce, message.nonce);
        assert_eq!(decoded.user_agent, message.user_agent);
        assert_eq!(decoded.start_height, message.start_height);
        assert!(decoded.relay);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn test_version_message_timestamp_bytes() {
        let mut builder = MessageBuilder::new();

        encode(&sample(), &mut builder).expect("Failed to encode(..)");

        let bytes = builder.raw();
        assert_eq!(&bytes[12..20], &[0x80, 0x00, 0x92, 0x65, 0, 0, 0, 0]);
    }

    #[test]
    fn test_version_message_over_capacity_leaves_prefix_intact() {
        let mut builder = MessageBuilder::with_config(BuilderConfig::default().with_capacity_limit(30));

        let err = encode(&sample(), &mut builder).expect_err("Expected encode(..) to fail");

        assert!(matches!(err, BuilderError::CapacityExceeded { limit: 30, .. }));
        // Fixed fields fit; the user agent was refused as a whole.
        assert_eq!(builder.len(), 28);
    }

    #[test]
    fn test_truncated_version_message_reports_user_agent() {
        let mut builder = MessageBuilder::new();
        encode(&sample(), &mut builder).expect("Failed to encode(..)");

        let bytes = builder.raw();
        let mut parser = MessageParser::new(&bytes[..32]);

        let err = decode(&mut parser).err().expect("Expected decode(..) to fail");
        let context = err.context();

        assert_eq!(context.operation, ParseOp::ReadVarString);
        assert_eq!(context.pointer, 29);
        assert_eq!(context.buffer_len, 32);
        assert_eq!(context.reason, FailureReason::OutOfBounds { requested: 13 });
    }

    #[test]
    fn test_wide_count_survives_as_raw_bytes() {
        let mut builder = MessageBuilder::new();
        builder
            .put_byte(0xff)
            .expect("Failed to put_byte(..)")
            .put_int64(7u64)
            .expect("Failed to put_int64(..)");

        let mut parser = MessageParser::from(builder.raw());

        assert_eq!(parser.read_var_int(), Some(VarInt::Wide([7, 0, 0, 0, 0, 0, 0, 0])));
        assert!(parser.finish().is_ok());
    }
}
