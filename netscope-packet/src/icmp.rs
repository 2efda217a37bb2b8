//! ICMPv4 and ICMPv6 message header parsing

/// ICMPv4 message header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icmpv4Message {
    /// Message type (8 = echo request, 0 = echo reply, ...)
    pub message_type: u8,
    /// Message code
    pub code: u8,
}

impl Icmpv4Message {
    /// Fixed part of an ICMP header: type, code, checksum
    pub const MIN_SIZE: usize = 4;

    /// Parse an ICMPv4 message header from bytes
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < Self::MIN_SIZE {
            return None;
        }
        Some(Icmpv4Message {
            message_type: data[0],
            code: data[1],
        })
    }
}

/// ICMPv6 message header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icmpv6Message {
    /// Message type (128 = echo request, 135 = neighbor solicitation, ...)
    pub message_type: u8,
    /// Message code
    pub code: u8,
}

impl Icmpv6Message {
    /// Fixed part of an ICMPv6 header: type, code, checksum
    pub const MIN_SIZE: usize = 4;

    /// Parse an ICMPv6 message header from bytes
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < Self::MIN_SIZE {
            return None;
        }
        Some(Icmpv6Message {
            message_type: data[0],
            code: data[1],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_icmpv4() {
        let data = vec![8, 0, 0x12, 0x34, 0xde, 0xad];
        let msg = Icmpv4Message::parse(&data).unwrap();
        assert_eq!(msg.message_type, 8);
        assert_eq!(msg.code, 0);
    }

    #[test]
    fn test_parse_icmpv6() {
        let data = vec![135, 0, 0x00, 0x00];
        let msg = Icmpv6Message::parse(&data).unwrap();
        assert_eq!(msg.message_type, 135);
        assert_eq!(msg.code, 0);
    }

    #[test]
    fn test_parse_rejects_truncated() {
        assert!(Icmpv4Message::parse(&[8, 0, 0]).is_none());
        assert!(Icmpv6Message::parse(&[128]).is_none());
    }
}
