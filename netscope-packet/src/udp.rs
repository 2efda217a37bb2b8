//! UDP datagram header parsing

/// UDP datagram header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UdpHeader {
    /// Source port
    pub source_port: u16,
    /// Destination port
    pub destination_port: u16,
    /// Length of header plus payload
    pub length: u16,
}

impl UdpHeader {
    /// UDP header size
    pub const SIZE: usize = 8;

    /// Parse a UDP header from bytes.
    ///
    /// Returns the header and the datagram payload, or None when the
    /// buffer is too short.
    pub fn parse(data: &[u8]) -> Option<(Self, &[u8])> {
        if data.len() < Self::SIZE {
            return None;
        }

        let header = UdpHeader {
            source_port: u16::from_be_bytes([data[0], data[1]]),
            destination_port: u16::from_be_bytes([data[2], data[3]]),
            length: u16::from_be_bytes([data[4], data[5]]),
        };

        Some((header, &data[Self::SIZE..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let data = vec![
            0xd8, 0x3c, // source port 55356
            0x00, 0x35, // destination port 53
            0x00, 0x0a, // length 10
            0x00, 0x00, // checksum
            0xab, 0xcd, // payload
        ];

        let (header, payload) = UdpHeader::parse(&data).unwrap();
        assert_eq!(header.source_port, 55356);
        assert_eq!(header.destination_port, 53);
        assert_eq!(header.length, 10);
        assert_eq!(payload, &[0xab, 0xcd]);
    }

    #[test]
    fn test_parse_rejects_truncated() {
        assert!(UdpHeader::parse(&[0u8; 7]).is_none());
    }
}
