//! IPv4 header parsing

use crate::ip::IpProtocol;
use std::net::Ipv4Addr;

/// IPv4 packet header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Header {
    /// Internet Header Length in 32-bit words
    pub ihl: u8,
    /// Type of Service / DSCP
    pub tos: u8,
    /// Total length (header + data) in bytes
    pub total_length: u16,
    /// Identification
    pub identification: u16,
    /// Time to Live
    pub ttl: u8,
    /// Transport protocol carried in the payload
    pub protocol: IpProtocol,
    /// Source IP address
    pub source: Ipv4Addr,
    /// Destination IP address
    pub destination: Ipv4Addr,
}

impl Ipv4Header {
    /// Minimum IPv4 header size (without options)
    pub const MIN_SIZE: usize = 20;

    /// Parse an IPv4 header from bytes.
    ///
    /// Returns the header and the payload that follows it (options are
    /// skipped), or None for a non-IPv4 or truncated buffer.
    pub fn parse(data: &[u8]) -> Option<(Self, &[u8])> {
        if data.len() < Self::MIN_SIZE {
            return None;
        }

        let version = data[0] >> 4;
        if version != 4 {
            return None;
        }

        let ihl = data[0] & 0x0F;
        let header_len = (ihl as usize) * 4;
        if header_len < Self::MIN_SIZE || data.len() < header_len {
            return None;
        }

        let header = Ipv4Header {
            ihl,
            tos: data[1],
            total_length: u16::from_be_bytes([data[2], data[3]]),
            identification: u16::from_be_bytes([data[4], data[5]]),
            ttl: data[8],
            protocol: IpProtocol::from_u8(data[9]),
            source: Ipv4Addr::new(data[12], data[13], data[14], data[15]),
            destination: Ipv4Addr::new(data[16], data[17], data[18], data[19]),
        };

        Some((header, &data[header_len..]))
    }
}
