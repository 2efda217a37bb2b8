//! Frame decoder: raw capture bytes to a structured packet record
//!
//! Decoding is deterministic and total. Each layer is a tagged variant;
//! a layer that cannot be parsed is absent and its summary fragment is
//! omitted, so malformed bytes yield a partial record rather than an
//! error.

use crate::ethernet::{EtherType, EthernetHeader};
use crate::icmp::{Icmpv4Message, Icmpv6Message};
use crate::ip::IpProtocol;
use crate::ipv4::Ipv4Header;
use crate::ipv6::Ipv6Header;
use crate::tcp::TcpHeader;
use crate::udp::UdpHeader;
use netscope_core::CapturedPacket;
use std::time::SystemTime;

/// Network layer of a decoded frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkLayer {
    Ipv4(Ipv4Header),
    Ipv6(Ipv6Header),
}

impl NetworkLayer {
    /// Protocol number selecting the transport layer
    pub fn transport_protocol(&self) -> IpProtocol {
        match self {
            NetworkLayer::Ipv4(header) => header.protocol,
            NetworkLayer::Ipv6(header) => header.next_header,
        }
    }
}

/// Transport layer of a decoded frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportLayer {
    Tcp(TcpHeader),
    Udp(UdpHeader),
    Icmpv4(Icmpv4Message),
    Icmpv6(Icmpv6Message),
}

impl TransportLayer {
    /// Protocol label for the packet record
    pub fn label(&self) -> &'static str {
        match self {
            TransportLayer::Tcp(_) => "TCP",
            TransportLayer::Udp(_) => "UDP",
            TransportLayer::Icmpv4(_) => "ICMPv4",
            TransportLayer::Icmpv6(_) => "ICMPv6",
        }
    }
}

/// A frame split into its recognized layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedFrame {
    /// Link layer
    pub link: Option<EthernetHeader>,
    /// Network layer, IPv4 or IPv6
    pub network: Option<NetworkLayer>,
    /// Transport layer, dispatched by the network layer's protocol number
    /// with precedence TCP, UDP, ICMPv4, ICMPv6
    pub transport: Option<TransportLayer>,
}

impl DecodedFrame {
    /// Split raw frame bytes into layers. Never fails; unrecognized or
    /// truncated layers are left absent.
    pub fn parse(data: &[u8]) -> Self {
        let mut frame = DecodedFrame {
            link: None,
            network: None,
            transport: None,
        };

        let Some((ethernet, payload)) = EthernetHeader::parse(data) else {
            return frame;
        };
        frame.link = Some(ethernet);

        let (network, payload) = match ethernet.ethertype {
            EtherType::Ipv4 => match Ipv4Header::parse(payload) {
                Some((header, rest)) => (NetworkLayer::Ipv4(header), rest),
                None => return frame,
            },
            EtherType::Ipv6 => match Ipv6Header::parse(payload) {
                Some((header, rest)) => (NetworkLayer::Ipv6(header), rest),
                None => return frame,
            },
            _ => return frame,
        };
        frame.network = Some(network);

        frame.transport = match network.transport_protocol() {
            IpProtocol::Tcp => {
                TcpHeader::parse(payload).map(|(header, _)| TransportLayer::Tcp(header))
            }
            IpProtocol::Udp => {
                UdpHeader::parse(payload).map(|(header, _)| TransportLayer::Udp(header))
            }
            IpProtocol::Icmpv4 => Icmpv4Message::parse(payload).map(TransportLayer::Icmpv4),
            IpProtocol::Icmpv6 => Icmpv6Message::parse(payload).map(TransportLayer::Icmpv6),
            _ => None,
        };

        frame
    }
}

/// Decode raw frame bytes into a captured packet record.
///
/// `timestamp` is the capture-source clock reading for the frame and
/// `wire_len` its original length on the wire, which may exceed
/// `data.len()` when the capture snaplen truncated it.
pub fn decode(data: &[u8], timestamp: SystemTime, wire_len: usize) -> CapturedPacket {
    let frame = DecodedFrame::parse(data);

    let mut fragments: Vec<String> = Vec::new();
    let mut source = String::new();
    let mut destination = String::new();
    let mut protocol = String::new();

    if let Some(ethernet) = &frame.link {
        fragments.push(format!("Eth {}->{}", ethernet.source, ethernet.destination));
    }

    match &frame.network {
        Some(NetworkLayer::Ipv4(ip)) => {
            source = ip.source.to_string();
            destination = ip.destination.to_string();
            fragments.push(format!(
                "IPv4 {}->{} Proto:{}",
                ip.source, ip.destination, ip.protocol
            ));
        }
        Some(NetworkLayer::Ipv6(ip)) => {
            source = ip.source.to_string();
            destination = ip.destination.to_string();
            fragments.push(format!(
                "IPv6 {}->{} Proto:{}",
                ip.source, ip.destination, ip.next_header
            ));
        }
        None => {}
    }

    match &frame.transport {
        Some(TransportLayer::Tcp(tcp)) => {
            protocol = "TCP".to_string();
            fragments.push(format!(
                "TCP {}->{} Flags:[{}]",
                tcp.source_port, tcp.destination_port, tcp.flags
            ));
        }
        Some(TransportLayer::Udp(udp)) => {
            protocol = "UDP".to_string();
            fragments.push(format!("UDP {}->{}", udp.source_port, udp.destination_port));
        }
        Some(TransportLayer::Icmpv4(icmp)) => {
            protocol = "ICMPv4".to_string();
            fragments.push(format!(
                "ICMPv4 Type:{} Code:{}",
                icmp.message_type, icmp.code
            ));
        }
        Some(TransportLayer::Icmpv6(icmp)) => {
            protocol = "ICMPv6".to_string();
            fragments.push(format!(
                "ICMPv6 Type:{} Code:{}",
                icmp.message_type, icmp.code
            ));
        }
        None => {}
    }

    CapturedPacket {
        timestamp,
        source,
        destination,
        protocol,
        length: wire_len,
        payload: data.to_vec(),
        summary: fragments.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::UNIX_EPOCH;

    const SRC_MAC: [u8; 6] = [0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e];
    const DST_MAC: [u8; 6] = [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff];

    fn ethernet(ethertype: u16, payload: &[u8]) -> Vec<u8> {
        let mut frame = Vec::new();
        frame.extend_from_slice(&DST_MAC);
        frame.extend_from_slice(&SRC_MAC);
        frame.extend_from_slice(&ethertype.to_be_bytes());
        frame.extend_from_slice(payload);
        frame
    }

    fn ipv4(src: [u8; 4], dst: [u8; 4], protocol: u8, payload: &[u8]) -> Vec<u8> {
        let total = (20 + payload.len()) as u16;
        let mut packet = vec![
            0x45,
            0x00,
            (total >> 8) as u8,
            total as u8,
            0x00,
            0x01,
            0x00,
            0x00,
            64,
            protocol,
            0x00,
            0x00,
        ];
        packet.extend_from_slice(&src);
        packet.extend_from_slice(&dst);
        packet.extend_from_slice(payload);
        packet
    }

    fn ipv6(src: [u8; 16], dst: [u8; 16], next_header: u8, payload: &[u8]) -> Vec<u8> {
        let mut packet = vec![
            0x60,
            0x00,
            0x00,
            0x00,
            (payload.len() >> 8) as u8,
            payload.len() as u8,
            next_header,
            64,
        ];
        packet.extend_from_slice(&src);
        packet.extend_from_slice(&dst);
        packet.extend_from_slice(payload);
        packet
    }

    fn tcp(src_port: u16, dst_port: u16, flags: u8) -> Vec<u8> {
        let mut segment = Vec::new();
        segment.extend_from_slice(&src_port.to_be_bytes());
        segment.extend_from_slice(&dst_port.to_be_bytes());
        segment.extend_from_slice(&1u32.to_be_bytes());
        segment.extend_from_slice(&0u32.to_be_bytes());
        segment.push(0x50); // data offset 5
        segment.push(flags);
        segment.extend_from_slice(&[0xff, 0xff, 0x00, 0x00, 0x00, 0x00]);
        segment
    }

    fn udp(src_port: u16, dst_port: u16) -> Vec<u8> {
        let mut datagram = Vec::new();
        datagram.extend_from_slice(&src_port.to_be_bytes());
        datagram.extend_from_slice(&dst_port.to_be_bytes());
        datagram.extend_from_slice(&8u16.to_be_bytes());
        datagram.extend_from_slice(&[0x00, 0x00]);
        datagram
    }

    #[test]
    fn test_decode_tcp_syn_ack() {
        let frame = ethernet(
            0x0800,
            &ipv4([10, 0, 0, 1], [10, 0, 0, 2], 6, &tcp(443, 51000, 0x12)),
        );
        let packet = decode(&frame, UNIX_EPOCH, frame.len());

        assert_eq!(
            packet.summary,
            "Eth 00:1a:2b:3c:4d:5e->aa:bb:cc:dd:ee:ff \
             IPv4 10.0.0.1->10.0.0.2 Proto:TCP \
             TCP 443->51000 Flags:[SYN,ACK]"
        );
        assert_eq!(packet.protocol, "TCP");
        assert_eq!(packet.source, "10.0.0.1");
        assert_eq!(packet.destination, "10.0.0.2");
        assert_eq!(packet.length, frame.len());
        assert_eq!(packet.payload, frame);
    }

    #[test]
    fn test_decode_is_pure() {
        let frame = ethernet(
            0x0800,
            &ipv4([192, 168, 1, 10], [192, 168, 1, 20], 17, &udp(55356, 53)),
        );
        let a = decode(&frame, UNIX_EPOCH, frame.len());
        let b = decode(&frame, UNIX_EPOCH, frame.len());
        assert_eq!(a, b);
    }

    #[test]
    fn test_decode_udp() {
        let frame = ethernet(
            0x0800,
            &ipv4([192, 168, 1, 10], [8, 8, 8, 8], 17, &udp(55356, 53)),
        );
        let packet = decode(&frame, UNIX_EPOCH, frame.len());

        assert_eq!(packet.protocol, "UDP");
        assert!(packet.summary.ends_with("IPv4 192.168.1.10->8.8.8.8 Proto:UDP UDP 55356->53"));
    }

    #[test]
    fn test_decode_icmpv4() {
        let frame = ethernet(
            0x0800,
            &ipv4([10, 0, 0, 1], [10, 0, 0, 2], 1, &[8, 0, 0x12, 0x34]),
        );
        let packet = decode(&frame, UNIX_EPOCH, frame.len());

        assert_eq!(packet.protocol, "ICMPv4");
        assert!(packet.summary.ends_with("Proto:ICMPv4 ICMPv4 Type:8 Code:0"));
    }

    #[test]
    fn test_decode_icmpv6_over_ipv6() {
        let mut src = [0u8; 16];
        src[15] = 1;
        let mut dst = [0u8; 16];
        dst[15] = 2;
        let frame = ethernet(0x86DD, &ipv6(src, dst, 58, &[128, 0, 0x00, 0x00]));
        let packet = decode(&frame, UNIX_EPOCH, frame.len());

        assert_eq!(packet.protocol, "ICMPv6");
        assert_eq!(packet.source, "::1");
        assert_eq!(packet.destination, "::2");
        assert!(packet
            .summary
            .ends_with("IPv6 ::1->::2 Proto:ICMPv6 ICMPv6 Type:128 Code:0"));
    }

    #[test]
    fn test_decode_tcp_no_flags() {
        let frame = ethernet(
            0x0800,
            &ipv4([10, 0, 0, 1], [10, 0, 0, 2], 6, &tcp(80, 12345, 0x00)),
        );
        let packet = decode(&frame, UNIX_EPOCH, frame.len());
        assert!(packet.summary.ends_with("TCP 80->12345 Flags:[]"));
    }

    #[test]
    fn test_decode_arp_stops_at_link_layer() {
        let frame = ethernet(0x0806, &[0x00, 0x01, 0x08, 0x00]);
        let packet = decode(&frame, UNIX_EPOCH, frame.len());

        assert_eq!(
            packet.summary,
            "Eth 00:1a:2b:3c:4d:5e->aa:bb:cc:dd:ee:ff"
        );
        assert_eq!(packet.protocol, "");
        assert_eq!(packet.source, "");
        assert_eq!(packet.destination, "");
    }

    #[test]
    fn test_decode_unknown_ip_protocol_renders_decimal() {
        let frame = ethernet(0x0800, &ipv4([10, 0, 0, 1], [10, 0, 0, 2], 143, &[]));
        let packet = decode(&frame, UNIX_EPOCH, frame.len());

        assert!(packet.summary.ends_with("Proto:143"));
        assert_eq!(packet.protocol, "");
    }

    #[test]
    fn test_decode_truncated_transport_yields_partial_record() {
        // IPv4 claims TCP but the segment is cut to 4 bytes
        let frame = ethernet(
            0x0800,
            &ipv4([10, 0, 0, 1], [10, 0, 0, 2], 6, &[0x01, 0xbb, 0xc7, 0x38]),
        );
        let packet = decode(&frame, UNIX_EPOCH, frame.len());

        assert_eq!(packet.protocol, "");
        assert_eq!(packet.source, "10.0.0.1");
        assert!(packet.summary.ends_with("Proto:TCP"));
        assert!(!packet.summary.contains("Flags"));
    }

    #[test]
    fn test_decode_garbage_yields_empty_summary() {
        let packet = decode(&[0x00, 0x01, 0x02], UNIX_EPOCH, 3);
        assert_eq!(packet.summary, "");
        assert_eq!(packet.protocol, "");
        assert_eq!(packet.length, 3);
    }

    #[test]
    fn test_decode_vlan_tagged_ipv4() {
        let mut frame = Vec::new();
        frame.extend_from_slice(&DST_MAC);
        frame.extend_from_slice(&SRC_MAC);
        frame.extend_from_slice(&[0x81, 0x00, 0x00, 0x64]); // VLAN 100
        frame.extend_from_slice(&0x0800u16.to_be_bytes());
        frame.extend_from_slice(&ipv4([10, 0, 0, 1], [10, 0, 0, 2], 17, &udp(68, 67)));

        let packet = decode(&frame, UNIX_EPOCH, frame.len());
        assert_eq!(packet.protocol, "UDP");
        assert!(packet.summary.contains("IPv4 10.0.0.1->10.0.0.2"));
    }

    #[test]
    fn test_wire_length_preserved_when_snaplen_truncates() {
        let frame = ethernet(0x0806, &[0x00, 0x01]);
        let packet = decode(&frame, UNIX_EPOCH, 1500);
        assert_eq!(packet.length, 1500);
        assert_eq!(packet.payload.len(), frame.len());
    }
}
