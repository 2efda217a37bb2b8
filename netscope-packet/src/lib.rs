//! Packet parsing library for netscope
//!
//! This crate turns raw capture bytes into structured layer records and
//! one-line human-readable summaries.
//!
//! ## Design
//!
//! - **Parse-only**: headers are read from byte slices, never built.
//! - **Total**: parsing never fails; a layer that does not fit is simply
//!   absent from the decoded frame.
//! - **Layered**: Ethernet, then IPv4/IPv6, then TCP/UDP/ICMPv4/ICMPv6,
//!   each layer a tagged variant dispatched by the one below it.

pub mod decoder;
pub mod ethernet;
pub mod icmp;
pub mod ip;
pub mod ipv4;
pub mod ipv6;
pub mod tcp;
pub mod udp;

// Re-export main types
pub use decoder::{decode, DecodedFrame, NetworkLayer, TransportLayer};
pub use ethernet::{EtherType, EthernetHeader};
pub use icmp::{Icmpv4Message, Icmpv6Message};
pub use ip::IpProtocol;
pub use ipv4::Ipv4Header;
pub use ipv6::Ipv6Header;
pub use tcp::{TcpFlags, TcpHeader};
pub use udp::UdpHeader;
