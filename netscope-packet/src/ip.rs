//! IP protocol numbers shared by the IPv4 header and the IPv6 next-header field

use std::fmt;

/// IP protocol numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpProtocol {
    /// ICMP for IPv4 (1)
    Icmpv4,
    /// IGMP (2)
    Igmp,
    /// TCP (6)
    Tcp,
    /// UDP (17)
    Udp,
    /// GRE (47)
    Gre,
    /// ESP (50)
    Esp,
    /// AH (51)
    Ah,
    /// ICMP for IPv6 (58)
    Icmpv6,
    /// EIGRP (88)
    Eigrp,
    /// OSPF (89)
    Ospf,
    /// VRRP (112)
    Vrrp,
    /// Anything else
    Custom(u8),
}

impl IpProtocol {
    pub fn to_u8(self) -> u8 {
        match self {
            IpProtocol::Icmpv4 => 1,
            IpProtocol::Igmp => 2,
            IpProtocol::Tcp => 6,
            IpProtocol::Udp => 17,
            IpProtocol::Gre => 47,
            IpProtocol::Esp => 50,
            IpProtocol::Ah => 51,
            IpProtocol::Icmpv6 => 58,
            IpProtocol::Eigrp => 88,
            IpProtocol::Ospf => 89,
            IpProtocol::Vrrp => 112,
            IpProtocol::Custom(val) => val,
        }
    }

    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => IpProtocol::Icmpv4,
            2 => IpProtocol::Igmp,
            6 => IpProtocol::Tcp,
            17 => IpProtocol::Udp,
            47 => IpProtocol::Gre,
            50 => IpProtocol::Esp,
            51 => IpProtocol::Ah,
            58 => IpProtocol::Icmpv6,
            88 => IpProtocol::Eigrp,
            89 => IpProtocol::Ospf,
            112 => IpProtocol::Vrrp,
            val => IpProtocol::Custom(val),
        }
    }
}

impl fmt::Display for IpProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpProtocol::Icmpv4 => write!(f, "ICMPv4"),
            IpProtocol::Igmp => write!(f, "IGMP"),
            IpProtocol::Tcp => write!(f, "TCP"),
            IpProtocol::Udp => write!(f, "UDP"),
            IpProtocol::Gre => write!(f, "GRE"),
            IpProtocol::Esp => write!(f, "ESP"),
            IpProtocol::Ah => write!(f, "AH"),
            IpProtocol::Icmpv6 => write!(f, "ICMPv6"),
            IpProtocol::Eigrp => write!(f, "EIGRP"),
            IpProtocol::Ospf => write!(f, "OSPF"),
            IpProtocol::Vrrp => write!(f, "VRRP"),
            IpProtocol::Custom(val) => write!(f, "{}", val),
        }
    }
}
