use std::fmt;
use std::str::FromStr;

use linksim_common::FormatError;
use pnet::packet::ethernet;

/// 16-bit EtherType field of an Ethernet header.
///
/// Displays as `0x` followed by four uppercase hex digits regardless of how it was written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EtherType(pub u16);

impl EtherType {
    pub const IPV4: Self = Self(0x0800);
    pub const ARP: Self = Self(0x0806);
    pub const VLAN: Self = Self(0x8100);
    pub const IPV6: Self = Self(0x86DD);

    pub fn value(&self) -> u16 {
        self.0
    }

    /// Name of the encapsulated protocol, when it is one the simulator knows.
    pub fn protocol_name(&self) -> Option<&'static str> {
        match *self {
            Self::IPV4 => Some("IPv4"),
            Self::ARP => Some("ARP"),
            Self::VLAN => Some("802.1Q"),
            Self::IPV6 => Some("IPv6"),
            _ => None,
        }
    }
}

impl fmt::Display for EtherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

impl FromStr for EtherType {
    type Err = FormatError;

    /// Parses 1 to 4 hex digits with an optional `0x` or `0X` prefix (`0x800`, `86dd`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.is_empty() {
            return Err(FormatError::ethertype(s, "no hex digits"));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(FormatError::ethertype(s, "non-hex digit"));
        }
        if digits.len() > 4 {
            return Err(FormatError::ethertype(s, "does not fit in 16 bits"));
        }

        u16::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| FormatError::ethertype(s, "does not fit in 16 bits"))
    }
}

impl From<u16> for EtherType {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<EtherType> for ethernet::EtherType {
    fn from(et: EtherType) -> Self {
        ethernet::EtherType::new(et.0)
    }
}

impl From<ethernet::EtherType> for EtherType {
    fn from(et: ethernet::EtherType) -> Self {
        Self(et.0)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
