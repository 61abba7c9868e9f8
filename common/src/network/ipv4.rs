use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use rand::Rng;

use crate::error::FormatError;
use crate::network::Address;

/// IPv4 address, rendered in dotted decimal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ipv4Address(Ipv4Addr);

impl Ipv4Address {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self(Ipv4Addr::new(a, b, c, d))
    }

    /// Random host in `192.168.0.0/24`, never the network or broadcast address.
    pub fn random_private_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(192, 168, 0, rng.random_range(1..=254))
    }

    pub fn random_private() -> Self {
        Self::random_private_with(&mut rand::rng())
    }

    pub fn as_std(&self) -> Ipv4Addr {
        self.0
    }
}

impl Address for Ipv4Address {
    type Octets = [u8; 4];

    fn from_octets(octets: [u8; 4]) -> Self {
        Self(Ipv4Addr::from(octets))
    }

    fn octets(&self) -> [u8; 4] {
        self.0.octets()
    }

    fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(Ipv4Addr::from(rng.random::<u32>()))
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0.octets();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl FromStr for Ipv4Address {
    type Err = FormatError;

    /// Parses dotted decimal with exactly four components in `0..=255`.
    ///
    /// Leading zeros are rejected so that `010` is never mistaken for octal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 4 {
            return Err(FormatError::ipv4(s, "expected 4 components"));
        }

        let mut octets = [0u8; 4];
        for (octet, part) in octets.iter_mut().zip(&parts) {
            *octet = parse_component(s, part)?;
        }

        Ok(Self::from_octets(octets))
    }
}

fn parse_component(input: &str, part: &str) -> Result<u8, FormatError> {
    if part.is_empty() {
        return Err(FormatError::ipv4(input, "empty component"));
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::ipv4(input, "non-decimal digit"));
    }
    if part.len() > 1 && part.starts_with('0') {
        return Err(FormatError::ipv4(input, "leading zero"));
    }
    part.parse::<u8>()
        .map_err(|_| FormatError::ipv4(input, "component out of range"))
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Self(addr)
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        addr.0
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
