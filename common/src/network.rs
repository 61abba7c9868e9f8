//! # Address Families
//!
//! Value types for the three address families the simulator hands out:
//!
//! * [`MacAddress`]: 48-bit hardware address, canonical form `AA:BB:CC:DD:EE:FF`.
//! * [`Ipv4Address`]: dotted decimal, canonical form `192.168.0.1`.
//! * [`Ipv6Address`]: RFC 5952 colon-hex, canonical form `2001:db8::1`.
//!
//! All three implement [`Address`], so callers can parse, format and generate them uniformly.

pub mod ipv4;
pub mod ipv6;
pub mod mac;

use std::fmt::Display;
use std::str::FromStr;

use rand::Rng;

use crate::error::FormatError;

pub use ipv4::Ipv4Address;
pub use ipv6::Ipv6Address;
pub use mac::MacAddress;

/// Behaviour shared by every address family.
///
/// `parse(a.to_canonical_string()) == a` holds for every value of an implementing type.
pub trait Address: Copy + Eq + Display + FromStr<Err = FormatError> {
    /// Raw octets in network order.
    type Octets: AsRef<[u8]>;

    fn from_octets(octets: Self::Octets) -> Self;

    fn octets(&self) -> Self::Octets;

    /// Draws a value from the family's address space using the given source.
    fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self;

    fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    fn parse(text: &str) -> Result<Self, FormatError> {
        text.parse()
    }

    fn to_canonical_string(&self) -> String {
        self.to_string()
    }
}
