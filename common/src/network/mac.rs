use std::fmt;
use std::str::FromStr;

use pnet::util::MacAddr;
use rand::Rng;

use crate::error::FormatError;
use crate::network::Address;

const MAC_LEN: usize = 6;

/// Universal/local bit of the first octet.
const LOCALLY_ADMINISTERED: u8 = 0x02;
/// Individual/group bit of the first octet.
const MULTICAST: u8 = 0x01;

/// 48-bit hardware address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddress([u8; MAC_LEN]);

impl MacAddress {
    pub const BROADCAST: Self = Self([0xFF; MAC_LEN]);
    /// Target hardware address used in ARP requests.
    pub const ZERO: Self = Self([0x00; MAC_LEN]);

    pub const fn new(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8) -> Self {
        Self([a, b, c, d, e, f])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    pub fn is_multicast(&self) -> bool {
        self.0[0] & MULTICAST != 0
    }

    pub fn is_locally_administered(&self) -> bool {
        self.0[0] & LOCALLY_ADMINISTERED != 0
    }
}

impl Address for MacAddress {
    type Octets = [u8; MAC_LEN];

    fn from_octets(octets: [u8; MAC_LEN]) -> Self {
        Self(octets)
    }

    fn octets(&self) -> [u8; MAC_LEN] {
        self.0
    }

    /// Random address with the locally administered bit set.
    ///
    /// The multicast bit is left as drawn.
    fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut octets = [0u8; MAC_LEN];
        rng.fill(&mut octets[..]);
        octets[0] |= LOCALLY_ADMINISTERED;
        Self(octets)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl FromStr for MacAddress {
    type Err = FormatError;

    /// Parses `AA:BB:CC:DD:EE:FF`.
    ///
    /// Also accepts lowercase digits, `-` as the separator and single-digit groups.
    /// Mixing separators is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let separator = if s.contains(':') { ':' } else { '-' };
        if s.contains(':') && s.contains('-') {
            return Err(FormatError::mac(s, "mixed separators"));
        }

        let groups: Vec<&str> = s.split(separator).collect();
        if groups.len() != MAC_LEN {
            return Err(FormatError::mac(s, "expected 6 groups"));
        }

        let mut octets = [0u8; MAC_LEN];
        for (octet, group) in octets.iter_mut().zip(&groups) {
            if group.is_empty() || group.len() > 2 {
                return Err(FormatError::mac(s, "each group must be 1 or 2 hex digits"));
            }
            if !group.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(FormatError::mac(s, "non-hex digit"));
            }
            *octet = u8::from_str_radix(group, 16)
                .map_err(|_| FormatError::mac(s, "non-hex digit"))?;
        }

        Ok(Self(octets))
    }
}

impl From<[u8; MAC_LEN]> for MacAddress {
    fn from(octets: [u8; MAC_LEN]) -> Self {
        Self(octets)
    }
}

impl From<MacAddr> for MacAddress {
    fn from(mac: MacAddr) -> Self {
        Self([mac.0, mac.1, mac.2, mac.3, mac.4, mac.5])
    }
}

impl From<MacAddress> for MacAddr {
    fn from(mac: MacAddress) -> Self {
        let [a, b, c, d, e, f] = mac.0;
        MacAddr::new(a, b, c, d, e, f)
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

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn display_is_uppercase_colon_hex() {
        let mac = MacAddress::new(0x0a, 0xbb, 0x0c, 0x00, 0x11, 0xff);
        assert_eq!(mac.to_string(), "0A:BB:0C:00:11:FF");
    }

    #[test]
    fn parse_canonical_and_lenient_forms() {
        let expected = MacAddress::new(0x00, 0x11, 0x22, 0xaa, 0xbb, 0x0c);
        assert_eq!(MacAddress::parse("00:11:22:AA:BB:0C"), Ok(expected));
        assert_eq!(MacAddress::parse("00:11:22:aa:bb:0c"), Ok(expected));
        assert_eq!(MacAddress::parse("00-11-22-aa-bb-0c"), Ok(expected));
        assert_eq!(MacAddress::parse("0:11:22:aa:bb:c"), Ok(expected));
    }

    #[test]
    fn parse_rejects_wrong_group_count() {
        assert!(matches!(
            MacAddress::parse("00:11:22:33:44"),
            Err(FormatError::Mac { .. })
        ));
        assert!(MacAddress::parse("00:11:22:33:44:55:66").is_err());
        assert!(MacAddress::parse("").is_err());
    }

    #[test]
    fn parse_rejects_bad_groups() {
        assert!(MacAddress::parse("00:11:22:33:44:GG").is_err());
        assert!(MacAddress::parse("00:11:22:33:44:100").is_err());
        assert!(MacAddress::parse("00:11::33:44:55").is_err());
        assert!(MacAddress::parse("00:11:22:33:44:+5").is_err());
        assert!(MacAddress::parse("00:11-22:33:44:55").is_err());
        assert!(MacAddress::parse(" 00:11:22:33:44:55").is_err());
    }

    #[test]
    fn error_message_names_input() {
        let err = MacAddress::parse("00:11:22:33:44").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid MAC address '00:11:22:33:44': expected 6 groups"
        );
    }

    #[test]
    fn random_sets_locally_administered_bit() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..256 {
            assert!(MacAddress::random_with(&mut rng).is_locally_administered());
        }
    }

    #[test]
    fn random_round_trips_through_text() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let mac = MacAddress::random_with(&mut rng);
            assert_eq!(MacAddress::parse(&mac.to_canonical_string()), Ok(mac));
        }
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let a = MacAddress::random_with(&mut StdRng::seed_from_u64(3));
        let b = MacAddress::random_with(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn broadcast_and_multicast_flags() {
        assert!(MacAddress::BROADCAST.is_broadcast());
        assert!(MacAddress::BROADCAST.is_multicast());
        assert!(!MacAddress::ZERO.is_multicast());
        assert_eq!(MacAddress::BROADCAST.to_string(), "FF:FF:FF:FF:FF:FF");
    }

    #[test]
    fn pnet_conversion_keeps_octets() {
        let mac = MacAddress::new(1, 2, 3, 4, 5, 6);
        let pnet_mac: MacAddr = mac.into();
        assert_eq!(pnet_mac, MacAddr::new(1, 2, 3, 4, 5, 6));
        assert_eq!(MacAddress::from(pnet_mac), mac);
    }
}
