use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

use rand::Rng;

use crate::error::FormatError;
use crate::network::Address;

/// `2001:db8::/32`, reserved for documentation.
const DOCUMENTATION_PREFIX: [u16; 2] = [0x2001, 0x0db8];

/// IPv6 address, rendered in RFC 5952 form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ipv6Address(Ipv6Addr);

impl Ipv6Address {
    pub const fn new(segments: [u16; 8]) -> Self {
        let [a, b, c, d, e, f, g, h] = segments;
        Self(Ipv6Addr::new(a, b, c, d, e, f, g, h))
    }

    pub fn segments(&self) -> [u16; 8] {
        self.0.segments()
    }

    /// Random address inside `2001:db8::/32`.
    pub fn random_documentation_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut segments: [u16; 8] = rng.random();
        segments[..2].copy_from_slice(&DOCUMENTATION_PREFIX);
        Self::new(segments)
    }

    pub fn random_documentation() -> Self {
        Self::random_documentation_with(&mut rand::rng())
    }

    pub fn as_std(&self) -> Ipv6Addr {
        self.0
    }
}

impl Address for Ipv6Address {
    type Octets = [u8; 16];

    fn from_octets(octets: [u8; 16]) -> Self {
        Self(Ipv6Addr::from(octets))
    }

    fn octets(&self) -> [u8; 16] {
        self.0.octets()
    }

    fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(Ipv6Addr::from(rng.random::<u128>()))
    }
}

/// Longest run (length >= 2) of zero segments as `(start, len)`; leftmost wins ties.
fn longest_zero_run(segments: &[u16; 8]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut index = 0;

    while index < segments.len() {
        if segments[index] != 0 {
            index += 1;
            continue;
        }
        let start = index;
        while index < segments.len() && segments[index] == 0 {
            index += 1;
        }
        let len = index - start;
        if len >= 2 && best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((start, len));
        }
    }

    best
}

fn write_groups(f: &mut fmt::Formatter<'_>, groups: &[u16]) -> fmt::Result {
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            f.write_str(":")?;
        }
        write!(f, "{group:x}")?;
    }
    Ok(())
}

impl fmt::Display for Ipv6Address {
    /// Always colon-hex, even for IPv4-mapped addresses, so the output never depends
    /// on which embedded forms a reader understands.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments = self.0.segments();

        match longest_zero_run(&segments) {
            Some((start, len)) => {
                write_groups(f, &segments[..start])?;
                f.write_str("::")?;
                write_groups(f, &segments[start + len..])
            }
            None => write_groups(f, &segments),
        }
    }
}

impl FromStr for Ipv6Address {
    type Err = FormatError;

    /// Parses full, compressed (`::`) and IPv4-embedded (`::ffff:1.2.3.4`) forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FormatError::ipv6(s, "empty input"));
        }
        if s.matches("::").count() > 1 {
            return Err(FormatError::ipv6(s, "'::' may appear only once"));
        }
        if s.split(':').any(|group| group.len() > 4 && !group.contains('.')) {
            return Err(FormatError::ipv6(s, "group longer than 4 hex digits"));
        }

        s.parse::<Ipv6Addr>()
            .map(Self)
            .map_err(|_| FormatError::ipv6(s, "malformed colon-hex notation"))
    }
}

impl From<Ipv6Addr> for Ipv6Address {
    fn from(addr: Ipv6Addr) -> Self {
        Self(addr)
    }
}

impl From<Ipv6Address> for Ipv6Addr {
    fn from(addr: Ipv6Address) -> Self {
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
