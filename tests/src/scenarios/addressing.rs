#![cfg(test)]
use linksim_common::{Address, FormatError, Ipv4Address, Ipv6Address, MacAddress};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SAMPLES: usize = 1000;

/// Random values of `A` survive a trip through their canonical text.
fn assert_round_trip<A: Address + std::fmt::Debug>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..SAMPLES {
        let addr = A::random_with(&mut rng);
        let text = addr.to_canonical_string();
        assert_eq!(A::parse(&text), Ok(addr), "failed to round-trip {text}");
        assert_eq!(A::from_octets(addr.octets()), addr);
    }
}

#[test]
fn every_family_round_trips() {
    assert_round_trip::<MacAddress>(11);
    assert_round_trip::<Ipv4Address>(12);
    assert_round_trip::<Ipv6Address>(13);
}

#[test]
fn unseeded_generation_round_trips() {
    for _ in 0..SAMPLES {
        let mac = MacAddress::random();
        assert_eq!(MacAddress::parse(&mac.to_canonical_string()), Ok(mac));
        let v4 = Ipv4Address::random();
        assert_eq!(Ipv4Address::parse(&v4.to_canonical_string()), Ok(v4));
        let v6 = Ipv6Address::random();
        assert_eq!(Ipv6Address::parse(&v6.to_canonical_string()), Ok(v6));
    }
}

#[test]
fn rejections_are_format_errors() {
    assert!(matches!(
        Ipv4Address::parse("256.1.1.1"),
        Err(FormatError::Ipv4 { .. })
    ));
    assert!(matches!(
        MacAddress::parse("00:11:22:33:44"),
        Err(FormatError::Mac { .. })
    ));
    assert!(matches!(
        Ipv6Address::parse("2001:db8:::1"),
        Err(FormatError::Ipv6 { .. })
    ));
}

#[test]
fn quotes_are_not_stripped_by_the_parser() {
    assert!(MacAddress::parse("\"00:11:22:33:44:55\"").is_err());
    assert!(Ipv4Address::parse("'10.0.0.1'").is_err());
}

#[test]
fn helper_generators_follow_their_blocks() {
    let v4 = Ipv4Address::random_private();
    assert!(v4.to_string().starts_with("192.168.0."));

    let v6 = Ipv6Address::random_documentation();
    assert_eq!(v6.segments()[..2], [0x2001, 0x0db8]);
}
