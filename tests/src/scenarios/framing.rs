#![cfg(test)]
use linksim_common::{Address, MacAddress};
use linksim_protocols::physical::PHY_OVERHEAD;
use linksim_protocols::{EtherType, EthernetFrame, PhysicalLayerFrame};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn hosts() -> (MacAddress, MacAddress) {
    let mut rng = StdRng::seed_from_u64(99);
    (MacAddress::random_with(&mut rng), MacAddress::random_with(&mut rng))
}

#[test]
fn ethertype_is_normalized_through_both_layers() -> anyhow::Result<()> {
    let (dst, src) = hosts();
    let frame = EthernetFrame::build(dst, src, "0x800", b"ping".to_vec())?;
    assert!(frame.to_string().contains("#ethertype   : 0x0800"));

    let phy = PhysicalLayerFrame::wrap(frame);
    assert!(phy.to_string().contains("#ethertype   : 0x0800"));
    assert!(phy.to_string().contains(&format!("#dst_mac     : {dst}")));
    Ok(())
}

#[test]
fn total_length_formula() -> anyhow::Result<()> {
    let (dst, src) = hosts();
    let empty = PhysicalLayerFrame::wrap(EthernetFrame::build(dst, src, "0x0806", Vec::new())?);
    assert_eq!(empty.total_length(), PHY_OVERHEAD + 14);

    for k in [1usize, 10, 64, 1500] {
        let frame = EthernetFrame::build(dst, src, "0x0806", vec![0xEE; k])?;
        let phy = PhysicalLayerFrame::wrap(frame);
        assert_eq!(phy.total_length() - empty.total_length(), k);
        assert_eq!(phy.to_bytes().len(), phy.total_length());
    }
    Ok(())
}

#[test]
fn wire_bytes_decode_to_the_same_frame() -> anyhow::Result<()> {
    let (dst, src) = hosts();
    let frame = EthernetFrame::new(dst, src, EtherType::IPV6, vec![0x60, 0, 0, 0]);
    let phy = PhysicalLayerFrame::wrap(frame.clone());

    let decoded = PhysicalLayerFrame::from_bytes(&phy.to_bytes())?;
    assert_eq!(decoded, phy);
    assert_eq!(decoded.into_ethernet_frame(), frame);
    Ok(())
}

#[test]
fn frames_own_their_addresses() -> anyhow::Result<()> {
    let (dst, src) = hosts();
    let frame = EthernetFrame::build(dst, src, "0x0800", Vec::new())?;
    let copy = frame.clone();
    drop(frame);
    assert_eq!(copy.dst_mac(), dst);
    assert_eq!(copy.src_mac(), src);
    Ok(())
}
