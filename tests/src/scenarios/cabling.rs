#![cfg(test)]
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use linksim_common::{Address, MacAddress};
use linksim_core::{CableError, CableId, CableRegistry, Endpoint, SharedCableRegistry};
use linksim_protocols::{EtherType, EthernetFrame, PhysicalLayerFrame};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A simulated device: a MAC address and the frames that reached it.
struct Station {
    name: &'static str,
    mac: MacAddress,
    inbox: Arc<Mutex<Vec<EthernetFrame>>>,
}

impl Station {
    fn new(name: &'static str, rng: &mut StdRng) -> Self {
        Self {
            name,
            mac: MacAddress::random_with(rng),
            inbox: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn plug_into(&self, registry: &SharedCableRegistry, cable: &CableId) -> anyhow::Result<()> {
        let inbox = Arc::clone(&self.inbox);
        registry.attach_receiver(
            cable,
            self.name,
            Arc::new(move |phy: PhysicalLayerFrame| {
                inbox.lock().unwrap().push(phy.into_ethernet_frame());
            }),
        )?;
        Ok(())
    }

    fn send_to(
        &self,
        peer: &Station,
        registry: &SharedCableRegistry,
        cable: &CableId,
        payload: &[u8],
    ) -> anyhow::Result<()> {
        let frame = EthernetFrame::build(peer.mac, self.mac, "0x0800", payload.to_vec())?;
        registry.transmit(cable, self.name, PhysicalLayerFrame::wrap(frame))?;
        Ok(())
    }

    fn received(&self) -> Vec<EthernetFrame> {
        self.inbox.lock().unwrap().clone()
    }
}

#[test]
fn two_stations_exchange_frames() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(3);
    let registry = SharedCableRegistry::from(CableRegistry::with_rng(StdRng::seed_from_u64(4)));
    let (alice, bob) = (Station::new("alice", &mut rng), Station::new("bob", &mut rng));

    let cable = registry.create(None)?;
    registry.connect(&cable, alice.name, bob.name)?;
    alice.plug_into(&registry, &cable)?;
    bob.plug_into(&registry, &cable)?;

    alice.send_to(&bob, &registry, &cable, b"hello")?;
    bob.send_to(&alice, &registry, &cable, b"hi")?;

    let at_bob = bob.received();
    assert_eq!(at_bob.len(), 1);
    assert_eq!(at_bob[0].src_mac(), alice.mac);
    assert_eq!(at_bob[0].ethertype(), EtherType::IPV4);
    assert_eq!(at_bob[0].payload(), b"hello");

    let at_alice = alice.received();
    assert_eq!(at_alice.len(), 1);
    assert_eq!(at_alice[0].dst_mac(), alice.mac);
    Ok(())
}

#[test]
fn removed_cable_stops_carrying_frames() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(8);
    let registry = SharedCableRegistry::new();
    let (alice, bob) = (Station::new("alice", &mut rng), Station::new("bob", &mut rng));

    let cable = registry.create(Some("patch"))?;
    registry.connect(&cable, alice.name, bob.name)?;
    bob.plug_into(&registry, &cable)?;
    registry.remove(&cable)?;

    let err = alice
        .send_to(&bob, &registry, &cable, b"late")
        .unwrap_err()
        .downcast::<CableError>()?;
    assert_eq!(err, CableError::InvalidState(cable.clone()));
    assert!(bob.received().is_empty());

    assert!(matches!(
        registry.connect(&cable, alice.name, bob.name),
        Err(CableError::InvalidState(_))
    ));
    Ok(())
}

#[test]
fn full_cable_lifecycle() -> anyhow::Result<()> {
    let mut registry = CableRegistry::with_rng(StdRng::seed_from_u64(10));

    let a = registry.create(Some("A"))?;
    assert!(matches!(
        registry.create(Some("A")),
        Err(CableError::DuplicateId(_))
    ));

    let one = Endpoint::try_from(1u8)?;
    let two = Endpoint::try_from(2u8)?;
    assert!(registry.is_valid(&a)?);
    assert_eq!(registry.endpoint(&a, one)?, None);
    assert_eq!(registry.endpoint(&a, two)?, None);

    registry.connect(&a, "c1", "c2")?;
    assert!(registry.is_valid(&a)?);
    assert_eq!(registry.endpoint(&a, one)?, Some("c1"));
    assert_eq!(registry.endpoint(&a, two)?, Some("c2"));

    registry.remove(&a)?;
    assert!(!registry.is_valid(&a)?);
    registry.remove(&a)?;
    assert!(!registry.is_valid(&a)?);

    assert!(matches!(
        registry.is_valid("never-created"),
        Err(CableError::NotFound(_))
    ));
    Ok(())
}

#[test]
fn thousand_generated_ids_are_distinct() -> anyhow::Result<()> {
    let mut registry = CableRegistry::new();
    let ids: HashSet<CableId> = (0..1000)
        .map(|_| registry.create(None))
        .collect::<Result<_, _>>()?;
    assert_eq!(ids.len(), 1000);
    Ok(())
}

#[test]
fn cables_know_nothing_about_frames() -> anyhow::Result<()> {
    // Endpoint ids are opaque strings; any text names a component.
    let mut registry = CableRegistry::new();
    let id = registry.create(None)?;
    registry.connect(&id, "AA:BB:CC:DD:EE:FF", "router #1")?;
    assert_eq!(registry.endpoint(&id, Endpoint::One)?, Some("AA:BB:CC:DD:EE:FF"));
    Ok(())
}
