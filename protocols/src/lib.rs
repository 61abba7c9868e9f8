//! # linksim protocols
//!
//! Frame types that travel over simulated cables.
//!
//! * [`ethertype::EtherType`]: the 16-bit protocol tag.
//! * [`ethernet::EthernetFrame`]: destination, source, EtherType and payload.
//! * [`physical::PhysicalLayerFrame`]: an Ethernet frame behind its preamble and SFD.

pub mod ethernet;
pub mod ethertype;
pub mod physical;

pub use ethernet::EthernetFrame;
pub use ethertype::EtherType;
pub use physical::PhysicalLayerFrame;
