use std::fmt;

use linksim_common::utils::hex;
use linksim_common::{FormatError, MacAddress};
use pnet::packet::Packet;
use pnet::packet::ethernet::{EthernetPacket, MutableEthernetPacket};

use crate::ethertype::EtherType;

/// Destination MAC, source MAC and EtherType.
pub const ETH_HDR_LEN: usize = 14;

/// An Ethernet II frame without FCS.
///
/// Owns copies of both addresses and its payload; nothing is padded to the 64-byte minimum.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EthernetFrame {
    dst_mac: MacAddress,
    src_mac: MacAddress,
    ethertype: EtherType,
    payload: Vec<u8>,
}

impl EthernetFrame {
    pub fn new(
        dst_mac: MacAddress,
        src_mac: MacAddress,
        ethertype: EtherType,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            dst_mac,
            src_mac,
            ethertype,
            payload,
        }
    }

    /// Builds a frame from an EtherType written as text, e.g. `"0x0800"` or `"0x800"`.
    pub fn build(
        dst_mac: MacAddress,
        src_mac: MacAddress,
        ethertype: &str,
        payload: Vec<u8>,
    ) -> Result<Self, FormatError> {
        let ethertype: EtherType = ethertype.parse()?;
        Ok(Self::new(dst_mac, src_mac, ethertype, payload))
    }

    pub fn dst_mac(&self) -> MacAddress {
        self.dst_mac
    }

    pub fn src_mac(&self) -> MacAddress {
        self.src_mac
    }

    pub fn ethertype(&self) -> EtherType {
        self.ethertype
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Header plus payload: `14 + payload.len()`.
    pub fn total_length(&self) -> usize {
        ETH_HDR_LEN + self.payload.len()
    }

    /// Wire bytes: `dst | src | ethertype (big endian) | payload`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer: Vec<u8> = vec![0u8; self.total_length()];
        self.write_to(&mut buffer);
        buffer
    }

    /// Writes the frame into the front of `buffer`, which must hold `total_length()` bytes.
    pub(crate) fn write_to(&self, buffer: &mut [u8]) {
        if let Some(mut eth) = MutableEthernetPacket::new(buffer) {
            eth.set_destination(self.dst_mac.into());
            eth.set_source(self.src_mac.into());
            eth.set_ethertype(self.ethertype.into());
            eth.set_payload(&self.payload);
        }
    }

    /// Decodes wire bytes; everything after the header becomes the payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        let eth = EthernetPacket::new(bytes).ok_or(FormatError::Truncated {
            needed: ETH_HDR_LEN,
            actual: bytes.len(),
        })?;

        Ok(Self {
            dst_mac: eth.get_destination().into(),
            src_mac: eth.get_source().into(),
            ethertype: eth.get_ethertype().into(),
            payload: eth.payload().to_vec(),
        })
    }
}

impl fmt::Display for EthernetFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#dst_mac     : {}", self.dst_mac)?;
        writeln!(f, "#src_mac     : {}", self.src_mac)?;
        writeln!(f, "#ethertype   : {}", self.ethertype)?;
        writeln!(f, "#data        : [{}]", hex::spaced_upper(&self.payload))
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
