use std::fmt;

use linksim_common::FormatError;
use linksim_common::utils::hex;

use crate::ethernet::{ETH_HDR_LEN, EthernetFrame};

pub const PREAMBLE_LEN: usize = 7;
pub const PREAMBLE_BYTE: u8 = 0xAA;
pub const SFD: u8 = 0xAB;

/// Bytes added in front of the Ethernet frame: preamble plus start frame delimiter.
///
/// No FCS, inter-frame gap or minimum-size padding is counted.
pub const PHY_OVERHEAD: usize = PREAMBLE_LEN + 1;

/// An Ethernet frame as it is placed on a simulated cable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PhysicalLayerFrame {
    preamble: [u8; PREAMBLE_LEN],
    sfd: u8,
    ethernet_frame: EthernetFrame,
}

impl PhysicalLayerFrame {
    /// Wraps `frame` behind the standard preamble and SFD.
    pub fn wrap(frame: EthernetFrame) -> Self {
        Self::from_raw([PREAMBLE_BYTE; PREAMBLE_LEN], SFD, frame)
    }

    /// Builds an envelope with caller-supplied preamble and SFD bytes.
    pub fn from_raw(preamble: [u8; PREAMBLE_LEN], sfd: u8, ethernet_frame: EthernetFrame) -> Self {
        Self {
            preamble,
            sfd,
            ethernet_frame,
        }
    }

    pub fn preamble(&self) -> [u8; PREAMBLE_LEN] {
        self.preamble
    }

    pub fn sfd(&self) -> u8 {
        self.sfd
    }

    pub fn ethernet_frame(&self) -> &EthernetFrame {
        &self.ethernet_frame
    }

    pub fn into_ethernet_frame(self) -> EthernetFrame {
        self.ethernet_frame
    }

    /// `PHY_OVERHEAD + 14 + payload.len()`.
    pub fn total_length(&self) -> usize {
        PHY_OVERHEAD + self.ethernet_frame.total_length()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer: Vec<u8> = vec![0u8; self.total_length()];
        buffer[..PREAMBLE_LEN].copy_from_slice(&self.preamble);
        buffer[PREAMBLE_LEN] = self.sfd;
        self.ethernet_frame.write_to(&mut buffer[PHY_OVERHEAD..]);
        buffer
    }

    /// Splits wire bytes into preamble, SFD and Ethernet frame.
    ///
    /// Preamble and SFD values are taken as they are, not checked against the defaults.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        let needed = PHY_OVERHEAD + ETH_HDR_LEN;
        if bytes.len() < needed {
            return Err(FormatError::Truncated {
                needed,
                actual: bytes.len(),
            });
        }

        let mut preamble = [0u8; PREAMBLE_LEN];
        preamble.copy_from_slice(&bytes[..PREAMBLE_LEN]);
        let frame = EthernetFrame::from_bytes(&bytes[PHY_OVERHEAD..])?;

        Ok(Self::from_raw(preamble, bytes[PREAMBLE_LEN], frame))
    }
}

impl From<EthernetFrame> for PhysicalLayerFrame {
    fn from(frame: EthernetFrame) -> Self {
        Self::wrap(frame)
    }
}

impl fmt::Display for PhysicalLayerFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#preamble       : {}", hex::spaced_upper(&self.preamble))?;
        writeln!(f, "#sfd            : {:02X}", self.sfd)?;
        writeln!(f, "#ethernet_frame : ")?;
        write!(f, "{}", self.ethernet_frame)
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
