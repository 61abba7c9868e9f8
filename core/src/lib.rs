//! # linksim core
//!
//! The connectivity side of the simulator: a registry of point-to-point Ethernet cables.
//!
//! * **[`cable`]**: [`CableRegistry`] owns every cable; callers hold [`CableId`] handles.
//!   [`SharedCableRegistry`] puts the registry behind one lock for multi-threaded hosts.
//! * **[`error`]**: [`CableError`], distinguishing ids that never existed from cables that
//!   were removed.

pub mod cable;
pub mod error;

pub use cable::{
    CableId, CableRegistry, CableState, Endpoint, EthernetCable, PhysicalLayerCallback,
    SharedCableRegistry,
};
pub use error::CableError;
