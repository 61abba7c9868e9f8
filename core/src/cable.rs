//! # Ethernet Cables
//!
//! A cable is a point-to-point link between two simulated components. Each end may be bound
//! to a component id and, once bound, may carry a receiver callback that frames arriving from
//! the other end are handed to.
//!
//! ## Lifecycle
//! ```text
//! Unconnected --connect--> Connected --remove--> Removed
//!      |                                            ^
//!      +--------------------remove------------------+
//! ```
//! `Removed` is terminal. Removed cables stay in the registry as tombstones so that
//! "removed" can be told apart from "never existed".

mod registry;
mod shared;

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use linksim_protocols::PhysicalLayerFrame;

use crate::error::CableError;

pub use registry::CableRegistry;
pub use shared::SharedCableRegistry;

/// Invoked with every frame delivered to the end it is attached to.
pub type PhysicalLayerCallback = Arc<dyn Fn(PhysicalLayerFrame) + Send + Sync>;

/// Opaque handle naming a cable inside its registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CableId(String);

impl CableId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for CableId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for CableId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CableId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CableId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One of the two ends of a cable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    One,
    Two,
}

impl Endpoint {
    pub fn opposite(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl TryFrom<u8> for Endpoint {
    type Error = CableError;

    fn try_from(which: u8) -> Result<Self, Self::Error> {
        match which {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(CableError::InvalidEndpoint(other)),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("1"),
            Self::Two => f.write_str("2"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CableState {
    Unconnected,
    Connected,
    Removed,
}

impl fmt::Display for CableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unconnected => f.write_str("unconnected"),
            Self::Connected => f.write_str("connected"),
            Self::Removed => f.write_str("removed"),
        }
    }
}

#[derive(Clone, Default)]
struct Port {
    component: Option<String>,
    receiver: Option<PhysicalLayerCallback>,
}

/// A cable entry owned by a [`CableRegistry`].
///
/// Callers only ever see shared references; every mutation goes through the registry.
#[derive(Clone)]
pub struct EthernetCable {
    id: CableId,
    ports: [Port; 2],
    state: CableState,
}

impl EthernetCable {
    fn new(id: CableId) -> Self {
        Self {
            id,
            ports: [Port::default(), Port::default()],
            state: CableState::Unconnected,
        }
    }

    pub fn id(&self) -> &CableId {
        &self.id
    }

    pub fn state(&self) -> CableState {
        self.state
    }

    pub fn is_valid(&self) -> bool {
        self.state != CableState::Removed
    }

    /// Component bound at `which`, `None` while unset.
    pub fn endpoint(&self, which: Endpoint) -> Option<&str> {
        self.ports[which.index()].component.as_deref()
    }

    pub fn has_receiver(&self, which: Endpoint) -> bool {
        self.ports[which.index()].receiver.is_some()
    }

    /// End bound to `component`, checking end 1 first.
    pub fn endpoint_of(&self, component: &str) -> Option<Endpoint> {
        [Endpoint::One, Endpoint::Two]
            .into_iter()
            .find(|which| self.endpoint(*which) == Some(component))
    }

    fn bind(&mut self, which: Endpoint, component: String) {
        let port = &mut self.ports[which.index()];
        if port.component.as_deref() != Some(component.as_str()) {
            port.receiver = None;
        }
        port.component = Some(component);

        if self.ports.iter().all(|port| port.component.is_some()) {
            self.state = CableState::Connected;
        }
    }

    fn set_receiver(&mut self, which: Endpoint, callback: PhysicalLayerCallback) {
        self.ports[which.index()].receiver = Some(callback);
    }

    fn receiver(&self, which: Endpoint) -> Option<PhysicalLayerCallback> {
        self.ports[which.index()].receiver.clone()
    }

    /// Drops bindings and receivers; the id stays behind as a tombstone.
    fn tear_down(&mut self) {
        self.ports = [Port::default(), Port::default()];
        self.state = CableState::Removed;
    }
}

impl fmt::Debug for EthernetCable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EthernetCable")
            .field("id", &self.id)
            .field("endpoint1", &self.endpoint(Endpoint::One))
            .field("endpoint2", &self.endpoint(Endpoint::Two))
            .field("receiver1", &self.has_receiver(Endpoint::One))
            .field("receiver2", &self.has_receiver(Endpoint::Two))
            .field("state", &self.state)
            .finish()
    }
}

impl fmt::Display for EthernetCable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let receiver = |which: Endpoint| {
            if self.has_receiver(which) { "attached" } else { "none" }
        };

        writeln!(f, "###Ethernet Cable")?;
        writeln!(f, "#id        : {}", self.id)?;
        for which in [Endpoint::One, Endpoint::Two] {
            writeln!(
                f,
                "#endpoint{which} : {}",
                self.endpoint(which).unwrap_or("unset")
            )?;
            writeln!(f, "#receiver{which} : {}", receiver(which))?;
        }
        writeln!(f, "#state     : {}", self.state)
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
