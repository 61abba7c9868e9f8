use std::collections::HashMap;

use linksim_common::config::Config;
use linksim_protocols::PhysicalLayerFrame;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, trace};

use crate::cable::{CableId, CableState, Endpoint, EthernetCable, PhysicalLayerCallback};
use crate::error::CableError;

/// Owns every cable created through it and is the single authority on id uniqueness.
///
/// Lookups by an id that was never created fail with [`CableError::NotFound`]. Removed
/// cables answer [`is_valid`](Self::is_valid), [`state`](Self::state) and
/// [`remove`](Self::remove); every other operation on them fails with
/// [`CableError::InvalidState`].
pub struct CableRegistry<R: RngCore = StdRng> {
    cables: HashMap<CableId, EthernetCable>,
    config: Config,
    rng: R,
}

impl CableRegistry<StdRng> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_config_and_rng(config, StdRng::from_os_rng())
    }
}

impl Default for CableRegistry<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> CableRegistry<R> {
    /// Registry drawing generated ids from `rng`; a seeded source gives reproducible ids.
    pub fn with_rng(rng: R) -> Self {
        Self::with_config_and_rng(Config::default(), rng)
    }

    pub fn with_config_and_rng(config: Config, rng: R) -> Self {
        Self {
            cables: HashMap::new(),
            config,
            rng,
        }
    }

    /// Registers a new unconnected cable.
    ///
    /// With `None` an unused id is generated; an explicit id must not be taken yet, not even
    /// by a removed cable.
    pub fn create(&mut self, id: Option<&str>) -> Result<CableId, CableError> {
        let id: CableId = match id {
            Some(requested) => {
                if self.cables.contains_key(requested) {
                    debug!(cable = requested, "rejected duplicate cable id");
                    return Err(CableError::DuplicateId(CableId::from(requested)));
                }
                CableId::from(requested)
            }
            None => self.generate_id()?,
        };

        self.cables.insert(id.clone(), EthernetCable::new(id.clone()));
        debug!(cable = %id, "cable created");
        Ok(id)
    }

    fn format_id(&self, n: u32) -> CableId {
        CableId(format!("{}{n}", self.config.cable_id_prefix))
    }

    fn generate_id(&mut self) -> Result<CableId, CableError> {
        let range = self.config.cable_id_range.clone();
        let exhausted = || CableError::IdSpaceExhausted {
            prefix: self.config.cable_id_prefix.clone(),
            start: range.start,
            end: range.end,
        };
        if range.is_empty() {
            return Err(exhausted());
        }

        for _ in 0..self.config.max_random_id_attempts {
            let n = self.rng.random_range(range.clone());
            let id = self.format_id(n);
            if !self.cables.contains_key(&id) {
                return Ok(id);
            }
        }

        trace!("random cable ids kept colliding, scanning for the lowest free one");
        range
            .clone()
            .map(|n| self.format_id(n))
            .find(|id| !self.cables.contains_key(id))
            .ok_or_else(exhausted)
    }

    /// Any cable, removed ones included.
    fn lookup(&self, id: &str) -> Result<&EthernetCable, CableError> {
        self.cables
            .get(id)
            .ok_or_else(|| CableError::NotFound(id.to_string()))
    }

    fn lookup_live(&self, id: &str) -> Result<&EthernetCable, CableError> {
        let cable = self.lookup(id)?;
        if !cable.is_valid() {
            return Err(CableError::InvalidState(cable.id.clone()));
        }
        Ok(cable)
    }

    fn lookup_live_mut(&mut self, id: &str) -> Result<&mut EthernetCable, CableError> {
        let cable = self
            .cables
            .get_mut(id)
            .ok_or_else(|| CableError::NotFound(id.to_string()))?;
        if !cable.is_valid() {
            debug!(cable = id, "operation on removed cable refused");
            return Err(CableError::InvalidState(cable.id.clone()));
        }
        Ok(cable)
    }

    /// Shared view of a live cable, e.g. for rendering it after a mutation.
    pub fn get(&self, id: &str) -> Result<&EthernetCable, CableError> {
        self.lookup_live(id)
    }

    /// Binds both ends, replacing earlier bindings, and marks the cable connected.
    pub fn connect(&mut self, id: &str, endpoint1: &str, endpoint2: &str) -> Result<(), CableError> {
        let cable = self.lookup_live_mut(id)?;
        cable.bind(Endpoint::One, endpoint1.to_string());
        cable.bind(Endpoint::Two, endpoint2.to_string());
        debug!(cable = id, endpoint1, endpoint2, "cable connected");
        Ok(())
    }

    /// Binds one end; the cable becomes connected once the other end is bound too.
    pub fn connect_endpoint(
        &mut self,
        id: &str,
        which: Endpoint,
        component: &str,
    ) -> Result<(), CableError> {
        let cable = self.lookup_live_mut(id)?;
        cable.bind(which, component.to_string());
        debug!(cable = id, endpoint = %which, component, state = %cable.state, "endpoint bound");
        Ok(())
    }

    /// `true` unless the cable has been removed.
    pub fn is_valid(&self, id: &str) -> Result<bool, CableError> {
        Ok(self.lookup(id)?.is_valid())
    }

    pub fn state(&self, id: &str) -> Result<CableState, CableError> {
        Ok(self.lookup(id)?.state())
    }

    /// Tears the cable down. Removing a removed cable is a no-op.
    pub fn remove(&mut self, id: &str) -> Result<(), CableError> {
        let cable = self
            .cables
            .get_mut(id)
            .ok_or_else(|| CableError::NotFound(id.to_string()))?;
        if cable.is_valid() {
            cable.tear_down();
            debug!(cable = id, "cable removed");
        }
        Ok(())
    }

    /// Component bound at `which`; `Ok(None)` while that end is unset.
    pub fn endpoint(&self, id: &str, which: Endpoint) -> Result<Option<&str>, CableError> {
        Ok(self.lookup_live(id)?.endpoint(which))
    }

    /// Registers the callback that receives frames arriving at `component`'s end.
    ///
    /// A cable with both ends bound to `component` gets the callback on both ends.
    pub fn attach_receiver(
        &mut self,
        id: &str,
        component: &str,
        callback: PhysicalLayerCallback,
    ) -> Result<(), CableError> {
        let cable = self.lookup_live_mut(id)?;
        let ends: Vec<Endpoint> = [Endpoint::One, Endpoint::Two]
            .into_iter()
            .filter(|which| cable.endpoint(*which) == Some(component))
            .collect();

        if ends.is_empty() {
            return Err(CableError::UnknownEndpoint {
                cable: cable.id.clone(),
                component: component.to_string(),
            });
        }
        for which in ends {
            cable.set_receiver(which, callback.clone());
            debug!(cable = id, endpoint = %which, component, "receiver attached");
        }
        Ok(())
    }

    /// Callback on the far side of `from`.
    pub(crate) fn route(&self, id: &str, from: &str) -> Result<PhysicalLayerCallback, CableError> {
        let cable = self.lookup_live(id)?;
        if cable.state() != CableState::Connected {
            return Err(CableError::NotConnected(cable.id.clone()));
        }

        let sender = cable
            .endpoint_of(from)
            .ok_or_else(|| CableError::UnknownEndpoint {
                cable: cable.id.clone(),
                component: from.to_string(),
            })?;
        let target = sender.opposite();

        cable.receiver(target).ok_or_else(|| CableError::NoReceiver {
            cable: cable.id.clone(),
            endpoint: target,
        })
    }

    /// Delivers `frame`, sent by component `from`, to the receiver at the other end.
    ///
    /// Takes `&mut self` so a registry borrowed out of a [`SharedCableRegistry`] lock cannot
    /// deliver frames; shared registries send through [`SharedCableRegistry::transmit`].
    ///
    /// [`SharedCableRegistry`]: crate::cable::SharedCableRegistry
    /// [`SharedCableRegistry::transmit`]: crate::cable::SharedCableRegistry::transmit
    pub fn transmit(
        &mut self,
        id: &str,
        from: &str,
        frame: PhysicalLayerFrame,
    ) -> Result<(), CableError> {
        let receiver = self.route(id, from)?;
        trace!(cable = id, from, bytes = frame.total_length(), "signal transmitted");
        receiver(frame);
        Ok(())
    }

    /// Number of ids handed out, tombstones included.
    pub fn len(&self) -> usize {
        self.cables.len()
    }

    /// True only before the first cable is created; removed cables still count.
    pub fn is_empty(&self) -> bool {
        self.cables.is_empty()
    }

    /// Every id the registry has handed out, tombstones included.
    pub fn ids(&self) -> impl Iterator<Item = &CableId> {
        self.cables.keys()
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
