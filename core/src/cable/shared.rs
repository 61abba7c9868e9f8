use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use linksim_protocols::PhysicalLayerFrame;
use tracing::trace;

use crate::cable::{CableId, CableRegistry, CableState, Endpoint, PhysicalLayerCallback};
use crate::error::CableError;

/// A [`CableRegistry`] behind a single lock, cloneable across threads.
///
/// Every call takes the lock once. Receiver callbacks run after it is released, so a
/// receiver may call back into the registry.
#[derive(Clone, Default)]
pub struct SharedCableRegistry {
    inner: Arc<Mutex<CableRegistry>>,
}

impl SharedCableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A panic while the lock was held cannot leave a cable half-updated, so the poisoned
    /// guard is used as is.
    fn lock(&self) -> MutexGuard<'_, CableRegistry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` against the registry while holding the lock. The borrow is shared, so `f`
    /// cannot mutate cables or deliver frames; use the methods below for that.
    pub fn with<T>(&self, f: impl FnOnce(&CableRegistry) -> T) -> T {
        f(&self.lock())
    }

    pub fn create(&self, id: Option<&str>) -> Result<CableId, CableError> {
        self.lock().create(id)
    }

    pub fn connect(&self, id: &str, endpoint1: &str, endpoint2: &str) -> Result<(), CableError> {
        self.lock().connect(id, endpoint1, endpoint2)
    }

    pub fn connect_endpoint(
        &self,
        id: &str,
        which: Endpoint,
        component: &str,
    ) -> Result<(), CableError> {
        self.lock().connect_endpoint(id, which, component)
    }

    pub fn is_valid(&self, id: &str) -> Result<bool, CableError> {
        self.lock().is_valid(id)
    }

    pub fn state(&self, id: &str) -> Result<CableState, CableError> {
        self.lock().state(id)
    }

    pub fn remove(&self, id: &str) -> Result<(), CableError> {
        self.lock().remove(id)
    }

    pub fn endpoint(&self, id: &str, which: Endpoint) -> Result<Option<String>, CableError> {
        Ok(self.lock().endpoint(id, which)?.map(str::to_string))
    }

    /// Rendered cable, as shown after a mutating call.
    pub fn describe(&self, id: &str) -> Result<String, CableError> {
        Ok(self.lock().get(id)?.to_string())
    }

    pub fn attach_receiver(
        &self,
        id: &str,
        component: &str,
        callback: PhysicalLayerCallback,
    ) -> Result<(), CableError> {
        self.lock().attach_receiver(id, component, callback)
    }

    /// Delivers `frame` like [`CableRegistry::transmit`], but the receiver runs after the
    /// lock is released.
    pub fn transmit(&self, id: &str, from: &str, frame: PhysicalLayerFrame) -> Result<(), CableError> {
        let receiver = self.lock().route(id, from)?;
        trace!(cable = id, from, bytes = frame.total_length(), "signal transmitted");
        receiver(frame);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl From<CableRegistry> for SharedCableRegistry {
    fn from(registry: CableRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
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
