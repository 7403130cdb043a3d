//! Host-owned map from satellite id to visual resource.

use rustc_hash::FxHashMap;
use tracing::debug;

use gyre_solver::SatelliteId;

/// The host half of the satellite bookkeeping: `id → V` where `V` is
/// whatever the rendering layer uses for a placed object (mesh handle, GPU
/// buffer set, scene-graph node id).
///
/// Deliberately knows nothing about the solver; callers keep the two maps
/// in sync through the shared [`SatelliteId`]. [`detach`](Self::detach)
/// hands the resource back so the host can dispose GPU state.
#[derive(Debug)]
pub struct VisualRegistry<V> {
    visuals: FxHashMap<SatelliteId, V>,
}

impl<V> Default for VisualRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> VisualRegistry<V> {
    pub fn new() -> Self {
        Self {
            visuals: FxHashMap::default(),
        }
    }

    /// Attach a visual for `id`. Returns the previous visual if one was
    /// already attached, so the caller can dispose it instead of leaking.
    pub fn attach(&mut self, id: SatelliteId, visual: V) -> Option<V> {
        let replaced = self.visuals.insert(id, visual);
        if replaced.is_some() {
            debug!(%id, "visual replaced");
        }
        replaced
    }

    /// Detach and return the visual for `id`, if any. The caller owns the
    /// returned resource and is responsible for its disposal.
    pub fn detach(&mut self, id: SatelliteId) -> Option<V> {
        self.visuals.remove(&id)
    }

    pub fn get(&self, id: SatelliteId) -> Option<&V> {
        self.visuals.get(&id)
    }

    pub fn get_mut(&mut self, id: SatelliteId) -> Option<&mut V> {
        self.visuals.get_mut(&id)
    }

    pub fn contains(&self, id: SatelliteId) -> bool {
        self.visuals.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SatelliteId, &V)> {
        self.visuals.iter().map(|(id, v)| (*id, v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SatelliteId, &mut V)> {
        self.visuals.iter_mut().map(|(id, v)| (*id, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> SatelliteId {
        SatelliteId::new(raw)
    }

    #[test]
    fn attach_detach_roundtrip() {
        let mut reg = VisualRegistry::new();
        assert_eq!(reg.attach(id(1), "octa-mesh"), None);
        assert!(reg.contains(id(1)));
        assert_eq!(reg.detach(id(1)), Some("octa-mesh"));
        assert!(reg.is_empty());
        assert_eq!(reg.detach(id(1)), None);
    }

    #[test]
    fn attach_returns_replaced_visual() {
        let mut reg = VisualRegistry::new();
        reg.attach(id(1), 100);
        assert_eq!(reg.attach(id(1), 200), Some(100));
        assert_eq!(reg.get(id(1)), Some(&200));
        assert_eq!(reg.len(), 1);
    }
}
