use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::{ModeDescriptor, ModeId};

/// Process-lifetime table of declared modes. Modules install their
/// descriptors at startup; discovery reads the table once all installs
/// have run.
#[derive(Debug, Default)]
pub struct ModeRegistry {
    modes: RwLock<BTreeMap<ModeId, ModeDescriptor>>,
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the descriptor registered under its id.
    pub fn register(&self, descriptor: ModeDescriptor) {
        let id = descriptor.id.clone();
        if self.modes.write().insert(id.clone(), descriptor).is_some() {
            tracing::debug!("replaced existing registration for {id}");
        }
    }

    /// Every registered id, in deterministic (sorted) order.
    pub fn ids(&self) -> Vec<ModeId> {
        self.modes.read().keys().cloned().collect()
    }

    pub fn resolve(&self, id: &ModeId) -> Option<ModeDescriptor> {
        self.modes.read().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.modes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ModeTag;

    #[test]
    fn register_upserts_by_id() {
        let registry = ModeRegistry::new();
        registry.register(ModeDescriptor::new("team::Main"));
        registry.register(
            ModeDescriptor::new("team::Main").with_interactive(ModeTag::named("Main")),
        );
        assert_eq!(registry.len(), 1);
        let descriptor = registry.resolve(&ModeId::new("team::Main")).unwrap();
        assert_eq!(descriptor.interactive, Some(ModeTag::named("Main")));
    }

    #[test]
    fn ids_are_sorted() {
        let registry = ModeRegistry::new();
        registry.register(ModeDescriptor::new("zeta::Last"));
        registry.register(ModeDescriptor::new("alpha::First"));
        let ids = registry.ids();
        assert_eq!(ids[0].as_str(), "alpha::First");
        assert_eq!(ids[1].as_str(), "zeta::Last");
    }
}
