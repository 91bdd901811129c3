use opdeck_mode_sdk::{ModeDescriptor, ModeId, ModeRegistry};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no descriptor registered for {0}")]
    Unresolved(ModeId),
}

/// Enumerates every candidate unit known to the host installation. Order
/// is not significant; discovery imposes its own.
pub trait UnitCatalog {
    fn unit_ids(&self) -> Vec<ModeId>;
}

/// Resolves an identifier into an introspectable descriptor. Failures are
/// non-fatal to a discovery pass.
pub trait UnitLoader {
    fn load(&self, id: &ModeId) -> Result<ModeDescriptor, LoadError>;
}

impl UnitCatalog for ModeRegistry {
    fn unit_ids(&self) -> Vec<ModeId> {
        self.ids()
    }
}

impl UnitLoader for ModeRegistry {
    fn load(&self, id: &ModeId) -> Result<ModeDescriptor, LoadError> {
        self.resolve(id)
            .ok_or_else(|| LoadError::Unresolved(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use opdeck_mode_sdk::ModeDescriptor;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_loads_what_it_holds() {
        let registry = ModeRegistry::new();
        registry.register(ModeDescriptor::new("team::Main"));
        let id = ModeId::new("team::Main");
        assert_eq!(registry.load(&id).unwrap().id, id);
    }

    #[test]
    fn unknown_id_is_unresolved() {
        let registry = ModeRegistry::new();
        let err = registry.load(&ModeId::new("team::Missing")).unwrap_err();
        assert!(err.to_string().contains("team::Missing"));
    }
}
