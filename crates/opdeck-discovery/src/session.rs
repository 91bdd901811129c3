use opdeck_mode_sdk::{ModeDescriptor, ModeId, ModeRegistry};
use serde::Serialize;

use crate::capacity::{enforce_name_budget, name_table_len, RegistrationEntry};
use crate::catalog::{UnitCatalog, UnitLoader};
use crate::classify::classification_entries;
use crate::denylist::Denylist;
use crate::group::{group_by_pair_key, order_by_display_name, sort_groups};
use crate::registrar::{emit, ModeRegistrar};

/// Per-pass settings. The defaults seed the denylist with the host's own
/// infrastructure namespaces so discovery never wades through them.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    pub deny_prefixes: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            deny_prefixes: vec!["opdeck::internal".into(), "hal::vendor".into()],
        }
    }
}

/// Non-fatal findings surfaced by a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Diagnostic {
    /// An identifier could not be resolved; its namespace was denylisted
    /// for the rest of the pass.
    LoadFailed { id: ModeId, denied_prefix: String },
    /// A registered mode has no constructor.
    NotConstructible { id: ModeId },
    /// The combined name table ran over budget by this many bytes.
    NameBudgetExceeded { over_by: usize },
}

/// Outcome of one discovery pass.
#[derive(Debug, Serialize)]
pub struct DiscoveryReport {
    pub entries: Vec<RegistrationEntry>,
    pub diagnostics: Vec<Diagnostic>,
    pub name_table_len: usize,
}

/// One run-to-completion discovery pass. All mutable pass state lives here
/// and is dropped with the session; only the registry and whatever the
/// host binds outlive it.
#[derive(Debug)]
pub struct DiscoverySession {
    denylist: Denylist,
}

impl DiscoverySession {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self {
            denylist: Denylist::seeded(config.deny_prefixes),
        }
    }

    /// Run the full pipeline: enumerate, filter, load, classify, group,
    /// sort within groups, order across groups and budget-check.
    pub fn discover(
        &mut self,
        catalog: &dyn UnitCatalog,
        loader: &dyn UnitLoader,
    ) -> DiscoveryReport {
        let mut diagnostics = Vec::new();
        let descriptors = self.collect_loadable(catalog, loader, &mut diagnostics);
        let occurrences = classification_entries(&descriptors);
        let mut groups = group_by_pair_key(occurrences);
        sort_groups(&mut groups);
        let ordered = order_by_display_name(groups);

        let mut entries = Vec::new();
        for bucket in ordered.values() {
            for occurrence in bucket {
                entries.push(RegistrationEntry {
                    name: occurrence.display_name().to_string(),
                    descriptor: occurrence.descriptor.clone(),
                });
            }
        }

        let (entries, over_by) = enforce_name_budget(entries);
        if let Some(over_by) = over_by {
            diagnostics.push(Diagnostic::NameBudgetExceeded { over_by });
        }
        let name_table_len = name_table_len(&entries);
        DiscoveryReport {
            entries,
            diagnostics,
            name_table_len,
        }
    }

    /// Walk the catalog sequentially so denylist growth from one failure
    /// pre-filters the identifiers that follow it.
    fn collect_loadable(
        &mut self,
        catalog: &dyn UnitCatalog,
        loader: &dyn UnitLoader,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<ModeDescriptor> {
        let mut descriptors = Vec::new();
        for id in catalog.unit_ids() {
            if !self.denylist.should_include(&id) {
                continue;
            }
            match loader.load(&id) {
                Ok(descriptor) => descriptors.push(descriptor),
                Err(err) => {
                    let prefix = id.enclosing_prefix().to_string();
                    tracing::warn!("{err}; denylisting {prefix:?} for the rest of the pass");
                    self.denylist.add(prefix.clone());
                    diagnostics.push(Diagnostic::LoadFailed {
                        id,
                        denied_prefix: prefix,
                    });
                }
            }
        }
        descriptors
    }
}

/// Discover against the supplied registry and emit straight to the host
/// registrar: the common startup path.
pub fn discover_and_register(
    config: DiscoveryConfig,
    registry: &ModeRegistry,
    registrar: &mut dyn ModeRegistrar,
) -> DiscoveryReport {
    let mut session = DiscoverySession::new(config);
    let mut report = session.discover(registry, registry);
    report.diagnostics.extend(emit(&report.entries, registrar));
    report
}
