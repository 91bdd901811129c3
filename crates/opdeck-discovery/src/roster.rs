use std::fs;
use std::path::Path;

use opdeck_mode_sdk::{Mode, ModeDescriptor, ModeRegistry, ModeTag, Telemetry};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse roster: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Declarative stand-in for compiled-in registrations. The planner loads a
/// roster to dry-run a pass against a proposed mode set before anyone
/// writes the modules.
#[derive(Debug, Deserialize)]
pub struct Roster {
    pub modes: Vec<RosterMode>,
}

#[derive(Debug, Deserialize)]
pub struct RosterMode {
    pub id: String,
    #[serde(default)]
    pub interactive: Option<RosterTag>,
    #[serde(default)]
    pub autonomous: Option<RosterTag>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default = "default_constructible")]
    pub constructible: bool,
}

#[derive(Debug, Deserialize)]
pub struct RosterTag {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pair_key: String,
}

fn default_constructible() -> bool {
    true
}

/// Inert instance backing constructible roster entries during a dry run.
struct PlannedMode;

impl Mode for PlannedMode {
    fn update(&mut self, _telemetry: &mut Telemetry) {}
}

impl Roster {
    pub fn from_json(raw: &str) -> Result<Self, RosterError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, RosterError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Install every roster mode into the registry.
    pub fn install(self, registry: &ModeRegistry) {
        for mode in self.modes {
            registry.register(mode.into_descriptor());
        }
    }
}

impl RosterMode {
    fn into_descriptor(self) -> ModeDescriptor {
        let mut descriptor = if self.constructible {
            ModeDescriptor::with_factory(self.id, || Box::new(PlannedMode))
        } else {
            ModeDescriptor::new(self.id)
        };
        if let Some(tag) = self.interactive {
            descriptor = descriptor.with_interactive(ModeTag {
                name: tag.name,
                pair_key: tag.pair_key,
            });
        }
        if let Some(tag) = self.autonomous {
            descriptor = descriptor.with_autonomous(ModeTag {
                name: tag.name,
                pair_key: tag.pair_key,
            });
        }
        if self.disabled {
            descriptor = descriptor.with_disabled();
        }
        descriptor
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = r#"{
        "modes": [
            {
                "id": "team::TeleMain",
                "interactive": { "name": "Tele Main", "pair_key": "main" }
            },
            {
                "id": "team::AutoMain",
                "autonomous": { "pair_key": "main" },
                "constructible": false
            },
            {
                "id": "team::Retired",
                "interactive": { "name": "Retired" },
                "disabled": true
            }
        ]
    }"#;

    #[test]
    fn parses_defaults_and_installs() {
        let roster = Roster::from_json(SAMPLE).unwrap();
        assert_eq!(roster.modes.len(), 3);
        assert!(roster.modes[0].constructible);
        assert!(!roster.modes[1].constructible);

        let registry = ModeRegistry::new();
        roster.install(&registry);
        assert_eq!(registry.len(), 3);

        let auto = registry
            .resolve(&"team::AutoMain".into())
            .unwrap();
        assert!(!auto.is_constructible());
        assert_eq!(auto.autonomous.as_ref().unwrap().pair_key, "main");
        assert_eq!(auto.autonomous.as_ref().unwrap().name, "");

        let retired = registry.resolve(&"team::Retired".into()).unwrap();
        assert!(retired.disabled);
    }

    #[test]
    fn from_path_reads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(&path, SAMPLE).unwrap();
        let roster = Roster::from_path(&path).unwrap();
        assert_eq!(roster.modes.len(), 3);
    }

    #[test]
    fn unreadable_and_malformed_rosters_are_distinct_errors() {
        let missing = Roster::from_path(Path::new("/nonexistent/roster.json")).unwrap_err();
        assert!(matches!(missing, RosterError::Read(_)));
        let malformed = Roster::from_json("{").unwrap_err();
        assert!(matches!(malformed, RosterError::Parse(_)));
    }
}
