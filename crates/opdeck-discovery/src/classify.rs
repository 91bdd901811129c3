use opdeck_mode_sdk::{ModeDescriptor, ModeTag};
use serde::Serialize;

/// The two selectable categories a mode can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModeCategory {
    Interactive,
    Autonomous,
}

/// Outcome of inspecting one descriptor's declarative metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    NotAMode,
    Disabled,
    Interactive { pair_key: String },
    Autonomous { pair_key: String },
    Both {
        interactive_pair: String,
        autonomous_pair: String,
    },
}

/// Inspect one descriptor. The disabled flag wins over any tag.
pub fn classify(descriptor: &ModeDescriptor) -> Classification {
    if descriptor.disabled {
        return Classification::Disabled;
    }
    match (&descriptor.interactive, &descriptor.autonomous) {
        (None, None) => Classification::NotAMode,
        (Some(tag), None) => Classification::Interactive {
            pair_key: tag.pair_key.clone(),
        },
        (None, Some(tag)) => Classification::Autonomous {
            pair_key: tag.pair_key.clone(),
        },
        (Some(interactive), Some(autonomous)) => Classification::Both {
            interactive_pair: interactive.pair_key.clone(),
            autonomous_pair: autonomous.pair_key.clone(),
        },
    }
}

/// One classification occurrence: a descriptor seen through exactly one of
/// its declared categories. A dual-tagged descriptor yields two
/// independent occurrences.
#[derive(Debug, Clone)]
pub struct ClassifiedMode {
    pub category: ModeCategory,
    pub descriptor: ModeDescriptor,
}

impl ClassifiedMode {
    fn tag(&self) -> &ModeTag {
        match self.category {
            ModeCategory::Interactive => self.descriptor.interactive.as_ref(),
            ModeCategory::Autonomous => self.descriptor.autonomous.as_ref(),
        }
        .expect("occurrence built from a declared tag")
    }

    /// Pairing key declared by the matching tag; empty when unset.
    pub fn pair_key(&self) -> &str {
        &self.tag().pair_key
    }

    /// Resolved display name: the matching tag's name, else the id's
    /// simple name. Every name shown or registered goes through here.
    pub fn display_name(&self) -> &str {
        let name = self.tag().name.as_str();
        if name.is_empty() {
            self.descriptor.default_name()
        } else {
            name
        }
    }
}

/// Expand descriptors into per-category occurrences in catalog order,
/// excluding disabled units and units with no mode metadata.
pub fn classification_entries(descriptors: &[ModeDescriptor]) -> Vec<ClassifiedMode> {
    let mut entries = Vec::new();
    for descriptor in descriptors {
        match classify(descriptor) {
            Classification::NotAMode => {}
            Classification::Disabled => {
                tracing::debug!("skipping disabled mode {}", descriptor.id);
            }
            Classification::Interactive { .. } => entries.push(ClassifiedMode {
                category: ModeCategory::Interactive,
                descriptor: descriptor.clone(),
            }),
            Classification::Autonomous { .. } => entries.push(ClassifiedMode {
                category: ModeCategory::Autonomous,
                descriptor: descriptor.clone(),
            }),
            Classification::Both { .. } => {
                entries.push(ClassifiedMode {
                    category: ModeCategory::Interactive,
                    descriptor: descriptor.clone(),
                });
                entries.push(ClassifiedMode {
                    category: ModeCategory::Autonomous,
                    descriptor: descriptor.clone(),
                });
            }
        }
    }
    entries
}
