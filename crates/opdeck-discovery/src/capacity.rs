use opdeck_mode_sdk::{ModeDescriptor, OverCapacityMode};
use serde::Serialize;

/// Separator byte the downstream registrar places between names in its
/// name table.
pub const RECORD_SEPARATOR: u8 = 0x1e;

/// Hard limit the downstream registrar enforces on the encoded name table.
pub const NAME_TABLE_BUDGET: usize = 255;

/// Name registered in place of the real set when the budget is exceeded.
pub const OVER_CAPACITY_NAME: &str = "Too Many OpMode Names";

/// Final (display name, descriptor) pair handed to the registrar. The name
/// is never empty: resolution falls back to the id's simple name.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationEntry {
    pub name: String,
    pub descriptor: ModeDescriptor,
}

/// Byte image of the registrar's name table: every name's UTF-8 bytes
/// followed by one record separator.
pub fn encoded_name_table(entries: &[RegistrationEntry]) -> Vec<u8> {
    let mut table = Vec::new();
    for entry in entries {
        table.extend_from_slice(entry.name.as_bytes());
        table.push(RECORD_SEPARATOR);
    }
    table
}

pub fn name_table_len(entries: &[RegistrationEntry]) -> usize {
    encoded_name_table(entries).len()
}

/// Enforce the registrar's byte budget, failing closed: an oversized set is
/// discarded and replaced by the single over-capacity placeholder entry.
/// Returns the surviving entries and, on overflow, the overshoot in bytes.
pub fn enforce_name_budget(
    entries: Vec<RegistrationEntry>,
) -> (Vec<RegistrationEntry>, Option<usize>) {
    let length = name_table_len(&entries);
    if length > NAME_TABLE_BUDGET {
        let over_by = length - NAME_TABLE_BUDGET;
        tracing::error!(
            "mode names are {over_by} bytes over the {NAME_TABLE_BUDGET}-byte name table \
             budget; registering the over-capacity placeholder instead"
        );
        let placeholder = RegistrationEntry {
            name: OVER_CAPACITY_NAME.to_string(),
            descriptor: OverCapacityMode::descriptor(),
        };
        (vec![placeholder], Some(over_by))
    } else {
        (entries, None)
    }
}
