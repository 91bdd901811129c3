//! Mode discovery engine: enumerates declared units, filters them against
//! an adaptive denylist, classifies and groups them by pairing key, orders
//! them, validates the registrar's name-table budget and emits the final
//! sequence.

mod capacity;
mod catalog;
mod classify;
mod denylist;
mod group;
mod registrar;
mod roster;
mod session;

pub use capacity::{
    encoded_name_table, enforce_name_budget, name_table_len, RegistrationEntry,
    NAME_TABLE_BUDGET, OVER_CAPACITY_NAME, RECORD_SEPARATOR,
};
pub use catalog::{LoadError, UnitCatalog, UnitLoader};
pub use classify::{classification_entries, classify, Classification, ClassifiedMode, ModeCategory};
pub use denylist::Denylist;
pub use group::{group_by_pair_key, order_by_display_name, sort_bucket, sort_groups, Bucket};
pub use registrar::{emit, ModeRegistrar};
pub use roster::{Roster, RosterError, RosterMode, RosterTag};
pub use session::{
    discover_and_register, Diagnostic, DiscoveryConfig, DiscoveryReport, DiscoverySession,
};
