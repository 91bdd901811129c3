use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::classify::{ClassifiedMode, ModeCategory};

/// Occurrences sharing one group key. Non-empty by construction.
pub type Bucket = Vec<ClassifiedMode>;

/// Bucket occurrences by declared pairing key. An occurrence without a key
/// gets a fresh synthetic key (a per-pass counter rendered as a string) so
/// unpaired modes never merge.
pub fn group_by_pair_key(occurrences: Vec<ClassifiedMode>) -> HashMap<String, Bucket> {
    let mut groups: HashMap<String, Bucket> = HashMap::new();
    let mut next_synthetic = 0u32;
    for occurrence in occurrences {
        let key = occurrence.pair_key().to_string();
        if key.is_empty() {
            next_synthetic += 1;
            groups.insert(next_synthetic.to_string(), vec![occurrence]);
        } else {
            groups.entry(key).or_default().push(occurrence);
        }
    }
    groups
}

/// Category precedence, then resolved name: interactive entries sort ahead
/// of autonomous ones regardless of name.
fn compare_modes(lhs: &ClassifiedMode, rhs: &ClassifiedMode) -> Ordering {
    match (lhs.category, rhs.category) {
        (ModeCategory::Interactive, ModeCategory::Autonomous) => Ordering::Less,
        (ModeCategory::Autonomous, ModeCategory::Interactive) => Ordering::Greater,
        _ => lhs.display_name().cmp(rhs.display_name()),
    }
}

/// Order one bucket in place. The sort is stable, so classification order
/// breaks exact ties.
pub fn sort_bucket(bucket: &mut Bucket) {
    bucket.sort_by(compare_modes);
}

pub fn sort_groups(groups: &mut HashMap<String, Bucket>) {
    for bucket in groups.values_mut() {
        sort_bucket(bucket);
    }
}

/// Re-key buckets by their representative (first, post-sort) member's
/// resolved name. BTreeMap iteration yields the final ascending cross-group
/// order, interleaving synthetic-key and explicit-key buckets.
pub fn order_by_display_name(groups: HashMap<String, Bucket>) -> BTreeMap<String, Bucket> {
    let mut ordered = BTreeMap::new();
    for (_, bucket) in groups {
        let name = bucket
            .first()
            .expect("buckets are non-empty by construction")
            .display_name()
            .to_string();
        if ordered.insert(name.clone(), bucket).is_some() {
            tracing::debug!("duplicate representative name {name:?} displaced an earlier bucket");
        }
    }
    ordered
}
