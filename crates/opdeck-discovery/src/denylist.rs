use opdeck_mode_sdk::ModeId;

/// Namespace prefixes excluded from discovery. Matching is substring
/// containment, so units nested anywhere under a listed prefix stay
/// skipped. The list only ever grows within a pass.
#[derive(Debug, Clone, Default)]
pub struct Denylist {
    prefixes: Vec<String>,
}

impl Denylist {
    pub fn seeded(prefixes: impl IntoIterator<Item = String>) -> Self {
        let mut denylist = Self::default();
        for prefix in prefixes {
            denylist.add(prefix);
        }
        denylist
    }

    /// True unless the id contains any listed prefix.
    pub fn should_include(&self, id: &ModeId) -> bool {
        !self
            .prefixes
            .iter()
            .any(|prefix| id.as_str().contains(prefix.as_str()))
    }

    pub fn add(&mut self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        if !prefix.is_empty() && !self.prefixes.contains(&prefix) {
            self.prefixes.push(prefix);
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}
