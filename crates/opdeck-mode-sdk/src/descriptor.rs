use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::Mode;

/// Fully qualified identifier of a declarable mode unit, such as
/// `team_alpha::auto::RedLeft`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ModeId(String);

impl ModeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final path segment.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit("::").next().unwrap_or(&self.0)
    }

    /// Namespace prefix covering this unit and its siblings: the id with
    /// its final segment stripped, or the whole id when there is no
    /// separator.
    pub fn enclosing_prefix(&self) -> &str {
        match self.0.rfind("::") {
            Some(index) => &self.0[..index],
            None => &self.0,
        }
    }
}

impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ModeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Declared metadata for one mode category. Empty strings mean the author
/// left the field unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModeTag {
    pub name: String,
    pub pair_key: String,
}

impl ModeTag {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pair_key: String::new(),
        }
    }

    pub fn paired(name: impl Into<String>, pair_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pair_key: pair_key.into(),
        }
    }
}

/// Constructor for a runnable mode instance.
pub type ModeFactory = fn() -> Box<dyn Mode>;

#[derive(Debug, Error)]
pub enum ModeError {
    #[error("mode {0} was declared without a constructor and cannot be instantiated")]
    NotConstructible(ModeId),
}

/// A declared operating mode: identifier, category tags, disabled flag and
/// an optional constructor.
#[derive(Debug, Clone, Serialize)]
pub struct ModeDescriptor {
    pub id: ModeId,
    pub interactive: Option<ModeTag>,
    pub autonomous: Option<ModeTag>,
    pub disabled: bool,
    #[serde(skip)]
    factory: Option<ModeFactory>,
}

impl ModeDescriptor {
    /// Declare a mode without a constructor. It can be enumerated and
    /// registered but never instantiated.
    pub fn new(id: impl Into<ModeId>) -> Self {
        Self {
            id: id.into(),
            interactive: None,
            autonomous: None,
            disabled: false,
            factory: None,
        }
    }

    pub fn with_factory(id: impl Into<ModeId>, factory: ModeFactory) -> Self {
        Self {
            factory: Some(factory),
            ..Self::new(id)
        }
    }

    pub fn with_interactive(mut self, tag: ModeTag) -> Self {
        self.interactive = Some(tag);
        self
    }

    pub fn with_autonomous(mut self, tag: ModeTag) -> Self {
        self.autonomous = Some(tag);
        self
    }

    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Name used when no tag declares one.
    pub fn default_name(&self) -> &str {
        self.id.simple_name()
    }

    pub fn is_constructible(&self) -> bool {
        self.factory.is_some()
    }

    /// Build a runnable instance. Constructibility is checked here so a
    /// missing constructor surfaces as a descriptive error instead of a
    /// silent failure at selection time.
    pub fn instantiate(&self) -> Result<Box<dyn Mode>, ModeError> {
        match self.factory {
            Some(factory) => Ok(factory()),
            None => Err(ModeError::NotConstructible(self.id.clone())),
        }
    }
}
