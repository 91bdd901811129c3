use crate::{ModeDescriptor, ModeFactory};

/// Telemetry sink a running mode writes status lines into. The host drains
/// and renders the lines between updates.
#[derive(Debug, Default)]
pub struct Telemetry {
    lines: Vec<(String, String)>,
}

impl Telemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, caption: impl Into<String>, value: impl Into<String>) {
        self.lines.push((caption.into(), value.into()));
    }

    pub fn lines(&self) -> &[(String, String)] {
        &self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// A selectable runtime behavior. Implementations are declared through
/// [`ModeDescriptor`] and instantiated by the host once selected.
pub trait Mode: Send {
    /// Called once when the host activates the mode.
    fn start(&mut self, _telemetry: &mut Telemetry) {}

    /// Called repeatedly while the mode is active.
    fn update(&mut self, telemetry: &mut Telemetry);
}

const OVER_CAPACITY_MESSAGE: &str =
    "Too many operating modes: the combined name table exceeds the registrar budget. \
     Rename or shorten the declared mode names.";

/// Built-in fallback registered in place of the real mode set when the
/// combined name table would exceed the registrar's byte budget. It only
/// repeats the failure message.
#[derive(Debug, Default)]
pub struct OverCapacityMode;

impl OverCapacityMode {
    pub fn descriptor() -> ModeDescriptor {
        let factory: ModeFactory = || Box::new(OverCapacityMode);
        ModeDescriptor::with_factory("opdeck::modes::OverCapacityMode", factory)
    }
}

impl Mode for OverCapacityMode {
    fn start(&mut self, telemetry: &mut Telemetry) {
        telemetry.add("", OVER_CAPACITY_MESSAGE);
    }

    fn update(&mut self, telemetry: &mut Telemetry) {
        telemetry.add("", OVER_CAPACITY_MESSAGE);
    }
}
