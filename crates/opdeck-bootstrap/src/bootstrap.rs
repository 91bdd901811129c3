use std::any::Any;

use opdeck_discovery::{discover_and_register, DiscoveryConfig, DiscoveryReport, ModeRegistrar};
use opdeck_mode_sdk::ModeRegistry;
use thiserror::Error;

use crate::bindings::{Bindings, BindingsError};

/// A loosely typed bootstrap argument. String elements act as the key for
/// whatever element follows them.
pub type BindingArg = Box<dyn Any + Send + Sync>;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("expected a string key after {0:?} in the binding sequence")]
    InvalidBindingSequence(String),
    #[error(transparent)]
    Bindings(#[from] BindingsError),
}

#[derive(Debug, Clone, Default)]
pub struct BootstrapOptions {
    /// Fail hard on a malformed binding sequence instead of logging and
    /// dropping the offending element.
    pub strict: bool,
    pub discovery: DiscoveryConfig,
}

/// Store the supplied bindings, then run one discovery pass and register
/// the outcome with the host registrar. The registrar handle is the only
/// thing the engine needs from the host at this point.
pub fn configure(
    options: BootstrapOptions,
    registry: &ModeRegistry,
    registrar: &mut dyn ModeRegistrar,
    args: Vec<BindingArg>,
) -> Result<(Bindings, DiscoveryReport), BootstrapError> {
    let bindings = bind_arguments(options.strict, args)?;
    let report = discover_and_register(options.discovery, registry, registrar);
    Ok((bindings, report))
}

fn arg_as_string(arg: &BindingArg) -> Option<String> {
    if let Some(value) = arg.downcast_ref::<String>() {
        return Some(value.clone());
    }
    arg.downcast_ref::<&'static str>().map(|value| value.to_string())
}

/// Walk the flat alternating sequence. A string element becomes the
/// pending key; any element directly following a string is stored under
/// that key. A value with no pending key is malformed: an error in strict
/// mode, a logged warning otherwise.
fn bind_arguments(strict: bool, args: Vec<BindingArg>) -> Result<Bindings, BootstrapError> {
    let mut bindings = Bindings::new();
    let mut last_was_key = false;
    let mut last_key = String::new();
    for arg in args {
        let as_string = arg_as_string(&arg);
        if !last_was_key && as_string.is_none() {
            if strict {
                return Err(BootstrapError::InvalidBindingSequence(last_key));
            }
            tracing::warn!("binding value after {last_key:?} has no string key; dropping it");
        }
        let is_string = as_string.is_some();
        if last_was_key {
            bindings.insert(last_key.clone(), arg)?;
        } else if let Some(key) = as_string {
            last_key = key;
        }
        last_was_key = is_string;
    }
    Ok(bindings)
}
