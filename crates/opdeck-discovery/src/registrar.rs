use opdeck_mode_sdk::ModeDescriptor;

use crate::capacity::RegistrationEntry;
use crate::session::Diagnostic;

/// External registrar boundary: the host's single registration operation.
/// Ordering is fully determined before this point.
pub trait ModeRegistrar {
    fn register(&mut self, name: &str, descriptor: &ModeDescriptor);
}

/// Emit the validated entries in final order. A descriptor without a
/// constructor is still registered but reported, since instantiating it at
/// selection time will fail.
pub fn emit(entries: &[RegistrationEntry], registrar: &mut dyn ModeRegistrar) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for entry in entries {
        if !entry.descriptor.is_constructible() {
            tracing::warn!(
                "{} is registered as {:?} but has no constructor; selecting it will fail",
                entry.descriptor.id,
                entry.name
            );
            diagnostics.push(Diagnostic::NotConstructible {
                id: entry.descriptor.id.clone(),
            });
        }
        registrar.register(&entry.name, &entry.descriptor);
    }
    diagnostics
}
