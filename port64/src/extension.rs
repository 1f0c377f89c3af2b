use port64_abi::NativeRegistrar;

use crate::natives::NATIVES;

/// Library name scripts require to pull the natives in.
pub const LIBRARY_NAME: &str = "port64";

/// The extension object. It carries no state; the host just needs exactly
/// one registration per load, performed by [`Port64Extension::on_all_loaded`].
#[derive(Debug, Default)]
pub struct Port64Extension;

/// The process-wide extension instance handed to the host's loader.
pub static EXTENSION: Port64Extension = Port64Extension;

impl Port64Extension {
    /// Called by the host once all of its own interfaces are up: announce
    /// the library name and export the native table.
    pub fn on_all_loaded(&self, sys: &mut dyn NativeRegistrar) {
        sys.register_library(LIBRARY_NAME);
        sys.add_natives(NATIVES);
        log::info!(
            "registered library {:?} ({} natives)",
            LIBRARY_NAME,
            NATIVES.len()
        );
    }
}
