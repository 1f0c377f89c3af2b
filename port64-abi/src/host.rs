use anyhow::Result;

use crate::cell::Cell;

/// The services a native needs from the scripting host.
///
/// Every native receives one `&mut dyn Host` for the duration of the call,
/// the way the host hands its plugin context to an extension. Implementations
/// wrap the real host process; tests provide a mock.
pub trait Host {
    /// Translate a script-local cell address into a physical pointer into
    /// script memory.
    ///
    /// The returned pointer is owned by the host and valid only until the
    /// current native call returns. Translation failure (address outside the
    /// script's data) is a marshaling error and aborts the native.
    fn local_to_phys(&mut self, local: Cell) -> Result<*mut Cell>;

    /// Report an error to the host's scripting context. The host decides how
    /// the failure is surfaced to the running script.
    fn report_error(&mut self, msg: &str);

    /// Decode a host pseudo-address into a native pointer value.
    ///
    /// Only consulted on 64-bit builds; on 32-bit builds the pseudo-address
    /// *is* the pointer bit pattern and the natives copy it directly. An
    /// invalid pseudo-address is passed through untouched; any fault is the
    /// host's responsibility.
    fn from_pseudo_address(&mut self, pseudo: Cell) -> usize;

    /// Encode a native pointer value into a host pseudo-address.
    ///
    /// Only consulted on 64-bit builds, like [`Host::from_pseudo_address`].
    fn to_pseudo_address(&mut self, addr: usize) -> Cell;

    /// Resolve an entity handle to the entity object's native address.
    ///
    /// Returns `None` when the handle is none, invalid or stale.
    fn entity_address(&mut self, entity_ref: Cell) -> Option<usize>;
}
