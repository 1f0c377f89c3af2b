use crate::cell::Cell;
use crate::host::Host;

/// What a native returns to the script: `Ok(0)` on success, a non-zero cell
/// for scriptable failures (currently only the load/store width check).
/// `Err` aborts the call at the marshaling level (short parameter slice,
/// failed local-to-phys translation) before any memory is touched.
pub type NativeResult = anyhow::Result<Cell>;

/// A native implementation.
///
/// `params[0]` is the script-supplied argument count; `params[1..]` are the
/// arguments in call order. By-ref arguments are script-local cell addresses
/// to be translated through [`Host::local_to_phys`].
pub type NativeFn = fn(&mut dyn Host, params: &[Cell]) -> NativeResult;

/// One row of the export table: script-visible name plus implementation.
#[derive(Clone, Copy)]
pub struct NativeInfo {
    pub name: &'static str,
    pub func: NativeFn,
}

impl std::fmt::Debug for NativeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeInfo").field("name", &self.name).finish()
    }
}

/// The host's registration surface, invoked once at load.
pub trait NativeRegistrar {
    /// Announce a library name scripts can require.
    fn register_library(&mut self, name: &str);

    /// Add a batch of natives to the host's export table.
    fn add_natives(&mut self, natives: &[NativeInfo]);
}
