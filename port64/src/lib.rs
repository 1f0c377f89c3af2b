//! port64
//!
//! Natives that let scripts work with full native-pointer-width values even
//! though the host VM only has 32-bit cells: pseudo-address translation,
//! pointer arithmetic, typed memory load/store, and entity-handle-to-address
//! resolution.
//!
//! All raw-address dereferencing is confined to [`mem`]; the natives in
//! [`natives`] are marshaling shims around it and the [`port64_abi::Host`]
//! services. The host sees one registration entry point,
//! [`Port64Extension::on_all_loaded`].

pub mod extension;
pub mod mem;
pub mod natives;

pub use extension::{Port64Extension, EXTENSION, LIBRARY_NAME};
pub use natives::NATIVES;
