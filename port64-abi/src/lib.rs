//! port64-abi
//!
//! The host-facing surface of the port64 extension: the script cell type,
//! the [`Host`] service trait the game-server scripting host implements, and
//! the native descriptor table handed to the host's registry at load time.
//!
//! This crate performs no memory access of its own; it only defines the seam.

pub mod cell;
pub mod host;
pub mod native;

pub use cell::{Cell, CELL_BYTES, PTR_CELLS};
pub use host::Host;
pub use native::{NativeFn, NativeInfo, NativeRegistrar, NativeResult};
