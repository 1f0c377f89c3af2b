//! The script-visible storage unit.
//!
//! The host's scripting VM stores every value in fixed 32-bit cells. A native
//! pointer therefore spans one cell on 32-bit builds and two consecutive
//! cells on 64-bit builds; scripts reserve the space with [`PTR_CELLS`] (or
//! query `Port64_PointerBytes` at run time).

/// One script cell. Parameters, by-ref buffers and return values are all
/// cells; wider values are laid out across consecutive cells, little-endian.
pub type Cell = i32;

/// Size of one script cell in bytes.
pub const CELL_BYTES: usize = core::mem::size_of::<Cell>();

/// Number of cells a native pointer occupies on this build.
pub const PTR_CELLS: usize = core::mem::size_of::<usize>() / CELL_BYTES;
