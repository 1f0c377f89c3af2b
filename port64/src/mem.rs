//! The unsafe boundary: every raw-address access in the extension goes
//! through this module.
//!
//! Nothing here validates addresses. The host ABI's contract is that pointer
//! values reaching these functions were produced by, or checked against, the
//! host's own APIs; a bad address is a native-level fault, not a reported
//! error. All accesses are unaligned-tolerant, since scripts may aim at any
//! byte of an entity.

use core::ptr;

use thiserror::Error;

use port64_abi::Cell;

/// Width selector for typed load/store. The wire values are fixed by the
/// host ABI and appear as plain integers in scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum NumberType {
    Int8 = 0,
    Int16 = 1,
    Int32 = 2,
    Int64 = 3,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemError {
    #[error("invalid NumberType {0}")]
    InvalidNumberType(Cell),
}

impl TryFrom<Cell> for NumberType {
    type Error = MemError;

    fn try_from(tag: Cell) -> Result<Self, MemError> {
        match tag {
            0 => Ok(NumberType::Int8),
            1 => Ok(NumberType::Int16),
            2 => Ok(NumberType::Int32),
            3 => Ok(NumberType::Int64),
            other => Err(MemError::InvalidNumberType(other)),
        }
    }
}

impl NumberType {
    #[inline]
    pub fn width(self) -> usize {
        match self {
            NumberType::Int8 => 1,
            NumberType::Int16 => 2,
            NumberType::Int32 => 4,
            NumberType::Int64 => 8,
        }
    }
}

/// Read a `ty`-width signed integer at `addr`, sign-extended into a
/// pointer-width value. On 32-bit builds an `Int64` read truncates to the
/// low half, like a native narrowing assignment.
///
/// # Safety
/// `addr..addr + ty.width()` must be readable memory. The caller (ultimately
/// the script, vouched for by the host) is responsible for that.
pub unsafe fn load(addr: usize, ty: NumberType) -> usize {
    match ty {
        NumberType::Int8 => ptr::read_unaligned(addr as *const i8) as usize,
        NumberType::Int16 => ptr::read_unaligned(addr as *const i16) as usize,
        NumberType::Int32 => ptr::read_unaligned(addr as *const i32) as usize,
        NumberType::Int64 => ptr::read_unaligned(addr as *const i64) as usize,
    }
}

/// Copy exactly `ty.width()` bytes from the script buffer `input` to `addr`.
///
/// Reading from the buffer rather than a pre-widened value keeps the access
/// exact: an `Int8` store reads one byte of script memory, and an `Int64`
/// store moves all eight bytes even on a 32-bit build.
///
/// # Safety
/// `addr..addr + ty.width()` must be writable and the same span of `input`
/// readable.
pub unsafe fn store(addr: usize, ty: NumberType, input: *const Cell) {
    match ty {
        NumberType::Int8 => {
            ptr::write_unaligned(addr as *mut i8, ptr::read_unaligned(input as *const i8))
        }
        NumberType::Int16 => {
            ptr::write_unaligned(addr as *mut i16, ptr::read_unaligned(input as *const i16))
        }
        NumberType::Int32 => {
            ptr::write_unaligned(addr as *mut i32, ptr::read_unaligned(input as *const i32))
        }
        NumberType::Int64 => {
            ptr::write_unaligned(addr as *mut i64, ptr::read_unaligned(input as *const i64))
        }
    }
}

/// Read a pointer-width value from a script cell buffer (one cell on 32-bit
/// builds, two consecutive cells on 64-bit builds, little-endian).
///
/// # Safety
/// `cells` must point to at least [`port64_abi::PTR_CELLS`] readable cells.
#[inline]
pub unsafe fn read_ptr(cells: *const Cell) -> usize {
    ptr::read_unaligned(cells as *const usize)
}

/// Write a pointer-width value into a script cell buffer.
///
/// # Safety
/// `cells` must point to at least [`port64_abi::PTR_CELLS`] writable cells.
#[inline]
pub unsafe fn write_ptr(cells: *mut Cell, value: usize) {
    ptr::write_unaligned(cells as *mut usize, value)
}
