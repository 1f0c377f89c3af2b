//! Typed memory load/store at script-supplied addresses.
//!
//! The width tag is the single validated input in the extension: an
//! unrecognized tag is reported to the host's scripting context and the
//! native returns 1 without touching memory. Everything else trusts the
//! caller.

use port64_abi::{Cell, Host, NativeResult};

use super::arg;
use crate::mem::{self, NumberType};

fn effective_address(base: usize, offset: Cell) -> usize {
    base.wrapping_add_signed(offset as isize)
}

/// `Port64_LoadFromAddress(addr, offset, type, outBuffer)` - read a
/// `type`-width integer from `addr + offset` into `outBuffer`,
/// sign-extended to pointer width.
pub fn load_from_address(host: &mut dyn Host, params: &[Cell]) -> NativeResult {
    let addr_buf = host.local_to_phys(arg(params, 1)?)?;
    let offset = arg(params, 2)?;
    let tag = arg(params, 3)?;
    let out = host.local_to_phys(arg(params, 4)?)?;

    let ty = match NumberType::try_from(tag) {
        Ok(ty) => ty,
        Err(err) => {
            host.report_error(&err.to_string());
            return Ok(1);
        }
    };

    unsafe {
        let addr = effective_address(mem::read_ptr(addr_buf), offset);
        let value = mem::load(addr, ty);
        mem::write_ptr(out, value);
    }
    Ok(0)
}

/// `Port64_StoreToAddress(addr, offset, type, inBuffer)` - write the
/// `type`-width integer held in `inBuffer` to `addr + offset`.
pub fn store_to_address(host: &mut dyn Host, params: &[Cell]) -> NativeResult {
    let addr_buf = host.local_to_phys(arg(params, 1)?)?;
    let offset = arg(params, 2)?;
    let tag = arg(params, 3)?;
    let input = host.local_to_phys(arg(params, 4)?)?;

    let ty = match NumberType::try_from(tag) {
        Ok(ty) => ty,
        Err(err) => {
            host.report_error(&err.to_string());
            return Ok(1);
        }
    };

    unsafe {
        let addr = effective_address(mem::read_ptr(addr_buf), offset);
        mem::store(addr, ty, input);
    }
    Ok(0)
}
