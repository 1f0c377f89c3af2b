//! Pointer-width arithmetic over script cell buffers.
//!
//! All four natives take `(a, b, outC)` by reference and write `a OP b` into
//! `outC`. Add/sub/mul wrap, matching two's-complement pointer math.
//! Division truncates; a zero divisor is not checked, like native integer
//! division.

use port64_abi::{Cell, Host, NativeResult};

use super::arg;
use crate::mem;

fn binop(host: &mut dyn Host, params: &[Cell], op: fn(usize, usize) -> usize) -> NativeResult {
    let a = host.local_to_phys(arg(params, 1)?)?;
    let b = host.local_to_phys(arg(params, 2)?)?;
    let out = host.local_to_phys(arg(params, 3)?)?;

    unsafe {
        let result = op(mem::read_ptr(a), mem::read_ptr(b));
        mem::write_ptr(out, result);
    }
    Ok(0)
}

/// `Port64_Add(a, b, outC)`
pub fn add(host: &mut dyn Host, params: &[Cell]) -> NativeResult {
    binop(host, params, |a, b| a.wrapping_add(b))
}

/// `Port64_Sub(a, b, outC)`
pub fn sub(host: &mut dyn Host, params: &[Cell]) -> NativeResult {
    binop(host, params, |a, b| a.wrapping_sub(b))
}

/// `Port64_Mul(a, b, outC)`
pub fn mul(host: &mut dyn Host, params: &[Cell]) -> NativeResult {
    binop(host, params, |a, b| a.wrapping_mul(b))
}

/// `Port64_Div(a, b, outC)`
pub fn div(host: &mut dyn Host, params: &[Cell]) -> NativeResult {
    binop(host, params, |a, b| a / b)
}
