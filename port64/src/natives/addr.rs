//! Address translation, entity resolution and the pointer-size query.

use cfg_if::cfg_if;

use port64_abi::{Cell, Host, NativeResult};

use super::arg;
use crate::mem;

// Pointer-width strategy: on 32-bit builds a native pointer fits in one cell
// and the pseudo-address is its bit pattern; on wider builds the host codec
// owns the encoding.
cfg_if! {
    if #[cfg(target_pointer_width = "32")] {
        #[inline]
        fn decode_pseudo(_host: &mut dyn Host, pseudo: Cell) -> usize {
            pseudo as u32 as usize
        }

        #[inline]
        fn encode_pseudo(_host: &mut dyn Host, ptr: usize) -> Cell {
            ptr as u32 as Cell
        }
    } else {
        #[inline]
        fn decode_pseudo(host: &mut dyn Host, pseudo: Cell) -> usize {
            host.from_pseudo_address(pseudo)
        }

        #[inline]
        fn encode_pseudo(host: &mut dyn Host, ptr: usize) -> Cell {
            host.to_pseudo_address(ptr)
        }
    }
}

/// `Port64_PointerBytes()` - pointer size of this build, in bytes.
pub fn pointer_bytes(_host: &mut dyn Host, _params: &[Cell]) -> NativeResult {
    Ok(core::mem::size_of::<usize>() as Cell)
}

/// `Port64_FromPseudoAddress(pseudoAddr, outBuffer)` - decode a pseudo-address
/// into a full native pointer value.
pub fn from_pseudo_address(host: &mut dyn Host, params: &[Cell]) -> NativeResult {
    let pseudo = arg(params, 1)?;
    let out = host.local_to_phys(arg(params, 2)?)?;

    let ptr = decode_pseudo(host, pseudo);
    unsafe { mem::write_ptr(out, ptr) };
    Ok(0)
}

/// `Port64_ToPseudoAddress(ptrBuffer)` - encode the native pointer in
/// `ptrBuffer` as a pseudo-address and return it.
pub fn to_pseudo_address(host: &mut dyn Host, params: &[Cell]) -> NativeResult {
    let buf = host.local_to_phys(arg(params, 1)?)?;
    let ptr = unsafe { mem::read_ptr(buf) };

    Ok(encode_pseudo(host, ptr))
}

/// `Port64_GetEntityAddress(entityRef, outBuffer)` - resolve an entity handle
/// to the entity's native address, writing 0 when the handle does not
/// resolve. Both outcomes are success; scripts check for null themselves.
pub fn get_entity_address(host: &mut dyn Host, params: &[Cell]) -> NativeResult {
    let entity_ref = arg(params, 1)?;
    let out = host.local_to_phys(arg(params, 2)?)?;

    let addr = match host.entity_address(entity_ref) {
        Some(addr) => addr,
        None => {
            log::trace!("entity ref {entity_ref} did not resolve");
            0
        }
    };

    unsafe { mem::write_ptr(out, addr) };
    Ok(0)
}
