//! The script-callable natives, grouped by concern, plus the export table
//! handed to the host registry.
//!
//! Parameter convention: `params[0]` is the argument count supplied by the
//! script VM, `params[1..]` are the arguments in call order. By-ref
//! arguments are script-local cell addresses translated through
//! [`Host::local_to_phys`](port64_abi::Host::local_to_phys).

use anyhow::{bail, Result};

use port64_abi::{Cell, NativeInfo};

pub mod addr;
pub mod arith;
pub mod memory;

/// Fetch parameter `i`, failing the call if the script supplied fewer.
pub(crate) fn arg(params: &[Cell], i: usize) -> Result<Cell> {
    match params.get(i) {
        Some(&cell) => Ok(cell),
        None => bail!(
            "missing native parameter {} (argc={})",
            i,
            params.first().copied().unwrap_or(0)
        ),
    }
}

/// The export table, in the order the host lists the natives to scripts.
pub const NATIVES: &[NativeInfo] = &[
    NativeInfo {
        name: "Port64_PointerBytes",
        func: addr::pointer_bytes,
    },
    NativeInfo {
        name: "Port64_FromPseudoAddress",
        func: addr::from_pseudo_address,
    },
    NativeInfo {
        name: "Port64_ToPseudoAddress",
        func: addr::to_pseudo_address,
    },
    NativeInfo {
        name: "Port64_Add",
        func: arith::add,
    },
    NativeInfo {
        name: "Port64_Sub",
        func: arith::sub,
    },
    NativeInfo {
        name: "Port64_Mul",
        func: arith::mul,
    },
    NativeInfo {
        name: "Port64_Div",
        func: arith::div,
    },
    NativeInfo {
        name: "Port64_LoadFromAddress",
        func: memory::load_from_address,
    },
    NativeInfo {
        name: "Port64_StoreToAddress",
        func: memory::store_to_address,
    },
    NativeInfo {
        name: "Port64_GetEntityAddress",
        func: addr::get_entity_address,
    },
];
