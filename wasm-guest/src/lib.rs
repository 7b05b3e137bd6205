//! `phoenix-wasm-guest` — WASM cdylib for the Phoenix contract.
//!
//! This crate compiles to a `.wasm` artifact exposing the export table
//! required by ABI.md §2:
//!
//! - `instantiate`, `execute`, `query` — lifecycle entry points
//! - `allocate`, `deallocate` — guest-side buffer management
//! - `interface_version_8` — calling-convention marker, never invoked
//!
//! The `memory` and `__heap_base` exports are emitted by the wasm linker
//! for a cdylib target; the guest defines everything else. No host
//! functions are imported.
//!
//! **Determinism:** the guest does not use OS randomness, filesystem,
//! networking, or system time. The heap is a fixed region in the data
//! segment managed by `phoenix_primitives::Arena`; nothing here reaches
//! for a dynamic allocator.
//!
//! On `wasm32` the crate is `no_std` and supplies its own panic handler.
//! Host-architecture builds keep std so the unit tests can run natively.

#![cfg_attr(target_arch = "wasm32", no_std)]

// ── Modules ──

mod heap;
mod contract;
mod exports;

// Re-export the exported functions so the linker sees them.
// They are already #[no_mangle] pub extern "C" in exports.rs.
pub use exports::{allocate, deallocate, execute, instantiate, interface_version_8, query};

// A panic would trap the host call; unreachable keeps the artifact free of
// formatting machinery.
#[cfg(target_arch = "wasm32")]
#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    core::arch::wasm32::unreachable()
}
