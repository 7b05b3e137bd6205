//! ABI constants shared by the guest module and host-side tooling.

/// Calling-convention version the guest targets (ABI.md §2.2).
///
/// The value is baked into the name of the `interface_version_8` marker
/// export; hosts discover it by inspecting the export table, never by
/// calling the function.
pub const INTERFACE_VERSION: u32 = 8;

/// Size of a wasm linear memory page.
pub const WASM_PAGE_SIZE: usize = 65_536;

/// Size of the guest heap region in bytes (ABI.md §3).
///
/// One wasm page. Every pointer returned by `allocate` lands inside this
/// region; the region's link-time address is the pointer base.
pub const HEAP_SIZE: usize = WASM_PAGE_SIZE;
