//! `phoenix-primitives` — foundational types for the Phoenix contract guest.
//!
//! This crate provides the ABI constants, the status-code and error
//! taxonomy, and the offset-based heap arena shared by the WASM guest
//! module and any host-side tooling.
//!
//! Supports `#![no_std]` for WASM guest compatibility (use `default-features = false`).

#![cfg_attr(not(feature = "std"), no_std)]

pub mod types;
pub mod error;
pub mod arena;

// Re-export commonly used types at the crate root for convenience.
pub use types::{INTERFACE_VERSION, HEAP_SIZE, WASM_PAGE_SIZE};
pub use error::{StatusCode, AllocError, GuestError, GuestResult};
pub use arena::{Arena, ALIGN, MAX_REGIONS};
