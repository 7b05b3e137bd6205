//! Lifecycle entry point seam (ABI.md §2.1).
//!
//! The exports in `exports.rs` route through these functions so that
//! domain logic, when it lands, reports failures as [`GuestError`] values
//! and never decides wire-level status codes itself. The contract carries
//! no business logic yet; every entry point validates nothing and
//! succeeds.

use phoenix_primitives::GuestResult;

/// Called once when a contract instance is created.
pub fn instantiate() -> GuestResult<()> {
    Ok(())
}

/// Called for each state-changing invocation.
pub fn execute() -> GuestResult<()> {
    Ok(())
}

/// Called for each read-only invocation.
pub fn query() -> GuestResult<()> {
    Ok(())
}
