//! Host-callable exports (ABI.md §2).
//!
//! Every function here is `#[no_mangle] pub extern "C"` with an i32-based
//! signature. None of them may panic — a panic in the guest traps the
//! host's call. Lifecycle exports return status codes (ABI.md §5);
//! `allocate` signals failure with the 0 sentinel; `deallocate` swallows
//! bad pointers because its signature returns void.

use phoenix_primitives::{GuestResult, StatusCode, HEAP_SIZE, INTERFACE_VERSION};

use crate::{contract, heap};

/// Collapse a lifecycle result to the i32 the host reads back.
fn status_of(result: GuestResult<()>) -> i32 {
    match result {
        Ok(()) => StatusCode::Ok.as_i32(),
        Err(e) => e.status().as_i32(),
    }
}

/// Translate a host-supplied pointer back to an offset from `base`.
///
/// Returns `None` for anything outside `[base, base + HEAP_SIZE)`,
/// including 0 and negative values.
fn ptr_to_offset(ptr: i32, base: usize) -> Option<u32> {
    let addr = usize::try_from(ptr).ok()?;
    let rel = addr.checked_sub(base)?;
    if rel < HEAP_SIZE {
        Some(rel as u32)
    } else {
        None
    }
}

/// Create the contract instance. Called once by the host.
#[no_mangle]
pub extern "C" fn instantiate() -> i32 {
    status_of(contract::instantiate())
}

/// Run a state-changing call.
#[no_mangle]
pub extern "C" fn execute() -> i32 {
    status_of(contract::execute())
}

/// Run a read-only call.
#[no_mangle]
pub extern "C" fn query() -> i32 {
    status_of(contract::query())
}

/// Reserve `size` bytes of guest memory for the host to write into.
///
/// Returns a pointer into linear memory, or 0 if the request cannot be
/// satisfied (ABI.md §4). The heap base of a linked module is never 0,
/// so the sentinel is unambiguous.
#[no_mangle]
pub extern "C" fn allocate(size: i32) -> i32 {
    if size < 0 {
        return 0;
    }
    match heap::alloc(size as u32) {
        Ok(offset) => (heap::base() + offset as usize) as i32,
        Err(_) => 0,
    }
}

/// Release a pointer previously returned by [`allocate`].
///
/// Must never trap (ABI.md §4): pointers that are 0, out of range, not
/// the start of a live region, or already freed are ignored.
#[no_mangle]
pub extern "C" fn deallocate(ptr: i32) {
    let Some(offset) = ptr_to_offset(ptr, heap::base()) else {
        return;
    };
    let _ = heap::release(offset);
}

/// Calling-convention marker (ABI.md §2.2). Present in the export table
/// so the host can discover the ABI version; never invoked.
#[no_mangle]
pub extern "C" fn interface_version_8() {}

// The marker export's numeric suffix and the shared constant must agree.
const _: () = assert!(INTERFACE_VERSION == 8);

#[cfg(test)]
mod tests {
    use super::*;
    use phoenix_primitives::ALIGN;

    #[test]
    fn test_lifecycle_exports_return_ok() {
        assert_eq!(instantiate(), 0);
        assert_eq!(execute(), 0);
        assert_eq!(query(), 0);
    }

    #[test]
    fn test_lifecycle_exports_are_order_independent() {
        // No cross-call state: any ordering succeeds.
        assert_eq!(query(), 0);
        assert_eq!(execute(), 0);
        assert_eq!(instantiate(), 0);
        assert_eq!(execute(), 0);
    }

    #[test]
    fn test_allocate_rejects_negative_size() {
        assert_eq!(allocate(-1), 0);
        assert_eq!(allocate(i32::MIN), 0);
    }

    #[test]
    fn test_deallocate_out_of_heap_pointers_is_noop() {
        // 0 is the allocation-failure sentinel and below any heap base.
        deallocate(0);
        deallocate(-1);
    }

    #[test]
    fn test_ptr_to_offset_translation() {
        // Synthetic base: on wasm32 the real base is the region's linear
        // memory offset, but the arithmetic is the same.
        let base = 0x1000usize;
        assert_eq!(ptr_to_offset(0x1000, base), Some(0));
        assert_eq!(ptr_to_offset(0x1008, base), Some(8));
        assert_eq!(
            ptr_to_offset((base + HEAP_SIZE - 1) as i32, base),
            Some((HEAP_SIZE - 1) as u32)
        );

        // One past the region, below the region, null, negative.
        assert_eq!(ptr_to_offset((base + HEAP_SIZE) as i32, base), None);
        assert_eq!(ptr_to_offset(0x0fff, base), None);
        assert_eq!(ptr_to_offset(0, base), None);
        assert_eq!(ptr_to_offset(-1, base), None);
    }

    // The arena behind the heap is process-global, so every assertion that
    // mutates it lives in this one test; the harness may run other tests
    // in parallel but nothing else touches the heap.
    #[test]
    fn test_heap_allocate_execute_deallocate_scenario() {
        let a = heap::alloc(100).unwrap();
        let b = heap::alloc(32).unwrap();
        assert_ne!(a, b);
        assert!((a as usize) < phoenix_primitives::HEAP_SIZE);
        assert_eq!(heap::live_regions(), 2);

        // A lifecycle call between allocations touches no heap state.
        assert_eq!(execute(), 0);
        assert_eq!(heap::live_regions(), 2);

        heap::release(a).unwrap();
        assert!(heap::release(a).is_err());

        // The freed gap is reused first-fit.
        assert_eq!(heap::alloc(100).unwrap(), a);

        // Interior offsets are not region starts.
        assert!(heap::release(b + ALIGN).is_err());
        assert_eq!(heap::live_regions(), 2);

        heap::release(b).unwrap();
        heap::release(a).unwrap();
        assert_eq!(heap::live_regions(), 0);
    }
}
