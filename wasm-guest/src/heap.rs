//! The guest heap region and the global arena over it (ABI.md §3, §4).
//!
//! A single 64 KiB byte array in the data segment backs every allocation
//! the host asks for. On wasm32 the array's address is its absolute offset
//! in linear memory, so `base() + arena offset` is exactly the pointer the
//! ABI hands to the host.

use core::cell::UnsafeCell;

use phoenix_primitives::{AllocError, Arena, HEAP_SIZE};

struct Heap {
    bytes: UnsafeCell<[u8; HEAP_SIZE]>,
    arena: UnsafeCell<Arena>,
}

// The host invokes exports one at a time on a single thread (ABI.md §6),
// so no call ever observes the arena mid-mutation.
unsafe impl Sync for Heap {}

static HEAP: Heap = Heap {
    bytes: UnsafeCell::new([0; HEAP_SIZE]),
    arena: UnsafeCell::new(Arena::new(HEAP_SIZE as u32)),
};

/// Address of the heap region's first byte.
pub fn base() -> usize {
    HEAP.bytes.get() as usize
}

/// Reserve `size` bytes; returns the region's offset from [`base`].
pub fn alloc(size: u32) -> Result<u32, AllocError> {
    unsafe { (*HEAP.arena.get()).alloc(size) }
}

/// Release the live region starting at `offset` from [`base`].
pub fn release(offset: u32) -> Result<(), AllocError> {
    unsafe { (*HEAP.arena.get()).free(offset).map(|_| ()) }
}

/// Number of regions currently live in the arena.
#[cfg(test)]
pub fn live_regions() -> usize {
    unsafe { (*HEAP.arena.get()).live() }
}
