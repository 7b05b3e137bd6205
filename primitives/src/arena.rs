//! Offset-based arena allocator for the guest heap region (ABI.md §4).
//!
//! The arena does pure bookkeeping: it hands out offsets into a region of
//! `capacity` bytes and never touches the bytes themselves. Live regions
//! are tracked in a fixed-capacity table sorted by offset, so allocation
//! is a first-fit scan over the gaps between neighbours and release is a
//! binary search for an exact start offset.
//!
//! There is no dynamic allocation anywhere in this module; `Arena::new`
//! is `const` so the guest can hold one in a `static`.

use crate::error::AllocError;

/// Allocation granule; every region's size is rounded up to a multiple of this.
pub const ALIGN: u32 = 8;

/// Maximum number of simultaneously live regions.
pub const MAX_REGIONS: usize = 128;

/// A live allocation: `len` bytes starting at `offset` from the heap base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Region {
    offset: u32,
    len: u32,
}

impl Region {
    const EMPTY: Region = Region { offset: 0, len: 0 };

    fn end(self) -> u32 {
        self.offset + self.len
    }
}

/// Bookkeeping for a `capacity`-byte heap region.
pub struct Arena {
    capacity: u32,
    /// Live regions, sorted by offset; only `[..count]` is meaningful.
    regions: [Region; MAX_REGIONS],
    count: usize,
}

impl Arena {
    /// Create an arena managing `capacity` bytes with no live regions.
    pub const fn new(capacity: u32) -> Self {
        Self {
            capacity,
            regions: [Region::EMPTY; MAX_REGIONS],
            count: 0,
        }
    }

    /// Reserve at least `size` bytes and return the region's start offset.
    ///
    /// The size is rounded up to the granule ([`ALIGN`]); `size == 0`
    /// reserves one granule. Placement is first-fit: the earliest gap
    /// between live regions (or the tail) that holds the rounded size.
    pub fn alloc(&mut self, size: u32) -> Result<u32, AllocError> {
        if self.count == MAX_REGIONS {
            return Err(AllocError::IndexFull { max: MAX_REGIONS });
        }
        let needed = align_up(size)?;

        // Scan the gaps between sorted live regions, then the tail.
        let mut cursor = 0u32;
        let mut placed = None;
        for i in 0..self.count {
            let r = self.regions[i];
            if r.offset - cursor >= needed {
                placed = Some((i, cursor));
                break;
            }
            cursor = r.end();
        }
        let (index, offset) = match placed {
            Some(p) => p,
            None if self.capacity - cursor >= needed => (self.count, cursor),
            None => {
                return Err(AllocError::OutOfMemory {
                    requested: size,
                    free: self.free_bytes(),
                })
            }
        };

        // Keep the table sorted: shift the suffix right and insert.
        self.regions.copy_within(index..self.count, index + 1);
        self.regions[index] = Region {
            offset,
            len: needed,
        };
        self.count += 1;
        Ok(offset)
    }

    /// Release the live region starting exactly at `offset`; returns its length.
    ///
    /// An offset that does not start a live region (including one already
    /// freed) yields `InvalidOffset`.
    pub fn free(&mut self, offset: u32) -> Result<u32, AllocError> {
        let index = self.regions[..self.count]
            .binary_search_by_key(&offset, |r| r.offset)
            .map_err(|_| AllocError::InvalidOffset { offset })?;
        let len = self.regions[index].len;
        self.regions.copy_within(index + 1..self.count, index);
        self.count -= 1;
        self.regions[self.count] = Region::EMPTY;
        Ok(len)
    }

    /// Number of live regions.
    pub fn live(&self) -> usize {
        self.count
    }

    /// Total bytes managed by this arena.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Bytes not covered by any live region.
    pub fn free_bytes(&self) -> u32 {
        let used: u32 = self.regions[..self.count].iter().map(|r| r.len).sum();
        self.capacity - used
    }

    /// Returns true if `offset` starts a live region.
    pub fn is_live(&self, offset: u32) -> bool {
        self.regions[..self.count]
            .binary_search_by_key(&offset, |r| r.offset)
            .is_ok()
    }

    /// Drop every live region.
    pub fn reset(&mut self) {
        self.regions = [Region::EMPTY; MAX_REGIONS];
        self.count = 0;
    }
}

/// Round `size` up to the granule; zero-sized requests take one granule.
fn align_up(size: u32) -> Result<u32, AllocError> {
    let size = size.max(1);
    size.checked_add(ALIGN - 1)
        .map(|s| s & !(ALIGN - 1))
        .ok_or(AllocError::SizeOverflow)
}
