//! Region allocator backing operator descriptors.
//!
//! A `Zone` is owned by the compilation unit. Builders borrow it and hand out
//! references whose lifetime is tied to the zone; nothing is freed until the
//! zone itself is dropped.

use bumpalo::Bump;

#[derive(Debug, Default)]
pub struct Zone {
    bump: Bump,
}

impl Zone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `value` into the zone and return a shared reference to it.
    ///
    /// Restricted to `Copy` payloads: bump allocation never runs destructors.
    pub fn alloc<T: Copy>(&self, value: T) -> &T {
        self.bump.alloc(value)
    }

    /// Bytes handed out so far, across all chunks.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}
