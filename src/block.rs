use std::{alloc::Layout, ptr::NonNull, slice};

use tracing::debug;

use crate::{
  alloc::BlockAllocator,
  error::{Result, StoreError},
  record::Record,
};

/// One heap block with room for `capacity` records.
///
/// The block does not know how many of its slots hold records; the owning
/// store tracks that. It has no `Drop`: it must be handed back through
/// [`RecordBlock::release`], which consumes it.
pub struct RecordBlock {
  slots: NonNull<Record>,
  capacity: usize,
}

impl RecordBlock {
  pub fn layout(capacity: usize) -> Result<Layout> {
    Layout::array::<Record>(capacity).map_err(|_| StoreError::CapacityOverflow)
  }

  pub fn allocate<A: BlockAllocator>(
    allocator: &A,
    capacity: usize,
  ) -> Result<Self> {
    let layout = Self::layout(capacity)?;
    let address = allocator.allocate(layout) as *mut Record;

    let Some(slots) = NonNull::new(address) else {
      return Err(StoreError::AllocationFailed { capacity });
    };

    debug!(capacity, bytes = layout.size(), "allocated record block");

    Ok(Self { slots, capacity })
  }

  /// Allocates a block of `capacity` slots and copies the first `len`
  /// records of `old` into it, at the same indices.
  ///
  /// `old` is left untouched; on failure nothing has been allocated.
  ///
  /// # Safety
  ///
  /// The first `len` slots of `old` must be initialised, and
  /// `len <= capacity`.
  pub unsafe fn grow_from<A: BlockAllocator>(
    allocator: &A,
    old: &RecordBlock,
    len: usize,
    capacity: usize,
  ) -> Result<Self> {
    debug_assert!(len <= old.capacity && len <= capacity);

    let block = Self::allocate(allocator, capacity)?;

    unsafe {
      block
        .slots
        .as_ptr()
        .copy_from_nonoverlapping(old.slots.as_ptr(), len);
    }

    Ok(block)
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// # Safety
  ///
  /// `index < capacity`.
  pub unsafe fn write(
    &mut self,
    index: usize,
    record: Record,
  ) {
    debug_assert!(index < self.capacity);

    unsafe { self.slots.as_ptr().add(index).write(record) }
  }

  /// # Safety
  ///
  /// The first `len` slots must be initialised.
  pub unsafe fn initialised(
    &self,
    len: usize,
  ) -> &[Record] {
    debug_assert!(len <= self.capacity);

    unsafe { slice::from_raw_parts(self.slots.as_ptr(), len) }
  }

  /// Returns the block to `allocator`.
  ///
  /// # Safety
  ///
  /// `allocator` must be the allocator the block came from.
  pub unsafe fn release<A: BlockAllocator>(
    self,
    allocator: &A,
  ) {
    // allocate() already validated this layout
    let Ok(layout) = Self::layout(self.capacity) else {
      return;
    };

    debug!(capacity = self.capacity, "releasing record block");

    unsafe { allocator.deallocate(self.slots.as_ptr() as *mut u8, layout) }
  }
}
