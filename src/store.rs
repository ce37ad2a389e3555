use std::{fmt, ops::Index, slice};

use tracing::{debug, trace};

use crate::{
  alloc::{BlockAllocator, Malloc},
  block::RecordBlock,
  error::{Result, StoreError},
  record::Record,
};

/// Capacity of the first block a store allocates.
pub const INITIAL_CAPACITY: usize = 2;

/// Factor applied to the capacity every time a full store grows.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity after growing a full store of `capacity` slots.
///
/// ```text
///   0 ──► 2 ──► 4 ──► 8 ──► 16 ──► …
/// ```
pub fn next_capacity(capacity: usize) -> Result<usize> {
  if capacity == 0 {
    return Ok(INITIAL_CAPACITY);
  }

  capacity
    .checked_mul(GROWTH_FACTOR)
    .ok_or(StoreError::CapacityOverflow)
}

/// Growable, owning array of [`Record`]s.
///
/// ```text
///   RecordStore                      heap block (capacity = 4)
///   ┌──────────────┐                 ┌────────┬────────┬────────┬────────┐
///   │ len: 3       │                 │ Alice  │ Bob    │ Carol  │ (free) │
///   │ block ───────┼───────────────► │        │        │        │        │
///   │ allocator    │                 └────────┴────────┴────────┴────────┘
///   └──────────────┘                  0        1        2        3
/// ```
///
/// A store starts without a block. When an append finds it full, a block
/// twice the size is allocated, the existing records are copied across, and
/// the old block is released. The last block is released when the store is
/// dropped.
pub struct RecordStore<A: BlockAllocator = Malloc> {
  block: Option<RecordBlock>,
  len: usize,
  allocator: A,
}

impl RecordStore<Malloc> {
  pub fn new() -> Self {
    Self::new_in(Malloc)
  }
}

impl Default for RecordStore<Malloc> {
  fn default() -> Self {
    Self::new()
  }
}

impl<A: BlockAllocator> RecordStore<A> {
  /// Creates an empty store that takes its blocks from `allocator`.
  /// Nothing is allocated until the first append.
  pub fn new_in(allocator: A) -> Self {
    Self {
      block: None,
      len: 0,
      allocator,
    }
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn capacity(&self) -> usize {
    self.block.as_ref().map_or(0, RecordBlock::capacity)
  }

  pub fn allocator(&self) -> &A {
    &self.allocator
  }

  /// Copies `record` into the store, growing it first if it is full.
  ///
  /// Returns the index the record was stored at. If growing fails the store
  /// is left exactly as it was.
  pub fn append(
    &mut self,
    record: Record,
  ) -> Result<usize> {
    if self.len == self.capacity() {
      self.grow()?;
    }

    let index = self.len;
    let Some(block) = self.block.as_mut() else {
      return Err(StoreError::AllocationFailed {
        capacity: INITIAL_CAPACITY,
      });
    };

    // SAFETY: grow() guarantees len < capacity here.
    unsafe { block.write(index, record) };
    self.len += 1;

    trace!(index, name = %record.name, "appended record");

    Ok(index)
  }

  /// Builds a [`Record`] from `name` and `address` and appends it.
  ///
  /// Oversized fields are rejected before the store is touched.
  pub fn try_append(
    &mut self,
    name: &str,
    address: &str,
  ) -> Result<usize> {
    let record = Record::new(name, address)?;
    self.append(record)
  }

  fn grow(&mut self) -> Result<()> {
    let old_capacity = self.capacity();
    let new_capacity = next_capacity(old_capacity)?;

    let block = match &self.block {
      None => RecordBlock::allocate(&self.allocator, new_capacity)?,
      // SAFETY: the first `len` slots of the current block are initialised.
      Some(old) => unsafe { RecordBlock::grow_from(&self.allocator, old, self.len, new_capacity)? },
    };

    if let Some(old) = self.block.replace(block) {
      // SAFETY: `old` came from `self.allocator` and nothing points into it.
      unsafe { old.release(&self.allocator) };
    }

    debug!(old_capacity, new_capacity, len = self.len, "grew record store");

    Ok(())
  }

  /// The stored records, in insertion order.
  pub fn records(&self) -> &[Record] {
    match &self.block {
      // SAFETY: slots 0..len have all been written by append().
      Some(block) => unsafe { block.initialised(self.len) },
      None => &[],
    }
  }

  pub fn get(
    &self,
    index: usize,
  ) -> Option<&Record> {
    self.records().get(index)
  }

  pub fn iter(&self) -> slice::Iter<'_, Record> {
    self.records().iter()
  }
}

impl<A: BlockAllocator> Drop for RecordStore<A> {
  fn drop(&mut self) {
    if let Some(block) = self.block.take() {
      // SAFETY: the block came from `self.allocator`; the store is going away.
      unsafe { block.release(&self.allocator) };
    }
  }
}

impl<A: BlockAllocator> Index<usize> for RecordStore<A> {
  type Output = Record;

  fn index(
    &self,
    index: usize,
  ) -> &Record {
    &self.records()[index]
  }
}

impl<'a, A: BlockAllocator> IntoIterator for &'a RecordStore<A> {
  type Item = &'a Record;
  type IntoIter = slice::Iter<'a, Record>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<A: BlockAllocator> fmt::Debug for RecordStore<A> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_struct("RecordStore")
      .field("len", &self.len)
      .field("capacity", &self.capacity())
      .field("records", &self.records())
      .finish()
  }
}
