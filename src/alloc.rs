use std::alloc::Layout;

use libc::{c_void, free, malloc};

use crate::align;

/// Source of raw backing blocks for a [`RecordStore`](crate::RecordStore).
///
/// # Safety
///
/// `allocate` must return either null or a pointer to at least
/// `layout.size()` writable bytes aligned to `layout.align()`, valid until it
/// is handed back to `deallocate` together with the same layout.
pub unsafe trait BlockAllocator {
  /// Returns null when the request cannot be satisfied.
  fn allocate(
    &self,
    layout: Layout,
  ) -> *mut u8;

  /// # Safety
  ///
  /// `address` must come from `allocate` on this allocator with `layout`,
  /// and must not be used again afterwards.
  unsafe fn deallocate(
    &self,
    address: *mut u8,
    layout: Layout,
  );
}

/// `malloc(3)` / `free(3)` from the C library.
#[derive(Debug, Default, Clone, Copy)]
pub struct Malloc;

impl Malloc {
  /// `malloc` guarantees alignment for any fundamental type.
  pub const MAX_ALIGN: usize = 2 * std::mem::size_of::<usize>();
}

unsafe impl BlockAllocator for Malloc {
  fn allocate(
    &self,
    layout: Layout,
  ) -> *mut u8 {
    if layout.align() > Self::MAX_ALIGN {
      return std::ptr::null_mut();
    }

    let size: usize = align!(layout.size());

    unsafe { malloc(size) as *mut u8 }
  }

  unsafe fn deallocate(
    &self,
    address: *mut u8,
    _layout: Layout,
  ) {
    unsafe { free(address as *mut c_void) }
  }
}

#[cfg(test)]
pub(crate) mod tracking {
  use std::{alloc::Layout, cell::RefCell, collections::HashMap, rc::Rc};

  use super::{BlockAllocator, Malloc};

  #[derive(Debug, Default)]
  pub struct Ledger {
    pub attempts: usize,
    pub allocations: usize,
    pub releases: usize,
    pub live: HashMap<usize, Layout>,
    pub sizes: Vec<usize>,
    /// Allocation number (0-based) that should fail, if any.
    pub fail_at: Option<usize>,
  }

  /// Wraps [`Malloc`] and records every block it hands out and takes back.
  #[derive(Debug, Default, Clone)]
  pub struct TrackingAllocator {
    pub ledger: Rc<RefCell<Ledger>>,
  }

  impl TrackingAllocator {
    pub fn failing_at(attempt: usize) -> Self {
      let allocator = Self::default();
      allocator.ledger.borrow_mut().fail_at = Some(attempt);
      allocator
    }

    pub fn allocations(&self) -> usize {
      self.ledger.borrow().allocations
    }

    pub fn releases(&self) -> usize {
      self.ledger.borrow().releases
    }

    pub fn live(&self) -> usize {
      self.ledger.borrow().live.len()
    }
  }

  unsafe impl BlockAllocator for TrackingAllocator {
    fn allocate(
      &self,
      layout: Layout,
    ) -> *mut u8 {
      let mut ledger = self.ledger.borrow_mut();
      let attempt = ledger.attempts;
      ledger.attempts += 1;

      if ledger.fail_at == Some(attempt) {
        return std::ptr::null_mut();
      }

      let address = Malloc.allocate(layout);
      if !address.is_null() {
        ledger.allocations += 1;
        ledger.sizes.push(layout.size());
        ledger.live.insert(address as usize, layout);
      }
      address
    }

    unsafe fn deallocate(
      &self,
      address: *mut u8,
      layout: Layout,
    ) {
      let mut ledger = self.ledger.borrow_mut();
      let known = ledger.live.remove(&(address as usize));

      assert_eq!(known, Some(layout), "block released twice or never allocated");
      ledger.releases += 1;

      unsafe { Malloc.deallocate(address, layout) }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_malloc_round_trip() {
    let layout = Layout::array::<u64>(4).unwrap();

    unsafe {
      let address = Malloc.allocate(layout) as *mut u64;
      assert!(!address.is_null());
      assert_eq!(address as usize % layout.align(), 0);

      for i in 0..4 {
        address.add(i).write(i as u64 * 3);
      }
      for i in 0..4 {
        assert_eq!(*address.add(i), i as u64 * 3);
      }

      Malloc.deallocate(address as *mut u8, layout);
    }
  }

  #[test]
  fn test_malloc_refuses_over_aligned_layouts() {
    let layout = Layout::from_size_align(64, 4096).unwrap();

    assert!(Malloc.allocate(layout).is_null());
  }
}
