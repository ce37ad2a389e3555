//! # addressbook - A Hand-Grown Record Array
//!
//! This crate provides [`RecordStore`], a growable array of fixed-shape
//! address book [`Record`]s whose backing memory is managed by hand with
//! `malloc(3)` / `free(3)`.
//!
//! ## Overview
//!
//! A store starts with no memory at all. Appending into a full store
//! allocates a block twice as large, copies the existing records across and
//! frees the old block:
//!
//! ```text
//!   append(Alice)     append(Bob)       append(Carol)
//!
//!   ┌───────┬─────┐   ┌───────┬─────┐   ┌───────┬─────┬───────┬─────┐
//!   │ Alice │     │   │ Alice │ Bob │   │ Alice │ Bob │ Carol │     │
//!   └───────┴─────┘   └───────┴─────┘   └───────┴─────┴───────┴─────┘
//!   len 1, cap 2      len 2, cap 2      len 3, cap 4  (old block freed)
//! ```
//!
//! Capacities therefore run `0 → 2 → 4 → 8 → 16 → …`.
//!
//! ## Crate Structure
//!
//! ```text
//!   addressbook
//!   ├── align      - Word alignment macro (align!)
//!   ├── alloc      - BlockAllocator trait and the libc-backed Malloc
//!   ├── block      - RecordBlock, one raw backing block (internal)
//!   ├── error      - StoreError
//!   ├── field      - Field, bounded inline text
//!   ├── record     - Record
//!   ├── store      - RecordStore
//!   └── demo       - Demonstration book and row formatting
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use addressbook::{Record, RecordStore};
//!
//! let mut book = RecordStore::new();
//! book.append(Record::new("Alice", "123 Apple Ave")?)?;
//! book.try_append("Bob", "123 Berry Boardwalk")?;
//!
//! assert_eq!(book.len(), 2);
//! assert_eq!(book.capacity(), 2);
//! assert_eq!(book[1].name, "Bob");
//! # Ok::<(), addressbook::StoreError>(())
//! ```
//!
//! ## Limits
//!
//! - **Bounded text**: names and addresses hold at most 19 bytes; longer
//!   text is rejected with [`StoreError::FieldTooLong`], never truncated.
//! - **Append only**: records cannot be removed or replaced.
//! - **Single-threaded**: a store is neither `Send` nor `Sync`.
//! - **C heap**: the default allocator calls `malloc`/`free` through `libc`.

pub mod align;
mod alloc;
mod block;
pub mod demo;
mod error;
mod field;
mod record;
mod store;

pub use alloc::{BlockAllocator, Malloc};
pub use error::{Result, StoreError};
pub use field::{FIELD_CAPACITY, FIELD_MAX_LEN, Field};
pub use record::Record;
pub use store::{GROWTH_FACTOR, INITIAL_CAPACITY, RecordStore, next_capacity};
