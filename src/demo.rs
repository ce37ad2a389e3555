use crate::{error::Result, record::Record, store::RecordStore};

/// Builds the three-entry demonstration book.
///
/// Each record is built on the stack and copied into the store; the third
/// append grows the store from 2 to 4 slots. The store is returned by move,
/// so its block is never duplicated.
pub fn create_book() -> Result<RecordStore> {
  let mut book = RecordStore::new();

  let alice = Record::new("Alice", "123 Apple Ave")?;
  book.append(alice)?;

  let bob = Record::new("Bob", "123 Berry Boardwalk")?;
  book.append(bob)?;

  let carol = Record::new("Carol", "123 Cherry Crossing")?;
  book.append(carol)?;

  Ok(book)
}

pub fn format_row(
  index: usize,
  record: &Record,
) -> String {
  format!("{:>2}: {:>10} - {:>20}", index, record.name, record.address)
}

/// One formatted row per stored record, in order.
pub fn render(book: &RecordStore) -> Vec<String> {
  book
    .iter()
    .enumerate()
    .map(|(i, record)| format_row(i, record))
    .collect()
}
