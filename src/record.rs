use crate::{error::Result, field::Field};

/// One address book entry.
///
/// A `Record` is plain data: assigning or appending it copies both fields, so
/// two records never share storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Record {
  pub name: Field,
  pub address: Field,
}

impl Record {
  pub fn new(
    name: &str,
    address: &str,
  ) -> Result<Self> {
    Ok(Self {
      name: Field::new("name", name)?,
      address: Field::new("address", address)?,
    })
  }
}
