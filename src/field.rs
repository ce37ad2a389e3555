use std::{fmt, ops::Deref, str};

use crate::error::{Result, StoreError};

/// Size of one inline text buffer, terminator slot included.
pub const FIELD_CAPACITY: usize = 20;

/// Longest text a [`Field`] accepts, in UTF-8 bytes.
pub const FIELD_MAX_LEN: usize = FIELD_CAPACITY - 1;

/// Bounded text stored inline in a fixed-size buffer.
///
/// ```text
///   ┌───┬───┬───┬───┬───┬───┬─────────────────────────┬─────┐
///   │ A │ l │ i │ c │ e │ 0 │  0 0 0 0 0 0 0 0 0 0 …  │ len │
///   └───┴───┴───┴───┴───┴───┴─────────────────────────┴─────┘
///    ◄──────────────── FIELD_CAPACITY bytes ──────────►
/// ```
///
/// Text longer than [`FIELD_MAX_LEN`] bytes is rejected, so a `Field` can be
/// copied into a record slot without ever spilling past it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Field {
  bytes: [u8; FIELD_CAPACITY],
  len: u8,
}

impl Field {
  /// Copies `value` into a new field. `label` names the field in the error.
  pub fn new(
    label: &'static str,
    value: &str,
  ) -> Result<Self> {
    if value.len() > FIELD_MAX_LEN {
      return Err(StoreError::FieldTooLong {
        field: label,
        len: value.len(),
        max: FIELD_MAX_LEN,
      });
    }

    let mut bytes = [0u8; FIELD_CAPACITY];
    bytes[..value.len()].copy_from_slice(value.as_bytes());

    Ok(Self {
      bytes,
      len: value.len() as u8,
    })
  }

  pub fn as_str(&self) -> &str {
    // SAFETY: bytes[..len] was copied whole from a `&str`.
    unsafe { str::from_utf8_unchecked(&self.bytes[..self.len as usize]) }
  }

  pub fn len(&self) -> usize {
    self.len as usize
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }
}

impl Deref for Field {
  type Target = str;

  fn deref(&self) -> &str {
    self.as_str()
  }
}

impl fmt::Display for Field {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    // `pad` keeps width/alignment flags working for callers like `{:>10}`.
    f.pad(self.as_str())
  }
}

impl fmt::Debug for Field {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    fmt::Debug::fmt(self.as_str(), f)
  }
}

impl PartialEq<str> for Field {
  fn eq(
    &self,
    other: &str,
  ) -> bool {
    self.as_str() == other
  }
}

impl PartialEq<&str> for Field {
  fn eq(
    &self,
    other: &&str,
  ) -> bool {
    self.as_str() == *other
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_field_holds_text() {
    let field = Field::new("name", "Alice").unwrap();

    assert_eq!(field.as_str(), "Alice");
    assert_eq!(field.len(), 5);
    assert!(!field.is_empty());
    assert_eq!(field, "Alice");
  }

  #[test]
  fn test_field_accepts_max_len() {
    let text = "a".repeat(FIELD_MAX_LEN);
    let field = Field::new("address", &text).unwrap();

    assert_eq!(field.as_str(), text);
    // terminator slot stays zero
    assert_eq!(field.bytes[FIELD_MAX_LEN], 0);
  }

  #[test]
  fn test_field_rejects_oversized_text() {
    let text = "a".repeat(FIELD_CAPACITY);

    assert_eq!(
      Field::new("address", &text),
      Err(StoreError::FieldTooLong {
        field: "address",
        len: FIELD_CAPACITY,
        max: FIELD_MAX_LEN,
      })
    );
  }

  #[test]
  fn test_field_length_counts_bytes() {
    // 10 two-byte characters: 20 bytes
    let text = "é".repeat(10);

    assert!(matches!(
      Field::new("name", &text),
      Err(StoreError::FieldTooLong { len: 20, .. })
    ));
    assert_eq!(Field::new("name", &"é".repeat(9)).unwrap().len(), 18);
  }

  #[test]
  fn test_field_is_a_plain_copy() {
    let original = Field::new("name", "Bob").unwrap();
    let mut copy = original;
    assert_eq!(copy, original);

    copy.bytes[0] = b'R';

    assert_eq!(original, "Bob");
    assert_eq!(copy, "Rob");
  }

  #[test]
  fn test_display_honours_width() {
    let field = Field::new("name", "Bob").unwrap();

    assert_eq!(format!("{:>6}", field), "   Bob");
    assert_eq!(format!("{:?}", field), "\"Bob\"");
    assert_eq!(Field::default().as_str(), "");
  }
}
