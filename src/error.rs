use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
  #[error("field `{field}` exceeds maximum length: {len} bytes (max {max})")]
  FieldTooLong {
    field: &'static str,
    len: usize,
    max: usize,
  },
  #[error("allocation failed while growing to {capacity} records")]
  AllocationFailed { capacity: usize },
  #[error("capacity overflow")]
  CapacityOverflow,
}

pub type Result<T> = std::result::Result<T, StoreError>;
