/// Rounds `$value` up to the next multiple of the machine word size.
///
/// Backing blocks are requested from the allocator in whole words, so a
/// block for `n` records may be slightly larger than `n * size_of::<Record>()`.
///
/// # Examples
///
/// ```rust
/// use addressbook::align;
///
/// match core::mem::size_of::<usize>() {
///     8 => assert_eq!(align!(13), 16), // 64 bit machine.
///     4 => assert_eq!(align!(11), 12), // 32 bit machine.
///     _ => {},
/// };
/// ```
#[macro_export]
macro_rules! align {
  ($value:expr) => {
    ($value + ::core::mem::size_of::<usize>() - 1) & !(::core::mem::size_of::<usize>() - 1)
  };
}
