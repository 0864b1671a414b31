//! Core traits for record storage
//!
//! The directory talks to its backing files only through [`RecordStore`], so
//! the JSON file store and in-memory test doubles can be used interchangeably.

use crate::types::BankError;

/// Storage for a whole collection of records
///
/// Collections are always read and written in full; there are no partial or
/// append writes.
pub trait RecordStore<T> {
    /// Load every stored record, in stored order
    ///
    /// A store that has never been written returns an empty collection.
    fn load(&self) -> Result<Vec<T>, BankError>;

    /// Replace the stored collection with `records`
    fn save(&mut self, records: &[T]) -> Result<(), BankError>;
}
