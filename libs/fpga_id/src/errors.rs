//! Error types for identifier table construction and validation
//!
//! Lookups never fail. These errors only come out of the fallible paths:
//! building part names at runtime, wrapping caller-supplied tables, and
//! decoding binary table records.

use thiserror::Error;

/// Errors raised while building or validating an identifier table
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Part name does not fit the fixed-capacity buffer
    #[error("Part name '{name}' is {len} bytes, maximum is {max}")]
    NameTooLong { name: String, len: usize, max: usize },

    /// Part names are restricted to printable ASCII without NUL
    #[error("Part name '{name}' contains non-ASCII or control characters")]
    NonAsciiName { name: String },

    /// Table does not end with the `{0, 0, ""}` sentinel entry
    #[error("Table of {len} entries is not terminated by a sentinel entry")]
    MissingSentinel { len: usize },

    /// A zero-id entry appears before the end of the table
    #[error("Sentinel entry at index {index} hides {} trailing entries", .len - .index - 1)]
    MisplacedSentinel { index: usize, len: usize },

    /// Two entries can both match the same identifier
    #[error("Entries {first} ('{first_name}') and {second} ('{second_name}') overlap: some identifiers match both")]
    Overlap {
        first: usize,
        second: usize,
        first_name: String,
        second_name: String,
    },

    /// A real entry carries the sentinel id
    #[error("Entry {index} ('{name}') has id 0, which is reserved for the sentinel")]
    ZeroId { index: usize, name: String },

    /// A real entry has no name and would be indistinguishable from "unknown"
    #[error("Entry {index} (id {id:#010x}) has an empty part name")]
    EmptyName { index: usize, id: u32 },

    /// Binary table buffer ends in the middle of a record
    #[error("Truncated record at offset {offset}: need {need} bytes, got {got}")]
    TruncatedRecord { offset: usize, need: usize, got: usize },

    /// Binary record name field has no NUL terminator
    #[error("Record at offset {offset} has an unterminated part name")]
    UnterminatedName { offset: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misplaced_sentinel_message_counts_hidden_entries() {
        let err = TableError::MisplacedSentinel { index: 2, len: 5 };
        assert_eq!(
            err.to_string(),
            "Sentinel entry at index 2 hides 2 trailing entries"
        );
    }

    #[test]
    fn test_empty_name_message_formats_id_as_hex() {
        let err = TableError::EmptyName {
            index: 7,
            id: 0x0362_D093,
        };
        assert!(err.to_string().contains("0x0362d093"));
    }
}
