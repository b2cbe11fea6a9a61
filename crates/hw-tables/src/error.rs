//! Error types for dice and table resolution.
//!
//! Every variant here is a configuration error: bad content data or a
//! bad expression. Expected "nothing there" outcomes (unknown table ids,
//! missing sub-tables) are reported through `Option` instead.

use thiserror::Error;

/// Result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors from parsing dice notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// The text is not `NdS[+/-M]` or a bare integer.
    #[error("malformed dice expression: '{0}'")]
    MalformedExpression(String),
}

/// Errors from building, validating or rolling tables.
#[derive(Debug, Error)]
pub enum TableError {
    /// A dice expression inside table data could not be parsed.
    #[error(transparent)]
    Dice(#[from] DiceError),

    /// A roll landed on a total that no entry covers.
    #[error("table '{table_id}' has no entry for a roll of {total}")]
    NoMatchingEntry {
        /// The table that was rolled.
        table_id: String,
        /// The clamped total.
        total: i32,
    },

    /// Sub-table references nested deeper than the resolver allows.
    #[error("sub-table chain through '{table_id}' exceeded depth {depth}")]
    RecursionLimitExceeded {
        /// The table at which the limit was hit.
        table_id: String,
        /// The depth reached.
        depth: usize,
    },

    /// Entry ranges do not exactly cover the table's possible rolls.
    #[error("table '{table_id}' coverage: {detail}")]
    Coverage {
        /// The offending table.
        table_id: String,
        /// What is wrong with its ranges.
        detail: String,
    },

    /// A location-embedded table does not fit its JSON schema.
    #[error("embedded table '{table}': {detail}")]
    Embedded {
        /// The table name as written in the source data.
        table: String,
        /// What is wrong with it.
        detail: String,
    },

    /// A table pack could not be parsed.
    #[error("invalid table pack: {0}")]
    Pack(String),

    /// A table pack file could not be read.
    #[error("failed to read table pack: {0}")]
    Io(#[from] std::io::Error),
}
