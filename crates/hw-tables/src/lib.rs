//! Dice and roll tables for Hexwarden.
//!
//! This crate covers everything from parsing `2d6+1` to rolling a
//! registered table through a chain of sub-tables:
//!
//! - [`dice`]: dice notation and the [`RollSource`] every roll draws from.
//! - [`table`]: tables, entries, scopes, conditions and roll results.
//! - [`resolve`]: rolling one table, with quantity and sub-table follow-up.
//! - [`registry`]: the shared, hot-reloadable [`TableRegistry`].
//! - [`builtin`]: the standard tables a new registry starts with.
//! - [`embedded`]: tables carried in hex content JSON.

/// Built-in tables.
pub mod builtin;
/// Dice notation and random sources.
pub mod dice;
/// Tables embedded in hex data.
pub mod embedded;
/// Error types.
pub mod error;
/// JSON table packs.
pub mod pack;
/// The table registry.
pub mod registry;
/// Rolling tables.
pub mod resolve;
/// Tables and roll results.
pub mod table;

pub use dice::{DiceExpression, DrawRecord, Recorded, RollSource, ScriptedRolls};
pub use embedded::{EmbeddedEntry, EmbeddedTable};
pub use error::{DiceError, DiceResult, TableError, TableResult};
pub use pack::TablePack;
pub use registry::TableRegistry;
pub use resolve::{MAX_TABLE_DEPTH, NoLookup, TableLookup, roll_table};
pub use table::{
    RollContext, RollResult, RollTable, ScopeKey, Situation, TableCategory, TableCondition,
    TableEntry, TableScope,
};
