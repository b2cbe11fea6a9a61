//! Wandering-encounter selection for Hexwarden.
//!
//! [`EncounterSelector`] walks a fixed cascade of table scopes, from the
//! current hex out to the common tables, and rolls the first table that
//! applies. [`generate_encounter`] then adds surprise, distance and
//! activity so the result can be played.

/// The encounter check's circumstances.
pub mod context;
/// Surprise, distance and activity.
pub mod factory;
/// The selection cascade.
pub mod selector;

pub use context::EncounterContext;
pub use factory::{Activity, Encounter, Surprise, generate_encounter};
pub use selector::{EncounterRoll, EncounterSelector, SelectedRoll, Selection, SelectionLevel};
