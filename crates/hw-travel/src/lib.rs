//! Wilderness travel for Hexwarden.
//!
//! [`TravelEngine`] runs travel days hex by hex: it spends the day's
//! travel points, makes the daily lost and encounter checks, adds weather
//! and terrain colour, and hands encounters to the host game through
//! [`GameController`]. The map comes from a [`LocationProvider`], usually
//! a [`HexAtlas`] loaded from hex content JSON.

/// Weather flavour and hazards.
pub mod ambient;
/// Hex content and the location seam.
pub mod atlas;
/// Party options.
pub mod config;
/// The game-state seam.
pub mod controller;
/// The travel loop.
pub mod engine;
/// Error types.
pub mod error;
/// Lost checks and drifting off course.
pub mod navigation;
/// Segment and search results.
pub mod result;
/// Per-day state.
pub mod state;

pub use ambient::{AmbientEffects, Hazard, ambient_effects};
pub use atlas::{
    EncounterModifier, HexAtlas, HexFeature, HexRecord, Lair, Landmark, LocationProvider,
    LostBehavior, PointOfInterest, Procedural,
};
pub use config::{Conveyance, TravelConfig};
pub use controller::{GameController, GameMode, SessionController, TravelConditions, Transition};
pub use engine::TravelEngine;
pub use error::{TravelError, TravelResult};
pub use navigation::{NavigationFactors, lost_chance};
pub use result::{SearchOutcome, TravelSegmentResult};
pub use state::{DaySummary, NavigationOutcome, PendingEntry, RestOutcome, TravelDayState};
