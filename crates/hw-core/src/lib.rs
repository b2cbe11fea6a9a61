//! Shared hex-crawl vocabulary for Hexwarden.
//!
//! Every axis the other crates switch on (terrain, weather, time of day,
//! season, unseason, region) is a closed enum here, with exhaustive
//! mappings to the data that depends on it. Nothing in this crate draws
//! randomness or holds mutable global state.

/// Calendar vocabulary: time of day, seasons, unseasons.
pub mod calendar;
/// X-in-6 chances.
pub mod chance;
/// Hex identifiers and grid adjacency.
pub mod hex;
/// Regions and location kinds.
pub mod region;
/// Terrain kinds and their travel profiles.
pub mod terrain;
/// Weather conditions.
pub mod weather;

pub use calendar::{Season, TimeOfDay, Unseason, UnseasonState};
pub use chance::InSix;
pub use hex::{Direction, HexId};
pub use region::{LocationKind, Region};
pub use terrain::{MountAccess, TerrainKind, TerrainProfile, terrain_profile};
pub use weather::Weather;
