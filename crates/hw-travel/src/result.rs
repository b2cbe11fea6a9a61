use serde::{Deserialize, Serialize};

use hw_core::HexId;
use hw_encounter::Encounter;

use crate::ambient::Hazard;
use crate::state::NavigationOutcome;

/// Everything that happened on one travel segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelSegmentResult {
    /// Whether the segment went ahead. Partial progress still counts.
    pub success: bool,
    /// Travel points used by this segment.
    pub travel_points_spent: u32,
    /// Travel points left for the day.
    pub travel_points_remaining: u32,
    /// Result of navigation on this segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationOutcome>,
    /// Whether a wandering encounter was triggered.
    pub encounter_occurred: bool,
    /// The encounter, handed to the game controller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Encounter>,
    /// Where the party meant to go.
    pub destination_hex: HexId,
    /// Where the party ended up; empty when it reached nowhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_hex: Option<HexId>,
    /// The mount or vehicle rule that blocked the segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restriction: Option<String>,
    /// Narrative weather and terrain lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flavor: Vec<String>,
    /// Weather hazards that struck.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hazards: Vec<Hazard>,
    /// Problems the players should know about.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// Informational notes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
    /// Whether the party had never been to `actual_hex` before.
    pub first_visit: bool,
    /// Whether the party is stuck in a maze for the rest of the day.
    #[serde(default)]
    pub trapped_in_maze: bool,
    /// Why the segment did not go ahead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl TravelSegmentResult {
    /// A segment that is going ahead, before anything has happened.
    pub fn started(destination: HexId, remaining: u32) -> Self {
        Self {
            success: true,
            travel_points_spent: 0,
            travel_points_remaining: remaining,
            navigation: None,
            encounter_occurred: false,
            encounter: None,
            destination_hex: destination,
            actual_hex: None,
            restriction: None,
            flavor: Vec::new(),
            hazards: Vec::new(),
            warnings: Vec::new(),
            messages: Vec::new(),
            first_visit: false,
            trapped_in_maze: false,
            reason: None,
        }
    }

    /// A segment refused before any point was spent.
    pub fn refused(destination: HexId, remaining: u32, reason: impl Into<String>) -> Self {
        Self {
            success: false,
            reason: Some(reason.into()),
            ..Self::started(destination, remaining)
        }
    }

    /// Whether the party finished entering a hex.
    pub fn arrived(&self) -> bool {
        self.success && self.actual_hex.is_some()
    }
}

/// What a search of a hex found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// The hex searched.
    pub hex: Option<HexId>,
    /// Whether the search went ahead.
    pub success: bool,
    /// Hidden features found this time.
    pub features_found: Vec<String>,
    /// Lairs found this time.
    pub lairs_found: Vec<String>,
    /// Landmarks in view.
    pub landmarks_found: Vec<String>,
    /// Travel points used.
    pub travel_points_spent: u32,
    /// Travel points left for the day.
    pub travel_points_remaining: u32,
    /// Why the search did not happen, or a note about it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SearchOutcome {
    /// A search that could not go ahead.
    pub fn refused(hex: HexId, remaining: u32, message: impl Into<String>) -> Self {
        Self {
            hex: Some(hex),
            travel_points_remaining: remaining,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Whether anything new was discovered.
    pub fn found_anything(&self) -> bool {
        !self.features_found.is_empty() || !self.lairs_found.is_empty()
    }
}
