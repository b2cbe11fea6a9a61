//! Table categories and name-based inference.

use serde::{Deserialize, Serialize};

/// What a table is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableCategory {
    /// Monster reaction on meeting the party.
    Reaction,
    /// Morale checks.
    Morale,
    /// Surprise checks.
    Surprise,
    /// "What kind of encounter" tables that point at sub-tables.
    EncounterType,
    /// The global wandering-encounter fallback.
    EncounterCommon,
    /// A creature table for one region.
    EncounterRegional,
    /// Street encounters in a settlement.
    EncounterSettlement,
    /// Encounters on a fairy road.
    EncounterFairyRoad,
    /// Encounters that only happen during an unseason.
    EncounterUnseason,
    /// Encounters specific to one hex.
    EncounterHex,
    /// Rooms or areas of a dungeon or point of interest.
    DungeonRoom,
    /// Daily weather.
    Weather,
    /// Treasure and loot.
    Treasure,
    /// Happenings and events.
    Event,
    /// NPCs and inhabitants.
    Npc,
    /// Anything else.
    Other,
}

impl TableCategory {
    /// Whether a table of this category can be used for wandering encounters.
    pub fn is_encounter(self) -> bool {
        matches!(
            self,
            Self::EncounterType
                | Self::EncounterCommon
                | Self::EncounterRegional
                | Self::EncounterSettlement
                | Self::EncounterFairyRoad
                | Self::EncounterUnseason
                | Self::EncounterHex
        )
    }

    /// Parse a snake-case category key.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace([' ', '-'], "_");
        let category = match s.as_str() {
            "reaction" => Self::Reaction,
            "morale" => Self::Morale,
            "surprise" => Self::Surprise,
            "encounter_type" => Self::EncounterType,
            "encounter_common" | "common" => Self::EncounterCommon,
            "encounter_regional" | "regional" => Self::EncounterRegional,
            "encounter_settlement" => Self::EncounterSettlement,
            "encounter_fairy_road" | "fairy_road" => Self::EncounterFairyRoad,
            "encounter_unseason" | "unseason" => Self::EncounterUnseason,
            "encounter_hex" | "encounter" => Self::EncounterHex,
            "dungeon_room" | "room" => Self::DungeonRoom,
            "weather" => Self::Weather,
            "treasure" => Self::Treasure,
            "event" => Self::Event,
            "npc" => Self::Npc,
            "other" => Self::Other,
            _ => return None,
        };
        Some(category)
    }

    /// Guess the category of a location-embedded table from its name.
    pub fn infer_from_name(name: &str) -> Self {
        let name = name.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| name.contains(w));
        if has(&["encounter", "wandering"]) {
            Self::EncounterHex
        } else if has(&["room", "location", "area", "chamber"]) {
            Self::DungeonRoom
        } else if has(&["treasure", "loot", "hoard"]) {
            Self::Treasure
        } else if has(&["event"]) {
            Self::Event
        } else if has(&["npc", "character", "inhabitant"]) {
            Self::Npc
        } else {
            Self::Other
        }
    }
}

impl std::fmt::Display for TableCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = match self {
            Self::Reaction => "reaction",
            Self::Morale => "morale",
            Self::Surprise => "surprise",
            Self::EncounterType => "encounter_type",
            Self::EncounterCommon => "encounter_common",
            Self::EncounterRegional => "encounter_regional",
            Self::EncounterSettlement => "encounter_settlement",
            Self::EncounterFairyRoad => "encounter_fairy_road",
            Self::EncounterUnseason => "encounter_unseason",
            Self::EncounterHex => "encounter_hex",
            Self::DungeonRoom => "dungeon_room",
            Self::Weather => "weather",
            Self::Treasure => "treasure",
            Self::Event => "event",
            Self::Npc => "npc",
            Self::Other => "other",
        };
        f.write_str(key)
    }
}
