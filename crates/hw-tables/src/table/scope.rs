//! Table scopes, applicability conditions and the situation they are checked against.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use hw_core::{HexId, Region, Season, TerrainKind, TimeOfDay, Unseason, Weather};

/// Binds a table to a place or world state. Unscoped tables are global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableScope {
    /// A single map hex.
    Hex {
        /// The hex.
        hex: HexId,
    },
    /// A dungeon or point of interest.
    Dungeon {
        /// Dungeon identifier.
        dungeon: String,
    },
    /// A settlement, optionally for one time of day.
    Settlement {
        /// Settlement identifier.
        settlement: String,
        /// Time-of-day variant; `None` applies at any time.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<TimeOfDay>,
    },
    /// A fairy road; `None` is the table for any road.
    FairyRoad {
        /// Road identifier.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        road: Option<String>,
    },
    /// An unseason.
    Unseason {
        /// The unseason.
        unseason: Unseason,
    },
    /// A region.
    Region {
        /// The region.
        region: Region,
    },
    /// A calendar season.
    Season {
        /// The season.
        season: Season,
    },
}

impl TableScope {
    /// The secondary-index key this scope files under.
    ///
    /// Settlement tables file under the settlement alone so that every
    /// time-of-day variant can be enumerated together.
    pub fn key(&self) -> ScopeKey {
        match self {
            Self::Hex { hex } => ScopeKey::Hex(hex.clone()),
            Self::Dungeon { dungeon } => ScopeKey::Dungeon(dungeon.clone()),
            Self::Settlement { settlement, .. } => ScopeKey::Settlement(settlement.clone()),
            Self::FairyRoad { road } => ScopeKey::FairyRoad(road.clone()),
            Self::Unseason { unseason } => ScopeKey::Unseason(*unseason),
            Self::Region { region } => ScopeKey::Region(*region),
            Self::Season { season } => ScopeKey::Season(*season),
        }
    }
}

/// A key in the registry's secondary index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScopeKey {
    /// Tables for a hex.
    Hex(HexId),
    /// Tables for a dungeon.
    Dungeon(String),
    /// Tables for a settlement, every time of day.
    Settlement(String),
    /// Tables for a fairy road (`None` for the generic road table).
    FairyRoad(Option<String>),
    /// Tables for an unseason.
    Unseason(Unseason),
    /// Tables for a region.
    Region(Region),
    /// Tables for a season.
    Season(Season),
}

/// What is true about the moment a table is consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Situation {
    /// Current time of day, if known.
    pub time_of_day: Option<TimeOfDay>,
    /// Whether the party is on a road or track.
    pub on_road: bool,
    /// Whether the party has a fire or lit camp.
    pub has_fire: bool,
    /// Terrain of the current hex, if known.
    pub terrain: Option<TerrainKind>,
    /// Current weather, if known.
    pub weather: Option<Weather>,
    /// Named custom flags. Missing flags read as false.
    pub flags: BTreeMap<String, bool>,
}

impl Situation {
    /// A situation at the given time of day.
    pub fn at(time: TimeOfDay) -> Self {
        Self {
            time_of_day: Some(time),
            ..Self::default()
        }
    }

    /// Set whether the party is on a road.
    pub fn with_road(mut self, on_road: bool) -> Self {
        self.on_road = on_road;
        self
    }

    /// Set whether the party has a fire.
    pub fn with_fire(mut self, has_fire: bool) -> Self {
        self.has_fire = has_fire;
        self
    }

    /// Set the terrain.
    pub fn with_terrain(mut self, terrain: TerrainKind) -> Self {
        self.terrain = Some(terrain);
        self
    }

    /// Set the weather.
    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    /// Set a custom flag.
    pub fn with_flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.flags.insert(name.into(), value);
        self
    }
}

/// One clause of a table's applicability predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum TableCondition {
    /// Only at this time of day (`day` includes dawn, `night` includes dusk).
    TimeOfDay {
        /// Required time.
        time: TimeOfDay,
    },
    /// Only on, or only off, a road.
    OnRoad {
        /// Required value.
        on_road: bool,
    },
    /// Only with, or only without, a fire.
    HasFire {
        /// Required value.
        has_fire: bool,
    },
    /// Only in this terrain.
    Terrain {
        /// Required terrain.
        terrain: TerrainKind,
    },
    /// Only in this weather.
    Weather {
        /// Required weather.
        weather: Weather,
    },
    /// A custom flag must have this value.
    Flag {
        /// Flag name.
        name: String,
        /// Required value.
        value: bool,
    },
}

impl TableCondition {
    /// Whether this clause holds in `situation`.
    pub fn holds(&self, situation: &Situation) -> bool {
        match self {
            Self::TimeOfDay { time } => situation.time_of_day.is_some_and(|now| time.covers(now)),
            Self::OnRoad { on_road } => situation.on_road == *on_road,
            Self::HasFire { has_fire } => situation.has_fire == *has_fire,
            Self::Terrain { terrain } => situation.terrain == Some(*terrain),
            Self::Weather { weather } => situation.weather == Some(*weather),
            Self::Flag { name, value } => {
                situation.flags.get(name).copied().unwrap_or(false) == *value
            }
        }
    }
}
