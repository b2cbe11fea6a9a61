//! Everything the selector needs to know about where the party is.

use hw_core::{HexId, LocationKind, Region, TerrainKind, TimeOfDay, Unseason, Weather};
use hw_tables::{RollContext, RollTable, Situation};

/// The circumstances of one encounter check.
#[derive(Debug, Clone)]
pub struct EncounterContext {
    /// What kind of place the party is in.
    pub location: LocationKind,
    /// The current hex.
    pub hex: Option<HexId>,
    /// The current settlement.
    pub settlement: Option<String>,
    /// Time of day of the check.
    pub time_of_day: TimeOfDay,
    /// Whether the party is on a fairy road.
    pub on_fairy_road: bool,
    /// Which fairy road, if known.
    pub fairy_road: Option<String>,
    /// The unseason in force.
    pub unseason: Option<Unseason>,
    /// The current region.
    pub region: Option<Region>,
    /// Terrain of the current hex.
    pub terrain: Option<TerrainKind>,
    /// Current weather.
    pub weather: Option<Weather>,
    /// Whether the party is travelling on a road.
    pub on_road: bool,
    /// Whether the party has a fire lit.
    pub has_fire: bool,
    /// Tables carried by the current location, consulted first.
    pub location_tables: Vec<RollTable>,
    /// Modifiers for the encounter roll.
    pub roll_context: RollContext,
}

impl Default for EncounterContext {
    fn default() -> Self {
        Self {
            location: LocationKind::Wilderness,
            hex: None,
            settlement: None,
            time_of_day: TimeOfDay::Day,
            on_fairy_road: false,
            fairy_road: None,
            unseason: None,
            region: None,
            terrain: None,
            weather: None,
            on_road: false,
            has_fire: false,
            location_tables: Vec::new(),
            roll_context: RollContext::new(),
        }
    }
}

impl EncounterContext {
    /// A wilderness check at the given time of day.
    pub fn wilderness(time_of_day: TimeOfDay) -> Self {
        Self {
            time_of_day,
            ..Self::default()
        }
    }

    /// A check inside a settlement.
    pub fn in_settlement(settlement: impl Into<String>, time_of_day: TimeOfDay) -> Self {
        Self {
            location: LocationKind::Settlement,
            settlement: Some(settlement.into()),
            time_of_day,
            ..Self::default()
        }
    }

    /// Set the hex.
    pub fn with_hex(mut self, hex: HexId) -> Self {
        self.hex = Some(hex);
        self
    }

    /// Set the region.
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Set the active unseason.
    pub fn with_unseason(mut self, unseason: Unseason) -> Self {
        self.unseason = Some(unseason);
        self
    }

    /// Put the party on a fairy road; `None` for an unnamed one.
    pub fn on_fairy_road(mut self, road: Option<String>) -> Self {
        self.location = LocationKind::FairyRoad;
        self.on_fairy_road = true;
        self.fairy_road = road;
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

    /// Add a location-carried table.
    pub fn with_location_table(mut self, table: RollTable) -> Self {
        self.location_tables.push(table);
        self
    }

    /// Set the roll modifiers.
    pub fn with_roll_context(mut self, context: RollContext) -> Self {
        self.roll_context = context;
        self
    }

    /// The situation table conditions are checked against.
    pub fn situation(&self) -> Situation {
        let mut situation = Situation::at(self.time_of_day)
            .with_road(self.on_road)
            .with_fire(self.has_fire);
        situation.terrain = self.terrain;
        situation.weather = self.weather;
        situation
    }
}
