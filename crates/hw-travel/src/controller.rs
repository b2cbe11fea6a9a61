//! The game-state seam the travel loop reports to.

use serde::{Deserialize, Serialize};

use hw_core::{HexId, Season, TimeOfDay, Unseason, Weather};
use hw_encounter::Encounter;

/// What the game as a whole is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Moving hex to hex.
    #[default]
    WildernessTravel,
    /// An encounter is being played out.
    Encounter,
    /// Inside a settlement.
    Settlement,
    /// Exploring a dungeon.
    Dungeon,
    /// Between adventures.
    Downtime,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WildernessTravel => write!(f, "wilderness travel"),
            Self::Encounter => write!(f, "encounter"),
            Self::Settlement => write!(f, "settlement"),
            Self::Dungeon => write!(f, "dungeon"),
            Self::Downtime => write!(f, "downtime"),
        }
    }
}

/// The world conditions a travel segment happens under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelConditions {
    /// Today's weather.
    pub weather: Weather,
    /// The calendar season.
    pub season: Season,
    /// An unseason in force, if any.
    pub unseason: Option<Unseason>,
    /// The current time of day.
    pub time_of_day: TimeOfDay,
    /// Whether the party walks a fairy road.
    pub on_fairy_road: bool,
    /// Which fairy road, when known.
    pub fairy_road: Option<String>,
    /// Whether the party has a fire going.
    pub has_fire: bool,
}

impl Default for TravelConditions {
    fn default() -> Self {
        Self {
            weather: Weather::Clear,
            season: Season::Spring,
            unseason: None,
            time_of_day: TimeOfDay::Day,
            on_fairy_road: false,
            fairy_road: None,
            has_fire: false,
        }
    }
}

/// A request to move the game into another mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    /// Hand over to the combat and social layers.
    Encounter {
        /// The encounter to run.
        encounter: Box<Encounter>,
    },
}

/// The host game the travel loop runs inside.
pub trait GameController {
    /// The current game mode.
    fn mode(&self) -> GameMode;
    /// Weather, season and daylight right now.
    fn conditions(&self) -> TravelConditions;
    /// Where the party is.
    fn party_location(&self) -> Option<HexId>;
    /// Move the party.
    fn set_party_location(&mut self, hex: HexId);
    /// Change today's weather.
    fn set_weather(&mut self, weather: Weather);
    /// Ask the game to switch modes.
    fn request_transition(&mut self, transition: Transition);
}

/// An in-memory controller that records every transition it is asked for.
#[derive(Debug, Clone, Default)]
pub struct SessionController {
    /// The current mode.
    pub mode: GameMode,
    /// The current conditions.
    pub conditions: TravelConditions,
    /// Where the party is.
    pub location: Option<HexId>,
    /// Transitions received, oldest first.
    pub transitions: Vec<Transition>,
}

impl SessionController {
    /// A controller in wilderness-travel mode with the party at `hex`.
    pub fn at(hex: HexId) -> Self {
        Self {
            location: Some(hex),
            ..Self::default()
        }
    }

    /// Set the conditions.
    pub fn with_conditions(mut self, conditions: TravelConditions) -> Self {
        self.conditions = conditions;
        self
    }

    /// Return to travel after an encounter has been dealt with.
    pub fn resume_travel(&mut self) {
        self.mode = GameMode::WildernessTravel;
    }
}

impl GameController for SessionController {
    fn mode(&self) -> GameMode {
        self.mode
    }

    fn conditions(&self) -> TravelConditions {
        self.conditions.clone()
    }

    fn party_location(&self) -> Option<HexId> {
        self.location.clone()
    }

    fn set_party_location(&mut self, hex: HexId) {
        self.location = Some(hex);
    }

    fn set_weather(&mut self, weather: Weather) {
        self.conditions.weather = weather;
    }

    fn request_transition(&mut self, transition: Transition) {
        match &transition {
            Transition::Encounter { .. } => self.mode = GameMode::Encounter,
        }
        self.transitions.push(transition);
    }
}
