//! Turning a rolled encounter into something the table can play.

use serde::{Deserialize, Serialize};

use hw_core::{HexId, TerrainKind};
use hw_tables::{DiceExpression, RollResult, RollSource};

use crate::selector::{SelectedRoll, SelectionLevel};

/// Feet per unit of encounter distance outdoors.
pub const OUTDOOR_DISTANCE_UNIT: i32 = 30;

/// Who, if anyone, is caught off guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surprise {
    /// Both sides are ready.
    Neither,
    /// The party is surprised.
    Party,
    /// The other side is surprised.
    Enemies,
    /// Both sides are surprised.
    Mutual,
}

impl Surprise {
    fn from_checks(party: bool, enemies: bool) -> Self {
        match (party, enemies) {
            (false, false) => Self::Neither,
            (true, false) => Self::Party,
            (false, true) => Self::Enemies,
            (true, true) => Self::Mutual,
        }
    }
}

impl std::fmt::Display for Surprise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Neither => write!(f, "no one is surprised"),
            Self::Party => write!(f, "the party is surprised"),
            Self::Enemies => write!(f, "the creatures are surprised"),
            Self::Mutual => write!(f, "both sides are surprised"),
        }
    }
}

/// What the creatures are doing when met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    /// On the move.
    Traveling,
    /// Hunting.
    Hunting,
    /// Foraging.
    Foraging,
    /// Resting or camped.
    Resting,
    /// Guarding something.
    Guarding,
    /// Chasing something.
    Pursuing,
}

impl Activity {
    /// Map a d6 roll to an activity.
    pub fn from_d6(roll: u32) -> Self {
        match roll {
            0 | 1 => Self::Traveling,
            2 => Self::Hunting,
            3 => Self::Foraging,
            4 => Self::Resting,
            5 => Self::Guarding,
            _ => Self::Pursuing,
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Traveling => write!(f, "traveling"),
            Self::Hunting => write!(f, "hunting"),
            Self::Foraging => write!(f, "foraging"),
            Self::Resting => write!(f, "resting"),
            Self::Guarding => write!(f, "guarding"),
            Self::Pursuing => write!(f, "pursuing something"),
        }
    }
}

/// A ready-to-run encounter, handed to the combat and social layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    /// Cascade level the table came from.
    pub level: SelectionLevel,
    /// Table that was rolled first.
    pub table_id: String,
    /// One-line description of the full roll chain.
    pub description: String,
    /// Where it happens.
    pub hex: Option<HexId>,
    /// Terrain it happens in.
    pub terrain: Option<TerrainKind>,
    /// Surprise on both sides.
    pub surprise: Surprise,
    /// Distance between the sides, in feet.
    pub distance_feet: i32,
    /// What the creatures are doing.
    pub activity: Activity,
    /// How many appear, from the deepest quantity roll.
    pub number_appearing: Option<i32>,
    /// Monster ids from the whole chain.
    pub monster_refs: Vec<String>,
    /// NPC ids from the whole chain.
    pub npc_refs: Vec<String>,
    /// The full roll.
    pub roll: RollResult,
}

impl Encounter {
    /// Whether anyone is surprised.
    pub fn is_surprise(&self) -> bool {
        self.surprise != Surprise::Neither
    }
}

/// Build an encounter from a rolled table.
///
/// Draws, in order: party surprise (d6), enemy surprise (d6), distance
/// (2d6, or 1d4 when both sides are surprised) and activity (d6).
pub fn generate_encounter(
    selected: &SelectedRoll,
    terrain: Option<TerrainKind>,
    hex: Option<HexId>,
    rng: &mut dyn RollSource,
) -> Encounter {
    let party_surprised = rng.roll_die(6) <= 2;
    let enemies_surprised = rng.roll_die(6) <= 2;
    let surprise = Surprise::from_checks(party_surprised, enemies_surprised);

    let distance_dice = match surprise {
        Surprise::Mutual => DiceExpression::dice(1, 4),
        _ => DiceExpression::dice(2, 6),
    };
    let distance_feet = distance_dice.evaluate(rng) * OUTDOOR_DISTANCE_UNIT;
    let activity = Activity::from_d6(rng.roll_die(6));

    let roll = selected.result.clone();
    Encounter {
        level: selected.level,
        table_id: roll.table_id.clone(),
        description: roll.describe(),
        hex,
        terrain,
        surprise,
        distance_feet,
        activity,
        number_appearing: roll.deepest_quantity(),
        monster_refs: roll.monster_refs(),
        npc_refs: roll.npc_refs(),
        roll,
    }
}
