//! Weather and terrain colour for a travel segment, and the odd hazard.

use serde::{Deserialize, Serialize};
use tracing::debug;

use hw_core::{InSix, TerrainKind, Weather};
use hw_tables::{DiceExpression, RollSource};

/// A minor mechanical mishap caused by the weather.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hazard {
    /// The weather that caused it.
    pub weather: Weather,
    /// What happened.
    pub description: String,
    /// Damage dealt.
    pub damage: i32,
}

/// The flavour and hazards of one segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmbientEffects {
    /// Narrative lines.
    pub flavor: Vec<String>,
    /// Hazards that struck.
    pub hazards: Vec<Hazard>,
}

fn hazard_for(weather: Weather) -> Option<(InSix, DiceExpression, &'static str)> {
    match weather {
        Weather::Storm => Some((
            InSix::new(1),
            DiceExpression::dice(1, 6),
            "a falling limb strikes the party",
        )),
        Weather::Snow => Some((
            InSix::new(1),
            DiceExpression::dice(1, 4),
            "the cold bites through wet clothing",
        )),
        Weather::Blizzard => Some((
            InSix::new(2),
            DiceExpression::dice(1, 6),
            "exposure in the driving snow",
        )),
        Weather::Clear | Weather::Overcast | Weather::Fog | Weather::Rain => None,
    }
}

/// Describe the weather and terrain, and roll any weather hazard.
///
/// Only storm, snow and blizzard draw dice: one d6 for the hazard check
/// and the damage dice when it hits.
pub fn ambient_effects(
    weather: Weather,
    terrain: TerrainKind,
    rng: &mut dyn RollSource,
) -> AmbientEffects {
    let mut effects = AmbientEffects::default();
    if let Some(flavor) = weather.flavor() {
        effects.flavor.push(flavor.to_string());
    }
    effects.flavor.push(terrain.profile().description.to_string());

    if let Some((chance, damage, description)) = hazard_for(weather) {
        let roll = rng.roll_die(6);
        if chance.hits(roll) {
            let damage = damage.evaluate(rng);
            debug!(%weather, damage, "weather hazard");
            effects.hazards.push(Hazard {
                weather,
                description: description.to_string(),
                damage,
            });
        }
    }
    effects
}
