//! The daily lost check and where a stray party ends up.

use tracing::{debug, warn};

use hw_core::{Direction, HexId, InSix, TerrainProfile, TimeOfDay, Weather};
use hw_tables::RollSource;

use crate::state::NavigationOutcome;

/// Everything that shifts the chance of getting lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationFactors {
    /// The day's weather.
    pub weather: Weather,
    /// When the party is moving.
    pub time_of_day: TimeOfDay,
    /// A local guide is along.
    pub has_guide: bool,
    /// The party has a map.
    pub has_map: bool,
}

/// The chance of getting lost in a terrain, after modifiers.
///
/// Roads never lose anyone, whatever the conditions.
pub fn lost_chance(profile: &TerrainProfile, factors: &NavigationFactors) -> InSix {
    if profile.kind.is_road() {
        return InSix::NEVER;
    }
    let mut chance = i32::from(profile.lost_chance.value());
    if factors.weather.reduces_visibility() {
        chance += 1;
    }
    if factors.time_of_day.is_dark() {
        chance += 2;
    }
    if factors.has_guide {
        chance -= 1;
    }
    if factors.has_map {
        chance -= 1;
    }
    InSix::new(chance)
}

/// Make the lost check. A zero chance draws nothing.
pub fn check_lost(
    profile: &TerrainProfile,
    factors: &NavigationFactors,
    rng: &mut dyn RollSource,
) -> NavigationOutcome {
    let chance = lost_chance(profile, factors);
    if chance == InSix::NEVER {
        debug!(terrain = %profile.kind, "no chance of getting lost");
        return NavigationOutcome::Success;
    }
    let roll = rng.roll_die(6);
    let lost = chance.hits(roll);
    debug!(terrain = %profile.kind, %chance, roll, lost, "lost check");
    if lost {
        NavigationOutcome::Lost
    } else {
        NavigationOutcome::Success
    }
}

/// Where a lost party ends up: a neighbour of `intended` picked by d6.
///
/// `None` when the hex has no usable neighbour in that direction (an
/// unparsable id or the edge of the map).
pub fn stray(intended: &HexId, rng: &mut dyn RollSource) -> Option<HexId> {
    let direction = Direction::from_d6(rng.roll_die(6));
    let hex = intended.neighbour(direction);
    if hex.is_none() {
        warn!(hex = %intended, %direction, "cannot stray off this hex");
    }
    hex
}

/// Where a veering party ends up: one step either side of its bearing.
///
/// When there is no bearing to turn from, the party drifts to a random
/// neighbour of `intended` instead.
pub fn veer(from: Option<&HexId>, intended: &HexId, rng: &mut dyn RollSource) -> Option<HexId> {
    let bearing = from.and_then(|from| from.direction_to(intended).map(|d| (from, d)));
    let Some((from, bearing)) = bearing else {
        return stray(intended, rng);
    };
    let turned = if rng.roll_die(2) == 1 {
        bearing.counter_clockwise()
    } else {
        bearing.clockwise()
    };
    let hex = from.neighbour(turned);
    if hex.is_none() {
        warn!(hex = %from, direction = %turned, "cannot veer off this hex");
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;
    use hw_core::TerrainKind;
    use hw_tables::ScriptedRolls;
    use proptest::prelude::*;

    fn clear_day() -> NavigationFactors {
        NavigationFactors {
            weather: Weather::Clear,
            time_of_day: TimeOfDay::Day,
            has_guide: false,
            has_map: false,
        }
    }

    #[test]
    fn modifiers_stack_and_clamp() {
        let forest = TerrainKind::Forest.profile();
        assert_eq!(lost_chance(&forest, &clear_day()).value(), 1);

        let foggy_night = NavigationFactors {
            weather: Weather::Fog,
            time_of_day: TimeOfDay::Night,
            ..clear_day()
        };
        assert_eq!(lost_chance(&forest, &foggy_night).value(), 4);

        let swamp = TerrainKind::Swamp.profile();
        let blizzard_night = NavigationFactors {
            weather: Weather::Blizzard,
            ..foggy_night
        };
        assert_eq!(lost_chance(&swamp, &blizzard_night).value(), 6);

        let guided = NavigationFactors {
            has_guide: true,
            has_map: true,
            ..clear_day()
        };
        assert_eq!(lost_chance(&forest, &guided), InSix::NEVER);
    }

    #[test]
    fn road_is_never_lost() {
        let road = TerrainKind::Road.profile();
        let worst = NavigationFactors {
            weather: Weather::Blizzard,
            time_of_day: TimeOfDay::Night,
            ..clear_day()
        };
        let mut rng = ScriptedRolls::new([1]);
        assert_eq!(check_lost(&road, &worst, &mut rng), NavigationOutcome::Success);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn roll_against_chance() {
        let hills = TerrainKind::Hills.profile();
        let mut rng = ScriptedRolls::new([2, 3]);
        assert_eq!(check_lost(&hills, &clear_day(), &mut rng), NavigationOutcome::Lost);
        assert_eq!(check_lost(&hills, &clear_day(), &mut rng), NavigationOutcome::Success);
    }

    #[test]
    fn stray_follows_the_die() {
        let mut rng = ScriptedRolls::new([4]);
        assert_eq!(stray(&HexId::new("0305"), &mut rng), Some(HexId::new("0306")));
        let mut rng = ScriptedRolls::new([1]);
        assert_eq!(stray(&HexId::new("0101"), &mut rng), None);
        assert_eq!(stray(&HexId::new("old mill"), &mut rng), None);
    }

    #[test]
    fn veer_turns_off_the_bearing() {
        let from = HexId::new("0305");
        let heading_north = HexId::new("0304");
        let mut rng = ScriptedRolls::new([1]);
        assert_eq!(veer(Some(&from), &heading_north, &mut rng), Some(HexId::new("0204")));
        let mut rng = ScriptedRolls::new([2]);
        assert_eq!(veer(Some(&from), &heading_north, &mut rng), Some(HexId::new("0404")));
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn veer_without_bearing_strays() {
        let mut rng = ScriptedRolls::new([4]);
        assert_eq!(veer(None, &HexId::new("0305"), &mut rng), Some(HexId::new("0306")));
    }

    fn factors() -> impl Strategy<Value = NavigationFactors> {
        (0usize..7, 0usize..4, any::<bool>(), any::<bool>()).prop_map(|(w, t, g, m)| {
            NavigationFactors {
                weather: [
                    Weather::Clear,
                    Weather::Overcast,
                    Weather::Fog,
                    Weather::Rain,
                    Weather::Storm,
                    Weather::Snow,
                    Weather::Blizzard,
                ][w],
                time_of_day: [
                    TimeOfDay::Dawn,
                    TimeOfDay::Day,
                    TimeOfDay::Dusk,
                    TimeOfDay::Night,
                ][t],
                has_guide: g,
                has_map: m,
            }
        })
    }

    proptest! {
        /// Worse conditions never make getting lost less likely.
        #[test]
        fn lost_chance_is_monotonic(base in factors(), kind in 0usize..12) {
            let profile = TerrainKind::ALL[kind].profile();
            let chance = lost_chance(&profile, &base);
            let darker = NavigationFactors { time_of_day: TimeOfDay::Night, ..base };
            let murkier = NavigationFactors { weather: Weather::Fog, ..base };
            let unguided = NavigationFactors { has_guide: false, has_map: false, ..base };
            prop_assert!(lost_chance(&profile, &darker) >= chance);
            prop_assert!(lost_chance(&profile, &murkier) >= chance);
            prop_assert!(lost_chance(&profile, &unguided) >= chance);
            prop_assert!(chance.value() <= 6);
        }
    }
}
