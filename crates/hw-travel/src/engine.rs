//! The daily wilderness travel loop.
//!
//! A day begins with [`TravelEngine::start_travel_day`], which sizes the
//! travel-point budget. Each [`TravelEngine::travel_to_hex`] call spends
//! points to enter one hex, makes the day's single lost check and single
//! encounter check on the first segment that completes, and hands any
//! encounter to the game controller. [`TravelEngine::rest_day`] and
//! [`TravelEngine::end_travel_day`] close the day.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use hw_core::{HexId, InSix, TerrainKind, TerrainProfile, Weather};
use hw_encounter::{
    Encounter, EncounterContext, EncounterRoll, EncounterSelector, generate_encounter,
};
use hw_tables::{RollContext, RollSource};

use crate::ambient::ambient_effects;
use crate::atlas::{LocationProvider, LostBehavior};
use crate::config::TravelConfig;
use crate::controller::{GameController, GameMode, TravelConditions, Transition};
use crate::error::TravelResult;
use crate::navigation::{NavigationFactors, check_lost, stray, veer};
use crate::result::{SearchOutcome, TravelSegmentResult};
use crate::state::{DaySummary, NavigationOutcome, PendingEntry, RestOutcome, TravelDayState};

/// Hidden features are found on a d6 of this or more.
const FEATURE_FOUND_ON: u32 = 5;
/// Lairs are found on a d6 of this or more.
const LAIR_FOUND_ON: u32 = 6;

/// Drives travel days for one party.
pub struct TravelEngine<C: GameController, R: RollSource> {
    controller: C,
    rng: R,
    locations: Box<dyn LocationProvider>,
    selector: EncounterSelector,
    config: TravelConfig,
    explored: BTreeSet<HexId>,
    discovered_features: BTreeSet<(HexId, String)>,
    discovered_lairs: BTreeSet<(HexId, String)>,
    day: Option<TravelDayState>,
    last_day: Option<TravelDayState>,
    veer_pending: bool,
    maze: Option<HexId>,
}

impl<C: GameController> TravelEngine<C, StdRng> {
    /// An engine whose dice are seeded from `config.seed`.
    pub fn seeded(
        controller: C,
        locations: Box<dyn LocationProvider>,
        selector: EncounterSelector,
        config: TravelConfig,
    ) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::new(controller, rng, locations, selector, config)
    }
}

impl<C: GameController, R: RollSource> TravelEngine<C, R> {
    /// Create an engine. No day is in progress until one is started.
    pub fn new(
        controller: C,
        rng: R,
        locations: Box<dyn LocationProvider>,
        selector: EncounterSelector,
        config: TravelConfig,
    ) -> Self {
        Self {
            controller,
            rng,
            locations,
            selector,
            config,
            explored: BTreeSet::new(),
            discovered_features: BTreeSet::new(),
            discovered_lairs: BTreeSet::new(),
            day: None,
            last_day: None,
            veer_pending: false,
            maze: None,
        }
    }

    /// The game controller.
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// The game controller, mutably.
    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    /// The dice.
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Party options.
    pub fn config(&self) -> &TravelConfig {
        &self.config
    }

    /// The day in progress.
    pub fn day(&self) -> Option<&TravelDayState> {
        self.day.as_ref()
    }

    /// The most recently closed day.
    pub fn last_day(&self) -> Option<&TravelDayState> {
        self.last_day.as_ref()
    }

    /// Hexes the party has arrived in.
    pub fn explored_hexes(&self) -> &BTreeSet<HexId> {
        &self.explored
    }

    /// Whether the party has been to `hex`.
    pub fn is_explored(&self, hex: &HexId) -> bool {
        self.explored.contains(hex)
    }

    /// The maze hex the party is trapped in, if any.
    pub fn trapped_in(&self) -> Option<&HexId> {
        self.maze.as_ref()
    }

    /// Seed the explored set from a saved session.
    pub fn restore_explored(&mut self, hexes: impl IntoIterator<Item = HexId>) {
        self.explored.extend(hexes);
    }

    // -----------------------------------------------------------------------
    // Day cycle
    // -----------------------------------------------------------------------

    /// Begin a travel day, replacing any day still in progress.
    pub fn start_travel_day(&mut self, forced_march: bool) -> TravelDayState {
        if let Some(open) = self.day.take() {
            self.last_day = Some(open);
        }
        let day = TravelDayState::begin(
            self.config.base_speed(),
            forced_march,
            self.last_day.as_ref(),
        );
        for warning in &day.warnings {
            warn!(%warning, "travel fatigue");
        }
        info!(
            points = day.travel_points_max,
            forced_march,
            days_since_rest = day.days_since_rest,
            "travel day started"
        );
        self.day = Some(day.clone());
        day
    }

    /// Spend the day resting.
    ///
    /// With no day in progress, the last closed day is the one being
    /// rested from; the rest day then becomes the current day.
    pub fn rest_day(&mut self) -> RestOutcome {
        let mut day = match self.day.take().or_else(|| self.last_day.clone()) {
            Some(day) => day,
            None => TravelDayState::begin(self.config.base_speed(), false, None),
        };
        let outcome = day.rest();
        info!(
            days_since_rest = outcome.days_since_rest_before,
            forced_march_recovery = outcome.forced_march_recovery,
            "rest day"
        );
        self.day = Some(day);
        outcome
    }

    /// Close the current day, if one is open.
    pub fn end_travel_day(&mut self) -> Option<DaySummary> {
        let day = self.day.take()?;
        let summary = day.summary();
        info!(
            hexes = summary.hexes_entered.len(),
            spent = summary.travel_points_spent,
            "travel day ended"
        );
        self.last_day = Some(day);
        Some(summary)
    }

    /// Roll today's weather on the season's `weather_{season}` table and
    /// pass it to the controller.
    ///
    /// `None` when no weather table is registered for the season; the
    /// weather is then left as it was.
    pub fn roll_weather(&mut self) -> TravelResult<Option<Weather>> {
        let season = self.controller.conditions().season;
        let table_id = format!("weather_{season}");
        let registry = self.selector.registry();
        let Some(roll) = registry.roll_by_id(&table_id, &RollContext::new(), &mut self.rng)?
        else {
            warn!(table = %table_id, "no weather table for the season");
            return Ok(None);
        };
        let weather = Weather::from_description(&roll.entry.result).unwrap_or_else(|| {
            warn!(table = %table_id, result = %roll.entry.result, "unrecognised weather");
            Weather::Clear
        });
        info!(%season, %weather, result = %roll.entry.result, "weather rolled");
        self.controller.set_weather(weather);
        Ok(Some(weather))
    }

    /// Make the next completed segment drift one hex off its bearing.
    pub fn veer_next_segment(&mut self) {
        self.veer_pending = true;
    }

    // -----------------------------------------------------------------------
    // Segments
    // -----------------------------------------------------------------------

    /// Try to enter `destination`.
    ///
    /// Refusals (wrong game mode, no day, unknown hex, a blocked mount or
    /// vehicle) come back as an unsuccessful result with a reason. The
    /// only error is broken table content met while rolling an encounter.
    ///
    /// A party trapped in a maze makes the day's lost check against the
    /// maze hex first; failing it uses up the day where the party stands.
    pub fn travel_to_hex(
        &mut self,
        destination: &HexId,
        terrain_override: Option<TerrainKind>,
    ) -> TravelResult<TravelSegmentResult> {
        let remaining = self.day.as_ref().map_or(0, |d| d.travel_points_remaining);
        if self.controller.mode() != GameMode::WildernessTravel {
            return Ok(TravelSegmentResult::refused(
                destination.clone(),
                remaining,
                "not in wilderness travel mode",
            ));
        }
        let Some(mut day) = self.day.take() else {
            return Ok(TravelSegmentResult::refused(
                destination.clone(),
                remaining,
                "no travel day in progress",
            ));
        };
        let result = self.segment(&mut day, destination, terrain_override);
        self.day = Some(day);
        result
    }

    fn segment(
        &mut self,
        day: &mut TravelDayState,
        destination: &HexId,
        terrain_override: Option<TerrainKind>,
    ) -> TravelResult<TravelSegmentResult> {
        let mut result =
            TravelSegmentResult::started(destination.clone(), day.travel_points_remaining);
        let refuse = |result: TravelSegmentResult, reason: &str| TravelSegmentResult {
            success: false,
            reason: Some(reason.to_string()),
            ..result
        };

        if day.is_rest_day {
            return Ok(refuse(result, "the party is resting today"));
        }
        if let Some(maze) = self.maze.clone() {
            if day.lost_check_made {
                return Ok(refuse(result, "the party is trapped in a maze until tomorrow"));
            }
            let conditions = self.controller.conditions();
            let profile = self
                .locations
                .terrain(&maze)
                .map_or_else(|| TerrainKind::Forest.profile(), TerrainKind::profile);
            let outcome = self.lost_check(&maze, &profile, &conditions);
            day.lost_check_made = true;
            day.navigation = Some(outcome);
            if outcome == NavigationOutcome::Lost {
                result.travel_points_spent = day.travel_points_remaining;
                result.travel_points_remaining = 0;
                day.travel_points_remaining = 0;
                result.navigation = Some(outcome);
                result.trapped_in_maze = true;
                result
                    .warnings
                    .push(format!("the party wanders in circles through {maze}"));
                info!(hex = %maze, "still trapped in maze");
                return Ok(result);
            }
            self.maze = None;
            result.messages.push(format!("the party finds its way out of {maze}"));
            info!(hex = %maze, "escaped maze");
        }
        let Some(terrain) = terrain_override.or_else(|| self.locations.terrain(destination))
        else {
            return Ok(refuse(result, "unknown hex"));
        };
        let profile = terrain.profile();

        match self.config.conveyance.check_entry(&profile) {
            Ok(Some(note)) => result.messages.push(note),
            Ok(None) => {}
            Err(restriction) => {
                debug!(hex = %destination, %restriction, "segment refused");
                result.restriction = Some(restriction.clone());
                return Ok(refuse(result, &restriction));
            }
        }

        // Entry cost, or what is still owed on a half-entered hex.
        let cost = match &day.pending_entry {
            Some(pending) if pending.destination == *destination => pending.points_owed,
            _ => profile.cost,
        };
        if day.travel_points_remaining < cost {
            let spent = day.travel_points_remaining;
            let owed = cost - spent;
            day.travel_points_remaining = 0;
            day.pending_entry = Some(PendingEntry {
                destination: destination.clone(),
                points_owed: owed,
            });
            result.travel_points_spent = spent;
            result.travel_points_remaining = 0;
            result.messages.push(format!(
                "partial progress into {destination}: {owed} more travel points needed tomorrow"
            ));
            debug!(hex = %destination, spent, owed, "partial progress");
            return Ok(result);
        }
        day.travel_points_remaining -= cost;
        day.pending_entry = None;
        result.travel_points_spent = cost;
        result.travel_points_remaining = day.travel_points_remaining;

        let conditions = self.controller.conditions();
        let (actual, navigation) =
            self.navigate(day, destination, &profile, &conditions, &mut result);
        result.navigation = Some(navigation);
        result.actual_hex = Some(actual.clone());

        if !day.encounter_check_made {
            day.encounter_check_made = true;
            self.check_encounter(day, &actual, &profile, &conditions, &mut result)?;
        }

        let ambient = ambient_effects(conditions.weather, terrain, &mut self.rng);
        result.flavor = ambient.flavor;
        result.hazards = ambient.hazards;

        if !result.encounter_occurred {
            self.controller.set_party_location(actual.clone());
            result.first_visit = self.explored.insert(actual.clone());
            day.hexes_entered.push(actual.clone());
            info!(hex = %actual, first_visit = result.first_visit, "arrived");
        }
        Ok(result)
    }

    /// Decide where a completed segment ends up.
    fn navigate(
        &mut self,
        day: &mut TravelDayState,
        destination: &HexId,
        profile: &TerrainProfile,
        conditions: &TravelConditions,
        result: &mut TravelSegmentResult,
    ) -> (HexId, NavigationOutcome) {
        let mut outcome = match day.navigation {
            Some(NavigationOutcome::Lost) => NavigationOutcome::Lost,
            _ if day.lost_check_made => NavigationOutcome::Success,
            _ => {
                let outcome = self.lost_check(destination, profile, conditions);
                day.lost_check_made = true;
                day.navigation = Some(outcome);
                outcome
            }
        };
        if outcome != NavigationOutcome::Lost && self.veer_pending {
            self.veer_pending = false;
            outcome = NavigationOutcome::Veered;
        }

        let drifted = match outcome {
            NavigationOutcome::Success => return (destination.clone(), outcome),
            NavigationOutcome::Lost => {
                if let Some(maze) = self
                    .locations
                    .lost_behavior(destination)
                    .filter(LostBehavior::is_maze)
                {
                    self.trap_in_maze(day, destination, maze, result);
                    return (destination.clone(), outcome);
                }
                result.warnings.push("the party is lost and strays off course".to_string());
                stray(destination, &mut self.rng)
            }
            NavigationOutcome::Veered => {
                result.warnings.push("the party veers off its bearing".to_string());
                let from = self.controller.party_location();
                veer(from.as_ref(), destination, &mut self.rng)
            }
        };
        match drifted {
            Some(hex) => (hex, outcome),
            None => {
                warn!(hex = %destination, "no neighbouring hex to stray into");
                result.warnings.push(format!(
                    "cannot tell which hex lies beside {destination}; the party stays on course"
                ));
                (destination.clone(), outcome)
            }
        }
    }

    /// The lost check for `hex`, using its own base chance when it has one.
    fn lost_check(
        &mut self,
        hex: &HexId,
        profile: &TerrainProfile,
        conditions: &TravelConditions,
    ) -> NavigationOutcome {
        let mut profile = *profile;
        if let Some(chance) = self.locations.lost_chance(hex) {
            debug!(hex = %hex, %chance, "hex lost chance");
            profile.lost_chance = chance;
        }
        let factors = NavigationFactors {
            weather: conditions.weather,
            time_of_day: conditions.time_of_day,
            has_guide: self.config.has_guide,
            has_map: self.config.has_map,
        };
        check_lost(&profile, &factors, &mut self.rng)
    }

    fn trap_in_maze(
        &mut self,
        day: &mut TravelDayState,
        hex: &HexId,
        maze: LostBehavior,
        result: &mut TravelSegmentResult,
    ) {
        result.travel_points_spent += day.travel_points_remaining;
        result.travel_points_remaining = 0;
        day.travel_points_remaining = 0;
        result.trapped_in_maze = true;
        result.warnings.push(maze.description.unwrap_or_else(|| {
            "the party is lost in a maze and spends the day wandering in circles".to_string()
        }));
        warn!(hex = %hex, "trapped in maze");
        self.maze = Some(hex.clone());
    }

    fn check_encounter(
        &mut self,
        day: &mut TravelDayState,
        hex: &HexId,
        profile: &TerrainProfile,
        conditions: &TravelConditions,
        result: &mut TravelSegmentResult,
    ) -> TravelResult<()> {
        let chance = profile.encounter_chance;
        if chance.value() == 0 {
            return Ok(());
        }
        let roll = self.rng.roll_die(6);
        debug!(hex = %hex, %chance, roll, "encounter check");
        if !chance.hits(roll) {
            return Ok(());
        }

        let terrain = self.locations.terrain(hex).unwrap_or(profile.kind);
        let ctx = self.encounter_context(hex, terrain, conditions);
        match self.selector.select_and_roll(&ctx, &mut self.rng)? {
            EncounterRoll::Rolled(selected) => {
                let mut encounter =
                    generate_encounter(&selected, Some(terrain), Some(hex.clone()), &mut self.rng);
                let context = self.apply_encounter_modifiers(hex, &mut encounter);
                info!(
                    hex = %hex,
                    level = %encounter.level,
                    encounter = %encounter.description,
                    "encounter"
                );
                result.messages.push(format!("Encounter: {}", encounter.description));
                result.messages.extend(context);
                result.encounter_occurred = true;
                result.encounter = Some(encounter.clone());
                day.encounters += 1;
                self.controller.request_transition(Transition::Encounter {
                    encounter: Box::new(encounter),
                });
            }
            EncounterRoll::NoTableAvailable => {
                result.messages.push("no encounter possible".to_string());
            }
        }
        Ok(())
    }

    /// Roll the hex's encounter modifiers in order. The first to come up
    /// decides who is met; its context line, if any, is returned.
    fn apply_encounter_modifiers(
        &mut self,
        hex: &HexId,
        encounter: &mut Encounter,
    ) -> Option<String> {
        for modifier in self.locations.encounter_modifiers(hex) {
            let chance = modifier.chance();
            if chance == InSix::NEVER {
                continue;
            }
            let roll = self.rng.roll_die(6);
            debug!(hex = %hex, %chance, roll, result = %modifier.result, "encounter modifier");
            if chance.hits(roll) {
                encounter.description = modifier.result;
                encounter.number_appearing = None;
                encounter.monster_refs.clear();
                encounter.npc_refs.clear();
                return modifier.context;
            }
        }
        None
    }

    fn encounter_context(
        &self,
        hex: &HexId,
        terrain: TerrainKind,
        conditions: &TravelConditions,
    ) -> EncounterContext {
        let mut ctx = match self.locations.settlement(hex) {
            Some(settlement) => EncounterContext::in_settlement(settlement, conditions.time_of_day),
            None => EncounterContext::wilderness(conditions.time_of_day),
        }
        .with_hex(hex.clone())
        .with_terrain(terrain)
        .with_weather(conditions.weather)
        .with_road(terrain.is_road())
        .with_fire(conditions.has_fire);

        if conditions.on_fairy_road {
            ctx = ctx.on_fairy_road(conditions.fairy_road.clone());
        }
        ctx.unseason = conditions.unseason;
        ctx.region = self.locations.region(hex);
        ctx.location_tables = self.locations.encounter_tables(hex);
        ctx
    }

    // -----------------------------------------------------------------------
    // Searching
    // -----------------------------------------------------------------------

    /// Search `hex` for hidden features and lairs.
    ///
    /// Costs the hex's entry cost. Things already found stay found and
    /// are not rolled for again.
    pub fn search_hex(&mut self, hex: &HexId) -> SearchOutcome {
        let remaining = self.day.as_ref().map_or(0, |d| d.travel_points_remaining);
        if self.controller.mode() != GameMode::WildernessTravel {
            return SearchOutcome::refused(hex.clone(), remaining, "not in wilderness travel mode");
        }
        let Some(day) = self.day.as_mut().filter(|d| !d.is_rest_day) else {
            return SearchOutcome::refused(hex.clone(), remaining, "no travel day in progress");
        };
        let Some(terrain) = self.locations.terrain(hex) else {
            return SearchOutcome::refused(hex.clone(), remaining, "unknown hex");
        };
        let cost = terrain.profile().cost;
        if day.travel_points_remaining < cost {
            return SearchOutcome::refused(
                hex.clone(),
                remaining,
                format!("not enough travel points to search: need {cost}, have {remaining}"),
            );
        }
        day.travel_points_remaining -= cost;

        let mut outcome = SearchOutcome {
            hex: Some(hex.clone()),
            success: true,
            travel_points_spent: cost,
            travel_points_remaining: day.travel_points_remaining,
            landmarks_found: self.locations.landmarks(hex),
            ..SearchOutcome::default()
        };

        for feature in self.locations.hidden_features(hex) {
            let key = (hex.clone(), feature.clone());
            if self.discovered_features.contains(&key) {
                continue;
            }
            if self.rng.roll_die(6) >= FEATURE_FOUND_ON {
                self.discovered_features.insert(key);
                outcome.features_found.push(feature);
            }
        }
        for lair in self.locations.lairs(hex) {
            let key = (hex.clone(), lair.clone());
            if self.discovered_lairs.contains(&key) {
                continue;
            }
            if self.rng.roll_die(6) >= LAIR_FOUND_ON {
                self.discovered_lairs.insert(key);
                outcome.lairs_found.push(lair);
            }
        }
        if !outcome.found_anything() {
            outcome.message = Some("nothing new turns up".to_string());
        }
        info!(
            hex = %hex,
            features = outcome.features_found.len(),
            lairs = outcome.lairs_found.len(),
            "searched hex"
        );
        outcome
    }
}
