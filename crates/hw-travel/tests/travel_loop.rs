//! Travel days driven end to end against a small hand-built map.

#![allow(missing_docs)]

use std::sync::Arc;

use hw_core::{HexId, InSix, Region, Season, TerrainKind, TimeOfDay, Weather};
use hw_encounter::{EncounterSelector, SelectionLevel};
use hw_tables::{EmbeddedEntry, EmbeddedTable, Recorded, RollSource, ScriptedRolls, TableRegistry};
use hw_travel::{
    Conveyance, EncounterModifier, GameController, GameMode, HexAtlas, HexRecord,
    NavigationOutcome, SessionController, TravelConditions, TravelConfig, TravelEngine,
    Transition,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

//      0204 deep forest   0304 road    0404 swamp
//      0205 hills         0305 start   0405 moor
//                         0306 forest
fn atlas() -> HexAtlas {
    let records = [
        HexRecord::new(HexId::new("0305"), TerrainKind::Forest)
            .with_feature("Standing stone", true)
            .with_feature("Clearing", false)
            .with_lair("goblin")
            .with_landmark("Old oak"),
        HexRecord::new(HexId::new("0304"), TerrainKind::Road),
        HexRecord::new(HexId::new("0404"), TerrainKind::Swamp),
        HexRecord::new(HexId::new("0405"), TerrainKind::Moor),
        HexRecord::new(HexId::new("0306"), TerrainKind::Forest),
        HexRecord::new(HexId::new("0205"), TerrainKind::Hills).with_region(Region::Nagwood),
        HexRecord::new(HexId::new("0204"), TerrainKind::DeepForest).with_table(wandering()),
    ];
    let mut atlas = HexAtlas::new();
    for record in records {
        atlas.insert(record).unwrap();
    }
    atlas
}

fn selector(registry: TableRegistry) -> EncounterSelector {
    EncounterSelector::new(Arc::new(registry))
}

fn engine<R: RollSource>(rng: R, config: TravelConfig) -> TravelEngine<SessionController, R> {
    TravelEngine::new(
        SessionController::at(HexId::new("0305")),
        rng,
        Box::new(atlas()),
        selector(TableRegistry::with_builtin_tables()),
        config,
    )
}

fn scripted(
    script: impl IntoIterator<Item = u32>,
) -> TravelEngine<SessionController, ScriptedRolls> {
    engine(ScriptedRolls::new(script), TravelConfig::default())
}

fn hex(id: &str) -> HexId {
    HexId::new(id)
}

fn wandering() -> EmbeddedTable {
    EmbeddedTable::new("Wandering", "d2")
        .with_entry(EmbeddedEntry::new(1).with_title("Owl").with_monsters(&["giant_owl"]))
        .with_entry(EmbeddedEntry::new(2).with_title("Woodcutter"))
}

/// The same neighbourhood, with hexes that bend the travel procedure:
/// a maze at 0306, a treacherous 0205, a well-marked 0404 and a haunted
/// 0204.
fn strange_atlas() -> HexAtlas {
    let banshee = EncounterModifier::new(InSix::new(2), "A bewildered banshee")
        .with_context("heading to a ball at the Spectral Manse");
    let records = [
        HexRecord::new(hex("0305"), TerrainKind::Forest),
        HexRecord::new(hex("0304"), TerrainKind::Road),
        HexRecord::new(hex("0306"), TerrainKind::Forest)
            .with_maze("The paths fold back on themselves"),
        HexRecord::new(hex("0205"), TerrainKind::Forest).with_lost_chance(InSix::new(5)),
        HexRecord::new(hex("0404"), TerrainKind::Swamp).with_lost_chance(InSix::NEVER),
        HexRecord::new(hex("0204"), TerrainKind::DeepForest)
            .with_table(wandering())
            .with_encounter_modifier(banshee),
    ];
    let mut atlas = HexAtlas::new();
    for record in records {
        atlas.insert(record).unwrap();
    }
    atlas
}

fn strange(
    script: impl IntoIterator<Item = u32>,
) -> TravelEngine<SessionController, ScriptedRolls> {
    TravelEngine::new(
        SessionController::at(hex("0305")),
        ScriptedRolls::new(script),
        Box::new(strange_atlas()),
        selector(TableRegistry::with_builtin_tables()),
        TravelConfig::default(),
    )
}

// ---------------------------------------------------------------------------
// Segments
// ---------------------------------------------------------------------------

#[test]
fn road_segment_never_gets_lost() {
    let mut eng = scripted([1]);
    assert_eq!(eng.start_travel_day(false).travel_points_max, 8);

    let r = eng.travel_to_hex(&hex("0304"), None).unwrap();
    assert!(r.success);
    assert_eq!(r.navigation, Some(NavigationOutcome::Success));
    assert_eq!(r.travel_points_spent, 2);
    assert_eq!(r.travel_points_remaining, 6);
    assert_eq!(r.actual_hex, Some(hex("0304")));
    assert!(r.first_visit);
    assert!(!r.encounter_occurred);
    assert_eq!(eng.rng().draws(), 0);
    assert_eq!(eng.controller().party_location(), Some(hex("0304")));
    assert!(eng.is_explored(&hex("0304")));
}

#[test]
fn short_of_points_makes_partial_progress() {
    let mut eng = engine(
        ScriptedRolls::new([6]),
        TravelConfig::default().with_base_speed(10),
    );
    eng.start_travel_day(false);

    let r = eng.travel_to_hex(&hex("0404"), None).unwrap();
    assert!(r.success);
    assert_eq!(r.travel_points_spent, 2);
    assert_eq!(r.travel_points_remaining, 0);
    assert_eq!(r.actual_hex, None);
    assert!(r.navigation.is_none());
    assert!(!r.messages.is_empty());
    let day = eng.day().unwrap();
    assert!(!day.lost_check_made);
    assert!(!day.encounter_check_made);
    assert_eq!(day.pending_entry.as_ref().map(|p| p.points_owed), Some(2));
    assert_eq!(eng.rng().draws(), 0);
    assert_eq!(eng.controller().party_location(), Some(hex("0305")));
}

#[test]
fn pending_entry_is_finished_the_next_day() {
    let mut eng = engine(
        ScriptedRolls::new([6]),
        TravelConfig::default().with_base_speed(15),
    );
    eng.start_travel_day(false);
    // Three points against a swamp costing four.
    let first = eng.travel_to_hex(&hex("0404"), None).unwrap();
    assert_eq!(first.travel_points_spent, 3);
    let summary = eng.end_travel_day().unwrap();
    assert_eq!(summary.pending_entry.as_ref().map(|p| p.points_owed), Some(1));

    eng.start_travel_day(false);
    let second = eng.travel_to_hex(&hex("0404"), None).unwrap();
    assert_eq!(second.travel_points_spent, 1);
    assert_eq!(second.travel_points_remaining, 2);
    assert_eq!(second.actual_hex, Some(hex("0404")));
    assert!(eng.day().unwrap().pending_entry.is_none());
}

#[test]
fn refusals_change_nothing() {
    let mut eng = scripted([1]);
    let r = eng.travel_to_hex(&hex("0304"), None).unwrap();
    assert!(!r.success);
    assert_eq!(r.reason.as_deref(), Some("no travel day in progress"));

    eng.start_travel_day(false);
    eng.controller_mut().mode = GameMode::Dungeon;
    let r = eng.travel_to_hex(&hex("0304"), None).unwrap();
    assert_eq!(r.reason.as_deref(), Some("not in wilderness travel mode"));
    assert_eq!(r.travel_points_remaining, 8);

    eng.controller_mut().resume_travel();
    let r = eng.travel_to_hex(&hex("9999"), None).unwrap();
    assert_eq!(r.reason.as_deref(), Some("unknown hex"));
    assert_eq!(eng.day().unwrap().travel_points_remaining, 8);
    assert_eq!(eng.rng().draws(), 0);

    let r = eng
        .travel_to_hex(&hex("0303"), Some(TerrainKind::Road))
        .unwrap();
    assert!(r.success);
}

#[test]
fn mounts_and_vehicles_are_restricted() {
    let mounted = TravelConfig::default().with_conveyance(Conveyance::Mounted);
    let mut eng = engine(ScriptedRolls::new([6]), mounted);
    eng.start_travel_day(false);

    let swamp = eng.travel_to_hex(&hex("0404"), None).unwrap();
    assert!(!swamp.success);
    assert_eq!(
        swamp.restriction.as_deref(),
        Some("mounts cannot enter swamp terrain")
    );
    assert_eq!(swamp.travel_points_spent, 0);
    assert_eq!(swamp.travel_points_remaining, 8);

    let moor = eng.travel_to_hex(&hex("0405"), None).unwrap();
    assert!(moor.success);
    assert!(moor.messages.iter().any(|m| m.contains("lead their mounts")));

    let cart = TravelConfig::default().with_conveyance(Conveyance::Vehicle);
    let mut eng = engine(ScriptedRolls::new([6]), cart);
    assert_eq!(eng.start_travel_day(false).travel_points_max, 6);
    let moor = eng.travel_to_hex(&hex("0405"), None).unwrap();
    assert_eq!(
        moor.restriction.as_deref(),
        Some("vehicles cannot enter moor terrain")
    );
    assert!(eng.travel_to_hex(&hex("0304"), None).unwrap().success);
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn lost_party_strays_and_stays_lost() {
    // Lost on 1, strays south (4), no encounter (6).
    let mut eng = scripted([1, 4, 6]);
    eng.start_travel_day(false);
    let r = eng.travel_to_hex(&hex("0306"), None).unwrap();
    assert_eq!(r.navigation, Some(NavigationOutcome::Lost));
    assert_eq!(r.actual_hex, Some(hex("0307")));
    assert!(!r.warnings.is_empty());
    assert_eq!(eng.controller().party_location(), Some(hex("0307")));
    assert_eq!(eng.rng().draws(), 3);

    // Still lost: only the stray direction is rolled.
    let r = eng.travel_to_hex(&hex("0306"), None).unwrap();
    assert_eq!(r.navigation, Some(NavigationOutcome::Lost));
    assert_eq!(eng.rng().draws(), 4);
}

#[test]
fn veering_turns_off_the_bearing() {
    let mut eng = scripted([1]);
    eng.start_travel_day(false);
    eng.veer_next_segment();
    let r = eng.travel_to_hex(&hex("0304"), None).unwrap();
    assert_eq!(r.navigation, Some(NavigationOutcome::Veered));
    assert_eq!(r.actual_hex, Some(hex("0204")));
    assert_eq!(eng.rng().draws(), 1);

    let r = eng.travel_to_hex(&hex("0304"), None).unwrap();
    assert_eq!(r.navigation, Some(NavigationOutcome::Success));
}

#[test]
fn checks_happen_once_a_day() {
    // Forest: lost roll 6, encounter roll 6.
    let mut eng = scripted([6, 6]);
    eng.start_travel_day(false);
    eng.travel_to_hex(&hex("0306"), None).unwrap();
    assert_eq!(eng.rng().draws(), 2);
    eng.travel_to_hex(&hex("0305"), None).unwrap();
    assert_eq!(eng.rng().draws(), 2);

    eng.end_travel_day();
    eng.start_travel_day(false);
    eng.travel_to_hex(&hex("0306"), None).unwrap();
    assert_eq!(eng.rng().draws(), 4);
}

// ---------------------------------------------------------------------------
// Encounters
// ---------------------------------------------------------------------------

#[test]
fn encounter_hands_over_to_the_controller() {
    // Lost 6, encounter 1, then the Nagwood table and the factory.
    let mut eng = scripted([6, 1]);
    eng.start_travel_day(false);
    let r = eng.travel_to_hex(&hex("0205"), None).unwrap();

    assert!(r.encounter_occurred);
    let encounter = r.encounter.as_ref().unwrap();
    assert_eq!(encounter.level, SelectionLevel::Region);
    assert_eq!(encounter.hex, Some(hex("0205")));
    assert_eq!(eng.controller().mode(), GameMode::Encounter);
    assert_eq!(eng.controller().transitions.len(), 1);
    assert!(matches!(
        &eng.controller().transitions[0],
        Transition::Encounter { encounter: e } if **e == *encounter
    ));
    // The party has not moved in and the hex is not explored.
    assert_eq!(eng.controller().party_location(), Some(hex("0305")));
    assert!(!eng.is_explored(&hex("0205")));
    assert_eq!(eng.day().unwrap().encounters, 1);

    let blocked = eng.travel_to_hex(&hex("0306"), None).unwrap();
    assert!(!blocked.success);
    eng.controller_mut().resume_travel();
    let draws = eng.rng().draws();
    let r = eng.travel_to_hex(&hex("0306"), None).unwrap();
    assert!(r.success && !r.encounter_occurred);
    assert_eq!(eng.rng().draws(), draws);
}

#[test]
fn hex_tables_come_first() {
    // Lost 6, encounter 1, d2 = 1, no surprise (6, 6), distance 3 + 4, activity 2.
    let mut eng = scripted([6, 1, 1, 6, 6, 3, 4, 2]);
    eng.start_travel_day(false);
    let r = eng.travel_to_hex(&hex("0204"), None).unwrap();
    let encounter = r.encounter.unwrap();
    assert_eq!(encounter.level, SelectionLevel::Hex);
    assert_eq!(encounter.table_id, "hex_0204_wandering");
    assert_eq!(encounter.monster_refs, vec!["giant_owl"]);
    assert_eq!(encounter.distance_feet, 210);
    assert_eq!(eng.rng().draws(), 8);
}

#[test]
fn empty_registry_means_no_encounter() {
    let mut eng = TravelEngine::new(
        SessionController::at(hex("0305")),
        ScriptedRolls::new([6, 1]),
        Box::new(atlas()),
        selector(TableRegistry::new()),
        TravelConfig::default(),
    );
    eng.start_travel_day(false);
    let r = eng.travel_to_hex(&hex("0205"), None).unwrap();
    assert!(!r.encounter_occurred);
    assert!(r.messages.iter().any(|m| m == "no encounter possible"));
    assert_eq!(eng.controller().party_location(), Some(hex("0205")));
}

#[test]
fn weather_adds_flavor_and_hazards() {
    let storm = TravelConditions {
        weather: Weather::Storm,
        time_of_day: TimeOfDay::Day,
        ..TravelConditions::default()
    };
    // Road: no lost or encounter draws; hazard 1 hits for 5.
    let mut eng = TravelEngine::new(
        SessionController::at(hex("0305")).with_conditions(storm),
        ScriptedRolls::new([1, 5]),
        Box::new(atlas()),
        selector(TableRegistry::with_builtin_tables()),
        TravelConfig::default(),
    );
    eng.start_travel_day(false);
    let r = eng.travel_to_hex(&hex("0304"), None).unwrap();
    assert_eq!(r.flavor[0], "Dangerous conditions, seek shelter");
    assert_eq!(r.flavor.len(), 2);
    assert_eq!(r.hazards.len(), 1);
    assert_eq!(r.hazards[0].damage, 5);
}

#[test]
fn daily_weather_follows_the_season() {
    // Spring 5 is light rain; winter 6 is a blizzard.
    let mut eng = scripted([5, 6]);
    assert_eq!(eng.roll_weather().unwrap(), Some(Weather::Rain));
    assert_eq!(eng.controller().conditions().weather, Weather::Rain);

    eng.controller_mut().conditions.season = Season::Winter;
    assert_eq!(eng.roll_weather().unwrap(), Some(Weather::Blizzard));
    assert_eq!(eng.controller().conditions().weather, Weather::Blizzard);
    assert_eq!(eng.rng().draws(), 2);

    let mut bare = TravelEngine::new(
        SessionController::at(hex("0305")),
        ScriptedRolls::new([6]),
        Box::new(atlas()),
        selector(TableRegistry::new()),
        TravelConfig::default(),
    );
    assert_eq!(bare.roll_weather().unwrap(), None);
    assert_eq!(bare.controller().conditions().weather, Weather::Clear);
    assert_eq!(bare.rng().draws(), 0);
}

#[test]
fn rolled_weather_feeds_the_lost_check() {
    // Autumn 6 is heavy fog, so forest becomes 2-in-6: lost on 2.
    let mut eng = scripted([6, 2, 4, 6]);
    eng.controller_mut().conditions.season = Season::Autumn;
    assert_eq!(eng.roll_weather().unwrap(), Some(Weather::Fog));
    eng.start_travel_day(false);
    let r = eng.travel_to_hex(&hex("0306"), None).unwrap();
    assert_eq!(r.navigation, Some(NavigationOutcome::Lost));
    assert_eq!(r.flavor[0], "Visibility reduced, navigation harder");
}

// ---------------------------------------------------------------------------
// Hex procedures
// ---------------------------------------------------------------------------

#[test]
fn hex_lost_chance_replaces_the_terrain() {
    // Plain forest is 1-in-6; 0205 is 5-in-6, so a 5 loses the party and
    // it strays north-west (6).
    let mut eng = strange([5, 6, 6]);
    eng.start_travel_day(false);
    let r = eng.travel_to_hex(&hex("0205"), None).unwrap();
    assert_eq!(r.navigation, Some(NavigationOutcome::Lost));
    assert_eq!(r.actual_hex, Some(hex("0105")));
    assert_eq!(eng.rng().draws(), 3);

    // A swamp marked never-lost draws only the encounter die.
    let mut eng = strange([6]);
    eng.start_travel_day(false);
    let r = eng.travel_to_hex(&hex("0404"), None).unwrap();
    assert_eq!(r.navigation, Some(NavigationOutcome::Success));
    assert_eq!(r.actual_hex, Some(hex("0404")));
    assert_eq!(eng.rng().draws(), 1);
}

#[test]
fn maze_traps_the_party_until_it_finds_its_bearings() {
    // Day 1: lost (1) entering the maze, no encounter (6).
    // Day 2: lost again (1). Day 3: out (6), no encounter (6).
    let mut eng = strange([1, 6, 1, 6, 6]);
    eng.start_travel_day(false);
    let r = eng.travel_to_hex(&hex("0306"), None).unwrap();
    assert!(r.success);
    assert!(r.trapped_in_maze);
    assert_eq!(r.navigation, Some(NavigationOutcome::Lost));
    assert_eq!(r.actual_hex, Some(hex("0306")));
    assert_eq!(r.travel_points_spent, 8);
    assert_eq!(r.travel_points_remaining, 0);
    assert!(r.warnings.iter().any(|w| w == "The paths fold back on themselves"));
    assert_eq!(eng.trapped_in(), Some(&hex("0306")));
    assert_eq!(eng.controller().party_location(), Some(hex("0306")));
    assert_eq!(eng.rng().draws(), 2);

    let stuck = eng.travel_to_hex(&hex("0305"), None).unwrap();
    assert!(!stuck.success);
    assert_eq!(
        stuck.reason.as_deref(),
        Some("the party is trapped in a maze until tomorrow")
    );
    eng.end_travel_day();

    eng.start_travel_day(false);
    let r = eng.travel_to_hex(&hex("0305"), None).unwrap();
    assert!(r.trapped_in_maze);
    assert_eq!(r.actual_hex, None);
    assert!(!r.arrived());
    assert_eq!(r.travel_points_spent, 8);
    assert_eq!(eng.day().unwrap().travel_points_remaining, 0);
    assert_eq!(eng.controller().party_location(), Some(hex("0306")));
    assert_eq!(eng.rng().draws(), 3);
    eng.end_travel_day();

    eng.start_travel_day(false);
    let r = eng.travel_to_hex(&hex("0305"), None).unwrap();
    assert!(!r.trapped_in_maze);
    assert!(r.messages.iter().any(|m| m == "the party finds its way out of 0306"));
    assert_eq!(r.navigation, Some(NavigationOutcome::Success));
    assert_eq!(r.actual_hex, Some(hex("0305")));
    assert_eq!(r.travel_points_remaining, 6);
    assert!(eng.trapped_in().is_none());
    assert_eq!(eng.rng().draws(), 5);
}

#[test]
fn maze_only_matters_when_lost() {
    let mut eng = strange([6, 6]);
    eng.start_travel_day(false);
    let r = eng.travel_to_hex(&hex("0306"), None).unwrap();
    assert!(!r.trapped_in_maze);
    assert_eq!(r.travel_points_remaining, 6);
    assert!(eng.trapped_in().is_none());
}

#[test]
fn encounter_modifier_decides_who_is_met() {
    // Lost 6, encounter 1, d2 = 1 (Owl), surprise 6 6, distance 3 + 4,
    // activity 2, then the banshee's 2-in-6 comes up on a 2.
    let mut eng = strange([6, 1, 1, 6, 6, 3, 4, 2, 2]);
    eng.start_travel_day(false);
    let r = eng.travel_to_hex(&hex("0204"), None).unwrap();
    let encounter = r.encounter.as_ref().unwrap();
    assert_eq!(encounter.description, "A bewildered banshee");
    assert_eq!(encounter.table_id, "hex_0204_wandering");
    assert!(encounter.monster_refs.is_empty());
    assert_eq!(encounter.distance_feet, 210);
    assert_eq!(
        r.messages,
        vec![
            "Encounter: A bewildered banshee".to_string(),
            "heading to a ball at the Spectral Manse".to_string(),
        ]
    );
    assert_eq!(eng.rng().draws(), 9);

    // A 3 misses and the owl stands.
    let mut eng = strange([6, 1, 1, 6, 6, 3, 4, 2, 3]);
    eng.start_travel_day(false);
    let r = eng.travel_to_hex(&hex("0204"), None).unwrap();
    let encounter = r.encounter.unwrap();
    assert_eq!(encounter.monster_refs, vec!["giant_owl"]);
    assert_ne!(encounter.description, "A bewildered banshee");
    assert_eq!(eng.rng().draws(), 9);
}

#[test]
fn point_of_interest_modifiers_follow_the_hex() {
    let json = r#"{"items": [
        {"hex_id": "0305", "terrain_type": "forest"},
        {"hex_id": "0204", "terrain_type": "deep_forest",
         "roll_tables": [{"name": "Wandering", "die_type": "d2", "entries": [
            {"roll": 1, "title": "Owl", "monsters": ["giant_owl"]},
            {"roll": 2, "title": "Woodcutter"}
         ]}],
         "procedural": {"encounter_modifiers": [
            {"chance": "2-in-6", "result": "A bewildered banshee"}
         ]},
         "points_of_interest": [
            {"name": "Spectral Manse", "encounter_modifiers": [
                {"chance": "1-in-6", "result": "A ghostly footman"}
            ]}
         ]}
    ]}"#;
    let mut eng = TravelEngine::new(
        SessionController::at(hex("0305")),
        ScriptedRolls::new([6, 1, 1, 6, 6, 3, 4, 2, 3, 1]),
        Box::new(HexAtlas::from_json(json).unwrap()),
        selector(TableRegistry::with_builtin_tables()),
        TravelConfig::default(),
    );
    eng.start_travel_day(false);
    let r = eng.travel_to_hex(&hex("0204"), None).unwrap();
    assert_eq!(r.encounter.unwrap().description, "A ghostly footman");
    assert_eq!(eng.rng().draws(), 10);
}

// ---------------------------------------------------------------------------
// Rest and fatigue
// ---------------------------------------------------------------------------

#[test]
fn rest_after_six_days() {
    let mut eng = scripted([6]);
    for _ in 0..6 {
        eng.start_travel_day(false);
        eng.end_travel_day();
    }
    assert_eq!(eng.last_day().unwrap().days_since_rest, 6);

    let rest = eng.rest_day();
    assert_eq!(rest.days_since_rest_before, 6);
    assert!(!rest.forced_march_recovery);
    let day = eng.day().unwrap();
    assert_eq!(day.travel_points_remaining, 0);
    assert_eq!(day.days_since_rest, 0);

    let r = eng.travel_to_hex(&hex("0304"), None).unwrap();
    assert!(!r.success);

    let next = eng.start_travel_day(false);
    assert_eq!(next.days_since_rest, 1);
    assert!(next.warnings.is_empty());
}

#[test]
fn fatigue_warnings() {
    let mut eng = scripted([6]);
    assert!(eng.start_travel_day(true).warnings.is_empty());
    let second = eng.start_travel_day(true);
    assert_eq!(second.travel_points_max, 12);
    assert_eq!(second.warnings.len(), 2);

    let rest = eng.rest_day();
    assert!(rest.forced_march_recovery);
    assert!(eng.start_travel_day(false).warnings.is_empty());

    for _ in 0..6 {
        eng.start_travel_day(false);
    }
    let seventh = eng.day().unwrap();
    assert_eq!(seventh.days_since_rest, 7);
    assert!(seventh.warnings.iter().any(|w| w.contains("without rest")));
}

// ---------------------------------------------------------------------------
// Searching
// ---------------------------------------------------------------------------

#[test]
fn search_remembers_discoveries() {
    let mut eng = scripted([5, 5, 6]);
    eng.start_travel_day(false);

    let first = eng.search_hex(&hex("0305"));
    assert!(first.success);
    assert_eq!(first.features_found, vec!["Standing stone"]);
    assert!(first.lairs_found.is_empty());
    assert_eq!(first.landmarks_found, vec!["Old oak"]);
    assert_eq!(first.travel_points_spent, 2);
    assert_eq!(eng.rng().draws(), 2);

    let second = eng.search_hex(&hex("0305"));
    assert!(second.features_found.is_empty());
    assert_eq!(second.lairs_found, vec!["goblin"]);
    assert_eq!(eng.rng().draws(), 3);

    let third = eng.search_hex(&hex("0305"));
    assert!(!third.found_anything());
    assert_eq!(eng.rng().draws(), 3);
    assert_eq!(third.travel_points_remaining, 2);

    eng.search_hex(&hex("0305"));
    let broke = eng.search_hex(&hex("0305"));
    assert!(!broke.success);
    assert_eq!(broke.travel_points_spent, 0);
}

#[test]
fn search_needs_travel_mode() {
    let mut eng = scripted([5]);
    eng.start_travel_day(false);
    eng.controller_mut().mode = GameMode::Encounter;
    let refused = eng.search_hex(&hex("0305"));
    assert!(!refused.success);
    assert_eq!(refused.message.as_deref(), Some("not in wilderness travel mode"));
    assert_eq!(refused.travel_points_remaining, 8);
    assert_eq!(eng.day().unwrap().travel_points_remaining, 8);
    assert_eq!(eng.rng().draws(), 0);

    eng.controller_mut().resume_travel();
    assert!(eng.search_hex(&hex("0305")).success);
}

#[test]
fn explored_set_round_trips() {
    let mut eng = scripted([6]);
    eng.restore_explored([hex("0304")]);
    eng.start_travel_day(false);
    let r = eng.travel_to_hex(&hex("0304"), None).unwrap();
    assert!(!r.first_visit);
    assert_eq!(eng.explored_hexes().len(), 1);
}

#[test]
fn atlas_file_drives_travel() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hexes.json");
    std::fs::write(&path, atlas().to_json().unwrap()).unwrap();

    let loaded = HexAtlas::load_file(&path).unwrap();
    assert_eq!(loaded.len(), 7);
    let mut eng = TravelEngine::new(
        SessionController::at(hex("0305")),
        ScriptedRolls::new([6]),
        Box::new(loaded),
        selector(TableRegistry::with_builtin_tables()),
        TravelConfig::default(),
    );
    eng.start_travel_day(false);
    assert!(eng.travel_to_hex(&hex("0304"), None).unwrap().success);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

const ROUTE: [&str; 6] = ["0304", "0404", "0405", "0306", "0205", "0204"];

fn walk<R: RollSource>(
    eng: &mut TravelEngine<SessionController, R>,
    steps: &[usize],
) -> Vec<String> {
    let mut log = Vec::new();
    eng.start_travel_day(false);
    for &step in steps {
        eng.controller_mut().resume_travel();
        let r = eng.travel_to_hex(&hex(ROUTE[step]), None).unwrap();
        log.push(serde_json::to_string(&r).unwrap());
    }
    log
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Points left always equal the budget minus everything spent.
    #[test]
    fn budget_is_conserved(
        seed in any::<u64>(),
        steps in prop::collection::vec(0usize..6, 1..10),
        forced in any::<bool>(),
    ) {
        let mut eng = engine(StdRng::seed_from_u64(seed), TravelConfig::default());
        let max = eng.start_travel_day(forced).travel_points_max;
        let mut spent = 0;
        for step in steps {
            eng.controller_mut().resume_travel();
            let r = eng.travel_to_hex(&hex(ROUTE[step]), None).unwrap();
            spent += r.travel_points_spent;
            prop_assert_eq!(r.travel_points_remaining, max - spent);
            prop_assert_eq!(eng.day().unwrap().travel_points_remaining, max - spent);
        }
    }

    /// Replaying the recorded dice reproduces every segment exactly.
    #[test]
    fn travel_replays(seed in any::<u64>(), steps in prop::collection::vec(0usize..6, 1..6)) {
        let mut first = engine(Recorded::new(StdRng::seed_from_u64(seed)), TravelConfig::default());
        let log = walk(&mut first, &steps);
        let mut second = engine(first.rng().to_script(), TravelConfig::default());
        prop_assert_eq!(log, walk(&mut second, &steps));
    }
}
