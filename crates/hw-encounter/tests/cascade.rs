//! Encounter cascade precedence and regional deferral.

#![allow(missing_docs)]

use std::sync::Arc;

use hw_core::{HexId, Region, TimeOfDay, Unseason};
use hw_encounter::{EncounterContext, EncounterRoll, EncounterSelector, SelectionLevel};
use hw_tables::{
    Recorded, RollTable, ScriptedRolls, TableCategory, TableEntry, TableRegistry, TableScope,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn d2(id: &str, category: TableCategory, scope: TableScope) -> RollTable {
    RollTable::new(id, id, category, 1, 2)
        .entry(TableEntry::new(1, 2, format!("from {id}")))
        .scoped(scope)
}

fn builtin_selector() -> EncounterSelector {
    EncounterSelector::new(Arc::new(TableRegistry::with_builtin_tables()))
}

fn rolled(roll: EncounterRoll) -> hw_encounter::SelectedRoll {
    match roll {
        EncounterRoll::Rolled(r) => r,
        EncounterRoll::NoTableAvailable => panic!("expected a table"),
    }
}

// ---------------------------------------------------------------------------
// Precedence
// ---------------------------------------------------------------------------

#[test]
fn hex_table_beats_settlement_table() {
    let reg = TableRegistry::with_builtin_tables();
    reg.register(d2(
        "hex_0104_wandering",
        TableCategory::EncounterHex,
        TableScope::Hex {
            hex: HexId::new("0104"),
        },
    ));
    let sel = EncounterSelector::new(Arc::new(reg));
    let ctx =
        EncounterContext::in_settlement("prigwort", TimeOfDay::Day).with_hex(HexId::new("0104"));

    let mut rng = ScriptedRolls::new([1]);
    let r = rolled(sel.select_and_roll(&ctx, &mut rng).unwrap());
    assert_eq!(r.level, SelectionLevel::Hex);
    assert_eq!(r.result.table_id, "hex_0104_wandering");
    assert_eq!(r.result.result_text(), "from hex_0104_wandering");
}

#[test]
fn each_level_yields_to_the_one_above() {
    let reg = TableRegistry::with_builtin_tables();
    reg.register(d2(
        "hex_table",
        TableCategory::EncounterHex,
        TableScope::Hex {
            hex: HexId::new("1106"),
        },
    ));
    reg.register(d2(
        "road_table",
        TableCategory::EncounterFairyRoad,
        TableScope::FairyRoad {
            road: Some("buttercup_lane".into()),
        },
    ));
    let sel = EncounterSelector::new(Arc::new(reg));

    let mut ctx = EncounterContext::in_settlement("prigwort", TimeOfDay::Night)
        .with_hex(HexId::new("1106"))
        .on_fairy_road(Some("buttercup_lane".into()))
        .with_unseason(Unseason::Vague)
        .with_region(Region::Aldweald);
    ctx.settlement = Some("prigwort".into());

    let expect = |ctx: &EncounterContext, level: SelectionLevel, id: &str| {
        let s = sel.select(ctx).unwrap();
        assert_eq!((s.level, s.table.id.as_str()), (level, id));
    };

    expect(&ctx, SelectionLevel::Hex, "hex_table");
    ctx.hex = None;
    expect(&ctx, SelectionLevel::Settlement, "settlement_prigwort_night");
    ctx.settlement = None;
    expect(&ctx, SelectionLevel::FairyRoad, "road_table");
    ctx.fairy_road = Some("other_road".into());
    expect(&ctx, SelectionLevel::FairyRoad, "encounter_fairy_road");
    ctx.on_fairy_road = false;
    expect(&ctx, SelectionLevel::Unseason, "encounter_unseason_vague");
    ctx.unseason = None;
    expect(&ctx, SelectionLevel::Region, "encounter_regional_aldweald");
    ctx.region = None;
    expect(&ctx, SelectionLevel::Common, "encounter_type_night_camp");
}

#[test]
fn settlement_time_falls_back_to_day_or_night() {
    let sel = builtin_selector();
    let at = |time| {
        sel.select(&EncounterContext::in_settlement("prigwort", time))
            .map(|s| s.table.id.clone())
    };
    assert_eq!(at(TimeOfDay::Dawn).as_deref(), Some("settlement_prigwort_day"));
    assert_eq!(at(TimeOfDay::Day).as_deref(), Some("settlement_prigwort_day"));
    assert_eq!(at(TimeOfDay::Dusk).as_deref(), Some("settlement_prigwort_night"));
}

#[test]
fn untimed_settlement_table_is_the_last_resort() {
    let reg = TableRegistry::new();
    reg.register(d2(
        "lankshorn_any",
        TableCategory::EncounterSettlement,
        TableScope::Settlement {
            settlement: "lankshorn".into(),
            time: None,
        },
    ));
    reg.register(d2(
        "lankshorn_dusk",
        TableCategory::EncounterSettlement,
        TableScope::Settlement {
            settlement: "lankshorn".into(),
            time: Some(TimeOfDay::Dusk),
        },
    ));
    let sel = EncounterSelector::new(Arc::new(reg));
    let id = |time| {
        sel.select(&EncounterContext::in_settlement("lankshorn", time))
            .map(|s| s.table.id.clone())
    };
    assert_eq!(id(TimeOfDay::Dusk).as_deref(), Some("lankshorn_dusk"));
    assert_eq!(id(TimeOfDay::Night).as_deref(), Some("lankshorn_any"));
    assert_eq!(id(TimeOfDay::Day).as_deref(), Some("lankshorn_any"));
}

#[test]
fn common_table_follows_the_situation() {
    let sel = builtin_selector();
    let pick = |ctx: EncounterContext| sel.select(&ctx).map(|s| s.table.id.clone());
    assert_eq!(
        pick(EncounterContext::wilderness(TimeOfDay::Day).with_road(true)).as_deref(),
        Some("encounter_type_day_road")
    );
    assert_eq!(
        pick(EncounterContext::wilderness(TimeOfDay::Dawn)).as_deref(),
        Some("encounter_type_day_wild")
    );
    assert_eq!(
        pick(EncounterContext::wilderness(TimeOfDay::Night).with_fire(true)).as_deref(),
        Some("encounter_type_night_fire")
    );
}

// ---------------------------------------------------------------------------
// Deferral
// ---------------------------------------------------------------------------

#[test]
fn regional_entry_rolls_the_region_once() {
    let sel = builtin_selector();
    let ctx = EncounterContext::wilderness(TimeOfDay::Day).with_region(Region::Nagwood);
    // d8 = 6 -> regional; d20 = 1 on the Nagwood table, then its quantity.
    let mut rng = ScriptedRolls::new([6, 1, 2, 2, 2]);
    let r = rolled(sel.select_and_roll(&ctx, &mut rng).unwrap());
    assert_eq!(r.level, SelectionLevel::Common);
    let regional = r.regional.as_ref().unwrap();
    assert_eq!(regional.table_id, "encounter_regional_nagwood");
    assert_eq!(r.result.sub_results.last(), Some(regional));
    assert_eq!(regional.dice, vec![1]);
}

#[test]
fn deferral_without_a_region_is_left_alone() {
    let sel = builtin_selector();
    let ctx = EncounterContext::wilderness(TimeOfDay::Day);
    let mut rng = ScriptedRolls::new([7]);
    let r = rolled(sel.select_and_roll(&ctx, &mut rng).unwrap());
    assert!(r.regional.is_none());
    assert!(r.result.defers_to_region());
    assert_eq!(rng.draws(), 1);
}

#[test]
fn deferral_is_capped_at_one_hop() {
    let reg = TableRegistry::new();
    let deferring = |id: &str, category, scope| {
        RollTable::new(id, id, category, 1, 1)
            .entry(TableEntry::single(1, id).deferring_to_region())
            .scoped(scope)
    };
    reg.register(deferring(
        "hex_loop",
        TableCategory::EncounterHex,
        TableScope::Hex {
            hex: HexId::new("0505"),
        },
    ));
    reg.register(deferring(
        "region_loop",
        TableCategory::EncounterRegional,
        TableScope::Region {
            region: Region::HighWold,
        },
    ));
    let sel = EncounterSelector::new(Arc::new(reg));
    let ctx = EncounterContext::default()
        .with_hex(HexId::new("0505"))
        .with_region(Region::HighWold);
    let mut rng = ScriptedRolls::new([1]);
    let r = rolled(sel.select_and_roll(&ctx, &mut rng).unwrap());
    assert_eq!(rng.draws(), 2);
    assert_eq!(r.result.chain().len(), 2);
    assert!(r.regional.unwrap().sub_results.is_empty());
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Replaying the recorded draws reproduces the same roll, byte for byte.
    #[test]
    fn select_and_roll_replays(seed in any::<u64>()) {
        let sel = builtin_selector();
        let ctx = EncounterContext::wilderness(TimeOfDay::Night).with_region(Region::FeverMarsh);
        let mut recorder = Recorded::new(StdRng::seed_from_u64(seed));
        let first = sel.select_and_roll(&ctx, &mut recorder).unwrap();
        let mut replay = recorder.to_script();
        let second = sel.select_and_roll(&ctx, &mut replay).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
