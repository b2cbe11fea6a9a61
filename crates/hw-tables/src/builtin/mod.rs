//! The standard tables every registry starts with.

pub mod encounters;

pub use encounters::{creature_table_id, regional_table_id, unseason_table_id};

use hw_core::{Season, TimeOfDay};

use crate::dice::DiceExpression;
use crate::table::{RollTable, TableCategory, TableEntry, TableScope};

/// Id of the generic fairy-road encounter table.
pub const FAIRY_ROAD_TABLE_ID: &str = "encounter_fairy_road";

/// Every built-in table.
pub fn standard_tables() -> Vec<RollTable> {
    let mut tables = vec![reaction(), morale_modifiers(), surprise()];
    tables.extend(Season::ALL.into_iter().map(weather));
    tables.extend(encounters::encounter_type_tables());
    tables.extend(encounters::creature_tables());
    tables.extend(encounters::regional_tables());
    tables.extend(encounters::unseason_tables());
    tables.push(fairy_road());
    tables.extend(settlement_tables());
    tables
}

fn effect(min: i32, max: i32, title: &str, result: &str, effect: &str) -> TableEntry {
    TableEntry::new(min, max, result)
        .with_title(title)
        .with_effect(effect)
}

/// 2d6 reaction roll, adjusted by the speaker's charisma.
pub fn reaction() -> RollTable {
    RollTable::new("reaction_2d6", "Reaction Roll", TableCategory::Reaction, 2, 6)
        .described("Roll 2d6 + CHA modifier when meeting creatures")
        .entry(effect(
            2,
            2,
            "Hostile, attacks",
            "The creature attacks immediately.",
            "immediate_attack",
        ))
        .entry(effect(3, 5, "Hostile", "The creature is hostile and may attack.", "hostile"))
        .entry(effect(
            6,
            8,
            "Uncertain",
            "The creature is uncertain and may be swayed.",
            "uncertain",
        ))
        .entry(effect(
            9,
            11,
            "Indifferent",
            "The creature is not interested in a fight and may hear offers.",
            "indifferent",
        ))
        .entry(effect(12, 12, "Friendly", "The creature is friendly and helpful.", "friendly"))
}

/// d6 reference of situational morale modifiers.
pub fn morale_modifiers() -> RollTable {
    let row = |roll: i32, title: &str, modifier: i32| {
        TableEntry::single(roll, format!("{modifier:+} to morale"))
            .with_title(title)
            .with_modifier(modifier)
    };
    RollTable::new(
        "morale_modifiers",
        "Morale Situational Modifiers",
        TableCategory::Morale,
        1,
        6,
    )
    .described("Modifiers to apply to morale checks")
    .entry(row(1, "First ally killed", -1))
    .entry(row(2, "Half of allies killed", -2))
    .entry(row(3, "Leader killed", -2))
    .entry(row(4, "Outnumbered two to one", -1))
    .entry(row(5, "Clearly winning", 1))
    .entry(row(6, "Defending lair or treasure", 2))
}

/// d6 surprise check, rolled once per side.
pub fn surprise() -> RollTable {
    RollTable::new("surprise_d6", "Surprise Check", TableCategory::Surprise, 1, 6)
        .described("Roll 1d6 for each side; 1-2 means surprised")
        .entry(TableEntry::new(1, 2, "Surprised").with_effect("surprised"))
        .entry(TableEntry::new(3, 6, "Not surprised").with_effect("not_surprised"))
}

/// Daily weather for one season.
pub fn weather(season: Season) -> RollTable {
    let rows: &[(i32, i32, &str)] = match season {
        Season::Spring => &[
            (1, 2, "Clear skies"),
            (3, 4, "Overcast"),
            (5, 5, "Light rain"),
            (6, 6, "Heavy rain"),
        ],
        Season::Summer => &[
            (1, 3, "Clear and warm"),
            (4, 4, "Overcast"),
            (5, 5, "Hot and humid"),
            (6, 6, "Thunderstorm"),
        ],
        Season::Autumn => &[
            (1, 2, "Clear and cool"),
            (3, 4, "Overcast and misty"),
            (5, 5, "Rain"),
            (6, 6, "Heavy fog"),
        ],
        Season::Winter => &[
            (1, 1, "Clear and cold"),
            (2, 3, "Overcast"),
            (4, 4, "Light snow"),
            (5, 5, "Heavy snow"),
            (6, 6, "Blizzard"),
        ],
    };
    let mut name = season.to_string();
    if let Some(first) = name.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    RollTable::new(
        format!("weather_{season}"),
        format!("Weather ({name})"),
        TableCategory::Weather,
        1,
        6,
    )
    .described(format!("Daily weather for {season}"))
    .scoped(TableScope::Season { season })
    .entries(rows.iter().map(|&(min, max, text)| TableEntry::new(min, max, text)))
}

/// d8 encounters on any fairy road.
pub fn fairy_road() -> RollTable {
    let creature = |roll: i32, text: &str, monster: &str, number: &str| {
        let entry = TableEntry::single(roll, text).with_monster(monster);
        match DiceExpression::parse(number) {
            Ok(q) => entry.with_quantity(q),
            Err(_) => entry,
        }
    };
    RollTable::new(
        FAIRY_ROAD_TABLE_ID,
        "Fairy Road Encounters",
        TableCategory::EncounterFairyRoad,
        1,
        8,
    )
    .described("Who walks the fairy roads")
    .scoped(TableScope::FairyRoad { road: None })
    .entry(creature(1, "Sprites dancing in a ring", "sprite", "3d6"))
    .entry(creature(2, "A grimalkin watching from the hedge", "grimalkin", "1"))
    .entry(creature(3, "An elf courtier and retinue", "elf_courtier", "1d4+1"))
    .entry(creature(4, "A pooka in the shape of a black horse", "pooka", "1"))
    .entry(creature(5, "Woodgrue revellers", "woodgrue", "2d4"))
    .entry(TableEntry::single(6, "A lost mortal child, years from home").with_npc("lost_child"))
    .entry(TableEntry::single(7, "A riderless fairy horse").with_monster("fairy_horse"))
    .entry(
        TableEntry::single(8, "Creatures of the mortal land stray onto the road")
            .deferring_to_region(),
    )
}

fn prigwort(time: TimeOfDay, rows: [(&str, Option<&str>); 6]) -> RollTable {
    RollTable::new(
        format!("settlement_prigwort_{time}"),
        format!("Prigwort Streets ({time})"),
        TableCategory::EncounterSettlement,
        1,
        6,
    )
    .scoped(TableScope::Settlement {
        settlement: "prigwort".into(),
        time: Some(time),
    })
    .entries(rows.into_iter().zip(1..).map(|((text, npc), roll)| {
        let entry = TableEntry::single(roll, text);
        match npc {
            Some(id) => entry.with_npc(id),
            None => entry,
        }
    }))
}

/// Street encounters in Prigwort, by day and by night.
pub fn settlement_tables() -> Vec<RollTable> {
    vec![
        prigwort(
            TimeOfDay::Day,
            [
                ("A drunk drover picks a quarrel", Some("drover")),
                ("Watchmen ask the party's business", Some("town_watch")),
                ("A pedlar hawks remedies and charms", Some("pedlar")),
                ("Pilgrims bound for the church of St Waylaine", Some("pilgrim")),
                ("A pickpocket works the crowd", Some("pickpocket")),
                ("Market day bustle, nothing untoward", None),
            ],
        ),
        prigwort(
            TimeOfDay::Night,
            [
                ("Footpads wait in an alley", Some("footpad")),
                ("The watch patrols with lanterns", Some("town_watch")),
                ("Revellers spill out of the tavern", Some("reveller")),
                ("A black cat crosses the party's path", None),
                ("A hooded figure follows at a distance", Some("hooded_stranger")),
                ("Shuttered streets and silence", None),
            ],
        ),
    ]
}
