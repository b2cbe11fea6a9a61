//! Wilderness encounter content: the encounter-type tables, the four
//! creature tables, one table per region and the unseason tables.

use hw_core::{Region, TimeOfDay, Unseason};

use crate::table::{RollTable, TableCategory, TableCondition, TableEntry, TableScope};

use CreatureKind::{Adventurer, Animal, Monster, Mortal, Party};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CreatureKind {
    Animal,
    Monster,
    Mortal,
    Adventurer,
    Party,
}

/// Name, number appearing, kind, reference id.
type Creature = (&'static str, &'static str, CreatureKind, &'static str);

/// Table id of the creature table for an encounter type.
pub fn creature_table_id(kind: &str) -> String {
    format!("encounter_{kind}")
}

/// Table id of a region's encounter table.
pub fn regional_table_id(region: Region) -> String {
    format!("encounter_regional_{}", region.key())
}

/// Table id of an unseason's encounter table.
pub fn unseason_table_id(unseason: Unseason) -> String {
    format!("encounter_unseason_{unseason}")
}

fn creature_entry(roll: i32, &(name, number, kind, id): &Creature) -> TableEntry {
    let mut entry = TableEntry::single(roll, name);
    entry.quantity = number.parse().ok();
    match kind {
        Animal | Monster => entry.with_monster(id),
        Mortal | Adventurer | Party => entry.with_npc(id),
    }
}

fn creature_table(
    id: String,
    name: String,
    category: TableCategory,
    rows: &[Creature],
) -> RollTable {
    let die = rows.len() as u32;
    RollTable::new(id, name, category, 1, die).entries(
        rows.iter()
            .enumerate()
            .map(|(i, c)| creature_entry(i as i32 + 1, c)),
    )
}

// ---------------------------------------------------------------------------
// Encounter type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Kind {
    Animal,
    Monster,
    Mortal,
    Sentient,
    Regional,
}

impl Kind {
    fn entry(self, min: i32, max: i32) -> TableEntry {
        let sub = |key: &str, text: &str| {
            TableEntry::new(min, max, text)
                .with_title(key)
                .with_sub_table(creature_table_id(key))
        };
        match self {
            Self::Animal => sub("animal", "Animals"),
            Self::Monster => sub("monster", "A monster"),
            Self::Mortal => sub("mortal", "Mortals"),
            Self::Sentient => sub("sentient", "Sentient beings"),
            Self::Regional => TableEntry::new(min, max, "Creatures native to the region")
                .with_title("regional")
                .deferring_to_region(),
        }
    }
}

fn encounter_type(
    id: &str,
    name: &str,
    conditions: [TableCondition; 2],
    rows: &[(i32, i32, Kind)],
) -> RollTable {
    let mut table = RollTable::new(id, name, TableCategory::EncounterCommon, 1, 8)
        .described("What kind of creature the party meets")
        .entries(rows.iter().map(|&(min, max, kind)| kind.entry(min, max)));
    table.conditions.extend(conditions);
    table
}

fn daytime(on_road: bool) -> [TableCondition; 2] {
    [
        TableCondition::TimeOfDay {
            time: TimeOfDay::Day,
        },
        TableCondition::OnRoad { on_road },
    ]
}

fn nighttime(has_fire: bool) -> [TableCondition; 2] {
    [
        TableCondition::TimeOfDay {
            time: TimeOfDay::Night,
        },
        TableCondition::HasFire { has_fire },
    ]
}

/// The four global encounter-type tables, one per situation.
pub fn encounter_type_tables() -> Vec<RollTable> {
    use Kind as K;
    vec![
        encounter_type(
            "encounter_type_day_road",
            "Encounter Type (Day, Road)",
            daytime(true),
            &[
                (1, 1, K::Animal),
                (2, 2, K::Monster),
                (3, 4, K::Mortal),
                (5, 6, K::Sentient),
                (7, 8, K::Regional),
            ],
        ),
        encounter_type(
            "encounter_type_day_wild",
            "Encounter Type (Day, Wild)",
            daytime(false),
            &[
                (1, 1, K::Animal),
                (2, 2, K::Monster),
                (3, 3, K::Mortal),
                (4, 4, K::Sentient),
                (5, 8, K::Regional),
            ],
        ),
        encounter_type(
            "encounter_type_night_fire",
            "Encounter Type (Night, Fire)",
            nighttime(true),
            &[
                (1, 2, K::Monster),
                (3, 4, K::Mortal),
                (5, 6, K::Sentient),
                (7, 8, K::Regional),
            ],
        ),
        encounter_type(
            "encounter_type_night_camp",
            "Encounter Type (Night, No Fire)",
            nighttime(false),
            &[
                (1, 2, K::Animal),
                (3, 5, K::Monster),
                (6, 8, K::Regional),
            ],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Creature tables
// ---------------------------------------------------------------------------

/// The animal, monster, mortal and sentient d20 tables.
pub fn creature_tables() -> Vec<RollTable> {
    [
        ("animal", "Animals", ANIMAL),
        ("monster", "Monsters", MONSTER),
        ("mortal", "Mortals", MORTAL),
        ("sentient", "Sentients", SENTIENT),
    ]
    .into_iter()
    .map(|(key, name, rows)| {
        creature_table(
            creature_table_id(key),
            name.to_string(),
            TableCategory::EncounterType,
            rows,
        )
    })
    .collect()
}

fn regional_rows(region: Region) -> &'static [Creature] {
    match region {
        Region::Aldweald => ALDWEALD,
        Region::Aquatic => AQUATIC,
        Region::Dwelmfurgh => DWELMFURGH,
        Region::FeverMarsh => FEVER_MARSH,
        Region::HagsAddle => HAGS_ADDLE,
        Region::HighWold => HIGH_WOLD,
        Region::Mulchgrove => MULCHGROVE,
        Region::Nagwood => NAGWOOD,
        Region::NorthernScratch => NORTHERN_SCRATCH,
        Region::TableDowns => TABLE_DOWNS,
        Region::Tithelands => TITHELANDS,
        Region::ValleyOfWiseBeasts => VALLEY_OF_WISE_BEASTS,
    }
}

/// One d20 table per region, scoped to that region.
pub fn regional_tables() -> Vec<RollTable> {
    Region::ALL
        .into_iter()
        .map(|region| {
            creature_table(
                regional_table_id(region),
                format!("{region} Encounters"),
                TableCategory::EncounterRegional,
                regional_rows(region),
            )
            .scoped(TableScope::Region { region })
        })
        .collect()
}

/// Encounter tables for the unseasons that have one.
pub fn unseason_tables() -> Vec<RollTable> {
    [
        (Unseason::Chame, "Chame", CHAME),
        (Unseason::Vague, "Vague", VAGUE),
    ]
    .into_iter()
    .map(|(unseason, name, rows)| {
        creature_table(
            unseason_table_id(unseason),
            format!("{name} Encounters"),
            TableCategory::EncounterUnseason,
            rows,
        )
        .scoped(TableScope::Unseason { unseason })
    })
    .collect()
}

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

const ANIMAL: &[Creature] = &[
    ("Bat, Giant", "1d10", Animal, "bat_giant"),
    ("Bear", "1d4", Animal, "bear"),
    ("Boar", "1d6", Animal, "boar"),
    ("Burrowing Beetle", "2d4", Animal, "burrowing_beetle"),
    ("Carrion Worm", "1d3", Animal, "carrion_worm"),
    ("Centipede, Giant", "1d8", Animal, "centipede_giant"),
    ("False Unicorn", "3d4", Animal, "false_unicorn"),
    ("Fire Beetle, Giant", "2d6", Animal, "fire_beetle_giant"),
    ("Fly, Giant", "2d6", Animal, "fly_giant"),
    ("Insect Swarm", "1d3", Animal, "insect_swarm"),
    ("Rapacious Beetle", "2d4", Animal, "rapacious_beetle"),
    ("Rat, Giant", "3d6", Animal, "rat_giant"),
    ("Red Deer", "3d10", Animal, "red_deer"),
    ("Shaggy Mammoth", "2d8", Animal, "shaggy_mammoth"),
    ("Snake (Adder)", "1d8", Animal, "snake_adder"),
    ("Stirge", "2d6", Animal, "stirge"),
    ("Toad, Giant", "1d4", Animal, "toad_giant"),
    ("Weasel, Giant", "1d6", Animal, "weasel_giant"),
    ("Wolf", "3d6", Animal, "wolf"),
    ("Yegril", "3d8", Animal, "yegril"),
];

const MONSTER: &[Creature] = &[
    ("Ant, Giant", "3d4", Animal, "ant_giant"),
    ("Centaur (Bestial)", "1", Monster, "centaur_bestial"),
    ("Cockatrice", "1d4", Monster, "cockatrice"),
    ("Ghoul", "2d4", Monster, "ghoul"),
    ("Griffon", "2d8", Animal, "griffon"),
    ("Headless Rider", "1d4", Monster, "headless_rider"),
    ("Mogglewomp", "1", Monster, "mogglewomp"),
    ("Mugwudge", "1d4", Monster, "mugwudge"),
    ("Ogre", "1d6", Monster, "ogre"),
    ("Owlbear", "1d4", Animal, "owlbear"),
    ("Root Thing", "1d4", Monster, "root_thing"),
    ("Snail, Giant (Mutant)", "1d3", Monster, "snail_giant_mutant"),
    ("Spinning Spider, Giant", "1d3", Animal, "spinning_spider_giant"),
    ("Stirge", "2d6", Animal, "stirge"),
    ("Treowere", "1d8", Monster, "treowere"),
    ("Werewolf", "1d6", Monster, "werewolf"),
    ("Wolf, Dire", "2d4", Animal, "wolf_dire"),
    ("Wyrm (Black Bile)", "1", Monster, "wyrm_black_bile"),
    ("Wyrm (Blood)", "1", Monster, "wyrm_blood"),
    ("Yickerwill", "1d6", Monster, "yickerwill"),
];

const MORTAL: &[Creature] = &[
    ("Adventuring Party", "1", Party, "adventuring_party"),
    ("Cleric", "1d20", Adventurer, "cleric"),
    ("Crier", "1d6", Mortal, "crier"),
    ("Drune (Cottager)", "1d4", Monster, "drune_cottager"),
    ("Fighter", "2d6", Adventurer, "fighter"),
    ("Fortune-Teller", "1d3", Mortal, "fortune_teller"),
    ("Friar", "1d6", Adventurer, "friar"),
    ("Hunter", "3d6", Adventurer, "hunter"),
    ("Knight", "2d6", Adventurer, "knight"),
    ("Lost Soul", "1d4", Mortal, "lost_soul"),
    ("Magician", "1d4", Adventurer, "magician"),
    ("Merchant", "1d20", Mortal, "merchant"),
    ("Pedlar", "1d4", Mortal, "pedlar"),
    ("Pedlar", "1d4", Mortal, "pedlar"),
    ("Pilgrim", "4d8", Mortal, "pilgrim"),
    ("Priest", "1d6", Mortal, "priest"),
    ("Thief (Bandit)", "3d10", Adventurer, "thief_bandit"),
    ("Thief (Bandit)", "3d10", Adventurer, "thief_bandit"),
    ("Villager", "2d10", Mortal, "villager"),
    ("Witch", "1d6", Monster, "witch"),
];

const SENTIENT: &[Creature] = &[
    ("Barrowbogey", "2d6", Monster, "barrowbogey"),
    ("Breggle (Shorthorn)", "3d10", Monster, "breggle_shorthorn"),
    ("Crookhorn", "3d10", Monster, "crookhorn"),
    ("Deorling (Stag)", "1d6", Monster, "deorling_stag"),
    ("Elf (Courtier or Knight)", "1d4", Monster, "elf_courtier"),
    ("Elf (Wanderer)", "1d6", Monster, "elf_wanderer"),
    ("Goblin", "2d6", Monster, "goblin"),
    ("Grimalkin", "1d4", Monster, "grimalkin"),
    ("Mossling", "2d8", Monster, "mossling"),
    ("Nutcap", "2d6", Monster, "nutcap"),
    ("Redcap", "2d6", Monster, "redcap"),
    ("Scarecrow", "1d4", Monster, "scarecrow"),
    ("Scrabey", "1d6", Monster, "scrabey"),
    ("Shape-Stealer", "1d6", Monster, "shape_stealer"),
    ("Sprite", "3d6", Monster, "sprite"),
    ("Talking Animal", "1d4", Monster, "talking_animal"),
    ("Treowere", "1d8", Monster, "treowere"),
    ("Troll", "1d3", Monster, "troll"),
    ("Wodewose", "1d6", Monster, "wodewose"),
    ("Woodgrue", "3d6", Monster, "woodgrue"),
];

const ALDWEALD: &[Creature] = &[
    ("Antler Wraith", "2d4", Monster, "antler_wraith"),
    ("Breggle (Shorthorn)", "3d10", Monster, "breggle_shorthorn"),
    ("Centaur (Sylvan)", "2d6", Monster, "centaur_sylvan"),
    ("Deorling (Doe)", "4d4", Monster, "deorling_doe"),
    ("Elf (Knight)", "1d4", Monster, "elf_knight"),
    ("Elf (Wanderer)", "1d6", Monster, "elf_wanderer"),
    ("Fairy Horse", "1", Monster, "fairy_horse"),
    ("Gelatinous Hulk", "1d4", Monster, "gelatinous_hulk"),
    ("Gloam", "1", Monster, "gloam"),
    ("Goblin", "2d6", Monster, "goblin"),
    ("Grimalkin", "1d4", Monster, "grimalkin"),
    ("Pedlar", "1d4", Mortal, "pedlar"),
    ("Redcap", "2d6", Monster, "redcap"),
    ("Snail, Giant (Psionic)", "1", Monster, "snail_giant_psionic"),
    ("Sprite", "3d6", Monster, "sprite"),
    ("Thief (Bandit)", "3d10", Adventurer, "thief_bandit"),
    ("Unicorn (Blessed)", "1d6", Monster, "unicorn_blessed"),
    ("Wild Hunt", "1", Monster, "wild_hunt"),
    ("Witch", "1d6", Monster, "witch"),
    ("Woodgrue", "3d6", Monster, "woodgrue"),
];

const AQUATIC: &[Creature] = &[
    ("Adventuring Party", "1", Party, "adventuring_party"),
    ("Angler", "2d4", Mortal, "angler"),
    ("Boggin", "1d6", Monster, "boggin"),
    ("Catfish, Giant", "1d2", Animal, "catfish_giant"),
    ("Crab, Giant", "1d6", Animal, "crab_giant"),
    ("Fly, Giant", "2d6", Animal, "fly_giant"),
    ("Insect Swarm", "1d3", Animal, "insect_swarm"),
    ("Kelpie", "1", Monster, "kelpie"),
    ("Killer Bee", "2d6", Animal, "killer_bee"),
    ("Leech, Giant", "1d4", Animal, "leech_giant"),
    ("Madtom", "1d12", Monster, "madtom"),
    ("Merchant", "1d20", Mortal, "merchant"),
    ("Merfaun", "2d6", Monster, "merfaun"),
    ("Pedlar", "1d4", Mortal, "pedlar"),
    ("Pike, Giant", "1d4", Animal, "pike_giant"),
    ("Stirge", "2d6", Animal, "stirge"),
    ("Thief (Pirate)", "3d10", Adventurer, "thief_pirate"),
    ("Toad, Giant", "1d4", Animal, "toad_giant"),
    ("Water Termite, Giant", "1d3", Animal, "water_termite_giant"),
    ("Wyrm (Phlegm)", "1", Monster, "wyrm_phlegm"),
];

const DWELMFURGH: &[Creature] = &[
    ("Antler Wraith", "2d4", Monster, "antler_wraith"),
    ("Basilisk", "1d6", Monster, "basilisk"),
    ("Brambling", "1d4", Monster, "brambling"),
    ("Centipede, Giant", "1d8", Animal, "centipede_giant"),
    ("Crookhorn", "3d10", Monster, "crookhorn"),
    ("Drune (Audrune)", "1", Monster, "drune_audrune"),
    ("Drune (Braithmaid)", "1d4", Monster, "drune_braithmaid"),
    ("Drune (Cottager)", "1d4", Monster, "drune_cottager"),
    ("Drune (Cottager)", "2d6", Monster, "drune_cottager"),
    ("Drune (Drunewife)", "1", Monster, "drune_drunewife"),
    ("Lost Soul", "1d4", Mortal, "lost_soul"),
    ("Shadow", "1d8", Monster, "shadow"),
    ("Skeleton", "3d6", Monster, "skeleton"),
    ("Spinning Spider, Giant", "1d3", Animal, "spinning_spider_giant"),
    ("Sprite", "3d6", Monster, "sprite"),
    ("Thief (Bandit)", "3d10", Adventurer, "thief_bandit"),
    ("Wicker Giant", "1", Monster, "wicker_giant"),
    ("Wight", "1d6", Monster, "wight"),
    ("Witch", "1d6", Monster, "witch"),
    ("Wyrm (Yellow Bile)", "1", Monster, "wyrm_yellow_bile"),
];

const FEVER_MARSH: &[Creature] = &[
    ("Bat, Vampire", "1d10", Animal, "bat_vampire"),
    ("Black Tentacles", "1d4", Monster, "black_tentacles"),
    ("Bog Salamander", "1d3", Monster, "bog_salamander"),
    ("Centaur (Bestial)", "1", Monster, "centaur_bestial"),
    ("Crookhorn", "3d10", Monster, "crookhorn"),
    ("Fly, Giant", "2d6", Animal, "fly_giant"),
    ("Galosher", "2d6", Monster, "galosher"),
    ("Gelatinous Hulk", "1d4", Monster, "gelatinous_hulk"),
    ("Harridan", "1d3", Monster, "harridan"),
    ("Insect Swarm", "1d3", Animal, "insect_swarm"),
    ("Jack-o'-Lantern", "1d8", Monster, "jack_o_lantern"),
    ("Leech, Giant", "1d4", Animal, "leech_giant"),
    ("Madtom", "1d12", Monster, "madtom"),
    ("Marsh Lantern", "1d12", Monster, "marsh_lantern"),
    ("Mugwudge", "1d4", Monster, "mugwudge"),
    ("Redcap", "2d6", Monster, "redcap"),
    ("Shadow", "1d8", Monster, "shadow"),
    ("Toad, Giant", "1d4", Animal, "toad_giant"),
    ("Troll", "1d3", Monster, "troll"),
    ("Wyrm (Phlegm)", "1", Monster, "wyrm_phlegm"),
];

const HAGS_ADDLE: &[Creature] = &[
    ("Banshee", "1", Monster, "banshee"),
    ("Bat, Giant", "1d10", Animal, "bat_giant"),
    ("Black Tentacles", "1d4", Monster, "black_tentacles"),
    ("Bog Corpse", "2d4", Monster, "bog_corpse"),
    ("Bog Salamander", "1d3", Monster, "bog_salamander"),
    ("Boggin", "1d6", Monster, "boggin"),
    ("Galosher", "2d6", Monster, "galosher"),
    ("Ghoul", "2d4", Monster, "ghoul"),
    ("Gloam", "1", Monster, "gloam"),
    ("Leech, Giant", "1d4", Animal, "leech_giant"),
    ("Marsh Lantern", "1d12", Monster, "marsh_lantern"),
    ("Mugwudge", "1d4", Monster, "mugwudge"),
    ("Shadow", "1d8", Monster, "shadow"),
    ("Swamp Sloth", "1d6", Animal, "swamp_sloth"),
    ("Swamp Spider, Giant", "1d3", Animal, "swamp_spider_giant"),
    ("The Hag", "1", Monster, "the_hag"),
    ("Toad, Giant", "1d4", Animal, "toad_giant"),
    ("Troll", "1d3", Monster, "troll"),
    ("Unicorn (Corrupt)", "1d6", Monster, "unicorn_corrupt"),
    ("Wronguncle", "1", Monster, "wronguncle"),
];

const HIGH_WOLD: &[Creature] = &[
    ("Barrowbogey", "2d6", Monster, "barrowbogey"),
    ("Breggle (Longhorn)", "2d4", Monster, "breggle_longhorn"),
    ("Breggle (Shorthorn)", "3d10", Monster, "breggle_shorthorn"),
    ("Breggle (Shorthorn)", "3d10", Monster, "breggle_shorthorn"),
    ("Crier", "1d6", Mortal, "crier"),
    ("Devil Goat", "1d4", Monster, "devil_goat"),
    ("Drune (Braithmaid)", "1d4", Monster, "drune_braithmaid"),
    ("Drune (Cottager)", "1d4", Monster, "drune_cottager"),
    ("Elf (Knight)", "1d4", Monster, "elf_knight"),
    ("Goblin", "2d6", Monster, "goblin"),
    ("Grimalkin", "1d4", Monster, "grimalkin"),
    ("Knight", "2d6", Adventurer, "knight"),
    ("Merchant", "1d20", Mortal, "merchant"),
    ("Pedlar", "1d4", Mortal, "pedlar"),
    ("Priest", "1d6", Mortal, "priest"),
    ("Scrabey", "1d6", Monster, "scrabey"),
    ("Thief (Bandit)", "3d10", Adventurer, "thief_bandit"),
    ("Witch", "1d6", Monster, "witch"),
    ("Witch Owl", "1d6", Monster, "witch_owl"),
    ("Woodgrue", "3d6", Monster, "woodgrue"),
];

const MULCHGROVE: &[Creature] = &[
    ("Bat, Vampire", "1d10", Animal, "bat_vampire"),
    ("Bog Corpse", "2d4", Monster, "bog_corpse"),
    ("Bog Salamander", "1d3", Monster, "bog_salamander"),
    ("Brainconk", "1d8", Monster, "brainconk"),
    ("Gelatinous Hulk", "1d4", Monster, "gelatinous_hulk"),
    ("Jack-o'-Lantern", "1d8", Monster, "jack_o_lantern"),
    ("Mossling", "2d8", Monster, "mossling"),
    ("Mossling", "2d8", Monster, "mossling"),
    ("Mossling", "2d8", Monster, "mossling"),
    ("Mossling", "4d8", Monster, "mossling"),
    ("Mould Oracle", "1d3", Monster, "mould_oracle"),
    ("Ochre Slime-Hulk", "1", Monster, "ochre_slime_hulk"),
    ("Ochre Slime-Hulk", "1", Monster, "ochre_slime_hulk"),
    ("Onyx Blob", "1", Monster, "onyx_blob"),
    ("Pook Morel", "2d10", Monster, "pook_morel"),
    ("Pook Morel", "2d10", Monster, "pook_morel"),
    ("Redslob", "1d4", Monster, "redslob"),
    ("Redslob", "1d4", Monster, "redslob"),
    ("Wodewose", "1d6", Monster, "wodewose"),
    ("Wronguncle", "1", Monster, "wronguncle"),
];

const NAGWOOD: &[Creature] = &[
    ("Atanuwë", "1", Monster, "atanuwe"),
    ("Bat, Vampire", "1d10", Animal, "bat_vampire"),
    ("Bog Corpse", "2d4", Monster, "bog_corpse"),
    ("Centaur (Bestial)", "1", Monster, "centaur_bestial"),
    ("Crookhorn", "3d10", Monster, "crookhorn"),
    ("Crookhorn", "3d10", Monster, "crookhorn"),
    ("Crookhorn", "6d10", Monster, "crookhorn"),
    ("Harpy", "2d4", Monster, "harpy"),
    ("Harridan", "1d3", Monster, "harridan"),
    ("Manticore", "1d4", Monster, "manticore"),
    ("Ochre Slime-Hulk", "1", Monster, "ochre_slime_hulk"),
    ("Ogre", "1d6", Monster, "ogre"),
    ("Ogre", "1d6", Monster, "ogre"),
    ("Owlbear", "1d4", Animal, "owlbear"),
    ("Snail, Giant (Mutant)", "1d3", Monster, "snail_giant_mutant"),
    ("Spinning Spider, Giant", "1d4", Monster, "spinning_spider_giant"),
    ("Treowere (Chaotic)", "1d8", Monster, "treowere_chaotic"),
    ("Unicorn (Corrupt)", "1d6", Monster, "unicorn_corrupt"),
    ("Wolf, Dire", "2d4", Animal, "wolf_dire"),
    ("Wyrm (Black Bile)", "1", Monster, "wyrm_black_bile"),
];

const NORTHERN_SCRATCH: &[Creature] = &[
    ("Banshee", "1", Monster, "banshee"),
    ("Bat, Vampire", "1d10", Animal, "bat_vampire"),
    ("Black Tentacles", "1d4", Monster, "black_tentacles"),
    ("Bog Corpse", "2d4", Monster, "bog_corpse"),
    ("Bog Salamander", "1d3", Monster, "bog_salamander"),
    ("Deorling (Stag)", "1d6", Monster, "deorling_stag"),
    ("Fomorian", "1d3", Monster, "fomorian"),
    ("Galosher", "2d6", Monster, "galosher"),
    ("Gloam", "1", Monster, "gloam"),
    ("Harridan", "1d3", Monster, "harridan"),
    ("Leech, Giant", "1d4", Animal, "leech_giant"),
    ("Madtom", "1d12", Monster, "madtom"),
    ("Marsh Lantern", "1d12", Monster, "marsh_lantern"),
    ("Mugwudge", "1d4", Monster, "mugwudge"),
    ("Redcap", "2d6", Monster, "redcap"),
    ("Scarecrow", "1d4", Monster, "scarecrow"),
    ("Shadow", "1d8", Monster, "shadow"),
    ("Spectre", "1d4", Monster, "spectre"),
    ("Wight", "1d6", Monster, "wight"),
    ("Witch Owl", "1d6", Monster, "witch_owl"),
];

const TABLE_DOWNS: &[Creature] = &[
    ("Banshee", "1", Monster, "banshee"),
    ("Crookhorn", "3d10", Monster, "crookhorn"),
    ("Deorling (Doe)", "4d4", Monster, "deorling_doe"),
    ("Drune (Cottager)", "1d4", Monster, "drune_cottager"),
    ("Elf (Wanderer)", "1d6", Monster, "elf_wanderer"),
    ("Fly, Giant", "2d6", Animal, "fly_giant"),
    ("Ghoul", "2d4", Monster, "ghoul"),
    ("Gloam", "1", Monster, "gloam"),
    ("Harpy", "2d4", Monster, "harpy"),
    ("Headless Rider", "1d4", Monster, "headless_rider"),
    ("Lost Soul", "1d4", Mortal, "lost_soul"),
    ("Peryton", "2d4", Monster, "peryton"),
    ("Peryton", "2d4", Monster, "peryton"),
    ("Shadow", "1d8", Monster, "shadow"),
    ("Shape-Stealer", "1d6", Monster, "shape_stealer"),
    ("Skeleton", "3d6", Monster, "skeleton"),
    ("Spectre", "1d4", Monster, "spectre"),
    ("Wight", "1d6", Monster, "wight"),
    ("Witch", "1d6", Monster, "witch"),
    ("Woodgrue", "3d6", Monster, "woodgrue"),
];

const TITHELANDS: &[Creature] = &[
    ("Breggle (Shorthorn)", "3d10", Monster, "breggle_shorthorn"),
    ("Cleric", "1d20", Adventurer, "cleric"),
    ("Elf (Wanderer)", "1d6", Monster, "elf_wanderer"),
    ("Fighter", "2d6", Adventurer, "fighter"),
    ("Friar", "1d6", Adventurer, "friar"),
    ("Gloam", "1", Monster, "gloam"),
    ("Goblin", "2d6", Monster, "goblin"),
    ("Griffon", "2d8", Monster, "griffon"),
    ("Grimalkin", "1d4", Monster, "grimalkin"),
    ("Killer Bee", "2d6", Animal, "killer_bee"),
    ("Knight", "2d6", Adventurer, "knight"),
    ("Merchant", "1d20", Mortal, "merchant"),
    ("Mossling", "2d8", Monster, "mossling"),
    ("Pilgrim", "4d8", Mortal, "pilgrim"),
    ("Pook Morel", "2d10", Monster, "pook_morel"),
    ("Scrabey", "1d6", Monster, "scrabey"),
    ("Sprite", "3d6", Monster, "sprite"),
    ("Villager", "2d10", Mortal, "villager"),
    ("Witch", "1d6", Monster, "witch"),
    ("Woodgrue", "3d6", Monster, "woodgrue"),
];

const VALLEY_OF_WISE_BEASTS: &[Creature] = &[
    ("Cobbin", "1d4", Monster, "cobbin"),
    ("Cobbin", "1d4", Monster, "cobbin"),
    ("Cobbin", "1d4", Monster, "cobbin"),
    ("Cobbin", "3d8", Monster, "cobbin"),
    ("Crookhorn", "3d10", Monster, "crookhorn"),
    ("Crookhorn", "3d10", Monster, "crookhorn"),
    ("Crookhorn", "3d10", Monster, "crookhorn"),
    ("Deorling (Stag)", "1d6", Monster, "deorling_stag"),
    ("Goblin", "2d6", Monster, "goblin"),
    ("Grimalkin", "1d4", Monster, "grimalkin"),
    ("Lost Soul", "1d4", Mortal, "lost_soul"),
    ("Mossling", "2d8", Monster, "mossling"),
    ("Ochre Slime-Hulk", "1", Monster, "ochre_slime_hulk"),
    ("Ogre", "1d6", Monster, "ogre"),
    ("Owlbear", "1d4", Animal, "owlbear"),
    ("Redslob", "1d4", Monster, "redslob"),
    ("Sprite", "3d6", Monster, "sprite"),
    ("Troll", "1d3", Monster, "troll"),
    ("Wodewose", "1d6", Monster, "wodewose"),
    ("Woodgrue", "3d6", Monster, "woodgrue"),
];

const CHAME: &[Creature] = &[
    ("Galosher", "2d6", Monster, "galosher"),
    ("Snake (Adder)", "1d8", Monster, "snake_adder"),
    ("Snake (Adder)", "1d8", Monster, "snake_adder"),
    ("Snake (Adder)", "1d8", Monster, "snake_adder"),
    ("Snake (Giant Python)", "1d3", Monster, "snake_giant_python"),
    ("Snake (Giant Python)", "1d3", Monster, "snake_giant_python"),
    ("Wyrm (Black Bile)", "1", Monster, "wyrm_black_bile"),
    ("Wyrm (Blood)", "1", Monster, "wyrm_blood"),
    ("Wyrm (Phlegm)", "1", Monster, "wyrm_phlegm"),
    ("Wyrm (Yellow Bile)", "1", Monster, "wyrm_yellow_bile"),
];

const VAGUE: &[Creature] = &[
    ("Banshee", "1", Monster, "banshee"),
    ("Bog Corpse", "2d4", Monster, "bog_corpse"),
    ("Bog Corpse", "2d4", Monster, "bog_corpse"),
    ("Ghoul", "2d4", Monster, "ghoul"),
    ("Ghoul", "2d4", Monster, "ghoul"),
    ("Gloam", "1", Monster, "gloam"),
    ("Headless Rider", "1", Monster, "headless_rider"),
    ("Skeleton", "3d6", Monster, "skeleton"),
    ("Spectre", "1d4", Monster, "spectre"),
    ("Wight", "1d6", Monster, "wight"),
];

