//! Hex content: terrain, regions, secrets and embedded tables.
//!
//! [`LocationProvider`] is what the travel loop asks about the map.
//! [`HexAtlas`] answers from the hex content file, a JSON document of the
//! form `{ "_metadata": {...}, "items": [ {hex record}, ... ] }`. Fields
//! the atlas does not model are kept and written back out.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use hw_core::{HexId, InSix, Region, TerrainKind};
use hw_tables::{EmbeddedTable, RollTable, TableRegistry};

use crate::error::{TravelError, TravelResult};

/// What the travel loop needs to know about the map.
pub trait LocationProvider {
    /// Terrain of a hex; `None` for a hex the provider does not know.
    fn terrain(&self, hex: &HexId) -> Option<TerrainKind>;

    /// Region the hex belongs to.
    fn region(&self, _hex: &HexId) -> Option<Region> {
        None
    }

    /// Settlement in the hex.
    fn settlement(&self, _hex: &HexId) -> Option<String> {
        None
    }

    /// Tables embedded in the hex and its points of interest.
    fn encounter_tables(&self, _hex: &HexId) -> Vec<RollTable> {
        Vec::new()
    }

    /// Names of hidden features a search may turn up.
    fn hidden_features(&self, _hex: &HexId) -> Vec<String> {
        Vec::new()
    }

    /// Monster lairs a search may turn up.
    fn lairs(&self, _hex: &HexId) -> Vec<String> {
        Vec::new()
    }

    /// Landmarks anyone can see.
    fn landmarks(&self, _hex: &HexId) -> Vec<String> {
        Vec::new()
    }

    /// Base chance of getting lost in the hex, replacing the terrain's.
    fn lost_chance(&self, _hex: &HexId) -> Option<InSix> {
        None
    }

    /// What becomes of a party that gets lost in the hex.
    fn lost_behavior(&self, _hex: &HexId) -> Option<LostBehavior> {
        None
    }

    /// Encounter modifiers of the hex, then of its points of interest.
    fn encounter_modifiers(&self, _hex: &HexId) -> Vec<EncounterModifier> {
        Vec::new()
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A notable feature of a hex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexFeature {
    /// Feature name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether it must be searched for.
    #[serde(default)]
    pub is_hidden: bool,
    /// Fields this crate does not use.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A monster lair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lair {
    /// The kind of monster living there.
    pub monster_type: String,
    /// How many live there, in dice notation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monster_count: Option<String>,
    /// Fields this crate does not use.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A landmark visible to passers-by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Landmark name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fields this crate does not use.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// "Encounters here are 2-in-6 likely to be ...".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterModifier {
    /// Chance as written, e.g. `"2-in-6"`.
    pub chance: String,
    /// Who is met when the chance comes up.
    pub result: String,
    /// What they are up to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Fields this crate does not use.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EncounterModifier {
    /// A modifier met on `chance`.
    pub fn new(chance: InSix, result: impl Into<String>) -> Self {
        Self {
            chance: chance.to_string(),
            result: result.into(),
            context: None,
            extra: Map::new(),
        }
    }

    /// Set the context line.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// The parsed chance; unreadable text never applies.
    pub fn chance(&self) -> InSix {
        InSix::parse(&self.chance).unwrap_or(InSix::NEVER)
    }
}

/// What happens to a party lost in a hex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LostBehavior {
    /// Behaviour name; only `maze` changes anything.
    #[serde(rename = "type")]
    pub kind: String,
    /// Narration for the players.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fields this crate does not use.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LostBehavior {
    /// A maze: a party lost here is trapped until it passes a lost check
    /// on a later day.
    pub fn maze(description: Option<String>) -> Self {
        Self {
            kind: "maze".to_string(),
            description,
            extra: Map::new(),
        }
    }

    /// Whether this is a maze.
    pub fn is_maze(&self) -> bool {
        self.kind.eq_ignore_ascii_case("maze")
    }
}

/// Hex-specific adjustments to the travel procedure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Procedural {
    /// Base lost chance as written, e.g. `"3-in-6"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lost_chance: Option<String>,
    /// What getting lost here does.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lost_behavior: Option<LostBehavior>,
    /// Encounter modifiers for the whole hex.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub encounter_modifiers: Vec<EncounterModifier>,
    /// Fields this crate does not use.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A place of interest inside a hex, with its own tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Name, used in table ids.
    pub name: String,
    /// Tables carried by this place.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roll_tables: Vec<EmbeddedTable>,
    /// Encounter modifiers tied to this place.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub encounter_modifiers: Vec<EncounterModifier>,
    /// Fields this crate does not use.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Everything the atlas holds about one hex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexRecord {
    /// The hex.
    pub hex_id: HexId,
    /// Its name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Terrain, as written.
    pub terrain_type: String,
    /// Region name, as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Settlement name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement: Option<String>,
    /// Features.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<HexFeature>,
    /// Lairs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lairs: Vec<Lair>,
    /// Landmarks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub landmarks: Vec<Landmark>,
    /// Tables carried by the hex itself.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roll_tables: Vec<EmbeddedTable>,
    /// Places of interest.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points_of_interest: Vec<PointOfInterest>,
    /// Procedure overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procedural: Option<Procedural>,
    /// Fields this crate does not use.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HexRecord {
    /// A bare record.
    pub fn new(hex_id: HexId, terrain: TerrainKind) -> Self {
        Self {
            hex_id,
            name: None,
            terrain_type: terrain.to_string(),
            region: None,
            settlement: None,
            features: Vec::new(),
            lairs: Vec::new(),
            landmarks: Vec::new(),
            roll_tables: Vec::new(),
            points_of_interest: Vec::new(),
            procedural: None,
            extra: Map::new(),
        }
    }

    /// Set the region.
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region.to_string());
        self
    }

    /// Set the settlement.
    pub fn with_settlement(mut self, settlement: impl Into<String>) -> Self {
        self.settlement = Some(settlement.into());
        self
    }

    /// Add a feature; `hidden` ones must be searched for.
    pub fn with_feature(mut self, name: impl Into<String>, hidden: bool) -> Self {
        self.features.push(HexFeature {
            name: name.into(),
            description: None,
            is_hidden: hidden,
            extra: Map::new(),
        });
        self
    }

    /// Add a lair.
    pub fn with_lair(mut self, monster_type: impl Into<String>) -> Self {
        self.lairs.push(Lair {
            monster_type: monster_type.into(),
            monster_count: None,
            extra: Map::new(),
        });
        self
    }

    /// Add a landmark.
    pub fn with_landmark(mut self, name: impl Into<String>) -> Self {
        self.landmarks.push(Landmark {
            name: name.into(),
            description: None,
            extra: Map::new(),
        });
        self
    }

    /// Add a hex table.
    pub fn with_table(mut self, table: EmbeddedTable) -> Self {
        self.roll_tables.push(table);
        self
    }

    /// Override the base lost chance.
    pub fn with_lost_chance(mut self, chance: InSix) -> Self {
        self.procedural_mut().lost_chance = Some(chance.to_string());
        self
    }

    /// Make the hex a maze for lost parties.
    pub fn with_maze(mut self, description: impl Into<String>) -> Self {
        self.procedural_mut().lost_behavior = Some(LostBehavior::maze(Some(description.into())));
        self
    }

    /// Add a hex-wide encounter modifier.
    pub fn with_encounter_modifier(mut self, modifier: EncounterModifier) -> Self {
        self.procedural_mut().encounter_modifiers.push(modifier);
        self
    }

    fn procedural_mut(&mut self) -> &mut Procedural {
        self.procedural.get_or_insert_with(Procedural::default)
    }

    /// Parsed lost chance override. Unreadable text is ignored.
    pub fn lost_chance(&self) -> Option<InSix> {
        let written = self.procedural.as_ref()?.lost_chance.as_deref()?;
        let chance = InSix::parse(written);
        if chance.is_none() {
            warn!(hex = %self.hex_id, lost_chance = %written, "unreadable lost chance");
        }
        chance
    }

    /// Parsed terrain.
    pub fn terrain(&self) -> Option<TerrainKind> {
        TerrainKind::parse(&self.terrain_type)
    }

    /// Parsed region.
    pub fn region(&self) -> Option<Region> {
        self.region.as_deref().and_then(Region::parse)
    }

    /// Convert every embedded table, hex tables first.
    pub fn converted_tables(&self) -> hw_tables::TableResult<Vec<RollTable>> {
        let hex_tables = self
            .roll_tables
            .iter()
            .map(|t| t.to_roll_table(&self.hex_id, None));
        let poi_tables = self.points_of_interest.iter().flat_map(|poi| {
            poi.roll_tables
                .iter()
                .map(|t| t.to_roll_table(&self.hex_id, Some(&poi.name)))
        });
        hex_tables.chain(poi_tables).collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AtlasFile {
    #[serde(rename = "_metadata", default, skip_serializing_if = "Option::is_none")]
    metadata: Option<Value>,
    items: Vec<HexRecord>,
}

// ---------------------------------------------------------------------------
// Atlas
// ---------------------------------------------------------------------------

/// An in-memory map loaded from hex content JSON.
#[derive(Debug, Clone, Default)]
pub struct HexAtlas {
    metadata: Option<Value>,
    hexes: BTreeMap<HexId, HexRecord>,
    tables: BTreeMap<HexId, Vec<RollTable>>,
}

impl HexAtlas {
    /// An empty atlas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an atlas. Every embedded table is converted and validated.
    pub fn from_json(json: &str) -> TravelResult<Self> {
        let file: AtlasFile =
            serde_json::from_str(json).map_err(|e| TravelError::Atlas(e.to_string()))?;
        let mut atlas = Self {
            metadata: file.metadata,
            ..Self::default()
        };
        for record in file.items {
            atlas.insert(record)?;
        }
        debug!(hexes = atlas.len(), "loaded hex atlas");
        Ok(atlas)
    }

    /// Read and parse an atlas file.
    pub fn load_file(path: impl AsRef<Path>) -> TravelResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Render back to pretty JSON.
    pub fn to_json(&self) -> TravelResult<String> {
        let file = AtlasFile {
            metadata: self.metadata.clone(),
            items: self.hexes.values().cloned().collect(),
        };
        serde_json::to_string_pretty(&file).map_err(|e| TravelError::Atlas(e.to_string()))
    }

    /// Add or replace a hex.
    pub fn insert(&mut self, record: HexRecord) -> TravelResult<()> {
        if record.terrain().is_none() {
            warn!(hex = %record.hex_id, terrain = %record.terrain_type, "unrecognised terrain");
        }
        let tables = record.converted_tables()?;
        self.tables.insert(record.hex_id.clone(), tables);
        self.hexes.insert(record.hex_id.clone(), record);
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_hex(mut self, record: HexRecord) -> TravelResult<Self> {
        self.insert(record)?;
        Ok(self)
    }

    /// The record for a hex.
    pub fn get(&self, hex: &HexId) -> Option<&HexRecord> {
        self.hexes.get(hex)
    }

    /// Every record, in hex order.
    pub fn hexes(&self) -> impl Iterator<Item = &HexRecord> {
        self.hexes.values()
    }

    /// Number of hexes.
    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    /// Whether the atlas is empty.
    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// Converted tables for one hex.
    pub fn tables(&self, hex: &HexId) -> &[RollTable] {
        self.tables.get(hex).map(Vec::as_slice).unwrap_or_default()
    }

    /// Register every embedded table with `registry`, returning how many.
    pub fn register_tables(&self, registry: &TableRegistry) -> usize {
        registry.register_all(self.tables.values().flatten().cloned())
    }
}

impl LocationProvider for HexAtlas {
    fn terrain(&self, hex: &HexId) -> Option<TerrainKind> {
        self.get(hex)?.terrain()
    }

    fn region(&self, hex: &HexId) -> Option<Region> {
        self.get(hex)?.region()
    }

    fn settlement(&self, hex: &HexId) -> Option<String> {
        self.get(hex)?.settlement.clone()
    }

    fn encounter_tables(&self, hex: &HexId) -> Vec<RollTable> {
        self.tables(hex)
            .iter()
            .filter(|t| t.category.is_encounter())
            .cloned()
            .collect()
    }

    fn hidden_features(&self, hex: &HexId) -> Vec<String> {
        self.get(hex)
            .map(|r| {
                r.features
                    .iter()
                    .filter(|f| f.is_hidden)
                    .map(|f| f.name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn lairs(&self, hex: &HexId) -> Vec<String> {
        self.get(hex)
            .map(|r| r.lairs.iter().map(|l| l.monster_type.clone()).collect())
            .unwrap_or_default()
    }

    fn landmarks(&self, hex: &HexId) -> Vec<String> {
        self.get(hex)
            .map(|r| r.landmarks.iter().map(|l| l.name.clone()).collect())
            .unwrap_or_default()
    }

    fn lost_chance(&self, hex: &HexId) -> Option<InSix> {
        self.get(hex)?.lost_chance()
    }

    fn lost_behavior(&self, hex: &HexId) -> Option<LostBehavior> {
        self.get(hex)?.procedural.as_ref()?.lost_behavior.clone()
    }

    fn encounter_modifiers(&self, hex: &HexId) -> Vec<EncounterModifier> {
        let Some(record) = self.get(hex) else {
            return Vec::new();
        };
        let hex_wide = record
            .procedural
            .iter()
            .flat_map(|p| p.encounter_modifiers.iter());
        let places = record
            .points_of_interest
            .iter()
            .flat_map(|poi| poi.encounter_modifiers.iter());
        hex_wide.chain(places).cloned().collect()
    }
}
