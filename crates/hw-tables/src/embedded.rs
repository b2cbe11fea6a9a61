//! Tables embedded in hex and point-of-interest data.
//!
//! These come from the hex content files, whose JSON layout is owned by
//! other tools. [`EmbeddedTable`] and [`EmbeddedEntry`] wrap the raw JSON
//! object so that fields this crate does not know about, key order and
//! the exact spelling of roll ranges all survive a load/save cycle.
//! Typed access goes through accessor methods, and
//! [`EmbeddedTable::to_roll_table`] converts to a registry table.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use hw_core::HexId;

use crate::dice::DiceExpression;
use crate::error::{TableError, TableResult};
use crate::table::{RollTable, TableCategory, TableEntry, TableScope};

/// A roll table as written in hex content JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbeddedTable(Map<String, Value>);

/// One row of an [`EmbeddedTable`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbeddedEntry(Map<String, Value>);

fn str_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

fn list_field(map: &Map<String, Value>, key: &str) -> Vec<String> {
    match map.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        Some(Value::String(one)) => vec![one.clone()],
        _ => Vec::new(),
    }
}

fn slug(s: &str) -> String {
    s.trim().to_lowercase().replace(' ', "_")
}

impl EmbeddedTable {
    /// A table with a name and die type and no entries.
    pub fn new(name: impl Into<String>, die_type: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("name".into(), Value::String(name.into()));
        map.insert("die_type".into(), Value::String(die_type.into()));
        map.insert("entries".into(), Value::Array(Vec::new()));
        Self(map)
    }

    /// Parse one table from JSON.
    pub fn from_json(json: &str) -> TableResult<Self> {
        serde_json::from_str(json).map_err(|e| TableError::Embedded {
            table: "?".into(),
            detail: e.to_string(),
        })
    }

    /// Render back to compact JSON.
    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }

    /// The underlying JSON object.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.0
            .insert("description".into(), Value::String(description.into()));
        self
    }

    /// Set an explicit category.
    pub fn with_category(mut self, category: TableCategory) -> Self {
        self.0
            .insert("table_category".into(), Value::String(category.to_string()));
        self
    }

    /// Append an entry.
    pub fn with_entry(mut self, entry: EmbeddedEntry) -> Self {
        let value = Value::Object(entry.0);
        match self.0.get_mut("entries") {
            Some(Value::Array(entries)) => entries.push(value),
            _ => {
                self.0.insert("entries".into(), Value::Array(vec![value]));
            }
        }
        self
    }

    /// Table name.
    pub fn name(&self) -> &str {
        str_field(&self.0, "name").unwrap_or_default()
    }

    /// Die notation; `d6` when absent.
    pub fn die_type(&self) -> &str {
        str_field(&self.0, "die_type").unwrap_or("d6")
    }

    /// Free-text description.
    pub fn description(&self) -> Option<&str> {
        str_field(&self.0, "description")
    }

    /// The explicit category, from `table_category` or `category`.
    pub fn category_hint(&self) -> Option<&str> {
        str_field(&self.0, "table_category").or_else(|| str_field(&self.0, "category"))
    }

    /// The category this table rolls as. An explicit, recognised
    /// category wins; otherwise it is guessed from the name.
    pub fn category(&self) -> TableCategory {
        self.category_hint()
            .and_then(TableCategory::parse)
            .unwrap_or_else(|| TableCategory::infer_from_name(self.name()))
    }

    /// The entries, in file order.
    pub fn entries(&self) -> Vec<EmbeddedEntry> {
        match self.0.get("entries") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_object().cloned().map(EmbeddedEntry))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Registry id for this table in `hex`, optionally under a point of
    /// interest.
    pub fn table_id(&self, hex: &HexId, poi: Option<&str>) -> String {
        match poi {
            Some(poi) => format!("hex_{}_{}_{}", slug(hex.as_str()), slug(poi), slug(self.name())),
            None => format!("hex_{}_{}", slug(hex.as_str()), slug(self.name())),
        }
    }

    /// Convert to a registry table scoped to `hex`.
    ///
    /// Fails if the die type is not plain dice notation, an entry's roll
    /// cannot be read, or the entries do not cover the die.
    pub fn to_roll_table(&self, hex: &HexId, poi: Option<&str>) -> TableResult<RollTable> {
        let fail = |detail: String| TableError::Embedded {
            table: self.name().to_string(),
            detail,
        };
        if self.name().trim().is_empty() {
            return Err(fail("missing name".into()));
        }
        let (count, sides) = match DiceExpression::parse(self.die_type()) {
            Ok(DiceExpression::Roll {
                count,
                sides,
                modifier: 0,
            }) => (count, sides),
            _ => return Err(fail(format!("unsupported die type '{}'", self.die_type()))),
        };
        let highest = (count * sides) as i32;

        let mut table = RollTable::new(
            self.table_id(hex, poi),
            self.name(),
            self.category(),
            count,
            sides,
        )
        .scoped(TableScope::Hex { hex: hex.clone() });
        if let Some(description) = self.description() {
            table = table.described(description);
        }
        for (i, entry) in self.entries().iter().enumerate() {
            let (min, max) = entry
                .roll_range(highest)
                .ok_or_else(|| fail(format!("entry {} has an unreadable roll", i + 1)))?;
            table.entries.push(entry.to_table_entry(min, max)?);
        }
        table.validate()?;
        Ok(table)
    }
}

impl EmbeddedEntry {
    /// An entry for a single roll.
    pub fn new(roll: i64) -> Self {
        let mut map = Map::new();
        map.insert("roll".into(), Value::from(roll));
        Self(map)
    }

    /// An entry for a roll range written as text, such as `"3-4"`.
    pub fn ranged(roll: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("roll".into(), Value::String(roll.into()));
        Self(map)
    }

    /// The underlying JSON object.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.0
    }

    fn with(mut self, key: &str, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Set the title.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.with("title", Value::String(title.into()))
    }

    /// Set the description.
    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.with("description", Value::String(description.into()))
    }

    /// Set the monster references.
    pub fn with_monsters(self, ids: &[&str]) -> Self {
        self.with("monsters", ids.iter().map(|s| Value::from(*s)).collect())
    }

    /// Set the sub-table reference.
    pub fn with_sub_table(self, id: impl Into<String>) -> Self {
        self.with("sub_table", Value::String(id.into()))
    }

    /// The roll as written: a number or a string.
    pub fn roll(&self) -> Option<&Value> {
        self.0.get("roll")
    }

    /// The roll range this entry covers.
    ///
    /// Accepts `4`, `"4"`, `"3-4"`, `"3–4"` and `"5+"`; `highest` closes
    /// an open-ended range.
    pub fn roll_range(&self, highest: i32) -> Option<(i32, i32)> {
        match self.roll()? {
            Value::Number(n) => {
                let n = i32::try_from(n.as_i64()?).ok()?;
                Some((n, n))
            }
            Value::String(s) => {
                let s = s.trim();
                if let Some(open) = s.strip_suffix('+') {
                    let min = open.trim().parse().ok()?;
                    return Some((min, highest.max(min)));
                }
                match s.split_once(['-', '–']) {
                    Some((a, b)) => Some((a.trim().parse().ok()?, b.trim().parse().ok()?)),
                    None => {
                        let n = s.parse().ok()?;
                        Some((n, n))
                    }
                }
            }
            _ => None,
        }
    }

    /// Short heading.
    pub fn title(&self) -> Option<&str> {
        str_field(&self.0, "title")
    }

    /// What happens.
    pub fn description(&self) -> Option<&str> {
        str_field(&self.0, "description")
    }

    /// Monster ids.
    pub fn monsters(&self) -> Vec<String> {
        list_field(&self.0, "monsters")
    }

    /// NPC ids.
    pub fn npcs(&self) -> Vec<String> {
        list_field(&self.0, "npcs")
    }

    /// Item ids.
    pub fn items(&self) -> Vec<String> {
        list_field(&self.0, "items")
    }

    /// Rules text.
    pub fn mechanical_effect(&self) -> Option<&str> {
        str_field(&self.0, "mechanical_effect")
    }

    /// The table to roll next.
    pub fn sub_table(&self) -> Option<&str> {
        str_field(&self.0, "sub_table")
    }

    /// Number appearing, as dice text.
    pub fn quantity(&self) -> Option<&str> {
        str_field(&self.0, "quantity")
    }

    /// Whether the entry says to roll on the regional table instead.
    pub fn regional_table(&self) -> bool {
        match self.0.get("regional_table") {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => !s.trim().is_empty(),
            _ => false,
        }
    }

    fn to_table_entry(&self, min: i32, max: i32) -> TableResult<TableEntry> {
        let result = self
            .description()
            .or_else(|| self.title())
            .unwrap_or_default();
        let mut entry = TableEntry::new(min, max, result);
        entry.title = self.title().map(str::to_string);
        entry.monster_refs = self.monsters();
        entry.npc_refs = self.npcs();
        entry.item_refs = self.items();
        entry.mechanical_effect = self.mechanical_effect().map(str::to_string);
        entry.sub_table = self.sub_table().map(str::to_string);
        entry.quantity = self.quantity().map(DiceExpression::parse).transpose()?;
        entry.defer_to_region = self.regional_table();
        Ok(entry)
    }
}
