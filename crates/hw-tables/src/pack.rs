//! JSON table packs: `{ "tables": [ ... ] }` in the native table form.

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};
use crate::table::RollTable;

/// A bundle of tables loaded together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePack {
    /// The tables, in file order.
    pub tables: Vec<RollTable>,
}

impl TablePack {
    /// Parse a pack and check every table's coverage.
    pub fn from_json(json: &str) -> TableResult<Self> {
        let pack: Self = serde_json::from_str(json).map_err(|e| TableError::Pack(e.to_string()))?;
        for table in &pack.tables {
            table.validate()?;
        }
        Ok(pack)
    }

    /// Render the pack as pretty JSON.
    pub fn to_json(&self) -> TableResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| TableError::Pack(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_json() {
        let err = TablePack::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TableError::Pack(_)));
    }

    #[test]
    fn rejects_incomplete_table() {
        let json = r#"{"tables": [{
            "id": "holes", "name": "Holes", "category": "other", "die_size": 6,
            "entries": [{"min": 1, "max": 3, "result": "low"}]
        }]}"#;
        let err = TablePack::from_json(json).unwrap_err();
        assert!(err.to_string().contains("no entry covers 4-6"));
    }

    #[test]
    fn accepts_condition_and_scope() {
        let json = r#"{"tables": [{
            "id": "downs_night", "name": "Night on the Downs", "category": "encounter_regional",
            "die_size": 4,
            "scope": {"kind": "region", "region": "table_downs"},
            "conditions": [{"when": "time_of_day", "time": "night"}],
            "entries": [
                {"min": 1, "max": 2, "result": "Barrow lights"},
                {"min": 3, "max": 4, "result": "Wolves", "monster_refs": ["wolf"], "quantity": "2d4"}
            ]
        }]}"#;
        let pack = TablePack::from_json(json).unwrap();
        assert_eq!(pack.tables.len(), 1);
        assert_eq!(pack.tables[0].conditions.len(), 1);
        assert_eq!(pack.tables[0].entries[1].quantity.map(|q| q.max()), Some(8));
    }
}
