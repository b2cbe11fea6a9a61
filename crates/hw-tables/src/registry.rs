//! The table registry: an injected, hot-reloadable store of roll tables.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::builtin;
use crate::dice::RollSource;
use crate::error::{TableError, TableResult};
use crate::pack::TablePack;
use crate::resolve::{TableLookup, roll_table};
use crate::table::{RollContext, RollResult, RollTable, ScopeKey, TableCategory};

#[derive(Debug, Default)]
struct RegistryIndex {
    tables: BTreeMap<String, Arc<RollTable>>,

    // Secondary indexes
    by_scope: BTreeMap<ScopeKey, BTreeSet<String>>,
    by_category: BTreeMap<TableCategory, BTreeSet<String>>,
}

impl RegistryIndex {
    fn insert(&mut self, table: Arc<RollTable>) -> Option<Arc<RollTable>> {
        let replaced = self.remove(&table.id);
        if let Some(scope) = &table.scope {
            self.by_scope
                .entry(scope.key())
                .or_default()
                .insert(table.id.clone());
        }
        self.by_category
            .entry(table.category)
            .or_default()
            .insert(table.id.clone());
        self.tables.insert(table.id.clone(), table);
        replaced
    }

    fn remove(&mut self, id: &str) -> Option<Arc<RollTable>> {
        let old = self.tables.remove(id)?;
        if let Some(scope) = &old.scope {
            let key = scope.key();
            if let Some(ids) = self.by_scope.get_mut(&key) {
                ids.remove(id);
                if ids.is_empty() {
                    self.by_scope.remove(&key);
                }
            }
        }
        if let Some(ids) = self.by_category.get_mut(&old.category) {
            ids.remove(id);
            if ids.is_empty() {
                self.by_category.remove(&old.category);
            }
        }
        Some(old)
    }

    fn collect(&self, ids: Option<&BTreeSet<String>>) -> Vec<Arc<RollTable>> {
        ids.into_iter()
            .flatten()
            .filter_map(|id| self.tables.get(id).cloned())
            .collect()
    }
}

/// Every roll table the session knows about, keyed by id.
///
/// The registry is an ordinary value: build one, wrap it in an `Arc` and
/// hand it to whatever needs it. Registration replaces by id and keeps
/// the scope and category indexes in step under one write lock, so
/// tables can be reloaded while the session runs.
#[derive(Debug, Default)]
pub struct TableRegistry {
    index: RwLock<RegistryIndex>,
}

impl TableRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the standard tables.
    pub fn with_builtin_tables() -> Self {
        let registry = Self::new();
        registry.register_all(builtin::standard_tables());
        registry
    }

    fn read(&self) -> RwLockReadGuard<'_, RegistryIndex> {
        self.index.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryIndex> {
        self.index.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Insert or replace a table. Returns the table it replaced.
    pub fn register(&self, table: RollTable) -> Option<Arc<RollTable>> {
        let id = table.id.clone();
        let replaced = self.write().insert(Arc::new(table));
        debug!(table = %id, replaced = replaced.is_some(), "registered table");
        replaced
    }

    /// Register every table in order. Returns how many were registered.
    pub fn register_all(&self, tables: impl IntoIterator<Item = RollTable>) -> usize {
        let mut index = self.write();
        let mut count = 0;
        for table in tables {
            index.insert(Arc::new(table));
            count += 1;
        }
        count
    }

    /// Remove a table and its index entries.
    pub fn remove(&self, id: &str) -> Option<Arc<RollTable>> {
        self.write().remove(id)
    }

    /// Load a JSON table pack. Every table is checked before any is
    /// registered, so a bad pack leaves the registry untouched.
    pub fn load_pack_json(&self, json: &str) -> TableResult<Vec<String>> {
        let pack = TablePack::from_json(json)?;
        let ids: Vec<String> = pack.tables.iter().map(|t| t.id.clone()).collect();
        self.register_all(pack.tables);
        info!(tables = ids.len(), "loaded table pack");
        Ok(ids)
    }

    /// Load a JSON table pack from disk.
    pub fn load_pack_file(&self, path: impl AsRef<Path>) -> TableResult<Vec<String>> {
        let json = std::fs::read_to_string(path)?;
        self.load_pack_json(&json)
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// The table registered under `id`.
    pub fn get(&self, id: &str) -> Option<Arc<RollTable>> {
        self.read().tables.get(id).cloned()
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.read().tables.contains_key(id)
    }

    /// Every registered id, sorted.
    pub fn ids(&self) -> Vec<String> {
        self.read().tables.keys().cloned().collect()
    }

    /// Every registered table, sorted by id.
    pub fn tables(&self) -> Vec<Arc<RollTable>> {
        self.read().tables.values().cloned().collect()
    }

    /// Number of registered tables.
    pub fn len(&self) -> usize {
        self.read().tables.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.read().tables.is_empty()
    }

    /// Tables filed under a scope key, sorted by id.
    pub fn scoped_to(&self, key: &ScopeKey) -> Vec<Arc<RollTable>> {
        let index = self.read();
        index.collect(index.by_scope.get(key))
    }

    /// Tables of one category, sorted by id.
    pub fn by_category(&self, category: TableCategory) -> Vec<Arc<RollTable>> {
        let index = self.read();
        index.collect(index.by_category.get(&category))
    }

    // -----------------------------------------------------------------------
    // Rolling
    // -----------------------------------------------------------------------

    /// Roll the table registered under `id`.
    ///
    /// `Ok(None)` means no such table; everything else comes from the
    /// roll itself.
    pub fn roll_by_id(
        &self,
        id: &str,
        context: &RollContext,
        rng: &mut dyn RollSource,
    ) -> TableResult<Option<RollResult>> {
        match self.get(id) {
            Some(table) => roll_table(&table, context, self, rng).map(Some),
            None => Ok(None),
        }
    }

    /// Roll a table, resolving its sub-tables through this registry.
    pub fn roll(
        &self,
        table: &RollTable,
        context: &RollContext,
        rng: &mut dyn RollSource,
    ) -> TableResult<RollResult> {
        roll_table(table, context, self, rng)
    }

    /// Check every table's coverage. Returns all violations.
    pub fn validate_all(&self) -> Vec<TableError> {
        self.tables()
            .iter()
            .filter_map(|t| t.validate().err())
            .collect()
    }
}

impl TableLookup for TableRegistry {
    fn lookup(&self, id: &str) -> Option<Arc<RollTable>> {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRolls;
    use crate::table::{TableEntry, TableScope};
    use hw_core::HexId;

    fn hex_table(id: &str, hex: &str) -> RollTable {
        RollTable::new(id, id, TableCategory::EncounterHex, 1, 6)
            .entry(TableEntry::new(1, 6, "Something"))
            .scoped(TableScope::Hex {
                hex: HexId::new(hex),
            })
    }

    fn hex_key(hex: &str) -> ScopeKey {
        ScopeKey::Hex(HexId::new(hex))
    }

    #[test]
    fn register_and_get() {
        let reg = TableRegistry::new();
        assert!(reg.is_empty());
        assert!(reg.register(hex_table("a", "0101")).is_none());
        assert_eq!(reg.len(), 1);
        assert!(reg.contains("a"));
        assert_eq!(reg.get("a").map(|t| t.name.clone()), Some("a".to_string()));
    }

    #[test]
    fn replace_moves_index_entries() {
        let reg = TableRegistry::new();
        reg.register(hex_table("a", "0101"));
        let replaced = reg.register(hex_table("a", "0202"));
        assert!(replaced.is_some());
        assert_eq!(reg.len(), 1);
        assert!(reg.scoped_to(&hex_key("0101")).is_empty());
        assert_eq!(reg.scoped_to(&hex_key("0202")).len(), 1);
        assert_eq!(reg.by_category(TableCategory::EncounterHex).len(), 1);
    }

    #[test]
    fn replace_in_place_does_not_duplicate() {
        let reg = TableRegistry::new();
        reg.register(hex_table("a", "0101"));
        reg.register(hex_table("a", "0101"));
        assert_eq!(reg.scoped_to(&hex_key("0101")).len(), 1);
    }

    #[test]
    fn remove_clears_indexes() {
        let reg = TableRegistry::new();
        reg.register(hex_table("a", "0101"));
        assert!(reg.remove("a").is_some());
        assert!(reg.remove("a").is_none());
        assert!(reg.scoped_to(&hex_key("0101")).is_empty());
        assert!(reg.by_category(TableCategory::EncounterHex).is_empty());
    }

    #[test]
    fn scoped_tables_sorted_by_id() {
        let reg = TableRegistry::new();
        reg.register(hex_table("zeta", "0101"));
        reg.register(hex_table("alpha", "0101"));
        let ids: Vec<String> = reg
            .scoped_to(&hex_key("0101"))
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }

    #[test]
    fn roll_by_unknown_id_is_none() {
        let reg = TableRegistry::new();
        let mut rng = ScriptedRolls::new([3]);
        let out = reg.roll_by_id("nope", &RollContext::new(), &mut rng).unwrap();
        assert!(out.is_none());
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn roll_by_id_follows_sub_tables() {
        let reg = TableRegistry::new();
        reg.register(
            RollTable::new("outer", "Outer", TableCategory::Other, 1, 1)
                .entry(TableEntry::single(1, "In").with_sub_table("inner")),
        );
        reg.register(
            RollTable::new("inner", "Inner", TableCategory::Other, 1, 1)
                .entry(TableEntry::single(1, "Here")),
        );
        let mut rng = ScriptedRolls::new([1]);
        let r = reg
            .roll_by_id("outer", &RollContext::new(), &mut rng)
            .unwrap()
            .unwrap();
        assert_eq!(r.leaf().result_text(), "Here");
    }

    #[test]
    fn bad_pack_registers_nothing() {
        let reg = TableRegistry::new();
        let json = r#"{"tables": [
            {"id": "good", "name": "Good", "category": "other", "die_size": 2,
             "entries": [{"min": 1, "max": 2, "result": "ok"}]},
            {"id": "bad", "name": "Bad", "category": "other", "die_size": 2,
             "entries": [{"min": 1, "max": 1, "result": "half"}]}
        ]}"#;
        assert!(reg.load_pack_json(json).is_err());
        assert!(reg.is_empty());
    }

    #[test]
    fn validate_all_reports_each_violation() {
        let reg = TableRegistry::new();
        reg.register(RollTable::new("empty", "Empty", TableCategory::Other, 1, 6));
        reg.register(hex_table("fine", "0101"));
        let errors = reg.validate_all();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("empty"));
    }
}
