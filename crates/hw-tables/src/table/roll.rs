//! Per-roll context and roll results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{TableCategory, TableEntry};

/// Caller-supplied modifiers for one roll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollContext {
    /// A single explicit modifier.
    pub explicit_modifier: i32,
    /// Named situational modifiers, all summed into the total.
    pub situational: BTreeMap<String, i32>,
    /// Tables already visited in this resolution chain. Diagnostics only.
    pub previous: Vec<String>,
}

impl RollContext {
    /// A context with no modifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit modifier.
    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.explicit_modifier = modifier;
        self
    }

    /// Add or replace a named situational modifier.
    pub fn with_situational(mut self, name: impl Into<String>, modifier: i32) -> Self {
        self.situational.insert(name.into(), modifier);
        self
    }

    /// Explicit plus situational modifiers.
    pub fn total_modifier(&self) -> i32 {
        self.situational
            .values()
            .fold(self.explicit_modifier, |acc, &m| acc.saturating_add(m))
    }

    /// The same context with `table_id` appended to the chain.
    pub fn chained(&self, table_id: &str) -> Self {
        let mut next = self.clone();
        next.previous.push(table_id.to_string());
        next
    }
}

/// The outcome of rolling one table, including anything it chained into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// The table rolled.
    pub table_id: String,
    /// Its display name.
    pub table_name: String,
    /// Its category.
    pub category: TableCategory,
    /// Individual dice faces.
    pub dice: Vec<u32>,
    /// Base plus context modifiers.
    pub modifier_applied: i32,
    /// Dice plus modifiers, before clamping.
    pub raw_total: i32,
    /// The total used to pick the entry.
    pub total: i32,
    /// The matched entry.
    pub entry: TableEntry,
    /// The entry's quantity roll, if it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_rolled: Option<i32>,
    /// Results of chained tables.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_results: Vec<RollResult>,
    /// A sub-table the entry named that is not registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unresolved_sub_table: Option<String>,
}

impl RollResult {
    /// The matched entry's result text.
    pub fn result_text(&self) -> &str {
        &self.entry.result
    }

    /// This result and every nested result, depth first.
    pub fn chain(&self) -> Vec<&RollResult> {
        let mut out = vec![self];
        for sub in &self.sub_results {
            out.extend(sub.chain());
        }
        out
    }

    /// The innermost result of the first chain.
    pub fn leaf(&self) -> &RollResult {
        match self.sub_results.first() {
            Some(sub) => sub.leaf(),
            None => self,
        }
    }

    /// Monster identifiers from every entry in the chain.
    pub fn monster_refs(&self) -> Vec<String> {
        self.chain()
            .into_iter()
            .flat_map(|r| r.entry.monster_refs.iter().cloned())
            .collect()
    }

    /// NPC identifiers from every entry in the chain.
    pub fn npc_refs(&self) -> Vec<String> {
        self.chain()
            .into_iter()
            .flat_map(|r| r.entry.npc_refs.iter().cloned())
            .collect()
    }

    /// The most deeply nested quantity roll in the chain.
    pub fn deepest_quantity(&self) -> Option<i32> {
        self.chain()
            .into_iter()
            .rev()
            .find_map(|r| r.quantity_rolled)
    }

    /// Whether any entry in the chain asks for the regional table.
    pub fn defers_to_region(&self) -> bool {
        self.chain().iter().any(|r| r.entry.defer_to_region)
    }

    /// A one-line summary, e.g. `Reaction [8]: Uncertain`.
    pub fn describe(&self) -> String {
        let mut out = format!("{} [{}]", self.table_name, self.total);
        if self.raw_total != self.total {
            out.push_str(&format!(" (clamped from {})", self.raw_total));
        }
        out.push_str(": ");
        out.push_str(&self.entry.result);
        if let Some(q) = self.quantity_rolled {
            out.push_str(&format!(" x{q}"));
        }
        for sub in &self.sub_results {
            out.push_str(" > ");
            out.push_str(&sub.describe());
        }
        if let Some(missing) = &self.unresolved_sub_table {
            out.push_str(&format!(" > ({missing} unavailable)"));
        }
        out
    }
}
