//! Table rows: roll ranges, results, quantities and sub-table links.

use serde::{Deserialize, Serialize};

use crate::dice::DiceExpression;

/// One row of a roll table covering the inclusive range `min..=max`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    /// Lowest total this entry covers.
    pub min: i32,
    /// Highest total this entry covers.
    pub max: i32,
    /// What happens.
    pub result: String,
    /// Short heading, if the source gives one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Monster identifiers for the monster registry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monster_refs: Vec<String>,
    /// NPC identifiers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub npc_refs: Vec<String>,
    /// Item identifiers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item_refs: Vec<String>,
    /// Table to roll on next as part of the same result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_table: Option<String>,
    /// How many appear.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<DiceExpression>,
    /// Fixed modifier this result imposes on a later check.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub modifier: i32,
    /// Rules text for the result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanical_effect: Option<String>,
    /// Roll on the current region's table instead.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub defer_to_region: bool,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl TableEntry {
    /// An entry covering `min..=max`.
    pub fn new(min: i32, max: i32, result: impl Into<String>) -> Self {
        Self {
            min,
            max,
            result: result.into(),
            title: None,
            monster_refs: Vec::new(),
            npc_refs: Vec::new(),
            item_refs: Vec::new(),
            sub_table: None,
            quantity: None,
            modifier: 0,
            mechanical_effect: None,
            defer_to_region: false,
        }
    }

    /// An entry covering a single total.
    pub fn single(roll: i32, result: impl Into<String>) -> Self {
        Self::new(roll, roll, result)
    }

    /// Whether `total` falls within this entry.
    pub fn contains(&self, total: i32) -> bool {
        (self.min..=self.max).contains(&total)
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a monster reference.
    pub fn with_monster(mut self, id: impl Into<String>) -> Self {
        self.monster_refs.push(id.into());
        self
    }

    /// Add an NPC reference.
    pub fn with_npc(mut self, id: impl Into<String>) -> Self {
        self.npc_refs.push(id.into());
        self
    }

    /// Add an item reference.
    pub fn with_item(mut self, id: impl Into<String>) -> Self {
        self.item_refs.push(id.into());
        self
    }

    /// Chain to another table.
    pub fn with_sub_table(mut self, table_id: impl Into<String>) -> Self {
        self.sub_table = Some(table_id.into());
        self
    }

    /// Roll a quantity when this entry comes up.
    pub fn with_quantity(mut self, quantity: DiceExpression) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the fixed modifier.
    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    /// Set the rules text.
    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.mechanical_effect = Some(effect.into());
        self
    }

    /// Mark the entry as "roll on the regional table".
    pub fn deferring_to_region(mut self) -> Self {
        self.defer_to_region = true;
        self
    }
}
