//! Roll tables: entries, scoping, applicability and coverage checks.

/// Table categories.
pub mod category;
/// Table rows.
pub mod entry;
/// Roll contexts and results.
pub mod roll;
/// Scopes, conditions and situations.
pub mod scope;

pub use category::TableCategory;
pub use entry::TableEntry;
pub use roll::{RollContext, RollResult};
pub use scope::{ScopeKey, Situation, TableCondition, TableScope};

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};

/// A named random table rolled with `num_dice`d`die_size` + `base_modifier`.
///
/// Tables are immutable once registered; re-registering an id replaces
/// the whole table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollTable {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the table is for.
    pub category: TableCategory,
    /// Dice rolled per check.
    #[serde(default = "one")]
    pub num_dice: u32,
    /// Faces per die.
    pub die_size: u32,
    /// Added to every roll before clamping.
    #[serde(default)]
    pub base_modifier: i32,
    /// Rows, scanned in order.
    pub entries: Vec<TableEntry>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where the table applies; `None` is global.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<TableScope>,
    /// Every condition must hold for the table to apply.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<TableCondition>,
}

fn one() -> u32 {
    1
}

impl RollTable {
    /// Create an empty table rolled on `num_dice`d`die_size`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: TableCategory,
        num_dice: u32,
        die_size: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            num_dice,
            die_size,
            base_modifier: 0,
            entries: Vec::new(),
            description: None,
            scope: None,
            conditions: Vec::new(),
        }
    }

    /// Append an entry.
    pub fn entry(mut self, entry: TableEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Append several entries.
    pub fn entries(mut self, entries: impl IntoIterator<Item = TableEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Set the base modifier.
    pub fn with_base_modifier(mut self, modifier: i32) -> Self {
        self.base_modifier = modifier;
        self
    }

    /// Set the description.
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Bind the table to a scope.
    pub fn scoped(mut self, scope: TableScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Add an applicability condition.
    pub fn when(mut self, condition: TableCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Lowest total the dice can produce.
    pub fn min_possible(&self) -> i32 {
        i32::try_from(self.num_dice)
            .unwrap_or(i32::MAX)
            .saturating_add(self.base_modifier)
    }

    /// Highest total the dice can produce.
    pub fn max_possible(&self) -> i32 {
        self.num_dice
            .checked_mul(self.die_size)
            .and_then(|top| i32::try_from(top).ok())
            .unwrap_or(i32::MAX)
            .saturating_add(self.base_modifier)
    }

    /// Dice notation for the table's roll, e.g. `2d6`.
    pub fn dice_notation(&self) -> String {
        match self.base_modifier {
            0 => format!("{}d{}", self.num_dice, self.die_size),
            m if m > 0 => format!("{}d{}+{m}", self.num_dice, self.die_size),
            m => format!("{}d{}{m}", self.num_dice, self.die_size),
        }
    }

    /// First entry whose range contains `total`.
    pub fn entry_for(&self, total: i32) -> Option<&TableEntry> {
        self.entries.iter().find(|e| e.contains(total))
    }

    /// Whether every applicability condition holds.
    pub fn applies(&self, situation: &Situation) -> bool {
        self.conditions.iter().all(|c| c.holds(situation))
    }

    /// Check that entries cover `min_possible..=max_possible` exactly,
    /// with no gaps, overlaps or out-of-range rows.
    pub fn validate(&self) -> TableResult<()> {
        let fail = |detail: String| {
            Err(TableError::Coverage {
                table_id: self.id.clone(),
                detail,
            })
        };

        if self.num_dice == 0 || self.die_size == 0 {
            return fail(format!("invalid dice {}", self.dice_notation()));
        }
        if self.entries.is_empty() {
            return fail("no entries".into());
        }

        let mut ranges: Vec<(i32, i32)> = self.entries.iter().map(|e| (e.min, e.max)).collect();
        if let Some(&(min, max)) = ranges.iter().find(|(min, max)| min > max) {
            return fail(format!("entry {min}-{max} is inverted"));
        }
        ranges.sort_unstable();

        let (low, high) = (self.min_possible(), self.max_possible());
        let mut next = low;
        for (min, max) in ranges {
            if min < low {
                return fail(format!("entry {} starts below the lowest roll {low}", span(min, max)));
            }
            if min > next {
                return fail(format!("no entry covers {}", span(next, min - 1)));
            }
            if min < next {
                return fail(format!("entries overlap at {}", span(min, (next - 1).min(max))));
            }
            next = max + 1;
        }
        if next <= high {
            return fail(format!("no entry covers {}", span(next, high)));
        }
        if next > high + 1 {
            return fail(format!("entries run past the highest roll {high} up to {}", next - 1));
        }
        Ok(())
    }
}

fn span(a: i32, b: i32) -> String {
    if a == b {
        a.to_string()
    } else {
        format!("{a}-{b}")
    }
}
