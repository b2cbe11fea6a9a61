//! Rolling a table and following its sub-table references.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::dice::RollSource;
use crate::error::{TableError, TableResult};
use crate::table::{RollContext, RollResult, RollTable};

/// Deepest sub-table chain the resolver will follow.
pub const MAX_TABLE_DEPTH: usize = 8;

/// Finds tables by id when an entry chains to a sub-table.
pub trait TableLookup {
    /// The table registered under `id`, if any.
    fn lookup(&self, id: &str) -> Option<Arc<RollTable>>;
}

/// A lookup with no tables, for rolling a standalone table.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl TableLookup for NoLookup {
    fn lookup(&self, _id: &str) -> Option<Arc<RollTable>> {
        None
    }
}

/// Roll `table` once under `context`.
///
/// Draws happen in a fixed order: the table's dice, then the matched
/// entry's quantity, then any sub-table. A sub-table id that `lookup`
/// does not know is recorded on the result rather than failing.
pub fn roll_table(
    table: &RollTable,
    context: &RollContext,
    lookup: &dyn TableLookup,
    rng: &mut dyn RollSource,
) -> TableResult<RollResult> {
    roll_at_depth(table, context, lookup, rng, 1)
}

fn roll_at_depth(
    table: &RollTable,
    context: &RollContext,
    lookup: &dyn TableLookup,
    rng: &mut dyn RollSource,
    depth: usize,
) -> TableResult<RollResult> {
    if depth > MAX_TABLE_DEPTH {
        return Err(TableError::RecursionLimitExceeded {
            table_id: table.id.clone(),
            depth,
        });
    }
    if table.num_dice == 0 || table.die_size == 0 {
        return Err(TableError::Coverage {
            table_id: table.id.clone(),
            detail: format!("invalid dice {}", table.dice_notation()),
        });
    }

    let dice: Vec<u32> = (0..table.num_dice)
        .map(|_| rng.roll_die(table.die_size))
        .collect();
    let modifier_applied = table.base_modifier.saturating_add(context.total_modifier());
    let raw_total = dice
        .iter()
        .fold(0i32, |acc, &d| acc.saturating_add_unsigned(d))
        .saturating_add(modifier_applied);
    let total = raw_total.clamp(table.min_possible(), table.max_possible());

    let entry = table
        .entry_for(total)
        .ok_or_else(|| TableError::NoMatchingEntry {
            table_id: table.id.clone(),
            total,
        })?
        .clone();
    debug!(table = %table.id, total, raw_total, result = %entry.result, "rolled table");

    let quantity_rolled = entry.quantity.map(|q| q.evaluate(rng));

    let mut sub_results = Vec::new();
    let mut unresolved_sub_table = None;
    if let Some(sub_id) = &entry.sub_table {
        match lookup.lookup(sub_id) {
            Some(sub) => {
                let chained = context.chained(&table.id);
                sub_results.push(roll_at_depth(&sub, &chained, lookup, rng, depth + 1)?);
            }
            None => {
                warn!(table = %table.id, sub_table = %sub_id, "sub-table is not registered");
                unresolved_sub_table = Some(sub_id.clone());
            }
        }
    }

    Ok(RollResult {
        table_id: table.id.clone(),
        table_name: table.name.clone(),
        category: table.category,
        dice,
        modifier_applied,
        raw_total,
        total,
        entry,
        quantity_rolled,
        sub_results,
        unresolved_sub_table,
    })
}
