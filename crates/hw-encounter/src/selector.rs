//! Picking the one table an encounter check rolls on.
//!
//! Levels are tried most specific first: the current hex, the
//! settlement, a fairy road, the active unseason, the region, and
//! finally the common tables. The first level with an applicable table
//! wins.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use hw_core::TimeOfDay;
use hw_tables::{
    RollResult, RollSource, RollTable, ScopeKey, Situation, TableCategory, TableRegistry,
    TableResult, TableScope,
};

use crate::context::EncounterContext;

/// Which level of the cascade a table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionLevel {
    /// Tables carried by or scoped to the current hex.
    Hex,
    /// The current settlement's street tables.
    Settlement,
    /// A fairy road.
    FairyRoad,
    /// The active unseason.
    Unseason,
    /// The current region.
    Region,
    /// The common tables used anywhere.
    Common,
}

impl std::fmt::Display for SelectionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hex => write!(f, "hex"),
            Self::Settlement => write!(f, "settlement"),
            Self::FairyRoad => write!(f, "fairy road"),
            Self::Unseason => write!(f, "unseason"),
            Self::Region => write!(f, "region"),
            Self::Common => write!(f, "common"),
        }
    }
}

/// The table chosen for a check.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Where it came from.
    pub level: SelectionLevel,
    /// The table.
    pub table: Arc<RollTable>,
}

/// A rolled encounter table, plus the regional roll if it deferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedRoll {
    /// Where the table came from.
    pub level: SelectionLevel,
    /// The full result; a regional roll is appended to its sub-results.
    pub result: RollResult,
    /// The regional roll made because an entry deferred to it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional: Option<RollResult>,
}

/// The outcome of [`EncounterSelector::select_and_roll`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EncounterRoll {
    /// A table was found and rolled.
    Rolled(SelectedRoll),
    /// No level had a table; nothing can be met.
    NoTableAvailable,
}

impl EncounterRoll {
    /// The rolled result, if any.
    pub fn rolled(&self) -> Option<&SelectedRoll> {
        match self {
            Self::Rolled(r) => Some(r),
            Self::NoTableAvailable => None,
        }
    }
}

fn usable(table: &RollTable, situation: &Situation) -> bool {
    table.category.is_encounter() && table.applies(situation)
}

/// Walks the encounter cascade against a shared registry.
#[derive(Debug, Clone)]
pub struct EncounterSelector {
    registry: Arc<TableRegistry>,
}

impl EncounterSelector {
    /// A selector reading from `registry`.
    pub fn new(registry: Arc<TableRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this selector reads.
    pub fn registry(&self) -> &Arc<TableRegistry> {
        &self.registry
    }

    /// The table a check in `ctx` should roll on, if any.
    pub fn select(&self, ctx: &EncounterContext) -> Option<Selection> {
        let situation = ctx.situation();
        let found = self
            .hex_table(ctx, &situation)
            .map(|t| (SelectionLevel::Hex, t))
            .or_else(|| {
                self.settlement_table(ctx, &situation)
                    .map(|t| (SelectionLevel::Settlement, t))
            })
            .or_else(|| {
                self.fairy_road_table(ctx, &situation)
                    .map(|t| (SelectionLevel::FairyRoad, t))
            })
            .or_else(|| {
                let unseason = ctx.unseason?;
                self.first_scoped(&ScopeKey::Unseason(unseason), &situation)
                    .map(|t| (SelectionLevel::Unseason, t))
            })
            .or_else(|| {
                self.regional_table(ctx, &situation)
                    .map(|t| (SelectionLevel::Region, t))
            })
            .or_else(|| {
                self.common_table(&situation)
                    .map(|t| (SelectionLevel::Common, t))
            });

        match found {
            Some((level, table)) => {
                debug!(%level, table = %table.id, "selected encounter table");
                Some(Selection { level, table })
            }
            None => {
                debug!("no encounter table available");
                None
            }
        }
    }

    /// Select a table and roll it.
    ///
    /// If the rolled chain asks for the regional table, one regional roll
    /// is made and attached. A deferral inside that regional roll is not
    /// followed.
    pub fn select_and_roll(
        &self,
        ctx: &EncounterContext,
        rng: &mut dyn RollSource,
    ) -> TableResult<EncounterRoll> {
        let Some(selection) = self.select(ctx) else {
            return Ok(EncounterRoll::NoTableAvailable);
        };
        let mut result = self
            .registry
            .roll(&selection.table, &ctx.roll_context, rng)?;

        let mut regional = None;
        if result.defers_to_region() {
            match self.regional_table(ctx, &ctx.situation()) {
                Some(table) => {
                    let chained = ctx.roll_context.chained(&result.table_id);
                    let r = self.registry.roll(&table, &chained, rng)?;
                    debug!(table = %table.id, result = %r.entry.result, "deferred to region");
                    result.sub_results.push(r.clone());
                    regional = Some(r);
                }
                None => debug!(region = ?ctx.region, "deferred to region but none is available"),
            }
        }

        Ok(EncounterRoll::Rolled(SelectedRoll {
            level: selection.level,
            result,
            regional,
        }))
    }

    // -----------------------------------------------------------------------
    // Levels
    // -----------------------------------------------------------------------

    fn first_scoped(&self, key: &ScopeKey, situation: &Situation) -> Option<Arc<RollTable>> {
        self.registry
            .scoped_to(key)
            .into_iter()
            .find(|t| usable(t, situation))
    }

    fn hex_table(&self, ctx: &EncounterContext, situation: &Situation) -> Option<Arc<RollTable>> {
        if let Some(table) = ctx
            .location_tables
            .iter()
            .find(|t| usable(t, situation))
        {
            return Some(Arc::new(table.clone()));
        }
        let hex = ctx.hex.as_ref()?;
        self.first_scoped(&ScopeKey::Hex(hex.clone()), situation)
    }

    fn settlement_table(
        &self,
        ctx: &EncounterContext,
        situation: &Situation,
    ) -> Option<Arc<RollTable>> {
        let settlement = ctx.settlement.as_ref()?;
        let tables: Vec<Arc<RollTable>> = self
            .registry
            .scoped_to(&ScopeKey::Settlement(settlement.clone()))
            .into_iter()
            .filter(|t| usable(t, situation))
            .collect();
        let timed = |want: Option<TimeOfDay>| {
            tables.iter().find(|t| {
                matches!(&t.scope, Some(TableScope::Settlement { time, .. }) if *time == want)
            })
        };
        let now = ctx.time_of_day;
        timed(Some(now))
            .or_else(|| timed(Some(now.broad())))
            .or_else(|| timed(None))
            .cloned()
    }

    fn fairy_road_table(
        &self,
        ctx: &EncounterContext,
        situation: &Situation,
    ) -> Option<Arc<RollTable>> {
        if !ctx.on_fairy_road {
            return None;
        }
        ctx.fairy_road
            .as_ref()
            .and_then(|road| self.first_scoped(&ScopeKey::FairyRoad(Some(road.clone())), situation))
            .or_else(|| self.first_scoped(&ScopeKey::FairyRoad(None), situation))
    }

    fn regional_table(
        &self,
        ctx: &EncounterContext,
        situation: &Situation,
    ) -> Option<Arc<RollTable>> {
        let region = ctx.region?;
        self.first_scoped(&ScopeKey::Region(region), situation)
    }

    fn common_table(&self, situation: &Situation) -> Option<Arc<RollTable>> {
        self.registry
            .by_category(TableCategory::EncounterCommon)
            .into_iter()
            .find(|t| t.scope.is_none() && t.applies(situation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hw_core::{HexId, Region, Unseason};
    use hw_tables::{ScriptedRolls, TableEntry};

    fn table(id: &str, category: TableCategory) -> RollTable {
        RollTable::new(id, id, category, 1, 2).entry(TableEntry::new(1, 2, id))
    }

    fn selector_with(tables: impl IntoIterator<Item = RollTable>) -> EncounterSelector {
        let reg = TableRegistry::new();
        reg.register_all(tables);
        EncounterSelector::new(Arc::new(reg))
    }

    fn level_of(
        sel: &EncounterSelector,
        ctx: &EncounterContext,
    ) -> Option<(SelectionLevel, String)> {
        sel.select(ctx).map(|s| (s.level, s.table.id.clone()))
    }

    #[test]
    fn empty_registry_has_nothing() {
        let sel = selector_with([]);
        let mut rng = ScriptedRolls::new([1]);
        let out = sel
            .select_and_roll(&EncounterContext::default(), &mut rng)
            .unwrap();
        assert_eq!(out, EncounterRoll::NoTableAvailable);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn non_encounter_tables_are_ignored() {
        let sel = selector_with([table("treasure", TableCategory::Treasure).scoped(
            TableScope::Hex {
                hex: HexId::new("0101"),
            },
        )]);
        let ctx = EncounterContext::default().with_hex(HexId::new("0101"));
        assert!(sel.select(&ctx).is_none());
    }

    #[test]
    fn location_table_conditions_are_checked() {
        let night_only = table("night_only", TableCategory::EncounterHex).when(
            hw_tables::TableCondition::TimeOfDay {
                time: TimeOfDay::Night,
            },
        );
        let sel = selector_with([table("common", TableCategory::EncounterCommon)]);
        let day =
            EncounterContext::wilderness(TimeOfDay::Day).with_location_table(night_only.clone());
        assert_eq!(level_of(&sel, &day).map(|l| l.0), Some(SelectionLevel::Common));
        let dusk = EncounterContext::wilderness(TimeOfDay::Dusk).with_location_table(night_only);
        assert_eq!(
            level_of(&sel, &dusk),
            Some((SelectionLevel::Hex, "night_only".to_string()))
        );
    }

    #[test]
    fn scoped_common_tables_are_not_common() {
        let regional_common =
            table("odd", TableCategory::EncounterCommon).scoped(TableScope::Region {
                region: Region::Nagwood,
            });
        let sel = selector_with([regional_common]);
        assert!(sel.select(&EncounterContext::default()).is_none());
    }

    #[test]
    fn unseason_only_when_active() {
        let sel = selector_with([
            table("chame", TableCategory::EncounterUnseason).scoped(TableScope::Unseason {
                unseason: Unseason::Chame,
            }),
            table("common", TableCategory::EncounterCommon),
        ]);
        let ctx = EncounterContext::default();
        assert_eq!(level_of(&sel, &ctx).map(|l| l.0), Some(SelectionLevel::Common));
        let ctx = ctx.with_unseason(Unseason::Chame);
        assert_eq!(level_of(&sel, &ctx).map(|l| l.0), Some(SelectionLevel::Unseason));
        let vague = EncounterContext::default().with_unseason(Unseason::Vague);
        assert_eq!(level_of(&sel, &vague).map(|l| l.0), Some(SelectionLevel::Common));
    }

    #[test]
    fn level_display() {
        assert_eq!(SelectionLevel::FairyRoad.to_string(), "fairy road");
        assert_eq!(SelectionLevel::Common.to_string(), "common");
    }
}
