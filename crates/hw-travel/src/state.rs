//! The bookkeeping for one day on the road.

use serde::{Deserialize, Serialize};

use hw_core::HexId;

/// Consecutive travel days after which the party needs rest.
pub const DAYS_BEFORE_REST: u32 = 6;

/// How the day's navigation went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationOutcome {
    /// The party arrived where it meant to.
    Success,
    /// The party drifted one hex off its bearing.
    Veered,
    /// The party is lost and strays into a random neighbouring hex.
    Lost,
}

impl std::fmt::Display for NavigationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Veered => write!(f, "veered"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// A hex the party started entering but could not finish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingEntry {
    /// The hex being entered.
    pub destination: HexId,
    /// Travel points still owed.
    pub points_owed: u32,
}

/// State of the current (or last) travel day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelDayState {
    /// Party speed the budget was sized from.
    pub base_speed: u32,
    /// Travel points available today.
    pub travel_points_max: u32,
    /// Travel points left.
    pub travel_points_remaining: u32,
    /// Whether today is a forced march.
    pub is_forced_march: bool,
    /// Forced marches in a row, including today.
    pub consecutive_forced_marches: u32,
    /// Travel days since the last rest, including today.
    pub days_since_rest: u32,
    /// Whether today's lost check has been made.
    pub lost_check_made: bool,
    /// Whether today's encounter check has been made.
    pub encounter_check_made: bool,
    /// Whether today is spent resting.
    #[serde(default)]
    pub is_rest_day: bool,
    /// Outcome of today's lost check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationOutcome>,
    /// A partly entered hex carried over from earlier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_entry: Option<PendingEntry>,
    /// Hexes arrived in today, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hexes_entered: Vec<HexId>,
    /// Encounters triggered today.
    #[serde(default)]
    pub encounters: u32,
    /// Fatigue warnings raised when the day began.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Travel points for a day at `base_speed`.
pub fn daily_budget(base_speed: u32, forced_march: bool) -> u32 {
    let budget = base_speed / 5;
    if forced_march {
        budget + budget / 2
    } else {
        budget
    }
}

impl TravelDayState {
    /// Begin a new travel day after `previous`.
    ///
    /// The rest counter, forced-march streak and any pending entry carry
    /// forward; fatigue warnings are collected in `warnings`.
    pub fn begin(base_speed: u32, forced_march: bool, previous: Option<&TravelDayState>) -> Self {
        let budget = daily_budget(base_speed, forced_march);
        let days_since_rest = previous.map_or(1, |p| p.days_since_rest + 1);
        let consecutive_forced_marches = match (forced_march, previous) {
            (false, _) => 0,
            (true, Some(p)) => p.consecutive_forced_marches + 1,
            (true, None) => 1,
        };

        let mut warnings = Vec::new();
        if previous.is_some_and(|p| p.is_forced_march && !p.is_rest_day) {
            warnings.push("the party force-marched yesterday and has not rested".to_string());
        }
        if days_since_rest > DAYS_BEFORE_REST {
            warnings.push(format!(
                "{DAYS_BEFORE_REST} days of travel without rest: the party needs a rest day"
            ));
        }
        if consecutive_forced_marches >= 2 {
            warnings.push(format!("{consecutive_forced_marches} forced marches in a row"));
        }

        Self {
            base_speed,
            travel_points_max: budget,
            travel_points_remaining: budget,
            is_forced_march: forced_march,
            consecutive_forced_marches,
            days_since_rest,
            lost_check_made: false,
            encounter_check_made: false,
            is_rest_day: false,
            navigation: None,
            pending_entry: previous.and_then(|p| p.pending_entry.clone()),
            hexes_entered: Vec::new(),
            encounters: 0,
            warnings,
        }
    }

    /// Travel points spent so far today.
    pub fn travel_points_spent(&self) -> u32 {
        self.travel_points_max - self.travel_points_remaining
    }

    /// Spend the day resting.
    ///
    /// Clears the rest counter, the forced-march streak and the daily
    /// checks; nothing is left to spend and any half-entered hex is
    /// abandoned.
    pub fn rest(&mut self) -> RestOutcome {
        let outcome = RestOutcome {
            days_since_rest_before: self.days_since_rest,
            forced_march_recovery: self.is_forced_march || self.consecutive_forced_marches > 0,
        };
        self.days_since_rest = 0;
        self.is_forced_march = false;
        self.consecutive_forced_marches = 0;
        self.lost_check_made = false;
        self.encounter_check_made = false;
        self.navigation = None;
        self.travel_points_remaining = 0;
        self.pending_entry = None;
        self.is_rest_day = true;
        self.warnings.clear();
        outcome
    }

    /// A fresh rest day for a party with no travel history.
    pub fn resting(base_speed: u32) -> Self {
        let mut day = Self::begin(base_speed, false, None);
        day.rest();
        day
    }

    /// Summarise the day.
    pub fn summary(&self) -> DaySummary {
        DaySummary {
            hexes_entered: self.hexes_entered.clone(),
            travel_points_spent: self.travel_points_spent(),
            travel_points_max: self.travel_points_max,
            encounters: self.encounters,
            pending_entry: self.pending_entry.clone(),
        }
    }
}

/// What a rest day undid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestOutcome {
    /// Travel days since the previous rest.
    pub days_since_rest_before: u32,
    /// Whether the rest recovered from a forced march.
    pub forced_march_recovery: bool,
}

/// A closed travel day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Hexes arrived in, in order.
    pub hexes_entered: Vec<HexId>,
    /// Travel points used.
    pub travel_points_spent: u32,
    /// Travel points available.
    pub travel_points_max: u32,
    /// Encounters triggered.
    pub encounters: u32,
    /// A hex left half entered, to be finished tomorrow.
    pub pending_entry: Option<PendingEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_from_speed() {
        assert_eq!(daily_budget(40, false), 8);
        assert_eq!(daily_budget(40, true), 12);
        assert_eq!(daily_budget(30, true), 9);
        assert_eq!(daily_budget(20, false), 4);
        assert_eq!(daily_budget(25, true), 7);
    }

    #[test]
    fn first_day() {
        let day = TravelDayState::begin(40, false, None);
        assert_eq!(day.travel_points_remaining, 8);
        assert_eq!(day.days_since_rest, 1);
        assert_eq!(day.consecutive_forced_marches, 0);
        assert!(day.warnings.is_empty());
    }

    #[test]
    fn forced_march_yesterday_warns() {
        let yesterday = TravelDayState::begin(40, true, None);
        let today = TravelDayState::begin(40, false, Some(&yesterday));
        assert_eq!(today.warnings.len(), 1);
        assert!(today.warnings[0].contains("force-marched yesterday"));
    }

    #[test]
    fn two_forced_marches_warn_twice() {
        let yesterday = TravelDayState::begin(40, true, None);
        let today = TravelDayState::begin(40, true, Some(&yesterday));
        assert_eq!(today.consecutive_forced_marches, 2);
        assert_eq!(today.travel_points_max, 12);
        assert_eq!(today.warnings.len(), 2);
    }

    #[test]
    fn seventh_day_needs_rest() {
        let mut day = TravelDayState::begin(40, false, None);
        for _ in 0..5 {
            day = TravelDayState::begin(40, false, Some(&day));
            assert!(day.warnings.is_empty());
        }
        assert_eq!(day.days_since_rest, 6);
        let seventh = TravelDayState::begin(40, false, Some(&day));
        assert_eq!(seventh.warnings.len(), 1);
        assert!(seventh.warnings[0].contains("without rest"));
    }

    #[test]
    fn rest_resets_the_day() {
        let mut day = TravelDayState::begin(40, true, None);
        day.days_since_rest = 6;
        day.lost_check_made = true;
        day.pending_entry = Some(PendingEntry {
            destination: HexId::new("0202"),
            points_owed: 2,
        });

        let outcome = day.rest();
        assert_eq!(outcome.days_since_rest_before, 6);
        assert!(outcome.forced_march_recovery);
        assert_eq!(day.travel_points_remaining, 0);
        assert_eq!(day.days_since_rest, 0);
        assert!(!day.lost_check_made);
        assert!(day.pending_entry.is_none());

        let next = TravelDayState::begin(40, false, Some(&day));
        assert_eq!(next.days_since_rest, 1);
        assert!(next.warnings.is_empty());
    }

    #[test]
    fn pending_entry_carries_over() {
        let mut day = TravelDayState::begin(40, false, None);
        day.pending_entry = Some(PendingEntry {
            destination: HexId::new("0305"),
            points_owed: 1,
        });
        let next = TravelDayState::begin(40, false, Some(&day));
        assert_eq!(next.pending_entry, day.pending_entry);
    }
}
