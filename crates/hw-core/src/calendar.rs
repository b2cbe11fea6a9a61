use serde::{Deserialize, Serialize};

/// The four daylight bands a check can happen in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// First light.
    Dawn,
    /// Full daylight.
    Day,
    /// Last light.
    Dusk,
    /// Darkness.
    Night,
}

impl TimeOfDay {
    /// Parse a time of day. Accepts `daytime`/`nighttime` as aliases.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dawn" => Some(Self::Dawn),
            "day" | "daytime" => Some(Self::Day),
            "dusk" => Some(Self::Dusk),
            "night" | "nighttime" => Some(Self::Night),
            _ => None,
        }
    }

    /// Collapse into the two-band day/night split used by settlement tables.
    pub fn broad(self) -> Self {
        match self {
            Self::Dawn | Self::Day => Self::Day,
            Self::Dusk | Self::Night => Self::Night,
        }
    }

    /// Whether travel in this band counts as travelling in darkness.
    pub fn is_dark(self) -> bool {
        self == Self::Night
    }

    /// Whether a table restricted to `self` applies at time `now`.
    ///
    /// `Day` covers dawn and `Night` covers dusk; dawn and dusk only
    /// cover themselves.
    pub fn covers(self, now: TimeOfDay) -> bool {
        match self {
            Self::Day | Self::Night => now.broad() == self,
            Self::Dawn | Self::Dusk => now == self,
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dawn => write!(f, "dawn"),
            Self::Day => write!(f, "day"),
            Self::Dusk => write!(f, "dusk"),
            Self::Night => write!(f, "night"),
        }
    }
}

/// A calendar season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// Spring.
    Spring,
    /// Summer.
    Summer,
    /// Autumn.
    Autumn,
    /// Winter.
    Winter,
}

impl Season {
    /// All seasons in calendar order.
    pub const ALL: [Season; 4] = [Self::Spring, Self::Summer, Self::Autumn, Self::Winter];

    /// Parse a season name. `fall` is accepted for autumn.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "autumn" | "fall" => Some(Self::Autumn),
            "winter" => Some(Self::Winter),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spring => write!(f, "spring"),
            Self::Summer => write!(f, "summer"),
            Self::Autumn => write!(f, "autumn"),
            Self::Winter => write!(f, "winter"),
        }
    }
}

/// A magical unseason that temporarily overrides the normal season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unseason {
    /// Serpents and wyrms abroad.
    Chame,
    /// The dead walk.
    Vague,
    /// Strange hitchings of fate.
    Hitching,
    /// The fairy spring.
    Colliggwyld,
}

impl Unseason {
    /// Parse an unseason name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "chame" => Some(Self::Chame),
            "vague" => Some(Self::Vague),
            "hitching" => Some(Self::Hitching),
            "colliggwyld" => Some(Self::Colliggwyld),
            _ => None,
        }
    }
}

impl std::fmt::Display for Unseason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chame => write!(f, "chame"),
            Self::Vague => write!(f, "vague"),
            Self::Hitching => write!(f, "hitching"),
            Self::Colliggwyld => write!(f, "colliggwyld"),
        }
    }
}

/// Tracks whether an unseason is in force and how long it lasts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnseasonState {
    /// The unseason currently in force.
    pub active: Option<Unseason>,
    /// Days left before it ends.
    pub days_remaining: u32,
}

impl UnseasonState {
    /// Begin an unseason lasting `days` days. Replaces any active one.
    pub fn start(&mut self, unseason: Unseason, days: u32) {
        self.active = (days > 0).then_some(unseason);
        self.days_remaining = days;
    }

    /// End the current unseason immediately.
    pub fn end(&mut self) {
        self.active = None;
        self.days_remaining = 0;
    }

    /// Advance one day. Returns the unseason that ended today, if any.
    pub fn advance_day(&mut self) -> Option<Unseason> {
        let current = self.active?;
        self.days_remaining = self.days_remaining.saturating_sub(1);
        if self.days_remaining == 0 {
            self.active = None;
            Some(current)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broad_bands() {
        assert_eq!(TimeOfDay::Dawn.broad(), TimeOfDay::Day);
        assert_eq!(TimeOfDay::Dusk.broad(), TimeOfDay::Night);
        assert!(TimeOfDay::Day.covers(TimeOfDay::Dawn));
        assert!(TimeOfDay::Night.covers(TimeOfDay::Dusk));
        assert!(!TimeOfDay::Dawn.covers(TimeOfDay::Day));
        assert!(!TimeOfDay::Day.covers(TimeOfDay::Night));
    }

    #[test]
    fn parse_names() {
        assert_eq!(TimeOfDay::parse("Nighttime"), Some(TimeOfDay::Night));
        assert_eq!(Season::parse("fall"), Some(Season::Autumn));
        assert_eq!(Unseason::parse("VAGUE"), Some(Unseason::Vague));
        assert_eq!(Unseason::parse("summer"), None);
    }

    #[test]
    fn unseason_runs_out() {
        let mut state = UnseasonState::default();
        state.start(Unseason::Chame, 2);
        assert_eq!(state.active, Some(Unseason::Chame));
        assert_eq!(state.advance_day(), None);
        assert_eq!(state.advance_day(), Some(Unseason::Chame));
        assert_eq!(state.active, None);
        assert_eq!(state.advance_day(), None);
    }

    #[test]
    fn unseason_end_and_zero_length() {
        let mut state = UnseasonState::default();
        state.start(Unseason::Vague, 0);
        assert_eq!(state.active, None);
        state.start(Unseason::Vague, 5);
        state.end();
        assert_eq!(state, UnseasonState::default());
    }
}
