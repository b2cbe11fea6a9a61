use serde::{Deserialize, Serialize};

/// Prevailing weather for a travel day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    /// Clear skies.
    #[default]
    Clear,
    /// Grey and dull.
    Overcast,
    /// Fog or mist.
    Fog,
    /// Rain.
    Rain,
    /// Thunderstorm or gale.
    Storm,
    /// Snowfall.
    Snow,
    /// Blizzard.
    Blizzard,
}

impl Weather {
    /// Parse a weather name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "clear" => Some(Self::Clear),
            "overcast" => Some(Self::Overcast),
            "fog" | "mist" => Some(Self::Fog),
            "rain" => Some(Self::Rain),
            "storm" => Some(Self::Storm),
            "snow" => Some(Self::Snow),
            "blizzard" => Some(Self::Blizzard),
            _ => None,
        }
    }

    /// Read the weather out of a table row such as `"Overcast and misty"`.
    ///
    /// The most severe condition named wins.
    pub fn from_description(text: &str) -> Option<Self> {
        let text = text.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| text.contains(w));
        if has(&["blizzard"]) {
            Some(Self::Blizzard)
        } else if has(&["storm", "gale"]) {
            Some(Self::Storm)
        } else if has(&["snow", "sleet"]) {
            Some(Self::Snow)
        } else if has(&["fog", "mist"]) {
            Some(Self::Fog)
        } else if has(&["rain", "drizzle"]) {
            Some(Self::Rain)
        } else if has(&["overcast", "cloud"]) {
            Some(Self::Overcast)
        } else if has(&["clear", "sunny", "hot", "warm"]) {
            Some(Self::Clear)
        } else {
            None
        }
    }

    /// Whether this weather makes navigation harder.
    pub fn reduces_visibility(self) -> bool {
        matches!(self, Self::Fog | Self::Storm | Self::Blizzard)
    }

    /// Narrative effect of travelling in this weather, if any.
    pub fn flavor(self) -> Option<&'static str> {
        match self {
            Self::Clear | Self::Overcast => None,
            Self::Fog => Some("Visibility reduced, navigation harder"),
            Self::Rain => Some("Movement slowed, tracks washed away"),
            Self::Storm => Some("Dangerous conditions, seek shelter"),
            Self::Snow => Some("Movement slowed, cold damage risk"),
            Self::Blizzard => Some("Extreme danger, must seek shelter"),
        }
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clear => write!(f, "clear"),
            Self::Overcast => write!(f, "overcast"),
            Self::Fog => write!(f, "fog"),
            Self::Rain => write!(f, "rain"),
            Self::Storm => write!(f, "storm"),
            Self::Snow => write!(f, "snow"),
            Self::Blizzard => write!(f, "blizzard"),
        }
    }
}
