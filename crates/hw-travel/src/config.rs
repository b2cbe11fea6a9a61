use serde::{Deserialize, Serialize};

use hw_core::{MountAccess, TerrainProfile};

/// Slowest speed a party can be configured with.
pub const MIN_BASE_SPEED: u32 = 5;
/// Fastest speed a party can be configured with.
pub const MAX_BASE_SPEED: u32 = 120;

/// How the party gets about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conveyance {
    /// Walking.
    #[default]
    OnFoot,
    /// Riding horses or other mounts.
    Mounted,
    /// Driving a cart or wagon.
    Vehicle,
}

impl Conveyance {
    /// Parse a conveyance name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "on_foot" | "foot" | "walking" => Some(Self::OnFoot),
            "mounted" | "horse" | "riding" => Some(Self::Mounted),
            "vehicle" | "cart" | "wagon" => Some(Self::Vehicle),
            _ => None,
        }
    }

    /// Unencumbered speed in feet per round.
    pub fn default_speed(self) -> u32 {
        match self {
            Self::OnFoot | Self::Mounted => 40,
            Self::Vehicle => 30,
        }
    }

    /// Check whether this conveyance may enter a terrain.
    ///
    /// `Ok(Some(note))` means entry is allowed with a caveat (mounts led on
    /// foot); `Err` names the restriction that blocks it.
    pub fn check_entry(self, profile: &TerrainProfile) -> Result<Option<String>, String> {
        match (self, profile.access) {
            (Self::OnFoot, _) | (_, MountAccess::Allowed) => Ok(None),
            (Self::Mounted, MountAccess::MountsMustBeLed) => Ok(Some(format!(
                "riders dismount and lead their mounts through the {}",
                profile.kind
            ))),
            (Self::Mounted, MountAccess::None) => {
                Err(format!("mounts cannot enter {} terrain", profile.kind))
            }
            (Self::Vehicle, _) => Err(format!("vehicles cannot enter {} terrain", profile.kind)),
        }
    }
}

impl std::fmt::Display for Conveyance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OnFoot => write!(f, "on foot"),
            Self::Mounted => write!(f, "mounted"),
            Self::Vehicle => write!(f, "vehicle"),
        }
    }
}

/// Party options for a travel session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelConfig {
    /// RNG seed for deterministic sessions.
    pub seed: u64,
    /// How the party travels.
    pub conveyance: Conveyance,
    /// Speed override, e.g. for an encumbered party.
    pub base_speed: Option<u32>,
    /// Whether a local guide leads the way.
    pub has_guide: bool,
    /// Whether the party carries a map of the area.
    pub has_map: bool,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            conveyance: Conveyance::OnFoot,
            base_speed: None,
            has_guide: false,
            has_map: false,
        }
    }
}

impl TravelConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set how the party travels.
    pub fn with_conveyance(mut self, conveyance: Conveyance) -> Self {
        self.conveyance = conveyance;
        self
    }

    /// Override the party speed, clamped to a sane range.
    pub fn with_base_speed(mut self, speed: u32) -> Self {
        self.base_speed = Some(speed.clamp(MIN_BASE_SPEED, MAX_BASE_SPEED));
        self
    }

    /// Set whether a guide is present.
    pub fn with_guide(mut self, has_guide: bool) -> Self {
        self.has_guide = has_guide;
        self
    }

    /// Set whether the party has a map.
    pub fn with_map(mut self, has_map: bool) -> Self {
        self.has_map = has_map;
        self
    }

    /// The speed used to size each day's budget.
    pub fn base_speed(&self) -> u32 {
        self.base_speed
            .unwrap_or_else(|| self.conveyance.default_speed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hw_core::TerrainKind;

    #[test]
    fn config_default_values() {
        let config = TravelConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.conveyance, Conveyance::OnFoot);
        assert_eq!(config.base_speed(), 40);
        assert!(!config.has_guide);
        assert!(!config.has_map);
    }

    #[test]
    fn config_builder_chain() {
        let config = TravelConfig::default()
            .with_seed(7)
            .with_conveyance(Conveyance::Vehicle)
            .with_guide(true)
            .with_map(true);
        assert_eq!(config.seed, 7);
        assert_eq!(config.base_speed(), 30);
        assert!(config.has_guide && config.has_map);
    }

    #[test]
    fn speed_override_is_clamped() {
        assert_eq!(TravelConfig::default().with_base_speed(20).base_speed(), 20);
        assert_eq!(TravelConfig::default().with_base_speed(0).base_speed(), 5);
        assert_eq!(TravelConfig::default().with_base_speed(500).base_speed(), 120);
    }

    #[test]
    fn entry_rules() {
        let swamp = TerrainKind::Swamp.profile();
        let moor = TerrainKind::Moor.profile();
        let road = TerrainKind::Road.profile();

        assert_eq!(Conveyance::OnFoot.check_entry(&swamp), Ok(None));
        assert_eq!(Conveyance::Vehicle.check_entry(&road), Ok(None));
        assert!(Conveyance::Mounted.check_entry(&moor).unwrap().is_some());
        assert_eq!(
            Conveyance::Mounted.check_entry(&swamp),
            Err("mounts cannot enter swamp terrain".to_string())
        );
        assert!(Conveyance::Vehicle.check_entry(&moor).is_err());
    }

    #[test]
    fn parse_names() {
        assert_eq!(Conveyance::parse("on-foot"), Some(Conveyance::OnFoot));
        assert_eq!(Conveyance::parse("Wagon"), Some(Conveyance::Vehicle));
        assert_eq!(Conveyance::parse("boat"), None);
    }
}
