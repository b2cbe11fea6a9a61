use serde::{Deserialize, Serialize};

use crate::chance::InSix;

/// The terrain of a hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainKind {
    /// A maintained road.
    Road,
    /// A rough track or trail.
    Trail,
    /// A settlement and its immediate surrounds.
    Settlement,
    /// Fields and meadows.
    Farmland,
    /// Light forest.
    Forest,
    /// A river hex.
    River,
    /// A lake hex.
    Lake,
    /// Open moorland.
    Moor,
    /// Hills.
    Hills,
    /// Tangled deep forest.
    DeepForest,
    /// Swamp or bog.
    Swamp,
    /// Mountains or crags.
    Mountains,
}

impl TerrainKind {
    /// Every terrain kind.
    pub const ALL: [TerrainKind; 12] = [
        Self::Road,
        Self::Trail,
        Self::Settlement,
        Self::Farmland,
        Self::Forest,
        Self::River,
        Self::Lake,
        Self::Moor,
        Self::Hills,
        Self::DeepForest,
        Self::Swamp,
        Self::Mountains,
    ];

    /// Parse a terrain name, accepting common aliases.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace([' ', '-'], "_");
        match s.as_str() {
            "road" => Some(Self::Road),
            "trail" | "track" => Some(Self::Trail),
            "settlement" | "town" | "village" => Some(Self::Settlement),
            "farmland" | "meadow" | "fields" => Some(Self::Farmland),
            "forest" | "light_forest" => Some(Self::Forest),
            "river" => Some(Self::River),
            "lake" => Some(Self::Lake),
            "moor" | "moorland" => Some(Self::Moor),
            "hills" | "hill" => Some(Self::Hills),
            "deep_forest" | "deepforest" | "tangled_forest" => Some(Self::DeepForest),
            "swamp" | "bog" | "marsh" => Some(Self::Swamp),
            "mountains" | "mountain" | "crags" => Some(Self::Mountains),
            _ => None,
        }
    }

    /// Whether this terrain is a road, on which the party cannot get lost.
    pub fn is_road(self) -> bool {
        self == Self::Road
    }

    /// The static travel profile for this terrain.
    pub fn profile(self) -> TerrainProfile {
        terrain_profile(self)
    }
}

impl std::fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Road => write!(f, "road"),
            Self::Trail => write!(f, "trail"),
            Self::Settlement => write!(f, "settlement"),
            Self::Farmland => write!(f, "farmland"),
            Self::Forest => write!(f, "forest"),
            Self::River => write!(f, "river"),
            Self::Lake => write!(f, "lake"),
            Self::Moor => write!(f, "moor"),
            Self::Hills => write!(f, "hills"),
            Self::DeepForest => write!(f, "deep_forest"),
            Self::Swamp => write!(f, "swamp"),
            Self::Mountains => write!(f, "mountains"),
        }
    }
}

/// Who may ride or drive into a terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MountAccess {
    /// Mounts and vehicles pass freely.
    Allowed,
    /// Riders must dismount and lead; vehicles cannot enter.
    MountsMustBeLed,
    /// Neither mounts nor vehicles can enter.
    None,
}

impl MountAccess {
    /// Whether a mounted party may enter at all (possibly leading).
    pub fn admits_mounts(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether a wheeled vehicle may enter.
    pub fn admits_vehicles(self) -> bool {
        matches!(self, Self::Allowed)
    }
}

impl std::fmt::Display for MountAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allowed => write!(f, "allowed"),
            Self::MountsMustBeLed => write!(f, "mounts must be led"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Static travel data for one terrain kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TerrainProfile {
    /// The terrain this profile describes.
    pub kind: TerrainKind,
    /// Travel points to enter or search a hex of this terrain.
    pub cost: u32,
    /// Base chance of getting lost.
    pub lost_chance: InSix,
    /// Base chance of a wandering encounter.
    pub encounter_chance: InSix,
    /// Mount and vehicle permission.
    pub access: MountAccess,
    /// A line of narrative description.
    pub description: &'static str,
}

/// Look up the travel profile of a terrain kind.
pub fn terrain_profile(kind: TerrainKind) -> TerrainProfile {
    use MountAccess as M;
    use TerrainKind as T;

    let (cost, lost, encounter, access, description) = match kind {
        T::Road => (2, 0, 0, M::Allowed, "A well-trodden road winds onward."),
        T::Trail => (2, 1, 1, M::Allowed, "A narrow track threads between the trees."),
        T::Settlement => (2, 0, 0, M::Allowed, "Fences, hedges and chimney smoke."),
        T::Farmland => (2, 1, 1, M::Allowed, "Hedged fields and muddy lanes."),
        T::Forest => (2, 1, 1, M::Allowed, "Light woodland, dappled and quiet."),
        T::River => (2, 1, 1, M::Allowed, "The ground dips toward running water."),
        T::Lake => (2, 1, 1, M::Allowed, "Reeds and still water line the way."),
        T::Moor => (3, 2, 2, M::MountsMustBeLed, "Wind-scoured heather under a wide sky."),
        T::Hills => (3, 2, 2, M::MountsMustBeLed, "Steep slopes and hidden hollows."),
        T::DeepForest => (4, 3, 3, M::None, "Ancient trees crowd out the light."),
        T::Swamp => (4, 3, 3, M::None, "Sucking mud and stagnant pools."),
        T::Mountains => (4, 3, 3, M::None, "Bare rock and treacherous scree."),
    };

    TerrainProfile {
        kind,
        cost,
        lost_chance: InSix::new(lost),
        encounter_chance: InSix::new(encounter),
        access,
        description,
    }
}
