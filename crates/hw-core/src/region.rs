use serde::{Deserialize, Serialize};

/// A named region of the map, each with its own encounter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// The ancient heart-wood.
    Aldweald,
    /// Lakes, rivers and their shores.
    Aquatic,
    /// The Dwelmfurgh.
    Dwelmfurgh,
    /// The Fever Marsh.
    FeverMarsh,
    /// Hag's Addle.
    HagsAddle,
    /// The High Wold.
    HighWold,
    /// Mulchgrove.
    Mulchgrove,
    /// The Nagwood.
    Nagwood,
    /// The Northern Scratch.
    NorthernScratch,
    /// The Table Downs.
    TableDowns,
    /// The Tithelands.
    Tithelands,
    /// The Valley of Wise Beasts.
    ValleyOfWiseBeasts,
}

impl Region {
    /// Every region.
    pub const ALL: [Region; 12] = [
        Self::Aldweald,
        Self::Aquatic,
        Self::Dwelmfurgh,
        Self::FeverMarsh,
        Self::HagsAddle,
        Self::HighWold,
        Self::Mulchgrove,
        Self::Nagwood,
        Self::NorthernScratch,
        Self::TableDowns,
        Self::Tithelands,
        Self::ValleyOfWiseBeasts,
    ];

    /// Snake-case key, e.g. `hags_addle`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Aldweald => "aldweald",
            Self::Aquatic => "aquatic",
            Self::Dwelmfurgh => "dwelmfurgh",
            Self::FeverMarsh => "fever_marsh",
            Self::HagsAddle => "hags_addle",
            Self::HighWold => "high_wold",
            Self::Mulchgrove => "mulchgrove",
            Self::Nagwood => "nagwood",
            Self::NorthernScratch => "northern_scratch",
            Self::TableDowns => "table_downs",
            Self::Tithelands => "tithelands",
            Self::ValleyOfWiseBeasts => "valley_of_wise_beasts",
        }
    }

    /// Parse a region from its key or display name ("Hag's Addle").
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .trim()
            .to_lowercase()
            .replace(['\'', '\u{2019}'], "")
            .replace([' ', '-'], "_");
        let key = key.strip_prefix("the_").unwrap_or(&key);
        Self::ALL.into_iter().find(|r| r.key() == key)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aldweald => write!(f, "Aldweald"),
            Self::Aquatic => write!(f, "Aquatic"),
            Self::Dwelmfurgh => write!(f, "Dwelmfurgh"),
            Self::FeverMarsh => write!(f, "Fever Marsh"),
            Self::HagsAddle => write!(f, "Hag's Addle"),
            Self::HighWold => write!(f, "High Wold"),
            Self::Mulchgrove => write!(f, "Mulchgrove"),
            Self::Nagwood => write!(f, "Nagwood"),
            Self::NorthernScratch => write!(f, "Northern Scratch"),
            Self::TableDowns => write!(f, "Table Downs"),
            Self::Tithelands => write!(f, "Tithelands"),
            Self::ValleyOfWiseBeasts => write!(f, "Valley of Wise Beasts"),
        }
    }
}

/// What kind of place the party is in when a check happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    /// Open wilderness.
    #[default]
    Wilderness,
    /// Inside a settlement.
    Settlement,
    /// Walking a fairy road.
    FairyRoad,
    /// Inside a dungeon.
    Dungeon,
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wilderness => write!(f, "wilderness"),
            Self::Settlement => write!(f, "settlement"),
            Self::FairyRoad => write!(f, "fairy road"),
            Self::Dungeon => write!(f, "dungeon"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_display_names() {
        assert_eq!(Region::parse("Hag's Addle"), Some(Region::HagsAddle));
        assert_eq!(Region::parse("high_wold"), Some(Region::HighWold));
        assert_eq!(
            Region::parse("The Valley of Wise Beasts"),
            Some(Region::ValleyOfWiseBeasts)
        );
        assert_eq!(Region::parse("Atlantis"), None);
    }

    #[test]
    fn every_region_round_trips() {
        for region in Region::ALL {
            assert_eq!(Region::parse(region.key()), Some(region));
            assert_eq!(Region::parse(&region.to_string()), Some(region));
        }
    }
}
