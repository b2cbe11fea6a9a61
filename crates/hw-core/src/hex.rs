use serde::{Deserialize, Serialize};

/// A hex identifier in `CCRR` form (two-digit column, two-digit row).
///
/// Any string is accepted as an id so that content with unusual labels
/// still loads, but only `CCRR` ids have grid coordinates and neighbours.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexId(String);

impl HexId {
    /// Wrap an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    /// Build an id from grid coordinates (both must be in `1..=99`).
    pub fn from_coords(col: u32, row: u32) -> Option<Self> {
        if (1..=99).contains(&col) && (1..=99).contains(&row) {
            Some(Self(format!("{col:02}{row:02}")))
        } else {
            None
        }
    }

    /// The raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Column and row, when the id is in `CCRR` form.
    pub fn coords(&self) -> Option<(u32, u32)> {
        let s = self.0.as_str();
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let col = s[..2].parse().ok()?;
        let row = s[2..].parse().ok()?;
        Some((col, row))
    }

    /// The adjacent hex in the given direction, if it lies on the grid.
    ///
    /// Columns are flat-topped; even columns sit half a hex lower than
    /// odd ones.
    pub fn neighbour(&self, dir: Direction) -> Option<Self> {
        let (col, row) = self.coords()?;
        let (dc, dr) = dir.offset(col % 2 == 0);
        let col = col.checked_add_signed(dc)?;
        let row = row.checked_add_signed(dr)?;
        Self::from_coords(col, row)
    }

    /// All on-grid neighbours, clockwise from north.
    pub fn neighbours(&self) -> Vec<Self> {
        Direction::ALL
            .iter()
            .filter_map(|d| self.neighbour(*d))
            .collect()
    }

    /// The direction from this hex to `other`, if they are adjacent.
    pub fn direction_to(&self, other: &HexId) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| self.neighbour(*d).as_ref() == Some(other))
    }
}

impl std::fmt::Display for HexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HexId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One of the six hex-grid directions, numbered 1-6 clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Straight up the column.
    North,
    /// Up and right.
    NorthEast,
    /// Down and right.
    SouthEast,
    /// Straight down the column.
    South,
    /// Down and left.
    SouthWest,
    /// Up and left.
    NorthWest,
}

impl Direction {
    /// Every direction, clockwise from north.
    pub const ALL: [Direction; 6] = [
        Self::North,
        Self::NorthEast,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::NorthWest,
    ];

    /// Map a d6 face to a direction. Out-of-range faces wrap.
    pub fn from_d6(roll: u32) -> Self {
        Self::ALL[(roll.max(1) as usize - 1) % 6]
    }

    fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::NorthEast => 1,
            Self::SouthEast => 2,
            Self::South => 3,
            Self::SouthWest => 4,
            Self::NorthWest => 5,
        }
    }

    /// The next direction clockwise.
    pub fn clockwise(self) -> Self {
        Self::ALL[(self.index() + 1) % 6]
    }

    /// The next direction counter-clockwise.
    pub fn counter_clockwise(self) -> Self {
        Self::ALL[(self.index() + 5) % 6]
    }

    fn offset(self, even_column: bool) -> (i32, i32) {
        match (self, even_column) {
            (Self::North, _) => (0, -1),
            (Self::South, _) => (0, 1),
            (Self::NorthEast, true) => (1, 0),
            (Self::NorthEast, false) => (1, -1),
            (Self::SouthEast, true) => (1, 1),
            (Self::SouthEast, false) => (1, 0),
            (Self::SouthWest, true) => (-1, 1),
            (Self::SouthWest, false) => (-1, 0),
            (Self::NorthWest, true) => (-1, 0),
            (Self::NorthWest, false) => (-1, -1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::North => write!(f, "north"),
            Self::NorthEast => write!(f, "north-east"),
            Self::SouthEast => write!(f, "south-east"),
            Self::South => write!(f, "south"),
            Self::SouthWest => write!(f, "south-west"),
            Self::NorthWest => write!(f, "north-west"),
        }
    }
}
