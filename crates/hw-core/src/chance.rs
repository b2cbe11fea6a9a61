use serde::{Deserialize, Serialize};

/// An "X-in-6" chance: a d6 roll of 1 through X is a hit.
///
/// The value is always within `0..=6`; 0 never hits and 6 always hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InSix(u8);

impl InSix {
    /// A chance that never hits.
    pub const NEVER: Self = Self(0);

    /// Build a chance, clamping into `0..=6`.
    pub fn new(x: i32) -> Self {
        Self(x.clamp(0, 6) as u8)
    }

    /// The X in "X-in-6".
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether a d6 roll counts as a hit.
    pub fn hits(self, roll: u32) -> bool {
        roll <= u32::from(self.0)
    }

    /// Parse `"2-in-6"`, `"2 in 6"`, `"2/6"` or a bare `"2"`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let head = if let Some((x, six)) = s.split_once("-in-") {
            (six.trim() == "6").then_some(x)?
        } else if let Some((x, six)) = s.split_once(" in ") {
            (six.trim() == "6").then_some(x)?
        } else if let Some((x, six)) = s.split_once('/') {
            (six.trim() == "6").then_some(x)?
        } else {
            s.as_str()
        };
        let x = head.trim().parse::<i32>().ok()?;
        (0..=6).contains(&x).then(|| Self::new(x))
    }
}

impl std::fmt::Display for InSix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-in-6", self.0)
    }
}
