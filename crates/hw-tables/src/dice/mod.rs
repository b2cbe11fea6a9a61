//! Dice notation and injected randomness.
//!
//! A [`DiceExpression`] is either a bare integer or `NdS[+/-M]`. All
//! randomness flows through [`RollSource`], which every `rand::Rng`
//! implements; tests substitute [`ScriptedRolls`] to drive exact
//! sequences and to count how many draws an operation consumed.

pub mod source;

pub use source::{DrawRecord, Recorded, RollSource, ScriptedRolls};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

const MAX_DICE: u32 = 1_000;
const MAX_SIDES: u32 = 10_000;
const MAX_MODIFIER: i32 = 100_000;

/// A parsed dice expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DiceExpression {
    /// A constant value; evaluating it draws nothing.
    Fixed(i32),
    /// Roll `count` dice of `sides` faces and add `modifier`.
    Roll {
        /// Number of dice.
        count: u32,
        /// Faces per die.
        sides: u32,
        /// Flat amount added to the sum.
        modifier: i32,
    },
}

impl DiceExpression {
    /// Shorthand for `count`d`sides` with no modifier.
    pub fn dice(count: u32, sides: u32) -> Self {
        Self::Roll {
            count,
            sides,
            modifier: 0,
        }
    }

    /// Parse dice notation such as `"2d6+1"`, `"d8"`, `"3d20"` or `"7"`.
    pub fn parse(text: &str) -> DiceResult<Self> {
        let malformed = || DiceError::MalformedExpression(text.to_string());
        let s: String = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if s.is_empty() {
            return Err(malformed());
        }

        let Some((count_part, rest)) = s.split_once('d') else {
            return s.parse::<i32>().map(Self::Fixed).map_err(|_| malformed());
        };

        let count = if count_part.is_empty() {
            1
        } else {
            count_part.parse::<u32>().map_err(|_| malformed())?
        };

        let (sides_part, modifier) = match rest.find(['+', '-']) {
            Some(at) => {
                let (sides, modifier) = rest.split_at(at);
                (sides, modifier.parse::<i32>().map_err(|_| malformed())?)
            }
            None => (rest, 0),
        };
        let sides = sides_part.parse::<u32>().map_err(|_| malformed())?;

        if !(1..=MAX_DICE).contains(&count)
            || !(1..=MAX_SIDES).contains(&sides)
            || !(-MAX_MODIFIER..=MAX_MODIFIER).contains(&modifier)
        {
            return Err(malformed());
        }
        Ok(Self::Roll {
            count,
            sides,
            modifier,
        })
    }

    /// Lowest possible result.
    pub fn min(&self) -> i32 {
        match *self {
            Self::Fixed(n) => n,
            Self::Roll {
                count, modifier, ..
            } => (count as i32).saturating_add(modifier),
        }
    }

    /// Highest possible result.
    pub fn max(&self) -> i32 {
        match *self {
            Self::Fixed(n) => n,
            Self::Roll {
                count,
                sides,
                modifier,
            } => {
                let top = i32::try_from(count.saturating_mul(sides)).unwrap_or(i32::MAX);
                top.saturating_add(modifier)
            }
        }
    }

    /// Whether evaluating this expression consumes randomness.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// Roll the expression and return the total.
    pub fn evaluate(&self, rng: &mut dyn RollSource) -> i32 {
        self.roll_detailed(rng).1
    }

    /// Roll the expression, returning the individual dice and the total.
    pub fn roll_detailed(&self, rng: &mut dyn RollSource) -> (Vec<u32>, i32) {
        match *self {
            Self::Fixed(n) => (Vec::new(), n),
            Self::Roll {
                count,
                sides,
                modifier,
            } => {
                let dice: Vec<u32> = (0..count).map(|_| rng.roll_die(sides)).collect();
                let sum = dice
                    .iter()
                    .fold(0i32, |acc, &d| acc.saturating_add_unsigned(d));
                (dice, sum.saturating_add(modifier))
            }
        }
    }
}

impl FromStr for DiceExpression {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DiceExpression {
    type Error = DiceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<DiceExpression> for String {
    fn from(expr: DiceExpression) -> Self {
        expr.to_string()
    }
}

impl std::fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Fixed(n) => write!(f, "{n}"),
            Self::Roll {
                count,
                sides,
                modifier,
            } => {
                write!(f, "{count}d{sides}")?;
                if modifier > 0 {
                    write!(f, "+{modifier}")
                } else if modifier < 0 {
                    write!(f, "{modifier}")
                } else {
                    Ok(())
                }
            }
        }
    }
}
