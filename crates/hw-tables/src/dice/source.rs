//! Random sources for rolling dice.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Anything that can roll a single die.
///
/// Every `rand::Rng` is a source, so a seeded `StdRng` is the normal
/// production choice.
pub trait RollSource {
    /// Roll one die, returning a value in `1..=sides`.
    fn roll_die(&mut self, sides: u32) -> u32;
}

impl<R: Rng> RollSource for R {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides.max(1))
    }
}

/// Replays a fixed sequence of die faces.
///
/// Values are clamped into the die's range; once the script runs out it
/// starts again from the beginning. An empty script always rolls 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    values: Vec<u32>,
    cursor: usize,
    draws: usize,
}

impl ScriptedRolls {
    /// Create a source that yields `values` in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
            draws: 0,
        }
    }

    /// How many dice have been rolled so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// How many scripted values are left before the script wraps.
    pub fn remaining(&self) -> usize {
        self.values.len().saturating_sub(self.cursor)
    }
}

impl RollSource for ScriptedRolls {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.draws += 1;
        if self.values.is_empty() {
            return 1;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(1, sides.max(1))
    }
}

/// One die roll captured by [`Recorded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    /// Faces on the die.
    pub sides: u32,
    /// The face rolled.
    pub value: u32,
}

/// Wraps a source and keeps a log of every die it rolls.
///
/// The log can be turned back into a [`ScriptedRolls`] to replay a
/// session exactly.
#[derive(Debug, Clone)]
pub struct Recorded<S> {
    inner: S,
    log: Vec<DrawRecord>,
}

impl<S: RollSource> Recorded<S> {
    /// Start recording draws from `inner`.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            log: Vec::new(),
        }
    }

    /// Every draw so far, in order.
    pub fn log(&self) -> &[DrawRecord] {
        &self.log
    }

    /// A script that replays the recorded faces.
    pub fn to_script(&self) -> ScriptedRolls {
        ScriptedRolls::new(self.log.iter().map(|d| d.value))
    }

    /// Stop recording and return the wrapped source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: RollSource> RollSource for Recorded<S> {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let value = self.inner.roll_die(sides);
        self.log.push(DrawRecord { sides, value });
        value
    }
}
