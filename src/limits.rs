use crate::common::UInt;

/// Safety ceilings applied while parsing and rolling.
///
/// `max_dice` bounds the dice count a notation may ask for; larger counts are
/// rejected rather than clamped. `max_rolls` bounds the total number of dice
/// generated by a single evaluation, including every die added by an
/// exploding chain, so an exploding roll always terminates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Limits {
    max_dice: UInt,
    max_rolls: usize,
}

impl Limits {
    pub const DEFAULT_MAX_DICE: UInt = 100;
    pub const DEFAULT_MAX_ROLLS: usize = 1000;

    pub const fn new(max_dice: UInt, max_rolls: usize) -> Self {
        Self {
            max_dice,
            max_rolls,
        }
    }

    pub const fn with_max_dice(mut self, max_dice: UInt) -> Self {
        self.max_dice = max_dice;
        self
    }

    pub const fn with_max_rolls(mut self, max_rolls: usize) -> Self {
        self.max_rolls = max_rolls;
        self
    }

    pub const fn max_dice(&self) -> UInt {
        self.max_dice
    }

    pub const fn max_rolls(&self) -> usize {
        self.max_rolls
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DICE, Self::DEFAULT_MAX_ROLLS)
    }
}
