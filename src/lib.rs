//! Dice notation evaluator for Basic Fantasy RPG character sheets.
//!
//! A notation names a pool of dice and at most one modifier:
//!
//! | notation        | meaning                             |
//! |-----------------|-------------------------------------|
//! | `3d6`, `d20`    | roll and sum (count defaults to 1)  |
//! | `1d20+5`, `1d6-1` | flat modifier                     |
//! | `2d20K`, `4d6kh3` | keep highest N (default 1)        |
//! | `2d20KL`        | keep lowest N (default 1)           |
//! | `4d6L`, `4d6dl1` | drop lowest N (default 1)          |
//! | `4d6DH`         | drop highest N (default 1)          |
//! | `1d8e`, `1d8!`  | exploding dice                      |
//!
//! ```
//! let result = bfrpg_dice::roll("4d6L").unwrap();
//! assert_eq!(result.rolls().len(), 4);
//! assert_eq!(result.formula(), "4d6L");
//! assert!((3..=18).contains(&result.total()));
//!
//! assert!(bfrpg_dice::validate("0d6").is_err());
//! ```

mod common;
mod error;
mod limits;
pub mod ops;
pub mod parse;
pub mod roll;

pub use common::{Int, NonZeroUInt, UInt};
pub use error::RollError;
pub use limits::Limits;
pub use ops::{End, Explode, Flat, Keep, Modifier, Sign};
pub use parse::ast::DiceExpression;
pub use roll::{Die, MarkdownStringifier, RollResult, Roller, SimpleStringifier, Stringify};

use parse::ParseErrorKind;
use roll::RollContext;

/// Parses and rolls notations under a fixed set of [`Limits`].
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Evaluator {
    limits: Limits,
}

impl Evaluator {
    pub const fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Checks a notation without rolling anything.
    pub fn validate(&self, notation: &str) -> Result<(), RollError> {
        self.parse(notation).map(|_| ())
    }

    pub fn parse(&self, notation: &str) -> Result<DiceExpression, RollError> {
        parse::parse(notation, self.limits).map_err(|err| {
            tracing::debug!(notation, error = %err, "rejected dice notation");
            err.into()
        })
    }

    /// Rolls a notation with the thread-local generator.
    pub fn roll(&self, notation: &str) -> Result<RollResult, RollError> {
        self.roll_with(notation, rand::thread_rng())
    }

    pub fn roll_with<R: Roller>(&self, notation: &str, roller: R) -> Result<RollResult, RollError> {
        let expr = self.parse(notation)?;
        let roll = RollContext::new(&self.limits, roller).eval(&expr);
        Ok(RollResult::new(notation, roll))
    }

    /// Rolls an expression built in code; its formula is the canonical notation.
    ///
    /// The expression is held to the same dice ceiling as parsed notation.
    pub fn roll_expression<R: Roller>(
        &self,
        expr: &DiceExpression,
        roller: R,
    ) -> Result<RollResult, RollError> {
        let max = self.limits.max_dice();
        if expr.count.get() > max {
            return Err(RollError::invalid(
                ParseErrorKind::TooManyDice { max },
                expr,
            ));
        }
        let roll = RollContext::new(&self.limits, roller).eval(expr);
        Ok(RollResult::new(expr.to_string(), roll))
    }
}

/// Checks a notation under the default [`Limits`].
pub fn validate(notation: &str) -> Result<(), RollError> {
    Evaluator::default().validate(notation)
}

pub fn parse(notation: &str) -> Result<DiceExpression, RollError> {
    Evaluator::default().parse(notation)
}

/// Rolls a notation under the default [`Limits`] with the thread-local generator.
pub fn roll(notation: &str) -> Result<RollResult, RollError> {
    Evaluator::default().roll(notation)
}

pub fn roll_with<R: Roller>(notation: &str, roller: R) -> Result<RollResult, RollError> {
    Evaluator::default().roll_with(notation, roller)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_one_sided_die() {
        let r = roll("1d1").unwrap();
        assert_eq!(r.total(), 1);
        assert_eq!(r.rolls(), &[1]);
    }

    #[test]
    fn test_rejections() {
        for bad in ["0d6", "1d0", "abc", "10000d6", "", "1d6+", "2d6 3"] {
            let err = roll(bad).unwrap_err();
            assert!(matches!(err, RollError::InvalidNotation(_)), "{}", bad);
        }
    }

    #[test]
    fn test_offending_text() {
        let err = validate("10000d6").unwrap_err();
        assert_eq!(err.offending_text(), "10000");
        assert_eq!(err.kind(), &ParseErrorKind::TooManyDice { max: 100 });
    }

    #[test]
    fn test_explosion_terminates_at_budget() {
        let r = roll("1d1e").unwrap();
        assert_eq!(r.rolls().len(), Limits::DEFAULT_MAX_ROLLS);
        assert_eq!(r.total(), Limits::DEFAULT_MAX_ROLLS as Int);

        let evaluator = Evaluator::new(Limits::default().with_max_rolls(10));
        let r = evaluator.roll("3d1!").unwrap();
        assert_eq!(r.rolls().len(), 10);
        assert_eq!(r.dice()[0].values().len(), 8);
        assert_eq!(r.dice()[1].values().len(), 1);
    }

    #[test]
    fn test_custom_limits() {
        let evaluator = Evaluator::new(Limits::default().with_max_dice(3));
        assert!(evaluator.validate("3d6").is_ok());
        assert!(evaluator.validate("4d6").is_err());
    }

    #[test]
    fn test_roll_expression() {
        let expr = DiceExpression::new(NonZeroUInt::new(2).unwrap(), NonZeroUInt::new(6).unwrap())
            .with_modifier(Flat::add(3));
        let r = Evaluator::default().roll_expression(&expr, rng(1)).unwrap();
        assert_eq!(r.formula(), "2d6+3");
        assert!((5..=15).contains(&r.total()));

        let too_many = DiceExpression::new(NonZeroUInt::new(500).unwrap(), NonZeroUInt::new(6).unwrap());
        let err = Evaluator::default().roll_expression(&too_many, rng(1)).unwrap_err();
        assert_eq!(err.offending_text(), "500d6");
    }

    #[test]
    fn test_seeded_rolls_repeat() {
        let a = roll_with("10d10", rng(42)).unwrap();
        let b = roll_with("10d10", rng(42)).unwrap();
        assert_eq!(a, b);
    }

    fn sorted_desc(rolls: &[UInt]) -> Vec<Int> {
        let mut v: Vec<Int> = rolls.iter().map(|&x| Int::from(x)).collect();
        v.sort_unstable_by(|a, b| b.cmp(a));
        v
    }

    proptest! {
        #[test]
        fn prop_plain_pool_in_bounds(n in 1u32..=100, m in 1u32..=1000, seed in any::<u64>()) {
            let notation = format!("{}d{}", n, m);
            let r = roll_with(&notation, rng(seed)).unwrap();
            prop_assert_eq!(r.rolls().len(), n as usize);
            prop_assert!(r.rolls().iter().all(|&x| (1..=m).contains(&x)));
            prop_assert!(r.total() >= Int::from(n));
            prop_assert!(r.total() <= Int::from(n) * Int::from(m));
            prop_assert_eq!(r.formula(), notation.as_str());
        }

        #[test]
        fn prop_flat_modifier(n in 1u32..=20, m in 1u32..=20, k in 0u32..=50, minus in any::<bool>(), seed in any::<u64>()) {
            let sign = if minus { '-' } else { '+' };
            let r = roll_with(&format!("{}d{}{}{}", n, m, sign, k), rng(seed)).unwrap();
            let sum: Int = r.rolls().iter().map(|&x| Int::from(x)).sum();
            let k = Int::from(k);
            prop_assert_eq!(r.total(), if minus { sum - k } else { sum + k });
        }

        #[test]
        fn prop_drop_lowest_one(n in 2u32..=20, m in 1u32..=20, seed in any::<u64>()) {
            let r = roll_with(&format!("{}d{}L", n, m), rng(seed)).unwrap();
            let sum: Int = r.rolls().iter().map(|&x| Int::from(x)).sum();
            let min = r.rolls().iter().copied().min().map(Int::from).unwrap();
            prop_assert_eq!(r.total(), sum - min);
            prop_assert_eq!(r.dice().iter().filter(|d| !d.is_kept()).count(), 1);
        }

        #[test]
        fn prop_keep_highest_one(n in 1u32..=20, m in 1u32..=20, seed in any::<u64>()) {
            let r = roll_with(&format!("{}d{}K", n, m), rng(seed)).unwrap();
            let max = r.rolls().iter().copied().max().map(Int::from).unwrap();
            prop_assert_eq!(r.total(), max);
        }

        #[test]
        fn prop_keep_highest_n(n in 1u32..=20, keep in 0u32..=25, seed in any::<u64>()) {
            let r = roll_with(&format!("{}d6kh{}", n, keep), rng(seed)).unwrap();
            let expected: Int = sorted_desc(r.rolls()).into_iter().take(keep as usize).sum();
            prop_assert_eq!(r.total(), expected);
        }

        #[test]
        fn prop_exploding_chains(n in 1u32..=10, m in 2u32..=6, seed in any::<u64>()) {
            let r = roll_with(&format!("{}d{}e", n, m), rng(seed)).unwrap();
            prop_assert_eq!(r.dice().len(), n as usize);
            for die in r.dice() {
                let (last, chain) = die.values().split_last().unwrap();
                prop_assert!(chain.iter().all(|&x| x == m));
                prop_assert!(*last != m);
            }
            let sum: Int = r.rolls().iter().map(|&x| Int::from(x)).sum();
            prop_assert_eq!(r.total(), sum);
        }

        #[test]
        fn prop_repeatable_shape(seed in any::<u64>()) {
            let mut rng = rng(seed);
            for _ in 0..10 {
                let r = roll_with("4d6L", &mut rng).unwrap();
                prop_assert_eq!(r.rolls().len(), 4);
                prop_assert!((3..=18).contains(&r.total()));
            }
        }
    }
}
