use super::roller::Roller;
use super::tree::DiceRoll;
use crate::common::*;
use crate::limits::Limits;
use crate::ops::Operate;
use crate::parse::ast::DiceExpression;

pub type DefaultRoller = rand::rngs::ThreadRng;

/// Per-evaluation state: the roller and how many dice it has produced.
pub struct RollContext<R = DefaultRoller> {
    max_rolls: usize,
    rolls: usize,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(limits: &Limits, roller: R) -> Self {
        Self {
            max_rolls: limits.max_rolls(),
            rolls: 0,
            roller,
        }
    }

    /// Number of dice rolled so far.
    pub fn rolls(&self) -> usize {
        self.rolls
    }

    /// Rolls `num` dice unconditionally.
    ///
    /// The dice count of an expression is bounded at parse time, so the
    /// initial pool is never cut short by the roll budget.
    pub fn roll(&mut self, num: usize, sides: NonZeroUInt) -> impl Iterator<Item = UInt> + '_ {
        self.rolls += num;
        let roller = &mut self.roller;
        (0..num).map(move |_| R::roll(roller, sides))
    }

    /// Rolls one extra die, or `None` once the roll budget is spent.
    pub fn roll_one(&mut self, sides: NonZeroUInt) -> Option<UInt> {
        if self.rolls >= self.max_rolls {
            return None;
        }
        self.rolls += 1;
        Some(self.roller.roll(sides))
    }

    pub fn eval(&mut self, expr: &DiceExpression) -> DiceRoll {
        let mut ret = DiceRoll::roll_new(self, expr);
        if let Some(modifier) = &expr.modifier {
            modifier.operate(&mut ret, self);
        }
        tracing::debug!(
            expression = %expr,
            rolls = self.rolls,
            total = ret.total(),
            "evaluated dice expression"
        );
        ret
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(&Limits::default(), rand::thread_rng())
    }
}
