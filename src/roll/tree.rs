use super::{roller::Roller, RollContext};
use crate::common::*;
use crate::ops::Flat;
use crate::parse::ast::DiceExpression;

/// One die of a pool together with the dice it exploded into.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Die {
    values: NonEmpty<UInt>,
    kept: bool,
}

impl Die {
    pub(crate) fn new(value: UInt) -> Self {
        Self {
            values: vec1![value],
            kept: true,
        }
    }

    /// Faces in roll order; every face but the last triggered an explosion.
    pub fn values(&self) -> &[UInt] {
        &self.values
    }

    pub fn is_kept(&self) -> bool {
        self.kept
    }

    pub fn is_exploded(&self) -> bool {
        self.values.len() > 1
    }

    /// Sum of the whole chain, whether or not the die is kept.
    pub fn value(&self) -> Int {
        self.values.iter().copied().map(widen).sum()
    }

    pub fn total(&self) -> Int {
        if self.kept {
            self.value()
        } else {
            0
        }
    }

    pub(crate) fn last(&self) -> UInt {
        *self.values.last()
    }

    pub(crate) fn discard(&mut self) {
        self.kept = false;
    }

    pub(crate) fn extend_chain(&mut self, value: UInt) {
        self.values.push(value);
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceRoll {
    pub(crate) expression: DiceExpression,
    pub(crate) dice: Vec<Die>,
    pub(crate) adjustment: Int,
}

impl DiceRoll {
    pub(crate) fn roll_new<R: Roller>(ctx: &mut RollContext<R>, expression: &DiceExpression) -> Self {
        let dice = ctx
            .roll(expression.count.get() as usize, expression.sides)
            .map(Die::new)
            .collect();
        Self {
            expression: *expression,
            dice,
            adjustment: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_values(expression: DiceExpression, values: Vec<UInt>) -> Self {
        Self {
            expression,
            dice: values.into_iter().map(Die::new).collect(),
            adjustment: 0,
        }
    }

    pub fn expression(&self) -> &DiceExpression {
        &self.expression
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// The flat modifier applied on top of the dice, if any.
    pub fn flat(&self) -> Option<&Flat> {
        self.expression.modifier.as_ref().and_then(|m| m.as_flat())
    }

    /// Every face rolled, in roll order, with explosion chains inline.
    pub fn rolls(&self) -> Vec<UInt> {
        self.dice.iter().flat_map(|d| d.values().iter().copied()).collect()
    }

    pub fn total(&self) -> Int {
        self.dice.iter().map(Die::total).sum::<Int>() + self.adjustment
    }

    pub(crate) fn adjust(&mut self, by: Int) {
        self.adjustment += by;
    }

    pub(crate) fn kept_set(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.dice.len()).filter(|&i| self.dice[i].is_kept())
    }
}
