use super::stringify::{SimpleStringifier, Stringify};
use super::tree::{DiceRoll, Die};
use crate::common::*;
use crate::parse::ast::DiceExpression;
use std::fmt;

/// The outcome of evaluating one dice notation.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollResult {
    total: Int,
    formula: String,
    breakdown: String,
    rolls: Vec<UInt>,
    roll: DiceRoll,
}

impl RollResult {
    pub(crate) fn new(formula: impl Into<String>, roll: DiceRoll) -> Self {
        Self {
            total: roll.total(),
            formula: formula.into(),
            breakdown: SimpleStringifier::new().stringify(&roll),
            rolls: roll.rolls(),
            roll,
        }
    }

    pub fn total(&self) -> Int {
        self.total
    }

    /// The notation exactly as it was given.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn breakdown(&self) -> &str {
        &self.breakdown
    }

    /// Every face rolled in roll order, before keep/drop or flat modifiers.
    pub fn rolls(&self) -> &[UInt] {
        &self.rolls
    }

    pub fn dice(&self) -> &[Die] {
        self.roll.dice()
    }

    pub fn expression(&self) -> &DiceExpression {
        self.roll.expression()
    }

    /// Renders the breakdown with a different stringifier.
    pub fn stringify(&self, s: &mut impl Stringify) -> String {
        s.stringify(&self.roll)
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.breakdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_utils::*;
    use crate::roll::MarkdownStringifier;

    fn result(formula: &str, expr: DiceExpression, values: Vec<UInt>) -> RollResult {
        let mut roll = DiceRoll::from_values(expr, values);
        if let Some(flat) = roll.flat().copied() {
            roll.adjust(flat.signed());
        }
        RollResult::new(formula, roll)
    }

    #[test]
    fn test_result_fields() {
        let r = result("1d20 + 2", op_dice(1, 20, Flat::add(2)), vec![20]);
        assert_eq!(r.total(), 22);
        assert_eq!(r.formula(), "1d20 + 2");
        assert_eq!(r.rolls(), &[20]);
        assert_eq!(r.breakdown(), "1d20 (20) + 2 = 22");
        assert_eq!(r.to_string(), r.breakdown());
        assert_eq!(r.expression(), &op_dice(1, 20, Flat::add(2)));
    }

    #[test]
    fn test_restringify() {
        let r = result("d20", dice(1, 20), vec![20]);
        assert_eq!(r.stringify(&mut MarkdownStringifier::new()), "1d20 (**20**) = `20`");
    }
}
