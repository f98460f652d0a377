use super::tree::{DiceRoll, Die};
use crate::common::*;

/// Renders a [`DiceRoll`] as a breakdown: the dice notation, each die in roll
/// order, the flat modifier if any, and the total.
pub trait Stringify {
    fn stringify(&mut self, roll: &DiceRoll) -> String {
        let mut ret = format!(
            "{} ({})",
            roll.expression().dice_notation(),
            self.str_dice(roll)
        );
        if let Some(flat) = roll.flat() {
            ret.push_str(&format!(" {} {}", flat.sign, flat.amount));
        }
        format!("{} = {}", ret, self.str_total(roll.total()))
    }

    fn str_dice(&mut self, roll: &DiceRoll) -> String {
        let sides = roll.expression().sides;
        roll.dice()
            .iter()
            .map(|die| self.str_die(die, sides))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn str_die(&mut self, die: &Die, sides: NonZeroUInt) -> String {
        let last = die.values().len() - 1;
        let chain = die
            .values()
            .iter()
            .enumerate()
            .map(|(i, &value)| self.str_value(value, sides, i < last))
            .collect::<Vec<_>>()
            .join(", ");
        if die.is_kept() {
            chain
        } else {
            self.str_dropped(chain)
        }
    }

    fn str_value(&mut self, value: UInt, _sides: NonZeroUInt, exploded: bool) -> String {
        if exploded {
            format!("{}!", value)
        } else {
            value.to_string()
        }
    }

    fn str_dropped(&mut self, s: String) -> String {
        format!("[{}]", s)
    }

    fn str_total(&mut self, total: Int) -> String {
        total.to_string()
    }
}

/// Plain-text breakdowns; dropped dice are bracketed and explosions marked `!`.
#[derive(Default)]
pub struct SimpleStringifier;

impl SimpleStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for SimpleStringifier {}

/// Markdown breakdowns for chat-style output: critical faces in bold,
/// dropped dice struck through, total in code.
#[derive(Default)]
pub struct MarkdownStringifier;

impl MarkdownStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for MarkdownStringifier {
    fn str_value(&mut self, value: UInt, sides: NonZeroUInt, exploded: bool) -> String {
        let mut ret = value.to_string();
        if exploded {
            ret.push('!');
        }
        if value == 1 || value == sides.get() {
            format!("**{}**", ret)
        } else {
            ret
        }
    }

    fn str_dropped(&mut self, s: String) -> String {
        format!("~~{}~~", s)
    }

    fn str_total(&mut self, total: Int) -> String {
        format!("`{}`", total)
    }
}
