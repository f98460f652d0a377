use crate::common::*;
use crate::roll::{DiceRoll, RollContext, Roller};
use std::cmp::Reverse;
use std::fmt::{self, Write};

/// A suffix that changes how a pool of dice is totalled.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[enum_dispatch::enum_dispatch(Operate)]
pub enum Modifier {
    Flat(Flat),
    Keep(Keep),
    Drop(Drop),
    Explode(Explode),
}

impl Modifier {
    /// The flat amount or the keep/drop count carried by this modifier.
    pub const fn value(&self) -> Option<UInt> {
        match self {
            Self::Flat(x) => Some(x.amount),
            Self::Keep(x) => Some(x.n),
            Self::Drop(x) => Some(x.n),
            Self::Explode(_) => None,
        }
    }

    pub const fn as_flat(&self) -> Option<&Flat> {
        match self {
            Self::Flat(x) => Some(x),
            _ => None,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat(x) => fmt::Display::fmt(x, f),
            Self::Keep(x) => fmt::Display::fmt(x, f),
            Self::Drop(x) => fmt::Display::fmt(x, f),
            Self::Explode(x) => fmt::Display::fmt(x, f),
        }
    }
}

#[enum_dispatch::enum_dispatch]
pub trait Operate {
    fn operate<R: Roller>(&self, target: &mut DiceRoll, ctx: &mut RollContext<R>);
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Plus,
    Minus,
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Plus => '+',
            Self::Minus => '-',
        };
        f.write_char(c)
    }
}

/// Which end of the sorted pool a keep or drop selects from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum End {
    Highest,
    Lowest,
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Highest => 'h',
            Self::Lowest => 'l',
        };
        f.write_char(c)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flat {
    pub sign: Sign,
    pub amount: UInt,
}

impl Flat {
    pub const fn add(amount: UInt) -> Self {
        Self {
            sign: Sign::Plus,
            amount,
        }
    }

    pub const fn subtract(amount: UInt) -> Self {
        Self {
            sign: Sign::Minus,
            amount,
        }
    }

    pub fn signed(&self) -> Int {
        match self.sign {
            Sign::Plus => widen(self.amount),
            Sign::Minus => -widen(self.amount),
        }
    }
}

impl Operate for Flat {
    fn operate<R: Roller>(&self, target: &mut DiceRoll, _: &mut RollContext<R>) {
        target.adjust(self.signed());
    }
}

impl fmt::Display for Flat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.amount)
    }
}

macro_rules! selection_op_impl {
    ($($name:ident, $disp:literal);+ $(;)?) => {$(
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            pub end: End,
            pub n: UInt,
        }

        impl $name {
            pub const fn highest(n: UInt) -> Self {
                Self { end: End::Highest, n }
            }

            pub const fn lowest(n: UInt) -> Self {
                Self { end: End::Lowest, n }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}{}", $disp, self.end, self.n)
            }
        }
    )+};
}

selection_op_impl!(Keep, "k"; Drop, "d");

impl Operate for Keep {
    fn operate<R: Roller>(&self, target: &mut DiceRoll, _: &mut RollContext<R>) {
        for i in ranked(target, self.end).into_iter().skip(self.n as usize) {
            target.dice[i].discard();
        }
    }
}

impl Operate for Drop {
    fn operate<R: Roller>(&self, target: &mut DiceRoll, _: &mut RollContext<R>) {
        for i in ranked(target, self.end).into_iter().take(self.n as usize) {
            target.dice[i].discard();
        }
    }
}

/// Indices of the kept dice ordered from the selected end inwards.
///
/// The sort is stable, so tied dice rank in roll order.
fn ranked(target: &DiceRoll, end: End) -> Vec<usize> {
    let mut keptset: Vec<_> = target.kept_set().collect();
    match end {
        End::Highest => keptset.sort_by_key(|&i| Reverse(target.dice[i].value())),
        End::Lowest => keptset.sort_by_key(|&i| target.dice[i].value()),
    }
    keptset
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Explode;

impl Operate for Explode {
    fn operate<R: Roller>(&self, target: &mut DiceRoll, ctx: &mut RollContext<R>) {
        let sides = target.expression.sides;
        for die in target.dice.iter_mut() {
            while die.last() == sides.get() {
                match ctx.roll_one(sides) {
                    Some(value) => {
                        tracing::trace!(value, "die exploded");
                        die.extend_chain(value);
                    }
                    None => {
                        tracing::debug!(rolls = ctx.rolls(), "roll budget exhausted; explosion stopped");
                        return;
                    }
                }
            }
        }
    }
}

impl fmt::Display for Explode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('e')
    }
}
