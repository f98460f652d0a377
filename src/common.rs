use std::num::NonZeroU32;

pub use vec1::vec1;

/// Signed arithmetic used for totals and flat modifiers.
pub type Int = i64;
/// Face values, dice counts and keep/drop counts.
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type NonEmpty<T> = vec1::Vec1<T>;

pub(crate) fn widen(x: UInt) -> Int {
    Int::from(x)
}

#[cfg(test)]
pub(crate) mod test_utils {
    pub use super::*;
    pub use crate::ops::*;
    pub use crate::parse::ast::DiceExpression;

    pub fn nz(x: UInt) -> NonZeroUInt {
        NonZeroUInt::new(x).unwrap()
    }

    pub fn dice(count: UInt, sides: UInt) -> DiceExpression {
        DiceExpression::new(nz(count), nz(sides))
    }

    pub fn op_dice(count: UInt, sides: UInt, op: impl Into<Modifier>) -> DiceExpression {
        dice(count, sides).with_modifier(op)
    }
}
