use crate::common::*;
use crate::error::RollError;
use crate::limits::Limits;
use crate::ops::Modifier;
use std::fmt;

/// A parsed dice notation such as `4d6dl1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceExpression {
    pub count: NonZeroUInt,
    pub sides: NonZeroUInt,
    pub modifier: Option<Modifier>,
}

impl DiceExpression {
    pub const fn new(count: NonZeroUInt, sides: NonZeroUInt) -> Self {
        Self {
            count,
            sides,
            modifier: None,
        }
    }

    pub fn with_modifier(mut self, modifier: impl Into<Modifier>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    pub fn modifier_value(&self) -> Option<UInt> {
        self.modifier.as_ref().and_then(Modifier::value)
    }

    /// The notation without any flat modifier, e.g. `1d20` for `1d20+5`.
    pub(crate) fn dice_notation(&self) -> String {
        match &self.modifier {
            Some(m) if m.as_flat().is_none() => format!("{}d{}{}", self.count, self.sides, m),
            _ => format!("{}d{}", self.count, self.sides),
        }
    }
}

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if let Some(modifier) = &self.modifier {
            write!(f, "{}", modifier)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for DiceExpression {
    type Err = RollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(super::parse(s, Limits::default())?)
    }
}
