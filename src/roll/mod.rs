mod ctx;
mod result;
mod roller;
mod stringify;
mod tree;

pub use ctx::{DefaultRoller, RollContext};
pub use result::RollResult;
pub use roller::Roller;
pub use stringify::{MarkdownStringifier, SimpleStringifier, Stringify};
pub use tree::{DiceRoll, Die};

#[cfg(test)]
pub(crate) use roller::StepRoller;
