//! Selector resolution errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// A selector kind that must yield at least one candidate (random player)
    /// found an empty player set.
    #[error("selector matched no candidates")]
    EmptySelection,

    /// The query needs a sender entity (self selector, or a distance
    /// constraint measured from the sender) but none was provided.
    #[error("selector requires a sender entity")]
    MissingSender,

    /// A range was configured with min above max.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },
}
