//! Target-selector resolution: turns a configured selector query into a
//! concrete entity list against a world snapshot.
//!
//! The command layer parses selector text (not handled here) into an
//! [`EntityFinder`], then calls [`EntityFinder::find`] every time the command
//! executes. Resolution runs a fixed pipeline: candidate retrieval by selector
//! kind, predicate filtering (distance, axis offsets, entity kind, game mode,
//! level), then sort/limit/shuffle.

pub mod error;
pub mod finder;
pub mod range;
pub mod toggle;

pub use error::SelectorError;
pub use finder::{EntityFinder, EntitySort, TargetSelector};
pub use range::{is_between_unordered, IntRange};
pub use toggle::{Toggle, ToggleFilter};
