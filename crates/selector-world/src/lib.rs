//! Read-only world and entity data model consumed by the selector engine.

pub mod entity;
pub mod position;
pub mod snapshot;

pub use entity::{EntityKind, GameMode, TargetEntity, TargetSource};
pub use position::Position;
pub use snapshot::{EntitySnapshot, PlayerState, WorldSnapshot};
