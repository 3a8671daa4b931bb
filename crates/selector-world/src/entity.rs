//! Entity identity, game modes, and the read-only views the engine filters on.

use crate::position::Position;

/// Player game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Survival,
    Creative,
    Adventure,
    Spectator,
}

/// The namespaced identifier type string, e.g. `"minecraft:zombie"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityKind(String);

impl EntityKind {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The player kind, `"minecraft:player"`.
    pub fn player() -> Self {
        Self::new("minecraft:player")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Read-only view of a live entity.
///
/// The engine never mutates entities; it only reads position, kind, and the
/// player-specific attributes. `game_mode` and `level` return `None` for
/// non-player entities.
pub trait TargetEntity {
    fn position(&self) -> Position;

    fn kind(&self) -> &EntityKind;

    fn game_mode(&self) -> Option<GameMode>;

    fn level(&self) -> Option<i32>;

    fn is_player(&self) -> bool {
        self.game_mode().is_some()
    }
}

/// A world handle the engine can pull candidate entities from.
///
/// Both accessors return a fresh snapshot `Vec`, never a live view, so that
/// filtering and sorting cannot race with concurrent world mutation (entities
/// joining or leaving mid-query).
pub trait TargetSource {
    type Entity: TargetEntity + Clone;

    /// Snapshot of all connected players.
    fn players(&self) -> Vec<Self::Entity>;

    /// Snapshot of every entity in the world, players included.
    fn entities(&self) -> Vec<Self::Entity>;
}
