//! Concrete snapshot-backed world: plain data entries plus a `TargetSource` impl.

use crate::entity::{EntityKind, GameMode, TargetEntity, TargetSource};
use crate::position::Position;

/// Player-specific attributes carried by a snapshot entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    pub game_mode: GameMode,
    pub level: i32,
}

/// A single entity captured at snapshot time.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySnapshot {
    pub runtime_id: u64,
    pub kind: EntityKind,
    pub position: Position,
    /// `Some` for players, `None` for mobs and other entities.
    pub player: Option<PlayerState>,
}

impl EntitySnapshot {
    /// A non-player entity of the given kind.
    pub fn mob(runtime_id: u64, kind: EntityKind, position: Position) -> Self {
        Self {
            runtime_id,
            kind,
            position,
            player: None,
        }
    }

    /// A player entity.
    pub fn player(runtime_id: u64, position: Position, game_mode: GameMode, level: i32) -> Self {
        Self {
            runtime_id,
            kind: EntityKind::player(),
            position,
            player: Some(PlayerState { game_mode, level }),
        }
    }
}

impl TargetEntity for EntitySnapshot {
    fn position(&self) -> Position {
        self.position
    }

    fn kind(&self) -> &EntityKind {
        &self.kind
    }

    fn game_mode(&self) -> Option<GameMode> {
        self.player.map(|p| p.game_mode)
    }

    fn level(&self) -> Option<i32> {
        self.player.map(|p| p.level)
    }
}

/// An immutable capture of the world's entities, usable as a `TargetSource`.
///
/// Servers with their own entity storage implement `TargetSource` directly;
/// this type is for embedders and tests that just need a populated world.
#[derive(Debug, Clone, Default)]
pub struct WorldSnapshot {
    entities: Vec<EntitySnapshot>,
}

impl WorldSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entity: EntitySnapshot) {
        self.entities.push(entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl TargetSource for WorldSnapshot {
    type Entity = EntitySnapshot;

    fn players(&self) -> Vec<EntitySnapshot> {
        self.entities
            .iter()
            .filter(|e| e.is_player())
            .cloned()
            .collect()
    }

    fn entities(&self) -> Vec<EntitySnapshot> {
        self.entities.clone()
    }
}
