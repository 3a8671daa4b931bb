//! Selector query configuration and the resolution pipeline.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use selector_world::{EntityKind, GameMode, Position, TargetEntity, TargetSource};

use crate::error::SelectorError;
use crate::range::{is_between_unordered, IntRange};
use crate::toggle::{Toggle, ToggleFilter};

/// Which candidate set a query starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSelector {
    /// The single player closest to the start position.
    NearestPlayer,
    /// One uniformly random player.
    RandomPlayer,
    /// All connected players.
    AllPlayers,
    /// Every entity in the world.
    AllEntities,
    /// The entity issuing the query.
    Sender,
}

/// Ordering applied to the filtered candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntitySort {
    /// Keep the filtered order as-is.
    Arbitrary,
    /// Ascending distance from the start position.
    Nearest,
    /// Descending distance from the start position.
    Furthest,
    /// Uniform shuffle, applied after the limit.
    Random,
}

/// A query which can be called to find one or multiple entities.
///
/// This is what the command layer builds out of a textual target selector.
/// Configure with the builder methods, then call [`find`](Self::find).
/// Resolution does not mutate the finder, so a configured query can be reused
/// across worlds and threads.
#[derive(Debug, Clone)]
pub struct EntityFinder {
    selector: TargetSelector,
    sort: EntitySort,

    // Position
    start: Position,
    dx: Option<f32>,
    dy: Option<f32>,
    dz: Option<f32>,
    distance: Option<IntRange>,

    // By traits
    limit: Option<usize>,
    entity_kinds: ToggleFilter<EntityKind>,

    // Players specific
    game_modes: ToggleFilter<GameMode>,
    level: Option<IntRange>,
}

impl EntityFinder {
    pub fn new(selector: TargetSelector) -> Self {
        Self {
            selector,
            sort: EntitySort::Arbitrary,
            start: Position::default(),
            dx: None,
            dy: None,
            dz: None,
            distance: None,
            limit: None,
            entity_kinds: ToggleFilter::None,
            game_modes: ToggleFilter::None,
            level: None,
        }
    }

    pub fn with_sort(mut self, sort: EntitySort) -> Self {
        self.sort = sort;
        self
    }

    /// Origin for nearest-player retrieval, axis offsets, and distance sorts.
    pub fn with_start_position(mut self, start: Position) -> Self {
        self.start = start;
        self
    }

    /// Keep only entities whose whole-block distance from the sender is in range.
    pub fn with_distance(mut self, distance: IntRange) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Per-axis offsets from the start position. Each axis is independent;
    /// `None` leaves that axis unconstrained. Offsets may be negative.
    pub fn with_offsets(mut self, dx: Option<f32>, dy: Option<f32>, dz: Option<f32>) -> Self {
        self.dx = dx;
        self.dy = dy;
        self.dz = dz;
        self
    }

    /// Truncate the result to at most `limit` entities.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Keep only players whose level is in range. Non-players are dropped.
    pub fn with_level(mut self, level: IntRange) -> Self {
        self.level = Some(level);
        self
    }

    /// Include or exclude an entity kind.
    pub fn with_entity_kind(mut self, kind: EntityKind, toggle: Toggle) -> Self {
        self.entity_kinds.toggle(kind, toggle);
        self
    }

    /// Accept exactly one entity kind, overriding any include/exclude entries.
    pub fn require_entity_kind(mut self, kind: EntityKind) -> Self {
        self.entity_kinds.require(kind);
        self
    }

    /// Include or exclude a game mode. Non-players are dropped once any
    /// game-mode constraint is configured.
    pub fn with_game_mode(mut self, mode: GameMode, toggle: Toggle) -> Self {
        self.game_modes.toggle(mode, toggle);
        self
    }

    /// Accept exactly one game mode, overriding any include/exclude entries.
    pub fn require_game_mode(mut self, mode: GameMode) -> Self {
        self.game_modes.require(mode);
        self
    }

    /// Find the entities matching this query, in order.
    ///
    /// `sender` is the entity issuing the query; it is required by the
    /// [`Sender`](TargetSelector::Sender) selector and by a distance
    /// constraint (distance is measured from the sender).
    ///
    /// The result can be empty and never contains placeholder entries.
    pub fn find<S: TargetSource>(
        &self,
        world: &S,
        sender: Option<&S::Entity>,
    ) -> Result<Vec<S::Entity>, SelectorError> {
        let mut result = self.retrieve(world, sender)?;
        trace!(selector = ?self.selector, candidates = result.len(), "candidate set retrieved");

        // Every stage below only narrows, so an empty list is final.
        if result.is_empty() {
            return Ok(result);
        }

        if let Some(distance) = self.distance {
            let origin = sender.ok_or(SelectorError::MissingSender)?.position();
            // Whole-block distance: truncate before the inclusive range test.
            result.retain(|e| distance.contains(e.position().distance(origin) as i32));
            if result.is_empty() {
                return Ok(result);
            }
        }

        if self.dx.is_some() || self.dy.is_some() || self.dz.is_some() {
            let start = self.start;
            result.retain(|e| {
                let pos = e.position();
                if let Some(dx) = self.dx {
                    if !is_between_unordered(pos.x, start.x, start.x + dx) {
                        return false;
                    }
                }
                if let Some(dy) = self.dy {
                    if !is_between_unordered(pos.y, start.y, start.y + dy) {
                        return false;
                    }
                }
                if let Some(dz) = self.dz {
                    if !is_between_unordered(pos.z, start.z, start.z + dz) {
                        return false;
                    }
                }
                true
            });
            if result.is_empty() {
                return Ok(result);
            }
        }

        if !self.entity_kinds.is_unconstrained() {
            result.retain(|e| self.entity_kinds.matches(e.kind()));
            if result.is_empty() {
                return Ok(result);
            }
        }

        if !self.game_modes.is_unconstrained() {
            result.retain(|e| {
                e.game_mode()
                    .is_some_and(|mode| self.game_modes.matches(&mode))
            });
            if result.is_empty() {
                return Ok(result);
            }
        }

        if let Some(level) = self.level {
            result.retain(|e| e.level().is_some_and(|l| level.contains(l)));
        }

        if self.sort != EntitySort::Arbitrary || self.limit.is_some() {
            match self.sort {
                EntitySort::Nearest => result.sort_by(|a, b| {
                    let da = self.start.distance_sq(a.position());
                    let db = self.start.distance_sq(b.position());
                    da.total_cmp(&db)
                }),
                EntitySort::Furthest => result.sort_by(|a, b| {
                    let da = self.start.distance_sq(a.position());
                    let db = self.start.distance_sq(b.position());
                    db.total_cmp(&da)
                }),
                // Random shuffles below, after the limit.
                EntitySort::Arbitrary | EntitySort::Random => {}
            }

            if let Some(limit) = self.limit {
                result.truncate(limit);
            }

            if self.sort == EntitySort::Random {
                result.shuffle(&mut rand::thread_rng());
            }
        }

        debug!(selector = ?self.selector, results = result.len(), "selector resolved");
        Ok(result)
    }

    /// Raw candidate list for the selector kind, before any filtering.
    fn retrieve<S: TargetSource>(
        &self,
        world: &S,
        sender: Option<&S::Entity>,
    ) -> Result<Vec<S::Entity>, SelectorError> {
        match self.selector {
            TargetSelector::NearestPlayer => {
                // Strict `<` keeps the first-encountered player on equal
                // distance, so ties follow the source's iteration order.
                let mut best: Option<(S::Entity, f32)> = None;
                for player in world.players() {
                    let dist_sq = self.start.distance_sq(player.position());
                    if best.as_ref().map(|b| dist_sq < b.1).unwrap_or(true) {
                        best = Some((player, dist_sq));
                    }
                }
                Ok(best.map(|(player, _)| vec![player]).unwrap_or_default())
            }
            TargetSelector::RandomPlayer => {
                let mut players = world.players();
                if players.is_empty() {
                    return Err(SelectorError::EmptySelection);
                }
                let index = rand::thread_rng().gen_range(0..players.len());
                Ok(vec![players.swap_remove(index)])
            }
            TargetSelector::AllPlayers => Ok(world.players()),
            TargetSelector::AllEntities => Ok(world.entities()),
            TargetSelector::Sender => match sender {
                Some(sender) => Ok(vec![sender.clone()]),
                None => Err(SelectorError::MissingSender),
            },
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
