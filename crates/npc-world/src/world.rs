//! The `World` — slab-backed registry of entities, nav points, and surfaces.

use npc_core::{Color, EntityId, NavPointId, Position, SurfaceId};
use rustc_hash::FxHashMap;

use crate::entity::{Entity, NavPoint};
use crate::query::{EntitySpawner, Presentation, WorldQuery};
use crate::{WorldError, WorldResult};

/// In-memory world state.
///
/// Entities and nav points live in slabs (`Vec<Option<_>>` indexed by ID);
/// despawning leaves a `None` hole so IDs stay stable for the whole run.
/// Tag and category indexes are kept incrementally — queries never scan the
/// slabs.
///
/// # Determinism
///
/// Index vectors are appended in spawn order and IDs ascend monotonically,
/// so every query returns handles in ascending ID order.  "First match
/// wins" logic in the behavior core is therefore reproducible.
#[derive(Default)]
pub struct World {
    entities:   Vec<Option<Entity>>,
    nav_points: Vec<Option<NavPoint>>,

    /// `tag → entity IDs` in ascending order.
    tag_index: FxHashMap<String, Vec<EntityId>>,

    /// `category → nav point IDs` in ascending order.
    category_index: FxHashMap<String, Vec<NavPointId>>,

    /// Current color per surface, indexed by `SurfaceId`.  Surfaces start
    /// white and are never deallocated, even when their entity despawns.
    paint: Vec<Color>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (not despawned) entities.
    pub fn entity_count(&self) -> usize {
        self.entities.iter().filter(|e| e.is_some()).count()
    }

    /// Number of nav points ever spawned.
    pub fn nav_point_count(&self) -> usize {
        self.nav_points.len()
    }

    /// Tag of `entity`, or `None` if it has despawned.
    pub fn entity_tag(&self, entity: EntityId) -> Option<&str> {
        self.entities
            .get(entity.index())
            .and_then(|e| e.as_ref())
            .map(|e| e.tag.as_str())
    }

    /// Move `entity` to `pos`.  The sim calls this every tick to mirror the
    /// nav motor's position into the world, where other agents can see it.
    pub fn set_entity_pos(&mut self, entity: EntityId, pos: Position) -> WorldResult<()> {
        match self.entities.get_mut(entity.index()).and_then(|e| e.as_mut()) {
            Some(e) => {
                e.pos = pos;
                Ok(())
            }
            None => Err(WorldError::EntityNotFound(entity)),
        }
    }

    /// Current color of `surface`.
    pub fn surface_color(&self, surface: SurfaceId) -> Option<Color> {
        self.paint.get(surface.index()).copied()
    }
}

// ── WorldQuery ────────────────────────────────────────────────────────────────

impl WorldQuery for World {
    fn find_by_tag(&self, tag: &str) -> Vec<EntityId> {
        self.tag_index.get(tag).cloned().unwrap_or_default()
    }

    fn entity_pos(&self, entity: EntityId) -> Option<Position> {
        self.entities
            .get(entity.index())
            .and_then(|e| e.as_ref())
            .map(|e| e.pos)
    }

    fn surfaces(&self, entity: EntityId) -> Vec<SurfaceId> {
        self.entities
            .get(entity.index())
            .and_then(|e| e.as_ref())
            .map(|e| e.surfaces.clone())
            .unwrap_or_default()
    }

    fn nav_points_in(&self, category: &str) -> Vec<NavPointId> {
        self.category_index.get(category).cloned().unwrap_or_default()
    }

    fn nav_point_pos(&self, point: NavPointId) -> Option<Position> {
        self.nav_points
            .get(point.index())
            .and_then(|p| p.as_ref())
            .map(|p| p.pos)
    }
}

// ── EntitySpawner ─────────────────────────────────────────────────────────────

impl EntitySpawner for World {
    fn spawn_entity(&mut self, tag: &str, pos: Position, surface_count: usize) -> EntityId {
        let id = EntityId(self.entities.len() as u32);

        let first_surface = self.paint.len() as u32;
        let surfaces: Vec<SurfaceId> = (0..surface_count as u32)
            .map(|i| SurfaceId(first_surface + i))
            .collect();
        self.paint.extend(std::iter::repeat(Color::WHITE).take(surface_count));

        self.entities.push(Some(Entity {
            tag: tag.to_owned(),
            pos,
            surfaces,
        }));
        self.tag_index.entry(tag.to_owned()).or_default().push(id);
        id
    }

    fn spawn_nav_point(&mut self, category: &str, pos: Position) -> NavPointId {
        let id = NavPointId(self.nav_points.len() as u32);
        self.nav_points.push(Some(NavPoint {
            category: category.to_owned(),
            pos,
        }));
        self.category_index
            .entry(category.to_owned())
            .or_default()
            .push(id);
        id
    }

    fn despawn(&mut self, entity: EntityId) -> WorldResult<()> {
        let slot = self
            .entities
            .get_mut(entity.index())
            .ok_or(WorldError::EntityNotFound(entity))?;
        let removed = slot.take().ok_or(WorldError::EntityNotFound(entity))?;

        if let Some(ids) = self.tag_index.get_mut(&removed.tag) {
            ids.retain(|&id| id != entity);
        }
        Ok(())
    }
}

// ── Presentation ──────────────────────────────────────────────────────────────

impl Presentation for World {
    fn apply_color(&mut self, surface: SurfaceId, color: Color) -> WorldResult<()> {
        match self.paint.get_mut(surface.index()) {
            Some(slot) => {
                *slot = color;
                Ok(())
            }
            None => Err(WorldError::SurfaceNotFound(surface)),
        }
    }
}
