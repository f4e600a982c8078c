//! The collaborator traits consumed by the behavior core.
//!
//! Three narrow capabilities, one per external concern:
//!
//! - [`WorldQuery`] — read-only lookups (entities by tag, nav points by
//!   category, positions, surface lists).
//! - [`EntitySpawner`] — creating and destroying entities and nav points.
//! - [`Presentation`] — recoloring renderable surfaces.
//!
//! [`WorldApi`] is a blanket alias over all three so generic code can write
//! one bound.  [`World`][crate::World] implements everything; test code is
//! free to implement individual traits on lighter stubs.

use npc_core::{Color, EntityId, NavPointId, Position, SurfaceId};

use crate::WorldResult;

/// Read-only world lookups.
pub trait WorldQuery {
    /// All live entities whose tag equals `tag`, in ascending `EntityId`
    /// order.  An empty result is normal, not an error.
    fn find_by_tag(&self, tag: &str) -> Vec<EntityId>;

    /// Current position of `entity`, or `None` if it has despawned.
    fn entity_pos(&self, entity: EntityId) -> Option<Position>;

    /// Renderable surfaces of `entity`.  Empty for despawned entities.
    fn surfaces(&self, entity: EntityId) -> Vec<SurfaceId>;

    /// All nav points registered under `category`, in ascending
    /// `NavPointId` order.
    fn nav_points_in(&self, category: &str) -> Vec<NavPointId>;

    /// Position of `point`, or `None` if the handle is stale.
    fn nav_point_pos(&self, point: NavPointId) -> Option<Position>;
}

/// Creating and destroying world objects.
pub trait EntitySpawner {
    /// Spawn an entity with `surface_count` renderable surfaces.
    fn spawn_entity(&mut self, tag: &str, pos: Position, surface_count: usize) -> EntityId;

    /// Spawn a nav point discoverable under `category`.
    fn spawn_nav_point(&mut self, category: &str, pos: Position) -> NavPointId;

    /// Remove `entity` from the world.  Its ID is never reused.
    fn despawn(&mut self, entity: EntityId) -> WorldResult<()>;
}

/// Applying colors to renderable surfaces.
pub trait Presentation {
    /// Set the color of one surface.
    fn apply_color(&mut self, surface: SurfaceId, color: Color) -> WorldResult<()>;
}

/// Blanket bound combining all three collaborator capabilities.
pub trait WorldApi: WorldQuery + EntitySpawner + Presentation {}

impl<T: WorldQuery + EntitySpawner + Presentation> WorldApi for T {}
