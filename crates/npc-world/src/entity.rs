//! Plain records stored by the world.

use npc_core::{Position, SurfaceId};

/// One live world entity — an NPC, a player, a prop.
///
/// Entities are categorized by a free-form `tag` string ("npc", "player",
/// …); all tag queries are exact matches.  The surface list is fixed at
/// spawn time; presentation code recolors surfaces, never adds them.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Category tag used by [`WorldQuery::find_by_tag`][crate::WorldQuery::find_by_tag].
    pub tag: String,

    /// Current ground-plane position.
    pub pos: Position,

    /// Renderable surfaces belonging to this entity.
    pub surfaces: Vec<SurfaceId>,
}

/// A discoverable waypoint an agent can be routed toward.
///
/// The world owns nav points; controllers hold only `NavPointId` handles
/// and look positions up per use.
#[derive(Debug, Clone, PartialEq)]
pub struct NavPoint {
    /// Category used by [`WorldQuery::nav_points_in`][crate::WorldQuery::nav_points_in].
    pub category: String,

    /// Fixed position of the point.
    pub pos: Position,
}
