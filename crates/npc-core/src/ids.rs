//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  IDs double as slab indices — the
//! world and the motor store both index their backing `Vec`s by `id.index()`.
//! IDs are allocated sequentially and never reused within a run, so an
//! ascending iteration over IDs is also a stable creation-order iteration.

use std::fmt;

/// Generate a typed ID wrapper around a `u32`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(u32::MAX);

            /// Cast to `usize` for direct use as a slab / `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Handle for one behavior-driven agent (controller + motor + RNG).
    pub struct AgentId;
}

typed_id! {
    /// Handle for any live world entity — NPCs, players, props.
    pub struct EntityId;
}

typed_id! {
    /// Handle for a discoverable navigation point.  Held by controllers as a
    /// non-owning reference; the world owns the point itself.
    pub struct NavPointId;
}

typed_id! {
    /// Handle for one renderable surface of an entity.  Presentation code
    /// applies colors per surface.
    pub struct SurfaceId;
}
