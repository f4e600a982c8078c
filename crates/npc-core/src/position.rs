//! Ground-plane coordinate type.
//!
//! Agents live on a flat plane; `Position` stores the two horizontal axes as
//! `f32`.  There is no vertical component anywhere in the behavior core —
//! detection and arrival checks are plain Euclidean distance on the plane.

/// A point on the ground plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub z: f32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Move up to `max_step` toward `dest`.
    ///
    /// Returns `dest` itself when the remaining distance is within
    /// `max_step`, so a mover never oscillates around its destination.
    pub fn step_toward(self, dest: Position, max_step: f32) -> Position {
        let d = self.distance(dest);
        if d <= max_step || d == 0.0 {
            return dest;
        }
        let t = max_step / d;
        Position {
            x: self.x + (dest.x - self.x) * t,
            z: self.z + (dest.z - self.z) * t,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.z)
    }
}
