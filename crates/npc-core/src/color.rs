//! RGB color triple applied to renderable surfaces.
//!
//! The behavior core recolors an agent to signal its current state; the
//! actual rendering is external, so this is just a plain data type plus a
//! few named constants.

/// An RGB color with components in `[0.0, 1.0]`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };
    pub const BLUE:  Color = Color { r: 0.0, g: 0.0, b: 1.0 };
    pub const RED:   Color = Color { r: 1.0, g: 0.0, b: 0.0 };
    pub const GREEN: Color = Color { r: 0.0, g: 1.0, b: 0.0 };

    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}
