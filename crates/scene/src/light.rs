use glam::Vec3;
use tumble_common::Color;

/// Light sources a scene can hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Non-directional light that brightens every surface uniformly.
    Ambient { color: Color, intensity: f32 },
    /// Light radiating equally in all directions from `position`.
    ///
    /// `distance == 0.0` means unbounded range. With a bounded range the light
    /// fades as `(1 - (d / distance)^4)^2 / d^decay`.
    Point {
        color: Color,
        intensity: f32,
        position: Vec3,
        distance: f32,
        decay: f32,
    },
}

impl Light {
    pub fn ambient(color: Color, intensity: f32) -> Self {
        Self::Ambient { color, intensity }
    }

    /// Unbounded point light with no falloff.
    pub fn point(color: Color, intensity: f32, position: Vec3) -> Self {
        Self::Point {
            color,
            intensity,
            position,
            distance: 0.0,
            decay: 0.0,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Ambient { color, .. } | Self::Point { color, .. } => *color,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self {
            Self::Ambient { intensity, .. } | Self::Point { intensity, .. } => *intensity,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ambient { .. } => "ambient",
            Self::Point { .. } => "point",
        }
    }
}
