//! Phong reflectance coefficients.

use prism_math::Vec3;

/// Color type alias (linear RGB, unnormalized until gamma correction)
pub type Color = Vec3;

/// Per-surface Phong coefficients: ambient, diffuse, and specular
/// reflectance plus the specular exponent.
///
/// Coefficients are component-wise non-negative; construction clamps
/// negative inputs to zero.
#[derive(Debug, Clone, Copy)]
pub struct Phong {
    ambient: Color,
    diffuse: Color,
    specular: Color,
    shininess: f32,
}

impl Phong {
    /// Create a new material from the full coefficient set.
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            ambient: ambient.max(Color::ZERO),
            diffuse: diffuse.max(Color::ZERO),
            specular: specular.max(Color::ZERO),
            shininess: shininess.max(0.0),
        }
    }

    /// Create a material with no specular term.
    pub fn matte(ambient: Color, diffuse: Color) -> Self {
        Self::new(ambient, diffuse, Color::ZERO, 0.0)
    }

    /// Ambient reflectance (ka).
    pub fn ambient(&self) -> Color {
        self.ambient
    }

    /// Diffuse reflectance (kd).
    pub fn diffuse(&self) -> Color {
        self.diffuse
    }

    /// Specular reflectance (ks).
    pub fn specular(&self) -> Color {
        self.specular
    }

    /// Specular exponent.
    pub fn shininess(&self) -> f32 {
        self.shininess
    }
}
