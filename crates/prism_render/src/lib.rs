//! Prism - CPU Ray Tracing
//!
//! A stochastic ray tracer with local Phong shading and hard shadows.
//! Brute force by design: every ray is tested against every surface, no
//! acceleration structures, single threaded. The renderer fills a flat
//! float RGB frame buffer that a display shell can blit or encode.

mod camera;
mod material;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod surface;

pub mod sample_scenes;

pub use camera::Camera;
pub use material::{Color, Phong};
pub use plane::Plane;
pub use renderer::{gamma_correct, render, render_pixel, ExportError, FrameBuffer, RenderConfig};
pub use scene::{Light, Scene};
pub use sphere::Sphere;
pub use surface::Surface;

/// Re-export common math types from prism_math
pub use prism_math::{Interval, Ray, Vec3};

use rand::RngCore;

/// Generate a uniform random f32 in [0, 1).
///
/// Uses the top 24 bits of a draw, the same mapping rand's `Standard`
/// distribution applies to f32.
pub(crate) fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
}
