//! Surface trait for ray-object intersection.

use crate::Phong;
use prism_math::{Interval, Ray, Vec3};

/// Trait for geometric primitives that can be hit by rays.
pub trait Surface: Send + Sync {
    /// Smallest parameter t within `ray_t` at which the ray meets this
    /// surface, or `None` if it misses.
    ///
    /// The nearest-hit search shrinks `ray_t.max` to the closest hit found
    /// so far, so this test doubles as an early-reject bound.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f32>;

    /// Outward-facing unit normal at a point on the surface.
    ///
    /// Only meaningful for points produced by a successful `intersect`.
    fn normal_at(&self, point: Vec3) -> Vec3;

    /// Phong coefficients of this surface.
    fn material(&self) -> &Phong;
}
