//! Infinite plane primitive.

use crate::{Phong, Surface};
use prism_math::{Interval, Ray, Vec3};

/// Rays closer to parallel than this never hit the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// An infinite plane through a point, with a fixed unit normal.
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Phong,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(point: Vec3, normal: Vec3, material: Phong) -> Self {
        Self {
            point,
            normal: normal.normalize(),
            material,
        }
    }
}

impl Surface for Plane {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f32> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        // Closed interval, unlike the sphere: interval endpoints count as hits.
        ray_t.contains(t).then_some(t)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn material(&self) -> &Phong {
        &self.material
    }
}
