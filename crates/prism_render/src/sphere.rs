//! Sphere primitive.

use crate::{Phong, Surface};
use prism_math::{Interval, Ray, Vec3};

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Phong,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Phong) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Surface for Sphere {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f32> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Near root first so the front of a convex solid wins.
        // Acceptance is strict: endpoints of the interval are rejected.
        let near = (-b - sqrtd) / (2.0 * a);
        if ray_t.surrounds(near) {
            return Some(near);
        }
        let far = (-b + sqrtd) / (2.0 * a);
        if ray_t.surrounds(far) {
            return Some(far);
        }
        None
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }

    fn material(&self) -> &Phong {
        &self.material
    }
}
