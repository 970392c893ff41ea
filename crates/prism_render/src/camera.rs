//! Pinhole camera for ray generation.

use crate::gen_f32;
use prism_math::{Ray, Vec3};
use rand::RngCore;

/// Pinhole camera mapping pixel coordinates to world-space rays.
///
/// The image plane sits at distance `dist` along -w, bounded by
/// `[left, right] x [bottom, top]` in the camera's u/v basis. Fixed for
/// the duration of one render call; rebuild it on resize so the pixel
/// mapping always uses the current resolution.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    eye: Vec3,
    // Orthonormal basis; w points opposite the view direction
    u: Vec3,
    v: Vec3,
    w: Vec3,

    // Image plane bounds and distance
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    dist: f32,
}

impl Camera {
    /// Create a camera with the default axis-aligned basis at the origin.
    pub fn new() -> Self {
        Self {
            image_width: 512,
            image_height: 512,
            eye: Vec3::ZERO,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
            left: -0.1,
            right: 0.1,
            bottom: -0.1,
            top: 0.1,
            dist: 0.1,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set eye position and orthonormal basis.
    pub fn with_basis(mut self, eye: Vec3, u: Vec3, v: Vec3, w: Vec3) -> Self {
        self.eye = eye;
        self.u = u;
        self.v = v;
        self.w = w;
        self
    }

    /// Set image plane bounds and distance.
    pub fn with_frame(mut self, left: f32, right: f32, bottom: f32, top: f32, dist: f32) -> Self {
        self.left = left;
        self.right = right;
        self.bottom = bottom;
        self.top = top;
        self.dist = dist;
        self
    }

    /// Generate the ray for pixel (i, j) with a sub-pixel offset in [0,1)^2.
    ///
    /// An offset of (0.5, 0.5) yields the pixel-center ray.
    pub fn ray(&self, i: u32, j: u32, du: f32, dv: f32) -> Ray {
        let u_coord =
            self.left + (self.right - self.left) * (i as f32 + du) / self.image_width as f32;
        let v_coord =
            self.bottom + (self.top - self.bottom) * (j as f32 + dv) / self.image_height as f32;

        let direction = (u_coord * self.u + v_coord * self.v - self.dist * self.w).normalize();
        Ray::new(self.eye, direction)
    }

    /// Generate the pixel-center ray for (i, j).
    pub fn center_ray(&self, i: u32, j: u32) -> Ray {
        self.ray(i, j, 0.5, 0.5)
    }

    /// Generate a jittered ray for (i, j) with random sub-pixel offsets.
    pub fn sample_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        self.ray(i, j, gen_f32(rng), gen_f32(rng))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
