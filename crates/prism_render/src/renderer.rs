//! Render loop, frame buffer, and gamma correction.
//!
//! One render call walks every pixel row by row, averages N jittered
//! camera samples per pixel, gamma-corrects the result, and rebuilds the
//! frame buffer in full. Single threaded and run-to-completion.

use crate::{Camera, Color, Scene};
use prism_math::Interval;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::path::Path;
use std::time::Instant;
use thiserror::Error;

/// Errors that can occur when exporting a frame.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Gamma applied per channel after averaging
    pub gamma: f32,
    /// Jitter seed; None draws from system entropy
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 64,
            gamma: 2.2,
            seed: None,
        }
    }
}

impl RenderConfig {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Flat float RGB frame buffer, row-major with the row as the outer index.
///
/// Row 0 is the bottom of the image, matching the camera's upward v axis.
/// The buffer is fully overwritten by every render call and persists
/// between calls for the display shell to read.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl FrameBuffer {
    /// Create a buffer with capacity for width x height pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: Vec::with_capacity((width * height * 3) as usize),
        }
    }

    /// Change resolution, discarding previous contents and reserving
    /// capacity for the next render. No resampling: the next render
    /// repopulates every pixel at the new size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data.clear();
        self.data.reserve((width * height * 3) as usize);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw channel data, length width * height * 3 after a render.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Gamma-corrected color stored for pixel (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let i = ((y * self.width + x) * 3) as usize;
        Color::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Convert to 8-bit RGBA, clamped, with rows flipped so the first
    /// output row is the top of the image.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let color = self.pixel(x, y);
                bytes.push((255.0 * color.x.clamp(0.0, 1.0)) as u8);
                bytes.push((255.0 * color.y.clamp(0.0, 1.0)) as u8);
                bytes.push((255.0 * color.z.clamp(0.0, 1.0)) as u8);
                bytes.push(255);
            }
        }
        bytes
    }

    /// Encode the buffer as a PNG file.
    pub fn save_png(&self, path: &Path) -> Result<(), ExportError> {
        image::save_buffer(
            path,
            &self.to_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )?;
        Ok(())
    }
}

/// Apply per-channel gamma correction: c^(1/gamma).
pub fn gamma_correct(color: Color, gamma: f32) -> Color {
    let inv = 1.0 / gamma;
    Color::new(
        gamma_channel(color.x, inv),
        gamma_channel(color.y, inv),
        gamma_channel(color.z, inv),
    )
}

#[inline]
fn gamma_channel(linear: f32, inv_gamma: f32) -> f32 {
    if linear > 0.0 {
        linear.powf(inv_gamma)
    } else {
        0.0
    }
}

/// Average `samples` jittered camera samples for pixel (i, j).
///
/// Primary rays are unbounded: t in [0, f32::MAX].
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    i: u32,
    j: u32,
    samples: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut color = Color::ZERO;
    for _ in 0..samples {
        let ray = camera.sample_ray(i, j, rng);
        color += scene.trace(&ray, Interval::new(0.0, f32::MAX));
    }
    color / samples as f32
}

/// Render the scene into the frame buffer.
///
/// The buffer must already be sized to the camera's resolution; its
/// contents are discarded and rebuilt pixel by pixel, rows outer.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig, frame: &mut FrameBuffer) {
    debug_assert_eq!(camera.image_width, frame.width);
    debug_assert_eq!(camera.image_height, frame.height);

    let start = Instant::now();
    let mut rng = config.rng();

    frame.data.clear();
    for j in 0..frame.height {
        for i in 0..frame.width {
            let averaged = render_pixel(camera, scene, i, j, config.samples_per_pixel, &mut rng);
            let color = gamma_correct(averaged, config.gamma);
            frame.data.push(color.x);
            frame.data.push(color.y);
            frame.data.push(color.z);
        }
    }

    log::info!(
        "rendered {}x{} at {} spp over {} surfaces in {:?}",
        frame.width,
        frame.height,
        config.samples_per_pixel,
        scene.len(),
        start.elapsed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sample_scenes, Light, Phong, Plane, Scene, Vec3};

    fn seeded(seed: u64) -> RenderConfig {
        RenderConfig {
            samples_per_pixel: 1,
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_gamma_round_trip() {
        for c in [0.0, 0.1, 0.25, 0.5, 0.9, 1.0] {
            let corrected = gamma_correct(Color::splat(c), 2.2);
            let back = corrected.x.powf(2.2);
            assert!((back - c).abs() < 1e-5, "c={} round-tripped to {}", c, back);
        }
    }

    #[test]
    fn test_fixed_seed_is_bit_identical() {
        let camera = Camera::new().with_resolution(4, 4);
        let scene = sample_scenes::three_spheres();
        let config = seeded(42);

        let mut a = FrameBuffer::new(4, 4);
        let mut b = FrameBuffer::new(4, 4);
        render(&camera, &scene, &config, &mut a);
        render(&camera, &scene, &config, &mut b);

        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_different_seeds_differ() {
        let camera = Camera::new().with_resolution(4, 4);
        let scene = sample_scenes::three_spheres();

        let mut a = FrameBuffer::new(4, 4);
        let mut b = FrameBuffer::new(4, 4);
        render(&camera, &scene, &seeded(1), &mut a);
        render(&camera, &scene, &seeded(2), &mut b);

        assert_ne!(a.data(), b.data());
    }

    #[test]
    fn test_multisample_average_near_center_sample_on_flat_region() {
        // A wall facing the camera shades almost uniformly within one
        // pixel, so the 64-sample average stays near the center sample
        let mut scene = Scene::new(Light::white(Vec3::new(0.0, 4.0, 0.0)));
        scene.add(Box::new(Plane::new(
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::Z,
            Phong::matte(Color::splat(0.2), Color::splat(0.6)),
        )));

        let camera = Camera::new().with_resolution(8, 8);
        let center = scene.trace(
            &camera.center_ray(3, 3),
            Interval::new(0.0, f32::MAX),
        );
        let center = gamma_correct(center, 2.2);

        let config = RenderConfig {
            samples_per_pixel: 64,
            seed: Some(9),
            ..Default::default()
        };
        let mut frame = FrameBuffer::new(8, 8);
        render(&camera, &scene, &config, &mut frame);

        let averaged = frame.pixel(3, 3);
        assert!((averaged - center).length() < 0.05);
    }

    #[test]
    fn test_resize_renders_exact_new_length() {
        let scene = sample_scenes::three_spheres();
        let config = seeded(3);

        let mut frame = FrameBuffer::new(8, 6);
        let camera = Camera::new().with_resolution(8, 6);
        render(&camera, &scene, &config, &mut frame);
        assert_eq!(frame.data().len(), 8 * 6 * 3);

        frame.resize(5, 4);
        let camera = Camera::new().with_resolution(5, 4);
        render(&camera, &scene, &config, &mut frame);
        assert_eq!(frame.data().len(), 5 * 4 * 3);
    }

    #[test]
    fn test_reference_scene_center_pixel_hits_green_sphere() {
        // The middle of the frame looks straight at the big green sphere
        let camera = Camera::new().with_resolution(9, 9);
        let scene = sample_scenes::three_spheres();
        let color = scene.trace(
            &camera.center_ray(4, 4),
            Interval::new(0.0, f32::MAX),
        );

        assert!(color.y > color.x);
        assert!(color.y > 0.2);
    }
}
