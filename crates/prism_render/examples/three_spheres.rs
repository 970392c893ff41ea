//! Phong tracer example.
//!
//! Renders the reference scene and saves it as a PNG.

use prism_render::{render, sample_scenes, Camera, FrameBuffer, RenderConfig};

fn main() {
    println!("Prism Ray Tracer - Three Spheres");
    println!("================================");

    let width = 512;
    let height = 512;

    let scene = sample_scenes::three_spheres();
    let camera = Camera::new().with_resolution(width, height);
    let config = RenderConfig::default();

    println!(
        "Rendering {}x{} @ {} spp...",
        width, height, config.samples_per_pixel
    );

    let start = std::time::Instant::now();
    let mut frame = FrameBuffer::new(width, height);
    render(&camera, &scene, &config, &mut frame);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "three_spheres.png";
    frame
        .save_png(std::path::Path::new(filename))
        .expect("Failed to save image");
    println!("Saved to {}", filename);
}
