//! Headless display shell for the Prism ray tracer.
//!
//! Stands where a windowed viewer would: it owns the persistent frame
//! buffer, asks the renderer to fill it, and presents the result as a PNG
//! instead of a blit. Scene and camera are rebuilt on every render call,
//! so a resize only needs a buffer resize and another call.

use anyhow::{Context, Result};
use prism_render::{render, sample_scenes, Camera, FrameBuffer, RenderConfig};
use std::path::Path;

fn env_u32(key: &str, default: u32) -> Result<u32> {
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("invalid {}: {}", key, value)),
        Err(_) => Ok(default),
    }
}

fn env_seed() -> Result<Option<u64>> {
    match std::env::var("SEED") {
        Ok(value) => {
            let seed = value
                .parse()
                .with_context(|| format!("invalid SEED: {}", value))?;
            Ok(Some(seed))
        }
        Err(_) => Ok(None),
    }
}

/// One full render pass at the buffer's current resolution.
fn render_frame(config: &RenderConfig, frame: &mut FrameBuffer) {
    let scene = sample_scenes::three_spheres();
    let camera = Camera::new().with_resolution(frame.width(), frame.height());
    render(&camera, &scene, config, frame);
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let width = env_u32("WIDTH", 512)?;
    let height = env_u32("HEIGHT", 512)?;
    let config = RenderConfig {
        samples_per_pixel: env_u32("SAMPLES", 64)?,
        seed: env_seed()?,
        ..Default::default()
    };
    let out = std::env::var("OUT").unwrap_or_else(|_| "prism.png".to_string());

    log::info!(
        "Starting Prism: {}x{}, {} spp",
        width,
        height,
        config.samples_per_pixel
    );

    let mut frame = FrameBuffer::new(width, height);
    render_frame(&config, &mut frame);

    frame
        .save_png(Path::new(&out))
        .with_context(|| format!("failed to write {}", out))?;
    log::info!("Wrote {}", out);

    Ok(())
}
