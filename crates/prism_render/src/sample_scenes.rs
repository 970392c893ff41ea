//! Sample scene constructors.

use crate::{Color, Light, Phong, Plane, Scene, Sphere};
use prism_math::Vec3;

/// The reference scene: a grey ground plane under three colored spheres,
/// lit by a single white light up and to the left of the camera.
pub fn three_spheres() -> Scene {
    let mut scene = Scene::new(Light::white(Vec3::new(-4.0, 4.0, -3.0)));

    // Ground plane
    scene.add(Box::new(Plane::new(
        Vec3::new(0.0, -2.0, 0.0),
        Vec3::Y,
        Phong::matte(Color::splat(0.2), Color::ONE),
    )));

    // Matte red sphere
    scene.add(Box::new(Sphere::new(
        Vec3::new(-4.0, 0.0, -7.0),
        1.0,
        Phong::matte(Color::new(0.2, 0.0, 0.0), Color::new(1.0, 0.0, 0.0)),
    )));

    // Glossy green sphere
    scene.add(Box::new(Sphere::new(
        Vec3::new(0.0, 0.0, -7.0),
        2.0,
        Phong::new(
            Color::new(0.0, 0.2, 0.0),
            Color::new(0.0, 0.5, 0.0),
            Color::splat(0.5),
            32.0,
        ),
    )));

    // Matte blue sphere
    scene.add(Box::new(Sphere::new(
        Vec3::new(4.0, 0.0, -7.0),
        1.0,
        Phong::matte(Color::new(0.0, 0.0, 0.2), Color::new(0.0, 0.0, 1.0)),
    )));

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_spheres_composition() {
        let scene = three_spheres();
        assert_eq!(scene.len(), 4);
        assert_eq!(scene.light().position, Vec3::new(-4.0, 4.0, -3.0));
        assert_eq!(scene.light().color, Color::ONE);
    }
}
