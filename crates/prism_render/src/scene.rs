//! Scene ownership, nearest-hit tracing, and Phong shading.

use crate::{Color, Phong, Surface};
use prism_math::{Interval, Ray, Vec3};

/// Offset along the normal when spawning shadow rays, to keep the shaded
/// point from occluding itself (shadow acne).
const SHADOW_BIAS: f32 = 1e-4;

/// A point light.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    /// Create a white light at the given position.
    pub fn white(position: Vec3) -> Self {
        Self {
            position,
            color: Color::ONE,
        }
    }
}

/// A collection of surfaces with a single light.
///
/// The scene exclusively owns its surfaces; they are dropped with it at the
/// end of the render call that built it. List order only determines the
/// iteration order of the hit test.
pub struct Scene {
    surfaces: Vec<Box<dyn Surface>>,
    light: Light,
    background: Color,
}

impl Scene {
    /// Create an empty scene with a black background.
    pub fn new(light: Light) -> Self {
        Self {
            surfaces: Vec::new(),
            light,
            background: Color::ZERO,
        }
    }

    /// Set the color returned when a ray hits nothing.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Add a surface to the scene.
    pub fn add(&mut self, surface: Box<dyn Surface>) {
        self.surfaces.push(surface);
    }

    /// Get the number of surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Check if the scene has no surfaces.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Get the scene's light.
    pub fn light(&self) -> Light {
        self.light
    }

    /// Trace a ray to the nearest surface and shade it.
    ///
    /// Linear scan over all surfaces with a shrinking upper bound, so
    /// farther candidates are pruned by their own intersection test.
    /// Returns the background color on a miss.
    pub fn trace(&self, ray: &Ray, ray_t: Interval) -> Color {
        let mut closest_t = ray_t.max;
        let mut hit: Option<&dyn Surface> = None;

        for surface in &self.surfaces {
            if let Some(t) = surface.intersect(ray, ray_t.capped(closest_t)) {
                closest_t = t;
                hit = Some(surface.as_ref());
            }
        }

        match hit {
            Some(surface) => {
                let point = ray.at(closest_t);
                let normal = surface.normal_at(point);
                self.phong_shading(ray, point, normal, surface.material())
            }
            None => self.background,
        }
    }

    /// Local Phong illumination at a hit point.
    ///
    /// Ambient always applies; diffuse and specular are cut when the point
    /// is shadowed. The view direction is measured back toward the ray
    /// origin, which equals the eye vector for the primary rays shaded
    /// here. The result is unclamped linear color.
    pub fn phong_shading(&self, ray: &Ray, point: Vec3, normal: Vec3, material: &Phong) -> Color {
        let ambient = material.ambient();

        let light_dir = (self.light.position - point).normalize();
        let view_dir = (ray.origin - point).normalize();
        let half_dir = (light_dir + view_dir).normalize();

        if self.in_shadow(point, normal) {
            return ambient;
        }

        let diffuse = material.diffuse() * normal.dot(light_dir).max(0.0);
        let specular =
            material.specular() * normal.dot(half_dir).max(0.0).powf(material.shininess());

        ambient + (diffuse + specular) * self.light.color
    }

    /// Test whether any surface occludes the segment from `point` to the
    /// light. The shadow ray starts slightly off the surface along its
    /// normal and is bounded by the distance to the light.
    fn in_shadow(&self, point: Vec3, normal: Vec3) -> bool {
        let to_light = self.light.position - point;
        let distance = to_light.length();
        let shadow_ray = Ray::new(point + normal * SHADOW_BIAS, to_light / distance);
        let ray_t = Interval::new(0.0, distance);

        self.surfaces
            .iter()
            .any(|surface| surface.intersect(&shadow_ray, ray_t).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plane, Sphere};

    fn matte(kd: Color) -> Phong {
        Phong::matte(Color::splat(0.1), kd)
    }

    #[test]
    fn test_nearest_surface_wins() {
        // Two spheres overlapping along the ray: the closer hit is shaded
        // with the closer sphere's material
        let mut scene = Scene::new(Light::white(Vec3::new(0.0, 10.0, 0.0)));
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            1.0,
            matte(Color::new(0.0, 1.0, 0.0)),
        )));
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            matte(Color::new(1.0, 0.0, 0.0)),
        )));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = scene.trace(&ray, Interval::new(0.0, f32::MAX));

        // Red sphere at t=4 beats green at t=9: red channel dominates
        assert!(color.x > color.y);
    }

    #[test]
    fn test_insertion_order_does_not_change_winner() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut colors = Vec::new();

        for flipped in [false, true] {
            let mut scene = Scene::new(Light::white(Vec3::new(0.0, 10.0, 0.0)));
            let far = Box::new(Sphere::new(
                Vec3::new(0.0, 0.0, -10.0),
                1.0,
                matte(Color::new(0.0, 1.0, 0.0)),
            ));
            let near = Box::new(Sphere::new(
                Vec3::new(0.0, 0.0, -5.0),
                1.0,
                matte(Color::new(1.0, 0.0, 0.0)),
            ));
            if flipped {
                scene.add(near);
                scene.add(far);
            } else {
                scene.add(far);
                scene.add(near);
            }
            colors.push(scene.trace(&ray, Interval::new(0.0, f32::MAX)));
        }

        assert_eq!(colors[0], colors[1]);
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = Scene::new(Light::white(Vec3::new(0.0, 10.0, 0.0)))
            .with_background(Color::new(0.25, 0.5, 0.75));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert_eq!(
            scene.trace(&ray, Interval::new(0.0, f32::MAX)),
            Color::new(0.25, 0.5, 0.75)
        );
    }

    #[test]
    fn test_occluder_kills_diffuse_and_specular() {
        // A floor point lit from straight above, with and without an
        // occluding sphere between the point and the light
        let light = Light::white(Vec3::new(0.0, 10.0, -5.0));
        let floor = || {
            Box::new(Plane::new(
                Vec3::new(0.0, -2.0, 0.0),
                Vec3::Y,
                Phong::new(
                    Color::splat(0.1),
                    Color::ONE,
                    Color::splat(0.5),
                    32.0,
                ),
            ))
        };

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -2.0, -5.0).normalize());

        let mut open = Scene::new(light);
        open.add(floor());
        let lit = open.trace(&ray, Interval::new(0.0, f32::MAX));

        let mut blocked = Scene::new(light);
        blocked.add(floor());
        blocked.add(Box::new(Sphere::new(
            Vec3::new(0.0, 4.0, -5.0),
            1.0,
            matte(Color::ONE),
        )));
        let shadowed = blocked.trace(&ray, Interval::new(0.0, f32::MAX));

        // In shadow only ambient survives
        assert_eq!(shadowed, Color::splat(0.1));
        // Without the occluder the normal faces the light: nonzero diffuse
        assert!(lit.x > shadowed.x);
    }

    #[test]
    fn test_surface_does_not_shadow_itself() {
        // A lone floor lit from above must not be dark from acne
        let light = Light::white(Vec3::new(0.0, 10.0, -5.0));
        let mut scene = Scene::new(light);
        scene.add(Box::new(Plane::new(
            Vec3::new(0.0, -2.0, 0.0),
            Vec3::Y,
            Phong::matte(Color::splat(0.1), Color::ONE),
        )));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -2.0, -5.0).normalize());
        let color = scene.trace(&ray, Interval::new(0.0, f32::MAX));

        assert!(color.x > 0.1, "diffuse term missing: {:?}", color);
    }

    #[test]
    fn test_light_color_scales_direct_terms() {
        let position = Vec3::new(0.0, 10.0, -5.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -2.0, -5.0).normalize());

        let shade = |light: Light| {
            let mut scene = Scene::new(light);
            scene.add(Box::new(Plane::new(
                Vec3::new(0.0, -2.0, 0.0),
                Vec3::Y,
                Phong::matte(Color::splat(0.1), Color::ONE),
            )));
            scene.trace(&ray, Interval::new(0.0, f32::MAX))
        };

        let white = shade(Light::white(position));
        let dim = shade(Light {
            position,
            color: Color::splat(0.5),
        });

        // Ambient is untouched, diffuse halves
        assert!((white.x - 0.1 - 2.0 * (dim.x - 0.1)).abs() < 1e-5);
    }
}
