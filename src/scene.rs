use crate::{
    light::Light,
    plane::Checkerboard,
    ray::{HitRecord, Ray},
    sphere::Sphere,
};
use thiserror::Error;

/// Errors raised while building scene primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("light intensity must be non-negative and finite, got {0}")]
    InvalidIntensity(f32),

    #[error("refractive index must be positive and finite, got {0}")]
    InvalidRefractiveIndex(f32),

    #[error("specular exponent must be non-negative, got {0}")]
    InvalidSpecularExponent(f32),
}

/// Everything a render reads. Built once, never mutated while rendering.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights : Vec<Light>,
    pub floor  : Option<Checkerboard>,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        Self { spheres, lights, floor: None }
    }

    pub fn with_floor(mut self, floor: Checkerboard) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Nearest surface along `ray` closer than `far`.
    ///
    /// Spheres are tested in order with a strict comparison, so the first of
    /// two equally distant spheres wins; the floor only wins when strictly
    /// closer than every sphere.
    pub fn intersect(&self, ray: &Ray, far: f32) -> Option<HitRecord> {
        let mut nearest = f32::MAX;
        let mut closest: Option<&Sphere> = None;
        for sphere in &self.spheres {
            if let Some(t) = sphere.hit(ray) {
                if t < nearest {
                    nearest = t;
                    closest = Some(sphere);
                }
            }
        }

        let mut record = closest.map(|s| {
            let point = ray.at(nearest);
            HitRecord { t: nearest, point, normal: s.normal_at(point), material: s.material }
        });

        if let Some(floor_hit) = self.floor.as_ref().and_then(|f| f.hit(ray)) {
            if floor_hit.t < nearest {
                record = Some(floor_hit);
            }
        }

        record.filter(|r| r.t < far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algebra::Vec3, material::Material};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const FAR: f32 = 1000.0;

    fn colored(c: f32) -> Material {
        Material::matte(Vec3(c, c, c))
    }

    #[test]
    fn test_nearest_sphere_wins() {
        let near = Sphere::new(Vec3(0.0, 0.0, -5.0), 1.0, colored(0.1)).unwrap();
        let far = Sphere::new(Vec3(0.0, 0.0, -10.0), 1.0, colored(0.9)).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3(0.0, 0.0, -1.0));
        for spheres in [vec![near, far], vec![far, near]] {
            let hit = Scene::new(spheres, vec![]).intersect(&ray, FAR).unwrap();
            assert_eq!(hit.material, colored(0.1));
            assert!((hit.t - 4.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_exact_tie_goes_to_first() {
        let a = Sphere::new(Vec3(0.0, 0.0, -5.0), 1.0, colored(0.1)).unwrap();
        let b = Sphere::new(Vec3(0.0, 0.0, -5.0), 1.0, colored(0.9)).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3(0.0, 0.0, -1.0));
        let hit = Scene::new(vec![a, b], vec![]).intersect(&ray, FAR).unwrap();
        assert_eq!(hit.material, colored(0.1));
    }

    #[test]
    fn test_matches_independent_minimum() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut spheres = Vec::new();
        for i in 0..12 {
            let c = Vec3(rng.gen_range(-6.0..6.0), rng.gen_range(-6.0..6.0), rng.gen_range(-30.0..-8.0));
            spheres.push(Sphere::new(c, rng.gen_range(0.5..3.0), colored(i as f32 / 12.0)).unwrap());
        }
        let scene = Scene::new(spheres.clone(), vec![]);
        for _ in 0..200 {
            let dir = Vec3(rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5), -1.0);
            let ray = Ray::new(Vec3::ZERO, dir);
            let expected = spheres
                .iter()
                .filter_map(|s| s.hit(&ray).map(|t| (t, s)))
                .min_by(|a, b| a.0.total_cmp(&b.0));
            match (scene.intersect(&ray, FAR), expected) {
                (Some(hit), Some((t, s))) => {
                    assert_eq!(hit.t, t);
                    assert_eq!(hit.material, s.material);
                    assert!((hit.normal.norm() - 1.0).abs() < 1e-5);
                    assert!(hit.normal.dot(hit.point.sub(s.center)) > 0.0);
                }
                (None, None) => {}
                (got, want) => panic!("mismatch: {:?} vs {:?}", got.map(|h| h.t), want.map(|w| w.0)),
            }
        }
    }

    #[test]
    fn test_far_cutoff_is_background() {
        let s = Sphere::new(Vec3(0.0, 0.0, -2000.0), 1.0, colored(0.5)).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3(0.0, 0.0, -1.0));
        assert!(Scene::new(vec![s], vec![]).intersect(&ray, FAR).is_none());
    }

    #[test]
    fn test_floor_behind_sphere_loses() {
        let floor = Checkerboard {
            height: -4.0,
            x_range: (-10.0, 10.0),
            z_range: (-30.0, -10.0),
            tiles: [colored(0.3), colored(0.6)],
        };
        let ball = Sphere::new(Vec3(0.0, -2.0, -20.0), 1.0, colored(0.9)).unwrap();
        let scene = Scene::new(vec![ball], vec![]).with_floor(floor);

        let down = Ray::new(Vec3(0.0, 0.0, -20.0), Vec3(0.0, -1.0, 0.0));
        assert_eq!(scene.intersect(&down, FAR).unwrap().material, colored(0.9));

        let beside = Ray::new(Vec3(5.0, 0.0, -20.0), Vec3(0.0, -1.0, 0.0));
        let hit = scene.intersect(&beside, FAR).unwrap();
        assert_eq!(hit.normal, Vec3::UP);
        assert!((hit.t - 4.0).abs() < 1e-6);
    }
}
