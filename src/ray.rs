//! Rays and intersection records.

use crate::{algebra::Vec3, material::Material};

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length, except for the degenerate zero ray.
    pub direction: Vec3,
}

impl Ray {
    /// Builds a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction: direction.normalize() }
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin.add(self.direction.scale(t))
    }

    /// Ray leaving `point` in `direction`, nudged off the surface by `bias`
    /// on the side of `normal` the direction points into.
    pub fn offset(point: Vec3, direction: Vec3, normal: Vec3, bias: f32) -> Self {
        let origin = if direction.dot(normal) < 0.0 {
            point.sub(normal.scale(bias))
        } else {
            point.add(normal.scale(bias))
        };
        Self::new(origin, direction)
    }
}

/// Nearest surface a ray met.
#[derive(Clone, Copy, Debug)]
pub struct HitRecord {
    pub t: f32,
    pub point: Vec3,
    /// Unit length. Outward for spheres, +Y for the floor.
    pub normal: Vec3,
    pub material: Material,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3(2.0, 0.0, 0.0));
        assert_eq!(ray.direction, Vec3(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.5), Vec3(2.5, 0.0, 0.0));
    }

    #[test]
    fn test_offset_follows_direction_side() {
        let n = Vec3::UP;
        let out = Ray::offset(Vec3::ZERO, Vec3(0.0, 1.0, 0.0), n, 1e-3);
        let inside = Ray::offset(Vec3::ZERO, Vec3(0.0, -1.0, 0.0), n, 1e-3);
        assert!(out.origin.1 > 0.0);
        assert!(inside.origin.1 < 0.0);
    }
}
