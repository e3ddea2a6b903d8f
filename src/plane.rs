use crate::algebra::Vec3;
use crate::material::Material;
use crate::ray::{HitRecord, Ray};

/// Rays flatter than this against the floor are treated as parallel.
const PARALLEL_EPS: f32 = 1e-3;

/// Side of one checker tile in world units.
const TILE: f32 = 2.0;

/// Finite horizontal floor at `y = height`, patterned as a checkerboard.
///
/// The tile materials are built once with the scene and copied into each hit.
#[derive(Clone, Copy, Debug)]
pub struct Checkerboard {
    pub height : f32,
    /// Open interval of accepted x coordinates.
    pub x_range: (f32, f32),
    /// Open interval of accepted z coordinates.
    pub z_range: (f32, f32),
    pub tiles  : [Material; 2],
}

impl Checkerboard {
    /// Distance and hit record, or `None` when the ray misses the rectangle.
    pub fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let dy = ray.direction.1;
        if dy.abs() <= PARALLEL_EPS {
            return None;
        }

        let t = -(ray.origin.1 - self.height) / dy;
        if !(t > 0.0) {
            return None;
        }

        let point = ray.at(t);
        let inside = |v: f32, (lo, hi): (f32, f32)| v > lo && v < hi;
        if !inside(point.0, self.x_range) || !inside(point.2, self.z_range) {
            return None;
        }

        Some(HitRecord { t, point, normal: Vec3::UP, material: self.material_at(point) })
    }

    /// Tile material under a point on the floor.
    pub fn material_at(&self, point: Vec3) -> Material {
        let ix = (point.0 / TILE).floor() as i64;
        let iz = (point.2 / TILE).floor() as i64;
        self.tiles[(ix + iz).rem_euclid(2) as usize]
    }
}
