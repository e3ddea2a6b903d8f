//! src/sphere.rs
//! -------------
//! Analytic sphere primitive.

use crate::{material::Material, ray::Ray, scene::SceneError, algebra::Vec3};

#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    pub center   : Vec3,
    pub radius   : f32,
    pub material : Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: Material) -> Result<Self, SceneError> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(SceneError::InvalidRadius(radius));
        }
        Ok(Self { center, radius, material })
    }

    /// Distance along `ray` to the first surface crossing in front of the
    /// origin. From inside the sphere this is the exit point.
    pub fn hit(&self, ray: &Ray) -> Option<f32> {
        if !(self.radius > 0.0) {
            return None;
        }
        let l   = self.center.sub(ray.origin);
        let tca = l.dot(ray.direction);
        let d2  = l.dot(l) - tca * tca;
        let r2  = self.radius * self.radius;
        if d2 > r2 { return None; }

        let thc = (r2 - d2).sqrt();
        let t0  = tca - thc;
        let t1  = tca + thc;
        let t   = if t0 < 0.0 { t1 } else { t0 };
        if t < 0.0 { None } else { Some(t) }
    }

    /// Unit normal at a surface point, pointing away from the center.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        point.sub(self.center).normalize()
    }
}
