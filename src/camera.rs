//! Pinhole camera looking down -Z.

use crate::{algebra::Vec3, config::RenderConfig, ray::Ray};

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub origin: Vec3,
    width : f32,
    height: f32,
    /// tan(fov / 2)
    scale : f32,
}

impl Camera {
    pub fn new(origin: Vec3, width: u32, height: u32, fov: f32) -> Self {
        Self {
            origin,
            width : width as f32,
            height: height as f32,
            scale : (fov * 0.5).tan(),
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.camera, config.width, config.height, config.fov)
    }

    /// Primary ray through pixel `(i, j)`, row 0 at the top.
    /// `jitter` shifts the sample position along both axes, in pixels.
    pub fn ray(&self, i: u32, j: u32, jitter: f32) -> Ray {
        let aspect = self.width / self.height;
        let x =  (2.0 * (i as f32 + 0.5 + jitter) / self.width  - 1.0) * self.scale * aspect;
        let y = -(2.0 * (j as f32 + 0.5 + jitter) / self.height - 1.0) * self.scale;
        Ray::new(self.origin, Vec3(x, y, -1.0))
    }
}
