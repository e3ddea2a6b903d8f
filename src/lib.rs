//! Whitted-style recursive ray tracer for spheres over a checkerboard floor.
//!
//! A scene of spheres and point lights is traced through a pinhole camera;
//! each hit combines Phong diffuse and specular lighting with hard shadows
//! and recursively traced mirror and refraction rays.

pub mod algebra;
pub mod camera;
pub mod config;
pub mod light;
pub mod material;
pub mod optics;
pub mod output;
pub mod plane;
pub mod presets;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod sphere;
pub mod tonemap;

pub use algebra::{Vec3, Vec4};
pub use camera::Camera;
pub use config::{ConfigError, RenderConfig, Shading};
pub use light::Light;
pub use material::Material;
pub use output::OutputError;
pub use plane::Checkerboard;
pub use presets::Preset;
pub use ray::{HitRecord, Ray};
pub use renderer::{cast_ray, pixel_color, render, FrameBuffer};
pub use scene::{Scene, SceneError};
pub use sphere::Sphere;
