//! Built-in scenes.

use crate::{
    algebra::{Vec3, Vec4},
    config::{RenderConfig, Shading},
    light::Light,
    material::Material,
    plane::Checkerboard,
    scene::{Scene, SceneError},
    sphere::Sphere,
};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// One ivory sphere, unlit.
    SingleSphere,
    /// Four matte spheres under one light, anti-aliased.
    FourSpheres,
    /// Mirror, glass and Phong spheres over a checkerboard floor.
    Whitted,
}

fn ivory() -> Result<Material, SceneError> {
    Material::new(1.0, Vec4(0.6, 0.3, 0.1, 0.0), Vec3(0.4, 0.4, 0.3), 50.0)
}

fn glass() -> Result<Material, SceneError> {
    Material::new(1.5, Vec4(0.0, 0.5, 0.1, 0.8), Vec3(0.6, 0.7, 0.8), 125.0)
}

fn red_rubber() -> Result<Material, SceneError> {
    Material::new(1.0, Vec4(0.9, 0.1, 0.0, 0.0), Vec3(0.3, 0.1, 0.1), 10.0)
}

fn mirror() -> Result<Material, SceneError> {
    Material::new(1.0, Vec4(0.0, 10.0, 0.8, 0.0), Vec3(1.0, 1.0, 1.0), 1425.0)
}

impl Preset {
    pub fn build(self) -> Result<Scene, SceneError> {
        match self {
            Preset::SingleSphere => Ok(Scene::new(
                vec![Sphere::new(Vec3(-3.0, 0.0, -16.0), 2.0, Material::matte(Vec3(0.4, 0.4, 0.3)))?],
                vec![],
            )),
            Preset::FourSpheres => {
                let ivory = Material::matte(Vec3(0.4, 0.4, 0.3));
                let red_rubber = Material::matte(Vec3(0.3, 0.1, 0.1));
                Ok(Scene::new(
                    vec![
                        Sphere::new(Vec3(-3.0, 0.0, -16.0), 2.0, ivory)?,
                        Sphere::new(Vec3(-1.0, -1.5, -12.0), 2.0, red_rubber)?,
                        Sphere::new(Vec3(1.5, -0.5, -18.0), 3.0, red_rubber)?,
                        Sphere::new(Vec3(7.0, 5.0, -18.0), 4.0, ivory)?,
                    ],
                    vec![Light::new(Vec3(-20.0, 20.0, 20.0), 1.5)?],
                ))
            }
            Preset::Whitted => {
                let floor = Checkerboard {
                    height: -4.0,
                    x_range: (-10.0, 10.0),
                    z_range: (-30.0, -10.0),
                    tiles: [Material::matte(Vec3(0.3, 0.3, 0.3)), Material::matte(Vec3(0.3, 0.2, 0.1))],
                };
                let scene = Scene::new(
                    vec![
                        Sphere::new(Vec3(-3.0, 0.0, -16.0), 2.0, ivory()?)?,
                        Sphere::new(Vec3(-1.0, -1.5, -12.0), 2.0, glass()?)?,
                        Sphere::new(Vec3(1.5, -0.5, -18.0), 3.0, red_rubber()?)?,
                        Sphere::new(Vec3(7.0, 5.0, -18.0), 4.0, mirror()?)?,
                    ],
                    vec![
                        Light::new(Vec3(-20.0, 20.0, 20.0), 1.5)?,
                        Light::new(Vec3(30.0, 50.0, -25.0), 1.8)?,
                        Light::new(Vec3(30.0, 20.0, 30.0), 1.7)?,
                    ],
                );
                Ok(scene.with_floor(floor))
            }
        }
    }

    /// Shading and sampling the scene was composed for.
    pub fn configure(self, config: &mut RenderConfig) {
        match self {
            Preset::SingleSphere => {
                config.shading = Shading::Flat;
                config.samples_per_pixel = 1;
            }
            Preset::FourSpheres => {
                config.shading = Shading::Diffuse;
                config.samples_per_pixel = 10;
            }
            Preset::Whitted => {
                config.shading = Shading::Whitted;
                config.samples_per_pixel = 1;
            }
        }
    }
}
