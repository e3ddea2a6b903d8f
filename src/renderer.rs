use crate::{
    algebra::Vec3,
    camera::Camera,
    config::{ConfigError, RenderConfig, Shading},
    optics::{reflect, refract},
    ray::{HitRecord, Ray},
    scene::Scene,
};
use indicatif::ProgressBar;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use std::time::Instant;

/// Row-major color accumulator, row 0 at the top.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    pub width : u32,
    pub height: u32,
    pub pixels: Vec<Vec3>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, pixels: vec![Vec3::ZERO; width as usize * height as usize] }
    }

    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Vec3) {
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }
}

/// Summed diffuse and specular intensity arriving at a hit from all lights.
///
/// With `shadows` set, a light counts only if a shadow ray toward it meets
/// nothing before reaching it.
fn lighting(
    hit: &HitRecord, view: Vec3,
    scene: &Scene, config: &RenderConfig,
    shadows: bool,
) -> (f32, f32) {
    let mut diffuse  = 0.0;
    let mut specular = 0.0;

    for light in &scene.lights {
        let to_light = light.pos.sub(hit.point);
        let dist = to_light.norm();
        if dist < config.min_light_distance {
            log::trace!("skipping light at {:?}: too close to {:?}", light.pos, hit.point);
            continue;
        }
        let l = to_light.scale(1.0 / dist);

        if shadows {
            let shadow = Ray::offset(hit.point, l, hit.normal, config.bias);
            let blocked = scene
                .intersect(&shadow, config.far_cutoff)
                .is_some_and(|s| s.point.sub(shadow.origin).norm() < dist);
            if blocked { continue; }
        }

        diffuse  += light.intensity * l.dot(hit.normal).max(0.0);
        specular += light.intensity
            * reflect(l, hit.normal).dot(view).max(0.0).powf(hit.material.specular_exponent);
    }

    (diffuse, specular)
}

/// Color seen along `ray`.
///
/// `depth` counts the bounces that produced this ray; at `config.max_depth`
/// the background is returned without tracing.
pub fn cast_ray(ray: &Ray, scene: &Scene, config: &RenderConfig, depth: u32) -> Vec3 {
    if depth >= config.max_depth {
        return config.background;
    }
    let hit = match scene.intersect(ray, config.far_cutoff) {
        Some(h) => h,
        None => return config.background,
    };
    let mat = hit.material;

    match config.shading {
        Shading::Flat => mat.diffuse_color,
        Shading::Diffuse => {
            let (diffuse, _) = lighting(&hit, ray.direction, scene, config, false);
            mat.diffuse_color.scale(diffuse * mat.albedo.0)
        }
        Shading::Whitted => {
            let (n, p) = (hit.normal, hit.point);

            // zero-weight branches contribute nothing, skip the trace
            let reflect_color = if mat.albedo.2 != 0.0 {
                let dir = reflect(ray.direction, n).normalize();
                cast_ray(&Ray::offset(p, dir, n, config.bias), scene, config, depth + 1)
            } else {
                Vec3::ZERO
            };

            let refract_color = if mat.albedo.3 != 0.0 {
                match refract(ray.direction, n, mat.refractive_index) {
                    Some(dir) => cast_ray(&Ray::offset(p, dir, n, config.bias), scene, config, depth + 1),
                    // total internal reflection: nothing is transmitted, the
                    // branch sees what a degenerate ray would
                    None => config.background,
                }
            } else {
                Vec3::ZERO
            };

            let (diffuse, specular) = lighting(&hit, ray.direction, scene, config, true);

            mat.diffuse_color.scale(diffuse * mat.albedo.0)
                .add(Vec3::ONE.scale(specular * mat.albedo.1))
                .add(reflect_color.scale(mat.albedo.2))
                .add(refract_color.scale(mat.albedo.3))
        }
    }
}

/// Box-filter average of `n` samples.
///
/// Sums in f64 so that `n` identical samples average back to exactly that
/// sample.
pub fn accumulate(n: u32, mut sample: impl FnMut() -> Vec3) -> Vec3 {
    let mut acc = [0.0f64; 3];
    for _ in 0..n {
        let c = sample();
        acc[0] += c.0 as f64;
        acc[1] += c.1 as f64;
        acc[2] += c.2 as f64;
    }
    let n = n.max(1) as f64;
    Vec3((acc[0] / n) as f32, (acc[1] / n) as f32, (acc[2] / n) as f32)
}

/// Color of pixel `(i, j)`.
///
/// A single sample goes through the pixel center. With more, each sample
/// draws one jitter in [-0.5, 0.5) applied to both axes.
pub fn pixel_color(
    i: u32, j: u32,
    camera: &Camera, scene: &Scene, config: &RenderConfig,
    rng: &mut impl Rng,
) -> Vec3 {
    if config.samples_per_pixel <= 1 {
        return cast_ray(&camera.ray(i, j, 0.0), scene, config, 0);
    }
    accumulate(config.samples_per_pixel, || {
        let jitter = rng.r#gen::<f32>() - 0.5;
        cast_ray(&camera.ray(i, j, jitter), scene, config, 0)
    })
}

/// Each row draws from its own stream so sharded and sequential renders agree.
fn row_rng(seed: u64, row: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Renders `scene` into a new frame buffer.
pub fn render(
    scene: &Scene,
    config: &RenderConfig,
    progress: Option<&ProgressBar>,
) -> Result<FrameBuffer, ConfigError> {
    config.validate()?;

    let camera = Camera::from_config(config);
    let mut frame = FrameBuffer::new(config.width, config.height);
    let width = config.width as usize;

    log::info!(
        "rendering {}x{} with {} sample(s)/px, {} sphere(s), {} light(s), {:?} shading",
        config.width, config.height, config.samples_per_pixel,
        scene.spheres.len(), scene.lights.len(), config.shading,
    );
    let started = Instant::now();

    let render_row = |(j, row): (usize, &mut [Vec3])| {
        let mut rng = row_rng(config.seed, j);
        for (i, px) in row.iter_mut().enumerate() {
            *px = pixel_color(i as u32, j as u32, &camera, scene, config, &mut rng);
        }
        if let Some(pb) = progress {
            pb.inc(1);
        }
    };

    if config.parallel {
        frame.pixels.par_chunks_mut(width).enumerate().for_each(render_row);
    } else {
        frame.pixels.chunks_mut(width).enumerate().for_each(render_row);
    }

    log::info!("render finished in {:.3}s", started.elapsed().as_secs_f64());
    Ok(frame)
}
