//! Render settings.
//!
//! Every knob of the renderer lives here. Settings are read from an optional
//! JSON file laid over a base config; keys the file leaves out keep the base
//! value.

use crate::algebra::{vec3_from_array, vec3_to_array, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// How much of the lighting model to evaluate per hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shading {
    /// Hit surfaces show their diffuse color, unlit.
    Flat,
    /// Lambert term only: no shadows, specular highlights or secondary rays.
    Diffuse,
    /// Phong with hard shadows, reflection and refraction.
    #[default]
    Whitted,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in radians.
    pub fov: f32,
    #[serde(deserialize_with = "vec3_from_array", serialize_with = "vec3_to_array")]
    pub camera: Vec3,
    pub max_depth: u32,
    /// Offset applied to secondary and shadow ray origins.
    pub bias: f32,
    #[serde(deserialize_with = "vec3_from_array", serialize_with = "vec3_to_array")]
    pub background: Vec3,
    /// Hits at or beyond this distance count as misses.
    pub far_cutoff: f32,
    pub samples_per_pixel: u32,
    pub seed: u64,
    /// Shard rows across the rayon pool.
    pub parallel: bool,
    pub shading: Shading,
    /// Lights closer than this to a hit point are ignored for that point.
    pub min_light_distance: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            fov: FRAC_PI_2,
            camera: Vec3::ZERO,
            max_depth: 4,
            bias: 1e-3,
            background: Vec3(0.2, 0.7, 0.8),
            far_cutoff: 1000.0,
            samples_per_pixel: 1,
            seed: 0,
            parallel: false,
            shading: Shading::Whitted,
            min_light_distance: 1e-4,
        }
    }
}

impl RenderConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::load_over(path, &Self::default())
    }

    /// Reads a JSON settings file on top of `base`.
    pub fn load_over<P: AsRef<Path>>(path: P, base: &RenderConfig) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_json_over(base, &data)?;
        config.validate()?;
        Ok(config)
    }

    /// `base` with every key present in `json` replaced. Not validated.
    pub fn from_json_over(base: &RenderConfig, json: &str) -> Result<Self, ConfigError> {
        let mut merged = serde_json::to_value(base)?;
        match (merged.as_object_mut(), serde_json::from_str(json)?) {
            (Some(dst), serde_json::Value::Object(src)) => dst.extend(src),
            _ => {
                return Err(ConfigError::Invalid {
                    field: "<root>",
                    reason: "settings must be a JSON object".to_string(),
                })
            }
        }
        Ok(serde_json::from_value(merged)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason: &str| Err(ConfigError::Invalid { field, reason: reason.to_string() });

        if self.width == 0 || self.height == 0 {
            return invalid("width/height", "image must be at least 1x1");
        }
        if self.samples_per_pixel == 0 {
            return invalid("samples_per_pixel", "need at least one sample");
        }
        if !(self.fov > 0.0 && self.fov < std::f32::consts::PI) {
            return invalid("fov", "must lie strictly between 0 and pi");
        }
        if !(self.bias > 0.0) {
            return invalid("bias", "must be positive");
        }
        if !(self.far_cutoff > 0.0) {
            return invalid("far_cutoff", "must be positive");
        }
        if !(self.min_light_distance >= 0.0) {
            return invalid("min_light_distance", "must be non-negative");
        }
        Ok(())
    }
}
