use crate::algebra::Vec3;
use crate::scene::SceneError;

/// Point light with a scalar intensity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub pos: Vec3,
    pub intensity: f32,
}

impl Light {
    pub fn new(pos: Vec3, intensity: f32) -> Result<Self, SceneError> {
        if !(intensity >= 0.0) || !intensity.is_finite() {
            return Err(SceneError::InvalidIntensity(intensity));
        }
        Ok(Self { pos, intensity })
    }
}
