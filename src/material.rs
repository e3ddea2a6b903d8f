use crate::algebra::{Vec3, Vec4};
use crate::scene::SceneError;

/// Surface response of a primitive.
///
/// `albedo` weights the four shading terms: diffuse, specular, reflection and
/// refraction. The weights need not sum to one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub albedo: Vec4,
    pub diffuse_color: Vec3,
    pub specular_exponent: f32,
    pub refractive_index: f32,
}

impl Material {
    pub fn new(
        refractive_index: f32,
        albedo: Vec4,
        diffuse_color: Vec3,
        specular_exponent: f32,
    ) -> Result<Self, SceneError> {
        if !(refractive_index > 0.0) || !refractive_index.is_finite() {
            return Err(SceneError::InvalidRefractiveIndex(refractive_index));
        }
        if !(specular_exponent >= 0.0) {
            return Err(SceneError::InvalidSpecularExponent(specular_exponent));
        }
        Ok(Self { albedo, diffuse_color, specular_exponent, refractive_index })
    }

    /// Purely diffuse material with the given color.
    pub fn matte(diffuse_color: Vec3) -> Self {
        Self { diffuse_color, ..Self::default() }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Vec4(1.0, 0.0, 0.0, 0.0),
            diffuse_color: Vec3::ZERO,
            specular_exponent: 0.0,
            refractive_index: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_index() {
        let r = Material::new(0.0, Vec4::default(), Vec3::ONE, 1.0);
        assert!(matches!(r, Err(SceneError::InvalidRefractiveIndex(_))));
    }

    #[test]
    fn test_rejects_negative_exponent() {
        let r = Material::new(1.0, Vec4::default(), Vec3::ONE, -1.0);
        assert!(matches!(r, Err(SceneError::InvalidSpecularExponent(_))));
    }

    #[test]
    fn test_matte_is_pure_diffuse() {
        let m = Material::matte(Vec3(0.4, 0.4, 0.3));
        assert_eq!(m.albedo, Vec4(1.0, 0.0, 0.0, 0.0));
        assert_eq!(m.refractive_index, 1.0);
    }
}
