use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3(pub f32, pub f32, pub f32);

impl Vec3 {
    pub const ZERO: Vec3 = Vec3(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3(1.0, 1.0, 1.0);
    pub const UP: Vec3 = Vec3(0.0, 1.0, 0.0);

    pub fn add(self, v: Self) -> Self { Self(self.0+v.0, self.1+v.1, self.2+v.2) }
    pub fn sub(self, v: Self) -> Self { Self(self.0-v.0, self.1-v.1, self.2-v.2) }
    pub fn scale(self, f: f32) -> Self { Self(self.0*f, self.1*f, self.2*f) }
    pub fn dot(self, v: Self) -> f32 { self.0*v.0 + self.1*v.1 + self.2*v.2 }
    pub fn cross(self, v: Self) -> Self {
        Self(self.1*v.2-self.2*v.1, self.2*v.0-self.0*v.2, self.0*v.1-self.1*v.0)
    }
    pub fn norm(self) -> f32 { self.dot(self).sqrt() }
    pub fn normalize(self) -> Self { self.normalize_to(1.0) }
    pub fn neg(self) -> Self { Self(-self.0,-self.1,-self.2) }
    pub fn max_component(self) -> f32 { self.0.max(self.1).max(self.2) }

    /// Rescales the vector so its norm equals `len`.
    /// The zero vector has no direction and is returned unchanged.
    pub fn normalize_to(self, len: f32) -> Self {
        let n = self.norm();
        if n == 0.0 { self } else { self.scale(len / n) }
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Self { Vec3(a[0], a[1], a[2]) }
}

/// Four weights, used for material albedo.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec4(pub f32, pub f32, pub f32, pub f32);

/* Custom helper so Serde turns a JSON array into Vec3 */
pub fn vec3_from_array<'de, D>(d: D) -> Result<Vec3, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let arr = <[f32; 3]>::deserialize(d)?;
    Ok(arr.into())
}

pub fn vec3_to_array<S>(v: &Vec3, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    [v.0, v.1, v.2].serialize(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_to_length() {
        let v = Vec3(3.0, 0.0, 4.0).normalize_to(10.0);
        assert!((v.norm() - 10.0).abs() < 1e-5);
        assert!((v.0 - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    }

    #[test]
    fn test_cross_is_orthogonal() {
        let a = Vec3(1.0, 2.0, 3.0);
        let b = Vec3(-2.0, 0.5, 1.0);
        let c = a.cross(b);
        assert!(c.dot(a).abs() < 1e-5);
        assert!(c.dot(b).abs() < 1e-5);
    }

    #[test]
    fn test_vec3_json_array() {
        #[derive(Deserialize, Serialize)]
        struct Holder {
            #[serde(deserialize_with = "vec3_from_array", serialize_with = "vec3_to_array")]
            at: Vec3,
        }
        let h: Holder = serde_json::from_str(r#"{ "at": [0.5, -1, 2] }"#).unwrap();
        assert_eq!(h.at, Vec3(0.5, -1.0, 2.0));
        assert_eq!(serde_json::to_string(&h).unwrap(), r#"{"at":[0.5,-1.0,2.0]}"#);
    }
}
