use crate::algebra::Vec3;

/// Mirror `v` about the plane with normal `n`.
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 { v.sub(n.scale(2.0*v.dot(n))) }

/// Snell refraction of unit `dir` through a surface with outward `normal`
/// separating air from a medium of index `eta_t`.
///
/// A ray with `dir·normal > 0` is leaving the medium: the normal is flipped and
/// the indices swapped. Returns `None` on total internal reflection.
pub fn refract(dir: Vec3, normal: Vec3, eta_t: f32) -> Option<Vec3> {
    let mut cosi = -dir.dot(normal).clamp(-1.0, 1.0);
    let (mut n, mut eta_i, mut eta_t) = (normal, 1.0, eta_t);
    if cosi < 0.0 {
        cosi = -cosi;
        n = n.neg();
        std::mem::swap(&mut eta_i, &mut eta_t);
    }
    let eta = eta_i / eta_t;
    let k = 1.0 - eta*eta*(1.0 - cosi*cosi);
    (k >= 0.0).then(|| dir.scale(eta).add(n.scale(eta*cosi - k.sqrt())).normalize())
}
