//! Vector helpers used by the force loop and the thrust mapper
//!
//! Thin wrappers over nalgebra so the physics code reads in terms of
//! difference / magnitude / cross / unit

use super::states::NVec3;

/// `a - b`
#[inline]
pub fn diff(a: &NVec3, b: &NVec3) -> NVec3 {
    a - b
}

/// Euclidean length |v|
#[inline]
pub fn magnitude(v: &NVec3) -> f64 {
    (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
}

/// Right-handed cross product `a x b`
#[inline]
pub fn cross(a: &NVec3, b: &NVec3) -> NVec3 {
    a.cross(b)
}

/// `v / |v|`, or `None` when |v| is exactly zero
#[inline]
pub fn unit(v: &NVec3) -> Option<NVec3> {
    let mag = magnitude(v);
    if mag == 0.0 {
        return None;
    }
    Some(v / mag)
}
