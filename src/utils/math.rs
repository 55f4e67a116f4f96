use nalgebra::Vector3;
use std::f64::consts::PI;

/// Vectors shorter than this are treated as zero when normalising.
pub const NORMALIZE_EPSILON: f64 = 1e-12;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Component-wise linear interpolation between two vectors
#[inline]
pub fn lerp_vector(start: &Vector3<f64>, end: &Vector3<f64>, factor: f64) -> Vector3<f64> {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Unit vector in the direction of `v`, or the zero vector when `v` has no length.
pub fn normalize_or_zero(v: &Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    if norm > NORMALIZE_EPSILON && norm.is_finite() {
        v / norm
    } else {
        Vector3::zeros()
    }
}

/// Fraction of the remaining distance to close this frame.
///
/// With `time_corrected` unset the factor is applied once per frame regardless of
/// its length. Otherwise `1 - (1 - k)^(dt * reference_rate)`, which equals `k` for a
/// frame of exactly `1 / reference_rate` seconds.
pub fn smoothing_factor(k: f64, dt: f64, time_corrected: bool, reference_rate: f64) -> f64 {
    let k = k.clamp(0.0, 1.0);
    if !time_corrected {
        return k;
    }
    if dt <= 0.0 {
        return 0.0;
    }
    1.0 - (1.0 - k).powf(dt * reference_rate)
}

/// Toroidal wrap: a coordinate above `max` reappears at `min` and vice versa.
#[inline]
pub fn wrap_axis(value: f64, min: f64, max: f64) -> f64 {
    if value > max {
        min
    } else if value < min {
        max
    } else {
        value
    }
}
