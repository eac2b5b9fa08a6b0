// Tolerances for viewport math

pub const FALLBACK_SCALE: f64 = 1.0;      // scale used when no axis has extent

/// `num / den`, or `fallback` when `den` is exactly zero.
#[inline]
pub fn safe_div(num: f64, den: f64, fallback: f64) -> f64 {
    if den == 0.0 { fallback } else { num / den }
}
