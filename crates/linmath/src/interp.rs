//! Scalar interpolation and time-step aware smoothing.
//!
//! Smoothing a value towards a target by calling `x = mix(x, target, k)` once per frame converges
//! faster at higher frame rates. The `*_step` functions in this crate (here, and on [`Vector`] and
//! [`Quat`]) fix that by rescaling `k` for the time that actually passed: `k` is the fraction of
//! the remaining distance covered per `unit` of time, and [`step_factor`] computes the equivalent
//! fraction for a step of length `step`.
//!
//! [`Vector`]: crate::Vector
//! [`Quat`]: crate::Quat

/// Linearly interpolates between `a` (at `k = 0`) and `b` (at `k = 1`).
///
/// `k` is not clamped, values outside `0..=1` extrapolate.
///
/// # Examples
///
/// ```
/// # use linmath::interp::mix;
/// assert_eq!(mix(2.0, 4.0, 0.5), 3.0);
/// assert_eq!(mix(2.0, 4.0, 2.0), 6.0);
/// ```
#[inline]
pub fn mix(a: f32, b: f32, k: f32) -> f32 {
    a * (1.0 - k) + b * k
}

/// Like [`mix`], but clamps `k` to `0..=1` first.
///
/// # Examples
///
/// ```
/// # use linmath::interp::clamped_mix;
/// assert_eq!(clamped_mix(2.0, 4.0, 2.0), 4.0);
/// assert_eq!(clamped_mix(2.0, 4.0, -1.0), 2.0);
/// ```
#[inline]
pub fn clamped_mix(a: f32, b: f32, k: f32) -> f32 {
    mix(a, b, k.clamp(0.0, 1.0))
}

/// Rescales the per-`unit` interpolation factor `k` to a time step of length `step`.
///
/// Computes `1 - (1 - k)^(step / unit)`. Interpolating twice with half the `step` covers the same
/// distance as interpolating once with the full `step`.
///
/// `unit` is the time step `k` was tuned for (typically `1.0`, or the length of a frame at the
/// "reference" frame rate) and must be non-zero.
///
/// # Examples
///
/// ```
/// # use linmath::interp::step_factor;
/// assert_eq!(step_factor(0.5, 1.0, 1.0), 0.5);
/// assert_eq!(step_factor(0.5, 2.0, 1.0), 0.75);
/// assert_eq!(step_factor(0.5, 0.0, 1.0), 0.0);
/// ```
#[inline]
pub fn step_factor(k: f32, step: f32, unit: f32) -> f32 {
    1.0 - (1.0 - k).powf(step / unit)
}

/// Interpolates from `a` towards `b` by `k` per `unit` of time, for a time step of length `step`.
///
/// See the [module documentation](self) for details.
///
/// # Examples
///
/// ```
/// # use linmath::{*, interp::mix_step};
/// // Two half steps...
/// let halves = mix_step(mix_step(0.0, 1.0, 0.5, 0.5, 1.0), 1.0, 0.5, 0.5, 1.0);
/// // ...end up where one full step does.
/// assert_approx_eq!(halves, mix_step(0.0, 1.0, 0.5, 1.0, 1.0)).abs(1e-6);
/// ```
#[inline]
pub fn mix_step(a: f32, b: f32, k: f32, step: f32, unit: f32) -> f32 {
    mix(a, b, step_factor(k, step, unit))
}
