//! Projection matrices.
//!
//! All projections follow the OpenGL convention: view space is right-handed, with the camera
//! looking along [`Vec3::FORWARD`] (`-Z`), and clip space X and Y range from -1 to 1. Points are
//! projected by multiplying them (as [`Vec4`]s with `w = 1`) with the matrix and dividing the
//! result by its `w`.
//!
//! The builders never fail. Invalid parameters (a field of view outside of `(0, π)`, an empty
//! depth range, zero sizes, NaN) are logged at the `warn` level and result in a matrix containing
//! infinities or NaNs.
//!
//! [`Vec3::FORWARD`]: crate::Vec3::FORWARD
//! [`Vec4`]: crate::Vec4

use std::f32::consts::PI;

use crate::{vec3, Mat4, Vec2};

/// The depth range of clip space, selected via [`perspective_with_depth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipDepth {
    /// The near plane maps to -1, the far plane to 1 (OpenGL).
    #[default]
    NegativeOneToOne,
    /// The near plane maps to 0, the far plane to 1 (Vulkan, Direct3D, Metal, WebGPU).
    ZeroToOne,
}

/// Creates a right-handed perspective projection matrix with a depth range of -1 to 1.
///
/// - `fov_y` is the vertical field of view in radians.
/// - `width` and `height` are the dimensions of the viewport; only their ratio matters.
/// - `z_near` and `z_far` are the (positive) distances of the near and far clipping planes.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// use std::f32::consts::FRAC_PI_2;
///
/// let proj = perspective(FRAC_PI_2, 1.0, 1.0, 1.0, 100.0);
///
/// let near = proj * vec4(0.0, 0.0, -1.0, 1.0);
/// assert_approx_eq!(near.z / near.w, -1.0).abs(1e-6);
/// let far = proj * vec4(0.0, 0.0, -100.0, 1.0);
/// assert_approx_eq!(far.z / far.w, 1.0).abs(1e-6);
/// ```
pub fn perspective(fov_y: f32, width: f32, height: f32, z_near: f32, z_far: f32) -> Mat4 {
    perspective_with_depth(
        fov_y,
        width,
        height,
        z_near,
        z_far,
        ClipDepth::NegativeOneToOne,
    )
}

/// Creates a right-handed perspective projection matrix with the given clip space depth range.
///
/// See [`perspective`] for the meaning of the other parameters.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// let proj = perspective_with_depth(1.0, 16.0, 9.0, 0.1, 10.0, ClipDepth::ZeroToOne);
///
/// let near = proj * vec4(0.0, 0.0, -0.1, 1.0);
/// assert_approx_eq!(near.z / near.w, 0.0).abs(1e-6);
/// let far = proj * vec4(0.0, 0.0, -10.0, 1.0);
/// assert_approx_eq!(far.z / far.w, 1.0).abs(1e-6);
/// ```
pub fn perspective_with_depth(
    fov_y: f32,
    width: f32,
    height: f32,
    z_near: f32,
    z_far: f32,
    depth: ClipDepth,
) -> Mat4 {
    if fov_y.is_nan() || fov_y <= 0.0 || fov_y >= PI {
        log::warn!("perspective: field of view {fov_y} is outside of (0, π)");
    }
    if width.is_nan() || height.is_nan() || width <= 0.0 || height <= 0.0 {
        log::warn!("perspective: invalid viewport size {width}x{height}");
    }
    if z_near.is_nan() || z_near <= 0.0 {
        log::warn!("perspective: near plane distance {z_near} is not positive");
    }
    check_depth_range("perspective", z_near, z_far);

    let f = 1.0 / (fov_y * 0.5).tan();
    let (z_scale, z_offset) = match depth {
        ClipDepth::NegativeOneToOne => (
            -(z_far + z_near) / (z_far - z_near),
            -2.0 * z_far * z_near / (z_far - z_near),
        ),
        ClipDepth::ZeroToOne => (
            z_far / (z_near - z_far),
            -z_far * z_near / (z_far - z_near),
        ),
    };

    let mut m = Mat4::ZERO;
    m[0][0] = f * height / width;
    m[1][1] = f;
    m[2][2] = z_scale;
    m[2][3] = -1.0;
    m[3][2] = z_offset;
    m
}

/// Creates an orthographic projection matrix for a view volume of `size` (centered on the view
/// axis) between the `z_near` and `z_far` planes.
///
/// X and Y are divided by `size`, so `size` is the *half* extent of the volume that maps to the
/// -1 to 1 range. Depth is shifted by `-z_near` and scaled by `2 / (z_far - z_near)`, which maps
/// `z = z_near` to 0 and `z = z_far` to 2.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// let proj = orthographic(vec2(4.0, 2.0), 1.0, 5.0);
/// assert_eq!(proj * vec3(4.0, -2.0, 1.0), vec3(1.0, -1.0, 0.0));
/// assert_eq!(proj * vec3(0.0, 0.0, 5.0), vec3(0.0, 0.0, 2.0));
/// ```
pub fn orthographic(size: Vec2, z_near: f32, z_far: f32) -> Mat4 {
    check_size("orthographic", size);
    check_depth_range("orthographic", z_near, z_far);

    Mat4::scaling(vec3(1.0 / size.x, 1.0 / size.y, 2.0 / (z_far - z_near)))
        .translate(vec3(0.0, 0.0, -z_near))
}

/// Creates a matrix that maps screen coordinates to clip space.
///
/// The screen rectangle spans from `(0, 0)` in the top left corner to `size` in the bottom right
/// corner, with Y pointing down. It is mapped to X from -1 to 1 and Y from 1 to -1. Z is not
/// changed.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// let m = ui_space(vec2(800.0, 600.0));
/// assert_eq!(m * vec3(0.0, 0.0, 0.0), vec3(-1.0, 1.0, 0.0));
/// assert_eq!(m * vec3(800.0, 600.0, 0.0), vec3(1.0, -1.0, 0.0));
/// assert_eq!(m * vec3(400.0, 300.0, 0.5), vec3(0.0, 0.0, 0.5));
/// ```
pub fn ui_space(size: Vec2) -> Mat4 {
    check_size("ui_space", size);

    Mat4::translation(vec3(-1.0, 1.0, 0.0)) * Mat4::scaling(vec3(2.0 / size.x, -2.0 / size.y, 1.0))
}

fn check_size(builder: &str, size: Vec2) {
    if size.x == 0.0 || size.y == 0.0 || !size.is_finite() {
        log::warn!("{builder}: invalid size {size}");
    }
}

fn check_depth_range(builder: &str, z_near: f32, z_far: f32) {
    if z_near.is_nan() || z_far.is_nan() || z_near >= z_far {
        log::warn!("{builder}: z_near ({z_near}) must be less than z_far ({z_far})");
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use crate::{assert_approx_eq, vec2, vec4, Vec3, Vec4};

    use super::*;

    fn project(m: Mat4, p: Vec3) -> Vec3 {
        let clip = m * p.extend(1.0);
        clip.truncate() / clip.w
    }

    #[test]
    fn perspective_elements() {
        let (fov, near, far) = (1.2f32, 0.5, 50.0);
        let m = perspective(fov, 1920.0, 1080.0, near, far);
        let f = 1.0 / (fov / 2.0).tan();

        assert_approx_eq!(m[0][0], f * 1080.0 / 1920.0);
        assert_approx_eq!(m[1][1], f);
        assert_approx_eq!(m[2][2], -(far + near) / (far - near));
        assert_eq!(m[2][3], -1.0);
        assert_approx_eq!(m[3][2], -2.0 * far * near / (far - near));
        assert_eq!(m[3][3], 0.0);
        assert_eq!(m[0][1], 0.0);
        assert_eq!(m[3][0], 0.0);
    }

    #[test]
    fn perspective_frustum_corners() {
        let (fov, width, height, near, far) = (FRAC_PI_2, 200.0, 100.0, 1.0, 10.0);
        let m = perspective(fov, width, height, near, far);

        // at distance `d`, a 90° vertical fov covers `-d..d` vertically
        let d = 4.0;
        let corner = vec3(d * width / height, d, -d);
        let p = project(m, corner);
        assert_approx_eq!(p.x, 1.0).abs(1e-6);
        assert_approx_eq!(p.y, 1.0).abs(1e-6);

        assert_approx_eq!(project(m, Vec3::FORWARD * near).z, -1.0).abs(1e-6);
        assert_approx_eq!(project(m, Vec3::FORWARD * far).z, 1.0).abs(1e-6);

        // depth increases monotonically
        let mid = project(m, Vec3::FORWARD * 5.0).z;
        assert!(mid > -1.0 && mid < 1.0);
    }

    #[test]
    fn perspective_zero_to_one() {
        let m = perspective_with_depth(1.0, 4.0, 3.0, 0.1, 100.0, ClipDepth::ZeroToOne);
        assert_approx_eq!(project(m, Vec3::FORWARD * 0.1).z, 0.0).abs(1e-6);
        assert_approx_eq!(project(m, Vec3::FORWARD * 100.0).z, 1.0).abs(1e-6);

        // depth mode only affects the Z row
        let gl = perspective(1.0, 4.0, 3.0, 0.1, 100.0);
        assert_eq!(m[0], gl[0]);
        assert_eq!(m[1], gl[1]);
        assert_eq!(m[2][3], gl[2][3]);
        assert_eq!(ClipDepth::default(), ClipDepth::NegativeOneToOne);
    }

    #[test]
    fn orthographic_volume() {
        let m = orthographic(vec2(10.0, 5.0), 2.0, 6.0);
        assert_eq!(m * vec3(10.0, 5.0, 2.0), vec3(1.0, 1.0, 0.0));
        assert_eq!(m * vec3(-10.0, -5.0, 6.0), vec3(-1.0, -1.0, 2.0));
        assert_eq!(m * vec3(0.0, 0.0, 4.0), vec3(0.0, 0.0, 1.0));

        // no perspective: `w` stays 1
        assert_eq!((m * vec4(3.0, 2.0, 1.0, 1.0)).w, 1.0);
    }

    #[test]
    fn ui_space_corners() {
        let m = ui_space(vec2(640.0, 480.0));
        assert_eq!(m * Vec3::ZERO, vec3(-1.0, 1.0, 0.0));
        assert_eq!(m * vec3(640.0, 0.0, 0.0), vec3(1.0, 1.0, 0.0));
        assert_eq!(m * vec3(0.0, 480.0, 0.0), vec3(-1.0, -1.0, 0.0));
        assert_eq!(m * vec3(640.0, 480.0, 0.0), vec3(1.0, -1.0, 0.0));
        assert_eq!(m * Vec4::Z, Vec4::Z);
    }

    #[test]
    fn degenerate_parameters_are_not_fatal() {
        let _ = env_logger::builder().is_test(true).try_init();

        let m = perspective(0.0, 0.0, 1.0, 5.0, 5.0);
        assert!(!m[0][0].is_finite());
        assert!(!m[2][2].is_finite());

        let m = perspective(PI, 1.0, 1.0, -1.0, 1.0);
        assert_eq!(m[2][3], -1.0);

        let m = orthographic(vec2(0.0, 1.0), 1.0, 0.0);
        assert!(!m[0][0].is_finite());

        let m = ui_space(vec2(f32::NAN, 1.0));
        assert!(m[0][0].is_nan());
    }
}
