mod ops;
mod view;

use std::fmt;

use crate::{interp, vec3, vec4, Mat3, Mat4, Vec3, Vec4};

/// Above this absolute dot product, [`Quat::slerp`] falls back to [`Quat::lerp`].
const SLERP_LERP_THRESHOLD: f32 = 0.9995;

/// A quaternion, used to represent rotations in 3D space.
///
/// The real part is `w`, the imaginary parts are `x`, `y` and `z`. All components can be accessed
/// as fields. Only *unit* quaternions represent rotations: the type does not enforce unit length,
/// so [`Quat::normalize`] should be called after operations that don't preserve it (`+`, `-`,
/// multiplication with a scalar).
///
/// The identity rotation is `w = 1, x = y = z = 0` ([`Quat::IDENTITY`], also the [`Default`]).
///
/// # Composition
///
/// `a * b` is the Hamilton product. As a rotation, it applies `b` first, then `a`, matching the
/// order of matrix products: `(a * b).to_mat3() ≈ a.to_mat3() * b.to_mat3()`.
///
/// Multiplying a quaternion with a [`Vec3`] rotates the vector.
///
/// ```
/// # use linmath::*;
/// use std::f32::consts::FRAC_PI_2;
///
/// let q = Quat::angle_axis(FRAC_PI_2, Vec3::Z);
/// assert_approx_eq!(q * Vec3::X, Vec3::Y).abs(1e-6);
/// assert_approx_eq!(q * q * Vec3::X, -Vec3::X).abs(1e-6);
/// ```
///
/// # Memory Layout
///
/// In memory, the components are stored in `x, y, z, w` order, like in a [`Vec4`] (see
/// [`Quat::from_vec`]). This is also the layout GPU shaders typically expect.
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Quat {
    vec: Vec4,
}

#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Zeroable for Quat {}
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Pod for Quat {}

impl Quat {
    /// The identity rotation.
    ///
    /// Multiplying a vector or quaternion with it returns the vector or quaternion unchanged.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from its real part `w` and imaginary parts `x`, `y` and `z`.
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Creates a quaternion from a [`Vec4`] holding the imaginary parts in `x`, `y`, `z` and the real
    /// part in `w`.
    #[inline]
    pub const fn from_vec(vec: Vec4) -> Self {
        Self { vec }
    }

    /// Returns the components of this quaternion as a [`Vec4`] (`x, y, z, w`).
    #[inline]
    pub const fn to_vec(self) -> Vec4 {
        self.vec
    }

    /// Creates a rotation of `angle` radians around `axis`.
    ///
    /// `axis` has to be normalized for the result to be a unit quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let q = Quat::angle_axis(FRAC_PI_2, Vec3::X);
    /// assert_approx_eq!(q * Vec3::Y, Vec3::Z).abs(1e-6);
    /// assert_eq!(Quat::angle_axis(0.0, Vec3::Y), Quat::IDENTITY);
    /// ```
    pub fn angle_axis(angle: f32, axis: Vec3) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        let v = axis * sin;
        Self::new(cos, v.x, v.y, v.z)
    }

    /// Creates a rotation from Euler angles in radians: the roll in `angles.z`, the pitch in
    /// `angles.x` and the yaw in `angles.y`.
    ///
    /// Uses the aerospace (Z, then X, then Y) convention.
    #[doc(alias = "euler")]
    pub fn roll_pitch_yaw(angles: Vec3) -> Self {
        let (t1, t0) = (angles.z * 0.5).sin_cos();
        let (t3, t2) = (angles.x * 0.5).sin_cos();
        let (t5, t4) = (angles.y * 0.5).sin_cos();

        Self::new(
            t0 * t2 * t4 + t1 * t3 * t5,
            t0 * t3 * t4 - t1 * t2 * t5,
            t0 * t2 * t5 + t1 * t3 * t4,
            t1 * t2 * t4 - t0 * t3 * t5,
        )
    }

    /// Creates a head (camera) rotation from Euler angles in radians: the roll in `angles.z`, the
    /// pitch in `angles.x` and the yaw in `angles.y`.
    ///
    /// Computed as the product of the three axis rotations, roll first in the product:
    /// `angle_axis(roll, Z) * angle_axis(pitch, X) * angle_axis(yaw, Y)`. This is a different
    /// composition order than [`Quat::roll_pitch_yaw`], so the two only agree when at most one
    /// angle is non-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let q = Quat::head_rotation(vec3(0.0, 1.0, 0.0));
    /// assert_approx_eq!(q, Quat::angle_axis(1.0, Vec3::Y)).abs(1e-6);
    /// ```
    pub fn head_rotation(angles: Vec3) -> Self {
        Self::angle_axis(angles.z, Vec3::Z)
            * Self::angle_axis(angles.x, Vec3::X)
            * Self::angle_axis(angles.y, Vec3::Y)
    }

    /// Creates the rotation that turns [`Vec3::FORWARD`] into the direction `dir`, without rolling.
    ///
    /// The rotation first pitches around the X axis, then yaws around the Y axis, using the angles
    /// computed by [`Vec3::look_along`]. `dir` does not need to be normalized. The zero vector
    /// results in [`Quat::IDENTITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let dir = vec3(1.0, -2.0, 3.0).normalize();
    /// assert_approx_eq!(Quat::look_along(dir) * Vec3::FORWARD, dir).abs(1e-5);
    /// assert_eq!(Quat::look_along(Vec3::ZERO), Quat::IDENTITY);
    /// ```
    pub fn look_along(dir: Vec3) -> Self {
        let angles = Vec3::look_along(dir);
        Self::angle_axis(angles.y, Vec3::Y) * Self::angle_axis(angles.x, Vec3::X)
    }

    /// Creates the rotation that makes an object at `origin` look towards `at`.
    ///
    /// Equivalent to `Quat::look_along(at - origin)`.
    pub fn look_at(origin: Vec3, at: Vec3) -> Self {
        Self::look_along(at - origin)
    }

    /// Returns the conjugate of this quaternion (the imaginary parts negated).
    ///
    /// For unit quaternions, this is the inverse rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let q = Quat::new(2.0, 3.0, 5.0, 7.0);
    /// assert_eq!(q.conjugate(), Quat::new(2.0, -3.0, -5.0, -7.0));
    /// ```
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Conjugates `self` in place.
    pub fn make_conjugate(&mut self) -> &mut Self {
        *self = self.conjugate();
        self
    }

    /// Computes the 4-dimensional dot product of `self` and `other`.
    ///
    /// For unit quaternions, this is the cosine of half the angle between the rotations.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.vec.dot(other.vec)
    }

    /// Returns the squared length of this quaternion.
    #[inline]
    pub fn length2(&self) -> f32 {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not 1, multiplying a vector with this quaternion will scale the vector in
    /// addition to rotating it.
    #[doc(alias = "norm")]
    #[inline]
    pub fn length(&self) -> f32 {
        self.vec.length()
    }

    /// Returns a copy of this quaternion with a length of 1.
    ///
    /// The zero quaternion results in NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        Self::from_vec(self.vec.normalize())
    }

    /// Normalizes `self` in place.
    pub fn make_normalized(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    /// Interpolates linearly between the rotations `self` (at `k = 0`) and `other` (at `k = 1`),
    /// and normalizes the result.
    ///
    /// Interpolates along the shorter path: if the quaternions point in opposing directions,
    /// `other` is negated first (`q` and `-q` are the same rotation).
    ///
    /// This is cheaper than [`Quat::slerp`], but does not rotate at a constant angular velocity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let a = Quat::angle_axis(0.0, Vec3::Y);
    /// let b = Quat::angle_axis(1.0, Vec3::Y);
    /// assert_approx_eq!(a.lerp(b, 1.0), b).abs(1e-6);
    /// assert_approx_eq!(a.lerp(-b, 1.0), b).abs(1e-6);
    /// ```
    pub fn lerp(self, other: Self, k: f32) -> Self {
        let other = if self.dot(other) < 0.0 { -other } else { other };
        Self::from_vec(self.vec.mix(other.vec, k)).normalize()
    }

    /// Spherically interpolates between the rotations `self` (at `k = 0`) and `other` (at `k = 1`).
    ///
    /// Rotates along the shorter arc at a constant angular velocity. Both quaternions should be
    /// normalized. Very close rotations are interpolated with [`Quat::lerp`] instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let a = Quat::IDENTITY;
    /// let b = Quat::angle_axis(2.0, Vec3::Z);
    /// assert_approx_eq!(a.slerp(b, 0.25), Quat::angle_axis(0.5, Vec3::Z)).abs(1e-6);
    /// ```
    pub fn slerp(self, other: Self, k: f32) -> Self {
        let dot = self.dot(other);
        if dot.abs() > SLERP_LERP_THRESHOLD {
            return self.lerp(other, k);
        }

        let (other, dot) = if dot < 0.0 {
            (-other, -dot)
        } else {
            (other, dot)
        };

        let theta = dot.min(1.0).acos() * k;
        let v2 = (other - self * dot).normalize();
        self * theta.cos() + v2 * theta.sin()
    }

    /// Time-step aware version of [`Quat::lerp`].
    ///
    /// `k` is the fraction of the way to `other` to cover per `unit` of time, `step` is the time
    /// that passed. See [`interp::step_factor`].
    pub fn lerp_step(self, other: Self, k: f32, step: f32, unit: f32) -> Self {
        self.lerp(other, interp::step_factor(k, step, unit))
    }

    /// Time-step aware version of [`Quat::slerp`].
    ///
    /// Calling this once per frame with the frame time as `step` turns `self` towards `other` at
    /// the same rate regardless of frame rate.
    pub fn slerp_step(self, other: Self, k: f32, step: f32, unit: f32) -> Self {
        self.slerp(other, interp::step_factor(k, step, unit))
    }

    /// In-place version of [`Quat::lerp`].
    pub fn make_lerp(&mut self, other: Self, k: f32) -> &mut Self {
        *self = self.lerp(other, k);
        self
    }

    /// In-place version of [`Quat::lerp_step`].
    pub fn make_lerp_step(&mut self, other: Self, k: f32, step: f32, unit: f32) -> &mut Self {
        *self = self.lerp_step(other, k, step, unit);
        self
    }

    /// In-place version of [`Quat::slerp`].
    pub fn make_slerp(&mut self, other: Self, k: f32) -> &mut Self {
        *self = self.slerp(other, k);
        self
    }

    /// In-place version of [`Quat::slerp_step`].
    pub fn make_slerp_step(&mut self, other: Self, k: f32, step: f32, unit: f32) -> &mut Self {
        *self = self.slerp_step(other, k, step, unit);
        self
    }

    /// Converts this rotation to a 3x3 rotation matrix.
    ///
    /// `self` should be normalized.
    pub fn to_mat3(self) -> Mat3 {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);

        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Mat3::from_columns([
            vec3(1.0 - 2.0 * (yy + zz), 2.0 * (xy + wz), 2.0 * (xz - wy)),
            vec3(2.0 * (xy - wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + wx)),
            vec3(2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (xx + yy)),
        ])
    }

    /// Converts this rotation to a 4x4 rotation matrix.
    ///
    /// `self` should be normalized.
    pub fn to_mat4(self) -> Mat4 {
        Mat4::from(self.to_mat3())
    }

    /// Extracts the rotation from a 3x3 rotation matrix.
    ///
    /// Picks the formula based on the largest diagonal element, so this stays accurate for
    /// rotations by (close to) 180°, where `w` is close to 0.
    ///
    /// The result has unit length if `m` is a proper rotation matrix (orthonormal, with a
    /// determinant of 1). Which of the two equivalent quaternions `q` and `-q` is returned is
    /// unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// use std::f32::consts::PI;
    ///
    /// let q = Quat::angle_axis(PI, Vec3::Y);
    /// let r = Quat::from_mat3(q.to_mat3());
    /// assert_approx_eq!(r * Vec3::X, -Vec3::X).abs(1e-6);
    /// ```
    pub fn from_mat3(m: Mat3) -> Self {
        let [m00, m10, m20] = m[0].into_array();
        let [m01, m11, m21] = m[1].into_array();
        let [m02, m12, m22] = m[2].into_array();

        let trace = m00 + m11 + m22;
        if trace > 0.0 {
            log::trace!("from_mat3: trace {trace} > 0");
            let s = 2.0 * (trace + 1.0).sqrt();
            Self::new(
                0.25 * s,
                (m21 - m12) / s,
                (m02 - m20) / s,
                (m10 - m01) / s,
            )
        } else if m00 > m11 && m00 > m22 {
            log::trace!("from_mat3: largest diagonal element is m00 = {m00}");
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            Self::new(
                (m21 - m12) / s,
                0.25 * s,
                (m01 + m10) / s,
                (m02 + m20) / s,
            )
        } else if m11 > m22 {
            log::trace!("from_mat3: largest diagonal element is m11 = {m11}");
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            Self::new(
                (m02 - m20) / s,
                (m01 + m10) / s,
                0.25 * s,
                (m12 + m21) / s,
            )
        } else {
            log::trace!("from_mat3: largest diagonal element is m22 = {m22}");
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            Self::new(
                (m10 - m01) / s,
                (m02 + m20) / s,
                (m12 + m21) / s,
                0.25 * s,
            )
        }
    }

    /// Packs a unit quaternion into 3 floats.
    ///
    /// Returns the imaginary part of whichever of `self` and `-self` has a non-negative `w`, so that
    /// [`Quat::decompress`] can restore the rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let q = Quat::angle_axis(4.0, vec3(0.0, 0.6, 0.8));
    /// let r = Quat::decompress(q.compress());
    /// assert_approx_eq!(r * Vec3::X, q * Vec3::X).abs(1e-6);
    /// ```
    pub fn compress(self) -> Vec3 {
        let q = if self.w < 0.0 { -self } else { self };
        vec3(q.x, q.y, q.z)
    }

    /// Restores a unit quaternion packed with [`Quat::compress`].
    ///
    /// `w` is recomputed as `sqrt(1 - |v|²)`. Values of `v` slightly longer than 1 (from rounding)
    /// result in `w = 0`.
    pub fn decompress(v: Vec3) -> Self {
        let w = (1.0 - v.length2()).max(0.0).sqrt();
        Self::new(w, v.x, v.y, v.z)
    }
}

impl Default for Quat {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Equivalent to [`Quat::from_mat3`].
impl From<Mat3> for Quat {
    fn from(m: Mat3) -> Self {
        Self::from_mat3(m)
    }
}

impl From<Quat> for Mat3 {
    fn from(q: Quat) -> Self {
        q.to_mat3()
    }
}

impl fmt::Debug for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("w", &self.w)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}
