use std::{
    array,
    f32::consts::FRAC_PI_2,
    fmt,
};

use crate::{interp, DimensionMismatch};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2 = Vector<2>;
/// A 3-dimensional vector, or an RGB color.
pub type Vec3 = Vector<3>;
/// A 4-dimensional vector, or an RGBA color.
pub type Vec4 = Vector<4>;

/// An `N`-element column vector of [`f32`]s.
///
/// Use the [`Vec2`], [`Vec3`] and [`Vec4`] aliases to name concrete vector types.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions create vectors from their
///   elements.
/// - [`Vector::splat`] copies a value into every element, [`Vector::from_fn`] computes each element
///   from its index.
/// - Vectors can be created from arrays via [`From`], and from slices via [`TryFrom`].
/// - [`Vector::ZERO`] and [`Vector::ONE`] have all elements set to 0 and 1. Unit vectors along
///   the axes are available as `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W`.
/// - [`Vec3`] additionally has direction constants ([`Vec3::FORWARD`], [`Vec3::UP`], ...).
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z` and `w`. The [`Vec3`] and [`Vec4`] color
///   aliases `r`, `g`, `b` and `a` refer to the same storage.
/// - [`Index`] and [`IndexMut`] work just like they do on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`] and [`Vector::into_array`] give access to the
///   underlying `[f32; N]`.
///
/// # Equality
///
/// `==` compares the elements *exactly*. Use [`ApproxEq`] for tolerant comparisons.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`ApproxEq`]: crate::approx::ApproxEq
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<const N: usize>(pub(crate) [f32; N]);

#[cfg(feature = "bytemuck")]
unsafe impl<const N: usize> bytemuck::Zeroable for Vector<N> {}
#[cfg(feature = "bytemuck")]
unsafe impl<const N: usize> bytemuck::Pod for Vector<N> {}

impl<const N: usize> Vector<N> {
    /// A vector with each element set to 0.
    pub const ZERO: Self = Self([0.0; N]);
    /// A vector with each element set to 1.
    pub const ONE: Self = Self([1.0; N]);
}

impl Vector<2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0]);
}

impl Vector<3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0, 0.0]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([0.0, 0.0, 1.0]);

    /// The direction a camera or object with no rotation looks in (`-Z`).
    pub const FORWARD: Self = Self([0.0, 0.0, -1.0]);
    /// The opposite of [`Vec3::FORWARD`] (`+Z`).
    pub const BACK: Self = Self([0.0, 0.0, 1.0]);
    /// `+X`.
    pub const RIGHT: Self = Self([1.0, 0.0, 0.0]);
    /// `-X`.
    pub const LEFT: Self = Self([-1.0, 0.0, 0.0]);
    /// `+Y`.
    pub const UP: Self = Self([0.0, 1.0, 0.0]);
    /// `-Y`.
    pub const DOWN: Self = Self([0.0, -1.0, 0.0]);
}

impl Vector<4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0, 0.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0, 0.0, 0.0]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([0.0, 0.0, 1.0, 0.0]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([0.0, 0.0, 0.0, 1.0]);
}

impl<const N: usize> Vector<N> {
    /// Creates a vector with each element set to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(Vec3::splat(2.0), vec3(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub const fn splat(elem: f32) -> Self {
        Self([elem; N])
    }

    /// Creates a vector by invoking a closure with the index of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let v = Vec3::from_fn(|i| i as f32 * 10.0);
    /// assert_eq!(v, vec3(0.0, 10.0, 20.0));
    /// ```
    #[inline]
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> f32,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(1.0, -4.0).map(f32::abs), vec2(1.0, 4.0));
    /// ```
    #[inline]
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(f32) -> f32,
    {
        Self(self.0.map(f))
    }

    /// Returns a reference to the underlying elements as an array.
    #[inline]
    pub const fn as_array(&self) -> &[f32; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; N] {
        &mut self.0
    }

    /// Returns the elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.0
    }

    /// Converts this vector into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec3(1.0, 2.0, 3.0).into_array(), [1.0, 2.0, 3.0]);
    /// ```
    #[inline]
    pub const fn into_array(self) -> [f32; N] {
        self.0
    }

    /// Returns `true` if no element is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|e| e.is_finite())
    }

    /// Computes the dot product of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(4.0, -2.0, -1.0)), 3.0);
    /// assert_eq!(Vec2::X.dot(Vec2::Y), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> f32 {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(0.0, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this vector.
    ///
    /// Cheaper than [`Vector::length`], and sufficient for comparing lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(4.0, 0.0).length2(), 16.0);
    /// ```
    #[inline]
    pub fn length2(&self) -> f32 {
        self.dot(*self)
    }

    /// Returns the length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    #[inline]
    pub fn length(&self) -> f32 {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// `self` must have a non-zero length. Normalizing the zero vector yields NaN elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), Vec3::Z);
    /// assert!(!Vec3::ZERO.normalize().is_finite());
    /// ```
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Normalizes `self` in place. See [`Vector::normalize`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mut v = vec2(0.0, -2.0);
    /// v.make_normalized().x += 1.0;
    /// assert_eq!(v, vec2(1.0, -1.0));
    /// ```
    pub fn make_normalized(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both vectors must have non-zero length for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_approx_eq!(Vec3::Y.abs_angle_to(Vec3::X), FRAC_PI_2);
    /// assert_approx_eq!(Vec3::X.abs_angle_to(Vec3::Y), FRAC_PI_2);
    /// ```
    pub fn abs_angle_to(self, other: Self) -> f32 {
        let cos = self.dot(other) / (self.length() * other.length());
        cos.acos()
    }

    /// Element-wise minimum of `self` and `other`.
    ///
    /// Like [`f32::min`], NaN elements are ignored if the other element is a number.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
    /// ```
    pub fn max(self, other: Self) -> Self {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise clamp of `self` to the range `min..=max`.
    ///
    /// Unlike [`f32::clamp`], this does not panic when `min > max`; `min` wins in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let v = vec3(-5.0, 0.5, 5.0).clamp(Vec3::ZERO, Vec3::ONE);
    /// assert_eq!(v, vec3(0.0, 0.5, 1.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }

    /// Linearly interpolates between `self` (at `k = 0`) and `other` (at `k = 1`).
    ///
    /// Computes `self + (other - self) * k`. `k` is not clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(Vec2::ZERO.mix(vec2(2.0, 4.0), 0.5), vec2(1.0, 2.0));
    /// ```
    #[inline]
    pub fn mix(self, other: Self, k: f32) -> Self {
        self + (other - self) * k
    }

    /// Time-step aware version of [`Vector::mix`].
    ///
    /// `k` is the fraction of the distance to `other` to cover per `unit` of time, and `step` is the
    /// time that actually passed. Calling this once per frame converges at the same rate no matter
    /// the frame rate. See [`interp::step_factor`].
    #[inline]
    pub fn mix_step(self, other: Self, k: f32, step: f32, unit: f32) -> Self {
        self.mix(other, interp::step_factor(k, step, unit))
    }

    /// In-place version of [`Vector::mix`].
    pub fn make_mix(&mut self, other: Self, k: f32) -> &mut Self {
        *self = self.mix(other, k);
        self
    }

    /// In-place version of [`Vector::mix_step`].
    pub fn make_mix_step(&mut self, other: Self, k: f32, step: f32, unit: f32) -> &mut Self {
        *self = self.mix_step(other, k, step, unit);
        self
    }
}

impl Vector<2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(-1.0, 2.0).extend(5.0), vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: f32) -> Vector<3> {
        let [x, y] = self.0;
        vec3(x, y, value)
    }

    /// Rounds each element to the nearest integer (half-way cases away from zero).
    pub fn round(self) -> Self {
        self.map(f32::round)
    }

    /// Rounds each element up.
    pub fn ceil(self) -> Self {
        self.map(f32::ceil)
    }

    /// Rounds each element down.
    pub fn floor(self) -> Self {
        self.map(f32::floor)
    }
}

impl Vector<3> {
    /// Removes the last element, yielding a 2-dimensional vector.
    pub fn truncate(self) -> Vector<2> {
        let [x, y, _] = self.0;
        vec2(x, y)
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec3(-1.0, 2.0, 3.5).extend(1.0), vec4(-1.0, 2.0, 3.5, 1.0));
    /// ```
    pub fn extend(self, value: f32) -> Vector<4> {
        let [x, y, z] = self.0;
        vec4(x, y, z, value)
    }

    /// Computes the (right-handed) cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the arguments inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    /// assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Decomposes a direction into the pitch and yaw angles (in radians) that turn
    /// [`Vec3::FORWARD`] into it.
    ///
    /// The result stores the pitch (rotation around X, positive is up) in `x` and the yaw (rotation
    /// around Y) in `y`. `z` is always 0. [`Quat::look_along`] turns the angles into a rotation.
    ///
    /// `dir` does not need to be normalized. The zero vector results in zero angles, and straight
    /// up or down directions result in a pitch of ±90° and zero yaw.
    ///
    /// [`Quat::look_along`]: crate::Quat::look_along
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_eq!(Vec3::look_along(Vec3::FORWARD), Vec3::ZERO);
    /// assert_eq!(Vec3::look_along(Vec3::UP), vec3(FRAC_PI_2, 0.0, 0.0));
    /// assert_approx_eq!(Vec3::look_along(Vec3::RIGHT), vec3(0.0, -FRAC_PI_2, 0.0));
    /// ```
    pub fn look_along(dir: Self) -> Self {
        if dir == Self::ZERO {
            return Self::ZERO;
        }

        let horizontal = (dir.x * dir.x + dir.z * dir.z).sqrt();
        if horizontal == 0.0 {
            return vec3(FRAC_PI_2.copysign(dir.y), 0.0, 0.0);
        }

        let pitch = (dir.y / horizontal).atan();
        let yaw = -dir.x.atan2(-dir.z);
        vec3(pitch, yaw, 0.0)
    }

    /// Computes the pitch and yaw needed to look from `origin` towards `at`.
    ///
    /// Equivalent to `Vec3::look_along(at - origin)`; returns zero angles if both points are the
    /// same.
    pub fn look_at(origin: Self, at: Self) -> Self {
        Self::look_along(at - origin)
    }

    /// Creates a color from 8-bit RGB channels, mapping `0..=255` to `0.0..=1.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let c = Vec3::from_rgb8(255, 0, 51);
    /// assert_eq!((c.r, c.g, c.b), (1.0, 0.0, 0.2));
    /// ```
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        vec3(r.into(), g.into(), b.into()) / 255.0
    }
}

impl Vector<4> {
    /// Removes the last element, yielding a 3-dimensional vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec4(-1.0, 2.0, 3.5, 1.0).truncate(), vec3(-1.0, 2.0, 3.5));
    /// ```
    pub fn truncate(self) -> Vector<3> {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }

    /// Returns the sum of all elements.
    pub fn sum(self) -> f32 {
        self.0.into_iter().sum()
    }

    /// Creates a color from 8-bit RGBA channels, mapping `0..=255` to `0.0..=1.0`.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        vec4(r.into(), g.into(), b.into(), a.into()) / 255.0
    }
}

impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    #[inline]
    fn from(value: [f32; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    #[inline]
    fn from(value: Vector<N>) -> Self {
        value.0
    }
}

impl<const N: usize> TryFrom<&[f32]> for Vector<N> {
    type Error = DimensionMismatch;

    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        DimensionMismatch::check(N, slice.len())?;
        Ok(Self::from_fn(|i| slice[i]))
    }
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        write!(f, ")")
    }
}

impl<const N: usize> AsRef<[f32]> for Vector<N> {
    #[inline]
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

impl<const N: usize> AsRef<[f32; N]> for Vector<N> {
    #[inline]
    fn as_ref(&self) -> &[f32; N] {
        &self.0
    }
}

impl<const N: usize> AsMut<[f32]> for Vector<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [f32] {
        &mut self.0
    }
}

impl<const N: usize> AsMut<[f32; N]> for Vector<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [f32; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its elements.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its elements.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its elements.
#[inline]
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
    Vector([x, y, z, w])
}
