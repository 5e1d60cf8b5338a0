//! Approximate equality.
//!
//! All types in this crate implement [`PartialEq`] as *exact* componentwise equality. Results of
//! trigonometry, normalization or interpolation rarely compare exactly equal to a hand-written
//! expectation though, so this module provides the [`ApproxEq`] trait as the separate,
//! explicitly-named near-equality predicate, and the [`assert_approx_eq!`] and
//! [`assert_approx_ne!`] macros built on top of it.
//!
//! [`assert_approx_eq!`]: crate::assert_approx_eq
//! [`assert_approx_ne!`]: crate::assert_approx_ne

mod impls;

use std::{fmt, panic::Location};

/// Tolerance used by [`ApproxEq::approx_eq`] and the assertion macros for absolute comparisons.
pub const DEFAULT_ABS_TOLERANCE: f32 = f32::EPSILON;
/// Tolerance used by [`ApproxEq::approx_eq`] and the assertion macros for relative comparisons.
pub const DEFAULT_REL_TOLERANCE: f32 = f32::EPSILON;
/// Default number of [*units in the last place*] two floats may be apart.
///
/// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
pub const DEFAULT_ULPS_TOLERANCE: u32 = 4;

/// Types that can be compared for *approximate equality*.
///
/// Compound types (vectors, matrices, quaternions, ...) are approximately equal if all of their
/// components are.
///
/// For background on why there are three different comparison methods, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Returns `true` if the absolute difference between `self` and `other` is at most
    /// `abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: f32) -> bool;

    /// Returns `true` if the absolute difference between `self` and `other` is at most the larger
    /// magnitude of the two, multiplied by `rel_tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: f32) -> bool;

    /// Returns `true` if at most `ulps_tolerance` representable floats lie between `self` and
    /// `other`.
    ///
    /// `NaN` never compares equal. `-0.0` and `+0.0` always compare equal, all other values with
    /// different signs never do.
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;

    /// The default near-equality check: an absolute *or* relative comparison using
    /// [`DEFAULT_ABS_TOLERANCE`] and [`DEFAULT_REL_TOLERANCE`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::{approx::ApproxEq, *};
    /// let tenth = (0..10).fold(0.0, |acc, _| acc + 0.01);
    /// assert!(tenth.approx_eq(&0.1));
    /// assert!(!vec2(1.0, 0.0).approx_eq(&vec2(1.0, 0.001)));
    /// ```
    fn approx_eq(&self, other: &Rhs) -> bool {
        self.abs_diff_eq(other, DEFAULT_ABS_TOLERANCE)
            || self.rel_diff_eq(other, DEFAULT_REL_TOLERANCE)
    }
}

/// Guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped, which happens at the end of the statement
/// containing the macro invocation. Before that, the comparison can be configured:
///
/// - [`Asserter::abs`] enables an absolute comparison ([`ApproxEq::abs_diff_eq`]).
/// - [`Asserter::rel`] enables a relative comparison ([`ApproxEq::rel_diff_eq`]).
/// - [`Asserter::ulps`] enables a ULPs comparison ([`ApproxEq::ulps_diff_eq`]).
///
/// When several are enabled, the values are equal if *any* enabled comparison says so. When none
/// is enabled, [`ApproxEq::approx_eq`] decides.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<f32>,
    rel: Option<f32>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Compare the absolute difference of the values against `abs`.
    ///
    /// Works well for values near zero, including values of opposite sign.
    pub fn abs(&mut self, abs: f32) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compare the absolute difference of the values against the larger magnitude times `rel`.
    ///
    /// Works well for values far away from zero. Any non-zero value only compares equal to zero
    /// with a relative tolerance of at least 1.0.
    pub fn rel(&mut self, rel: f32) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Compare the values by counting the floats that fit between them.
    ///
    /// Respects the uneven density of floats, but is useless for values close to zero with
    /// opposing signs.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn values_equal(&self) -> bool {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            return self.left.approx_eq(self.right);
        }

        self.abs
            .is_some_and(|abs| self.left.abs_diff_eq(self.right, abs))
            || self
                .rel
                .is_some_and(|rel| self.left.rel_diff_eq(self.right, rel))
            || self
                .ulps
                .is_some_and(|ulps| self.left.ulps_diff_eq(self.right, ulps))
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on `drop`, which is why the location is captured in `new`
    // and printed manually.
    fn drop(&mut self) {
        let equal = self.values_equal();
        let failed = match self.kind {
            AssertionKind::Eq => !equal,
            AssertionKind::Ne => equal,
        };
        if failed {
            assert_failed(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

#[cold]
fn assert_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    match msg {
        Some(msg) => panic!(
            "assertion `left {op} right` failed at {location}: {msg}\n  left: {left:?}\n right: {right:?}"
        ),
        None => panic!(
            "assertion `left {op} right` failed at {location}\n  left: {left:?}\n right: {right:?}"
        ),
    }
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] that can be used to pick the comparison
/// method and tolerance.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.02);
/// assert_approx_eq!(1.0, 1.0 + f32::EPSILON).ulps(1);
///
/// assert_approx_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z, "cross product of {:?}", Vec3::X);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// The counterpart of [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(100.0, 99.0).rel(0.005);
/// assert_approx_ne!(Vec3::X, Vec3::Y);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::ApproxEq;

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "normalized length")]
    fn message() {
        assert_approx_eq!(1.0, 2.0, "normalized length");
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
    }

    #[test]
    fn any_enabled_comparison() {
        // fails `abs`, passes `rel`
        assert_approx_eq!(1000.0, 1001.0).abs(0.5).rel(0.01);
        assert_approx_ne!(1000.0, 1001.0).abs(0.5).rel(0.0001);
    }

    #[test]
    fn epsilon() {
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON);
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON).ulps(1);
        assert_approx_ne!(1.0, 1.0 + f32::EPSILON).ulps(0);
    }

    #[test]
    fn signs() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_ne!(1.0, -1.0).abs(1.0);
        assert_approx_eq!(1.0, -1.0).abs(2.0);
        assert_approx_eq!(-1.0, -1.0).ulps(0);
        assert_approx_eq!(0.0, -0.0).ulps(0);
    }

    #[test]
    fn nan() {
        assert!(!f32::NAN.approx_eq(&f32::NAN));
        assert_approx_ne!(f32::NAN, f32::NAN).abs(1.0);
        assert_approx_ne!(f32::NAN, f32::NAN).rel(1.0);
        assert_approx_ne!(f32::NAN, f32::NAN).ulps(100);
        assert_approx_ne!(f32::NAN, 0.0).abs(1.0);
        assert_approx_ne!(f32::NAN, 0.0).ulps(100);
    }

    #[test]
    fn inf() {
        assert_approx_eq!(f32::INFINITY, f32::INFINITY).abs(0.0);
        assert_approx_eq!(f32::INFINITY, f32::INFINITY).rel(0.0);
        assert_approx_ne!(f32::INFINITY, f32::NEG_INFINITY).abs(1.0);
        assert_approx_ne!(f32::INFINITY, f32::MAX).abs(10000.0);
        assert_approx_ne!(f32::MAX, f32::INFINITY).ulps(0);
        assert_approx_eq!(f32::MAX, f32::INFINITY).ulps(1);
    }

    #[test]
    fn arrays() {
        assert!([1.0f32, 2.0].approx_eq(&[1.0, 2.0 + f32::EPSILON]));
        assert!(![1.0f32, 2.0].abs_diff_eq(&[1.0, 2.5], 0.1));
        assert!([1.0f32, 2.0][..].abs_diff_eq(&[1.0f32, 2.5][..], 0.5));
    }
}
