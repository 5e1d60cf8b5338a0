use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::{approx::ApproxEq, Matrix, Vector};

/// Column access.
impl<const N: usize> Index<usize> for Matrix<N> {
    type Output = Vector<N>;

    #[inline]
    fn index(&self, col: usize) -> &Self::Output {
        &self.0[col]
    }
}

impl<const N: usize> IndexMut<usize> for Matrix<N> {
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        &mut self.0[col]
    }
}

impl<const N: usize> ApproxEq for Matrix<N> {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f32) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f32) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Matrix * Column Vector.
impl<const N: usize> Mul<Vector<N>> for Matrix<N> {
    type Output = Vector<N>;

    fn mul(self, rhs: Vector<N>) -> Self::Output {
        (0..N).fold(Vector::ZERO, |acc, col| acc + self.0[col] * rhs[col])
    }
}

/// Matrix * Point.
///
/// The point is extended with `w = 1`, so the translation in the last column is applied. The `w`
/// component of the result is dropped without a perspective divide.
impl Mul<Vector<3>> for Matrix<4> {
    type Output = Vector<3>;

    fn mul(self, rhs: Vector<3>) -> Self::Output {
        (self * rhs.extend(1.0)).truncate()
    }
}

/// Matrix * Matrix.
impl<const N: usize> Mul for Matrix<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(rhs.0.map(|column| self * column))
    }
}

impl<const N: usize> MulAssign for Matrix<N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Matrix * Scalar.
impl<const N: usize> Mul<f32> for Matrix<N> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}
