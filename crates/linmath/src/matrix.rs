use std::{fmt, slice};

use crate::{vec4, DimensionMismatch, Quat, Vec3, Vector};

mod ops;

/// A 3x3 matrix.
pub type Mat3 = Matrix<3>;
/// A 4x4 matrix.
pub type Mat4 = Matrix<4>;

/// A column-major square matrix with `N` rows and `N` columns of [`f32`]s.
///
/// Use the [`Mat3`] and [`Mat4`] aliases to name concrete matrix types.
///
/// # Construction
///
/// - [`Mat3::new`] and [`Mat4::new`] take their elements in *row-major* order, so that the source
///   code looks like the matrix it creates.
/// - [`Matrix::from_columns`] and [`Matrix::from_rows`] build a matrix from column or row vectors.
/// - [`Matrix::from_fn`] computes each element from its column and row.
/// - [`Matrix::from_diagonal`] and [`Matrix::from_scale`] create diagonal matrices.
/// - [`Matrix::IDENTITY`] (also the [`Default`]) and [`Matrix::ZERO`] are predefined.
/// - [`Mat4`] has builders for affine transforms: [`Mat4::scaling`], [`Mat4::translation`],
///   [`Mat4::rotation`] and [`Mat4::transform`]. Projections are created by the free functions
///   [`perspective`](crate::perspective), [`orthographic`](crate::orthographic) and
///   [`ui_space`](crate::ui_space).
///
/// # Element Access
///
/// Indexing a matrix with a column index yields that column as a [`Vector`], so `m[col][row]`
/// addresses a single element:
///
/// ```
/// # use linmath::*;
/// let mut m = Mat3::new(
///     1.0, 2.0, 3.0,
///     4.0, 5.0, 6.0,
///     7.0, 8.0, 9.0,
/// );
/// assert_eq!(m[0], vec3(1.0, 4.0, 7.0));
/// assert_eq!(m[2][0], 3.0);
/// m[1][2] = 0.0;
/// assert_eq!(m.get(1, 2), Some(&0.0));
/// assert_eq!(m.get(3, 0), None);
/// ```
///
/// # Multiplication
///
/// Vectors are column vectors, so `a * b * v` applies `b` to `v` first. [`Mat4`] times [`Vec3`]
/// treats the vector as a point (`w = 1`) and drops `w` from the result without dividing by it.
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Matrix<const N: usize>([Vector<N>; N]);

#[cfg(feature = "bytemuck")]
unsafe impl<const N: usize> bytemuck::Zeroable for Matrix<N> {}
#[cfg(feature = "bytemuck")]
unsafe impl<const N: usize> bytemuck::Pod for Matrix<N> {}

impl<const N: usize> Matrix<N> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Vector::ZERO; N]);

    /// The identity matrix.
    ///
    /// Multiplying any vector or matrix with this matrix returns it unchanged.
    pub const IDENTITY: Self = {
        let mut columns = [Vector::ZERO; N];
        let mut i = 0;
        while i < N {
            columns[i].0[i] = 1.0;
            i += 1;
        }
        Self(columns)
    };

    /// Creates a matrix from an array of column vectors.
    #[inline]
    pub const fn from_columns(columns: [Vector<N>; N]) -> Self {
        Self(columns)
    }

    /// Creates a matrix from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let rows = Mat3::from_rows([
    ///     vec3(1.0, 2.0, 3.0),
    ///     vec3(4.0, 5.0, 6.0),
    ///     vec3(7.0, 8.0, 9.0),
    /// ]);
    /// let columns = Mat3::from_columns([
    ///     vec3(1.0, 4.0, 7.0),
    ///     vec3(2.0, 5.0, 8.0),
    ///     vec3(3.0, 6.0, 9.0),
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows(rows: [Vector<N>; N]) -> Self {
        Self(rows).transpose()
    }

    /// Creates a matrix by invoking a closure with the column and row of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let m = Mat3::from_fn(|col, row| (row * 10 + col) as f32);
    /// assert_eq!(m, Mat3::new(
    ///      0.0,  1.0,  2.0,
    ///     10.0, 11.0, 12.0,
    ///     20.0, 21.0, 22.0,
    /// ));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> f32,
    {
        Self(std::array::from_fn(|col| Vector::from_fn(|row| cb(col, row))))
    }

    /// Creates a matrix with `diag` on its diagonal and 0 everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(Mat3::from_diagonal(vec3(1.0, 2.0, 3.0)), Mat3::new(
    ///     1.0, 0.0, 0.0,
    ///     0.0, 2.0, 0.0,
    ///     0.0, 0.0, 3.0,
    /// ));
    /// ```
    pub fn from_diagonal(diag: Vector<N>) -> Self {
        Self::from_fn(|col, row| if col == row { diag[col] } else { 0.0 })
    }

    /// Creates a uniform scaling matrix (the identity matrix multiplied by `scale`).
    pub fn from_scale(scale: f32) -> Self {
        Self::from_diagonal(Vector::splat(scale))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(f32) -> f32,
    {
        Self(self.0.map(|column| column.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let m = Mat3::new(
    ///     1.0, 2.0, 3.0,
    ///     4.0, 5.0, 6.0,
    ///     7.0, 8.0, 9.0,
    /// );
    /// assert_eq!(m.transpose()[0], vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m.transpose().transpose(), m);
    /// ```
    pub fn transpose(self) -> Self {
        Self::from_fn(|col, row| self.0[row][col])
    }

    /// Returns the sum of the elements on the diagonal.
    pub fn trace(&self) -> f32 {
        (0..N).map(|i| self.0[i][i]).sum()
    }

    /// Returns the diagonal elements of this matrix.
    pub fn diagonal(&self) -> Vector<N> {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Returns a reference to the element in column `col` and row `row`, or [`None`] if either is
    /// out of bounds.
    pub fn get(&self, col: usize, row: usize) -> Option<&f32> {
        self.0.get(col).and_then(|column| column.as_slice().get(row))
    }

    /// Returns a mutable reference to the element in column `col` and row `row`, or [`None`] if
    /// either is out of bounds.
    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut f32> {
        self.0
            .get_mut(col)
            .and_then(|column| column.as_mut_slice().get_mut(row))
    }

    /// Returns the column vectors of this matrix.
    #[inline]
    pub const fn columns(&self) -> &[Vector<N>; N] {
        &self.0
    }

    /// Returns the elements of this matrix in column-major order.
    ///
    /// This is the layout graphics APIs expect for uniform uploads.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let m = Mat4::translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(&m.as_slice()[12..], &[1.0, 2.0, 3.0, 1.0]);
    /// ```
    pub fn as_slice(&self) -> &[f32] {
        // SAFETY: `Vector<N>` is a transparent wrapper around `[f32; N]`, so `[Vector<N>; N]` is
        // `N * N` contiguous `f32`s.
        unsafe { slice::from_raw_parts(self.0.as_ptr().cast::<f32>(), N * N) }
    }

    /// Returns the columns of this matrix as plain arrays.
    #[inline]
    pub fn as_array(&self) -> &[[f32; N]; N] {
        // SAFETY: see `as_slice`.
        unsafe { &*(self as *const Self).cast::<[[f32; N]; N]>() }
    }
}

impl Matrix<3> {
    /// Creates a 3x3 matrix from its elements, given in row-major order.
    ///
    /// `mRC` is the element in row `R` and column `C`.
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Self {
        Self([
            Vector([m00, m10, m20]),
            Vector([m01, m11, m21]),
            Vector([m02, m12, m22]),
        ])
    }

    /// Returns the determinant of the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(Mat3::IDENTITY.determinant(), 1.0);
    /// assert_eq!(Mat3::from_scale(2.0).determinant(), 8.0);
    /// ```
    pub fn determinant(&self) -> f32 {
        let [a, d, g] = self.0[0].0;
        let [b, e, h] = self.0[1].0;
        let [c, f, i] = self.0[2].0;

        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Creates a matrix that scales each axis by the matching element of `scale`.
    pub fn scaling(scale: Vec3) -> Self {
        Self::from_diagonal(scale)
    }
}

impl Matrix<4> {
    /// Creates a 4x4 matrix from its elements, given in row-major order.
    ///
    /// `mRC` is the element in row `R` and column `C`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let m = Mat4::new(
    ///     1.0, 0.0, 0.0, 5.0,
    ///     0.0, 1.0, 0.0, 6.0,
    ///     0.0, 0.0, 1.0, 7.0,
    ///     0.0, 0.0, 0.0, 1.0,
    /// );
    /// assert_eq!(m, Mat4::translation(vec3(5.0, 6.0, 7.0)));
    /// ```
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self([
            Vector([m00, m10, m20, m30]),
            Vector([m01, m11, m21, m31]),
            Vector([m02, m12, m22, m32]),
            Vector([m03, m13, m23, m33]),
        ])
    }

    /// Creates a matrix that scales each axis by the matching element of `scale`.
    pub fn scaling(scale: Vec3) -> Self {
        Self::from_diagonal(scale.extend(1.0))
    }

    /// Creates a matrix that translates points by `offset`.
    ///
    /// Directions (vectors with `w = 0`) are unaffected.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let m = Mat4::translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m * Vec3::ZERO, vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m * vec4(1.0, 1.0, 1.0, 0.0), vec4(1.0, 1.0, 1.0, 0.0));
    /// ```
    pub fn translation(offset: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.0[3] = offset.extend(1.0);
        m
    }

    /// Creates a matrix that rotates by `rotation`. Equivalent to [`Quat::to_mat4`].
    pub fn rotation(rotation: Quat) -> Self {
        Self::from(rotation.to_mat3())
    }

    /// Creates a matrix that scales by `scale`, then rotates by `rotation`, then translates by
    /// `translation`.
    ///
    /// `rotation` should be normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let rot = Quat::angle_axis(FRAC_PI_2, Vec3::Z);
    /// let m = Mat4::transform(rot, vec3(10.0, 0.0, 0.0), vec3(2.0, 1.0, 1.0));
    /// // scaled to (2, 0, 0), rotated to (0, 2, 0), moved to (10, 2, 0)
    /// assert_approx_eq!(m * Vec3::X, vec3(10.0, 2.0, 0.0)).abs(1e-6);
    /// ```
    pub fn transform(rotation: Quat, translation: Vec3, scale: Vec3) -> Self {
        let mut m = Self::from(rotation.to_mat3() * Mat3::scaling(scale));
        m.0[3] = translation.extend(1.0);
        m
    }

    /// Creates a matrix that rotates by `rotation`, then translates by `translation`.
    ///
    /// Same as [`Mat4::transform`] with a scale of 1.
    pub fn transform_rt(rotation: Quat, translation: Vec3) -> Self {
        Self::transform(rotation, translation, Vec3::ONE)
    }

    /// Returns `self * Mat4::scaling(scale)`.
    ///
    /// The scaling is applied to vectors before the transformation in `self`.
    #[must_use]
    pub fn scale(self, scale: Vec3) -> Self {
        self * Self::scaling(scale)
    }

    /// Returns `self * Mat4::translation(offset)`.
    #[must_use]
    pub fn translate(self, offset: Vec3) -> Self {
        self * Self::translation(offset)
    }

    /// Returns `self * Mat4::rotation(rotation)`.
    #[must_use]
    pub fn rotate(self, rotation: Quat) -> Self {
        self * Self::rotation(rotation)
    }

    /// Returns the upper-left 3x3 part of this matrix (its linear part, without translation).
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_fn(|col, row| self.0[col][row])
    }
}

/// Embeds a 3x3 matrix in the upper-left corner of the 4x4 identity matrix.
impl From<Matrix<3>> for Matrix<4> {
    fn from(m: Matrix<3>) -> Self {
        let [c0, c1, c2] = m.0;
        Self([
            c0.extend(0.0),
            c1.extend(0.0),
            c2.extend(0.0),
            vec4(0.0, 0.0, 0.0, 1.0),
        ])
    }
}

impl<const N: usize> Default for Matrix<N> {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Creates a matrix from `N * N` elements in column-major order.
impl<const N: usize> TryFrom<&[f32]> for Matrix<N> {
    type Error = DimensionMismatch;

    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        DimensionMismatch::check(N * N, slice.len())?;
        Ok(Self::from_fn(|col, row| slice[col * N + row]))
    }
}

impl<const N: usize> fmt::Debug for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, const N: usize>(&'a Matrix<N>, usize);
        impl<'a, const N: usize> fmt::Debug for FormatRow<'a, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..N {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    fmt::Debug::fmt(&self.0 .0[col][self.1], f)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in 0..N {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use crate::{assert_approx_eq, vec3, Vec4};

    use super::*;

    #[test]
    fn identity() {
        assert_eq!(Mat3::IDENTITY, Mat3::from_scale(1.0));
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
        assert_eq!(Mat4::IDENTITY.trace(), 4.0);
        assert_eq!(Mat3::IDENTITY.diagonal(), Vec3::ONE);
        assert_eq!(Mat3::ZERO.trace(), 0.0);

        let m = Mat3::new(2.0, 3.0, 5.0, 7.0, 11.0, 13.0, 17.0, 19.0, 23.0);
        assert_eq!(m * Mat3::IDENTITY, m);
        assert_eq!(Mat3::IDENTITY * m, m);
    }

    #[test]
    fn multiplication() {
        #[rustfmt::skip]
        let a = Mat3::new(
             2.0,  3.0,  5.0,
             7.0, 11.0, 13.0,
            17.0, 19.0, 23.0,
        );
        #[rustfmt::skip]
        let b = Mat3::new(
            29.0, 31.0, 37.0,
            41.0, 43.0, 47.0,
            53.0, 59.0, 61.0,
        );
        #[rustfmt::skip]
        let expected = Mat3::new(
             446.0,  486.0,  520.0,
            1343.0, 1457.0, 1569.0,
            2491.0, 2701.0, 2925.0,
        );
        assert_eq!(a * b, expected);

        let mut c = a;
        c *= b;
        assert_eq!(c, expected);

        let v = vec3(1.0, -2.0, 3.0);
        assert_eq!((a * b) * v, a * (b * v));
    }

    #[test]
    fn matrix_vector() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m * vec3(1.0, 0.0, 0.0), m[0]);
        assert_eq!(m * vec3(1.0, 1.0, 1.0), vec3(6.0, 15.0, 24.0));
        assert_eq!(m * 2.0, Mat3::new(2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0));
    }

    #[test]
    fn rotations() {
        let (sin, cos) = FRAC_PI_2.sin_cos();
        #[rustfmt::skip]
        let rotx = Mat3::new(
            1.0, 0.0, 0.0,
            0.0, cos, -sin,
            0.0, sin, cos,
        );
        #[rustfmt::skip]
        let roty = Mat3::new(
            cos, 0.0, sin,
            0.0, 1.0, 0.0,
            -sin, 0.0, cos,
        );
        #[rustfmt::skip]
        let rotz = Mat3::new(
            cos, -sin, 0.0,
            sin, cos, 0.0,
            0.0, 0.0, 1.0,
        );

        assert!((rotx * Vec3::Y - Vec3::Z).length2() < 1e-8);
        assert!((roty * Vec3::Z - Vec3::X).length2() < 1e-8);
        assert!((rotz * Vec3::X - Vec3::Y).length2() < 1e-8);

        assert_approx_eq!(rotx, Quat::angle_axis(FRAC_PI_2, Vec3::X).to_mat3()).abs(1e-6);
        assert_approx_eq!(roty, Quat::angle_axis(FRAC_PI_2, Vec3::Y).to_mat3()).abs(1e-6);
        assert_approx_eq!(rotz, Quat::angle_axis(FRAC_PI_2, Vec3::Z).to_mat3()).abs(1e-6);
    }

    #[test]
    fn determinant() {
        assert_eq!(
            Mat3::new(0.0, 1.0, 2.0, 3.0, 2.0, 1.0, 1.0, 1.0, 0.0).determinant(),
            3.0
        );
        assert_eq!(Mat3::scaling(vec3(2.0, 3.0, 4.0)).determinant(), 24.0);

        let m = Mat3::new(0.0, 1.0, 2.0, 3.0, 2.0, 1.0, 1.0, 1.0, 0.0);
        assert_eq!(m.transpose().determinant(), m.determinant());
    }

    #[test]
    fn mat3_embedding() {
        let m3 = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        #[rustfmt::skip]
        let m4 = Mat4::new(
            1.0, 2.0, 3.0, 0.0,
            4.0, 5.0, 6.0, 0.0,
            7.0, 8.0, 9.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        assert_eq!(Mat4::from(m3), m4);
        assert_eq!(m4.to_mat3(), m3);
        assert_eq!(Mat4::translation(vec3(1.0, 2.0, 3.0)).to_mat3(), Mat3::IDENTITY);
    }

    #[test]
    fn points_and_directions() {
        let m = Mat4::scaling(vec3(2.0, 2.0, 2.0)).translate(vec3(1.0, 0.0, 0.0));
        // translation is applied first, then scaled
        assert_eq!(m * Vec3::ZERO, vec3(2.0, 0.0, 0.0));
        assert_eq!(m * Vec4::X, vec4(2.0, 0.0, 0.0, 0.0));

        let m = Mat4::translation(vec3(1.0, 0.0, 0.0)).scale(vec3(2.0, 2.0, 2.0));
        assert_eq!(m * Vec3::ONE, vec3(3.0, 2.0, 2.0));
    }

    #[test]
    fn trs() {
        let rot = Quat::angle_axis(0.7, vec3(1.0, 2.0, -1.0).normalize());
        let pos = vec3(-4.0, 0.5, 9.0);
        let scale = vec3(1.0, 3.0, 0.5);

        let expected = Mat4::translation(pos) * Mat4::rotation(rot) * Mat4::scaling(scale);
        assert_approx_eq!(Mat4::transform(rot, pos, scale), expected).abs(1e-5);
        assert_approx_eq!(
            Mat4::IDENTITY.translate(pos).rotate(rot).scale(scale),
            expected
        )
        .abs(1e-5);

        let p = vec3(1.0, 1.0, 1.0);
        assert_approx_eq!(Mat4::transform(rot, pos, scale) * p, rot * (p * scale) + pos).abs(1e-5);
        assert_approx_eq!(Mat4::transform_rt(rot, pos) * p, rot * p + pos).abs(1e-5);
    }

    #[test]
    fn slices() -> anyhow::Result<()> {
        let elems: Vec<f32> = (0..16).map(|i| i as f32).collect();
        let m = Mat4::try_from(&elems[..])?;
        assert_eq!(m[1], vec4(4.0, 5.0, 6.0, 7.0));
        assert_eq!(m.as_slice(), &elems[..]);
        assert_eq!(m.as_array()[3], [12.0, 13.0, 14.0, 15.0]);

        let err = Mat3::try_from(&elems[..]).unwrap_err();
        assert_eq!((err.expected(), err.actual()), (9, 16));
        Ok(())
    }

    #[test]
    fn fmt() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(
            format!("{m:?}"),
            "[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]"
        );
    }
}
