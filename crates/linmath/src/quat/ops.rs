use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, vec3, Quat, Vec3};

impl ApproxEq for Quat {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f32) -> bool {
        self.to_vec().abs_diff_eq(&other.to_vec(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f32) -> bool {
        self.to_vec().rel_diff_eq(&other.to_vec(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.to_vec().ulps_diff_eq(&other.to_vec(), ulps_tolerance)
    }
}

/// Hamilton product.
///
/// As rotations, `self * rhs` applies `rhs` first.
impl Mul for Quat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let v1 = vec3(self.x, self.y, self.z);
        let v2 = vec3(rhs.x, rhs.y, rhs.z);

        let w = self.w * rhs.w - v1.dot(v2);
        let v = v2 * self.w + v1 * rhs.w + v1.cross(v2);
        Self::new(w, v.x, v.y, v.z)
    }
}

impl MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Multiplication with the conjugate of `rhs`.
///
/// For unit quaternions, this undoes the rotation `rhs`: `(a * b) / b ≈ a`.
impl Div for Quat {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.conjugate()
    }
}

impl DivAssign for Quat {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

/// Rotates a vector.
impl Mul<Vec3> for Quat {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        let q = vec3(self.x, self.y, self.z);
        let t = q.cross(rhs) * 2.0;
        rhs + t * self.w + q.cross(t)
    }
}

impl Neg for Quat {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_vec(-self.to_vec())
    }
}

/// Component-wise addition.
impl Add for Quat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_vec(self.to_vec() + rhs.to_vec())
    }
}

impl AddAssign for Quat {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Component-wise subtraction.
impl Sub for Quat {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_vec(self.to_vec() - rhs.to_vec())
    }
}

impl SubAssign for Quat {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Quat {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::from_vec(self.to_vec() * rhs)
    }
}

impl MulAssign<f32> for Quat {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Quat {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self::from_vec(self.to_vec() / rhs)
    }
}

impl DivAssign<f32> for Quat {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn scalar_ops() {
        let mut q = Quat::new(1.0, 2.0, 3.0, 4.0);
        q *= 2.0;
        assert_eq!(q, Quat::new(2.0, 4.0, 6.0, 8.0));
        q /= 4.0;
        assert_eq!(q, Quat::new(0.5, 1.0, 1.5, 2.0));
        q += Quat::IDENTITY;
        assert_eq!(q, Quat::new(1.5, 1.0, 1.5, 2.0));
        q -= q;
        assert_eq!(q, Quat::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(-Quat::IDENTITY, Quat::new(-1.0, -0.0, -0.0, -0.0));
    }

    #[test]
    fn division_undoes_rotation() {
        let a = Quat::angle_axis(0.4, Vec3::X);
        let b = Quat::angle_axis(-1.3, vec3(0.0, 0.6, 0.8));
        assert_approx_eq!((a * b) / b, a).abs(1e-6);

        let mut c = a;
        c *= b;
        c /= b;
        assert_approx_eq!(c, a).abs(1e-6);
    }
}
