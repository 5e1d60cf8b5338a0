//! Randomized checks of algebraic identities.

use std::f32::consts::PI;

use fastrand::Rng;
use linmath::{approx::ApproxEq, assert_approx_eq, vec3, vec4, Mat3, Mat4, Quat, Vec3};

const ITERATIONS: usize = 500;

fn rand_f32(rng: &mut Rng, min: f32, max: f32) -> f32 {
    min + rng.f32() * (max - min)
}

fn rand_vec3(rng: &mut Rng, range: f32) -> Vec3 {
    vec3(
        rand_f32(rng, -range, range),
        rand_f32(rng, -range, range),
        rand_f32(rng, -range, range),
    )
}

fn rand_rotation(rng: &mut Rng) -> Quat {
    loop {
        let v = vec4(
            rand_f32(rng, -1.0, 1.0),
            rand_f32(rng, -1.0, 1.0),
            rand_f32(rng, -1.0, 1.0),
            rand_f32(rng, -1.0, 1.0),
        );
        if v.length() > 0.1 {
            return Quat::from_vec(v.normalize());
        }
    }
}

fn rand_mat3(rng: &mut Rng) -> Mat3 {
    Mat3::from_fn(|_, _| rand_f32(rng, -2.0, 2.0))
}

#[test]
fn normalize_yields_unit_length() {
    let mut rng = Rng::with_seed(0x9e3779b97f4a7c15);
    for _ in 0..ITERATIONS {
        let v = rand_vec3(&mut rng, 100.0);
        if v.length() < 1e-3 {
            continue;
        }
        let n = v.normalize();
        assert_approx_eq!(n.length(), 1.0).abs(1e-5);
        assert_approx_eq!(n.normalize(), n).abs(1e-6);
        // direction is preserved
        assert_approx_eq!(n * v.length(), v).abs(1e-3);
    }
}

#[test]
fn cross_product_is_orthogonal() {
    let mut rng = Rng::with_seed(7);
    for _ in 0..ITERATIONS {
        let (a, b) = (rand_vec3(&mut rng, 1.0), rand_vec3(&mut rng, 1.0));
        let c = a.cross(b);
        assert_approx_eq!(c.dot(a), 0.0).abs(1e-5);
        assert_approx_eq!(c.dot(b), 0.0).abs(1e-5);
        assert_approx_eq!(b.cross(a), -c).abs(1e-6);
    }
}

#[test]
fn rotation_matches_matrix() {
    let mut rng = Rng::with_seed(0x3024b6663d843ca2);
    for _ in 0..ITERATIONS {
        let q = rand_rotation(&mut rng);
        let v = rand_vec3(&mut rng, 10.0);

        let rotated = q * v;
        assert_approx_eq!(rotated, q.to_mat3() * v).abs(1e-4);
        assert_approx_eq!(rotated, q.to_mat4() * v).abs(1e-4);
        assert_approx_eq!(rotated.length(), v.length()).abs(1e-4);
        assert_approx_eq!(q.conjugate() * rotated, v).abs(1e-4);
    }
}

#[test]
fn rotation_matrices_are_orthonormal() {
    let mut rng = Rng::with_seed(1234);
    for _ in 0..ITERATIONS {
        let m = rand_rotation(&mut rng).to_mat3();
        assert_approx_eq!(m * m.transpose(), Mat3::IDENTITY).abs(1e-5);
        assert_approx_eq!(m.determinant(), 1.0).abs(1e-5);
    }
}

#[test]
fn matrix_round_trip_up_to_sign() {
    let mut rng = Rng::with_seed(42);
    for _ in 0..ITERATIONS {
        let q = rand_rotation(&mut rng);
        let back = Quat::from_mat3(q.to_mat3());

        // `q` and `-q` describe the same rotation
        let back = if back.dot(q) < 0.0 { -back } else { back };
        assert_approx_eq!(back, q).abs(1e-4);
        assert_approx_eq!(back.length(), 1.0).abs(1e-5);
    }
}

#[test]
fn hamilton_product_composes_rotations() {
    let mut rng = Rng::with_seed(99);
    for _ in 0..ITERATIONS {
        let (p, q) = (rand_rotation(&mut rng), rand_rotation(&mut rng));
        let v = rand_vec3(&mut rng, 1.0);
        assert_approx_eq!((p * q) * v, p * (q * v)).abs(1e-5);
        assert_approx_eq!((p * q).to_mat3(), p.to_mat3() * q.to_mat3()).abs(1e-5);
    }
}

#[test]
fn matrix_product_is_associative() {
    let mut rng = Rng::with_seed(5);
    for _ in 0..ITERATIONS {
        let (a, b, c) = (rand_mat3(&mut rng), rand_mat3(&mut rng), rand_mat3(&mut rng));
        assert_approx_eq!((a * b) * c, a * (b * c)).abs(1e-4).rel(1e-5);
        assert_approx_eq!((a * b).transpose(), b.transpose() * a.transpose()).abs(1e-5);
        assert_approx_eq!((a * b).determinant(), a.determinant() * b.determinant())
            .abs(1e-3)
            .rel(1e-4);
    }
}

#[test]
fn trs_matches_composed_transforms() {
    let mut rng = Rng::with_seed(11);
    for _ in 0..ITERATIONS {
        let rot = rand_rotation(&mut rng);
        let offset = rand_vec3(&mut rng, 10.0);
        let scale = rand_vec3(&mut rng, 3.0);
        let p = rand_vec3(&mut rng, 5.0);

        let m = Mat4::transform(rot, offset, scale);
        let composed = Mat4::translation(offset) * Mat4::rotation(rot) * Mat4::scaling(scale);
        assert_approx_eq!(m, composed).abs(1e-5);
        assert_approx_eq!(m * p, rot * (p * scale) + offset).abs(1e-3);
    }
}

#[test]
fn interpolation_stays_on_the_unit_sphere() {
    let mut rng = Rng::with_seed(0xdead_beef);
    for _ in 0..ITERATIONS {
        let (a, b) = (rand_rotation(&mut rng), rand_rotation(&mut rng));
        let k = rng.f32();

        let s = a.slerp(b, k);
        assert_approx_eq!(s.length(), 1.0).abs(1e-4);
        let l = a.lerp(b, k);
        assert_approx_eq!(l.length(), 1.0).abs(1e-5);

        // endpoints, up to sign
        let start = a.slerp(b, 0.0);
        assert!(start.abs_diff_eq(&a, 1e-4) || start.abs_diff_eq(&-a, 1e-4));
        let end = a.slerp(b, 1.0);
        assert!(end.abs_diff_eq(&b, 1e-3) || end.abs_diff_eq(&-b, 1e-3));
    }
}

#[test]
fn slerp_has_constant_angular_velocity() {
    let mut rng = Rng::with_seed(3);
    for _ in 0..100 {
        let axis = rand_vec3(&mut rng, 1.0);
        if axis.length() < 0.1 {
            continue;
        }
        let axis = axis.normalize();
        let angle = rand_f32(&mut rng, 0.1, PI * 0.9);
        let b = Quat::angle_axis(angle, axis);

        let mid = Quat::IDENTITY.slerp(b, 0.5);
        assert_approx_eq!(mid, Quat::angle_axis(angle * 0.5, axis)).abs(1e-4);
    }
}

#[test]
fn compression_preserves_rotation() {
    let mut rng = Rng::with_seed(17);
    for _ in 0..ITERATIONS {
        let q = rand_rotation(&mut rng);
        let v = rand_vec3(&mut rng, 1.0);
        let restored = Quat::decompress(q.compress());
        // `w` loses precision when it is close to 0
        assert_approx_eq!(restored * v, q * v).abs(5e-3);
    }
}
