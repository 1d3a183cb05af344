mod vec3;
mod mat4;

pub use vec3::Vec3;
pub use mat4::Mat4;

use thiserror::Error;

/// Rejected camera/projection parameters. Callers get a hard error instead of
/// a matrix full of inf/NaN or a stale buffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("degenerate view basis: up is parallel to the view direction, or eye equals target")]
    DegenerateBasis,
}

/// Orthographic projection mapping `[left,right]x[bottom,top]x[near,far]`
/// (eye space, looking down -z) onto the `[-1,1]` clip cube.
///
/// No degeneracy guard: a zero-extent volume divides by zero and the inf/NaN
/// propagate into the result.
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let w = right - left;
    let h = top - bottom;
    let d = far - near;

    Mat4::new([
        [2.0 / w, 0.0, 0.0, 0.0],
        [0.0, 2.0 / h, 0.0, 0.0],
        [0.0, 0.0, -2.0 / d, 0.0],
        [-(right + left) / w, -(top + bottom) / h, -(far + near) / d, 1.0],
    ])
}

/// Perspective projection for an asymmetric frustum whose near rectangle is
/// `[left,right]x[bottom,top]` at distance `near`, far plane at `far`. Both
/// plane distances are expected positive with `near < far`.
///
/// Same no-guard policy as [`ortho`].
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let w = right - left;
    let h = top - bottom;
    let d = far - near;

    Mat4::new([
        [2.0 * near / w, 0.0, 0.0, 0.0],
        [0.0, 2.0 * near / h, 0.0, 0.0],
        [(right + left) / w, (top + bottom) / h, -(far + near) / d, -1.0],
        [0.0, 0.0, -2.0 * far * near / d, 0.0],
    ])
}

/// Symmetric perspective projection from a vertical field of view (radians)
/// and a width/height aspect ratio.
pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Result<Mat4, TransformError> {
    if far == near {
        return Err(TransformError::InvalidArgument("near and far planes coincide"));
    }
    if aspect == 0.0 {
        return Err(TransformError::InvalidArgument("aspect ratio is zero"));
    }

    let f = 1.0 / (fovy * 0.5).tan();
    let d = far - near;

    Ok(Mat4::new([
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, -(far + near) / d, -1.0],
        [0.0, 0.0, -2.0 * far * near / d, 0.0],
    ]))
}

/// View matrix for a camera at `eye` looking toward `target` with up hint
/// `up`: translate the eye to the origin, then rotate the world onto the
/// camera's right/up/backward basis.
///
/// Fails with [`TransformError::DegenerateBasis`] when the basis collapses:
/// `up` parallel to the view direction, or `eye == target`.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<Mat4, TransformError> {
    // Backward axis; the camera looks down -z in eye space.
    let t = eye - target;
    let r = up.cross(t);
    // Recomputed up, orthogonal to t and r even for a non-unit up hint.
    let s = t.cross(r);

    // Covers both a zero-length t and a colinear up/t pair.
    if s.length_squared() == 0.0 {
        return Err(TransformError::DegenerateBasis);
    }

    let r = r.normalize();
    let s = s.normalize();
    let t = t.normalize();

    let rotation = Mat4::new([
        [r.x, s.x, t.x, 0.0],
        [r.y, s.y, t.y, 0.0],
        [r.z, s.z, t.z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    let translation = Mat4::from_translation(-eye);

    Ok(rotation * translation)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn assert_mat_eq(a: Mat4, b: Mat4) {
        for c in 0..4 {
            for r in 0..4 {
                let scale = 1.0f32.max(a.data[c][r].abs()).max(b.data[c][r].abs());
                assert!(
                    (a.data[c][r] - b.data[c][r]).abs() < EPS * scale,
                    "mismatch at column {c}, row {r}: {} vs {}",
                    a.data[c][r],
                    b.data[c][r]
                );
            }
        }
    }

    fn sample_matrix(seed: f32) -> Mat4 {
        let mut data = [[0.0; 4]; 4];
        for c in 0..4 {
            for r in 0..4 {
                data[c][r] = seed + (c * 4 + r) as f32 * 0.25 - (r as f32) * seed * 0.5;
            }
        }
        Mat4::new(data)
    }

    #[test]
    fn vec3_cross_follows_the_right_hand_rule() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec3::new(0.0, 0.0, -1.0));
        assert!((x.dot(y)).abs() < EPS);
    }

    #[test]
    fn vec3_normalize_yields_unit_length() {
        let v = Vec3::new(3.0, 0.0, 0.0) + Vec3::new(0.0, 0.0, 4.0) * 2.0;
        assert!((v.length() - 73.0f32.sqrt()).abs() < EPS);
        assert!((v.normalize().length() - 1.0).abs() < EPS);
    }

    #[test]
    fn identity_is_left_and_right_neutral() {
        let a = sample_matrix(1.3);
        assert_mat_eq(Mat4::identity() * a, a);
        assert_mat_eq(a * Mat4::identity(), a);
    }

    #[test]
    fn multiplication_is_associative() {
        let a = sample_matrix(0.7);
        let b = sample_matrix(-1.1);
        let c = sample_matrix(2.4);
        assert_mat_eq((a * b) * c, a * (b * c));
    }

    #[test]
    fn translations_compose_by_addition() {
        let a = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let b = Mat4::from_translation(Vec3::new(-4.0, 0.5, 1.0));
        assert_mat_eq(a * b, Mat4::from_translation(Vec3::new(-3.0, 2.5, 4.0)));
    }

    #[test]
    fn ortho_maps_near_and_far_planes_to_clip_bounds() {
        let m = ortho(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);

        let near = m.transform([0.0, 0.0, -1.0, 1.0]);
        assert!((near[2] - -1.0).abs() < EPS);
        assert!((near[3] - 1.0).abs() < EPS);

        let far = m.transform([0.0, 0.0, -10.0, 1.0]);
        assert!((far[2] - 1.0).abs() < EPS);
        assert!((far[3] - 1.0).abs() < EPS);
    }

    #[test]
    fn perspective_projects_on_axis_near_point() {
        let m = perspective(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0).unwrap();

        let clip = m.transform([0.0, 0.0, -1.0, 1.0]);
        assert!((clip[3] - 1.0).abs() < EPS);

        let ndc_z = clip[2] / clip[3];
        assert!(ndc_z >= -1.0 - EPS && ndc_z <= 1.0 + EPS);
    }

    #[test]
    fn perspective_rejects_coincident_planes() {
        assert_eq!(
            perspective(0.5, 1.0, 2.0, 2.0),
            Err(TransformError::InvalidArgument("near and far planes coincide"))
        );
    }

    #[test]
    fn perspective_rejects_zero_aspect() {
        assert_eq!(
            perspective(0.5, 0.0, 1.0, 15.0),
            Err(TransformError::InvalidArgument("aspect ratio is zero"))
        );
    }

    #[test]
    fn frustum_matches_symmetric_perspective() {
        let fovy: f32 = 0.5;
        let aspect = 16.0 / 9.0;
        let near = 1.0;
        let far = 15.0;

        let top = near * (fovy * 0.5).tan();
        let right = top * aspect;

        assert_mat_eq(
            frustum(-right, right, -top, top, near, far),
            perspective(fovy, aspect, near, far).unwrap(),
        );
    }

    #[test]
    fn look_at_moves_target_onto_negative_z_axis() {
        let m = look_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::zero(),
            Vec3::new(0.0, 1.0, 0.0),
        )
        .unwrap();

        let origin = m.transform([0.0, 0.0, 0.0, 1.0]);
        assert!((origin[0]).abs() < EPS);
        assert!((origin[1]).abs() < EPS);
        assert!((origin[2] - -5.0).abs() < EPS);
        assert!((origin[3] - 1.0).abs() < EPS);
    }

    #[test]
    fn look_at_preserves_eye_space_handedness() {
        // Eye on +x looking at the origin: world -x is forward, so the
        // world origin lands at negative eye-space z and world +y stays up.
        let m = look_at(
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::zero(),
            Vec3::new(0.0, 1.0, 0.0),
        )
        .unwrap();

        let origin = m.transform_point(Vec3::zero());
        assert!((origin.z - -2.0).abs() < EPS);

        let above = m.transform_point(Vec3::new(2.0, 1.0, 0.0));
        assert!((above.y - 1.0).abs() < EPS);
    }

    #[test]
    fn look_at_rejects_up_parallel_to_view_direction() {
        let result = look_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::zero(),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert_eq!(result, Err(TransformError::DegenerateBasis));
    }

    #[test]
    fn look_at_rejects_eye_equal_to_target() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let result = look_at(eye, eye, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(result, Err(TransformError::DegenerateBasis));
    }

    #[test]
    fn perspective_times_analytic_inverse_is_identity() {
        let fovy = std::f32::consts::FRAC_PI_2;
        let aspect = 4.0 / 3.0;
        let near = 1.0;
        let far = 100.0;

        let m = perspective(fovy, aspect, near, far).unwrap();

        let f = 1.0 / (fovy * 0.5).tan();
        let c = -(far + near) / (far - near);
        let e = -2.0 * far * near / (far - near);
        let inverse = Mat4::new([
            [aspect / f, 0.0, 0.0, 0.0],
            [0.0, 1.0 / f, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0 / e],
            [0.0, 0.0, -1.0, c / e],
        ]);

        assert_mat_eq(inverse * m, Mat4::identity());
        assert_mat_eq(m * inverse, Mat4::identity());
    }
}
