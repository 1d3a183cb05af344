use crate::math::{self, Mat4, TransformError, Vec3};

/// Fixed camera looking at the cube from above and to the side.
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fovy: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            eye: Vec3::new(3.0, 4.0, 5.0),
            target: Vec3::zero(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fovy: 0.5,
            near: 1.0,
            far: 15.0,
        }
    }

    pub fn view(&self) -> Result<Mat4, TransformError> {
        math::look_at(self.eye, self.target, self.up)
    }

    pub fn projection(&self, aspect: f32) -> Result<Mat4, TransformError> {
        math::perspective(self.fovy, aspect, self.near, self.far)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_sees_the_cube_center() {
        let camera = Camera::new();
        let mvp = camera.projection(4.0 / 3.0).unwrap() * camera.view().unwrap();

        let clip = mvp.transform([0.0, 0.0, 0.0, 1.0]);
        assert!(clip.iter().all(|v| v.is_finite()));

        // Center of the cube projects inside the clip volume.
        let w = clip[3];
        assert!(w > 0.0);
        assert!(clip[0].abs() <= w && clip[1].abs() <= w && clip[2].abs() <= w);
    }

    #[test]
    fn degenerate_up_vector_is_reported() {
        let camera = Camera {
            up: Vec3::new(3.0, 4.0, 5.0),
            ..Camera::new()
        };
        assert_eq!(camera.view(), Err(TransformError::DegenerateBasis));
    }
}
