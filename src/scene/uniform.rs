use crate::math::{Mat4, TransformError};
use crate::scene::Camera;

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    mvp: [[f32; 4]; 4],
}

impl Uniforms {
    pub fn new() -> Self {
        Self {
            mvp: Mat4::identity().into(),
        }
    }

    /// Recomputes projection x view. On a degenerate camera the previous
    /// matrix is kept and the error is returned to the caller.
    pub fn update_transform(
        &mut self,
        camera: &Camera,
        aspect: f32,
    ) -> Result<(), TransformError> {
        let projection = camera.projection(aspect)?;
        let view = camera.view()?;

        self.mvp = (projection * view).into();
        Ok(())
    }
}
