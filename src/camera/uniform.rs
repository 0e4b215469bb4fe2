use glam::Mat4;

use super::core::Camera;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform layout for the camera outputs a renderer consumes.
///
/// Column-major f32 view matrix plus the position/front vectors shaders
/// use for eye-relative lighting (e.g. a headlight/spotlight anchored at
/// the viewpoint). The crate never uploads this; it only keeps the layout
/// `Pod` so callers can `bytemuck::cast_slice` it into a buffer write.
pub struct CameraUniform {
    /// View matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees, for projection construction.
    pub fovy: f32,
    /// Camera view direction.
    pub front: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with an identity view matrix and default outputs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fovy: 45.0,
            front: [0.0, 0.0, -1.0],
            _pad: 0.0,
        }
    }

    /// Refresh all fields from the camera's current state.
    pub fn update_view(&mut self, camera: &Camera) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.position = camera.position().to_array();
        self.front = camera.front().to_array();
        self.fovy = camera.zoom();
    }
}
