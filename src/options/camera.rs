use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera control and projection parameters.
pub struct CameraOptions {
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Mouse sensitivity in degrees per input unit.
    pub mouse_sensitivity: f32,
    /// Initial vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Initial yaw in degrees. The -90 default points the camera down
    /// -Z, the conventional forward axis.
    pub yaw: f32,
    /// Initial pitch in degrees.
    pub pitch: f32,
    /// Whether mouse movement clamps pitch away from the poles.
    pub constrain_pitch: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            yaw: -90.0,
            pitch: 0.0,
            constrain_pitch: true,
        }
    }
}
