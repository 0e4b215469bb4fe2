//! First-person camera: Euler-angle orientation state, movement
//! integration, and the derived view/projection outputs.

/// Core camera struct and movement directions.
pub mod core;
/// GPU-layout uniform data derived from the camera.
pub mod uniform;

pub use self::core::{Camera, MoveDirection};
pub use self::uniform::CameraUniform;
