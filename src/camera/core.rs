use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::input::FrameInput;
use crate::options::CameraOptions;

/// Pitch is kept this far inside the poles so `front` never becomes
/// parallel to the world up vector.
pub const PITCH_LIMIT: f32 = 89.0;
/// Minimum vertical field of view in degrees.
pub const MIN_ZOOM: f32 = 1.0;
/// Maximum vertical field of view in degrees.
pub const MAX_ZOOM: f32 = 45.0;

/// `front × world_up` below this squared length means the basis has
/// degenerated (front sitting on a pole).
const DEGENERATE_SQ: f32 = 1e-8;

/// Movement directions the camera integrates along.
///
/// A closed enumeration: callers issue one [`Camera::process_keyboard`]
/// call per active direction per frame. Serde serializes as `snake_case`
/// strings so TOML key bindings stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Along `front`.
    Forward,
    /// Against `front`.
    Backward,
    /// Against `right`.
    Left,
    /// Along `right`.
    Right,
}

/// First-person camera with Euler-angle orientation.
///
/// `yaw`/`pitch` are the authoritative orientation state; the
/// `front`/`right`/`up` basis is a cached derivation, rebuilt from scratch
/// on every orientation change so repeated updates cannot accumulate
/// floating-point skew. All angles are degrees.
///
/// Not thread-safe by design: mutate and read from one thread, in the
/// per-frame order input → [`Camera::apply`] → matrix reads.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    world_up: Vec3,

    // Euler angles (degrees)
    yaw: f32,
    pitch: f32,

    // Derived basis, never mutated directly
    front: Vec3,
    right: Vec3,
    up: Vec3,

    // Control parameters
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
    znear: f32,
    zfar: f32,
    constrain_pitch: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(Vec3::new(0.0, 0.0, 3.0), &CameraOptions::default())
    }
}

impl Camera {
    /// Create a camera at `position` with the given world up vector and
    /// initial orientation; control parameters come from defaults.
    ///
    /// `world_up` is normalized here and immutable afterwards. A
    /// zero-length (or non-finite) `world_up` falls back to `+Y` with a
    /// warning rather than poisoning the basis.
    #[must_use]
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let opts = CameraOptions {
            yaw,
            pitch,
            ..CameraOptions::default()
        };
        Self::with_world_up(position, world_up, &opts)
    }

    /// Create a camera at `position` configured from options, with the
    /// default `+Y` world up.
    #[must_use]
    pub fn from_options(position: Vec3, opts: &CameraOptions) -> Self {
        Self::with_world_up(position, Vec3::Y, opts)
    }

    /// Create a camera at `position` with an explicit world up vector and
    /// control parameters from options.
    #[must_use]
    pub fn with_world_up(position: Vec3, world_up: Vec3, opts: &CameraOptions) -> Self {
        let world_up = world_up.try_normalize().unwrap_or_else(|| {
            log::warn!("world up vector {world_up} cannot be normalized, using +Y");
            Vec3::Y
        });

        let mut camera = Self {
            position,
            world_up,
            yaw: opts.yaw,
            pitch: opts.pitch,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            movement_speed: opts.movement_speed,
            mouse_sensitivity: opts.mouse_sensitivity,
            zoom: opts.fovy.clamp(MIN_ZOOM, MAX_ZOOM),
            znear: opts.znear,
            zfar: opts.zfar,
            constrain_pitch: opts.constrain_pitch,
        };
        camera.update_vectors();
        camera
    }

    /// World-space eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit right vector of the camera basis.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit up vector of the camera basis.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// The fixed world up reference (unit length).
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees (azimuth about the world up axis).
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees (elevation above the horizon).
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees, in `[1, 45]`.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Movement speed in world units per second.
    #[must_use]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Set the movement speed in world units per second.
    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed;
    }

    /// Mouse sensitivity in degrees per input unit.
    #[must_use]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Set the mouse sensitivity in degrees per input unit.
    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    /// View transform: eye at `position`, looking toward
    /// `position + front`, with the derived `up` as vertical reference.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection from the current field of view and the
    /// camera's near/far planes.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, self.znear, self.zfar)
    }

    /// Integrate movement along one axis for `dt` seconds of travel.
    ///
    /// Displacement is `movement_speed * dt`, so motion is
    /// frame-rate-independent. Calls within one frame compose additively:
    /// forward plus right yields diagonal movement at the combined `√2`
    /// magnitude. That unnormalized diagonal is deliberate, matching the
    /// classic fly-camera feel.
    pub fn process_keyboard(&mut self, direction: MoveDirection, dt: f32) {
        let velocity = self.movement_speed * dt;
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Backward => self.position -= self.front * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
        }
    }

    /// Accumulate a mouse delta into yaw/pitch and rebuild the basis.
    ///
    /// Offsets are scaled by the mouse sensitivity. The caller supplies
    /// `y_offset` already inverted so that moving the device "up"
    /// increases pitch ([`CursorTracker`](crate::input::CursorTracker)
    /// does this); no further inversion happens here.
    ///
    /// With `constrain_pitch` the pitch is clamped to ±[`PITCH_LIMIT`].
    /// Without it the caller must keep pitch off the exact poles; if the
    /// view direction does reach the world up axis the basis is recovered
    /// defensively (pitch re-clamp, then an arbitrary orthonormal right if
    /// needed) and a warning is logged instead of propagating NaN.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        // Clamp pitch so the view direction never reaches the world up
        // axis, which would degenerate the right vector.
        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Adjust the field of view from a scroll delta.
    ///
    /// `zoom -= y_offset`, clamped to `[1, 45]` degrees: scrolling up
    /// narrows the FOV, which reads as zooming in.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Apply one frame's input snapshot.
    ///
    /// Mouse movement is applied before keyboard movement so the keyboard
    /// integration reads the already-updated `front`/`right` basis; within
    /// that ordering the channels commute (mouse touches only orientation,
    /// keyboard only position). The pitch constraint follows the
    /// configured [`CameraOptions::constrain_pitch`].
    pub fn apply(&mut self, input: &FrameInput, dt: f32) {
        if input.cursor_delta != glam::Vec2::ZERO {
            self.process_mouse_movement(
                input.cursor_delta.x,
                input.cursor_delta.y,
                self.constrain_pitch,
            );
        }
        if input.scroll_delta != 0.0 {
            self.process_mouse_scroll(input.scroll_delta);
        }
        if input.forward {
            self.process_keyboard(MoveDirection::Forward, dt);
        }
        if input.backward {
            self.process_keyboard(MoveDirection::Backward, dt);
        }
        if input.left {
            self.process_keyboard(MoveDirection::Left, dt);
        }
        if input.right {
            self.process_keyboard(MoveDirection::Right, dt);
        }
    }

    /// Rebuild `front`/`right`/`up` from `yaw`/`pitch`/`world_up`.
    ///
    /// Spherical-to-Cartesian: yaw is azimuth about the up axis, pitch is
    /// elevation. `right` is recomputed from `front × world_up` rather
    /// than incrementally rotated, so the basis cannot drift no matter how
    /// many updates occur.
    fn update_vectors(&mut self) {
        let mut front = Self::front_from_angles(self.yaw, self.pitch);
        let mut right_raw = front.cross(self.world_up);

        if right_raw.length_squared() < DEGENERATE_SQ {
            // front is parallel to world_up. With a +Y up that only
            // happens at a pole pitch, so re-clamping recovers; with a
            // tilted world_up the parallel direction can sit inside the
            // clamp range, in which case any orthonormal right will do.
            log::warn!(
                "camera orientation (yaw {}, pitch {}) degenerates the basis, recovering",
                self.yaw,
                self.pitch
            );
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
            front = Self::front_from_angles(self.yaw, self.pitch);
            right_raw = front.cross(self.world_up);
            if right_raw.length_squared() < DEGENERATE_SQ {
                right_raw = front.any_orthonormal_vector();
            }
        }

        self.front = front;
        self.right = right_raw.normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    fn front_from_angles(yaw: f32, pitch: f32) -> Vec3 {
        let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec_close(a: Vec3, b: Vec3, eps: f32) {
        assert!(
            (a - b).length() < eps,
            "expected {b}, got {a} (|diff| = {})",
            (a - b).length()
        );
    }

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let camera = Camera::default();
        assert_vec_close(camera.position(), Vec3::new(0.0, 0.0, 3.0), EPS);
        assert_vec_close(camera.front(), Vec3::NEG_Z, EPS);
        assert_vec_close(camera.right(), Vec3::X, EPS);
        assert_vec_close(camera.up(), Vec3::Y, EPS);
    }

    #[test]
    fn view_matrix_matches_look_at() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, -90.0, 0.0);
        let expected = Mat4::look_at_rh(
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::Y,
        );
        let view = camera.view_matrix();
        for (a, b) in view
            .to_cols_array()
            .iter()
            .zip(expected.to_cols_array().iter())
        {
            assert!((a - b).abs() < EPS, "view {view:?} != expected {expected:?}");
        }
    }

    #[test]
    fn basis_stays_orthonormal_across_orientations() {
        let mut camera = Camera::default();
        for yaw_step in 0..24 {
            for pitch_step in -8..=8 {
                let yaw = yaw_step as f32 * 15.0;
                let pitch = pitch_step as f32 * 11.0;
                camera.yaw = yaw;
                camera.pitch = pitch;
                camera.update_vectors();

                assert!((camera.front().length() - 1.0).abs() < EPS);
                assert!((camera.right().length() - 1.0).abs() < EPS);
                assert!((camera.up().length() - 1.0).abs() < EPS);
                assert!(camera.front().dot(camera.right()).abs() < EPS);
                assert!(camera.front().dot(camera.up()).abs() < EPS);
                assert!(camera.right().dot(camera.up()).abs() < EPS);
                // Right-handed: right × front = up
                assert_vec_close(camera.right().cross(camera.front()), camera.up(), EPS);
            }
        }
    }

    #[test]
    fn pitch_clamps_at_limit_when_constrained() {
        let mut camera = Camera::default();
        for _ in 0..50 {
            camera.process_mouse_movement(0.0, 1000.0, true);
        }
        assert_eq!(camera.pitch(), PITCH_LIMIT);

        for _ in 0..50 {
            camera.process_mouse_movement(0.0, -1000.0, true);
        }
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn pitch_exceeds_limit_when_unconstrained() {
        let mut camera = Camera::default();
        // sensitivity 0.1 → 1200 units = 120 degrees
        camera.process_mouse_movement(0.0, 1200.0, false);
        assert!(camera.pitch() > PITCH_LIMIT);
    }

    #[test]
    fn pole_pitch_is_reclamped_instead_of_producing_nan() {
        let mut camera = Camera::default();
        // sensitivity 0.1 → 900 units ≈ exactly 90 degrees
        camera.process_mouse_movement(0.0, 900.0, false);
        assert!(camera.pitch() <= PITCH_LIMIT);
        assert!(camera.front().is_finite());
        assert!(camera.right().is_finite());
        assert!(camera.up().is_finite());
        assert!((camera.right().length() - 1.0).abs() < EPS);
    }

    #[test]
    fn zoom_saturates_at_both_ends() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(100.0);
        assert_eq!(camera.zoom(), MIN_ZOOM);
        camera.process_mouse_scroll(-100.0);
        assert_eq!(camera.zoom(), MAX_ZOOM);
    }

    #[test]
    fn displacement_is_linear_in_delta_time() {
        let mut halves = Camera::default();
        halves.process_keyboard(MoveDirection::Forward, 0.016);
        halves.process_keyboard(MoveDirection::Forward, 0.016);

        let mut whole = Camera::default();
        whole.process_keyboard(MoveDirection::Forward, 0.032);

        assert_vec_close(halves.position(), whole.position(), EPS);
    }

    #[test]
    fn diagonal_movement_is_the_unnormalized_vector_sum() {
        let dt = 0.25;
        let mut camera = Camera::default();
        let start = camera.position();
        camera.process_keyboard(MoveDirection::Forward, dt);
        camera.process_keyboard(MoveDirection::Right, dt);

        let offset = camera.position() - start;
        let expected = (camera.front() + camera.right()) * camera.movement_speed() * dt;
        assert_vec_close(offset, expected, EPS);
        assert!(
            (offset.length() - 2.0_f32.sqrt() * camera.movement_speed() * dt).abs() < EPS,
            "diagonal magnitude should be √2 × speed × dt"
        );
    }

    #[test]
    fn incremental_updates_do_not_drift() {
        let mut incremental = Camera::default();
        // 1000 small steps: +0.037 deg yaw, +0.013 deg pitch each
        // (sensitivity 0.1 → offsets of 0.37 / 0.13)
        for _ in 0..1000 {
            incremental.process_mouse_movement(0.37, 0.13, true);
        }

        let mut cumulative = Camera::default();
        cumulative.yaw = incremental.yaw();
        cumulative.pitch = incremental.pitch();
        cumulative.update_vectors();

        assert_vec_close(incremental.front(), cumulative.front(), EPS);
        assert_vec_close(incremental.right(), cumulative.right(), EPS);
        assert_vec_close(incremental.up(), cumulative.up(), EPS);
    }

    #[test]
    fn apply_processes_mouse_before_keyboard() {
        // Turn 90 degrees right and move forward in the same frame: the
        // displacement must follow the post-turn front, not the stale one.
        let input = FrameInput {
            forward: true,
            cursor_delta: glam::Vec2::new(900.0, 0.0), // 0.1 sens → +90 yaw
            ..FrameInput::default()
        };

        let mut camera = Camera::default();
        let dt = 0.5;
        camera.apply(&input, dt);

        // Yaw went from -90 to 0, so front is now +X. Had the keyboard
        // integrated first, the camera would have slid along the stale -Z.
        let expected =
            Vec3::new(0.0, 0.0, 3.0) + Vec3::X * camera.movement_speed() * dt;
        assert_vec_close(camera.front(), Vec3::X, 1e-4);
        assert_vec_close(camera.position(), expected, 1e-4);
    }

    #[test]
    fn zero_world_up_falls_back_to_y() {
        let camera = Camera::new(Vec3::ZERO, Vec3::ZERO, -90.0, 0.0);
        assert_vec_close(camera.world_up(), Vec3::Y, EPS);
        assert_vec_close(camera.front(), Vec3::NEG_Z, EPS);
    }

    #[test]
    fn front_parallel_to_tilted_world_up_recovers_finite_basis() {
        // With world_up = +X, yaw 0 / pitch 0 puts front exactly on the
        // up axis without any pole pitch involved. The pitch re-clamp
        // cannot help here; the fallback right must still be orthonormal.
        let camera = Camera::new(Vec3::ZERO, Vec3::X, 0.0, 0.0);
        assert!(camera.right().is_finite());
        assert!(camera.up().is_finite());
        assert!((camera.right().length() - 1.0).abs() < EPS);
        assert!((camera.up().length() - 1.0).abs() < EPS);
        assert!(camera.front().dot(camera.right()).abs() < EPS);
        assert!(camera.front().dot(camera.up()).abs() < EPS);
        assert!(camera.right().dot(camera.up()).abs() < EPS);
    }

    #[test]
    fn constrained_yaw_onto_tilted_world_up_stays_finite() {
        // Pure yaw movement can also land front on a tilted up axis, even
        // with pitch constraining enabled (the clamp only guards poles of
        // a +Y up).
        let mut camera = Camera::new(Vec3::ZERO, Vec3::X, -90.0, 0.0);
        camera.process_mouse_movement(900.0, 0.0, true); // 0.1 sens → yaw 0
        assert!(camera.right().is_finite());
        assert!(camera.up().is_finite());
        assert!((camera.right().length() - 1.0).abs() < EPS);
        assert!(camera.front().dot(camera.right()).abs() < EPS);
        assert!(camera.right().dot(camera.up()).abs() < EPS);
    }

    #[test]
    fn tilted_world_up_still_yields_orthonormal_basis() {
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.3, 1.0, 0.1), -90.0, 20.0);
        assert!((camera.world_up().length() - 1.0).abs() < EPS);
        assert!((camera.right().length() - 1.0).abs() < EPS);
        assert!(camera.front().dot(camera.right()).abs() < EPS);
        assert!(camera.right().dot(camera.up()).abs() < EPS);
    }
}
