//! Converts raw platform events into per-frame camera input.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! held movement keys) and the key-binding map. It is the only thing that
//! sits between raw window events and [`Camera::apply`](crate::Camera::apply).

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::InputEvent;
use super::frame::{CursorTracker, FrameInput};
use crate::camera::MoveDirection;

/// Maps physical key strings to movement directions.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format: `"KeyW"`,
/// `"KeyA"`, etc. Defaults to WASD. Serializes as a TOML table:
///
/// ```toml
/// [keybindings]
/// KeyW = "forward"
/// KeyS = "backward"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeyBindings {
    /// Forward map: key string → movement direction.
    bindings: HashMap<String, MoveDirection>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), MoveDirection::Forward),
            ("KeyS".into(), MoveDirection::Backward),
            ("KeyA".into(), MoveDirection::Left),
            ("KeyD".into(), MoveDirection::Right),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the movement direction for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<MoveDirection> {
        self.bindings.get(key).copied()
    }

    /// Bind (or rebind) a key to a movement direction.
    pub fn bind(&mut self, key: impl Into<String>, direction: MoveDirection) {
        let _ = self.bindings.insert(key.into(), direction);
    }
}

/// Folds raw window events into per-frame [`FrameInput`] snapshots.
///
/// Owns the cursor tracker, the held state of the four movement
/// directions, and the key-binding map.
///
/// # Usage
///
/// ```
/// use flycam::{Camera, InputEvent, InputProcessor};
///
/// let mut camera = Camera::default();
/// let mut processor = InputProcessor::new();
///
/// // In the event loop:
/// processor.handle_event(&InputEvent::Key { code: "KeyW".into(), pressed: true });
///
/// // Once per frame:
/// let frame = processor.take_frame_input();
/// camera.apply(&frame, 0.016);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Cursor position tracking and first-sample suppression.
    cursor: CursorTracker,
    /// Key string → direction mapping.
    key_bindings: KeyBindings,
    /// Held state per movement direction.
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    /// Cursor delta accumulated since the last snapshot.
    pending_cursor: Vec2,
    /// Scroll delta accumulated since the last snapshot.
    pending_scroll: f32,
}

impl InputProcessor {
    /// Create a processor with default (WASD) key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::default()
        }
    }

    /// Fold one event into the pending frame state.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.pending_cursor += self.cursor.delta(*x, *y);
            }
            InputEvent::Scroll { delta } => {
                self.pending_scroll += delta;
            }
            InputEvent::Key { code, pressed } => self.handle_key(code, *pressed),
            InputEvent::CursorReset => self.cursor.reset(),
        }
    }

    /// Update held-direction state from a physical key string.
    pub fn handle_key(&mut self, code: &str, pressed: bool) {
        match self.key_bindings.lookup(code) {
            Some(MoveDirection::Forward) => self.forward = pressed,
            Some(MoveDirection::Backward) => self.backward = pressed,
            Some(MoveDirection::Left) => self.left = pressed,
            Some(MoveDirection::Right) => self.right = pressed,
            None => {}
        }
    }

    /// Drain the accumulated deltas into one frame's snapshot.
    ///
    /// Call exactly once per frame, before
    /// [`Camera::apply`](crate::Camera::apply). Cursor and scroll deltas
    /// reset to zero; held-key state persists until the matching release
    /// event arrives.
    pub fn take_frame_input(&mut self) -> FrameInput {
        let frame = FrameInput {
            forward: self.forward,
            backward: self.backward,
            left: self.left,
            right: self.right,
            cursor_delta: self.pending_cursor,
            scroll_delta: self.pending_scroll,
        };
        self.pending_cursor = Vec2::ZERO;
        self.pending_scroll = 0.0;
        frame
    }
}
