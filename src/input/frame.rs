use glam::Vec2;

/// One frame's worth of camera input, assembled by the windowing
/// collaborator (usually via [`InputProcessor`](super::InputProcessor))
/// and consumed by [`Camera::apply`](crate::Camera::apply).
///
/// Movement booleans report keys held during the frame; cursor and scroll
/// deltas are the accumulated offsets since the previous frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Forward movement key held.
    pub forward: bool,
    /// Backward movement key held.
    pub backward: bool,
    /// Left strafe key held.
    pub left: bool,
    /// Right strafe key held.
    pub right: bool,
    /// Accumulated cursor offset, with `y` already inverted so device-up
    /// means pitch-up.
    pub cursor_delta: Vec2,
    /// Accumulated vertical scroll offset.
    pub scroll_delta: f32,
}

impl FrameInput {
    /// Whether the snapshot carries any input at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.forward || self.backward || self.left || self.right)
            && self.cursor_delta == Vec2::ZERO
            && self.scroll_delta == 0.0
    }
}

/// Converts absolute cursor positions into per-sample deltas.
///
/// The first sample after construction (or after [`reset`](Self::reset))
/// only establishes the reference position and yields a zero delta, so a
/// cursor entering the window does not whip the view around. The vertical
/// component is inverted here: screen coordinates grow downward, but
/// moving the device up should raise pitch. The camera applies no further
/// inversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorTracker {
    last_pos: Option<Vec2>,
}

impl CursorTracker {
    /// Create a tracker with no reference position yet.
    #[must_use]
    pub fn new() -> Self {
        Self { last_pos: None }
    }

    /// Fold in an absolute cursor sample, returning the (y-inverted)
    /// delta from the previous sample.
    pub fn delta(&mut self, x: f32, y: f32) -> Vec2 {
        let pos = Vec2::new(x, y);
        let Some(last) = self.last_pos.replace(pos) else {
            return Vec2::ZERO;
        };
        Vec2::new(pos.x - last.x, last.y - pos.y)
    }

    /// Drop the reference position. The next sample yields a zero delta.
    pub fn reset(&mut self) {
        self.last_pos = None;
    }
}
