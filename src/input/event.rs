/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// accumulates them into a per-frame [`FrameInput`](super::FrameInput).
/// Key codes use the `winit::keyboard::KeyCode` debug format (`"KeyW"`,
/// `"KeyD"`, ...) so serialized key bindings stay readable.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount, typically ±1 per notch.
        delta: f32,
    },
    /// Physical key pressed or released.
    Key {
        /// Physical key code string, e.g. `"KeyW"`.
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The window lost cursor tracking (focus loss, cursor left). The
    /// next cursor sample establishes a fresh reference instead of
    /// producing a spurious jump.
    CursorReset,
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Translate a winit window event, if it maps to camera input.
    #[must_use]
    pub fn from_winit(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => Some(Self::Key {
                    code: format!("{code:?}"),
                    pressed: event.state.is_pressed(),
                }),
                PhysicalKey::Unidentified(_) => None,
            },
            WindowEvent::CursorLeft { .. } | WindowEvent::Focused(false) => {
                Some(Self::CursorReset)
            }
            _ => None,
        }
    }
}
