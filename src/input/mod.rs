//! Input handling: platform-agnostic events, the per-frame snapshot, and
//! the processor that folds raw window events into it.
//!
//! This replaces callback-mutates-global plumbing with explicit state the
//! caller owns: a window loop feeds [`InputEvent`]s into an
//! [`InputProcessor`], drains one [`FrameInput`] per frame, and hands it
//! to [`Camera::apply`](crate::Camera::apply).

/// Platform-agnostic input events.
pub mod event;
/// Per-frame input snapshot and cursor delta tracking.
pub mod frame;
/// Converts raw events into per-frame snapshots.
pub mod processor;

pub use event::InputEvent;
pub use frame::{CursorTracker, FrameInput};
pub use processor::{InputProcessor, KeyBindings};
