//! Small support utilities.

/// Per-frame delta time and smoothed FPS tracking.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
