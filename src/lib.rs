// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math allowances — casts are intentional and safe
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Float comparison: camera math frequently compares against 0.0, 1.0, etc.
#![allow(clippy::float_cmp)]
// Pedantic allowances
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::use_self)]
#![allow(clippy::redundant_pub_crate)]

//! First-person fly camera controller.
//!
//! Flycam maintains a viewpoint's position and Euler-angle orientation,
//! converts per-frame input (held movement keys, mouse deltas, scroll) into
//! frame-rate-independent motion, and exposes the view/projection matrices
//! and shader-uniform data a renderer consumes. It performs no rendering,
//! windowing, or GPU work itself.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - position, orientation, and the derived matrices
//! - [`input::InputProcessor`] - folds window events into a per-frame
//!   [`input::FrameInput`] snapshot
//! - [`options::Options`] - runtime configuration with TOML preset support
//!
//! # Per-frame flow
//!
//! The caller owns all state; nothing here is global. Each frame:
//! feed events into the processor, drain the snapshot, apply it to the
//! camera with the frame's delta time, then read the matrices.
//!
//! ```
//! use flycam::{Camera, InputProcessor};
//!
//! let mut camera = Camera::default();
//! let mut processor = InputProcessor::new();
//! // ... processor.handle_event(...) for each window event ...
//! let frame = processor.take_frame_input();
//! camera.apply(&frame, 0.016);
//! let view = camera.view_matrix();
//! let proj = camera.projection_matrix(16.0 / 9.0);
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;

pub use camera::{Camera, CameraUniform, MoveDirection};
pub use error::FlycamError;
pub use input::{CursorTracker, FrameInput, InputEvent, InputProcessor, KeyBindings};
pub use options::{CameraOptions, Options};
