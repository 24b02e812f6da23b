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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Smoothed pan / orbit / zoom camera controller for real-time 3D hosts.
//!
//! The controller keeps a *target* camera state that input folds into, and
//! eases the live camera rig toward it once per frame.  It owns no window,
//! renderer, or timer: the host forwards input and calls
//! [`CameraController::tick`] from its render loop.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - target state, drag sessions, per-frame
//!   smoothing
//! - [`camera::CameraActions`] - the handler interface input is delivered
//!   through
//! - [`input::InputProcessor`] - default binding layer turning raw pointer
//!   and keyboard events into [`camera::CameraAction`]s
//! - [`options::Options`] - camera tuning and key bindings, loadable from
//!   TOML presets
//!
//! # Example
//!
//! ```
//! use glam::{Quat, Vec3};
//! use orbicam::camera::{CameraController, CameraRig};
//! use orbicam::input::{InputEvent, InputProcessor};
//! use orbicam::options::Options;
//!
//! let options = Options::default();
//! let rig = CameraRig {
//!     lens_offset: Vec3::new(0.0, 40.0, 40.0),
//!     lens_rotation: Quat::from_rotation_x(-45_f32.to_radians()),
//!     ..CameraRig::default()
//! };
//! let mut controller = CameraController::new(&options.camera, rig);
//! let mut input = InputProcessor::with_key_bindings(options.keybindings);
//!
//! for action in input.handle_event(InputEvent::Scroll { delta: 1.0 }) {
//!     controller.execute(action);
//! }
//! controller.tick(1.0 / 60.0);
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;

pub use camera::{CameraAction, CameraActions, CameraController};
pub use error::CameraError;
pub use input::{InputEvent, InputProcessor, MouseButton};
pub use options::Options;
