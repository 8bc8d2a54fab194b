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

//! Orbit camera and interactive controller for 3D teaching demos.
//!
//! The camera keeps its orientation as an explicit orthonormal basis, builds
//! its view matrix directly from that basis, and zooms on a logistic scale
//! that keeps the field of view strictly inside `(0, π)`. A small drag state
//! machine turns left-button drags into orbit rotations around the look-at
//! target.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - viewpoint state, view and projection matrices
//! - [`camera::CameraController`] - drag-to-orbit state machine
//! - [`app::OrbitDemo`] - camera, controller and input wired together
//! - [`options::Options`] - startup configuration (camera placement,
//!   projection, enabled controls)
//!
//! # Frame flow
//!
//! The host forwards pointer events to an [`app::App`], which routes them
//! through the [`input::InputProcessor`] into the controller and camera.
//! Once per frame the host calls [`app::App::update`] and uploads the
//! resulting [`camera::FrameTransforms`].

pub mod app;
pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use app::{App, DemoPreset, OrbitDemo};
pub use camera::{Camera, CameraController, FrameTransforms};
pub use error::OrbitError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
