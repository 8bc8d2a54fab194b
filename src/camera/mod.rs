//! Camera system for the demos.
//!
//! Provides an orbit camera with an explicit orthonormal basis, logistic
//! zoom, a drag controller, and the per-frame transform block built from
//! them.

/// Left-button drag controller that orbits a bound camera.
pub mod controller;
/// Core camera struct: basis, view and projection matrices.
pub mod core;
/// Per-frame transform block for uniform upload.
pub mod uniform;

pub use controller::CameraController;
pub use self::core::Camera;
pub use uniform::FrameTransforms;
