//! Shared math helpers for the camera.
//!
//! Axis-angle rotation matrices and the logistic/logit pair used by the
//! field-of-view zoom.

pub mod logistic;
pub mod rotation;
