//! Host-facing demo applications.
//!
//! A window host drives an [`App`] through a handful of callbacks and asks it
//! once per frame for the transforms to render with. [`OrbitDemo`] is the
//! implementation shared by every [`DemoPreset`].

mod demo;
mod preset;

pub use demo::OrbitDemo;
pub use preset::DemoPreset;

use crate::camera::FrameTransforms;
use crate::input::InputEvent;

/// Capabilities a window host needs from a demo.
pub trait App {
    /// Called once the window exists, with the framebuffer size in pixels.
    fn init(&mut self, width: u32, height: u32);

    /// Called once per frame; returns the transforms for this frame.
    fn update(&mut self) -> FrameTransforms;

    /// Framebuffer resized. Either dimension may be zero while minimized.
    fn resize(&mut self, width: u32, height: u32);

    /// Pointer and scroll callbacks.
    fn handle_input(&mut self, event: InputEvent);
}
