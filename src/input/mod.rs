//! Input handling: event types, camera commands, and the input processor
//! that converts raw window events into them.

/// Camera operations produced by the processor.
pub mod command;
/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into camera commands.
pub mod processor;

pub use command::CameraCommand;
pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;
