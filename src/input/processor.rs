//! Converts raw pointer events into camera commands.
//!
//! The `InputProcessor` owns the transient input state the camera
//! controller does not track itself: the last known cursor position (button
//! events carry none) and the scroll scaling factor.

use glam::Vec2;

use super::command::CameraCommand;
use super::event::{InputEvent, MouseButton};

/// Converts raw window events into [`CameraCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     demo.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InputProcessor {
    /// Last cursor position in physical pixels.
    cursor: Vec2,
    /// Raw scroll offsets are divided by this.
    scroll_divisor: f32,
}

impl InputProcessor {
    /// Create a processor that divides scroll offsets by `scroll_divisor`.
    #[must_use]
    pub fn new(scroll_divisor: f32) -> Self {
        Self {
            cursor: Vec2::ZERO,
            scroll_divisor,
        }
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Current scroll scaling divisor.
    #[must_use]
    pub fn scroll_divisor(&self) -> f32 {
        self.scroll_divisor
    }

    /// Change the scroll scaling divisor.
    pub fn set_scroll_divisor(&mut self, scroll_divisor: f32) {
        self.scroll_divisor = scroll_divisor;
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
                Some(CameraCommand::Drag { x, y })
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => Some(CameraCommand::Zoom {
                offset: delta / self.scroll_divisor,
            }),
        }
    }

    /// Only the left button drives the camera; it reports the last cursor
    /// position as its location.
    fn handle_mouse_button(
        &self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<CameraCommand> {
        if button != MouseButton::Left {
            return None;
        }

        let Vec2 { x, y } = self.cursor;
        if pressed {
            Some(CameraCommand::BeginDrag { x, y })
        } else {
            Some(CameraCommand::EndDrag { x, y })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_moves_become_drags() {
        let mut input = InputProcessor::new(30.0);
        let cmd = input.handle_event(InputEvent::CursorMoved { x: 4.0, y: 2.0 });
        assert_eq!(cmd, Some(CameraCommand::Drag { x: 4.0, y: 2.0 }));
        assert_eq!(input.cursor(), Vec2::new(4.0, 2.0));
    }

    #[test]
    fn left_button_uses_last_cursor_position() {
        let mut input = InputProcessor::new(30.0);
        let _ = input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 20.0 });

        let press = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        assert_eq!(press, Some(CameraCommand::BeginDrag { x: 10.0, y: 20.0 }));

        let _ = input.handle_event(InputEvent::CursorMoved { x: 15.0, y: 25.0 });
        let release = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        assert_eq!(release, Some(CameraCommand::EndDrag { x: 15.0, y: 25.0 }));
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut input = InputProcessor::new(30.0);
        for button in [MouseButton::Right, MouseButton::Middle, MouseButton::Other] {
            let cmd = input.handle_event(InputEvent::MouseButton {
                button,
                pressed: true,
            });
            assert_eq!(cmd, None);
        }
    }

    #[test]
    fn scroll_is_scaled_by_divisor() {
        let mut input = InputProcessor::new(30.0);
        let cmd = input.handle_event(InputEvent::Scroll { delta: 3.0 });
        assert_eq!(cmd, Some(CameraCommand::Zoom { offset: 0.1 }));

        input.set_scroll_divisor(2.0);
        let cmd = input.handle_event(InputEvent::Scroll { delta: -1.0 });
        assert_eq!(cmd, Some(CameraCommand::Zoom { offset: -0.5 }));
    }
}
