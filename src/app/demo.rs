use std::cell::RefCell;
use std::rc::Rc;

use glam::Mat4;

use super::App;
use crate::camera::{Camera, CameraController, FrameTransforms};
use crate::input::{CameraCommand, InputEvent, InputProcessor};
use crate::options::Options;

/// The interactive demo: one camera, the drag controller bound to it, and
/// the input processor feeding both.
///
/// The demo is the only strong owner of its camera; the controller holds a
/// weak handle to it.
#[derive(Debug)]
pub struct OrbitDemo {
    options: Options,
    camera: Rc<RefCell<Camera>>,
    controller: CameraController,
    input: InputProcessor,
    model: Mat4,
}

impl OrbitDemo {
    /// Set up the camera and controller from `options`.
    ///
    /// The aspect ratio starts at 1 until [`App::init`] reports the real
    /// framebuffer size.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let camera = Rc::new(RefCell::new(options.camera.build_camera(1.0)));
        let mut controller =
            CameraController::with_sensitivity(options.controls.rotate_sensitivity);
        controller.set_camera(&camera);
        let input = InputProcessor::new(options.controls.scroll_divisor);

        Self {
            options,
            camera,
            controller,
            input,
            model: Mat4::IDENTITY,
        }
    }

    /// Snapshot of the current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        *self.camera.borrow()
    }

    /// The drag controller.
    #[must_use]
    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    /// Options the demo was created with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the model matrix of the drawn object.
    pub fn set_model(&mut self, model: Mat4) {
        self.model = model;
    }

    /// Apply one camera command, honoring the enabled controls.
    pub fn execute(&mut self, cmd: CameraCommand) {
        let controls = &self.options.controls;
        match cmd {
            CameraCommand::BeginDrag { x, y } if controls.orbit => {
                self.controller.lmb_pressed(x, y);
            }
            CameraCommand::EndDrag { x, y } => {
                self.controller.lmb_released(x, y);
            }
            CameraCommand::Drag { x, y } => self.controller.mouse_moved(x, y),
            CameraCommand::Zoom { offset } if controls.zoom => {
                let mut camera = self.camera.borrow_mut();
                camera.zoom(offset);
                log::trace!("zoom {offset:+.4} -> fov {:.2}°", camera.fov().to_degrees());
            }
            CameraCommand::BeginDrag { .. } | CameraCommand::Zoom { .. } => {
                log::trace!("{cmd:?} ignored: control disabled");
            }
        }
    }
}

impl App for OrbitDemo {
    fn init(&mut self, width: u32, height: u32) {
        let aspect = aspect_ratio(width, height).unwrap_or(1.0);
        let _ = self
            .camera
            .replace(self.options.camera.build_camera(aspect));
        log::info!(
            "orbit demo ready: {width}x{height}, eye {:?}, target {:?}",
            self.options.camera.eye,
            self.options.camera.target
        );
    }

    fn update(&mut self) -> FrameTransforms {
        FrameTransforms::from_camera(&self.camera.borrow(), self.model)
    }

    fn resize(&mut self, width: u32, height: u32) {
        if !self.options.controls.track_resize {
            return;
        }
        match aspect_ratio(width, height) {
            Some(aspect) => {
                self.camera.borrow_mut().set_aspect(aspect);
                log::debug!("resized to {width}x{height}, aspect {aspect:.3}");
            }
            None => log::debug!("ignoring degenerate size {width}x{height}"),
        }
    }

    fn handle_input(&mut self, event: InputEvent) {
        if let Some(cmd) = self.input.handle_event(event) {
            self.execute(cmd);
        }
    }
}

/// Width over height, `None` for a zero-area framebuffer (minimized window).
fn aspect_ratio(width: u32, height: u32) -> Option<f32> {
    (width > 0 && height > 0).then_some(width as f32 / height as f32)
}
