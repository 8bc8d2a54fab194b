//! Standalone demo window backed by winit.
//!
//! The viewer owns the event loop and forwards window events to an
//! [`App`]: framebuffer resizes, cursor motion, left-button presses and
//! wheel scrolls. Each redraw asks the app for the frame's transforms;
//! drawing them is left to the rendering layer.
//!
//! ```no_run
//! # use orbitview::{DemoPreset, Viewer};
//! Viewer::builder()
//!     .with_options(DemoPreset::PhongDiffuse.options())
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{sync::Arc, time::Instant};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    app::{App, OrbitDemo},
    error::OrbitError,
    options::Options,
    InputEvent, MouseButton,
};

/// Pixel scroll deltas (touchpads) are scaled to roughly one line.
const PIXELS_PER_LINE: f32 = 0.01;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "orbitview", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "orbitview".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window running one demo.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run an [`OrbitDemo`] built from the configured
    /// options. Blocks until the window is closed.
    pub fn run(self) -> Result<(), OrbitError> {
        let demo = OrbitDemo::new(self.options.clone());
        self.run_with(demo)
    }

    /// Open the window and drive `app` with its events. Blocks until the
    /// window is closed.
    pub fn run_with<A: App>(self, app: A) -> Result<(), OrbitError> {
        let event_loop =
            EventLoop::new().map_err(|e| OrbitError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut host = ViewerApp {
            window: None,
            app,
            title: self.title,
            last_frame_time: Instant::now(),
            frames: 0,
        };

        event_loop
            .run_app(&mut host)
            .map_err(|e| OrbitError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp<A> {
    window: Option<Arc<Window>>,
    app: A,
    title: String,
    last_frame_time: Instant,
    frames: u64,
}

/// Framebuffer size, never zero in either dimension.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl<A: App> ViewerApp<A> {
    fn request_redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        self.frames += 1;

        let frame = self.app.update();
        log::trace!(
            "frame {} ({dt:.4}s): pvm {:?}",
            self.frames,
            frame.pvm()
        );
    }
}

impl<A: App> ApplicationHandler for ViewerApp<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes().with_title(self.title.clone());
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        log::info!("window created: {vp_w}x{vp_h}");
        self.app.init(vp_w, vp_h);

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            log::info!("closing after {} frames", self.frames);
            event_loop.exit();
            return;
        }

        if self.window.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                self.app.resize(size.width, size.height);
                self.request_redraw();
            }

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::MouseInput { button, state, .. } => {
                self.app.handle_input(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
                self.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.app.handle_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
                self.request_redraw();
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y as f32 * PIXELS_PER_LINE
                    }
                };
                self.app.handle_input(InputEvent::Scroll {
                    delta: scroll_delta,
                });
                self.request_redraw();
            }

            _ => {}
        }
    }
}
