#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

use log::warn;
use pixels::{Pixels, SurfaceTexture};
use tokio::sync::watch;
use winit::dpi::LogicalSize;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

use crate::log_error;
use crate::result::ClientResult;
use crate::session::{SessionCommand, SharedFrame};
use crate::view::ViewState;

const SHUTDOWN_ACK_TIMEOUT: Duration = Duration::from_secs(2);

struct Screen {
    width: u32,
    height: u32,
    frame: SharedFrame,
}

/// Runs the window until the user closes it. Left-drag selects a region to
/// zoom into, right-click steps back out, Escape or closing the window
/// shuts the session down. Does not return on the happy path: winit takes
/// over the thread and exits the process when the loop stops.
pub fn run(
    mut view: ViewState,
    commands: watch::Sender<SessionCommand>,
    frame: SharedFrame,
    session_alive: Arc<AtomicBool>,
    shutdown_ack: Receiver<()>,
) -> ClientResult<()> {
    let viewport = view.viewport();
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let window = {
        let size = LogicalSize::new(viewport.width_px as f64, viewport.height_px as f64);
        WindowBuilder::new()
            .with_title("Mandelpool")
            .with_inner_size(size)
            .with_min_inner_size(LogicalSize::new(64.0, 64.0))
            .build(&event_loop)
            .unwrap()
    };

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(viewport.width_px, viewport.height_px, surface_texture)?
    };

    let mut screen = Screen {
        width: viewport.width_px,
        height: viewport.height_px,
        frame,
    };

    event_loop.run(move |event, _, control_flow| {
        // Draw the current frame
        if let Event::RedrawRequested(_) = event {
            screen.draw(pixels.frame_mut(), view.drag_rect());
            if let Err(err) = pixels.render() {
                log_error("pixels.render", err);
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // Handle input events
        if input.update(&event) {
            // Close events
            if input.key_pressed(VirtualKeyCode::Escape) || input.close_requested() {
                shut_down(&commands, &shutdown_ack);
                *control_flow = ControlFlow::Exit;
                return;
            }

            if !session_alive.load(Ordering::SeqCst) {
                warn!("Render session is gone, closing the window");
                *control_flow = ControlFlow::Exit;
                return;
            }

            // Resize the window
            if let Some(size) = input.window_resized() {
                if size.width > 0 && size.height > 0 {
                    if let Err(err) = pixels.resize_surface(size.width, size.height) {
                        log_error("pixels.resize_surface", err);
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    if (size.width, size.height) != (screen.width, screen.height) {
                        if let Err(err) = pixels.resize_buffer(size.width, size.height) {
                            log_error("pixels.resize_buffer", err);
                            *control_flow = ControlFlow::Exit;
                            return;
                        }
                        screen.resize(size.width, size.height);
                        view.resize(size.width, size.height);
                        let _ = commands.send(SessionCommand::Render(view.viewport()));
                    }
                }
            }

            // Zoom selection and history
            if let Some(position) = input.mouse() {
                view.track_cursor((position.0 as f64, position.1 as f64));
            }

            if input.mouse_pressed(0) {
                if let Some(position) = input.mouse() {
                    view.begin_drag((position.0 as f64, position.1 as f64));
                }
            }

            if input.mouse_released(0) {
                if let Some(next) = view.commit_zoom() {
                    let _ = commands.send(SessionCommand::Render(next));
                }
            }

            if input.mouse_pressed(1) {
                let next = view.pop_view();
                let _ = commands.send(SessionCommand::Render(next));
            }

            window.request_redraw();
        }
    })
}

/// Hands the sentinel to the session and waits for its acknowledgement, so
/// the pool sees a clean shutdown instead of a reset connection.
fn shut_down(commands: &watch::Sender<SessionCommand>, ack: &Receiver<()>) {
    let _ = commands.send(SessionCommand::Shutdown);
    if ack.recv_timeout(SHUTDOWN_ACK_TIMEOUT).is_err() {
        warn!("No shutdown acknowledgement from the render session");
    }
}

impl Screen {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Blits the latest frame into the RGBA buffer and outlines the
    /// in-progress selection. Black until the first frame arrives, or while
    /// the latest frame does not match the buffer dimensions yet.
    fn draw(&self, buffer: &mut [u8], selection: Option<((f64, f64), (f64, f64))>) {
        let frame = self.frame.lock().unwrap();
        let raster = frame
            .as_ref()
            .filter(|r| r.width_px == self.width && r.height_px == self.height);

        for (i, pixel) in buffer.chunks_exact_mut(4).enumerate() {
            let rgba = match raster {
                Some(raster) => {
                    let at = i * 3;
                    [
                        raster.data[at],
                        raster.data[at + 1],
                        raster.data[at + 2],
                        0xff,
                    ]
                }
                None => [0x0, 0x0, 0x0, 0xff],
            };
            pixel.copy_from_slice(&rgba);
        }
        drop(frame);

        if let Some((anchor, corner)) = selection {
            self.outline(buffer, anchor, corner);
        }
    }

    /// White one-pixel outline of the selection rectangle, clamped to the
    /// buffer.
    fn outline(&self, buffer: &mut [u8], anchor: (f64, f64), corner: (f64, f64)) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let clamp_x = |x: f64| (x.max(0.0) as u32).min(self.width - 1);
        let clamp_y = |y: f64| (y.max(0.0) as u32).min(self.height - 1);

        let x0 = clamp_x(anchor.0.min(corner.0));
        let x1 = clamp_x(anchor.0.max(corner.0));
        let y0 = clamp_y(anchor.1.min(corner.1));
        let y1 = clamp_y(anchor.1.max(corner.1));

        for x in x0..=x1 {
            self.paint(buffer, x, y0);
            self.paint(buffer, x, y1);
        }
        for y in y0..=y1 {
            self.paint(buffer, x0, y);
            self.paint(buffer, x1, y);
        }
    }

    fn paint(&self, buffer: &mut [u8], x: u32, y: u32) {
        let at = (y * self.width + x) as usize * 4;
        buffer[at..at + 3].copy_from_slice(&[0xff, 0xff, 0xff]);
    }
}
