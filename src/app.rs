// Application state and the handlers the event loop calls:
// display (redraw), mouse, timer and close.

use crate::canvas::Canvas;
use crate::config::Config;
use crate::demo;
use crate::engine::Engine;
use crate::error::Error;
use crate::input::{InputTracker, MouseEvent};
use crate::picture::Picture;
use crate::shape::Shape;
use crate::stroke::StrokeRecorder;
use crate::timer::Invalidation;
use crate::types::{FrameBuffer, Rgba};
use crate::window::Viewer;

const DEMO_SEED: u64 = 0x5eed;

pub struct App {
    canvas: Option<Canvas>, // None when the engine failed to start
    strokes: StrokeRecorder,
    invalidation: Invalidation,
    frame: FrameBuffer,
}

impl App {
    /// Engine, target, white background, picture. Engine and picture
    /// failures are logged and the app carries on with less to show.
    pub fn new(config: &Config) -> Self {
        let frame = FrameBuffer::new(config.width as usize, config.height as usize);
        let mut invalidation = Invalidation::new();

        let canvas = match create_canvas(config) {
            Ok(canvas) => Some(canvas),
            Err(e) => {
                log::error!("Rendering disabled: {e}");
                None
            }
        };
        if canvas.is_some() {
            invalidation.request();
        }

        Self { canvas, strokes: StrokeRecorder::new(), invalidation, frame }
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    pub fn strokes(&self) -> &StrokeRecorder {
        &self.strokes
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn on_mouse(&mut self, event: MouseEvent) {
        let Some(canvas) = self.canvas.as_mut() else { return };
        match event {
            MouseEvent::Down(p) => self.strokes.begin(canvas, p),
            MouseEvent::Drag(p) => {
                if self.strokes.extend(canvas, p) {
                    self.invalidation.request();
                }
            }
            MouseEvent::Up => self.strokes.end(),
        }
    }

    /// One timer tick: true when the frame should be repainted.
    pub fn on_timer(&mut self) -> bool {
        self.invalidation.take()
    }

    /// Rasterize the canvas and copy it into the window frame.
    pub fn on_display(&mut self) -> &FrameBuffer {
        #[cfg(feature = "benchmark")]
        let timer = crate::bench::FrameTimer::start();

        if let Some(canvas) = self.canvas.as_mut() {
            match canvas.draw() {
                Ok(()) => {
                    canvas.sync();
                    canvas.blit(&mut self.frame);
                }
                Err(e) => log::warn!("Skipping frame: {e}"),
            }
        }

        #[cfg(feature = "benchmark")]
        {
            let elapsed = timer.finish();
            println!(
                "{}",
                crate::bench::frame_line(self.strokes.segments(), elapsed, &crate::bench::vm_size())
            );
        }

        &self.frame
    }

    /// Window closing: drop every paint, then the engine.
    pub fn on_close(&mut self) {
        if let Some(mut canvas) = self.canvas.take() {
            canvas.clear();
        }
        self.strokes.end();
    }
}

fn create_canvas(config: &Config) -> Result<Canvas, Error> {
    let engine = Engine::init(config.threads)?;
    let mut canvas = Canvas::new(engine, config.width, config.height)?;
    let (w, h) = (config.width as f32, config.height as f32);

    let mut background = Shape::new();
    background.append_rect(0.0, 0.0, w, h);
    let white = Rgba::WHITE;
    background.fill(white.r, white.g, white.b, white.a);
    canvas.push(background);

    match Picture::load(&config.file) {
        Ok(mut picture) => {
            picture.size(w, h);
            canvas.push(picture);
            log::info!("Loaded {}", config.file.display());
        }
        Err(e) => log::warn!("No picture: {e}"),
    }

    if config.demo {
        canvas.push(demo::random_walk(DEMO_SEED, config.width, config.height));
    }

    Ok(canvas)
}

/// Open the window and run until it is closed or Escape is pressed.
pub fn run(config: &Config) -> Result<(), Error> {
    let mut viewer = Viewer::new(
        &config.title,
        config.width as usize,
        config.height as usize,
        config.fps,
    )?;

    log::info!("Using {} threads", config.threads);
    let mut app = App::new(config);
    let mut input = InputTracker::new();

    while viewer.is_open() && !viewer.esc_pressed() {
        if let Some(event) = input.poll(viewer.mouse_pos(), viewer.left_mouse_down()) {
            app.on_mouse(event);
        }

        if app.on_timer() {
            viewer.present(app.on_display())?;
        } else {
            viewer.pump();
        }
    }

    app.on_close();
    Ok(())
}
