// Window glue: minifb owns the OS window, the event pump, the frame-rate
// limit and the pixel blit. Nothing here draws.

use crate::error::Error;
use crate::types::{FrameBuffer, Point};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

const WINDOW_POS: (isize, isize) = (100, 100);

pub struct Viewer {
    window: Window, // the on-screen window you see
}

impl Viewer {
    /// Open a fixed-size window at the usual spot and cap its update rate.
    pub fn new(title: &str, width: usize, height: usize, fps: u32) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_position(WINDOW_POS.0, WINDOW_POS.1);
        window.set_target_fps(fps as usize);
        Ok(Self { window })
    }

    /// Push a new frame to the screen (also pumps events).
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Pump events and wait out the frame interval, keeping the last frame.
    pub fn pump(&mut self) {
        self.window.update();
    }

    /// Returns false once the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Cursor position in window pixels. While the left button is held the
    /// position keeps coming even outside the window, so a drag that leaves
    /// and re-enters stays continuous; otherwise None outside the window.
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(mouse_mode(self.left_mouse_down()))
            .map(|(x, y)| Point::new(x, y))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }
}

fn mouse_mode(dragging: bool) -> MouseMode {
    if dragging { MouseMode::Pass } else { MouseMode::Discard }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_tracks_cursor_outside_the_window() {
        assert!(matches!(mouse_mode(true), MouseMode::Pass));
        assert!(matches!(mouse_mode(false), MouseMode::Discard));
    }
}
