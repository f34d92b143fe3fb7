// minifb is polled, not callback driven. InputTracker turns the polled
// left-button state and cursor position into press/drag/release events.

use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MouseEvent {
    Down(Point),
    Drag(Point),
    Up,
}

#[derive(Debug, Default)]
pub struct InputTracker {
    held: bool,
    last: Option<Point>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one poll of the window. `pos` is None when the cursor is outside.
    pub fn poll(&mut self, pos: Option<Point>, left_down: bool) -> Option<MouseEvent> {
        match (self.held, left_down) {
            (false, true) => {
                // A press only counts when we know where it happened.
                let p = pos?;
                self.held = true;
                self.last = Some(p);
                Some(MouseEvent::Down(p))
            }
            (true, false) => {
                self.held = false;
                self.last = None;
                Some(MouseEvent::Up)
            }
            (true, true) => {
                let p = pos?;
                if self.last == Some(p) {
                    return None;
                }
                self.last = Some(p);
                Some(MouseEvent::Drag(p))
            }
            (false, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_drag_release_sequence() {
        let mut t = InputTracker::new();
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 4.0);

        assert_eq!(t.poll(Some(a), false), None);
        assert_eq!(t.poll(Some(a), true), Some(MouseEvent::Down(a)));
        assert_eq!(t.poll(Some(a), true), None); // no motion
        assert_eq!(t.poll(Some(b), true), Some(MouseEvent::Drag(b)));
        assert_eq!(t.poll(None, true), None); // left the window
        assert_eq!(t.poll(Some(b), false), Some(MouseEvent::Up));
        assert_eq!(t.poll(Some(b), false), None);
    }

    #[test]
    fn drag_continues_past_the_window_edge() {
        let mut t = InputTracker::new();
        let inside = Point::new(5.0, 5.0);
        let outside = Point::new(-12.0, 830.0);
        assert_eq!(t.poll(Some(inside), true), Some(MouseEvent::Down(inside)));
        assert_eq!(t.poll(Some(outside), true), Some(MouseEvent::Drag(outside)));
        assert_eq!(t.poll(Some(inside), true), Some(MouseEvent::Drag(inside)));
    }

    #[test]
    fn press_outside_window_is_ignored() {
        let mut t = InputTracker::new();
        assert_eq!(t.poll(None, true), None);
        let p = Point::new(5.0, 5.0);
        assert_eq!(t.poll(Some(p), true), Some(MouseEvent::Down(p)));
    }
}
