// Freehand stroke bookkeeping for the mouse handlers.
// While the left button is held there is exactly one "current" shape on the
// canvas that drag events extend. Long strokes are chopped into several
// shapes so a single path never grows past MAX_SEGMENTS_PER_SHAPE.

use crate::canvas::{Canvas, PaintId};
use crate::shape::Shape;
use crate::types::{Point, Rgba};

pub const MAX_SEGMENTS_PER_SHAPE: usize = 512;
pub const STROKE_COLOR: Rgba = Rgba::RED;
pub const STROKE_WIDTH: f32 = 4.0;

#[derive(Debug, Default)]
pub struct StrokeRecorder {
    current: Option<PaintId>, // None while no button is held
    last: Option<Point>,
    segments: usize,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Segments appended to the current shape.
    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn current(&self) -> Option<PaintId> {
        self.current
    }

    pub fn last_point(&self) -> Option<Point> {
        self.last
    }

    /// Mouse-down: start a new stroke at the click point.
    pub fn begin(&mut self, canvas: &mut Canvas, p: Point) {
        self.current = Some(push_stroke(canvas, p));
        self.last = Some(p);
        self.segments = 0;
    }

    /// Drag: extend the current stroke to `p`. Returns true when the view
    /// needs a redraw.
    pub fn extend(&mut self, canvas: &mut Canvas, p: Point) -> bool {
        let (Some(id), Some(last)) = (self.current, self.last) else {
            return false;
        };

        if self.segments < MAX_SEGMENTS_PER_SHAPE {
            let Some(shape) = canvas.shape_mut(id) else {
                return false;
            };
            shape.line_to(p.x, p.y);
            canvas.update(id);
            self.segments += 1;
        } else {
            // Current shape is full: continue in a fresh one from the last point.
            let next = push_stroke(canvas, last);
            if let Some(shape) = canvas.shape_mut(next) {
                shape.line_to(p.x, p.y);
            }
            self.current = Some(next);
            self.segments = 0;
        }

        self.last = Some(p);
        true
    }

    /// Mouse-up: drop the handle; the finished shape stays on the canvas.
    pub fn end(&mut self) {
        self.current = None;
        self.segments = 0;
    }
}

fn push_stroke(canvas: &mut Canvas, start: Point) -> PaintId {
    let mut shape = Shape::new();
    shape.move_to(start.x, start.y);
    shape.stroke_color(STROKE_COLOR.r, STROKE_COLOR.g, STROKE_COLOR.b, STROKE_COLOR.a);
    shape.stroke_width(STROKE_WIDTH);
    canvas.push(shape)
}
