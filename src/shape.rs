// Editable vector path: the freehand strokes, the white background and the
// demo walk are all shapes. Rasterization itself is tiny-skia's job.

use crate::types::Rgba;
use resvg::tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, PathBuilder, PixmapMut, Rect, Stroke, Transform,
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Command {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Rect(f32, f32, f32, f32),
}

#[derive(Clone, Debug, Default)]
pub struct Shape {
    commands: Vec<Command>,
    fill: Option<Rgba>,
    stroke_color: Option<Rgba>,
    stroke_width: f32,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(Command::MoveTo(x, y));
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(Command::LineTo(x, y));
    }

    pub fn append_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(Command::Rect(x, y, w, h));
    }

    pub fn fill(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.fill = Some(Rgba::new(r, g, b, a));
    }

    pub fn stroke_color(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.stroke_color = Some(Rgba::new(r, g, b, a));
    }

    pub fn stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    /// Number of move-to/line-to points (rectangles not included).
    pub fn point_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::MoveTo(..) | Command::LineTo(..)))
            .count()
    }

    pub fn last_point(&self) -> Option<(f32, f32)> {
        self.commands.iter().rev().find_map(|c| match *c {
            Command::MoveTo(x, y) | Command::LineTo(x, y) => Some((x, y)),
            Command::Rect(..) => None,
        })
    }

    /// Fill then stroke into `target`. `transform` maps shape coordinates to
    /// target pixels.
    pub fn render(&self, target: &mut PixmapMut<'_>, transform: Transform) {
        let mut pb = PathBuilder::new();
        for cmd in &self.commands {
            match *cmd {
                Command::MoveTo(x, y) => pb.move_to(x, y),
                Command::LineTo(x, y) => pb.line_to(x, y),
                Command::Rect(x, y, w, h) => {
                    if let Some(rect) = Rect::from_xywh(x, y, w, h) {
                        pb.push_rect(rect);
                    }
                }
            }
        }
        // Fewer than two points: nothing to draw yet.
        let Some(path) = pb.finish() else { return };

        if let Some(color) = self.fill {
            let paint = solid(color);
            target.fill_path(&path, &paint, FillRule::Winding, transform, None);
        }

        if let Some(color) = self.stroke_color {
            if self.stroke_width > 0.0 {
                let paint = solid(color);
                let stroke = Stroke {
                    width: self.stroke_width,
                    line_cap: LineCap::Round,
                    line_join: LineJoin::Round,
                    ..Stroke::default()
                };
                target.stroke_path(&path, &paint, &stroke, transform, None);
            }
        }
    }
}

fn solid(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}
