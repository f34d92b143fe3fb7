// Demo content: a long yellow random walk from the window center.
// Handy for eyeballing how draw time grows with path length.

use crate::shape::Shape;
use crate::types::Rgba;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const WALK_STEPS: usize = 1000;

pub fn random_walk(seed: u64, width: u32, height: u32) -> Shape {
    let mut rng = StdRng::seed_from_u64(seed);
    let (w, h) = (width as i32, height as i32);
    let (mut x, mut y) = (w / 2, h / 2);

    let mut shape = Shape::new();
    shape.move_to(x as f32, y as f32);
    let c = Rgba::YELLOW;
    shape.stroke_color(c.r, c.g, c.b, c.a);
    shape.stroke_width(4.0);

    for _ in 0..WALK_STEPS {
        x += rng.gen_range(-50..50);
        y += rng.gen_range(-50..50);
        // Wandered off: jump that axis back to the center.
        if x > w || x < 0 {
            x = w / 2;
        }
        if y > h || y < 0 {
            y = h / 2;
        }
        shape.line_to(x as f32, y as f32);
    }
    shape
}
