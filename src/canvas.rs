// The render target plus its retained list of paints.
// draw() keeps a cached composite of every paint below the lowest modified
// one, so a drag only re-rasterizes the stroke on top. Pictures are always
// rasterized whole, each into its own layer on the engine's workers, so the
// output does not depend on the thread count.

use crate::engine::Engine;
use crate::error::Error;
use crate::picture::Picture;
use crate::shape::Shape;
use crate::types::FrameBuffer;
use resvg::tiny_skia::{Color, Pixmap, PixmapPaint, Transform};

pub enum Paint {
    Shape(Shape),
    Picture(Picture),
}

impl From<Shape> for Paint {
    fn from(s: Shape) -> Self {
        Paint::Shape(s)
    }
}

impl From<Picture> for Paint {
    fn from(p: Picture) -> Self {
        Paint::Picture(p)
    }
}

/// Handle to a paint owned by the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PaintId(usize);

/// What the last draw() had to rasterize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub paints: usize,
    pub pictures: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Synced,
    Drawing,
}

struct Entry {
    paint: Paint,
    dirty: bool, // modified since the last draw
}

pub struct Canvas {
    engine: Engine,
    target: Pixmap,
    base: Pixmap,    // composite of entries[..base_len]
    base_len: usize,
    entries: Vec<Entry>,
    status: Status,
    stats: DrawStats,
}

impl Canvas {
    pub fn new(engine: Engine, width: u32, height: u32) -> Result<Self, Error> {
        let target = Pixmap::new(width, height)
            .ok_or_else(|| Error::Target(format!("invalid target size {width}x{height}")))?;
        let base = target.clone();
        Ok(Self {
            engine,
            target,
            base,
            base_len: 0,
            entries: Vec::new(),
            status: Status::Synced,
            stats: DrawStats::default(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a paint on top of everything pushed so far.
    pub fn push(&mut self, paint: impl Into<Paint>) -> PaintId {
        self.entries.push(Entry { paint: paint.into(), dirty: true });
        PaintId(self.entries.len() - 1)
    }

    /// Edit a shape in place. Call update() afterwards so draw() sees it.
    pub fn shape_mut(&mut self, id: PaintId) -> Option<&mut Shape> {
        match self.entries.get_mut(id.0).map(|e| &mut e.paint) {
            Some(Paint::Shape(s)) => Some(s),
            _ => None,
        }
    }

    /// Mark a paint as modified so the next draw rasterizes it again.
    pub fn update(&mut self, id: PaintId) -> bool {
        match self.entries.get_mut(id.0) {
            Some(entry) => {
                entry.dirty = true;
                true
            }
            None => false,
        }
    }

    pub fn is_dirty(&self, id: PaintId) -> bool {
        self.entries.get(id.0).is_some_and(|e| e.dirty)
    }

    pub fn last_stats(&self) -> DrawStats {
        self.stats
    }

    /// Rasterize into the target. Must be followed by sync().
    pub fn draw(&mut self) -> Result<(), Error> {
        if self.status == Status::Drawing {
            return Err(Error::InsufficientCondition);
        }
        self.status = Status::Drawing;

        let first_dirty = self
            .entries
            .iter()
            .position(|e| e.dirty)
            .unwrap_or(self.entries.len());

        // A paint already inside the cache changed: rebuild it from scratch.
        if self.base_len > first_dirty {
            self.base.fill(Color::TRANSPARENT);
            self.base_len = 0;
        }

        let mut stats = DrawStats::default();
        compose(&self.engine, &self.entries[self.base_len..first_dirty], &mut self.base, &mut stats);
        self.base_len = first_dirty;

        self.target.data_mut().copy_from_slice(self.base.data());
        compose(&self.engine, &self.entries[first_dirty..], &mut self.target, &mut stats);

        for entry in &mut self.entries {
            entry.dirty = false;
        }
        self.stats = stats;
        Ok(())
    }

    /// Wait for the draw cycle to finish. Layer jobs already block inside
    /// draw(), so this only closes the cycle.
    pub fn sync(&mut self) {
        self.status = Status::Synced;
    }

    /// Remove every paint.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.base.fill(Color::TRANSPARENT);
        self.base_len = 0;
    }

    /// Copy the target into the window buffer as 0x00RRGGBB. Both sides use
    /// a top-left origin, so rows go across unflipped.
    pub fn blit(&self, fb: &mut FrameBuffer) {
        let w = (self.target.width() as usize).min(fb.width);
        let h = (self.target.height() as usize).min(fb.height);
        let src_w = self.target.width() as usize;
        let src = self.target.pixels();

        for y in 0..h {
            let src_row = &src[y * src_w..y * src_w + w];
            let dst_row = &mut fb.pixels[y * fb.width..y * fb.width + w];
            for (dst, px) in dst_row.iter_mut().zip(src_row) {
                let c = px.demultiply();
                *dst = ((c.red() as u32) << 16) | ((c.green() as u32) << 8) | c.blue() as u32;
            }
        }
    }
}

/// Draw `entries` in order onto `dst`. Pictures are rasterized up front,
/// one full-size layer each, on the engine's workers.
fn compose(engine: &Engine, entries: &[Entry], dst: &mut Pixmap, stats: &mut DrawStats) {
    if entries.is_empty() {
        return;
    }
    let (width, height) = (dst.width(), dst.height());

    let mut layers: Vec<(usize, Option<Pixmap>)> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| matches!(e.paint, Paint::Picture(_)))
        .map(|(i, _)| (i, Pixmap::new(width, height)))
        .collect();

    engine.run(&mut layers, |_, (i, layer)| {
        if let (Paint::Picture(picture), Some(layer)) = (&entries[*i].paint, layer) {
            picture.render(&mut layer.as_mut());
        }
    });

    let mut layers = layers.into_iter();
    for entry in entries {
        match &entry.paint {
            Paint::Shape(shape) => shape.render(&mut dst.as_mut(), Transform::identity()),
            Paint::Picture(_) => {
                if let Some((_, Some(layer))) = layers.next() {
                    dst.draw_pixmap(
                        0,
                        0,
                        layer.as_ref(),
                        &PixmapPaint::default(),
                        Transform::identity(),
                        None,
                    );
                }
                stats.pictures += 1;
            }
        }
        stats.paints += 1;
    }
}
