// A loaded document: an SVG tree (parsed by usvg) or a decoded raster image.
// Sizing fits the content into the requested box, keeping its aspect ratio.

use crate::error::Error;
use resvg::tiny_skia::{
    ColorU8, FilterQuality, IntSize, Pixmap, PixmapMut, PixmapPaint, Transform,
};
use resvg::usvg;
use std::path::Path;

enum Source {
    Vector(usvg::Tree),
    Raster(Pixmap),
}

pub struct Picture {
    source: Source,
    intrinsic: (f32, f32),
    size: Option<(f32, f32)>, // requested display size; None = intrinsic
}

impl Picture {
    /// Load a picture from disk. `.svg`/`.svgz` go through usvg, everything
    /// else is handed to the `image` decoders.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let is_svg = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("svg") || e.eq_ignore_ascii_case("svgz"))
            .unwrap_or(false);

        if is_svg {
            let data = std::fs::read(path)
                .map_err(|e| Error::PictureLoad(format!("{}: {e}", path.display())))?;
            Self::from_svg_data(&data)
        } else {
            let img = image::open(path)
                .map_err(|e| Error::PictureLoad(format!("{}: {e}", path.display())))?;
            Self::from_rgba(img.to_rgba8())
        }
    }

    /// Parse an in-memory SVG document (gzip-compressed data is accepted too).
    pub fn from_svg_data(data: &[u8]) -> Result<Self, Error> {
        let tree = usvg::Tree::from_data(data, &usvg::Options::default())
            .map_err(|e| Error::PictureLoad(format!("SVG parse: {e}")))?;
        let size = tree.size();
        Ok(Self {
            intrinsic: (size.width(), size.height()),
            source: Source::Vector(tree),
            size: None,
        })
    }

    /// Wrap a decoded RGBA image. tiny-skia wants premultiplied pixels.
    pub fn from_rgba(img: image::RgbaImage) -> Result<Self, Error> {
        let (w, h) = img.dimensions();
        let size = IntSize::from_wh(w, h)
            .ok_or_else(|| Error::PictureLoad(format!("empty image {w}x{h}")))?;

        let mut data = img.into_raw();
        for px in data.chunks_exact_mut(4) {
            let c = ColorU8::from_rgba(px[0], px[1], px[2], px[3]).premultiply();
            px.copy_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        let pixmap = Pixmap::from_vec(data, size)
            .ok_or_else(|| Error::PictureLoad("raster buffer size mismatch".into()))?;

        Ok(Self {
            intrinsic: (w as f32, h as f32),
            source: Source::Raster(pixmap),
            size: None,
        })
    }

    /// Size the content was authored at.
    pub fn intrinsic_size(&self) -> (f32, f32) {
        self.intrinsic
    }

    /// Resize the content to fit `width x height`.
    pub fn size(&mut self, width: f32, height: f32) {
        self.size = Some((width, height));
    }

    /// Content -> box transform: uniform scale, centered on the short axis.
    pub fn fit_transform(&self) -> Transform {
        let (iw, ih) = self.intrinsic;
        let Some((w, h)) = self.size else {
            return Transform::identity();
        };
        if iw <= 0.0 || ih <= 0.0 {
            return Transform::identity();
        }
        let scale = (w / iw).min(h / ih);
        let tx = (w - iw * scale) * 0.5;
        let ty = (h - ih * scale) * 0.5;
        Transform::from_row(scale, 0.0, 0.0, scale, tx, ty)
    }

    /// Rasterize the whole picture into `layer` in a single pass.
    pub fn render(&self, layer: &mut PixmapMut<'_>) {
        let transform = self.fit_transform();
        match &self.source {
            Source::Vector(tree) => resvg::render(tree, transform, layer),
            Source::Raster(pixmap) => {
                let paint = PixmapPaint {
                    quality: FilterQuality::Bilinear,
                    ..PixmapPaint::default()
                };
                layer.draw_pixmap(0, 0, pixmap.as_ref(), &paint, transform, None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50" viewBox="0 0 100 50">
        <rect x="0" y="0" width="100" height="50" fill="#0000ff"/>
    </svg>"##;

    #[test]
    fn svg_reports_intrinsic_size() {
        let pic = Picture::from_svg_data(SQUARE.as_bytes()).unwrap();
        assert_eq!(pic.intrinsic_size(), (100.0, 50.0));
        assert_eq!(pic.fit_transform(), Transform::identity());
    }

    #[test]
    fn fit_keeps_aspect_and_centers() {
        let mut pic = Picture::from_svg_data(SQUARE.as_bytes()).unwrap();
        pic.size(200.0, 200.0);
        let t = pic.fit_transform();
        assert_eq!((t.sx, t.sy), (2.0, 2.0));
        assert_eq!((t.tx, t.ty), (0.0, 50.0));
    }

    #[test]
    fn garbage_is_a_load_error() {
        let err = Picture::from_svg_data(b"definitely not svg").err().unwrap();
        assert!(matches!(err, Error::PictureLoad(_)));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = Picture::load("no/such/dir/tiger.svg").err().unwrap();
        assert!(matches!(err, Error::PictureLoad(_)));
        let err = Picture::load("no/such/dir/tiger.png").err().unwrap();
        assert!(matches!(err, Error::PictureLoad(_)));
    }

    #[test]
    fn raster_is_premultiplied() {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([200, 100, 50, 128]));
        let pic = Picture::from_rgba(img).unwrap();
        assert_eq!(pic.intrinsic_size(), (2.0, 2.0));

        let mut layer = Pixmap::new(2, 2).unwrap();
        pic.render(&mut layer.as_mut());
        let px = layer.pixel(0, 0).unwrap().demultiply();
        assert!(px.red().abs_diff(200) <= 2);
        assert!(px.alpha().abs_diff(128) <= 2);
    }

    #[test]
    fn sized_picture_fills_the_box() {
        // Blue only in the lower half of a 10x20 document.
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="20">
            <rect x="0" y="10" width="10" height="10" fill="#0000ff"/>
        </svg>"##;
        let mut pic = Picture::from_svg_data(svg.as_bytes()).unwrap();
        pic.size(20.0, 40.0);

        let mut layer = Pixmap::new(20, 40).unwrap();
        pic.render(&mut layer.as_mut());
        assert_eq!(layer.pixel(10, 10).unwrap().alpha(), 0);
        let px = layer.pixel(10, 30).unwrap();
        assert_eq!((px.blue(), px.alpha()), (255, 255));
    }
}
