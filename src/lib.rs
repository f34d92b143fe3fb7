//! Show an SVG in a window and sketch freehand strokes on top of it.
//!
//! `minifb` owns the window and the pixel blit, `resvg` parses and
//! rasterizes the picture, and the [`canvas::Canvas`] keeps the retained
//! list of paints that is redrawn whenever the view is invalidated.

pub mod app;
#[cfg(any(test, feature = "benchmark"))]
pub mod bench;
pub mod canvas;
pub mod config;
pub mod demo;
pub mod engine;
pub mod error;
pub mod input;
pub mod picture;
pub mod shape;
pub mod stroke;
pub mod timer;
pub mod types;
pub mod window;
