// What you SEE:
// • An 800x800 window with the picture (tiger.svg by default) on white.
// • Hold Left Mouse and drag: red freehand strokes are drawn on top.
// • ESC or closing the window quits.
// • `svg-sketch 4` renders with 4 worker threads; `--demo` adds a random walk.

use clap::Parser;
use svg_sketch::app;
use svg_sketch::config::{Args, Config};
use svg_sketch::error::Error;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_args(Args::parse());
    log::debug!("{config:?}");

    app::run(&config)
}
