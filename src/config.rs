// Command line and the resolved run configuration.

use clap::Parser;
use std::path::PathBuf;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 800;
pub const TITLE: &str = "minifb with resvg";

#[derive(Parser, Debug)]
#[command(about = "Show an SVG and sketch red strokes on top of it", long_about = None)]
pub struct Args {
    /// Rendering worker threads (default: available cores minus one)
    pub threads: Option<usize>,

    /// Picture to show (SVG, or a raster image)
    #[arg(long, default_value = "tiger.svg")]
    pub file: PathBuf,

    /// Also draw a random yellow walk on top of the picture
    #[arg(long)]
    pub demo: bool,

    /// Redraw rate
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub fps: u32,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub threads: usize,
    pub file: PathBuf,
    pub demo: bool,
    pub fps: u32,
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Self {
            threads: args.threads.unwrap_or_else(default_threads),
            file: args.file,
            demo: args.demo,
            fps: args.fps,
            width: WIDTH,
            height: HEIGHT,
            title: TITLE.to_string(),
        }
    }
}

/// Leave one core for the event loop.
fn default_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get().saturating_sub(1))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Config {
        Config::from_args(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn defaults() {
        let cfg = parse(&["svg-sketch"]);
        assert_eq!(cfg.file, PathBuf::from("tiger.svg"));
        assert_eq!(cfg.fps, 60);
        assert_eq!((cfg.width, cfg.height), (800, 800));
        assert!(!cfg.demo);
        assert_eq!(cfg.threads, default_threads());
    }

    #[test]
    fn positional_thread_override() {
        let cfg = parse(&["svg-sketch", "3", "--file", "a.svg", "--demo"]);
        assert_eq!(cfg.threads, 3);
        assert_eq!(cfg.file, PathBuf::from("a.svg"));
        assert!(cfg.demo);
    }

    #[test]
    fn rejects_bad_thread_count() {
        assert!(Args::try_parse_from(["svg-sketch", "lots"]).is_err());
        assert!(Args::try_parse_from(["svg-sketch", "--fps", "0"]).is_err());
    }
}
