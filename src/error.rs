// A small error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),    // Creating the window failed
    WindowUpdate(String),  // Updating the window buffer failed
    EngineInit(String),    // The rendering engine (worker pool) could not start
    PictureLoad(String),   // Reading or parsing the picture file failed
    Target(String),        // The canvas target could not be created
    InsufficientCondition, // draw() called again before sync()
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::EngineInit(s) => write!(f, "Engine init error: {s}"),
            Error::PictureLoad(s) => write!(f, "Picture load error: {s}"),
            Error::Target(s) => write!(f, "Canvas target error: {s}"),
            Error::InsufficientCondition => {
                write!(f, "Canvas is still drawing; call sync() first")
            }
        }
    }
}

impl std::error::Error for Error {}
