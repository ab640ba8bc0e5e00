#![forbid(unsafe_code)]

pub mod export;
pub mod library;
pub mod model;
pub mod progress;
pub mod ranking;
pub mod time;

pub use library::{LibraryError, PatternLibrary};
pub use time::Clock;
