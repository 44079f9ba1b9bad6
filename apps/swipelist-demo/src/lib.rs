//! Terminal front end for the swipelist screen.

pub mod app;
pub mod commands;

pub use app::{run, DemoSession, Flow, LoggingAdapter};
pub use commands::Command;
