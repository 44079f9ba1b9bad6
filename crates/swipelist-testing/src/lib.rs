//! Testing utilities and harness for swipelist

pub mod adapter;
pub mod robot;

pub use adapter::{AdapterEvent, RecordingAdapter};
pub use robot::{labelled_store, seeded_screen, ListRobot};

pub mod prelude {
    pub use crate::adapter::{AdapterEvent, RecordingAdapter};
    pub use crate::robot::{labelled_store, seeded_screen, ListRobot};
}
