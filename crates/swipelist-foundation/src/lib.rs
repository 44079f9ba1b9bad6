//! Geometry, pointer input and list contracts for swipelist
//!
//! This crate contains the pieces of the list screen that know nothing about
//! items or storage: points and rectangles, pointer events, the swipe
//! recogniser, and the traits a visual adapter plugs into.

pub mod geometry;
pub mod gesture_constants;
pub mod input;
pub mod list;

pub use geometry::*;
pub use input::gestures::{SwipeDecision, SwipeGesture, SwipeState};
pub use input::{PointerEvent, PointerEventKind};
pub use list::{ListAdapter, ListItemProvider};

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::input::gestures::{SwipeDecision, SwipeGesture, SwipeState};
    pub use crate::input::{PointerEvent, PointerEventKind};
    pub use crate::list::{ListAdapter, ListItemProvider};
}
