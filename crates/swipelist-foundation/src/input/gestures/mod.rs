pub mod swipe;

pub use swipe::{is_right_swipe, SwipeDecision, SwipeGesture, SwipeState};
