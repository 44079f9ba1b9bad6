pub mod gestures;
pub mod types;

pub use types::{PointerEvent, PointerEventKind};

pub mod prelude {
    pub use super::gestures::{SwipeDecision, SwipeGesture, SwipeState};
    pub use super::types::{PointerEvent, PointerEventKind};
}
