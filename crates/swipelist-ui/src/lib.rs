//! Swipe-to-delete list screen for swipelist
//!
//! A single screen showing a scrollable list of randomly generated items.
//! The floating add action inserts a fresh item at the top, a right swipe
//! across a row removes it, and the whole list survives reconfiguration
//! through a [`StateBundle`].

mod error;
pub mod controller;
pub mod factory;
pub mod item;
pub mod list_view;
pub mod options;
pub mod screen;
pub mod state_bundle;
pub mod store;

pub use controller::ListController;
pub use error::Error;
pub use factory::{ItemFactory, RandomSource, SeededRandom};
pub use item::{ItemRecord, Variant};
pub use list_view::ListView;
pub use options::ListScreenOptions;
pub use screen::ListScreen;
pub use state_bundle::{StateBundle, LIST_STATE_KEY};
pub use store::ListStore;

pub use swipelist_foundation::{
    ListAdapter, ListItemProvider, Point, PointerEvent, PointerEventKind, Rect, Size,
    SwipeDecision, SwipeGesture, SwipeState,
};

pub mod prelude {
    pub use crate::controller::ListController;
    pub use crate::item::{ItemRecord, Variant};
    pub use crate::options::ListScreenOptions;
    pub use crate::screen::ListScreen;
    pub use crate::state_bundle::StateBundle;
    pub use crate::store::ListStore;
    pub use swipelist_foundation::prelude::*;
}
