//! Robot-style driver for a list screen.
//!
//! Wraps a [`ListScreen`] backed by a [`RecordingAdapter`] and offers the
//! interactions a user performs: swiping rows, pressing the add button,
//! waiting for animations, and surviving a reconfiguration.
//!
//! # Example
//!
//! ```
//! use swipelist_testing::{labelled_store, ListRobot};
//! use swipelist_ui::ListScreenOptions;
//!
//! let mut robot = ListRobot::launch_with(
//!     labelled_store(&["A", "B", "C"]),
//!     ListScreenOptions::default(),
//!     1,
//! );
//! robot.swipe_row(1, 60.0, 0.0);
//! robot.settle();
//! assert_eq!(robot.labels(), vec!["A", "C"]);
//! ```

use swipelist_foundation::{Point, PointerEvent};
use swipelist_ui::{
    ItemFactory, ItemRecord, ListScreen, ListScreenOptions, ListStore, SeededRandom, StateBundle,
    Variant, LIST_STATE_KEY,
};

use crate::adapter::RecordingAdapter;

/// Upper bound on frames [`ListRobot::settle`] waits for.
const MAX_SETTLE_FRAMES: usize = 1_000;

/// Number of move samples a scripted swipe is split into.
const SWIPE_STEPS: usize = 10;

/// Screen with a deterministic item factory.
pub fn seeded_screen(
    saved: Option<&StateBundle>,
    options: ListScreenOptions,
    seed: u64,
) -> ListScreen<RecordingAdapter> {
    let factory = ItemFactory::new(SeededRandom::new(seed), &options);
    ListScreen::with_factory(saved, options, factory, RecordingAdapter::new())
}

/// Store whose items carry the given short labels, for readable scenarios.
pub fn labelled_store(labels: &[&str]) -> ListStore {
    ListStore::from_items(
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                ItemRecord::new(*label, format!("{label} long label"), Variant::wrapping(i as u8))
            })
            .collect(),
    )
}

pub struct ListRobot {
    screen: ListScreen<RecordingAdapter>,
    seed: u64,
}

impl ListRobot {
    pub fn new(screen: ListScreen<RecordingAdapter>, seed: u64) -> Self {
        Self { screen, seed }
    }

    /// First launch: no saved state.
    pub fn launch(options: ListScreenOptions, seed: u64) -> Self {
        Self::new(seeded_screen(None, options, seed), seed)
    }

    /// Launch with `store` as the saved list.
    pub fn launch_with(store: ListStore, options: ListScreenOptions, seed: u64) -> Self {
        let mut bundle = StateBundle::new();
        if let Err(err) = bundle.put(LIST_STATE_KEY, &store) {
            panic!("failed to stage saved list: {err}");
        }
        Self::new(seeded_screen(Some(&bundle), options, seed), seed)
    }

    pub fn screen(&self) -> &ListScreen<RecordingAdapter> {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut ListScreen<RecordingAdapter> {
        &mut self.screen
    }

    pub fn adapter(&self) -> &RecordingAdapter {
        self.screen.adapter()
    }

    pub fn labels(&self) -> Vec<String> {
        self.screen
            .items()
            .iter()
            .map(|item| item.short_label().to_owned())
            .collect()
    }

    pub fn row_center(&self, position: usize) -> Option<Point> {
        self.screen.view().row_bounds(position).map(|r| r.center())
    }

    pub fn press_add(&mut self) -> usize {
        self.screen.on_add_clicked()
    }

    pub fn send(&mut self, event: PointerEvent) -> Option<ItemRecord> {
        self.screen.on_pointer_event(&event)
    }

    /// Down at `start`, one move per point in `path`, up at the last point.
    pub fn drag_path(&mut self, start: Point, path: &[Point]) -> Option<ItemRecord> {
        self.send(PointerEvent::down(start.x, start.y));
        for point in path {
            self.send(PointerEvent::move_to(point.x, point.y));
        }
        let end = path.last().copied().unwrap_or(start);
        self.send(PointerEvent::up(end.x, end.y))
    }

    /// Straight swipe from `from` by `(dx, dy)` in evenly spaced moves.
    pub fn swipe(&mut self, from: Point, dx: f32, dy: f32) -> Option<ItemRecord> {
        let path: Vec<Point> = (1..=SWIPE_STEPS)
            .map(|i| {
                let t = i as f32 / SWIPE_STEPS as f32;
                Point::new(from.x + dx * t, from.y + dy * t)
            })
            .collect();
        self.drag_path(from, &path)
    }

    /// Swipes starting at the center of the row showing `position`.
    ///
    /// Panics when that row is not laid out.
    pub fn swipe_row(&mut self, position: usize, dx: f32, dy: f32) -> Option<ItemRecord> {
        let Some(center) = self.row_center(position) else {
            panic!("no row for position {position}");
        };
        self.swipe(center, dx, dy)
    }

    /// Starts a swipe and cancels it before release.
    pub fn cancelled_swipe(&mut self, from: Point, dx: f32, dy: f32) {
        self.send(PointerEvent::down(from.x, from.y));
        self.send(PointerEvent::move_to(from.x + dx, from.y + dy));
        self.send(PointerEvent::cancel(from.x + dx, from.y + dy));
    }

    pub fn advance_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.screen.advance_frame();
        }
    }

    /// Runs frames until no animation is left.
    pub fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_FRAMES {
            if !self.screen.advance_frame() {
                return;
            }
        }
        panic!("list still animating after {MAX_SETTLE_FRAMES} frames");
    }

    pub fn save(&self) -> StateBundle {
        let mut bundle = StateBundle::new();
        if let Err(err) = self.screen.save_state(&mut bundle) {
            panic!("saving list state failed: {err}");
        }
        bundle
    }

    /// Saves state, tears the screen down and builds a new one from the
    /// bundle, as a configuration change would.
    pub fn recreate(&self) -> ListRobot {
        let bundle = self.save();
        let options = self.screen.options().clone();
        let seed = self.seed.wrapping_add(1);
        ListRobot::new(seeded_screen(Some(&bundle), options, seed), seed)
    }

    pub fn assert_rendered_matches_store(&self) {
        assert_eq!(
            self.adapter().rendered(),
            self.screen.items(),
            "adapter mirror drifted from the list store"
        );
    }
}
