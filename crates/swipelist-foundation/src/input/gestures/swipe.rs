//! Right-swipe recogniser.
//!
//! Follows one primary pointer from down to up and decides at release whether
//! the gesture was a rightward swipe. Displacement is summed sample by sample
//! rather than taken as a single start-to-end vector, so a finger that wanders
//! back and forth still reports its net direction.
//!
//! The recogniser never consumes events. It only observes them and hands out
//! at most one [`SwipeDecision`] per gesture, addressed to the point where the
//! finger first landed.

use crate::geometry::Point;
use crate::input::{PointerEvent, PointerEventKind};

/// Externally visible phase of the recogniser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SwipeState {
    #[default]
    Idle,
    Tracking,
    Deciding,
}

/// Outcome of a gesture that qualified as a right swipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeDecision {
    /// Where the finger first went down. The item under this point is the
    /// one to delete.
    pub origin: Point,
    /// Net displacement accumulated over the gesture.
    pub displacement: Point,
}

/// Returns true when a net displacement counts as a rightward swipe:
/// positive horizontal travel that strictly dominates vertical travel.
pub fn is_right_swipe(dx: f32, dy: f32) -> bool {
    dx > 0.0 && dx > dy.abs()
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct SwipeAccumulator {
    start: Point,
    last: Point,
    cumulative_dx: f32,
    cumulative_dy: f32,
}

impl SwipeAccumulator {
    fn new(start: Point) -> Self {
        Self {
            start,
            last: start,
            cumulative_dx: 0.0,
            cumulative_dy: 0.0,
        }
    }

    fn accumulate(&mut self, position: Point) {
        let delta = position - self.last;
        self.cumulative_dx += delta.x;
        self.cumulative_dy += delta.y;
        self.last = position;
    }

    fn displacement(&self) -> Point {
        Point::new(self.cumulative_dx, self.cumulative_dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
enum Phase {
    #[default]
    Idle,
    Tracking(SwipeAccumulator),
    Deciding(SwipeAccumulator),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeGesture {
    phase: Phase,
}

impl SwipeGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SwipeState {
        match self.phase {
            Phase::Idle => SwipeState::Idle,
            Phase::Tracking(_) => SwipeState::Tracking,
            Phase::Deciding(_) => SwipeState::Deciding,
        }
    }

    /// Net displacement of the gesture in flight, if any.
    pub fn cumulative_displacement(&self) -> Option<Point> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Tracking(acc) | Phase::Deciding(acc) => Some(acc.displacement()),
        }
    }

    /// Where the gesture in flight started, if any.
    pub fn origin(&self) -> Option<Point> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Tracking(acc) | Phase::Deciding(acc) => Some(acc.start),
        }
    }

    /// Feeds one raw event through the state machine.
    ///
    /// Returns a decision only on the `Up` that closes a qualifying gesture.
    pub fn on_event(&mut self, event: &PointerEvent) -> Option<SwipeDecision> {
        match event.kind {
            PointerEventKind::Down => {
                self.press(event.position);
                None
            }
            PointerEventKind::Move => {
                self.drag(event.position);
                None
            }
            PointerEventKind::Up => {
                self.release();
                self.decide()
            }
            PointerEventKind::Cancel
            | PointerEventKind::SecondaryDown
            | PointerEventKind::SecondaryUp
            | PointerEventKind::Hover => {
                self.reset();
                None
            }
        }
    }

    /// Starts tracking at `position`, discarding any gesture in flight.
    pub fn press(&mut self, position: Point) {
        if self.state() != SwipeState::Idle {
            log::trace!("swipe: restarting gesture that never released");
        }
        self.phase = Phase::Tracking(SwipeAccumulator::new(position));
    }

    /// Adds the delta from the previous sample. Ignored unless tracking.
    pub fn drag(&mut self, position: Point) {
        if let Phase::Tracking(acc) = &mut self.phase {
            acc.accumulate(position);
        }
    }

    /// Ends tracking and freezes the accumulated displacement for [`decide`].
    ///
    /// [`decide`]: SwipeGesture::decide
    pub fn release(&mut self) {
        if let Phase::Tracking(acc) = self.phase {
            self.phase = Phase::Deciding(acc);
        }
    }

    /// Judges a released gesture and returns to idle.
    pub fn decide(&mut self) -> Option<SwipeDecision> {
        let Phase::Deciding(acc) = std::mem::take(&mut self.phase) else {
            return None;
        };
        if is_right_swipe(acc.cumulative_dx, acc.cumulative_dy) {
            log::debug!(
                "swipe: right swipe from ({}, {}) net ({}, {})",
                acc.start.x,
                acc.start.y,
                acc.cumulative_dx,
                acc.cumulative_dy
            );
            Some(SwipeDecision {
                origin: acc.start,
                displacement: acc.displacement(),
            })
        } else {
            log::trace!(
                "swipe: rejected net ({}, {})",
                acc.cumulative_dx,
                acc.cumulative_dy
            );
            None
        }
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }
}
