//! Headless vertical list widget.
//!
//! Lays out fixed-height rows separated by dividers, scrolls, and answers
//! "which item is under this point". A removed row does not vanish at once:
//! it keeps its slot on screen for a few frames while it animates out, and
//! while it does, touching it still reports the position it had when it was
//! removed. That stale position can equal the current item count when the
//! last row was the one removed, which is why removals clamp.

use swipelist_foundation::gesture_constants::DRAG_THRESHOLD;
use swipelist_foundation::{Point, PointerEvent, PointerEventKind, Rect, Size};

use crate::options::ListScreenOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowSlot {
    Present,
    Removing { position: usize, frames_left: u32 },
}

/// A row currently inside the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleRow {
    /// Adapter position; for a removing row, the position it was removed from.
    pub position: usize,
    pub bounds: Rect,
    pub removing: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragScroll {
    last_y: f32,
    travelled: f32,
    scrolling: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListView {
    row_height: f32,
    divider_height: f32,
    viewport: Size,
    removal_frames: u32,
    scroll_offset: f32,
    rows: Vec<RowSlot>,
    drag: Option<DragScroll>,
}

impl ListView {
    pub fn new(options: &ListScreenOptions) -> Self {
        Self {
            row_height: options.row_height,
            divider_height: options.divider_height,
            viewport: options.viewport,
            removal_frames: options.removal_animation_frames,
            scroll_offset: 0.0,
            rows: Vec::new(),
            drag: None,
        }
    }

    /// Drops all rows and lays out `count` fresh ones.
    pub fn reset(&mut self, count: usize) {
        self.rows = vec![RowSlot::Present; count];
        self.drag = None;
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Rows on screen, removing ones included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows that still represent an item.
    pub fn present_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|slot| matches!(slot, RowSlot::Present))
            .count()
    }

    pub fn is_animating(&self) -> bool {
        self.rows
            .iter()
            .any(|slot| matches!(slot, RowSlot::Removing { .. }))
    }

    fn stride(&self) -> f32 {
        self.row_height + self.divider_height
    }

    fn content_height(&self) -> f32 {
        self.rows.len() as f32 * self.stride()
    }

    fn max_scroll(&self) -> f32 {
        (self.content_height() - self.viewport.height).max(0.0)
    }

    fn slot_of_position(&self, position: usize) -> Option<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, slot)| matches!(slot, RowSlot::Present))
            .nth(position)
            .map(|(slot, _)| slot)
    }

    fn slot_bounds(&self, slot: usize) -> Rect {
        Rect::new(
            0.0,
            slot as f32 * self.stride() - self.scroll_offset,
            self.viewport.width,
            self.row_height,
        )
    }

    fn position_of_slot(&self, slot: usize) -> usize {
        match self.rows[slot] {
            RowSlot::Present => self.rows[..slot]
                .iter()
                .filter(|s| matches!(s, RowSlot::Present))
                .count(),
            RowSlot::Removing { position, .. } => position,
        }
    }

    pub fn on_item_inserted(&mut self, position: usize) {
        let slot = self.slot_of_position(position).unwrap_or(self.rows.len());
        self.rows.insert(slot, RowSlot::Present);
    }

    pub fn on_item_removed(&mut self, position: usize) {
        let Some(slot) = self.slot_of_position(position) else {
            log::warn!("list view: no row for removed position {position}");
            return;
        };
        if self.removal_frames == 0 {
            self.rows.remove(slot);
            self.clamp_scroll();
        } else {
            self.rows[slot] = RowSlot::Removing {
                position,
                frames_left: self.removal_frames,
            };
        }
    }

    /// Steps removal animations by one frame. Returns whether any are still
    /// running.
    pub fn advance_frame(&mut self) -> bool {
        let before = self.rows.len();
        self.rows.retain_mut(|slot| match slot {
            RowSlot::Present => true,
            RowSlot::Removing { frames_left, .. } => {
                *frames_left = frames_left.saturating_sub(1);
                *frames_left > 0
            }
        });
        if self.rows.len() != before {
            self.clamp_scroll();
        }
        self.is_animating()
    }

    /// Finishes every running animation.
    pub fn settle(&mut self) {
        self.rows.retain(|slot| matches!(slot, RowSlot::Present));
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }

    /// Scrolls content by `dy` (positive reveals rows further down). Returns
    /// the distance actually scrolled.
    pub fn scroll_by(&mut self, dy: f32) -> f32 {
        let previous = self.scroll_offset;
        self.scroll_offset = (previous + dy).clamp(0.0, self.max_scroll());
        self.scroll_offset - previous
    }

    /// Scrolls the least distance that brings `position` fully into view.
    pub fn scroll_to_position(&mut self, position: usize) {
        let Some(slot) = self.slot_of_position(position) else {
            return;
        };
        let top = slot as f32 * self.stride();
        let bottom = top + self.row_height;
        if top < self.scroll_offset {
            self.scroll_offset = top;
        } else if bottom > self.scroll_offset + self.viewport.height {
            self.scroll_offset = bottom - self.viewport.height;
        }
        self.clamp_scroll();
    }

    /// Screen bounds of the row showing `position`.
    pub fn row_bounds(&self, position: usize) -> Option<Rect> {
        self.slot_of_position(position)
            .map(|slot| self.slot_bounds(slot))
    }

    /// Adapter position of the row under `point`.
    ///
    /// `None` outside the viewport, below the last row, or on a divider.
    pub fn item_position_at(&self, point: Point) -> Option<usize> {
        if !Rect::from_size(self.viewport).contains(point) {
            return None;
        }
        let content_y = point.y + self.scroll_offset;
        let stride = self.stride();
        let slot = (content_y / stride).floor() as usize;
        if slot >= self.rows.len() || content_y - slot as f32 * stride >= self.row_height {
            return None;
        }
        Some(self.position_of_slot(slot))
    }

    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let screen = Rect::from_size(self.viewport);
        (0..self.rows.len())
            .map(|slot| (slot, self.slot_bounds(slot)))
            .filter(|(_, bounds)| bounds.bottom() > screen.y && bounds.y < screen.bottom())
            .map(|(slot, bounds)| VisibleRow {
                position: self.position_of_slot(slot),
                bounds,
                removing: matches!(self.rows[slot], RowSlot::Removing { .. }),
            })
            .collect()
    }

    /// Drag-to-scroll. Vertical travel beyond the touch slop scrolls the
    /// list; nothing is consumed, other recognisers see the same events.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => {
                self.drag = Some(DragScroll {
                    last_y: event.position.y,
                    travelled: 0.0,
                    scrolling: false,
                });
            }
            PointerEventKind::Move => {
                let Some(mut drag) = self.drag else {
                    return;
                };
                let dy = event.position.y - drag.last_y;
                drag.travelled += dy;
                drag.last_y = event.position.y;
                if !drag.scrolling && drag.travelled.abs() > DRAG_THRESHOLD {
                    drag.scrolling = true;
                }
                if drag.scrolling {
                    self.scroll_by(-dy);
                }
                self.drag = Some(drag);
            }
            PointerEventKind::Up
            | PointerEventKind::Cancel
            | PointerEventKind::SecondaryDown
            | PointerEventKind::SecondaryUp
            | PointerEventKind::Hover => {
                self.drag = None;
            }
        }
    }
}
