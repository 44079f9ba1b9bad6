//! Tunables for a list screen.

use swipelist_foundation::Size;

/// Configuration for a [`ListScreen`](crate::ListScreen).
///
/// Built with the `with_*` methods on top of [`Default`].
#[derive(Clone, Debug, PartialEq)]
pub struct ListScreenOptions {
    /// Items generated when there is no saved state.
    pub initial_item_count: usize,
    pub short_label_len: usize,
    pub long_label_len: usize,
    pub row_height: f32,
    /// Gap drawn between rows. Touches landing on it hit no item.
    pub divider_height: f32,
    pub viewport: Size,
    /// Frames a removed row stays on screen while it animates out.
    pub removal_animation_frames: u32,
}

impl Default for ListScreenOptions {
    fn default() -> Self {
        Self {
            initial_item_count: 5,
            short_label_len: 5,
            long_label_len: 15,
            row_height: 72.0,
            divider_height: 1.0,
            viewport: Size::new(360.0, 640.0),
            removal_animation_frames: 15,
        }
    }
}

impl ListScreenOptions {
    pub fn with_initial_item_count(mut self, count: usize) -> Self {
        self.initial_item_count = count;
        self
    }

    pub fn with_label_lengths(mut self, short: usize, long: usize) -> Self {
        self.short_label_len = short;
        self.long_label_len = long;
        self
    }

    pub fn with_row_height(mut self, height: f32) -> Self {
        self.row_height = height.max(1.0);
        self
    }

    pub fn with_divider_height(mut self, height: f32) -> Self {
        self.divider_height = height.max(0.0);
        self
    }

    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Size::new(width, height);
        self
    }

    pub fn with_removal_animation_frames(mut self, frames: u32) -> Self {
        self.removal_animation_frames = frames;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_first_launch() {
        let options = ListScreenOptions::default();
        assert_eq!(options.initial_item_count, 5);
        assert_eq!(options.short_label_len, 5);
        assert_eq!(options.long_label_len, 15);
    }

    #[test]
    fn builders_clamp_degenerate_geometry() {
        let options = ListScreenOptions::default()
            .with_row_height(0.0)
            .with_divider_height(-3.0)
            .with_viewport(100.0, 50.0);
        assert_eq!(options.row_height, 1.0);
        assert_eq!(options.divider_height, 0.0);
        assert_eq!(options.viewport, Size::new(100.0, 50.0));
    }
}
