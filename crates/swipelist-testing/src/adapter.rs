//! Adapter that records notifications and mirrors what would be rendered.

use swipelist_foundation::{ListAdapter, ListItemProvider};
use swipelist_ui::ItemRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdapterEvent {
    Inserted(usize),
    Removed(usize),
    DataSetChanged(usize),
}

/// Records every notification and keeps a rendered copy of the list built
/// only from what the notifications told it.
///
/// If the controller ever notifies out of step with the store, `rendered()`
/// drifts from the store's items, which is what the tests compare.
#[derive(Clone, Debug, Default)]
pub struct RecordingAdapter {
    events: Vec<AdapterEvent>,
    rendered: Vec<ItemRecord>,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[AdapterEvent] {
        &self.events
    }

    pub fn rendered(&self) -> &[ItemRecord] {
        &self.rendered
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl ListAdapter<ItemRecord> for RecordingAdapter {
    fn notify_item_inserted(&mut self, items: &dyn ListItemProvider<Item = ItemRecord>, index: usize) {
        self.events.push(AdapterEvent::Inserted(index));
        match items.item_at(index) {
            Some(item) if index <= self.rendered.len() => self.rendered.insert(index, item.clone()),
            _ => log::error!("insert notification for {index} does not match provider"),
        }
    }

    fn notify_item_removed(&mut self, _items: &dyn ListItemProvider<Item = ItemRecord>, index: usize) {
        self.events.push(AdapterEvent::Removed(index));
        if index < self.rendered.len() {
            self.rendered.remove(index);
        } else {
            log::error!("remove notification for {index} past rendered end");
        }
    }

    fn notify_data_set_changed(&mut self, items: &dyn ListItemProvider<Item = ItemRecord>) {
        let count = items.item_count();
        self.events.push(AdapterEvent::DataSetChanged(count));
        self.rendered = (0..count)
            .filter_map(|index| items.item_at(index).cloned())
            .collect();
    }
}
