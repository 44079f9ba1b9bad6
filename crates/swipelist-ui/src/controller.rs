//! List mutations kept in step with the list view and the visual adapter.
//!
//! Every structural change follows the same order: mutate the store, update
//! the list view's rows, then notify the adapter. By the time the adapter
//! re-queries the store it already sees the new content.

use swipelist_foundation::{ListAdapter, SwipeDecision};

use crate::factory::ItemFactory;
use crate::item::ItemRecord;
use crate::list_view::ListView;
use crate::store::ListStore;

#[derive(Debug)]
pub struct ListController<A> {
    store: ListStore,
    factory: ItemFactory,
    adapter: A,
    view: ListView,
}

impl<A> ListController<A>
where
    A: ListAdapter<ItemRecord>,
{
    /// Takes ownership of an initial store and announces it to the adapter.
    pub fn new(store: ListStore, factory: ItemFactory, adapter: A, view: ListView) -> Self {
        let mut controller = Self {
            store,
            factory,
            adapter,
            view,
        };
        controller.view.reset(controller.store.len());
        controller.adapter.notify_data_set_changed(&controller.store);
        controller
    }

    pub fn store(&self) -> &ListStore {
        &self.store
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ListView {
        &mut self.view
    }

    /// Generates an item and inserts it at `position` (clamped to the end).
    /// Returns the index it landed at.
    pub fn insert_at(&mut self, position: usize) -> usize {
        let item = self.factory.create_item();
        let index = self.store.insert(position, item);
        self.view.on_item_inserted(index);
        self.adapter.notify_item_inserted(&self.store, index);
        log::debug!(
            "inserted item at {index}, {} item(s) in list",
            self.store.len()
        );
        index
    }

    /// Removes the item under the decision's origin.
    ///
    /// Nothing happens when no row is under that point.
    pub fn remove_resolved_item(&mut self, decision: &SwipeDecision) -> Option<ItemRecord> {
        match self.view.item_position_at(decision.origin) {
            Some(position) => self.remove_position(position),
            None => {
                log::debug!(
                    "no item under ({}, {}), nothing removed",
                    decision.origin.x,
                    decision.origin.y
                );
                None
            }
        }
    }

    /// Removes the item at a resolved position.
    ///
    /// A position past the end, left behind by a row still animating out, is
    /// clamped to the last item. Nothing happens on an empty list.
    pub fn remove_position(&mut self, resolved: usize) -> Option<ItemRecord> {
        let index = self.store.clamp_index(resolved)?;
        if index != resolved {
            log::info!("resolved position {resolved} out of range, removing {index} instead");
        }
        let removed = self.store.remove(index)?;
        self.view.on_item_removed(index);
        self.adapter.notify_item_removed(&self.store, index);
        log::debug!(
            "removed item at {index}, {} item(s) left",
            self.store.len()
        );
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::SeededRandom;
    use crate::item::Variant;
    use crate::options::ListScreenOptions;
    use swipelist_foundation::{ListItemProvider, Point};

    #[derive(Debug, Default, PartialEq)]
    struct Log(Vec<String>);

    impl ListAdapter<ItemRecord> for Log {
        fn notify_item_inserted(
            &mut self,
            items: &dyn ListItemProvider<Item = ItemRecord>,
            index: usize,
        ) {
            self.0.push(format!("insert {index}/{}", items.item_count()));
        }

        fn notify_item_removed(
            &mut self,
            items: &dyn ListItemProvider<Item = ItemRecord>,
            index: usize,
        ) {
            self.0.push(format!("remove {index}/{}", items.item_count()));
        }

        fn notify_data_set_changed(&mut self, items: &dyn ListItemProvider<Item = ItemRecord>) {
            self.0.push(format!("reset {}", items.item_count()));
        }
    }

    fn options() -> ListScreenOptions {
        ListScreenOptions::default()
            .with_row_height(50.0)
            .with_divider_height(0.0)
            .with_removal_animation_frames(0)
    }

    fn controller(labels: &[&str]) -> ListController<Log> {
        let options = options();
        let store = ListStore::from_items(
            labels
                .iter()
                .map(|l| ItemRecord::new(*l, "", Variant::new(0).unwrap()))
                .collect(),
        );
        let factory = ItemFactory::new(SeededRandom::new(3), &options);
        ListController::new(store, factory, Log::default(), ListView::new(&options))
    }

    fn labels<A: ListAdapter<ItemRecord>>(controller: &ListController<A>) -> Vec<String> {
        controller
            .store()
            .iter()
            .map(|i| i.short_label().to_owned())
            .collect()
    }

    #[test]
    fn construction_announces_initial_content() {
        let controller = controller(&["a", "b"]);
        assert_eq!(controller.adapter().0, vec!["reset 2"]);
        assert_eq!(controller.view().row_count(), 2);
    }

    #[test]
    fn insert_notifies_after_store_changed() {
        let mut controller = controller(&["a"]);
        assert_eq!(controller.insert_at(0), 0);
        assert_eq!(controller.insert_at(10), 2);
        assert_eq!(
            controller.adapter().0,
            vec!["reset 1", "insert 0/2", "insert 2/3"]
        );
        assert_eq!(controller.view().row_count(), 3);
    }

    #[test]
    fn remove_resolved_item_uses_origin() {
        let mut controller = controller(&["a", "b", "c"]);
        let decision = SwipeDecision {
            origin: Point::new(10.0, 60.0),
            displacement: Point::new(40.0, 0.0),
        };
        let removed = controller.remove_resolved_item(&decision);
        assert_eq!(removed.map(|i| i.short_label().to_owned()), Some("b".into()));
        assert_eq!(labels(&controller), vec!["a", "c"]);
        assert_eq!(controller.adapter().0.last().unwrap(), "remove 1/2");
    }

    #[test]
    fn remove_with_nothing_underneath_is_noop() {
        let mut controller = controller(&["a"]);
        let decision = SwipeDecision {
            origin: Point::new(10.0, 300.0),
            displacement: Point::new(40.0, 0.0),
        };
        assert_eq!(controller.remove_resolved_item(&decision), None);
        assert_eq!(labels(&controller), vec!["a"]);
        assert_eq!(controller.adapter().0, vec!["reset 1"]);
    }

    #[test]
    fn stale_position_is_clamped_to_last() {
        let mut controller = controller(&["a", "b"]);
        let removed = controller.remove_position(2);
        assert_eq!(removed.map(|i| i.short_label().to_owned()), Some("b".into()));
        assert_eq!(controller.adapter().0.last().unwrap(), "remove 1/1");
    }

    #[test]
    fn removing_last_remaining_item_empties_list() {
        let mut controller = controller(&["a"]);
        assert!(controller.remove_position(0).is_some());
        assert!(controller.store().is_empty());
        assert_eq!(controller.remove_position(0), None);
        assert_eq!(controller.view().row_count(), 0);
    }
}
