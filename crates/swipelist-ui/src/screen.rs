//! The list screen: restores or generates the list, routes touch input
//! through the swipe recogniser, handles the add action and saves state.

use swipelist_foundation::{ListAdapter, PointerEvent, SwipeGesture, SwipeState};

use crate::controller::ListController;
use crate::factory::ItemFactory;
use crate::item::ItemRecord;
use crate::list_view::ListView;
use crate::options::ListScreenOptions;
use crate::state_bundle::{StateBundle, LIST_STATE_KEY};
use crate::store::ListStore;
use crate::Error;

#[derive(Debug)]
pub struct ListScreen<A> {
    controller: ListController<A>,
    gesture: SwipeGesture,
    options: ListScreenOptions,
}

impl<A> ListScreen<A>
where
    A: ListAdapter<ItemRecord>,
{
    /// Creates the screen with an OS-seeded item factory.
    ///
    /// `saved` is the bundle from a previous [`save_state`], if any.
    ///
    /// [`save_state`]: ListScreen::save_state
    pub fn create(
        saved: Option<&StateBundle>,
        options: ListScreenOptions,
        adapter: A,
    ) -> Result<Self, Error> {
        let factory = ItemFactory::from_entropy(&options)?;
        Ok(Self::with_factory(saved, options, factory, adapter))
    }

    pub fn with_factory(
        saved: Option<&StateBundle>,
        options: ListScreenOptions,
        mut factory: ItemFactory,
        adapter: A,
    ) -> Self {
        let store = restore_store(saved).unwrap_or_else(|| {
            log::info!(
                "no saved list, generating {} item(s)",
                options.initial_item_count
            );
            ListStore::generate(&mut factory, options.initial_item_count)
        });
        let view = ListView::new(&options);
        Self {
            controller: ListController::new(store, factory, adapter, view),
            gesture: SwipeGesture::new(),
            options,
        }
    }

    pub fn options(&self) -> &ListScreenOptions {
        &self.options
    }

    pub fn store(&self) -> &ListStore {
        self.controller.store()
    }

    pub fn items(&self) -> &[ItemRecord] {
        self.controller.store().items()
    }

    pub fn adapter(&self) -> &A {
        self.controller.adapter()
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        self.controller.adapter_mut()
    }

    pub fn view(&self) -> &ListView {
        self.controller.view()
    }

    pub fn controller_mut(&mut self) -> &mut ListController<A> {
        &mut self.controller
    }

    pub fn gesture_state(&self) -> SwipeState {
        self.gesture.state()
    }

    /// Feeds one touch event to the list and the swipe recogniser.
    ///
    /// Returns the removed item when the event completed a right swipe over
    /// a row.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<ItemRecord> {
        self.controller.view_mut().on_pointer_event(event);
        let decision = self.gesture.on_event(event)?;
        self.controller.remove_resolved_item(&decision)
    }

    /// The floating add action: scroll to the top and insert a new item there.
    pub fn on_add_clicked(&mut self) -> usize {
        self.controller.view_mut().scroll_to_position(0);
        self.controller.insert_at(0)
    }

    pub fn scroll_by(&mut self, dy: f32) -> f32 {
        self.controller.view_mut().scroll_by(dy)
    }

    /// Advances list animations by one frame. Returns whether any are still
    /// running.
    pub fn advance_frame(&mut self) -> bool {
        self.controller.view_mut().advance_frame()
    }

    /// Writes the whole list under [`LIST_STATE_KEY`].
    pub fn save_state(&self, bundle: &mut StateBundle) -> Result<(), Error> {
        bundle.put(LIST_STATE_KEY, self.controller.store())?;
        log::debug!("saved {} item(s)", self.controller.store().len());
        Ok(())
    }
}

fn restore_store(saved: Option<&StateBundle>) -> Option<ListStore> {
    match saved?.get::<ListStore>(LIST_STATE_KEY)? {
        Ok(store) => {
            log::info!("restored {} item(s) from saved state", store.len());
            Some(store)
        }
        Err(err) => {
            log::warn!("ignoring saved list: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::SeededRandom;
    use crate::item::Variant;
    use swipelist_foundation::ListItemProvider;

    struct Silent;

    impl ListAdapter<ItemRecord> for Silent {
        fn notify_item_inserted(&mut self, _: &dyn ListItemProvider<Item = ItemRecord>, _: usize) {}

        fn notify_item_removed(&mut self, _: &dyn ListItemProvider<Item = ItemRecord>, _: usize) {}
    }

    fn screen(saved: Option<&StateBundle>) -> ListScreen<Silent> {
        let options = ListScreenOptions::default();
        let factory = ItemFactory::new(SeededRandom::new(11), &options);
        ListScreen::with_factory(saved, options, factory, Silent)
    }

    #[test]
    fn fresh_screen_generates_default_items() {
        let screen = screen(None);
        assert_eq!(screen.items().len(), 5);
        assert_eq!(screen.gesture_state(), SwipeState::Idle);
    }

    #[test]
    fn bundle_without_list_key_falls_back_to_generation() {
        let mut bundle = StateBundle::new();
        bundle.put("other", &1u8).unwrap();
        assert_eq!(screen(Some(&bundle)).items().len(), 5);
    }

    #[test]
    fn undecodable_list_falls_back_to_generation() {
        let mut bundle = StateBundle::new();
        bundle.put(LIST_STATE_KEY, &"garbage").unwrap();
        assert_eq!(screen(Some(&bundle)).items().len(), 5);
    }

    #[test]
    fn saved_empty_list_stays_empty() {
        let mut bundle = StateBundle::new();
        bundle.put(LIST_STATE_KEY, &ListStore::new()).unwrap();
        assert!(screen(Some(&bundle)).items().is_empty());
    }

    #[test]
    fn save_writes_list_key() {
        let mut screen = screen(None);
        screen.on_add_clicked();
        let mut bundle = StateBundle::new();
        screen.save_state(&mut bundle).unwrap();
        let saved: ListStore = bundle.get(LIST_STATE_KEY).unwrap().unwrap();
        assert_eq!(saved.items(), screen.items());
        assert_eq!(saved.len(), 6);
    }

    #[test]
    fn restored_item_fields_survive() {
        let item = ItemRecord::new("ab cd", "0123456789abcde", Variant::new(3).unwrap());
        let mut bundle = StateBundle::new();
        bundle
            .put(LIST_STATE_KEY, &ListStore::from_items(vec![item.clone()]))
            .unwrap();
        assert_eq!(screen(Some(&bundle)).items(), &[item]);
    }
}
