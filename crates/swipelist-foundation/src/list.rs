//! Contracts between the list store and whatever renders it.
//!
//! The store implements [`ListItemProvider`]; a visual adapter implements
//! [`ListAdapter`] and is told about every structural change right after it
//! happens. Adapters never receive item data in the notification itself, they
//! re-query the provider for the index they were told about.

/// Read access to the items a list displays.
pub trait ListItemProvider {
    type Item;

    /// Total number of items, visible or not.
    fn item_count(&self) -> usize;

    /// The item at `index`, or `None` past the end.
    fn item_at(&self, index: usize) -> Option<&Self::Item>;

    /// Presentation bucket of the item at `index`.
    ///
    /// Items with the same content type can share row layouts. Returns `None`
    /// for items with no specific type.
    fn content_type(&self, index: usize) -> Option<u64> {
        let _ = index;
        None
    }
}

/// Receiver of structural change notifications.
///
/// Every notification is delivered after the provider already reflects the
/// change, so `items.item_count()` and `items.item_at(index)` describe the
/// new state.
pub trait ListAdapter<T> {
    /// One item was inserted at `index`.
    fn notify_item_inserted(&mut self, items: &dyn ListItemProvider<Item = T>, index: usize);

    /// One item was removed from `index`.
    fn notify_item_removed(&mut self, items: &dyn ListItemProvider<Item = T>, index: usize);

    /// The whole content was replaced (initial population or restore).
    fn notify_data_set_changed(&mut self, items: &dyn ListItemProvider<Item = T>) {
        let _ = items;
    }
}
