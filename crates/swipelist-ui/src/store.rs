//! Ordered in-memory item storage. Insertion order is display order.

use serde::{Deserialize, Serialize};
use swipelist_foundation::ListItemProvider;

use crate::factory::ItemFactory;
use crate::item::ItemRecord;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListStore {
    items: Vec<ItemRecord>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<ItemRecord>) -> Self {
        Self { items }
    }

    /// Store pre-filled with `count` freshly generated items.
    pub fn generate(factory: &mut ItemFactory, count: usize) -> Self {
        Self::from_items((0..count).map(|_| factory.create_item()).collect())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ItemRecord> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemRecord> {
        self.items.iter()
    }

    /// Inserts `item` at `index`, or at the end when `index` is past it.
    /// Returns the index the item landed at.
    pub fn insert(&mut self, index: usize, item: ItemRecord) -> usize {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        index
    }

    pub fn remove(&mut self, index: usize) -> Option<ItemRecord> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Maps a possibly stale index onto the last valid one.
    ///
    /// Returns `None` only when the store is empty.
    pub fn clamp_index(&self, index: usize) -> Option<usize> {
        self.items.len().checked_sub(1).map(|last| index.min(last))
    }
}

impl ListItemProvider for ListStore {
    type Item = ItemRecord;

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item_at(&self, index: usize) -> Option<&ItemRecord> {
        self.items.get(index)
    }

    fn content_type(&self, index: usize) -> Option<u64> {
        self.items
            .get(index)
            .map(|item| u64::from(item.variant().get()))
    }
}

impl<'a> IntoIterator for &'a ListStore {
    type Item = &'a ItemRecord;
    type IntoIter = std::slice::Iter<'a, ItemRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
