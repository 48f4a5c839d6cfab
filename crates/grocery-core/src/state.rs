//! Shared State
//!
//! The mutations that change the grocery list, the list views the UI reads
//! and the `Commit` capability handed to actions.

#[cfg(test)]
use std::cell::RefCell;

use crate::model::Item;
#[cfg(test)]
use crate::tasks::ProcessingTasks;

/// A named change to shared state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Replace the whole item list
    SetItems(Vec<Item>),
    /// Append one item
    AddItem(Item),
    /// Replace the item with the same id
    UpdateItem(Item),
    /// Drop the item with the same id
    RemoveItem(Item),
    AddProcessingTask(String),
    RemoveProcessingTask(String),
}

/// Capability passed to every action: apply mutations, read resident items.
pub trait Commit {
    fn commit(&self, mutation: Mutation);

    /// Items currently held in state
    fn items(&self) -> Vec<Item>;
}

// ========================
// List Helpers
// ========================

/// Append an item to the list
pub fn add_item(items: &mut Vec<Item>, item: Item) {
    items.push(item);
}

/// Replace the item with a matching id. Unknown ids are ignored.
pub fn update_item(items: &mut [Item], updated: Item) {
    if let Some(item) = items.iter_mut().find(|item| item.id == updated.id) {
        *item = updated;
    }
}

/// Remove the item with the given id
pub fn remove_item(items: &mut Vec<Item>, item_id: u32) {
    items.retain(|item| item.id != item_id);
}

// ========================
// Views
// ========================

/// Items still on the list
pub fn active_items(items: &[Item]) -> impl Iterator<Item = &Item> {
    items.iter().filter(|item| !item.deleted)
}

/// Items in the trash
pub fn deleted_items(items: &[Item]) -> impl Iterator<Item = &Item> {
    items.iter().filter(|item| item.deleted)
}

/// Items a restore would bring back
pub fn restorable_items(items: &[Item]) -> impl Iterator<Item = &Item> {
    items.iter().filter(|item| item.is_restorable())
}

/// Plain state that mutations apply to, for exercising actions without a UI
#[cfg(test)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct GroceryState {
    pub items: Vec<Item>,
    pub processing_tasks: ProcessingTasks,
}

#[cfg(test)]
impl GroceryState {
    pub fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::SetItems(items) => self.items = items,
            Mutation::AddItem(item) => add_item(&mut self.items, item),
            Mutation::UpdateItem(item) => update_item(&mut self.items, item),
            Mutation::RemoveItem(item) => remove_item(&mut self.items, item.id),
            Mutation::AddProcessingTask(label) => self.processing_tasks.add(&label),
            Mutation::RemoveProcessingTask(label) => self.processing_tasks.remove(&label),
        }
    }

    pub fn is_processing(&self) -> bool {
        !self.processing_tasks.is_empty()
    }
}

/// `Commit` over a `GroceryState` behind a `RefCell`
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct LocalStore {
    state: RefCell<GroceryState>,
}

#[cfg(test)]
impl LocalStore {
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            state: RefCell::new(GroceryState {
                items,
                ..Default::default()
            }),
        }
    }

    pub fn state(&self) -> GroceryState {
        self.state.borrow().clone()
    }
}

#[cfg(test)]
impl Commit for LocalStore {
    fn commit(&self, mutation: Mutation) {
        self.state.borrow_mut().apply(mutation);
    }

    fn items(&self) -> Vec<Item> {
        self.state.borrow().items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, done: bool, deleted: bool) -> Item {
        Item {
            id,
            name: name.to_string(),
            done,
            deleted,
        }
    }

    #[test]
    fn test_set_items_replaces_list() {
        let mut state = GroceryState {
            items: vec![item(9, "Old", false, false)],
            ..Default::default()
        };
        state.apply(Mutation::SetItems(vec![item(1, "Milk", false, false)]));
        assert_eq!(state.items, vec![item(1, "Milk", false, false)]);
    }

    #[test]
    fn test_update_matches_by_id() {
        let mut state = GroceryState::default();
        state.apply(Mutation::AddItem(item(1, "Milk", false, false)));
        state.apply(Mutation::AddItem(item(2, "Eggs", false, false)));

        state.apply(Mutation::UpdateItem(item(2, "Eggs", true, false)));

        assert_eq!(state.items[0], item(1, "Milk", false, false));
        assert_eq!(state.items[1], item(2, "Eggs", true, false));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut state = GroceryState::default();
        state.apply(Mutation::AddItem(item(1, "Milk", false, false)));
        state.apply(Mutation::UpdateItem(item(5, "Ghost", true, true)));
        assert_eq!(state.items, vec![item(1, "Milk", false, false)]);
    }

    #[test]
    fn test_remove_item() {
        let mut state = GroceryState::default();
        state.apply(Mutation::AddItem(item(1, "Milk", false, false)));
        state.apply(Mutation::AddItem(item(2, "Eggs", false, true)));

        state.apply(Mutation::RemoveItem(item(2, "Eggs", false, true)));

        assert_eq!(state.items, vec![item(1, "Milk", false, false)]);
    }

    #[test]
    fn test_processing_tasks() {
        let mut state = GroceryState::default();
        assert!(!state.is_processing());

        state.apply(Mutation::AddProcessingTask("action loadItems".to_string()));
        assert!(state.is_processing());

        state.apply(Mutation::RemoveProcessingTask("action loadItems".to_string()));
        assert!(!state.is_processing());
    }

    #[test]
    fn test_list_views() {
        let items = vec![
            item(1, "Milk", false, false),
            item(2, "Eggs", true, true),
            item(3, "Jam", false, true),
        ];

        let ids = |views: Vec<&Item>| views.iter().map(|item| item.id).collect::<Vec<_>>();
        assert_eq!(ids(active_items(&items).collect()), vec![1]);
        assert_eq!(ids(deleted_items(&items).collect()), vec![2, 3]);
        assert_eq!(ids(restorable_items(&items).collect()), vec![2]);
    }

    #[test]
    fn test_list_views_on_empty_list() {
        assert_eq!(active_items(&[]).count(), 0);
        assert_eq!(deleted_items(&[]).count(), 0);
        assert_eq!(restorable_items(&[]).count(), 0);
    }

    #[test]
    fn test_local_store_commit() {
        let store = LocalStore::with_items(vec![item(1, "Milk", false, false)]);
        store.commit(Mutation::AddItem(item(2, "Eggs", false, false)));
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.state().items[1].name, "Eggs");
    }
}
