//! Application Context
//!
//! Shared state provided via Leptos Context API. The context is also the
//! `Commit` capability the actions write through.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use grocery_core::{
    add_item, remove_item, update_item, ActionResult, Actions, Commit, GroceryService, Item, Mutation,
};

use crate::store::{AppStateStoreFields, AppStore};

pub type GroceryActions = Actions<Box<dyn GroceryService>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Message of the most recent failed action, cleared by the next success
    pub last_error: RwSignal<Option<String>>,
    actions: StoredValue<Rc<GroceryActions>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, actions: GroceryActions) -> Self {
        Self {
            store,
            last_error: RwSignal::new(None),
            actions: StoredValue::new_local(Rc::new(actions)),
        }
    }

    pub fn actions(&self) -> Rc<GroceryActions> {
        self.actions.get_value()
    }

    fn report<T>(&self, result: ActionResult<T>) {
        match result {
            Ok(_) => self.last_error.set(None),
            Err(e) => self.last_error.set(Some(e.to_string())),
        }
    }

    /// Reload the item list from the backend
    pub fn load_items(self) {
        spawn_local(async move {
            let result = self.actions().load_items(&self).await;
            self.report(result);
        });
    }

    pub fn add_item(self, name: String) {
        spawn_local(async move {
            let result = self.actions().add_item(&self, &name).await;
            self.report(result);
        });
    }

    pub fn toggle_done_item(self, mut item: Item) {
        spawn_local(async move {
            let result = self.actions().toggle_done_item(&self, &mut item).await;
            self.report(result);
        });
    }

    /// Move to the trash, or delete for good if already there
    pub fn delete_item(self, mut item: Item) {
        spawn_local(async move {
            let result = self.actions().delete_item(&self, &mut item).await;
            self.report(result);
        });
    }

    pub fn restore_items(self) {
        spawn_local(async move {
            let result = self.actions().restore_items(&self).await;
            self.report(result);
        });
    }
}

impl Commit for AppContext {
    fn commit(&self, mutation: Mutation) {
        match mutation {
            Mutation::SetItems(items) => *self.store.items().write() = items,
            Mutation::AddItem(item) => add_item(&mut self.store.items().write(), item),
            Mutation::UpdateItem(item) => update_item(&mut self.store.items().write(), item),
            Mutation::RemoveItem(item) => remove_item(&mut self.store.items().write(), item.id),
            Mutation::AddProcessingTask(label) => self.store.processing_tasks().write().add(&label),
            Mutation::RemoveProcessingTask(label) => {
                self.store.processing_tasks().write().remove(&label)
            }
        }
    }

    fn items(&self) -> Vec<Item> {
        self.store.items().get_untracked()
    }
}
