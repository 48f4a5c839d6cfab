//! Action Layer
//!
//! One method per use case. Each method issues at most one backend call,
//! brackets it with processing-task notifications and commits the outcome.

use crate::error::{ActionError, ActionResult, ServiceError};
use crate::model::Item;
use crate::service::GroceryService;
use crate::state::{restorable_items, Commit, Mutation};

/// Kinds of backend-bound work, each with a fixed task label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    LoadItems,
    AddItem,
    UpdateItem,
    DeleteItem,
    RestoreItems,
}

impl Task {
    /// Label recorded in the processing task registry
    pub fn label(&self) -> &'static str {
        match self {
            Task::LoadItems => "action loadItems",
            Task::AddItem => "action addItem",
            Task::UpdateItem => "action updateItem",
            Task::DeleteItem => "action deleteItem",
            Task::RestoreItems => "action restoreItems",
        }
    }

    fn failure_message(&self) -> &'static str {
        match self {
            Task::LoadItems => "Error loading items from the backend",
            Task::AddItem => "Error adding item to the backend",
            Task::UpdateItem => "Error updating item in the backend",
            Task::DeleteItem => "Error deleting item permanently in the backend",
            Task::RestoreItems => "Error restoring items",
        }
    }
}

/// Registers a task on creation and releases it when dropped,
/// so a future dropped mid-flight still leaves the registry balanced.
struct TaskMarker<'a, C: Commit + ?Sized> {
    ctx: &'a C,
    task: Task,
}

impl<'a, C: Commit + ?Sized> TaskMarker<'a, C> {
    fn start(ctx: &'a C, task: Task) -> Self {
        ctx.commit(Mutation::AddProcessingTask(task.label().to_string()));
        Self { ctx, task }
    }

    /// Log the failure, release the task, hand back the error
    fn fail(self, error: ServiceError) -> ActionError {
        tracing::error!("{}: {}.", self.task.failure_message(), error);
        ActionError::Backend(error)
    }
}

impl<C: Commit + ?Sized> Drop for TaskMarker<'_, C> {
    fn drop(&mut self) {
        self.ctx
            .commit(Mutation::RemoveProcessingTask(self.task.label().to_string()));
    }
}

/// Grocery list actions bound to one backend
pub struct Actions<S> {
    service: S,
}

impl<S: GroceryService> Actions<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Replace the item list with whatever the backend holds
    pub async fn load_items<C: Commit + ?Sized>(&self, ctx: &C) -> ActionResult<()> {
        let task = Task::LoadItems;
        tracing::info!("{}", task.label());

        let marker = TaskMarker::start(ctx, task);
        match self.service.load().await {
            Ok(items) => {
                ctx.commit(Mutation::SetItems(items));
                drop(marker);
                Ok(())
            }
            Err(e) => Err(marker.fail(e)),
        }
    }

    /// Create an item named `name` and append it to the list
    pub async fn add_item<C: Commit + ?Sized>(&self, ctx: &C, name: &str) -> ActionResult<()> {
        let task = Task::AddItem;
        tracing::info!("{}", task.label());

        let marker = TaskMarker::start(ctx, task);
        match self.service.add(name).await {
            Ok(item) => {
                ctx.commit(Mutation::AddItem(item));
                drop(marker);
                Ok(())
            }
            Err(e) => Err(marker.fail(e)),
        }
    }

    /// Persist `item` and replace the matching entry with the backend's copy
    pub async fn update_item<C: Commit + ?Sized>(&self, ctx: &C, item: &Item) -> ActionResult<Item> {
        let task = Task::UpdateItem;
        tracing::info!("{}", task.label());

        let marker = TaskMarker::start(ctx, task);
        match self.service.update(item).await {
            Ok(updated) => {
                ctx.commit(Mutation::UpdateItem(updated.clone()));
                drop(marker);
                Ok(updated)
            }
            Err(e) => Err(marker.fail(e)),
        }
    }

    /// Flip `done` on the caller's item, then persist it
    pub async fn toggle_done_item<C: Commit + ?Sized>(
        &self,
        ctx: &C,
        item: &mut Item,
    ) -> ActionResult<Item> {
        tracing::info!("action toggleDoneItem");
        item.done = !item.done;
        self.update_item(ctx, item).await
    }

    /// Soft-delete a live item; permanently delete one already in the trash
    pub async fn delete_item<C: Commit + ?Sized>(
        &self,
        ctx: &C,
        item: &mut Item,
    ) -> ActionResult<Item> {
        let task = Task::DeleteItem;
        tracing::info!("{}", task.label());

        if !item.deleted {
            item.deleted = true;
            return self.update_item(ctx, item).await;
        }

        let marker = TaskMarker::start(ctx, task);
        match self.service.delete(item).await {
            Ok(deleted) => {
                ctx.commit(Mutation::RemoveItem(deleted.clone()));
                drop(marker);
                Ok(deleted)
            }
            Err(e) => Err(marker.fail(e)),
        }
    }

    /// Bring back every resident item that is both done and deleted
    pub async fn restore_items<C: Commit + ?Sized>(&self, ctx: &C) -> ActionResult<()> {
        let task = Task::RestoreItems;
        tracing::info!("{}", task.label());

        let to_restore: Vec<Item> = restorable_items(&ctx.items()).cloned().collect();

        let marker = TaskMarker::start(ctx, task);
        match self.service.restore(&to_restore).await {
            Ok(()) => {
                for mut item in to_restore {
                    item.deleted = false;
                    item.done = false;
                    ctx.commit(Mutation::UpdateItem(item));
                }
                drop(marker);
                Ok(())
            }
            Err(e) => Err(marker.fail(e)),
        }
    }
}
