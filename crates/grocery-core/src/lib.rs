//! Grocery List Core
//!
//! Everything that does not depend on the browser:
//! - model: the grocery item entity
//! - service: backend client abstraction plus an in-memory implementation
//! - state: mutations, list views and the `Commit` capability
//! - tasks: the processing task registry
//! - actions: the use cases the UI triggers

mod actions;
mod error;
mod memory;
mod model;
mod service;
mod state;
mod tasks;

pub use actions::{Actions, Task};
pub use error::{ActionError, ActionResult, ServiceError, ServiceResult};
pub use memory::InMemoryGroceryService;
pub use model::Item;
pub use service::GroceryService;
pub use state::{
    active_items, add_item, deleted_items, remove_item, restorable_items, update_item, Commit, Mutation,
};
pub use tasks::ProcessingTasks;
