//! Backend Service Client
//!
//! Abstract interface to wherever the grocery list is persisted.
//! Futures are not `Send`: clients run on the single-threaded UI event loop.

use async_trait::async_trait;

use crate::error::ServiceResult;
use crate::model::Item;

/// Remote operations on the grocery list
#[async_trait(?Send)]
pub trait GroceryService {
    /// Fetch the full item list
    async fn load(&self) -> ServiceResult<Vec<Item>>;

    /// Create an item; the backend assigns its id
    async fn add(&self, name: &str) -> ServiceResult<Item>;

    /// Persist all fields of an existing item
    async fn update(&self, item: &Item) -> ServiceResult<Item>;

    /// Permanently remove an item
    async fn delete(&self, item: &Item) -> ServiceResult<Item>;

    /// Bring soft-deleted items back onto the list
    async fn restore(&self, items: &[Item]) -> ServiceResult<()>;
}

#[async_trait(?Send)]
impl<S: GroceryService + ?Sized> GroceryService for Box<S> {
    async fn load(&self) -> ServiceResult<Vec<Item>> {
        (**self).load().await
    }

    async fn add(&self, name: &str) -> ServiceResult<Item> {
        (**self).add(name).await
    }

    async fn update(&self, item: &Item) -> ServiceResult<Item> {
        (**self).update(item).await
    }

    async fn delete(&self, item: &Item) -> ServiceResult<Item> {
        (**self).delete(item).await
    }

    async fn restore(&self, items: &[Item]) -> ServiceResult<()> {
        (**self).restore(items).await
    }
}
