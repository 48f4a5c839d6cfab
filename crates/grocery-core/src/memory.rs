//! In-memory backend
//!
//! A process-local `GroceryService`. Nothing is persisted; the list is gone
//! when the page reloads. Used when no host backend is available and in tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::error::{ServiceError, ServiceResult};
use crate::model::Item;
use crate::service::GroceryService;

#[derive(Debug)]
pub struct InMemoryGroceryService {
    items: RefCell<Vec<Item>>,
    /// `None` once every id has been handed out
    next_id: Cell<Option<u32>>,
}

impl Default for InMemoryGroceryService {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGroceryService {
    pub fn new() -> Self {
        Self {
            items: RefCell::new(Vec::new()),
            next_id: Cell::new(Some(1)),
        }
    }

    /// Seed the backend with existing items. Ids continue after the highest seeded id.
    pub fn with_items(items: Vec<Item>) -> Self {
        let next_id = match items.iter().map(|item| item.id).max() {
            Some(highest) => highest.checked_add(1),
            None => Some(1),
        };
        Self {
            items: RefCell::new(items),
            next_id: Cell::new(next_id),
        }
    }

    /// Current backend contents
    pub fn snapshot(&self) -> Vec<Item> {
        self.items.borrow().clone()
    }
}

#[async_trait(?Send)]
impl GroceryService for InMemoryGroceryService {
    async fn load(&self) -> ServiceResult<Vec<Item>> {
        Ok(self.snapshot())
    }

    async fn add(&self, name: &str) -> ServiceResult<Item> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::InvalidInput("item name is empty".to_string()));
        }
        let id = self
            .next_id
            .get()
            .ok_or_else(|| ServiceError::InvalidInput("no item ids left".to_string()))?;
        self.next_id.set(id.checked_add(1));

        let item = Item::new(id, name);
        self.items.borrow_mut().push(item.clone());
        Ok(item)
    }

    async fn update(&self, item: &Item) -> ServiceResult<Item> {
        let mut items = self.items.borrow_mut();
        let existing = items
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or(ServiceError::NotFound(item.id))?;
        *existing = item.clone();
        Ok(existing.clone())
    }

    async fn delete(&self, item: &Item) -> ServiceResult<Item> {
        let mut items = self.items.borrow_mut();
        let index = items
            .iter()
            .position(|existing| existing.id == item.id)
            .ok_or(ServiceError::NotFound(item.id))?;
        Ok(items.remove(index))
    }

    async fn restore(&self, items: &[Item]) -> ServiceResult<()> {
        let mut stored = self.items.borrow_mut();
        if let Some(missing) = items
            .iter()
            .find(|item| !stored.iter().any(|existing| existing.id == item.id))
        {
            return Err(ServiceError::NotFound(missing.id));
        }

        for existing in stored
            .iter_mut()
            .filter(|existing| items.iter().any(|item| item.id == existing.id))
        {
            existing.deleted = false;
            existing.done = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_assigns_increasing_ids() {
        let service = InMemoryGroceryService::new();

        let milk = service.add("Milk").await.expect("Failed to add");
        let eggs = service.add("Eggs").await.expect("Failed to add");

        assert_eq!(milk.id, 1);
        assert_eq!(eggs.id, 2);
        assert_eq!(service.load().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_add_rejects_blank_name() {
        let service = InMemoryGroceryService::new();

        let err = service.add("   ").await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert!(service.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_seeded_ids_continue() {
        let service = InMemoryGroceryService::with_items(vec![Item::new(7, "Butter")]);

        let item = service.add("Jam").await.unwrap();
        assert_eq!(item.id, 8);
    }

    #[tokio::test]
    async fn test_add_fails_once_ids_run_out() {
        let service = InMemoryGroceryService::with_items(vec![Item::new(u32::MAX - 1, "Salt")]);

        let pepper = service.add("Pepper").await.expect("Failed to add");
        assert_eq!(pepper.id, u32::MAX);

        let err = service.add("Cumin").await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert_eq!(service.snapshot().len(), 2);
    }

    #[tokio::test]
    async fn test_seeded_max_id_leaves_no_ids() {
        let service = InMemoryGroceryService::with_items(vec![Item::new(u32::MAX, "Salt")]);

        let err = service.add("Pepper").await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_update_item() {
        let service = InMemoryGroceryService::with_items(vec![Item::new(1, "Milk")]);

        let mut item = Item::new(1, "Oat milk");
        item.done = true;
        let updated = service.update(&item).await.expect("Update failed");

        assert_eq!(updated, item);
        assert_eq!(service.snapshot(), vec![item]);
    }

    #[tokio::test]
    async fn test_update_missing_item() {
        let service = InMemoryGroceryService::new();

        let err = service.update(&Item::new(42, "Ghost")).await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound(42));
    }

    #[tokio::test]
    async fn test_delete_item() {
        let service = InMemoryGroceryService::with_items(vec![Item::new(1, "Milk"), Item::new(2, "Eggs")]);

        let removed = service.delete(&Item::new(1, "Milk")).await.expect("Delete failed");

        assert_eq!(removed.id, 1);
        assert_eq!(service.snapshot(), vec![Item::new(2, "Eggs")]);
    }

    #[tokio::test]
    async fn test_restore_clears_flags() {
        let mut bread = Item::new(1, "Bread");
        bread.done = true;
        bread.deleted = true;
        let service = InMemoryGroceryService::with_items(vec![bread.clone()]);

        service.restore(&[bread]).await.expect("Restore failed");

        assert_eq!(service.snapshot(), vec![Item::new(1, "Bread")]);
    }
}
