//! Grocery Item Entity

use serde::{Deserialize, Serialize};

/// A grocery list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned by the backend
    pub id: u32,
    pub name: String,
    /// Checked off the list
    #[serde(default)]
    pub done: bool,
    /// Soft-deleted (in the trash, restorable)
    #[serde(default)]
    pub deleted: bool,
}

impl Item {
    /// Create a fresh item that is neither done nor deleted
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            done: false,
            deleted: false,
        }
    }

    /// Both done and soft-deleted, i.e. eligible for restore
    pub fn is_restorable(&self) -> bool {
        self.deleted && self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new(1, "Milk");
        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Milk");
        assert!(!item.done);
        assert!(!item.deleted);
    }

    #[test]
    fn test_restorable_requires_both_flags() {
        let mut item = Item::new(1, "Milk");
        item.deleted = true;
        assert!(!item.is_restorable());
        item.done = true;
        assert!(item.is_restorable());
    }

    #[test]
    fn test_missing_flags_default_to_false() {
        let json = r#"{"id":3,"name":"Bread"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item, Item::new(3, "Bread"));
    }
}
