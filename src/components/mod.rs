//! UI Components
//!
//! Leptos components for the grocery list.

mod delete_confirm_button;
mod error_banner;
mod grocery_item;
mod item_list;
mod new_item_form;
mod processing_indicator;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use grocery_item::GroceryItem;
pub use item_list::{ItemList, TrashList};
pub use new_item_form::NewItemForm;
pub use processing_indicator::ProcessingIndicator;
