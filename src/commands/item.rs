//! Item Commands
//!
//! `GroceryService` over Tauri IPC.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use grocery_core::{GroceryService, Item, ServiceError, ServiceResult};

use super::invoke;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct AddItemArgs<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct ItemArgs<'a> {
    item: &'a Item,
}

#[derive(Serialize)]
struct RestoreItemsArgs<'a> {
    items: &'a [Item],
}

// ========================
// Invocation
// ========================

/// Message carried by a rejected invoke; Tauri commands reject with strings
fn rejection_message(error: JsValue) -> String {
    error.as_string().unwrap_or_else(|| format!("{:?}", error))
}

async fn call(command: &str, args: JsValue) -> ServiceResult<JsValue> {
    invoke(command, args).await.map_err(|e| ServiceError::Rejected {
        command: command.to_string(),
        message: rejection_message(e),
    })
}

async fn call_with<A: Serialize, R: DeserializeOwned>(command: &str, args: &A) -> ServiceResult<R> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| ServiceError::Encode(e.to_string()))?;
    let result = call(command, js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| ServiceError::Decode(e.to_string()))
}

// ========================
// Commands
// ========================

/// Backend living in the Tauri host process
#[derive(Debug, Default, Clone, Copy)]
pub struct TauriGroceryService;

impl TauriGroceryService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl GroceryService for TauriGroceryService {
    async fn load(&self) -> ServiceResult<Vec<Item>> {
        let result = call("load_items", JsValue::NULL).await?;
        serde_wasm_bindgen::from_value(result).map_err(|e| ServiceError::Decode(e.to_string()))
    }

    async fn add(&self, name: &str) -> ServiceResult<Item> {
        call_with("add_item", &AddItemArgs { name }).await
    }

    async fn update(&self, item: &Item) -> ServiceResult<Item> {
        call_with("update_item", &ItemArgs { item }).await
    }

    async fn delete(&self, item: &Item) -> ServiceResult<Item> {
        call_with("delete_item", &ItemArgs { item }).await
    }

    async fn restore(&self, items: &[Item]) -> ServiceResult<()> {
        let js_args = serde_wasm_bindgen::to_value(&RestoreItemsArgs { items })
            .map_err(|e| ServiceError::Encode(e.to_string()))?;
        let result = call("restore_items", js_args).await?;
        // Result is () on success
        if result.is_undefined() || result.is_null() {
            Ok(())
        } else {
            serde_wasm_bindgen::from_value(result).map_err(|e| ServiceError::Decode(e.to_string()))
        }
    }
}
