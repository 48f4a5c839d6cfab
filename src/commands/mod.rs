//! Tauri Command Wrappers
//!
//! Frontend bindings to the host application's grocery commands.

mod item;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

pub use item::TauriGroceryService;
