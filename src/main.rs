//! Grocery List Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod store;

use app::App;
use config::Config;
use leptos::prelude::*;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    console_error_panic_hook::set_once();

    // The subscriber needs the level, so config problems are reported once it is up
    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let level = config.log_level();

    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(*level.as_ref().unwrap_or(&tracing::Level::INFO))
            .build(),
    );

    if let Some(e) = config_error {
        tracing::warn!("Invalid grocery.toml, using defaults: {}", e);
    }
    if let Err(e) = level {
        tracing::warn!("{}, using info", e);
    }
    tracing::info!("Starting grocery list with {:?} backend", config.backend);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
