//! Todo Frontend Entry Point

mod config;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use tracing::{info, warn};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::embedded() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.log_level.as_tracing())
            .build(),
    );
    if let Some(err) = config_error {
        warn!(%err, "falling back to default config");
    }
    info!(todos = config.todos.len(), "mounting app");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
