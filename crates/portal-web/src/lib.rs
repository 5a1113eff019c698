/// Portal Web Admin Interface
///
/// Leptos navigation shell for the authentication portal: a top app bar, a
/// collapsible side drawer and a content area switching between admin pages.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod types;
pub mod utils;

pub use config::ShellConfig;
pub use state::NavState;
pub use types::Page;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = read_embedded_config();
    leptos::mount_to_body(move || {
        leptos::provide_context(config.clone());
        leptos::view! { <App/> }
    });
}

/// Read back the config the server embedded in the page.
#[cfg(feature = "hydrate")]
fn read_embedded_config() -> ShellConfig {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(config::CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match text.as_deref().map(ShellConfig::from_json_str) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            tracing::warn!("Ignoring embedded shell config: {}", e);
            ShellConfig::default()
        }
        None => {
            tracing::warn!("No embedded shell config, using defaults");
            ShellConfig::default()
        }
    }
}
