/// Main application component and routing
///
/// Defines the root App component: document metadata, the shell config hand-off
/// to the hydrating client, and the router.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use tracing::error;

use crate::components::shell::Shell;
use crate::config::{ShellConfig, CONFIG_ELEMENT_ID};
use crate::pages::not_found::NotFoundPage;

/// Shell config provided by the server or read back by `hydrate`; defaults otherwise.
pub fn use_shell_config() -> ShellConfig {
    use_context::<ShellConfig>().unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = use_shell_config();
    let config_json = config.to_json().unwrap_or_else(|e| {
        error!("Failed to serialize shell config: {}", e);
        String::from("{}")
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portal-web.css"/>
        <Title text=config.title.clone()/>
        <Meta name="description" content="Authentication portal administration interface"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

        <script id=CONFIG_ELEMENT_ID type="application/json" inner_html=config_json></script>

        <Router>
            <Routes>
                <Route path="/" view=Shell/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}
