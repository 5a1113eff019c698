/// Configuration page
///
/// Read-only view of the portal configuration.

use leptos::*;

use super::Placeholder;
use crate::types::Page;

#[component]
pub fn ConfigPage() -> impl IntoView {
    view! {
        <Placeholder page=Page::Config>
            <p class="text-gray-600 dark:text-gray-400">
                "Configuration viewer coming soon..."
            </p>
        </Placeholder>
    }
}
