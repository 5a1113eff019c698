/// Dashboard overview page
///
/// Landing page of the admin interface.

use leptos::*;

use super::Placeholder;
use crate::types::Page;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Placeholder page=Page::Dashboard>
            <p class="text-gray-600 dark:text-gray-400">
                "Portal overview coming soon..."
            </p>
        </Placeholder>
    }
}
