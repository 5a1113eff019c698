/// Users management page
///
/// Interface for managing portal users and their groups.

use leptos::*;

use super::Placeholder;
use crate::types::Page;

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <Placeholder page=Page::Users>
            <p class="text-gray-600 dark:text-gray-400">
                "Users management interface coming soon..."
            </p>
        </Placeholder>
    }
}
