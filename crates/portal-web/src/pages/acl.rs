/// Access control page

use leptos::*;

use super::Placeholder;
use crate::types::Page;

#[component]
pub fn AclPage() -> impl IntoView {
    view! {
        <Placeholder page=Page::Acl>
            <p class="text-gray-600 dark:text-gray-400">
                "Access control rules coming soon..."
            </p>
        </Placeholder>
    }
}
