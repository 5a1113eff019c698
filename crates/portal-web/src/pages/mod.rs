/// Page components for the portal web interface
///
/// Placeholder views for each admin section, plus the not-found view.

pub mod dashboard;
pub mod users;
pub mod acl;
pub mod config;
pub mod not_found;

use leptos::*;

use crate::types::Page;
use self::{acl::AclPage, config::ConfigPage, dashboard::DashboardPage, users::UsersPage};

/// Renders the view for the selected page
#[component]
pub fn PageView(page: Page) -> impl IntoView {
    match page {
        Page::Dashboard => view! { <DashboardPage/> }.into_view(),
        Page::Users => view! { <UsersPage/> }.into_view(),
        Page::Acl => view! { <AclPage/> }.into_view(),
        Page::Config => view! { <ConfigPage/> }.into_view(),
    }
}

/// Heading and "coming soon" panel shared by the placeholder pages
#[component]
pub(crate) fn Placeholder(page: Page, children: Children) -> impl IntoView {
    view! {
        <section id=format!("page-{}", page.slug()) class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                    {page.label()}
                </h1>
                <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                    {page.description()}
                </p>
            </div>

            <div class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 p-8 text-center">
                {children()}
            </div>
        </section>
    }
}
