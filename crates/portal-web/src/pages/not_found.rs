/// Fallback view for unknown paths
///
/// The admin shell lives at `/` only; admin sections are chosen from the drawer,
/// never from the address bar.

use leptos::*;

use crate::types::Page;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section id="page-not-found" class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900">
            <div class="max-w-md p-8 bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 text-center">
                <p class="text-sm font-semibold text-blue-600 dark:text-blue-400">"404"</p>
                <h1 class="mt-2 text-2xl font-bold text-gray-900 dark:text-white">
                    "Nothing to administer here"
                </h1>
                <p class="mt-2 text-sm text-gray-600 dark:text-gray-400">
                    "Open the portal admin and pick a section from the menu."
                </p>
                <a
                    href="/"
                    class="mt-6 inline-block px-4 py-2 text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700"
                >
                    {format!("Go to {}", Page::Dashboard.label())}
                </a>
            </div>
        </section>
    }
}
