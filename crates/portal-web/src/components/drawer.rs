/// Side drawer navigation component
///
/// Left-anchored drawer with the portal logo, a close control and one entry per page.
/// Entries are highlighted when they match the current selection.

use leptos::*;

use crate::components::icons::{ChevronLeftIcon, PageIcon};
use crate::components::shell::use_shell;
use crate::types::Page;
use crate::utils::layout::DrawerLayout;

#[component]
pub fn Drawer(
    #[prop(into)]
    title: String,
    logo_src: Option<String>,
    layout: DrawerLayout,
) -> impl IntoView {
    let shell = use_shell();
    let open = move || shell.drawer_open();

    let logo = logo_src.map(|src| {
        view! {
            <div class=move || if open() { "mx-auto mt-2.5 px-4" } else { "hidden" }>
                <img src=src alt=title.clone() class="w-full"/>
            </div>
        }
    });

    view! {
        <aside
            id="portal-drawer"
            aria-hidden=move || (!layout.entries_visible(open())).to_string()
            class="fixed inset-y-0 left-0 z-40 flex flex-col whitespace-nowrap bg-white dark:bg-gray-950 border-r border-gray-200 dark:border-gray-800"
            style=move || layout.drawer_style(open())
        >
            <div class="flex items-center justify-end h-16 px-2">
                <Show when=open>
                    <button
                        id="drawer-close"
                        type="button"
                        aria-label="close drawer"
                        on:click=move |_| shell.close_drawer()
                        class="p-2 rounded-lg text-gray-600 dark:text-gray-400 hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
                    >
                        <ChevronLeftIcon class="w-5 h-5"/>
                    </button>
                </Show>
            </div>

            {logo}

            <nav class="flex-1 px-2 py-4 space-y-1">
                {Page::ALL
                    .into_iter()
                    .map(|page| view! { <DrawerEntry page=page/> })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
fn DrawerEntry(page: Page) -> impl IntoView {
    let shell = use_shell();
    let active = move || shell.is_active(page);

    view! {
        <button
            id=format!("drawer-entry-{}", page.slug())
            type="button"
            title=page.label()
            aria-current=move || active().then_some("page")
            on:click=move |_| {
                shell.select(page);
            }
            class=move || format!(
                "w-full flex items-center px-3 py-2 text-sm font-medium rounded-lg transition-colors {}",
                if active() {
                    "bg-blue-50 text-blue-600 dark:bg-blue-900/20 dark:text-blue-400"
                } else {
                    "text-gray-600 dark:text-gray-400 hover:bg-gray-100 dark:hover:bg-gray-800 hover:text-gray-900 dark:hover:text-white"
                }
            )
        >
            <PageIcon page=page class="w-5 h-5 flex-shrink-0"/>
            <span class=move || if shell.drawer_open() { "ml-3" } else { "sr-only" }>
                {page.label()}
            </span>
        </button>
    }
}
