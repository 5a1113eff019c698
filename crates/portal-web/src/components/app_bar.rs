/// Top app bar with the menu toggle
///
/// Shifts right by the drawer width while the drawer is open.

use leptos::*;

use crate::components::icons::MenuIcon;
use crate::components::shell::use_shell;
use crate::utils::layout::DrawerLayout;

#[component]
pub fn AppBar(
    #[prop(into)]
    title: String,
    layout: DrawerLayout,
) -> impl IntoView {
    let shell = use_shell();
    let open = move || shell.drawer_open();

    view! {
        <header
            class="fixed top-0 right-0 z-50 h-16 bg-white dark:bg-gray-950 border-b border-gray-200 dark:border-gray-800 shadow-sm"
            style=move || layout.app_bar_style(open())
        >
            <div class="flex items-center h-full px-4 space-x-3">
                <button
                    id="menu-toggle"
                    type="button"
                    aria-controls="portal-drawer"
                    aria-label=move || if open() { "close drawer" } else { "open drawer" }
                    aria-expanded=move || open().to_string()
                    on:click=move |_| {
                        shell.toggle_drawer();
                    }
                    class="p-2 rounded-lg text-gray-600 dark:text-gray-400 hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
                >
                    <MenuIcon class="w-6 h-6"/>
                </button>

                <h1 class="text-xl font-bold text-gray-900 dark:text-white truncate">
                    {title}
                </h1>

                <span class="ml-auto text-sm text-gray-600 dark:text-gray-400">
                    {move || shell.page().label()}
                </span>
            </div>
        </header>
    }
}
