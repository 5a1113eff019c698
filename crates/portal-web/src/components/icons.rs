/// Inline SVG icons
///
/// Material-style 24px icons for the app bar and drawer entries.

use leptos::*;

use crate::types::Page;

const DASHBOARD_PATH: &str = "M3 13h8V3H3v10zm0 8h8v-6H3v6zm10 0h8V11h-8v10zm0-18v6h8V3h-8z";
const USERS_PATH: &str = "M16 11c1.66 0 2.99-1.34 2.99-3S17.66 5 16 5c-1.66 0-3 1.34-3 3s1.34 3 3 3zm-8 0c1.66 0 2.99-1.34 2.99-3S9.66 5 8 5C6.34 5 5 6.34 5 8s1.34 3 3 3zm0 2c-2.33 0-7 1.17-7 3.5V19h14v-2.5c0-2.33-4.67-3.5-7-3.5zm8 0c-.29 0-.62.02-.97.05 1.16.84 1.97 1.97 1.97 3.45V19h6v-2.5c0-2.33-4.67-3.5-7-3.5z";
const LOCK_PATH: &str = "M18 8h-1V6c0-2.76-2.24-5-5-5S7 3.24 7 6v2H6c-1.1 0-2 .9-2 2v10c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V10c0-1.1-.9-2-2-2zm-6 9c-1.1 0-2-.9-2-2s.9-2 2-2 2 .9 2 2-.9 2-2 2zm3.1-9H8.9V6c0-1.71 1.39-3.1 3.1-3.1 1.71 0 3.1 1.39 3.1 3.1v2z";
const SETTINGS_PATH: &str = "M19.14 12.94c.04-.31.06-.63.06-.94 0-.31-.02-.63-.06-.94l2.03-1.58c.18-.14.23-.41.12-.61l-1.92-3.32c-.12-.22-.37-.29-.59-.22l-2.39.96c-.5-.38-1.03-.7-1.62-.94l-.36-2.54c-.04-.24-.24-.41-.48-.41h-3.84c-.24 0-.43.17-.47.41l-.36 2.54c-.59.24-1.13.57-1.62.94l-2.39-.96c-.22-.08-.47 0-.59.22L2.74 8.87c-.12.21-.08.47.12.61l2.03 1.58c-.04.31-.06.63-.06.94s.02.63.06.94l-2.03 1.58c-.18.14-.23.41-.12.61l1.92 3.32c.12.22.37.29.59.22l2.39-.96c.5.38 1.03.7 1.62.94l.36 2.54c.05.24.24.41.48.41h3.84c.24 0 .44-.17.47-.41l.36-2.54c.59-.24 1.13-.56 1.62-.94l2.39.96c.22.08.47 0 .59-.22l1.92-3.32c.12-.22.07-.47-.12-.61l-2.01-1.58zM12 15.6c-1.98 0-3.6-1.62-3.6-3.6s1.62-3.6 3.6-3.6 3.6 1.62 3.6 3.6-1.62 3.6-3.6 3.6z";
const MENU_PATH: &str = "M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z";
const CHEVRON_LEFT_PATH: &str = "M15.41 7.41L14 6l-6 6 6 6 1.41-1.41L10.83 12z";

/// SVG path data for a page's drawer icon.
pub fn page_icon_path(page: Page) -> &'static str {
    match page {
        Page::Dashboard => DASHBOARD_PATH,
        Page::Users => USERS_PATH,
        Page::Acl => LOCK_PATH,
        Page::Config => SETTINGS_PATH,
    }
}

fn svg_icon(path: &'static str, class: String) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d=path/>
        </svg>
    }
}

#[component]
pub fn PageIcon(
    page: Page,
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    svg_icon(page_icon_path(page), class)
}

#[component]
pub fn MenuIcon(
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    svg_icon(MENU_PATH, class)
}

#[component]
pub fn ChevronLeftIcon(
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    svg_icon(CHEVRON_LEFT_PATH, class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_has_distinct_icon() {
        for (i, a) in Page::ALL.iter().enumerate() {
            assert!(!page_icon_path(*a).is_empty());
            for b in &Page::ALL[i + 1..] {
                assert_ne!(page_icon_path(*a), page_icon_path(*b));
            }
        }
    }
}
