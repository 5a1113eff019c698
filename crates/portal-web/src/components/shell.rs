/// Shell component that wraps the main application layout
///
/// Owns the navigation state and lays out the app bar, the side drawer and the
/// content area showing the selected page.

use leptos::*;
use tracing::debug;

use crate::app::use_shell_config;
use crate::components::{app_bar::AppBar, drawer::Drawer};
use crate::pages::PageView;
use crate::state::NavState;
use crate::types::Page;
use crate::utils::layout::DrawerLayout;

/// Reactive handle on the shell's navigation state
#[derive(Debug, Clone, Copy)]
pub struct ShellContext {
    state: RwSignal<NavState>,
}

impl ShellContext {
    pub fn new(initial: NavState) -> Self {
        Self {
            state: create_rw_signal(initial),
        }
    }

    pub fn drawer_open(&self) -> bool {
        self.state.with(|s| s.drawer_open)
    }

    pub fn page(&self) -> Page {
        self.state.with(|s| s.page)
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.state.with(|s| s.is_active(page))
    }

    /// Current state without subscribing.
    pub fn snapshot(&self) -> NavState {
        self.state.get_untracked()
    }

    pub fn open_drawer(&self) {
        debug!("Opening drawer");
        self.state.update(|s| s.open_drawer());
    }

    pub fn close_drawer(&self) {
        debug!("Closing drawer");
        self.state.update(|s| s.close_drawer());
    }

    pub fn toggle_drawer(&self) -> bool {
        let mut open = false;
        self.state.update(|s| open = s.toggle_drawer());
        debug!(open, "Toggled drawer");
        open
    }

    /// Select `page`. Reselecting the active page leaves the signal untouched.
    pub fn select(&self, page: Page) -> bool {
        if self.state.with_untracked(|s| s.is_active(page)) {
            return false;
        }
        debug!(page = page.slug(), "Selecting page");
        self.state.update(|s| s.page = page);
        true
    }
}

/// Hook to access the shell's navigation state
pub fn use_shell() -> ShellContext {
    use_context::<ShellContext>()
        .expect("ShellContext must be provided by Shell")
}

/// Always starts closed on the dashboard.
#[component]
pub fn Shell() -> impl IntoView {
    provide_context(ShellContext::new(NavState::default()));

    view! { <ShellLayout/> }
}

/// Layout driven by the `ShellContext` already in scope
#[component]
pub fn ShellLayout() -> impl IntoView {
    let config = use_shell_config();
    let layout = DrawerLayout::from_config(&config);
    let shell = use_shell();

    let open = move || shell.drawer_open();

    view! {
        <div class="portal-shell min-h-screen bg-gray-50 dark:bg-gray-900" style=layout.shell_vars()>
            <AppBar title=config.title.clone() layout=layout/>

            <Drawer title=config.title.clone() logo_src=config.logo_src.clone() layout=layout/>

            <main class="pt-16" style=move || layout.content_style(open())>
                <div class="container mx-auto px-4 py-6 max-w-7xl">
                    {move || view! { <PageView page=shell.page()/> }}
                </div>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_select_and_toggle() {
        let runtime = create_runtime();

        let shell = ShellContext::new(NavState::default());
        assert_eq!(shell.snapshot(), NavState::default());

        assert!(shell.toggle_drawer());
        assert!(shell.select(Page::Users));
        assert!(!shell.select(Page::Users));
        assert!(shell.is_active(Page::Users));
        assert!(!shell.is_active(Page::Dashboard));

        shell.close_drawer();
        assert_eq!(
            shell.snapshot(),
            NavState {
                drawer_open: false,
                page: Page::Users,
            }
        );

        runtime.dispose();
    }

    #[test]
    fn test_reselect_does_not_notify() {
        let runtime = create_runtime();

        let shell = ShellContext::new(NavState::default());
        shell.select(Page::Config);
        let notifications = create_rw_signal(0);
        create_isomorphic_effect(move |_| {
            shell.page();
            notifications.update_untracked(|n| *n += 1);
        });
        let initial = notifications.get_untracked();

        assert!(!shell.select(Page::Config));
        assert_eq!(notifications.get_untracked(), initial);

        assert!(shell.select(Page::Acl));
        assert_eq!(shell.snapshot().page, Page::Acl);
        assert_eq!(notifications.get_untracked(), initial + 1);

        runtime.dispose();
    }
}
