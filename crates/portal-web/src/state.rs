/// Navigation state for the admin shell
///
/// Drawer visibility and the selected page. Both are UI-local and reset on reload.

use crate::types::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub drawer_open: bool,
    pub page: Page,
}

impl NavState {
    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// Flip the drawer and return whether it is now open.
    pub fn toggle_drawer(&mut self) -> bool {
        self.drawer_open = !self.drawer_open;
        self.drawer_open
    }

    /// Select `page`. Returns `false` when it was already selected.
    pub fn select(&mut self, page: Page) -> bool {
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.page == page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = NavState::default();
        assert!(!state.drawer_open);
        assert_eq!(state.page, Page::Dashboard);
    }

    #[test]
    fn test_toggle_drawer() {
        let mut state = NavState::default();
        assert!(state.toggle_drawer());
        assert!(state.drawer_open);
        assert!(!state.toggle_drawer());
        assert!(!state.drawer_open);
    }

    #[test]
    fn test_open_close_are_idempotent() {
        let mut state = NavState::default();
        state.open_drawer();
        state.open_drawer();
        assert!(state.drawer_open);
        state.close_drawer();
        state.close_drawer();
        assert!(!state.drawer_open);
    }

    #[test]
    fn test_select_marks_single_active_page() {
        let mut state = NavState::default();
        state.open_drawer();
        assert!(state.select(Page::Users));
        assert_eq!(state.page, Page::Users);

        let active: Vec<Page> = Page::ALL.into_iter().filter(|p| state.is_active(*p)).collect();
        assert_eq!(active, vec![Page::Users]);
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut state = NavState::default();
        state.select(Page::Config);
        let before = state;
        assert!(!state.select(Page::Config));
        assert_eq!(state, before);
    }

    #[test]
    fn test_drawer_and_page_are_independent() {
        let mut state = NavState::default();
        state.select(Page::Acl);
        state.toggle_drawer();
        assert_eq!(state.page, Page::Acl);
        state.close_drawer();
        assert_eq!(state.page, Page::Acl);

        state.open_drawer();
        state.select(Page::Users);
        assert!(state.drawer_open);
    }
}
