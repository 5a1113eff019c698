/// Drawer and app bar geometry
///
/// Inline styles for the shell's moving parts. Breakpoint-dependent widths are
/// exposed as CSS custom properties and resolved by `style/main.css`.

use crate::config::{DrawerVariant, ShellConfig};

/// Theme spacing unit in pixels.
pub const SPACING: u32 = 8;

const EASING_SHARP: &str = "cubic-bezier(0.4, 0, 0.6, 1)";
const DURATION_ENTERING_MS: u32 = 225;
const DURATION_LEAVING_MS: u32 = 195;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Xs,
    Sm,
}

/// Width of the collapsed icon rail.
pub fn rail_width(breakpoint: Breakpoint) -> u32 {
    match breakpoint {
        Breakpoint::Xs => SPACING * 7 + 1,
        Breakpoint::Sm => SPACING * 9 + 1,
    }
}

fn transition(properties: &[&str], open: bool) -> String {
    let duration = if open { DURATION_ENTERING_MS } else { DURATION_LEAVING_MS };
    properties
        .iter()
        .map(|p| format!("{} {}ms {} 0ms", p, duration, EASING_SHARP))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerLayout {
    pub width: u32,
    pub variant: DrawerVariant,
}

impl DrawerLayout {
    pub fn from_config(config: &ShellConfig) -> Self {
        Self {
            width: config.drawer_width,
            variant: config.drawer_variant,
        }
    }

    /// Custom properties set on the shell root.
    pub fn shell_vars(&self) -> String {
        format!(
            "--drawer-width: {}px; --rail-width-xs: {}px; --rail-width-sm: {}px;",
            self.width,
            rail_width(Breakpoint::Xs),
            rail_width(Breakpoint::Sm),
        )
    }

    /// Whether the closed drawer still shows its icon rail.
    pub fn shows_rail(&self, open: bool) -> bool {
        !open && self.variant == DrawerVariant::Mini
    }

    /// Whether drawer entries are rendered at all.
    pub fn entries_visible(&self, open: bool) -> bool {
        open || self.variant == DrawerVariant::Mini
    }

    pub fn drawer_style(&self, open: bool) -> String {
        let transition = transition(&["width", "transform"], open);
        if open {
            format!("width: {}px; transition: {};", self.width, transition)
        } else {
            match self.variant {
                DrawerVariant::Persistent => format!(
                    "width: {w}px; transform: translateX(-{w}px); visibility: hidden; transition: {t};",
                    w = self.width,
                    t = transition,
                ),
                DrawerVariant::Mini => format!(
                    "width: var(--rail-width); overflow-x: hidden; transition: {};",
                    transition
                ),
            }
        }
    }

    pub fn app_bar_style(&self, open: bool) -> String {
        let transition = transition(&["width", "margin"], open);
        if open {
            format!(
                "margin-left: {w}px; width: calc(100% - {w}px); transition: {t};",
                w = self.width,
                t = transition,
            )
        } else {
            format!("margin-left: 0; width: 100%; transition: {};", transition)
        }
    }

    pub fn content_style(&self, open: bool) -> String {
        let transition = transition(&["margin"], open);
        let offset = if open {
            format!("{}px", self.width)
        } else if self.shows_rail(open) {
            "var(--rail-width)".to_string()
        } else {
            "0".to_string()
        };
        format!("margin-left: {}; transition: {};", offset, transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(variant: DrawerVariant) -> DrawerLayout {
        DrawerLayout {
            width: 240,
            variant,
        }
    }

    #[test]
    fn test_rail_widths() {
        assert_eq!(rail_width(Breakpoint::Xs), 57);
        assert_eq!(rail_width(Breakpoint::Sm), 73);
        assert_eq!(
            layout(DrawerVariant::Mini).shell_vars(),
            "--drawer-width: 240px; --rail-width-xs: 57px; --rail-width-sm: 73px;"
        );
    }

    #[test]
    fn test_open_drawer_uses_configured_width() {
        let style = layout(DrawerVariant::Persistent).drawer_style(true);
        assert!(style.starts_with("width: 240px;"));
        assert!(style.contains("225ms"));
        assert!(!style.contains("hidden"));
    }

    #[test]
    fn test_closed_persistent_drawer_is_hidden() {
        let layout = layout(DrawerVariant::Persistent);
        let style = layout.drawer_style(false);
        assert!(style.contains("translateX(-240px)"));
        assert!(style.contains("visibility: hidden"));
        assert!(style.contains("195ms"));
        assert!(!layout.shows_rail(false));
        assert!(!layout.entries_visible(false));
        assert_eq!(
            layout.content_style(false),
            format!("margin-left: 0; transition: {};", transition(&["margin"], false))
        );
    }

    #[test]
    fn test_closed_mini_drawer_shows_rail() {
        let layout = layout(DrawerVariant::Mini);
        assert!(layout.shows_rail(false));
        assert!(!layout.shows_rail(true));
        assert!(layout.entries_visible(false));
        assert!(layout.drawer_style(false).starts_with("width: var(--rail-width);"));
        assert!(layout.content_style(false).starts_with("margin-left: var(--rail-width);"));
    }

    #[test]
    fn test_app_bar_shifts_when_open() {
        let layout = layout(DrawerVariant::Persistent);
        assert!(layout
            .app_bar_style(true)
            .starts_with("margin-left: 240px; width: calc(100% - 240px);"));
        assert!(layout.app_bar_style(false).starts_with("margin-left: 0; width: 100%;"));
    }

    #[test]
    fn test_from_config() {
        let config = ShellConfig {
            drawer_width: 320,
            drawer_variant: DrawerVariant::Mini,
            ..ShellConfig::default()
        };
        assert_eq!(
            DrawerLayout::from_config(&config),
            DrawerLayout {
                width: 320,
                variant: DrawerVariant::Mini
            }
        );
    }
}
