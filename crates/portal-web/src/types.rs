/// Type definitions for the portal web interface
///
/// The closed set of admin pages the navigation shell can display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A page selectable from the navigation drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Page {
    #[default]
    Dashboard,
    Users,
    Acl,
    Config,
}

impl Page {
    /// Every page, in drawer order.
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Users, Page::Acl, Page::Config];

    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Users => "Users",
            Page::Acl => "ACL",
            Page::Config => "Config",
        }
    }

    /// Lowercase identifier used in DOM ids and config files.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Users => "users",
            Page::Acl => "acl",
            Page::Config => "config",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Page::Dashboard => "Overview of the authentication portal",
            Page::Users => "Manage portal users and their groups",
            Page::Acl => "Review access control rules",
            Page::Config => "Inspect the portal configuration",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageParseError {
    #[error("Unknown page: {0}")]
    UnknownPage(String),
}

impl FromStr for Page {
    type Err = PageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Page::ALL
            .into_iter()
            .find(|page| page.slug().eq_ignore_ascii_case(name))
            .ok_or_else(|| PageParseError::UnknownPage(name.to_string()))
    }
}

impl TryFrom<String> for Page {
    type Error = PageParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Page> for String {
    fn from(page: Page) -> Self {
        page.slug().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_is_dashboard() {
        assert_eq!(Page::default(), Page::Dashboard);
        assert_eq!(Page::ALL[0], Page::Dashboard);
    }

    #[test]
    fn test_parse_page() {
        assert_eq!("dashboard".parse::<Page>().unwrap(), Page::Dashboard);
        assert_eq!("Users".parse::<Page>().unwrap(), Page::Users);
        assert_eq!("ACL".parse::<Page>().unwrap(), Page::Acl);
        assert_eq!(" config ".parse::<Page>().unwrap(), Page::Config);
        assert_eq!(
            "policies".parse::<Page>(),
            Err(PageParseError::UnknownPage("policies".to_string()))
        );
        assert!("".parse::<Page>().is_err());
    }

    #[test]
    fn test_labels_and_slugs_are_unique() {
        for (i, a) in Page::ALL.iter().enumerate() {
            for b in &Page::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
                assert_ne!(a.slug(), b.slug());
            }
        }
        assert_eq!(Page::Acl.to_string(), "ACL");
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Page::Acl).unwrap();
        assert_eq!(json, "\"acl\"");
        let page: Page = serde_json::from_str("\"Users\"").unwrap();
        assert_eq!(page, Page::Users);
        assert!(serde_json::from_str::<Page>("\"nope\"").is_err());
    }
}
