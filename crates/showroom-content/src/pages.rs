//! The site's route table.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One of the six pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    About,
    Products,
    Gallery,
    Builders,
    Contact,
}

/// Returned when a path does not name one of the six pages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No page is routed at {0}")]
pub struct ParsePageError(pub String);

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Products,
        Page::Gallery,
        Page::Builders,
        Page::Contact,
    ];

    /// Route path, always with a leading slash and no trailing slash.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Products => "/products",
            Page::Gallery => "/gallery",
            Page::Builders => "/builders",
            Page::Contact => "/contact",
        }
    }

    /// Label used in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Products => "Products",
            Page::Gallery => "Gallery",
            Page::Builders => "For Builders",
            Page::Contact => "Contact",
        }
    }

    /// Document title, without the site name.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Premium Tiles, Marbles & Interior Solutions",
            Page::About => "About Us",
            Page::Products => "Our Products",
            Page::Gallery => "Our Gallery",
            Page::Builders => "For Builders & Designers",
            Page::Contact => "Contact Us",
        }
    }

    /// Template that renders this page.
    pub fn template(self) -> &'static str {
        match self {
            Page::Home => "home.html",
            Page::About => "about.html",
            Page::Products => "products.html",
            Page::Gallery => "gallery.html",
            Page::Builders => "builders.html",
            Page::Contact => "contact.html",
        }
    }

    /// Whether the page starts with a full-height hero under a transparent nav bar.
    ///
    /// Every other page is padded below the fixed navigation bar.
    pub fn has_full_hero(self) -> bool {
        self == Page::Home
    }

    /// Look up the page routed at `path`. A single trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };
        Page::ALL.into_iter().find(|page| page.path() == trimmed)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Page {
    type Err = ParsePageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::from_path(s).ok_or_else(|| ParsePageError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_every_page() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn tolerates_trailing_slash() {
        assert_eq!(Page::from_path("/gallery/"), Some(Page::Gallery));
        assert_eq!(Page::from_path("/"), Some(Page::Home));
    }

    #[test]
    fn leaves_unknown_paths_unrouted() {
        assert_eq!(Page::from_path("/blog"), None);
        assert_eq!(Page::from_path("/about/team"), None);
        assert_eq!(Page::from_path(""), None);

        let err = "/nope".parse::<Page>().unwrap_err();
        assert_eq!(err.to_string(), "No page is routed at /nope");
    }

    #[test]
    fn only_home_has_full_hero() {
        let full: Vec<_> = Page::ALL.into_iter().filter(|p| p.has_full_hero()).collect();
        assert_eq!(full, vec![Page::Home]);
    }
}
