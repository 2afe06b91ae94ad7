//! Navigation bar state.

use serde::Serialize;

use crate::pages::Page;

/// Vertical scroll offset past which the navigation bar turns opaque.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Query flag that opens the mobile menu on a page load without scripts.
pub const MENU_OPEN_QUERY: &str = "menu=open";

/// Scroll and mobile-menu flags of the navigation bar.
///
/// Starts transparent with the menu closed; nothing is carried across page loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a fresh page load, given the value of its `menu` query flag.
    pub fn from_query(menu: Option<&str>) -> Self {
        let mut nav = Self::new();
        // A page load starts at the top.
        nav.on_scroll(0.0);
        if menu == Some("open") {
            nav.toggle_menu();
        }
        nav
    }

    /// Recompute the opaque flag from the current vertical scroll offset.
    pub fn on_scroll(&mut self, offset_y: f64) {
        self.scrolled = offset_y > SCROLL_THRESHOLD_PX;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following any link closes the mobile panel.
    pub fn select_link(&mut self) {
        self.menu_open = false;
    }

    /// URL of `path` that reproduces this menu state on load.
    pub fn href(&self, path: &str) -> String {
        if self.menu_open {
            format!("{}?{}", path, MENU_OPEN_QUERY)
        } else {
            path.to_string()
        }
    }

    /// Where the menu toggle leads without scripts: `current` with the menu flipped.
    pub fn toggle_href(&self, current: Page) -> String {
        let mut next = *self;
        next.toggle_menu();
        next.href(current.path())
    }

    /// Where a mobile panel link leads: `target` with the panel closed.
    pub fn link_href(&self, target: Page) -> String {
        let mut next = *self;
        next.select_link();
        next.href(target.path())
    }

    /// Links for the bar, with the one for `current` marked active.
    pub fn links(&self, current: Page) -> Vec<NavLink> {
        Page::ALL
            .into_iter()
            .map(|page| NavLink {
                label: page.label(),
                path: page.path(),
                menu_href: self.link_href(page),
                slug: page.label().to_lowercase().replace(' ', "-"),
                active: page == current,
            })
            .collect()
    }
}

/// A rendered navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    /// Target of the same link inside the mobile panel
    pub menu_href: String,
    /// Stable identifier for test hooks, e.g. `for-builders`
    pub slug: String,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_opaque_past_threshold_and_back() {
        let mut nav = NavState::new();
        assert!(!nav.scrolled);

        nav.on_scroll(51.0);
        assert!(nav.scrolled);

        nav.on_scroll(50.0);
        assert!(!nav.scrolled);

        nav.on_scroll(400.0);
        nav.on_scroll(0.0);
        assert!(!nav.scrolled);
    }

    #[test]
    fn link_selection_closes_menu() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        assert!(nav.menu_open);

        nav.select_link();
        assert!(!nav.menu_open);

        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn marks_current_page_active() {
        let links = NavState::new().links(Page::Builders);
        assert_eq!(links.len(), 6);

        let active: Vec<_> = links.iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].path, "/builders");
        assert_eq!(active[0].slug, "for-builders");
    }

    #[test]
    fn opens_menu_from_query() {
        assert_eq!(NavState::from_query(None), NavState::new());
        assert_eq!(NavState::from_query(Some("closed")), NavState::new());

        let nav = NavState::from_query(Some("open"));
        assert!(nav.menu_open);
        assert!(!nav.scrolled);
    }

    #[test]
    fn menu_links_follow_toggle_and_selection() {
        let closed = NavState::new();
        assert_eq!(closed.toggle_href(Page::About), "/about?menu=open");
        assert_eq!(closed.link_href(Page::Gallery), "/gallery");

        let open = NavState::from_query(Some("open"));
        assert_eq!(open.toggle_href(Page::About), "/about");
        assert_eq!(open.link_href(Page::Contact), "/contact");

        let links = open.links(Page::Home);
        assert!(links.iter().all(|l| l.menu_href == l.path));
    }
}
