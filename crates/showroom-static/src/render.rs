//! Page rendering shared by the static builder and the live server.

use std::path::Path;

use chrono::Datelike;

use showroom_contact::{ContactForm, Notice};
use showroom_content::{Lightbox, NavState, Page, Reveal, SCROLL_THRESHOLD_PX};

use crate::templates::{join_url, Catalog, Context, InquiryOption, TemplateEngine};

/// Site-wide settings that do not change between requests.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    /// Site title
    pub site_title: String,
    /// Base URL the site is mounted at
    pub base_url: String,
    /// Paths of extra stylesheets, as configured
    pub styles: Vec<String>,
    /// Where the runtime script posts contact submissions
    pub contact_endpoint: String,
    /// Where the contact form posts without JavaScript
    pub form_action: String,
    /// Live-reload client script URL
    pub live_reload: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_title: "MH ENTERPRISES".to_string(),
            base_url: "/".to_string(),
            styles: vec![],
            contact_endpoint: "/api/contact".to_string(),
            form_action: "/contact".to_string(),
            live_reload: None,
        }
    }
}

/// Per-request state: everything a page shows that is not fixed content.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub nav: NavState,
    pub notice: Option<Notice>,
    pub form: ContactForm,
    pub lightbox: Lightbox,
    /// Shared latch of the page's reveal-on-scroll sections
    pub reveal: Reveal,
}

/// Renders pages from settings plus per-request state.
pub struct SiteRenderer {
    settings: SiteSettings,
    templates: TemplateEngine,
}

impl SiteRenderer {
    pub fn new(settings: SiteSettings) -> Self {
        Self {
            settings,
            templates: TemplateEngine::new(),
        }
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Render `page` in the given state.
    pub fn render(&self, page: Page, state: &PageState) -> Result<String, minijinja::Error> {
        let mut ctx = self.context(page.title());
        ctx.page = Some(page);
        ctx.full_hero = page.has_full_hero();
        ctx.nav = state.nav.links(page);
        ctx.nav_state = state.nav;
        ctx.menu_toggle_href = state.nav.toggle_href(page);
        ctx.reveal_threshold = state.reveal.threshold();
        ctx.reveal_class = state.reveal.css_class();
        ctx.notice = state.notice.clone();
        ctx.draft = state.form.draft().clone();
        ctx.submitting = state.form.is_submitting();
        // Only the gallery carries an overlay.
        if page == Page::Gallery {
            ctx.lightbox = state.lightbox.selected().copied();
        }

        self.templates.render_page(page.template(), &ctx)
    }

    /// Render the not-found page.
    pub fn render_not_found(&self, path: &str) -> Result<String, minijinja::Error> {
        tracing::debug!("Rendering not-found page for {}", path);
        let mut ctx = self.context("Page Not Found");
        ctx.nav = NavState::default()
            .links(Page::Home)
            .into_iter()
            .map(|mut link| {
                link.active = false;
                link
            })
            .collect();

        self.templates.render_page("not_found.html", &ctx)
    }

    fn context(&self, title: &str) -> Context {
        Context {
            page: None,
            title: title.to_string(),
            full_hero: false,
            site_title: self.settings.site_title.clone(),
            base_url: self.settings.base_url.clone(),
            nav: vec![],
            nav_state: NavState::default(),
            menu_toggle_href: NavState::default().toggle_href(Page::Home),
            scroll_threshold: SCROLL_THRESHOLD_PX,
            reveal_threshold: Reveal::default().threshold(),
            reveal_class: Reveal::default().css_class(),
            styles: style_hrefs(&self.settings.base_url, &self.settings.styles),
            contact_endpoint: self.settings.contact_endpoint.clone(),
            form_action: self.settings.form_action.clone(),
            notice: None,
            draft: Default::default(),
            submitting: false,
            inquiry_types: InquiryOption::all(),
            lightbox: None,
            live_reload: self.settings.live_reload.clone(),
            year: chrono::Local::now().year(),
            catalog: Catalog::new(),
        }
    }
}

/// Public URLs of the configured stylesheets, which are served from `assets/`.
pub fn style_hrefs(base_url: &str, styles: &[String]) -> Vec<String> {
    styles
        .iter()
        .filter_map(|style| Path::new(style).file_name()?.to_str())
        .map(|name| join_url(base_url, &format!("assets/{}", name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_contact::{Field, SubmitOutcome};
    use showroom_content::gallery_image;

    fn renderer() -> SiteRenderer {
        SiteRenderer::new(SiteSettings::default())
    }

    #[test]
    fn resolves_style_hrefs() {
        let styles = vec!["styles/brand.css".to_string(), "extra.css".to_string()];
        assert_eq!(
            style_hrefs("/", &styles),
            vec!["/assets/brand.css", "/assets/extra.css"]
        );
        assert_eq!(style_hrefs("/mh/", &styles)[0], "/mh/assets/brand.css");
    }

    #[test]
    fn renders_fresh_page_state() {
        let html = renderer().render(Page::Home, &PageState::default()).unwrap();

        assert!(html.contains("class=\"page-home\""));
        assert!(html.contains("<main class=\"noise\">"));
        assert!(!html.contains("site-nav scrolled"));
        assert!(!html.contains("data-testid=\"toast\""));
    }

    #[test]
    fn reveal_sections_stay_visible_without_scripts() {
        let html = renderer().render(Page::Contact, &PageState::default()).unwrap();
        let css = crate::AssetPipeline::generate_css();

        assert!(html.contains("<section class=\"section reveal\">"));
        assert!(css.contains(".reveal {\n  opacity: 0;"));
        assert!(css.contains(".no-js .reveal {\n  opacity: 1;"));
        assert!(html.contains("<html lang=\"en\" class=\"no-js\">"));
        assert!(html.contains("data-reveal-threshold=\"0.1\""));
    }

    #[test]
    fn renders_revealed_sections_from_state() {
        let mut state = PageState::default();
        assert!(state.reveal.observe(1.0));

        let html = renderer().render(Page::Contact, &state).unwrap();
        assert!(html.contains("<section class=\"section reveal visible\">"));
    }

    #[test]
    fn renders_open_menu_from_query() {
        let state = PageState {
            nav: NavState::from_query(Some("open")),
            ..Default::default()
        };

        let html = renderer().render(Page::Products, &state).unwrap();
        assert!(html.contains("aria-expanded=\"true\""));
        assert!(html.contains("<a href=\"/products\" class=\"menu-toggle\""));
        assert!(html.contains("href=\"/gallery\" class=\"mobile-link\""));
    }

    #[test]
    fn renders_scrolled_nav() {
        let mut state = PageState::default();
        state.nav.on_scroll(51.0);

        let html = renderer().render(Page::About, &state).unwrap();
        assert!(html.contains("site-nav scrolled"));
    }

    #[test]
    fn renders_lightbox_on_gallery_only() {
        let mut state = PageState::default();
        state.lightbox.select(gallery_image(0, 1).unwrap());

        let gallery = renderer().render(Page::Gallery, &state).unwrap();
        assert!(gallery.contains("<figcaption class=\"lightbox-caption\">Tile Collections</figcaption>"));

        let home = renderer().render(Page::Home, &state).unwrap();
        assert!(!home.contains("lightbox-caption\">Tile Collections"));
    }

    #[test]
    fn renders_form_after_failed_validation() {
        let mut state = PageState::default();
        state.form.edit(Field::Email, "someone@example.in").unwrap();
        let outcome = match state.form.begin_submit() {
            Err(outcome) => outcome,
            Ok(_) => panic!("empty form must not validate"),
        };
        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        state.notice = Some(outcome.notice());

        let html = renderer().render(Page::Contact, &state).unwrap();
        assert!(html.contains("value=\"someone@example.in\""));
        assert!(html.contains("Please fill in all required fields"));
    }

    #[test]
    fn renders_live_reload_script_when_configured() {
        let renderer = SiteRenderer::new(SiteSettings {
            live_reload: Some("/__reload.js".to_string()),
            ..Default::default()
        });

        let html = renderer.render(Page::Products, &PageState::default()).unwrap();
        assert!(html.contains("<script src=\""));
        assert!(html.contains("__reload.js"));

        let html = SiteRenderer::new(SiteSettings::default())
            .render(Page::Products, &PageState::default())
            .unwrap();
        assert!(!html.contains("__reload.js"));
    }

    #[test]
    fn renders_not_found_without_active_link() {
        let html = renderer().render_not_found("/missing").unwrap();

        assert!(html.contains("Page Not Found"));
        assert!(!html.contains("nav-link active"));
    }

    #[test]
    fn footer_shows_current_year() {
        let year = chrono::Local::now().year().to_string();
        let html = renderer().render(Page::Home, &PageState::default()).unwrap();
        assert!(html.contains(&format!("&copy; {} MH ENTERPRISES", year)));
    }
}
