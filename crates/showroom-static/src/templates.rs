//! Template engine for rendering site pages.

use minijinja::{Environment, State, Value};
use serde::Serialize;

use showroom_contact::{ContactDraft, InquiryType, Notice};
use showroom_content::catalog::{
    heroes, AUDIENCES, BENEFITS, CATEGORIES, FEATURES, GALLERY, REASONS, REVIEWS, SERVICES, STORY,
    VALUES,
};
use showroom_content::{
    Audience, Business, Feature, GalleryImage, GallerySection, NavLink, NavState, Page,
    ProductCategory, Reason, Review, Service, Value as CompanyValue, BUSINESS,
};

use crate::icons::render_icon;

/// Outbound links shared by several pages.
#[derive(Debug, Clone, Serialize)]
pub struct Links {
    pub whatsapp: String,
    pub partnership: String,
    pub tel: String,
    pub map: &'static str,
}

impl Links {
    pub fn from_business(business: &Business) -> Self {
        Self {
            whatsapp: business.whatsapp_url(),
            partnership: business.partnership_url(),
            tel: business.tel_url(),
            map: business.map_url,
        }
    }
}

/// Hard-coded page content, exposed to every template.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub business: Business,
    pub links: Links,
    pub features: &'static [Feature],
    pub reasons: &'static [Reason],
    pub reviews: &'static [Review],
    pub story: &'static [&'static str],
    pub values: &'static [CompanyValue],
    pub audiences: &'static [Audience],
    pub categories: &'static [ProductCategory],
    pub gallery: &'static [GallerySection],
    pub services: &'static [Service],
    pub benefits: &'static [&'static str],
    pub heroes: Heroes,
}

/// Hero background per page.
#[derive(Debug, Clone, Serialize)]
pub struct Heroes {
    pub home: &'static str,
    pub about: &'static str,
    pub products: &'static str,
    pub gallery: &'static str,
    pub builders: &'static str,
    pub contact: &'static str,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            business: BUSINESS,
            links: Links::from_business(&BUSINESS),
            features: FEATURES,
            reasons: REASONS,
            reviews: REVIEWS,
            story: STORY,
            values: VALUES,
            audiences: AUDIENCES,
            categories: CATEGORIES,
            gallery: GALLERY,
            services: SERVICES,
            benefits: BENEFITS,
            heroes: Heroes {
                home: heroes::HOME,
                about: heroes::ABOUT,
                products: heroes::PRODUCTS,
                gallery: heroes::GALLERY,
                builders: heroes::BUILDERS,
                contact: heroes::CONTACT,
            },
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// An option of the inquiry type select.
#[derive(Debug, Clone, Serialize)]
pub struct InquiryOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl InquiryOption {
    pub fn all() -> Vec<InquiryOption> {
        InquiryType::ALL
            .into_iter()
            .map(|t| InquiryOption {
                value: t.as_str(),
                label: t.label(),
            })
            .collect()
    }
}

/// Context for rendering a page template.
#[derive(Debug, Clone, Serialize)]
pub struct Context {
    /// Page being rendered, `None` for the not-found page
    pub page: Option<Page>,
    /// Document title
    pub title: String,
    /// Whether the page opens with a full-height hero behind the navigation bar
    pub full_hero: bool,
    /// Site title
    pub site_title: String,
    /// Base URL
    pub base_url: String,
    /// Navigation links
    pub nav: Vec<NavLink>,
    /// Initial navigation bar state
    pub nav_state: NavState,
    /// Where the menu toggle leads when scripts are off
    pub menu_toggle_href: String,
    /// Scroll offset past which the navigation bar turns opaque
    pub scroll_threshold: f64,
    /// Fraction of a section that must be visible before it reveals
    pub reveal_threshold: f64,
    /// Class list of reveal-on-scroll sections
    pub reveal_class: &'static str,
    /// Paths to extra CSS stylesheets
    pub styles: Vec<String>,
    /// Where the runtime script posts contact submissions
    pub contact_endpoint: String,
    /// Where the form posts without JavaScript
    pub form_action: String,
    /// Notice to show on load
    pub notice: Option<Notice>,
    /// Contact form values
    pub draft: ContactDraft,
    /// Whether the contact form is in flight
    pub submitting: bool,
    /// Options of the inquiry type select
    pub inquiry_types: Vec<InquiryOption>,
    /// Gallery picture shown enlarged on load
    pub lightbox: Option<GalleryImage>,
    /// Live-reload client script URL, dev mode only
    pub live_reload: Option<String>,
    /// Year printed in the footer
    pub year: i32,
    /// Hard-coded page content
    pub catalog: Catalog,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        for (name, source) in TEMPLATES {
            env.add_template(name, source)
                .expect("Built-in template must parse");
        }

        env.add_filter("icon", icon_filter);
        env.add_filter("href", href_filter);
        env.add_filter("inquiry_url", inquiry_url_filter);

        Self { env }
    }

    /// Render a page using the specified template.
    pub fn render_page(&self, template: &str, context: &Context) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;
        tmpl.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn icon_filter(name: &str) -> Value {
    Value::from_safe_string(render_icon(name))
}

/// Prefix a site-absolute path with the configured base URL.
///
/// The result is attribute-escaped here so slashes survive auto-escaping.
fn href_filter(state: &State, path: &str) -> Value {
    let base = state
        .lookup("base_url")
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| "/".to_string());
    Value::from_safe_string(escape_attr(&join_url(&base, path)))
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn inquiry_url_filter(category: &str) -> String {
    BUSINESS.category_inquiry_url(category)
}

/// Join a base URL such as `/` or `/site/` with a site path such as `/about`.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

const TEMPLATES: [(&str, &str); 12] = [
    ("base.html", BASE_TEMPLATE),
    ("nav.html", NAV_TEMPLATE),
    ("footer.html", FOOTER_TEMPLATE),
    ("notice.html", NOTICE_TEMPLATE),
    ("macros.html", MACROS_TEMPLATE),
    ("home.html", HOME_TEMPLATE),
    ("about.html", ABOUT_TEMPLATE),
    ("products.html", PRODUCTS_TEMPLATE),
    ("gallery.html", GALLERY_TEMPLATE),
    ("builders.html", BUILDERS_TEMPLATE),
    ("contact.html", CONTACT_TEMPLATE),
    ("not_found.html", NOT_FOUND_TEMPLATE),
];

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en" class="no-js">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} - {{ site_title }}</title>
  <meta name="description" content="{{ catalog.business.summary }}">
  <link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Manrope:wght@400;500;600&family=Playfair+Display:wght@600;700&display=swap">
  <link rel="stylesheet" href="{{ '/assets/main.css' | href }}">
  {% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}
</head>
<body class="page-{{ page or 'not-found' }}" data-reveal-threshold="{{ reveal_threshold }}">
  {% include "nav.html" %}
  <main class="noise{% if not full_hero %} below-nav{% endif %}">
    {% block content %}{% endblock %}
  </main>
  {% include "footer.html" %}
  <a href="{{ catalog.links.whatsapp }}" class="chat-button" target="_blank" rel="noopener noreferrer" data-testid="whatsapp-button" aria-label="Chat with us on WhatsApp">{{ "message-circle" | icon }}</a>
  <div class="toasts" aria-live="polite" data-testid="toasts">
    {% if notice %}{% include "notice.html" %}{% endif %}
  </div>
  <script src="{{ '/assets/main.js' | href }}"></script>
  {% if live_reload %}<script src="{{ live_reload }}"></script>{% endif %}
</body>
</html>"##;

const NAV_TEMPLATE: &str = r##"<nav class="site-nav{% if nav_state.scrolled %} scrolled{% endif %}" data-scroll-threshold="{{ scroll_threshold }}" data-testid="site-nav">
  <div class="nav-inner">
    <a href="{{ '/' | href }}" class="logo" data-testid="logo-link">
      <span class="logo-mark">{{ catalog.business.monogram }}</span>
      <span class="logo-text">
        <span class="logo-name">{{ catalog.business.name }}</span>
        <span class="logo-tagline">{{ catalog.business.tagline }}</span>
      </span>
    </a>
    <ul class="nav-links">
    {% for link in nav %}
      <li><a href="{{ link.path | href }}" class="nav-link{% if link.active %} active{% endif %}" data-testid="nav-link-{{ link.slug }}"{% if link.active %} aria-current="page"{% endif %}>{{ link.label }}</a></li>
    {% endfor %}
    </ul>
    <a href="{{ menu_toggle_href | href }}" class="menu-toggle" role="button" aria-controls="mobile-menu" aria-expanded="{{ 'true' if nav_state.menu_open else 'false' }}" aria-label="Toggle menu" data-testid="mobile-menu-toggle">
      <span class="when-closed">{{ "menu" | icon }}</span>
      <span class="when-open">{{ "x" | icon }}</span>
    </a>
  </div>
  <div id="mobile-menu" class="mobile-menu" data-testid="mobile-menu"{% if not nav_state.menu_open %} hidden{% endif %}>
  {% for link in nav %}
    <a href="{{ link.menu_href | href }}" class="mobile-link{% if link.active %} active{% endif %}" data-testid="mobile-nav-link-{{ link.slug }}">{{ link.label }}</a>
  {% endfor %}
  </div>
</nav>"##;

const FOOTER_TEMPLATE: &str = r##"<footer class="site-footer" data-testid="footer">
  <div class="container footer-grid">
    <div>
      <div class="logo">
        <span class="logo-mark">{{ catalog.business.monogram }}</span>
        <span class="logo-name">{{ catalog.business.name }}</span>
      </div>
      <p class="footer-summary">{{ catalog.business.summary }}</p>
    </div>
    <div>
      <h3>Quick Links</h3>
      <ul class="footer-links">
        <li><a href="{{ '/' | href }}" data-testid="footer-link-home">Home</a></li>
        <li><a href="{{ '/about' | href }}" data-testid="footer-link-about">About Us</a></li>
        <li><a href="{{ '/products' | href }}" data-testid="footer-link-products">Products</a></li>
        <li><a href="{{ '/gallery' | href }}" data-testid="footer-link-gallery">Gallery</a></li>
        <li><a href="{{ '/contact' | href }}" data-testid="footer-link-contact">Contact</a></li>
      </ul>
    </div>
    <div>
      <h3>Contact Info</h3>
      <ul class="footer-contact">
        <li>{{ "map-pin" | icon }}<span>{{ catalog.business.address[0] }}<br>{{ catalog.business.address[1] }}</span></li>
        <li>{{ "phone" | icon }}<a href="{{ catalog.links.tel }}">{{ catalog.business.phone_display }}</a></li>
        <li>{{ "clock" | icon }}<span>{{ catalog.business.hours_short }}</span></li>
      </ul>
    </div>
    <div>
      <h3>Follow Us</h3>
      <div class="socials">
        <a href="{{ catalog.business.facebook_url }}" target="_blank" rel="noopener noreferrer" aria-label="Facebook" data-testid="social-facebook">{{ "facebook" | icon }}</a>
        <a href="{{ catalog.business.instagram_url }}" target="_blank" rel="noopener noreferrer" aria-label="Instagram" data-testid="social-instagram">{{ "instagram" | icon }}</a>
      </div>
    </div>
  </div>
  <div class="container footer-bottom">
    <p>&copy; {{ year }} {{ catalog.business.name }}. All rights reserved.</p>
  </div>
</footer>"##;

const NOTICE_TEMPLATE: &str = r##"<div class="toast toast-{{ notice.kind }}" role="status" data-testid="toast">
  <span class="toast-message">{{ notice.message }}</span>
  {% if notice.action %}<a class="toast-action" href="{{ notice.action.url }}" target="_blank" rel="noopener noreferrer">{{ notice.action.label }}</a>{% endif %}
</div>"##;

const MACROS_TEMPLATE: &str = r##"{% macro hero(image, title, testid, title_testid, subtitle=none, size="half") %}
<section class="hero hero-{{ size }}" data-testid="{{ testid }}">
  <div class="hero-bg" style="background-image: linear-gradient(180deg, rgba(0,0,0,0.4) 0%, rgba(0,0,0,0.7) 100%), url('{{ image }}')"></div>
  <div class="hero-body">
    <h1 class="hero-title rise" data-testid="{{ title_testid }}">{{ title }}</h1>
    {% if subtitle %}<p class="hero-subtitle rise rise-late">{{ subtitle }}</p>{% endif %}
  </div>
</section>
{% endmacro %}

{% macro stars(count, size="small") %}<span class="stars stars-{{ size }}">{% for _ in range(count) %}{{ "star" | icon }}{% endfor %}</span>{% endmacro %}"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
{% from "macros.html" import stars %}
<section class="hero hero-full" data-testid="hero-section">
  <div class="hero-bg" style="background-image: linear-gradient(180deg, rgba(0,0,0,0.2) 0%, rgba(0,0,0,0.6) 100%), url('{{ catalog.heroes.home }}')"></div>
  <div class="hero-body">
    <h1 class="hero-title rise" data-testid="hero-title">Premium Tiles, Marbles<br>&amp; Interior Solutions</h1>
    <p class="hero-subtitle rise rise-late" data-testid="hero-subtitle">For Homes &bull; Builders &bull; Interior Designers &bull; Contractors</p>
    <div class="hero-actions rise rise-later">
      <a href="{{ catalog.links.map }}" target="_blank" rel="noopener noreferrer" class="btn btn-primary" data-testid="visit-showroom-button">{{ "map-pin" | icon }} Visit Our Showroom</a>
      <a href="{{ catalog.links.whatsapp }}" target="_blank" rel="noopener noreferrer" class="btn btn-outline-light" data-testid="whatsapp-hero-button">{{ "message-circle" | icon }} WhatsApp Us</a>
    </div>
  </div>
</section>

<section class="section {{ reveal_class }}">
  <div class="container">
    <div class="section-head">
      <h2 data-testid="what-we-offer-title">What We Offer</h2>
      <p>Complete range of premium materials for your construction and interior needs</p>
    </div>
    <div class="grid grid-3">
    {% for feature in catalog.features %}
      <div class="card card-muted" data-testid="feature-card-{{ loop.index0 }}">
        <span class="card-icon">{{ feature.icon | icon }}</span>
        <h3>{{ feature.title }}</h3>
        <p>{{ feature.desc }}</p>
      </div>
    {% endfor %}
    </div>
  </div>
</section>

<section class="section section-white {{ reveal_class }}">
  <div class="container">
    <div class="section-head">
      <h2 data-testid="why-choose-title">Why Choose {{ catalog.business.name }}</h2>
    </div>
    <div class="grid grid-2">
    {% for reason in catalog.reasons %}
      <div class="card card-row card-marble" data-testid="why-choose-card-{{ loop.index0 }}">
        <span class="icon-badge">{{ reason.icon | icon }}</span>
        <div>
          <h3>{{ reason.title }}</h3>
          <p>{{ reason.desc }}</p>
        </div>
      </div>
    {% endfor %}
    </div>
  </div>
</section>

<section class="section {{ reveal_class }}">
  <div class="container">
    <div class="section-head">
      {{ stars(5, "large") }}
      <h2 data-testid="reviews-title">Trusted by Islampur &amp; Nearby Areas</h2>
      <p>See what our customers have to say</p>
    </div>
    <div class="grid grid-3">
    {% for review in catalog.reviews %}
      <div class="card card-bordered" data-testid="review-card-{{ loop.index0 }}">
        {{ stars(review.rating) }}
        <p class="quote">&ldquo;{{ review.text }}&rdquo;</p>
        <p class="reviewer">{{ review.name }}</p>
      </div>
    {% endfor %}
    </div>
    <div class="section-foot">
      <a href="{{ catalog.links.map }}" target="_blank" rel="noopener noreferrer" class="btn btn-outline" data-testid="view-all-reviews-button">View All Reviews on Google</a>
    </div>
  </div>
</section>

<section class="section section-emerald {{ reveal_class }}">
  <div class="container narrow center">
    <h2 data-testid="cta-title">Ready to Transform Your Space?</h2>
    <p class="lead">Visit our showroom or get in touch with us today</p>
    <div class="actions">
      <a href="{{ '/contact' | href }}" class="btn btn-light" data-testid="cta-contact-button">Contact Us</a>
      <a href="{{ catalog.links.tel }}" class="btn btn-outline-light" data-testid="cta-call-button">{{ "phone" | icon }} Call Now</a>
    </div>
  </div>
</section>
{% endblock %}"##;

const ABOUT_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
{% from "macros.html" import hero %}
{{ hero(catalog.heroes.about, "About " ~ catalog.business.name, "about-hero", "about-title") }}

<section class="section {{ reveal_class }}">
  <div class="container narrow">
    <h2 data-testid="our-story-title">Our Story</h2>
    <div class="prose">
    {% for paragraph in catalog.story %}
      <p>{{ paragraph }}</p>
    {% endfor %}
    </div>
  </div>
</section>

<section class="section section-white {{ reveal_class }}">
  <div class="container">
    <div class="section-head">
      <h2 data-testid="our-values-title">Our Values</h2>
    </div>
    <div class="grid grid-4">
    {% for value in catalog.values %}
      <div class="card card-plain center" data-testid="value-card-{{ loop.index0 }}">
        <span class="icon-badge icon-badge-large">{{ value.icon | icon }}</span>
        <h3>{{ value.title }}</h3>
        <p>{{ value.desc }}</p>
      </div>
    {% endfor %}
    </div>
  </div>
</section>

<section class="section {{ reveal_class }}">
  <div class="container narrow">
    <h2 data-testid="who-we-serve-title">Who We Serve</h2>
    <div class="grid grid-2">
    {% for audience in catalog.audiences %}
      <div class="card card-marble">
        <h3>{{ audience.title }}</h3>
        <p>{{ audience.desc }}</p>
      </div>
    {% endfor %}
    </div>
  </div>
</section>
{% endblock %}"##;

const PRODUCTS_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
{% from "macros.html" import hero %}
{{ hero(catalog.heroes.products, "Our Products", "products-hero", "products-title", subtitle="Premium Quality Materials for Every Project") }}

<section class="section {{ reveal_class }}">
  <div class="container stack">
  {% for category in catalog.categories %}
    <article class="category{% if loop.index0 is odd %} category-flipped{% endif %}" data-testid="product-category-{{ loop.index0 }}">
      <div class="category-media">
        <img src="{{ category.image }}" alt="{{ category.title }}" loading="lazy">
        <span class="category-icon">{{ category.icon | icon }}</span>
      </div>
      <div class="category-body">
        <h2>{{ category.title }}</h2>
        <p class="category-subtitle">{{ category.subtitle }}</p>
        <p>{{ category.description }}</p>
        <h3>Available Types:</h3>
        <ul class="chips">
        {% for kind in category.types %}
          <li class="chip">{{ kind }}</li>
        {% endfor %}
        </ul>
        <div class="actions">
          <a href="{{ category.title | inquiry_url }}" target="_blank" rel="noopener noreferrer" class="btn btn-primary btn-small" data-testid="whatsapp-button-{{ loop.index0 }}">WhatsApp Inquiry</a>
          <a href="{{ catalog.links.map }}" target="_blank" rel="noopener noreferrer" class="btn btn-outline btn-small" data-testid="visit-button-{{ loop.index0 }}">Visit Showroom</a>
        </div>
      </div>
    </article>
  {% endfor %}
  </div>
</section>

<section class="section section-emerald {{ reveal_class }}">
  <div class="container narrow center">
    <h2 data-testid="products-cta-title">Can't Find What You're Looking For?</h2>
    <p class="lead">We stock a wide variety of products. Visit our showroom or contact us for specific requirements.</p>
    <a href="{{ 'product inquiries' | inquiry_url }}" target="_blank" rel="noopener noreferrer" class="btn btn-light" data-testid="products-cta-whatsapp">Contact Us on WhatsApp</a>
  </div>
</section>
{% endblock %}"##;

const GALLERY_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
{% from "macros.html" import hero %}
{{ hero(catalog.heroes.gallery, "Our Gallery", "gallery-hero", "gallery-title", subtitle="Explore Our Collection & Showroom") }}

<div class="section">
  <div class="container">
  {% for section in catalog.gallery %}
    {% set section_index = loop.index0 %}
    <section class="gallery-section {{ reveal_class }}">
      <h2 data-testid="gallery-category-{{ section_index }}">{{ section.category }}</h2>
      <div class="grid grid-2">
      {% for image in section.images %}
        <a href="?image={{ section_index }}-{{ loop.index0 }}" class="gallery-item" data-image-url="{{ image.url }}" data-image-title="{{ image.title }}" data-testid="gallery-image-{{ section_index }}-{{ loop.index0 }}">
          <img src="{{ image.url }}" alt="{{ image.title }}" loading="lazy">
          <span class="gallery-caption">{{ image.title }}</span>
        </a>
      {% endfor %}
      </div>
    </section>
  {% endfor %}
  </div>
</div>

<a href="{{ '/gallery' | href }}" class="lightbox" data-testid="gallery-modal"{% if not lightbox %} hidden{% endif %}>
  <figure class="lightbox-figure">
    <img src="{{ lightbox.url if lightbox else '' }}" alt="{{ lightbox.title if lightbox else '' }}" class="lightbox-image">
    <figcaption class="lightbox-caption">{{ lightbox.title if lightbox else '' }}</figcaption>
  </figure>
</a>

<section class="section section-white {{ reveal_class }}">
  <div class="container narrow center">
    <h2 data-testid="gallery-cta-title">Visit Our Showroom</h2>
    <p class="lead">See our complete collection in person. Our showroom showcases the full range of tiles, marbles, sanitaryware, and interior materials.</p>
    <a href="{{ catalog.links.map }}" target="_blank" rel="noopener noreferrer" class="btn btn-primary" data-testid="gallery-visit-button">Get Directions</a>
  </div>
</section>
{% endblock %}"##;

const BUILDERS_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
{% from "macros.html" import hero %}
{{ hero(catalog.heroes.builders, "For Builders & Designers", "builders-hero", "builders-title", subtitle="Your Trusted Partner for Construction & Interior Projects", size="tall") }}

<section class="section {{ reveal_class }}">
  <div class="container">
    <div class="section-head">
      <h2 data-testid="services-title">What We Offer</h2>
      <p>Comprehensive support for your construction and design projects</p>
    </div>
    <div class="grid grid-2">
    {% for service in catalog.services %}
      <div class="card card-bordered" data-testid="service-card-{{ loop.index0 }}">
        <span class="icon-badge icon-badge-large">{{ service.icon | icon }}</span>
        <h3>{{ service.title }}</h3>
        <p>{{ service.desc }}</p>
      </div>
    {% endfor %}
    </div>
  </div>
</section>

<section class="section section-white {{ reveal_class }}">
  <div class="container narrow">
    <div class="section-head">
      <h2 data-testid="benefits-title">Partnership Benefits</h2>
    </div>
    <ul class="grid grid-2 checklist">
    {% for benefit in catalog.benefits %}
      <li data-testid="benefit-item-{{ loop.index0 }}">{{ "check-circle" | icon }}<span>{{ benefit }}</span></li>
    {% endfor %}
    </ul>
  </div>
</section>

<section class="section {{ reveal_class }}">
  <div class="container narrow">
    <div class="panel panel-marble center">
      <h2 data-testid="partnership-title">Build a Long-Term Partnership</h2>
      <p class="lead">We understand the demands of construction and design projects. Our team is committed to supporting your success with reliable supply, competitive pricing, and expert guidance. Let's discuss how we can support your next project.</p>
      <div class="actions">
        <a href="{{ catalog.links.tel }}" class="btn btn-primary" data-testid="call-button">{{ "phone" | icon }} Call Us Now</a>
        <a href="{{ catalog.links.partnership }}" target="_blank" rel="noopener noreferrer" class="btn btn-outline" data-testid="whatsapp-partnership-button">{{ "message-circle" | icon }} WhatsApp Inquiry</a>
      </div>
    </div>
  </div>
</section>

<section class="section section-emerald {{ reveal_class }}">
  <div class="container narrow center">
    <h2 data-testid="site-visit-title">Schedule a Site Visit</h2>
    <p class="lead">Our team can visit your project site to better understand your requirements and provide tailored solutions.</p>
    <a href="{{ catalog.links.partnership }}" target="_blank" rel="noopener noreferrer" class="btn btn-light" data-testid="site-visit-button">Request Site Visit</a>
  </div>
</section>
{% endblock %}"##;

const CONTACT_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
{% from "macros.html" import hero %}
{{ hero(catalog.heroes.contact, "Contact Us", "contact-hero", "contact-title", subtitle="We're Here to Help") }}

<section class="section {{ reveal_class }}">
  <div class="container grid grid-2 grid-wide-gap">
    <div>
      <h2 data-testid="contact-info-title">Get in Touch</h2>
      <ul class="contact-details">
        <li data-testid="contact-address">
          <span class="icon-badge">{{ "map-pin" | icon }}</span>
          <div><h3>Address</h3><p>{{ catalog.business.address[0] }}<br>{{ catalog.business.address[1] }}</p></div>
        </li>
        <li data-testid="contact-phone">
          <span class="icon-badge">{{ "phone" | icon }}</span>
          <div><h3>Phone</h3><a href="{{ catalog.links.tel }}">{{ catalog.business.phone_display }}</a></div>
        </li>
        <li data-testid="contact-hours">
          <span class="icon-badge">{{ "clock" | icon }}</span>
          <div><h3>Business Hours</h3><p>{{ catalog.business.hours[0] }}<br>{{ catalog.business.hours[1] }}</p></div>
        </li>
      </ul>
      <div class="panel panel-marble">
        <h3>Quick Contact</h3>
        <p>For immediate assistance, reach us on WhatsApp</p>
        <a href="{{ catalog.links.whatsapp }}" target="_blank" rel="noopener noreferrer" class="btn btn-whatsapp btn-small" data-testid="whatsapp-contact-button">Message on WhatsApp</a>
      </div>
    </div>

    <div>
      <h2 data-testid="contact-form-title">Send us a Message</h2>
      <form method="post" action="{{ form_action }}" class="contact-form" data-endpoint="{{ contact_endpoint }}" data-fallback-url="{{ catalog.links.whatsapp }}" data-testid="contact-form">
        <label for="name">Name *</label>
        <input type="text" id="name" name="name" value="{{ draft.name }}" required data-testid="contact-form-name">

        <label for="phone">Phone *</label>
        <input type="tel" id="phone" name="phone" value="{{ draft.phone }}" required data-testid="contact-form-phone">

        <label for="email">Email</label>
        <input type="email" id="email" name="email" value="{{ draft.email }}" data-testid="contact-form-email">

        <label for="inquiry_type">Inquiry Type</label>
        <select id="inquiry_type" name="inquiry_type" data-testid="contact-form-inquiry-type">
        {% for option in inquiry_types %}
          <option value="{{ option.value }}"{% if option.value == draft.inquiry_type %} selected{% endif %}>{{ option.label }}</option>
        {% endfor %}
        </select>

        <label for="message">Message</label>
        <textarea id="message" name="message" rows="4" data-testid="contact-form-message">{{ draft.message }}</textarea>

        <button type="submit" class="btn btn-primary btn-block" data-testid="contact-form-submit"{% if submitting %} disabled{% endif %}>
          {{ "send" | icon }} <span class="submit-label">{{ "Sending..." if submitting else "Send Message" }}</span>
        </button>
      </form>
    </div>
  </div>
</section>

<section class="section section-white {{ reveal_class }}">
  <div class="container">
    <div class="section-head">
      <h2 data-testid="map-title">Find Us on the Map</h2>
    </div>
    <div class="map" data-testid="google-map">
      <iframe src="{{ catalog.business.map_embed_url }}" title="{{ catalog.business.name }} Location" loading="lazy" referrerpolicy="no-referrer-when-downgrade" allowfullscreen></iframe>
    </div>
  </div>
</section>
{% endblock %}"##;

const NOT_FOUND_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<section class="section">
  <div class="container narrow center">
    <h1 data-testid="not-found-title">Page Not Found</h1>
    <p class="lead">The page you are looking for does not exist.</p>
    <a href="{{ '/' | href }}" class="btn btn-primary">Back to Home</a>
  </div>
</section>
{% endblock %}"##;

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_content::{NavState, DEFAULT_REVEAL_THRESHOLD, SCROLL_THRESHOLD_PX};

    fn context(page: Page) -> Context {
        Context {
            page: Some(page),
            title: page.title().to_string(),
            full_hero: page.has_full_hero(),
            site_title: "MH ENTERPRISES".to_string(),
            base_url: "/".to_string(),
            nav: NavState::default().links(page),
            nav_state: NavState::default(),
            menu_toggle_href: NavState::default().toggle_href(page),
            scroll_threshold: SCROLL_THRESHOLD_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_class: "reveal",
            styles: vec![],
            contact_endpoint: "/api/contact".to_string(),
            form_action: "/contact".to_string(),
            notice: None,
            draft: ContactDraft::default(),
            submitting: false,
            inquiry_types: InquiryOption::all(),
            lightbox: None,
            live_reload: None,
            year: 2026,
            catalog: Catalog::new(),
        }
    }

    #[test]
    fn escapes_attribute_values() {
        assert_eq!(escape_attr(r#"/a?b=1&c="d""#), "/a?b=1&amp;c=&quot;d&quot;");
    }

    #[test]
    fn joins_urls() {
        assert_eq!(join_url("/", "/"), "/");
        assert_eq!(join_url("/", "/about"), "/about");
        assert_eq!(join_url("/site/", "/about"), "/site/about");
        assert_eq!(join_url("/site", "/"), "/site/");
    }

    #[test]
    fn renders_every_page() {
        let engine = TemplateEngine::new();

        for page in Page::ALL {
            let html = engine.render_page(page.template(), &context(page)).unwrap();
            assert!(html.contains("data-testid=\"site-nav\""), "{:?}", page);
            assert!(html.contains("data-testid=\"footer\""), "{:?}", page);
            assert!(html.contains("data-testid=\"whatsapp-button\""), "{:?}", page);
        }
    }

    #[test]
    fn renders_title() {
        let engine = TemplateEngine::new();
        let html = engine
            .render_page("about.html", &context(Page::About))
            .unwrap();

        assert!(html.contains("<title>About Us - MH ENTERPRISES</title>"));
        assert!(html.contains("About MH ENTERPRISES"));
    }

    #[test]
    fn marks_active_nav_link() {
        let engine = TemplateEngine::new();
        let html = engine
            .render_page("products.html", &context(Page::Products))
            .unwrap();

        assert!(html.contains(
            r#"<a href="/products" class="nav-link active" data-testid="nav-link-products" aria-current="page">"#
        ));
        assert!(html.contains(r#"class="nav-link" data-testid="nav-link-home""#));
    }

    #[test]
    fn prefixes_links_with_base_url() {
        let engine = TemplateEngine::new();
        let mut ctx = context(Page::Home);
        ctx.base_url = "/mh/".to_string();

        let html = engine.render_page("home.html", &ctx).unwrap();

        assert!(html.contains(r#"href="/mh/about""#));
        assert!(html.contains(r#"href="/mh/assets/main.css""#));
    }

    #[test]
    fn renders_scroll_threshold_and_closed_menu() {
        let engine = TemplateEngine::new();
        let html = engine.render_page("home.html", &context(Page::Home)).unwrap();

        assert!(html.contains(r#"data-scroll-threshold="50.0""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"data-testid="mobile-menu" hidden"#));
        assert!(html.contains(r#"<a href="/?menu=open" class="menu-toggle""#));
        assert!(!html.contains("site-nav scrolled"));
    }

    #[test]
    fn marks_document_for_scriptless_reveal() {
        let engine = TemplateEngine::new();
        let html = engine.render_page("contact.html", &context(Page::Contact)).unwrap();

        assert!(html.contains(r#"<html lang="en" class="no-js">"#));
        assert!(html.contains(r#"<section class="section reveal">"#));

        let mut ctx = context(Page::Contact);
        ctx.reveal_class = "reveal visible";
        let html = engine.render_page("contact.html", &ctx).unwrap();
        assert!(html.contains(r#"<section class="section reveal visible">"#));
        assert!(!html.contains(r#"<section class="section reveal">"#));
    }

    #[test]
    fn renders_open_menu() {
        let engine = TemplateEngine::new();
        let mut ctx = context(Page::Home);
        ctx.nav_state.toggle_menu();
        ctx.menu_toggle_href = ctx.nav_state.toggle_href(Page::Home);

        let html = engine.render_page("home.html", &ctx).unwrap();

        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains(r#"<a href="/" class="menu-toggle""#));
        assert!(!html.contains(r#"data-testid="mobile-menu" hidden"#));
    }

    #[test]
    fn renders_lightbox_only_when_selected() {
        let engine = TemplateEngine::new();

        let html = engine
            .render_page("gallery.html", &context(Page::Gallery))
            .unwrap();
        assert!(html.contains(r#"data-testid="gallery-modal" hidden"#));
        assert!(html.contains(r#"href="?image=3-1""#));

        let mut ctx = context(Page::Gallery);
        ctx.lightbox = Some(GALLERY[2].images[1]);
        let html = engine.render_page("gallery.html", &ctx).unwrap();
        assert!(!html.contains(r#"data-testid="gallery-modal" hidden"#));
        assert!(html.contains(r#"<figcaption class="lightbox-caption">Luxury Bathroom</figcaption>"#));
    }

    #[test]
    fn renders_contact_draft_and_notice() {
        let engine = TemplateEngine::new();
        let mut ctx = context(Page::Contact);
        ctx.draft.name = "Rajesh <Kumar>".to_string();
        ctx.draft.inquiry_type = InquiryType::Bulk;
        ctx.notice = Some(Notice::error(showroom_contact::form::MSG_MISSING_FIELDS));

        let html = engine.render_page("contact.html", &ctx).unwrap();

        assert!(html.contains(r#"value="Rajesh &lt;Kumar&gt;""#));
        assert!(html.contains(r#"<option value="bulk" selected>Bulk Order</option>"#));
        assert!(html.contains(r#"<option value="general">General Inquiry</option>"#));
        assert!(html.contains("toast toast-error"));
        assert!(html.contains("Please fill in all required fields"));
    }

    #[test]
    fn disables_submit_while_in_flight() {
        let engine = TemplateEngine::new();
        let mut ctx = context(Page::Contact);
        ctx.submitting = true;

        let html = engine.render_page("contact.html", &ctx).unwrap();

        assert!(html.contains(r#"data-testid="contact-form-submit" disabled"#));
        assert!(html.contains("Sending..."));
    }

    #[test]
    fn renders_category_inquiry_links() {
        let engine = TemplateEngine::new();
        let html = engine
            .render_page("products.html", &context(Page::Products))
            .unwrap();

        assert!(html.contains("inquire%20about%20Tiles."));
        assert!(html.contains("inquire%20about%20product%20inquiries."));
        assert!(html.contains("category category-flipped"));
    }

    #[test]
    fn renders_review_stars() {
        let engine = TemplateEngine::new();
        let html = engine.render_page("home.html", &context(Page::Home)).unwrap();

        // Five in the heading plus five per review.
        assert_eq!(html.matches("icon icon-star").count(), 5 + 5 * REVIEWS.len());
    }

    #[test]
    fn renders_not_found_page() {
        let engine = TemplateEngine::new();
        let mut ctx = context(Page::Home);
        ctx.page = None;
        ctx.title = "Page Not Found".to_string();

        let html = engine.render_page("not_found.html", &ctx).unwrap();

        assert!(html.contains("page-not-found"));
        assert!(html.contains("Back to Home"));
    }
}
