//! Asset pipeline for CSS and JavaScript processing.

use showroom_contact::form::{MSG_FAILED, MSG_MISSING_FIELDS, MSG_REJECTED, MSG_SENT};
use showroom_contact::InquiryType;
use showroom_content::{DEFAULT_REVEAL_THRESHOLD, SCROLL_THRESHOLD_PX};

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the runtime script.
    ///
    /// Thresholds, notices and the default inquiry type come from the same
    /// constants the server-side models use.
    pub fn generate_js() -> String {
        let replacements = [
            ("__SCROLL_THRESHOLD__", SCROLL_THRESHOLD_PX.to_string()),
            ("__REVEAL_THRESHOLD__", DEFAULT_REVEAL_THRESHOLD.to_string()),
            ("__DEFAULT_INQUIRY__", js_string(InquiryType::default().as_str())),
            ("__MSG_SENT__", js_string(MSG_SENT)),
            ("__MSG_MISSING_FIELDS__", js_string(MSG_MISSING_FIELDS)),
            ("__MSG_REJECTED__", js_string(MSG_REJECTED)),
            ("__MSG_FAILED__", js_string(MSG_FAILED)),
        ];

        replacements
            .iter()
            .fold(DEFAULT_JS.to_string(), |js, (placeholder, value)| {
                js.replace(placeholder, value)
            })
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

/// Quote a string as a JavaScript literal.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

const DEFAULT_CSS: &str = r#"/* MH ENTERPRISES */

:root {
  --emerald: #064e3b;
  --emerald-light: #065f46;
  --gold: #c5a059;
  --gold-light: #e5c585;
  --ink: #1c1917;
  --stone: #57534e;
  --muted: #f5f5f4;
  --paper: #fafaf9;
  --white: #ffffff;
  --border: #e7e5e4;
  --whatsapp: #25d366;
  --radius: 0.25rem;
  --nav-height: 5rem;
  --font-sans: 'Manrope', system-ui, -apple-system, sans-serif;
  --font-serif: 'Playfair Display', Georgia, serif;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.6;
}

h1, h2, h3 {
  font-family: var(--font-serif);
  line-height: 1.2;
}

h2 {
  font-size: 2.5rem;
  margin-bottom: 1.5rem;
}

h3 {
  font-size: 1.25rem;
  margin-bottom: 0.5rem;
}

a {
  color: inherit;
}

img {
  display: block;
  max-width: 100%;
}

[hidden] {
  display: none !important;
}

.noise {
  position: relative;
}

.below-nav {
  padding-top: var(--nav-height);
}

.container {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.narrow {
  max-width: 64rem;
}

.center {
  text-align: center;
}

.section {
  padding: 6rem 0;
}

.section-white {
  background: var(--white);
}

.section-emerald {
  background: var(--emerald);
  color: var(--white);
}

.section-head {
  text-align: center;
  margin-bottom: 4rem;
}

.section-head p,
.lead {
  color: var(--stone);
  font-size: 1.125rem;
}

.section-emerald .lead {
  color: rgba(255, 255, 255, 0.9);
  margin-bottom: 2rem;
}

.section-foot {
  text-align: center;
  margin-top: 3rem;
}

.stack > * + * {
  margin-top: 6rem;
}

/* Grids */
.grid {
  display: grid;
  gap: 2rem;
}

.grid-2 { grid-template-columns: repeat(2, 1fr); }
.grid-3 { grid-template-columns: repeat(3, 1fr); }
.grid-4 { grid-template-columns: repeat(4, 1fr); }
.grid-wide-gap { gap: 4rem; }

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 1rem 2rem;
  border: 2px solid transparent;
  border-radius: var(--radius);
  font-weight: 500;
  text-decoration: none;
  cursor: pointer;
  transition: all 0.3s;
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-small { padding: 0.75rem 1.5rem; }
.btn-block { width: 100%; }
.btn-primary { background: var(--emerald); color: var(--white); }
.btn-primary:hover { background: var(--emerald-light); }
.btn-outline { border-color: var(--emerald); color: var(--emerald); background: transparent; }
.btn-outline:hover { background: var(--emerald); color: var(--white); }
.btn-outline-light { border-color: var(--white); color: var(--white); background: transparent; }
.btn-outline-light:hover { background: var(--white); color: var(--emerald); }
.btn-light { background: var(--white); color: var(--emerald); }
.btn-whatsapp { background: var(--whatsapp); color: var(--white); }

.actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  justify-content: center;
  margin-top: 2rem;
}

.category-body .actions {
  justify-content: flex-start;
}

/* Icons */
.icon {
  width: 1.25rem;
  height: 1.25rem;
  flex-shrink: 0;
}

.icon-badge {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 3.5rem;
  height: 3.5rem;
  border-radius: 50%;
  background: var(--emerald);
  color: var(--white);
}

.icon-badge-large {
  width: 4rem;
  height: 4rem;
  margin-bottom: 1.5rem;
}

.card-icon .icon {
  width: 3rem;
  height: 3rem;
  color: var(--emerald);
  margin-bottom: 1.5rem;
}

.stars {
  display: inline-flex;
  gap: 0.125rem;
  color: var(--gold);
}

.stars .icon { fill: currentColor; }
.stars-large .icon { width: 2rem; height: 2rem; }
.stars-small .icon { width: 1rem; height: 1rem; }

/* Navigation */
.site-nav {
  position: fixed;
  inset: 0 0 auto 0;
  z-index: 50;
  background: transparent;
  transition: all 0.5s;
}

.site-nav.scrolled {
  background: rgba(255, 255, 255, 0.95);
  backdrop-filter: blur(12px);
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
}

.nav-inner {
  max-width: 80rem;
  height: var(--nav-height);
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  text-decoration: none;
}

.logo-mark {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 3rem;
  height: 3rem;
  background: var(--emerald);
  color: var(--white);
  font-family: var(--font-serif);
  font-weight: 700;
  font-size: 1.25rem;
  border-radius: var(--radius);
}

.logo-text {
  display: flex;
  flex-direction: column;
}

.logo-name {
  font-family: var(--font-serif);
  font-weight: 700;
  font-size: 1.25rem;
}

.logo-tagline {
  font-size: 0.75rem;
  color: var(--stone);
}

.page-home .site-nav:not(.scrolled) .logo-name,
.page-home .site-nav:not(.scrolled) .nav-link,
.page-home .site-nav:not(.scrolled) .menu-toggle {
  color: var(--white);
}

.page-home .site-nav:not(.scrolled) .logo-tagline {
  color: rgba(255, 255, 255, 0.8);
}

.nav-links {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-link {
  font-weight: 500;
  text-decoration: none;
  color: var(--ink);
  transition: color 0.2s;
}

.nav-link:hover,
.nav-link.active {
  color: var(--emerald);
}

.page-home .site-nav:not(.scrolled) .nav-link.active {
  color: var(--gold-light);
}

.menu-toggle {
  display: none;
  text-decoration: none;
  background: none;
  border: none;
  padding: 0.5rem;
  cursor: pointer;
  color: var(--ink);
}

.menu-toggle .icon {
  width: 1.5rem;
  height: 1.5rem;
}

.menu-toggle[aria-expanded="true"] .when-closed,
.menu-toggle[aria-expanded="false"] .when-open {
  display: none;
}

.mobile-menu {
  background: var(--white);
  border-top: 1px solid var(--border);
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.mobile-link {
  font-weight: 500;
  text-decoration: none;
  padding: 0.5rem 0;
}

.mobile-link.active {
  color: var(--emerald);
}

/* Hero */
.hero {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  color: var(--white);
  text-align: center;
}

.hero-full { height: 100vh; }
.hero-half { height: 50vh; }
.hero-tall { height: 60vh; }

.hero-bg {
  position: absolute;
  inset: 0;
  background-size: cover;
  background-position: center;
}

.hero-body {
  position: relative;
  z-index: 1;
  max-width: 64rem;
  padding: 0 1.5rem;
}

.hero-title {
  font-size: 3.75rem;
  margin-bottom: 1.5rem;
}

.hero-full .hero-title {
  font-size: 4.5rem;
}

.hero-subtitle {
  font-size: 1.25rem;
  color: rgba(255, 255, 255, 0.9);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  justify-content: center;
  margin-top: 3rem;
}

.rise {
  animation: rise 0.8s ease-out both;
}

.rise-late { animation-delay: 0.2s; }
.rise-later { animation-delay: 0.4s; }

@keyframes rise {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: translateY(0); }
}

/* Reveal on scroll */
.reveal {
  opacity: 0;
  transform: translateY(50px);
  transition: opacity 0.8s ease-out, transform 0.8s ease-out;
}

.reveal.visible {
  opacity: 1;
  transform: none;
}

.no-js .reveal {
  opacity: 1;
  transform: none;
}

/* Cards */
.card {
  padding: 2rem;
  border-radius: var(--radius);
  transition: box-shadow 0.3s;
}

.card:hover {
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
}

.card p {
  color: var(--stone);
}

.card-muted { background: var(--muted); }
.card-plain { background: transparent; }
.card-bordered { background: var(--white); border: 1px solid var(--border); }
.card-marble,
.panel-marble {
  background: linear-gradient(135deg, #fafaf9 0%, #f5f5f4 50%, #e7e5e4 100%);
  border: 1px solid var(--border);
}

.card-row {
  display: flex;
  gap: 1.5rem;
}

.quote {
  font-style: italic;
  margin: 1rem 0;
}

.reviewer {
  font-weight: 600;
  color: var(--ink) !important;
}

.panel {
  padding: 3rem;
  border-radius: var(--radius);
}

.prose p {
  color: var(--stone);
  font-size: 1.125rem;
  margin-bottom: 1.5rem;
}

/* Products */
.category {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  align-items: center;
}

.category-flipped .category-media {
  order: 2;
}

.category-media {
  position: relative;
  aspect-ratio: 4 / 3;
  overflow: hidden;
  border-radius: var(--radius);
}

.category-media img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 0.7s;
}

.category-media:hover img {
  transform: scale(1.05);
}

.category-icon {
  position: absolute;
  top: 1.5rem;
  left: 1.5rem;
  padding: 1rem;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.9);
  color: var(--emerald);
}

.category-subtitle {
  color: var(--gold);
  font-weight: 600;
  margin-bottom: 1rem;
}

.chips {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  list-style: none;
  margin-bottom: 1rem;
}

.chip {
  padding: 0.25rem 0.75rem;
  background: var(--muted);
  border-radius: 9999px;
  font-size: 0.875rem;
}

/* Gallery */
.gallery-section + .gallery-section {
  margin-top: 4rem;
}

.gallery-item {
  position: relative;
  display: block;
  aspect-ratio: 4 / 3;
  overflow: hidden;
  border-radius: var(--radius);
  cursor: pointer;
}

.gallery-item img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 0.7s;
}

.gallery-item:hover img {
  transform: scale(1.1);
}

.gallery-caption {
  position: absolute;
  inset: auto 0 0 0;
  padding: 1.5rem;
  color: var(--white);
  font-weight: 600;
  background: linear-gradient(0deg, rgba(0, 0, 0, 0.7), transparent);
  opacity: 0;
  transition: opacity 0.3s;
}

.gallery-item:hover .gallery-caption {
  opacity: 1;
}

.lightbox {
  position: fixed;
  inset: 0;
  z-index: 60;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.9);
  text-decoration: none;
}

.lightbox-figure {
  max-width: 72rem;
  width: 100%;
}

.lightbox-image {
  width: 100%;
  max-height: 80vh;
  object-fit: contain;
  border-radius: var(--radius);
}

.lightbox-caption {
  color: var(--white);
  font-family: var(--font-serif);
  font-size: 1.5rem;
  text-align: center;
  margin-top: 1rem;
}

/* Builders */
.checklist {
  list-style: none;
}

.checklist li {
  display: flex;
  gap: 1rem;
  align-items: flex-start;
}

.checklist .icon {
  color: var(--emerald);
  width: 1.5rem;
  height: 1.5rem;
}

/* Contact */
.contact-details {
  list-style: none;
  margin-bottom: 2rem;
}

.contact-details li {
  display: flex;
  gap: 1rem;
  margin-bottom: 2rem;
}

.contact-details p,
.contact-details a {
  color: var(--stone);
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.contact-form label {
  font-weight: 500;
  margin-top: 1rem;
}

.contact-form input,
.contact-form select,
.contact-form textarea {
  width: 100%;
  padding: 0.75rem 1rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--white);
  font: inherit;
}

.contact-form textarea {
  resize: none;
}

.contact-form button {
  margin-top: 1.5rem;
}

.map {
  aspect-ratio: 16 / 9;
  border-radius: var(--radius);
  overflow: hidden;
}

.map iframe {
  width: 100%;
  height: 100%;
  border: 0;
}

/* Footer */
.site-footer {
  background: var(--emerald);
  color: var(--white);
  padding: 4rem 0 2rem;
}

.footer-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 3rem;
}

.site-footer .logo-mark {
  background: var(--white);
  color: var(--emerald);
}

.site-footer h3 {
  font-size: 1.125rem;
  margin-bottom: 1rem;
}

.footer-summary,
.footer-links a,
.footer-contact {
  color: rgba(255, 255, 255, 0.8);
  font-size: 0.875rem;
}

.footer-summary {
  margin-top: 1rem;
}

.footer-links,
.footer-contact {
  list-style: none;
}

.footer-links li,
.footer-contact li {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
}

.footer-links a {
  text-decoration: none;
}

.footer-links a:hover {
  color: var(--gold-light);
}

.socials {
  display: flex;
  gap: 1rem;
}

.socials a {
  display: inline-flex;
  padding: 0.75rem;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.1);
}

.footer-bottom {
  border-top: 1px solid rgba(255, 255, 255, 0.2);
  margin-top: 3rem;
  padding-top: 2rem;
  text-align: center;
  color: rgba(255, 255, 255, 0.6);
  font-size: 0.875rem;
}

/* Floating chat button */
.chat-button {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 40;
  display: inline-flex;
  padding: 1rem;
  border-radius: 50%;
  background: var(--whatsapp);
  color: var(--white);
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
  transition: transform 0.3s;
}

.chat-button:hover {
  transform: scale(1.1);
}

.chat-button .icon {
  width: 1.75rem;
  height: 1.75rem;
}

/* Toasts */
.toasts {
  position: fixed;
  top: 6rem;
  right: 1.5rem;
  z-index: 70;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.toast {
  display: flex;
  gap: 1rem;
  align-items: center;
  padding: 1rem 1.25rem;
  border-radius: var(--radius);
  background: var(--white);
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
  border-left: 4px solid var(--emerald);
}

.toast-error {
  border-left-color: #b91c1c;
}

.toast-action {
  color: var(--emerald);
  font-weight: 600;
}

@media (max-width: 1024px) {
  .grid-3,
  .grid-4,
  .footer-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .menu-toggle {
    display: block;
  }

  .grid-2,
  .grid-3,
  .grid-4,
  .footer-grid,
  .category {
    grid-template-columns: 1fr;
  }

  .category-flipped .category-media {
    order: 0;
  }

  .hero-title,
  .hero-full .hero-title {
    font-size: 2.5rem;
  }
}
"#;

const DEFAULT_JS: &str = r#"// MH ENTERPRISES - Runtime JavaScript
(function() {
  'use strict';

  document.documentElement.classList.replace('no-js', 'js');

  // Navigation bar turns opaque past the scroll threshold
  const nav = document.querySelector('.site-nav');
  if (nav) {
    const threshold = parseFloat(nav.dataset.scrollThreshold || '__SCROLL_THRESHOLD__');
    const onScroll = () => {
      nav.classList.toggle('scrolled', window.scrollY > threshold);
    };
    window.addEventListener('scroll', onScroll, { passive: true });
    onScroll();
  }

  // Mobile menu toggle; following a link closes it
  const menuToggle = document.querySelector('.menu-toggle');
  const mobileMenu = document.querySelector('.mobile-menu');
  if (menuToggle && mobileMenu) {
    const setOpen = (open) => {
      menuToggle.setAttribute('aria-expanded', open ? 'true' : 'false');
      mobileMenu.hidden = !open;
    };
    menuToggle.addEventListener('click', event => {
      event.preventDefault();
      setOpen(menuToggle.getAttribute('aria-expanded') !== 'true');
    });
    mobileMenu.querySelectorAll('a').forEach(link => {
      link.addEventListener('click', () => setOpen(false));
    });
  }

  // One-shot reveal on scroll
  const sections = document.querySelectorAll('.reveal');
  if ('IntersectionObserver' in window) {
    const threshold = parseFloat(document.body.dataset.revealThreshold || '__REVEAL_THRESHOLD__');
    const observer = new IntersectionObserver(entries => {
      entries.forEach(entry => {
        if (entry.isIntersecting && entry.intersectionRatio >= threshold) {
          entry.target.classList.add('visible');
          observer.unobserve(entry.target);
        }
      });
    }, { threshold });
    sections.forEach(section => observer.observe(section));
  } else {
    sections.forEach(section => section.classList.add('visible'));
  }

  // Toasts
  const toasts = document.querySelector('.toasts');
  const showToast = (kind, message, action) => {
    if (!toasts) return;
    const toast = document.createElement('div');
    toast.className = 'toast toast-' + kind;
    toast.setAttribute('role', 'status');
    const text = document.createElement('span');
    text.className = 'toast-message';
    text.textContent = message;
    toast.appendChild(text);
    if (action) {
      const link = document.createElement('a');
      link.className = 'toast-action';
      link.href = action.url;
      link.target = '_blank';
      link.rel = 'noopener noreferrer';
      link.textContent = action.label;
      toast.appendChild(link);
    }
    toasts.appendChild(toast);
    setTimeout(() => toast.remove(), 5000);
  };
  if (toasts) {
    toasts.querySelectorAll('.toast').forEach(toast => {
      setTimeout(() => toast.remove(), 5000);
    });
  }

  // Gallery lightbox
  const lightbox = document.querySelector('.lightbox');
  if (lightbox) {
    const image = lightbox.querySelector('.lightbox-image');
    const caption = lightbox.querySelector('.lightbox-caption');
    document.querySelectorAll('.gallery-item').forEach(item => {
      item.addEventListener('click', event => {
        event.preventDefault();
        image.src = item.dataset.imageUrl;
        image.alt = item.dataset.imageTitle;
        caption.textContent = item.dataset.imageTitle;
        lightbox.hidden = false;
      });
    });
    lightbox.addEventListener('click', event => {
      event.preventDefault();
      lightbox.hidden = true;
      if (window.location.search) {
        history.replaceState(null, '', window.location.pathname);
      }
    });
  }

  // Contact form
  const form = document.querySelector('.contact-form');
  if (form) {
    const submit = form.querySelector('button[type="submit"]');
    const label = submit.querySelector('.submit-label');
    const fallback = { label: 'Message on WhatsApp', url: form.dataset.fallbackUrl };
    let submitting = false;

    // Back to an empty draft; the markup's value attributes may hold an old one
    const clearForm = () => {
      form.querySelectorAll('input, textarea').forEach(field => { field.value = ''; });
      const inquiry = form.querySelector('[name="inquiry_type"]');
      if (inquiry) inquiry.value = __DEFAULT_INQUIRY__;
    };

    const setSubmitting = (value) => {
      submitting = value;
      submit.disabled = value;
      label.textContent = value ? 'Sending...' : 'Send Message';
    };

    form.addEventListener('submit', async event => {
      event.preventDefault();
      if (submitting) return;

      const data = Object.fromEntries(new FormData(form).entries());
      const body = {
        name: data.name || '',
        phone: data.phone || '',
        email: data.email || '',
        message: data.message || '',
        inquiry_type: data.inquiry_type || __DEFAULT_INQUIRY__,
      };

      if (!body.name.trim() || !body.phone.trim()) {
        showToast('error', __MSG_MISSING_FIELDS__);
        return;
      }

      setSubmitting(true);
      try {
        const response = await fetch(form.dataset.endpoint, {
          method: 'POST',
          headers: { 'Content-Type': 'application/json', 'Accept': 'application/json' },
          body: JSON.stringify(body),
        });
        if (response.ok) {
          showToast('success', __MSG_SENT__);
          clearForm();
        } else {
          // The relay explains itself; a bare backend only gives a status
          const reply = await response.json().catch(() => null);
          if (reply && reply.message) {
            showToast('error', reply.message, response.status === 422 ? null : fallback);
          } else if (response.status >= 400 && response.status < 500) {
            showToast('error', __MSG_REJECTED__, fallback);
          } else {
            showToast('error', __MSG_FAILED__, fallback);
          }
        }
      } catch (err) {
        showToast('error', __MSG_FAILED__, fallback);
      } finally {
        setSubmitting(false);
      }
    });
  }
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    /// The part of `js` between two markers.
    fn between<'a>(js: &'a str, start: &str, end: &str) -> &'a str {
        let from = js.find(start).expect("start marker") + start.len();
        let to = from + js[from..].find(end).expect("end marker");
        &js[from..to]
    }

    #[test]
    fn generates_css() {
        let css = AssetPipeline::generate_css();
        assert!(css.contains(":root"));
        assert!(css.contains(".reveal.visible"));
        assert!(css.contains(".site-nav.scrolled"));
    }

    #[test]
    fn generates_js() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("IntersectionObserver"));
        assert!(js.contains("observer.unobserve"));
        assert!(js.contains("dataset.scrollThreshold"));
        assert!(js.contains("dataset.endpoint"));
    }

    #[test]
    fn runtime_messages_match_form_notices() {
        let js = AssetPipeline::generate_js();
        for message in [MSG_SENT, MSG_MISSING_FIELDS, MSG_REJECTED, MSG_FAILED] {
            assert!(js.contains(message), "missing notice: {}", message);
        }
    }

    #[test]
    fn fills_every_placeholder() {
        let js = AssetPipeline::generate_js();
        assert!(!js.contains("__"), "unfilled placeholder in runtime script");
        assert!(js.contains("nav.dataset.scrollThreshold || '50'"));
        assert!(js.contains("document.body.dataset.revealThreshold || '0.1'"));
        assert!(js.contains(r#"data.inquiry_type || "general""#));
    }

    #[test]
    fn drops_no_js_marker_first() {
        let js = AssetPipeline::generate_js();
        let marker = js.find("classList.replace('no-js', 'js')").unwrap();
        assert!(marker < js.find("querySelector").unwrap());
    }

    #[test]
    fn nav_turns_opaque_strictly_past_threshold() {
        let js = AssetPipeline::generate_js();
        let on_scroll = between(&js, "const onScroll = () => {", "};");
        assert!(on_scroll.contains("nav.classList.toggle('scrolled', window.scrollY > threshold)"));
    }

    #[test]
    fn reveal_unobserves_once_visible() {
        let js = AssetPipeline::generate_js();
        let branch = between(
            &js,
            "if (entry.isIntersecting && entry.intersectionRatio >= threshold) {",
            "}",
        );
        assert!(branch.contains("entry.target.classList.add('visible');"));
        assert!(branch.contains("observer.unobserve(entry.target);"));
        assert!(!js.contains("classList.remove('visible')"));
    }

    #[test]
    fn lightbox_click_dismisses_overlay() {
        let js = AssetPipeline::generate_js();
        let handler = between(&js, "lightbox.addEventListener('click', event => {", "});");
        assert!(handler.contains("lightbox.hidden = true;"));
    }

    #[test]
    fn form_clears_only_on_success() {
        let js = AssetPipeline::generate_js();

        let success = between(&js, "if (response.ok) {", "} else {");
        assert!(success.contains("clearForm();"));
        assert_eq!(js.matches("clearForm();").count(), 1);
        assert!(!js.contains("form.reset()"));

        let clear = between(&js, "const clearForm = () => {", "};\n");
        assert!(clear.contains("field.value = '';"));
        assert!(clear.contains(r#"inquiry.value = "general";"#));
    }

    #[test]
    fn form_releases_submit_in_finally() {
        let js = AssetPipeline::generate_js();
        let settle = between(&js, "} finally {", "}");
        assert!(settle.contains("setSubmitting(false);"));
        assert!(between(&js, "if (submitting) return;", "try {").contains("setSubmitting(true);"));
    }

    #[test]
    fn default_css_minifies() {
        let minified = AssetPipeline::minify_css(&AssetPipeline::generate_css()).unwrap();
        assert!(minified.contains(".reveal"));
        assert!(minified.len() < DEFAULT_CSS.len());
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.button {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".button"));
    }
}
