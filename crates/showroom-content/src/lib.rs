//! Static content, routes and UI state models for the MH ENTERPRISES site.
//!
//! Everything here is plain data or a small state container. Rendering lives in
//! `showroom-static`; the browser runtime mirrors the state rules defined here.

pub mod business;
pub mod catalog;
pub mod lightbox;
pub mod nav;
pub mod pages;
pub mod reveal;

pub use business::{encode_component, tel_url, whatsapp_url, Business, BUSINESS};
pub use catalog::{
    gallery_image, Audience, Feature, GalleryImage, GallerySection, ProductCategory, Reason,
    Review, Service, Value,
};
pub use lightbox::{parse_image_key, Lightbox};
pub use nav::{NavLink, NavState, MENU_OPEN_QUERY, SCROLL_THRESHOLD_PX};
pub use pages::{Page, ParsePageError};
pub use reveal::{Reveal, DEFAULT_REVEAL_THRESHOLD};
