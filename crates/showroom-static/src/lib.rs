//! Static site generator for the MH ENTERPRISES site.
//!
//! Renders the six pages from embedded templates and exports them together with
//! the stylesheet and runtime script.

pub mod assets;
pub mod builder;
pub mod icons;
pub mod render;
pub mod templates;

pub use assets::AssetPipeline;
pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use render::{style_hrefs, PageState, SiteRenderer, SiteSettings};
