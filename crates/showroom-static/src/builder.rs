//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use showroom_contact::contact_endpoint;
use showroom_content::Page;

use crate::assets::AssetPipeline;
use crate::render::{PageState, SiteRenderer, SiteSettings};

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Base URL for the site
    pub base_url: String,

    /// Site title
    pub title: String,

    /// Paths to CSS stylesheets to include
    pub styles: Vec<String>,

    /// Directory copied verbatim into the output
    pub public_dir: Option<PathBuf>,

    /// Root of the inquiry backend; the contact form posts to `{root}/api/contact`
    pub backend_base_url: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            minify: true,
            base_url: "/".to_string(),
            title: "MH ENTERPRISES".to_string(),
            styles: vec![],
            public_dir: None,
            backend_base_url: String::new(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of asset files written or copied
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read input: {0}")]
    ReadError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    renderer: SiteRenderer,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig) -> Self {
        let endpoint = contact_endpoint(&config.backend_base_url);
        if config.backend_base_url.is_empty() {
            tracing::warn!(
                "No backend configured; the exported contact form posts to {}",
                endpoint
            );
        }

        // Without a server the form can only post straight to the backend.
        let renderer = SiteRenderer::new(SiteSettings {
            site_title: config.title.clone(),
            base_url: config.base_url.clone(),
            styles: config.styles.clone(),
            contact_endpoint: endpoint.clone(),
            form_action: endpoint,
            live_reload: None,
        });

        Self { config, renderer }
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        // Ensure output directory exists
        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Render pages in parallel
        let results: Vec<Result<(), BuildError>> = Page::ALL
            .par_iter()
            .map(|page| self.build_page(*page))
            .collect();

        for result in results {
            result?;
        }

        self.build_not_found()?;

        let mut assets = self.generate_assets()?;
        assets += self.copy_public_dir()?;

        self.generate_sitemap()?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: Page::ALL.len(),
            assets,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Output file for a page: `/` -> `index.html`, `/about` -> `about/index.html`.
    fn output_path(&self, page: Page) -> PathBuf {
        let slug = page.path().trim_start_matches('/');
        if slug.is_empty() {
            self.config.output_dir.join("index.html")
        } else {
            self.config.output_dir.join(slug).join("index.html")
        }
    }

    fn build_page(&self, page: Page) -> Result<(), BuildError> {
        let html = self
            .renderer
            .render(page, &PageState::default())
            .map_err(|e| BuildError::TemplateError(format!("{}: {}", page.template(), e)))?;

        let output_path = self.output_path(page);
        write_file(&output_path, html)?;

        tracing::debug!("Built {} -> {}", page.path(), output_path.display());
        Ok(())
    }

    fn build_not_found(&self) -> Result<(), BuildError> {
        let html = self
            .renderer
            .render_not_found("")
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;
        write_file(&self.config.output_dir.join("404.html"), html)
    }

    /// Generate static assets. Returns the number of files written.
    fn generate_assets(&self) -> Result<usize, BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or_else(|e| {
                tracing::warn!("{}; writing unminified CSS", e);
                css
            })
        } else {
            css
        };
        write_file(&assets_dir.join("main.css"), css)?;
        write_file(&assets_dir.join("main.js"), AssetPipeline::generate_js())?;
        let mut written = 2;

        // Copy configured stylesheets
        for style_path in &self.config.styles {
            let source_path = PathBuf::from(style_path);
            if source_path.exists() {
                let filename = source_path
                    .file_name()
                    .and_then(|f| f.to_str())
                    .unwrap_or("style.css");
                let content = fs::read_to_string(&source_path).map_err(|e| {
                    BuildError::ReadError(format!("Failed to read stylesheet: {}", e))
                })?;
                let content = if self.config.minify {
                    AssetPipeline::minify_css(&content).unwrap_or(content)
                } else {
                    content
                };
                write_file(&assets_dir.join(filename), content)?;
                written += 1;
                tracing::info!("Copied stylesheet from {}", style_path);
            } else {
                tracing::warn!("Stylesheet not found: {}", style_path);
            }
        }

        Ok(written)
    }

    /// Copy the public directory into the output root.
    fn copy_public_dir(&self) -> Result<usize, BuildError> {
        let Some(public_dir) = &self.config.public_dir else {
            return Ok(0);
        };

        if !public_dir.exists() {
            tracing::debug!("Public directory {} not found, skipping", public_dir.display());
            return Ok(0);
        }

        let mut copied = 0;
        for entry in WalkDir::new(public_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(public_dir).unwrap_or(path);
            let target = self.config.output_dir.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
            }
            fs::copy(path, &target)
                .map_err(|e| BuildError::WriteError(format!("{}: {}", target.display(), e)))?;
            copied += 1;
        }

        tracing::info!("Copied {} public files", copied);
        Ok(copied)
    }

    /// Generate robots.txt, plus the sitemap when the base URL is absolute.
    fn generate_sitemap(&self) -> Result<(), BuildError> {
        let robots_path = self.config.output_dir.join("robots.txt");
        if !is_absolute_url(&self.config.base_url) {
            tracing::warn!(
                "Skipping sitemap.xml: base_url {:?} is not an absolute URL",
                self.config.base_url
            );
            return write_file(&robots_path, "User-agent: *\nAllow: /".to_string());
        }

        let base = self.config.base_url.trim_end_matches('/');
        let urls: Vec<String> = Page::ALL
            .iter()
            .map(|page| format!("  <url>\n    <loc>{}{}</loc>\n  </url>", base, page.path()))
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );
        write_file(&self.config.output_dir.join("sitemap.xml"), sitemap)?;

        let robots = format!("User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml", base);
        write_file(&robots_path, robots)
    }
}

fn is_absolute_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

fn write_file(path: &Path, contents: String) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
    }
    fs::write(path, contents)
        .map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))
}
