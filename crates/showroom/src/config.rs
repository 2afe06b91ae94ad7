//! Site configuration (site.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use showroom_server::ServerConfig;
use showroom_static::BuildConfig;

/// Environment variable overriding `[backend].base_url`.
pub const BACKEND_URL_ENV: &str = "SHOWROOM_BACKEND_URL";

/// Configuration file structure (site.toml).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub backend: BackendSection,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_output")]
    pub output: String,
    /// Paths to CSS stylesheets to include
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_url: default_base_url(),
            output: default_output(),
            styles: vec![],
            public_dir: default_public_dir(),
        }
    }
}

/// Where contact submissions go: `{base_url}/api/contact`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BackendSection {
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_minify")]
    pub minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: default_minify(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_title() -> String {
    "MH ENTERPRISES".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_public_dir() -> String {
    "public".to_string()
}
fn default_minify() -> bool {
    true
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8080
}

/// Command-line overrides for the server settings.
#[derive(Debug, Clone, Default)]
pub struct ServerOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub open: bool,
}

impl SiteConfig {
    /// Parse a configuration file's contents.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid site configuration")
    }

    /// Replace the backend URL with `value` when it is set and non-empty.
    pub fn with_backend_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            tracing::debug!("Backend URL overridden by {}", BACKEND_URL_ENV);
            self.backend.base_url = url;
        }
        self
    }

    fn public_dir(&self) -> Option<PathBuf> {
        (!self.site.public_dir.is_empty()).then(|| PathBuf::from(&self.site.public_dir))
    }

    /// Settings for `showroom build`.
    pub fn build_config(&self, output: Option<PathBuf>, minify: Option<bool>) -> BuildConfig {
        BuildConfig {
            output_dir: output.unwrap_or_else(|| PathBuf::from(&self.site.output)),
            minify: minify.unwrap_or(self.build.minify),
            base_url: self.site.base_url.clone(),
            title: self.site.title.clone(),
            styles: self.site.styles.clone(),
            public_dir: self.public_dir(),
            backend_base_url: self.backend.base_url.clone(),
        }
    }

    /// Settings for `showroom serve` and `showroom dev`.
    pub fn server_config(
        &self,
        overrides: ServerOverrides,
        live_reload: bool,
        config_path: &Path,
    ) -> ServerConfig {
        ServerConfig {
            port: overrides.port.unwrap_or(self.server.port),
            host: overrides.host.unwrap_or_else(|| self.server.host.clone()),
            open: overrides.open,
            site_title: self.site.title.clone(),
            styles: self.site.styles.clone(),
            public_dir: self.public_dir(),
            backend_base_url: self.backend.base_url.clone(),
            live_reload,
            config_path: Some(config_path.to_path_buf()),
        }
    }
}

/// Load configuration from `path` if it exists, then apply the environment.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<SiteConfig> {
    let config = if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = SiteConfig::parse(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        config
    } else {
        tracing::debug!("No {} found, using defaults", path.display());
        SiteConfig::default()
    };

    Ok(config.with_backend_override(std::env::var(BACKEND_URL_ENV).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn empty_file_means_defaults() {
        let config = SiteConfig::parse("").unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.site.title, "MH ENTERPRISES");
        assert_eq!(config.site.output, "dist");
        assert!(config.build.minify);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.backend.base_url, "");
    }

    #[test]
    fn parses_every_section() {
        let config = SiteConfig::parse(
            r#"
[site]
title = "MH Islampur"
base_url = "/mh/"
output = "out"
styles = ["styles/brand.css"]
public_dir = ""

[backend]
base_url = "https://api.mh.example"

[build]
minify = false

[server]
host = "0.0.0.0"
port = 3000
"#,
        )
        .unwrap();

        assert_eq!(config.site.title, "MH Islampur");
        assert_eq!(config.site.styles, vec!["styles/brand.css"]);
        assert_eq!(config.backend.base_url, "https://api.mh.example");
        assert!(!config.build.minify);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.public_dir(), None);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = SiteConfig::parse("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.site.base_url, "/");
    }

    #[test]
    fn rejects_malformed_file() {
        assert!(SiteConfig::parse("[server]\nport = \"eighty\"\n").is_err());
    }

    #[test]
    fn environment_overrides_backend() {
        let config = SiteConfig::parse("[backend]\nbase_url = \"https://a.example\"\n").unwrap();

        let overridden = config
            .clone()
            .with_backend_override(Some("https://b.example".to_string()));
        assert_eq!(overridden.backend.base_url, "https://b.example");

        let blank = config.clone().with_backend_override(Some("  ".to_string()));
        assert_eq!(blank.backend.base_url, "https://a.example");

        let unset = config.with_backend_override(None);
        assert_eq!(unset.backend.base_url, "https://a.example");
    }

    #[test]
    fn flags_override_build_settings() {
        let config = SiteConfig::default();

        let build = config.build_config(Some(PathBuf::from("public_html")), Some(false));
        assert_eq!(build.output_dir, PathBuf::from("public_html"));
        assert!(!build.minify);
        assert_eq!(build.public_dir, Some(PathBuf::from("public")));

        let build = config.build_config(None, None);
        assert_eq!(build.output_dir, PathBuf::from("dist"));
        assert!(build.minify);
    }

    #[test]
    fn flags_override_server_settings() {
        let config = SiteConfig::default();

        let server = config.server_config(
            ServerOverrides {
                host: None,
                port: Some(9999),
                open: true,
            },
            true,
            Path::new("site.toml"),
        );

        assert_eq!(server.port, 9999);
        assert_eq!(server.host, "127.0.0.1");
        assert!(server.open);
        assert!(server.live_reload);
        assert_eq!(server.config_path, Some(PathBuf::from("site.toml")));
    }

    #[test]
    fn loads_file_from_disk() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        std::fs::write(&path, "[site]\ntitle = \"Showroom\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.site.title, "Showroom");
    }

    #[test]
    fn missing_file_means_defaults() {
        let temp = tempdir().unwrap();
        let config = load_config(&temp.path().join("site.toml")).unwrap();
        assert_eq!(config.site, SiteSection::default());
    }

    #[test]
    fn reports_broken_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        std::fs::write(&path, "[site\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }
}
