//! Scaffold a site configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing showroom...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    let public_dir = config_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("public");
    if !public_dir.exists() {
        fs::create_dir_all(&public_dir).context("Failed to create public directory")?;
        tracing::info!("Created {}", public_dir.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'showroom dev' to start the development server.");

    Ok(())
}

pub const DEFAULT_CONFIG: &str = r#"# Showroom configuration

[site]
# Site title
title = "MH ENTERPRISES"

# Base URL (for deployment)
base_url = "/"

# Output directory for built site
output = "dist"

# Extra stylesheets, copied to assets/
styles = []

# Files copied verbatim into the site root
public_dir = "public"

[backend]
# Contact submissions are posted to {base_url}/api/contact.
# SHOWROOM_BACKEND_URL overrides this value.
base_url = ""

[build]
# Enable minification
minify = true

[server]
host = "127.0.0.1"
port = 8080
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::tempdir;

    #[test]
    fn default_config_matches_built_in_defaults() {
        let config = SiteConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[tokio::test]
    async fn writes_config_and_public_dir() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");

        run(&path, false).await.unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
        assert!(temp.path().join("public").is_dir());
    }

    #[tokio::test]
    async fn keeps_existing_config_without_yes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site]\ntitle = \"Mine\"\n").unwrap();

        run(&path, false).await.unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("Mine"));

        run(&path, true).await.unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
