//! Development server command.

use std::path::Path;

use anyhow::{Context, Result};
use showroom_server::SiteServer;

use crate::config::{load_config, ServerOverrides};

/// Run the dev server with live reload.
pub async fn run(config_path: &Path, overrides: ServerOverrides) -> Result<()> {
    let file_config = load_config(config_path)?;
    let config = file_config.server_config(overrides, true, config_path);

    tracing::info!("Starting development server on port {}", config.port);

    SiteServer::new(config)?
        .start()
        .await
        .context("Development server stopped")?;

    Ok(())
}
