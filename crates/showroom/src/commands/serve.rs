//! Live server command.

use std::path::Path;

use anyhow::{Context, Result};
use showroom_server::SiteServer;

use crate::config::{load_config, ServerOverrides};

/// Run the serve command.
pub async fn run(config_path: &Path, overrides: ServerOverrides) -> Result<()> {
    let file_config = load_config(config_path)?;
    if file_config.backend.base_url.is_empty() {
        tracing::warn!(
            "No backend configured; set [backend].base_url or {} to relay contact submissions",
            crate::config::BACKEND_URL_ENV
        );
    }

    let config = file_config.server_config(overrides, false, config_path);

    SiteServer::new(config)?
        .start()
        .await
        .context("Server stopped")?;

    Ok(())
}
