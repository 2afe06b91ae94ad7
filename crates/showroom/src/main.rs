//! Showroom CLI - builds and serves the MH ENTERPRISES website.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use config::ServerOverrides;

#[derive(Parser)]
#[command(name = "showroom")]
#[command(about = "Build and serve the MH ENTERPRISES website")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default site.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Start the live server with browser live reload
    Dev {
        /// Port to listen on (defaults to config or 8080)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to config or 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Export the site as static files
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip minification
        #[arg(long)]
        no_minify: bool,
    },

    /// Serve the site and relay the contact form
    Serve {
        /// Port to listen on (defaults to config or 8080)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to config or 127.0.0.1)
        #[arg(long)]
        host: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Dev {
            port,
            host,
            no_open,
        } => {
            let overrides = ServerOverrides {
                host,
                port,
                open: !no_open,
            };
            commands::dev::run(&cli.config, overrides).await?;
        }
        Commands::Build { output, no_minify } => {
            let minify = if no_minify { Some(false) } else { None };
            commands::build::run(&cli.config, output, minify).await?;
        }
        Commands::Serve { port, host } => {
            let overrides = ServerOverrides {
                host,
                port,
                open: false,
            };
            commands::serve::run(&cli.config, overrides).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags_after_subcommand() {
        let cli = Cli::parse_from(["showroom", "dev", "--port", "9000", "--no-open", "-v"]);

        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        match cli.command {
            Commands::Dev {
                port,
                host,
                no_open,
            } => {
                assert_eq!(port, Some(9000));
                assert_eq!(host, None);
                assert!(no_open);
            }
            _ => panic!("expected dev"),
        }
    }

    #[test]
    fn parses_build_overrides() {
        let cli = Cli::parse_from([
            "showroom",
            "--config",
            "deploy/site.toml",
            "build",
            "-o",
            "public_html",
            "--no-minify",
        ]);

        assert_eq!(cli.config, PathBuf::from("deploy/site.toml"));
        match cli.command {
            Commands::Build { output, no_minify } => {
                assert_eq!(output, Some(PathBuf::from("public_html")));
                assert!(no_minify);
            }
            _ => panic!("expected build"),
        }
    }
}
