//! `mdview serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdview_config::{CliSettings, Config};
use mdview_server::{ServerConfig, run_server};

use super::pipeline_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover mdview.toml).
    #[arg(short, long, env = "MDVIEW_CONFIG")]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (info-level logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            ..CliSettings::default()
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }
        output.info(&format!(
            "Starting server on http://{}:{}",
            config.server.host, config.server.port
        ));
        if config.render.highlight {
            output.info("Code highlighting: enabled");
        } else {
            output.info("Code highlighting: disabled");
        }

        let server_config = ServerConfig {
            host: config.server.host.clone(),
            port: config.server.port,
            pipeline: pipeline_config(&config),
        };
        run_server(server_config).await?;

        Ok(())
    }
}
