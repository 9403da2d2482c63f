//! `mdview render` command implementation.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use mdview_config::{CliSettings, Config};
use mdview_pipeline::Pipeline;

use super::pipeline_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render, or `-` for stdin.
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover mdview.toml).
    #[arg(short, long, env = "MDVIEW_CONFIG")]
    config: Option<PathBuf>,

    /// Leave code blocks unhighlighted.
    #[arg(long)]
    no_highlight: bool,

    /// Highlight code without line numbers.
    #[arg(long)]
    no_line_numbers: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or input/output fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            highlight: self.no_highlight.then_some(false),
            line_numbers: self.no_line_numbers.then_some(false),
            ..CliSettings::default()
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let pipeline = Pipeline::new(&pipeline_config(&config));

        let source = read_input(&self.input)?;
        let html = pipeline.render_safe(&source);

        match &self.output {
            Some(path) => {
                std::fs::write(path, &html)?;
                Output::new().success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                if !html.is_empty() {
                    stdout.write_all(b"\n")?;
                }
                stdout.flush()?;
            }
        }

        Ok(())
    }
}

/// Read markdown from a file, or from stdin for `-`.
fn read_input(input: &Path) -> Result<String, CliError> {
    if input.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}
