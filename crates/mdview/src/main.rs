//! mdview CLI - Markdown previewer.
//!
//! Provides commands for:
//! - `serve`: Start the editor and preview server
//! - `render`: Render a markdown file to safe HTML

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, ServeArgs};
use error::CliError;
use output::Output;

/// mdview - Markdown previewer.
#[derive(Parser)]
#[command(name = "mdview", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the editor and preview server.
    Serve(ServeArgs),
    /// Render markdown to sanitized HTML.
    Render(RenderArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for serve command
    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => serve(args),
        Commands::Render(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        #[allow(clippy::exit)]
        std::process::exit(1);
    }
}

/// Log filter: --verbose enables INFO level, otherwise use RUST_LOG (ERROR when unset).
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    }
}

/// Run the serve command on a multi-threaded runtime.
fn serve(args: ServeArgs) -> Result<(), CliError> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(args.execute())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_enables_info() {
        assert_eq!(log_filter(true).to_string(), "info");
    }

    #[test]
    fn test_verbose_help_names_log_level() {
        let cli = Cli::command();
        let serve = cli.find_subcommand("serve").unwrap();
        let verbose = serve
            .get_arguments()
            .find(|arg| arg.get_id() == "verbose")
            .unwrap();
        let help = verbose.get_help().unwrap().to_string();
        assert!(help.contains("info"), "got {help}");
    }
}
