use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod config;
mod sub_commands;

/// Design consistency tooling for web pages
#[derive(Parser)]
#[command(name = "udk")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Logging level
    #[arg(short, long, default_value = "error")]
    log_level: Level,
    /// Path to a TOML settings file extending the design system vocabulary
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a local HTML file or a live URL
    Audit(sub_commands::audit::AuditSubCommand),
    /// Inject the debug toggle markup into a page
    Inject(sub_commands::inject::InjectSubCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Cli = Cli::parse();
    let default_filter = args.log_level;

    let parser_filter = "html5ever=warn,selectors=warn";

    let env_filter = EnvFilter::new(format!("{},{}", default_filter, parser_filter));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let settings = config::Settings::new(args.config.as_deref());

    match &args.command {
        Commands::Audit(sub_command_args) => {
            sub_commands::audit::audit(&settings, sub_command_args).await
        }
        Commands::Inject(sub_command_args) => sub_commands::inject::inject(sub_command_args),
    }
}
