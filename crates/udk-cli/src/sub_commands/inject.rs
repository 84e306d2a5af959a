use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use udk_api_client::LoadingIndicator;
use udk_audit::{inject_before_body, DebugToggle};

#[derive(Args)]
pub struct InjectSubCommand {
    /// Path to the HTML page
    file: PathBuf,
    /// Also inject the loading overlay markup
    #[arg(long)]
    overlay: bool,
    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn inject(sub_command_args: &InjectSubCommand) -> Result<()> {
    let page = fs::read_to_string(&sub_command_args.file)
        .with_context(|| format!("Could not read {}", sub_command_args.file.display()))?;

    let page = prepare_page(&page, sub_command_args.overlay);

    match &sub_command_args.output {
        Some(path) => {
            fs::write(path, &page)
                .with_context(|| format!("Could not write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{}", page),
    }

    Ok(())
}

fn prepare_page(page: &str, overlay: bool) -> String {
    let toggle = DebugToggle::new();
    let page = toggle.inject_into(page);
    if overlay {
        let indicator = LoadingIndicator::default();
        inject_before_body(&page, &indicator.overlay_html())
    } else {
        page
    }
}
