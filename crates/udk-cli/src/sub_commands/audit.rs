use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use udk_api_client::{ApiClient, RequestOptions, ResponseFormat};
use udk_audit::Auditor;
use url::Url;

use crate::config::Settings;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per violation
    Text,
    /// Structured JSON report
    Json,
}

#[derive(Args)]
pub struct AuditSubCommand {
    /// Path to an HTML file, or an http(s) URL to fetch
    target: String,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Exit non-zero when violations are found
    #[arg(long)]
    strict: bool,
}

pub async fn audit(settings: &Settings, sub_command_args: &AuditSubCommand) -> Result<()> {
    let html = load_target(&sub_command_args.target).await?;

    let auditor = Auditor::with_system(settings.design_system.clone());
    let report = auditor.run(&html);

    match sub_command_args.format {
        OutputFormat::Text => {
            if report.is_clean() {
                println!("No design inconsistencies found");
            } else {
                for violation in report.violations() {
                    println!("{}: {}", violation.kind.message(), violation.element);
                }
                println!("{} violation(s) found", report.violations().len());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if sub_command_args.strict && !report.is_clean() {
        bail!("{} design inconsistencies found", report.violations().len());
    }

    Ok(())
}

async fn load_target(target: &str) -> Result<String> {
    if let Ok(url) = Url::parse(target) {
        if matches!(url.scheme(), "http" | "https") {
            return fetch_page(url.as_str()).await;
        }
    }
    fs::read_to_string(Path::new(target)).with_context(|| format!("Could not read {}", target))
}

async fn fetch_page(url: &str) -> Result<String> {
    let client = ApiClient::new();
    let options = RequestOptions::get(url).response_format(ResponseFormat::Html);
    let response = client.perform(options).await?;
    let status = response.status();
    if !status.is_success() {
        bail!("Fetching {} failed with status {}", url, status);
    }
    Ok(response.text().await?)
}
