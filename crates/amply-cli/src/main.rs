//! Amply command-line tool.

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use amply::{Client, Config, EmailData};
use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use crate::cli::{ApiArgs, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Normalize { file, compact } => normalize(&file, compact),
        Command::Send { file, api } => send(&file, &api).await,
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "amply=debug,amply_payload=debug"
    } else {
        "amply=info,amply_payload=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn normalize(file: &Path, compact: bool) -> anyhow::Result<()> {
    let data = load_email_data(file)?;
    let document = amply::normalize(&data)?;

    let json = if compact {
        serde_json::to_string(&document)?
    } else {
        serde_json::to_string_pretty(&document)?
    };
    println!("{json}");
    Ok(())
}

async fn send(file: &Path, api: &ApiArgs) -> anyhow::Result<()> {
    let data = load_email_data(file)?;

    let config = Config::builder()
        .base_url(&api.base_url)
        .access_token(&api.token)
        .timeout(Duration::from_secs(api.timeout_secs))
        .build()
        .context("invalid API configuration")?;
    let client = Client::new(config)?;

    let response = client.email().create(&data).await?;
    info!(status = response.status, "Email accepted");
    if !response.body.is_empty() {
        println!("{}", response.body);
    }
    Ok(())
}

/// Reads an email request from a JSON file, or stdin for `-`.
fn load_email_data(file: &Path) -> anyhow::Result<EmailData> {
    let text = if file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        text
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?
    };

    parse_email_data(&text).with_context(|| format!("invalid email data in {}", file.display()))
}

fn parse_email_data(text: &str) -> serde_json::Result<EmailData> {
    serde_json::from_str(text)
}
