mod cli;
mod color;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::{Config, Settings};
use github_backend::GitHubClient;
use output::{output_error, output_report};
use points_core::{build_report, fetch_all, Issue, Scope};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return ExitCode::SUCCESS;
    }

    init_logging();
    color::init(cli.color);

    if let Err(e) = run(&cli) {
        output_error(&e);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

/// Log to stderr so report tables stay alone on stdout
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.merge_with_cli(cli);
    let settings = config.validate(cli.selected_view())?;

    let client = GitHubClient::with_base_url(&settings.api_url, &settings.token);
    let issues = collect_issues(&client, &settings)?;

    output_report(&build_report(&issues, settings.view));
    Ok(())
}

fn collect_issues(client: &GitHubClient, settings: &Settings) -> Result<Vec<Issue>> {
    info!(
        "Scanning {} and all issues labeled {:?}...",
        describe_scopes(&settings.scopes),
        settings.label
    );

    let raw = fetch_all(client, &settings.scopes, &settings.label)
        .context("error listing GitHub issues")?;
    info!(count = raw.len(), "fetched labeled issues");

    Ok(raw.into_iter().map(Issue::from).collect())
}

fn describe_scopes(scopes: &[Scope]) -> String {
    scopes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
