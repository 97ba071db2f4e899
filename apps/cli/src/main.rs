//! Hack-or-Snooze terminal client
//!
//! Thin front-end over the feed and api_client crates: parse a command,
//! restore any stored session, perform one API round trip, render the
//! result as terminal lines.

use clap::Parser;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod credentials;

use commands::Cli;
use config::CliConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = CliConfig::load()?;

    // Initialize tracing
    let log_level = match config.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    commands::run(cli, &config).await?;
    Ok(())
}

/// Filter directives covering every crate in this workspace that emits
/// tracing events.
fn default_filter(log_level: Level) -> String {
    format!("hacksnooze_cli={log_level},api_client={log_level},feed={log_level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_targets_workspace_crates() {
        let filter = default_filter(Level::DEBUG);
        for target in ["hacksnooze_cli=DEBUG", "api_client=DEBUG", "feed=DEBUG"] {
            assert!(filter.contains(target), "missing directive: {target}");
        }
    }
}
