mod cli;
mod config;
mod service;
mod ui;

use anyhow::Result;
use clap::Parser;
use embed_provider::ProviderRegistry;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG 优先；默认只显示工厂的选择日志
    let default_filter = if cli.verbose {
        "debug"
    } else {
        "warn,embed_types=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { local, force } => {
            service::init::initialize(local, force, cli.config.as_deref())
        }
        Commands::Providers => {
            service::providers::list_providers(&ProviderRegistry::builtin());
            Ok(())
        }
        Commands::Text {
            text,
            provider,
            json,
        } => {
            service::embed::embed_text(&text, provider.as_deref(), json, cli.config.as_deref())
                .await
        }
    }
}
