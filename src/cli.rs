use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "embed")]
#[command(about = "Select and construct embedding model clients by provider name", long_about = None)]
pub struct Cli {
    /// Path to config.toml (default: ./.embed/config.toml, then ~/.embed/config.toml)
    #[arg(long, global = true, env = "EMBED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Write a default configuration file")]
    Init {
        /// Initialize in local directory (./.embed) instead of global (~/.embed)
        #[arg(short, long)]
        local: bool,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    #[command(about = "List registered embedding providers")]
    Providers,

    #[command(about = "Embed a text with the configured provider")]
    Text {
        /// Text to embed
        text: String,

        /// Provider name (overrides config and EMBED_PROVIDER)
        #[arg(short, long)]
        provider: Option<String>,

        /// Print the full vector as JSON on stdout
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_command() {
        let cli = Cli::try_parse_from(["embed", "text", "hello", "-p", "ollama", "--json"]).unwrap();

        match cli.command {
            Commands::Text {
                text,
                provider,
                json,
            } => {
                assert_eq!(text, "hello");
                assert_eq!(provider.as_deref(), Some("ollama"));
                assert!(json);
            }
            _ => panic!("expected text command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["embed", "providers", "--config", "/tmp/embed.toml", "-v"]).unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/embed.toml")));
        assert!(matches!(cli.command, Commands::Providers));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
