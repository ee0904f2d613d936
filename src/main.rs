use anyhow::{Context, Result};
use arxiv_cli::commands;
use arxiv_cli::config::{find_config_file, get_config, load_config, Config};
use arxiv_cli::models::{SearchQuery, SortBy};
use arxiv_cli::sources::ArxivSource;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// arxiv-cli - Search arXiv and look up papers by ID
#[derive(Parser, Debug)]
#[command(name = "arxiv-cli")]
#[command(version = arxiv_cli::VERSION)]
#[command(about = "CLI tool to interact with the arXiv API", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (-v, -vv, -vvv)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

/// Sort field for search results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SortField {
    #[value(name = "relevance")]
    Relevance,
    #[value(name = "lastUpdatedDate")]
    LastUpdatedDate,
    #[value(name = "submittedDate")]
    SubmittedDate,
}

impl From<SortField> for SortBy {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Relevance => SortBy::Relevance,
            SortField::LastUpdatedDate => SortBy::LastUpdatedDate,
            SortField::SubmittedDate => SortBy::SubmittedDate,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search arXiv for papers
    Search {
        /// Search query (e.g., "all:electron" or "ti:gravity AND au:Einstein")
        query: String,

        /// Sort order for results
        #[arg(long, value_enum, default_value_t = SortField::Relevance)]
        sort: SortField,

        /// Maximum number of results to return
        #[arg(
            long = "max_results",
            visible_alias = "max-results",
            default_value_t = 10,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        max_results: u32,
    },

    /// Get details for a specific arXiv paper by ID
    Get {
        /// arXiv ID (e.g., "0706.0001" or "hep-ph/0307015")
        arxiv_id: String,
    },
}

/// Where the effective configuration came from, logged once tracing is up
enum ConfigOrigin {
    Explicit(PathBuf),
    Discovered(PathBuf),
    Rejected(PathBuf, String),
    Defaults,
}

impl ConfigOrigin {
    fn log(&self) {
        match self {
            ConfigOrigin::Explicit(path) | ConfigOrigin::Discovered(path) => {
                tracing::info!("Using config file: {}", path.display());
            }
            ConfigOrigin::Rejected(path, err) => {
                tracing::warn!("Ignoring config file {}: {}", path.display(), err);
            }
            ConfigOrigin::Defaults => tracing::debug!("No config file found, using defaults"),
        }
    }
}

fn resolve_config(explicit: Option<&Path>) -> Result<(Config, ConfigOrigin)> {
    if let Some(path) = explicit {
        let config = load_config(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;
        return Ok((config, ConfigOrigin::Explicit(path.to_path_buf())));
    }

    let env_only = || get_config().context("Invalid ARXIV_CLI_* environment settings");
    match find_config_file() {
        Some(path) => match load_config(&path) {
            Ok(config) => Ok((config, ConfigOrigin::Discovered(path))),
            Err(e) => Ok((env_only()?, ConfigOrigin::Rejected(path, e.to_string()))),
        },
        None => Ok((env_only()?, ConfigOrigin::Defaults)),
    }
}

fn init_tracing(verbose: u8, quiet: bool, configured: Option<&str>) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => configured.unwrap_or("warn"),
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("arxiv_cli={}", level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, origin) = resolve_config(cli.config.as_deref())?;
    if let Some(timeout) = cli.timeout {
        config.api.timeout_secs = timeout;
    }

    init_tracing(cli.verbose, cli.quiet, config.logging.level.as_deref());
    origin.log();

    let arxiv = ArxivSource::from_config(&config.api).context("Failed to create arXiv client")?;
    tracing::debug!("Using arXiv endpoint {}", arxiv.endpoint());

    let mut out = std::io::stdout();
    match cli.command {
        Commands::Search {
            query,
            sort,
            max_results,
        } => {
            let search_query = SearchQuery::new(query)
                .sort_by(sort.into())
                .max_results(max_results);
            commands::search(&arxiv, &search_query, &mut out).await?;
        }
        Commands::Get { arxiv_id } => {
            commands::get(&arxiv, &arxiv_id, &mut out).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_defaults() {
        let cli = Cli::try_parse_from(["arxiv-cli", "search", "all:electron"]).unwrap();
        match cli.command {
            Commands::Search {
                query,
                sort,
                max_results,
            } => {
                assert_eq!(query, "all:electron");
                assert_eq!(sort, SortField::Relevance);
                assert_eq!(max_results, 10);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_search_options() {
        let cli = Cli::try_parse_from([
            "arxiv-cli",
            "search",
            "ti:gravity AND au:Einstein",
            "--sort",
            "lastUpdatedDate",
            "--max_results",
            "3",
        ])
        .unwrap();
        match cli.command {
            Commands::Search {
                sort, max_results, ..
            } => {
                assert_eq!(SortBy::from(sort), SortBy::LastUpdatedDate);
                assert_eq!(max_results, 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_search_rejects_bad_values() {
        assert!(Cli::try_parse_from(["arxiv-cli", "search", "q", "--sort", "date"]).is_err());
        assert!(Cli::try_parse_from(["arxiv-cli", "search", "q", "--max_results", "0"]).is_err());
        assert!(Cli::try_parse_from(["arxiv-cli", "search"]).is_err());
    }

    #[test]
    fn test_get_command() {
        let cli = Cli::try_parse_from(["arxiv-cli", "-v", "get", "hep-ex/0307015"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Get { arxiv_id } => assert_eq!(arxiv_id, "hep-ex/0307015"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["arxiv-cli"]).is_err());
    }
}
