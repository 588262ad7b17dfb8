use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "verse-cmd")]
#[command(about = "Command-line utility for searching verse index files")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search one version of an index directory
    Search {
        #[command(flatten)]
        data: commands::DataArgs,

        /// Maximum number of results
        #[arg(short = 'n', long)]
        max_results: Option<usize>,

        /// Print the results as a JSON array
        #[arg(long)]
        json: bool,

        /// Version to search, e.g. "KJV" or "NIV 2011"
        version: String,

        /// Query words
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Load versions and report per-table occupancy
    Stats {
        #[command(flatten)]
        data: commands::DataArgs,

        /// Versions to load (can be specified multiple times; all versions if omitted)
        #[arg(long = "version")]
        versions: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the known versions
    Versions {
        /// Only list versions of this language ("english" or "spanish")
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Show the terms a query is broken into
    Tokenize {
        /// Text to tokenize
        text: Vec<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().filter_or("RUST_LOG", level);
    env_logger::Builder::from_env(env).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Search {
            data,
            max_results,
            json,
            version,
            query,
        } => commands::search::run(data, version, query.join(" "), max_results, json),
        Commands::Stats {
            data,
            versions,
            json,
        } => commands::stats::run(data, versions, json),
        Commands::Versions { language } => commands::versions::run(language),
        Commands::Tokenize { text } => commands::tokenize::run(text.join(" ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from([
            "verse-cmd", "-vv", "search", "--data-dir", "/data", "-n", "5", "NIV 2011", "love",
            "one", "another",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Search {
            data,
            max_results,
            version,
            query,
            json,
        } = cli.command
        else {
            panic!("expected search");
        };
        assert_eq!(data.data_dir.to_str(), Some("/data"));
        assert_eq!(max_results, Some(5));
        assert_eq!(version, "NIV 2011");
        assert_eq!(query, ["love", "one", "another"]);
        assert!(!json);
    }

    #[test]
    fn test_search_requires_query() {
        let args = ["verse-cmd", "search", "--data-dir", "/data", "KJV"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_stats_versions() {
        let cli = Cli::try_parse_from([
            "verse-cmd", "stats", "--data-dir", "d", "--radix", "decimal", "--version", "KJV",
            "--version", "ESV", "--json",
        ])
        .unwrap();
        let Commands::Stats { data, versions, json } = cli.command else {
            panic!("expected stats");
        };
        assert_eq!(data.radix.as_deref(), Some("decimal"));
        assert_eq!(versions, ["KJV", "ESV"]);
        assert!(json);
    }
}
