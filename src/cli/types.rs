use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "rustyll-ofm")]
#[command(about = "Render markdown files without front matter as Rustyll pages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Source directory (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub source: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,

    /// Only report errors
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Read the site and list what markdown without front matter becomes
    #[command(alias = "p")]
    Promote {
        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<Vec<PathBuf>>,

        /// Promote files in collection directories as well
        #[arg(long, default_value_t = false)]
        collections: bool,

        /// Drop promoted originals from the static files
        #[arg(long, default_value_t = false)]
        remove_originals: bool,

        /// Safe mode (only safe generators run)
        #[arg(long, default_value_t = false)]
        safe: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_promote() {
        let cli = Cli::try_parse_from([
            "rustyll-ofm",
            "promote",
            "--source",
            "site",
            "--config",
            "_config.yml",
            "--config",
            "_local.yml",
            "--collections",
            "--remove-originals",
        ])
        .unwrap();

        assert_eq!(cli.source, Some(PathBuf::from("site")));
        assert_eq!(
            cli.command,
            Some(Commands::Promote {
                config: Some(vec![PathBuf::from("_config.yml"), PathBuf::from("_local.yml")]),
                collections: true,
                remove_originals: true,
                safe: false,
            })
        );
    }

    #[test]
    fn test_parse_without_command() {
        let cli = Cli::try_parse_from(["rustyll-ofm", "-g"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.debug);
        assert!(!cli.quiet);
    }
}
