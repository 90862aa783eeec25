//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and options using the
//! [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use gds::config::file::{FileConfig, expand_tilde};
use gds::config::{ScanOptions, SortOrder};

/// Command-line arguments for choosing the listing order.
#[derive(Parser)]
struct SortingArgs {
    /// Sort subdirectories by size, smallest first (the default)
    #[arg(short = 'a', long)]
    ascending: bool,

    /// Sort subdirectories by size, largest first
    #[arg(short = 'd', long)]
    descending: bool,
}

/// Command-line arguments for controlling directory scanning behavior.
#[derive(Parser)]
struct ScanningArgs {
    /// The number of threads to use for measuring subdirectories
    ///
    /// A value of 0 uses the default number of threads (typically the number of CPU cores).
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// List every file or directory that could not be read
    ///
    /// Without this flag only the number of unreadable entries is shown.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Follow symbolic links inside the measured directories
    ///
    /// By default links are not followed and count as zero bytes, which avoids
    /// cycles and counting the same data twice.
    #[arg(short = 'L', long)]
    follow_links: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser)]
#[command(name = "gds")]
#[command(
    about = "Show the disk usage of each subdirectory of a directory, sorted by size, followed by the directory's total"
)]
#[command(version)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Directory to report on
    ///
    /// Defaults to the `dir` entry of the config file, then to the current directory.
    dir: Option<PathBuf>,

    /// Output the report as a single JSON object for scripting/piping
    #[arg(long)]
    json: bool,

    /// Sorting options
    #[command(flatten)]
    sorting: SortingArgs,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Resolve the target directory.
    ///
    /// Priority: CLI argument > config file `dir` (tilde-expanded) > current directory.
    #[must_use]
    pub fn directory(&self, config: &FileConfig) -> PathBuf {
        if let Some(ref dir) = self.dir {
            return dir.clone();
        }

        config
            .dir
            .as_deref()
            .map_or_else(|| PathBuf::from("."), expand_tilde)
    }

    /// Resolve the sort order.
    ///
    /// Priority: CLI flag > config file `report.order` > ascending. An
    /// unrecognised config value falls back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`gds::Error::Configuration`] when both `--ascending` and
    /// `--descending` are given.
    pub fn sort_order(&self, config: &FileConfig) -> gds::Result<SortOrder> {
        match (self.sorting.ascending, self.sorting.descending) {
            (true, true) => Err(gds::Error::Configuration(
                "cannot use both -a (ascending) and -d (descending) at the same time".to_string(),
            )),
            (true, false) => Ok(SortOrder::Ascending),
            (false, true) => Ok(SortOrder::Descending),
            (false, false) => Ok(config
                .report
                .order
                .as_ref()
                .and_then(|s| SortOrder::from_str(s, true).ok())
                .unwrap_or_default()),
        }
    }

    /// Extract scanning options from CLI args and config file.
    ///
    /// - **threads**: CLI > config > `0` (default)
    /// - **verbose**, **`follow_links`**: CLI flag `||` config value `||` `false`
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        ScanOptions {
            verbose: self.scanning.verbose || config.scanning.verbose.unwrap_or(false),
            threads: self
                .scanning
                .threads
                .or(config.scanning.threads)
                .unwrap_or(0),
            follow_links: self.scanning.follow_links
                || config.scanning.follow_links.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gds::config::file::{FileReportConfig, FileScanConfig};

    #[test]
    fn test_default_values() {
        let config = FileConfig::default();
        let args = Cli::parse_from(["gds"]);

        assert!(args.subcommand.is_none());
        assert!(!args.json());
        assert_eq!(args.directory(&config), PathBuf::from("."));
        assert_eq!(args.sort_order(&config).unwrap(), SortOrder::Ascending);
        assert_eq!(args.scan_options(&config), ScanOptions::default());
    }

    #[test]
    fn test_custom_directory() {
        let args = Cli::parse_from(["gds", "/custom/path"]);
        assert_eq!(
            args.directory(&FileConfig::default()),
            PathBuf::from("/custom/path")
        );
    }

    #[test]
    fn test_only_one_directory_allowed() {
        assert!(Cli::try_parse_from(["gds", "/a", "/b"]).is_err());
    }

    #[test]
    fn test_sort_flags() {
        let config = FileConfig::default();

        let args = Cli::parse_from(["gds", "-d"]);
        assert_eq!(args.sort_order(&config).unwrap(), SortOrder::Descending);

        let args = Cli::parse_from(["gds", "--ascending"]);
        assert_eq!(args.sort_order(&config).unwrap(), SortOrder::Ascending);
    }

    #[test]
    fn test_conflicting_sort_flags_are_configuration_error() {
        let config = FileConfig::default();

        for argv in [vec!["gds", "-a", "-d"], vec!["gds", "-ad"], vec!["gds", "-da"]] {
            let args = Cli::parse_from(argv);
            assert!(matches!(
                args.sort_order(&config),
                Err(gds::Error::Configuration(_))
            ));
        }
    }

    #[test]
    fn test_grouped_flags_with_directory() {
        let args = Cli::parse_from(["gds", "-dv", "/srv"]);
        let config = FileConfig::default();

        assert_eq!(args.sort_order(&config).unwrap(), SortOrder::Descending);
        assert!(args.scan_options(&config).verbose);
        assert_eq!(args.directory(&config), PathBuf::from("/srv"));
    }

    #[test]
    fn test_scanning_options() {
        let args = Cli::parse_from(["gds", "--threads", "4", "--verbose", "-L"]);
        let scan_opts = args.scan_options(&FileConfig::default());

        assert_eq!(scan_opts.threads, 4);
        assert!(scan_opts.verbose);
        assert!(scan_opts.follow_links);
    }

    #[test]
    fn test_json_flag() {
        let args = Cli::parse_from(["gds", "--json", "."]);
        assert!(args.json());
    }

    #[test]
    fn test_config_values_used_when_cli_absent() {
        let args = Cli::parse_from(["gds"]);
        let config = FileConfig {
            dir: Some(PathBuf::from("/from/config")),
            report: FileReportConfig {
                order: Some("Descending".to_string()),
            },
            scanning: FileScanConfig {
                threads: Some(2),
                verbose: Some(true),
                follow_links: Some(true),
            },
        };

        assert_eq!(args.directory(&config), PathBuf::from("/from/config"));
        assert_eq!(args.sort_order(&config).unwrap(), SortOrder::Descending);

        let scan_opts = args.scan_options(&config);
        assert_eq!(scan_opts.threads, 2);
        assert!(scan_opts.verbose);
        assert!(scan_opts.follow_links);
    }

    #[test]
    fn test_cli_overrides_config_values() {
        let args = Cli::parse_from(["gds", "-a", "-t", "8", "/cli/dir"]);
        let config = FileConfig {
            dir: Some(PathBuf::from("/from/config")),
            report: FileReportConfig {
                order: Some("descending".to_string()),
            },
            scanning: FileScanConfig {
                threads: Some(2),
                ..FileScanConfig::default()
            },
        };

        assert_eq!(args.directory(&config), PathBuf::from("/cli/dir"));
        assert_eq!(args.sort_order(&config).unwrap(), SortOrder::Ascending);
        assert_eq!(args.scan_options(&config).threads, 8);
    }

    #[test]
    fn test_invalid_config_order_falls_back_to_default() {
        let args = Cli::parse_from(["gds"]);
        let config = FileConfig {
            report: FileReportConfig {
                order: Some("sideways".to_string()),
            },
            ..FileConfig::default()
        };

        assert_eq!(args.sort_order(&config).unwrap(), SortOrder::Ascending);
    }

    #[test]
    fn test_config_dir_with_tilde_expansion() {
        let args = Cli::parse_from(["gds"]);
        let config = FileConfig {
            dir: Some(PathBuf::from("~/Downloads")),
            ..FileConfig::default()
        };

        if let Some(home) = dirs::home_dir() {
            assert_eq!(args.directory(&config), home.join("Downloads"));
        }
    }

    #[test]
    fn test_config_subcommand() {
        let args = Cli::parse_from(["gds", "config", "path"]);
        assert!(matches!(
            args.subcommand,
            Some(Commands::Config {
                command: ConfigCommand::Path
            })
        ));
    }
}
