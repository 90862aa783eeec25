//! # gds
//!
//! Show how much disk space each subdirectory of a directory uses.
//!
//! `gds` measures every immediate subdirectory of the target, prints them
//! sorted by size and finishes with the total size of the target itself.
//!
//! ## Usage
//!
//! ```bash
//! # Current directory, smallest first
//! gds
//!
//! # Largest first
//! gds -d ~/Projects
//!
//! # Machine-readable output
//! gds --json /var/log
//! ```

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use gds::{FileConfig, Reporter, output::JsonOutput};
use std::process::exit;

/// Entry point for the gds application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    env_logger::init();

    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, resolves the layered configuration, builds the report
/// and prints it either as text or as JSON.
///
/// # Errors
///
/// Returns errors for conflicting options, thread-pool configuration, an
/// unreadable target directory, or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let json_mode = args.json();
    let file_config = load_config(json_mode);

    let order = args.sort_order(&file_config)?;
    let dir = args.directory(&file_config);
    let scan_options = args.scan_options(&file_config);

    if scan_options.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(scan_options.threads)
            .build_global()?;
    }

    if !json_mode {
        println!("Calculating disk usage for: {}", dir.display());
    }

    let verbose = scan_options.verbose;
    let report = Reporter::new(scan_options, order)
        .with_quiet(json_mode)
        .report(&dir)?;

    if json_mode {
        let output = JsonOutput::from_report(&report);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        report.print_diagnostics(verbose);
        report.print_summary();
    }

    Ok(())
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# gds configuration
# All values shown are their defaults. Uncomment and change as needed.

# Default directory to report on (defaults to current directory when not set)
# dir = "."

[report]
# Sort order of the listing: ascending (smallest first) or descending
# order = "ascending"

[scanning]
# Number of threads to use for measuring subdirectories (0 = all CPU cores)
# threads = 0

# List every file or directory that could not be read
# verbose = false

# Follow symbolic links inside the measured directories
# follow_links = false
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    let dir = config.dir.as_ref().map_or_else(
        || "\".\"  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );
    let order = config.report.order.as_deref().map_or_else(
        || "\"ascending\"  (default)".to_string(),
        |v| format!("\"{v}\""),
    );
    let threads = config.scanning.threads.map_or_else(
        || "0 (all cores)  (default)".to_string(),
        |v| v.to_string(),
    );

    format!(
        "\
dir          = {dir}

[report]
order        = {order}

[scanning]
threads      = {threads}
verbose      = {verbose}
follow_links = {follow_links}",
        verbose = show_bool(config.scanning.verbose, false),
        follow_links = show_bool(config.scanning.follow_links, false),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_template_parses_to_defaults() {
        let config: FileConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();

        assert!(config.dir.is_none());
        assert!(config.report.order.is_none());
        assert!(config.scanning.threads.is_none());
    }

    #[test]
    fn test_format_config_shows_defaults() {
        let text = format_config(&FileConfig::default());

        assert!(text.contains("order        = \"ascending\"  (default)"));
        assert!(text.contains("threads      = 0 (all cores)  (default)"));
        assert!(text.contains("follow_links = false  (default)"));
    }

    #[test]
    fn test_format_config_shows_file_values() {
        let config: FileConfig =
            toml::from_str("dir = \"/srv\"\n[report]\norder = \"descending\"\n").unwrap();
        let text = format_config(&config);

        assert!(text.contains("dir          = \"/srv\""));
        assert!(text.contains("order        = \"descending\""));
    }
}
