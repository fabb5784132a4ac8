use anyhow::{Context, Result};
use chainaudit::{
    discover::discover_projects,
    model::{AffectedVersions, AuditReport},
    output::{format_report, OutputFormat},
    Auditor, Config, FsLoader, Registry, Severity,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Exit codes for CI integration
mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
    pub const CRITICAL_VULN: u8 = 2;
    pub const HIGH_VULN: u8 = 3;
}

#[derive(Parser)]
#[command(name = "chainaudit")]
#[command(
    author,
    version,
    about = "Audit npm projects for packages compromised in the September 2025 supply-chain attacks"
)]
struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit project directories
    Audit {
        /// Project directories containing package.json and/or package-lock.json
        paths: Vec<PathBuf>,

        /// Output format (text, json, table)
        #[arg(short, long)]
        format: Option<String>,

        /// Write the report to this file instead of the configured one
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the report without writing a report file
        #[arg(long)]
        no_write: bool,

        /// Also audit every nested project below each path
        #[arg(short, long)]
        recursive: bool,

        /// Exit with error if findings at or above this severity exist
        #[arg(long, value_enum)]
        fail_on: Option<FailLevel>,
    },

    /// List the known compromised packages
    ListPackages,

    /// Show or create config file
    Config {
        /// Generate default config file
        #[arg(long)]
        init: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FailLevel {
    Critical,
    High,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

/// Logs go to stderr so the report on stdout stays machine-readable.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Per-project progress is logged at `info`, so it shows by default.
fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn run(cli: Cli) -> Result<u8> {
    match cli.command {
        Commands::Audit {
            paths,
            format,
            output,
            no_write,
            recursive,
            fail_on,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            let format_str = format.unwrap_or_else(|| config.default_format.clone());
            let format = OutputFormat::from_str(&format_str).map_err(|e| anyhow::anyhow!(e))?;
            let report_file = if no_write {
                None
            } else {
                Some(output.unwrap_or_else(|| config.report_file.clone()))
            };

            run_audit(paths, &config, format, report_file, recursive, fail_on)
        }
        Commands::ListPackages => {
            list_packages();
            Ok(exit_codes::SUCCESS)
        }
        Commands::Config { init, path } => {
            handle_config(cli.config.as_deref(), init, path)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_audit(
    paths: Vec<PathBuf>,
    config: &Config,
    format: OutputFormat,
    report_file: Option<PathBuf>,
    recursive: bool,
    fail_on: Option<FailLevel>,
) -> Result<u8> {
    let existing = select_roots(paths, config)?;

    let roots = if recursive {
        expand_roots(&existing)
    } else {
        existing
    };

    let registry = Registry::builtin();
    let auditor = Auditor::new(&registry, FsLoader).with_ignore(config.ignore.clone());
    let report = auditor.audit_projects(&roots);

    let rendered = format_report(&report, format)?;
    println!("{}", rendered);

    if let Some(path) = report_file {
        std::fs::write(&path, &rendered)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(determine_exit_code(&report, fail_on))
}

/// Picks the roots to audit: the given paths, else the configured defaults,
/// else the current directory. Paths that do not exist are dropped.
fn select_roots(paths: Vec<PathBuf>, config: &Config) -> Result<Vec<PathBuf>> {
    let requested = if !paths.is_empty() {
        paths
    } else if !config.default_paths.is_empty() {
        config.default_paths.clone()
    } else {
        vec![PathBuf::from(".")]
    };

    let existing: Vec<PathBuf> = requested
        .into_iter()
        .filter(|p| {
            let exists = p.exists();
            if !exists {
                tracing::warn!(path = %p.display(), "project path does not exist, skipping");
            }
            exists
        })
        .collect();

    if existing.is_empty() {
        anyhow::bail!(
            "No valid project paths found.\nUsage: chainaudit audit [PROJECT_PATH]..."
        );
    }

    Ok(existing)
}

/// Replaces each root with the projects found beneath it. A root with no
/// manifests is kept so it still shows up as scanned.
fn expand_roots(roots: &[PathBuf]) -> Vec<PathBuf> {
    let mut expanded = Vec::new();
    for root in roots {
        let found = discover_projects(root);
        tracing::info!(root = %root.display(), projects = found.len(), "discovered projects");
        if found.is_empty() {
            expanded.push(root.clone());
        } else {
            expanded.extend(found);
        }
    }
    expanded
}

/// Determine the exit code based on findings and the --fail-on setting
fn determine_exit_code(report: &AuditReport<'_>, fail_on: Option<FailLevel>) -> u8 {
    let Some(fail_on) = fail_on else {
        return exit_codes::SUCCESS;
    };

    match (fail_on, report.highest_severity()) {
        (_, Some(Severity::Critical)) => exit_codes::CRITICAL_VULN,
        (FailLevel::High, Some(Severity::High)) => exit_codes::HIGH_VULN,
        _ => exit_codes::SUCCESS,
    }
}

fn list_packages() {
    let registry = Registry::builtin();

    println!("Known compromised packages ({}):", registry.len());
    println!();

    for advisory in registry.iter() {
        let versions = match &advisory.affected_versions {
            AffectedVersions::All => "all versions".to_string(),
            AffectedVersions::Exact(v) => v.join(", "),
        };
        println!(
            "  {:<48} {:<8} {}  [{}]",
            advisory.package_id,
            advisory.severity,
            advisory.campaign_date.format("%Y-%m-%d"),
            versions
        );
    }
}

fn handle_config(explicit: Option<&Path>, init: bool, show_path: bool) -> Result<()> {
    let config_path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::config_path);

    if show_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() {
            println!("Config file already exists at: {}", config_path.display());
            return Ok(());
        }

        Config::default().save_to(&config_path)?;
        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Default configuration:");
        println!("{}", Config::generate_default_config());
        return Ok(());
    }

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        println!("Config file: {}", config_path.display());
        println!();
        println!("{}", content);
    } else {
        println!("No config file found.");
        println!("Run 'chainaudit config --init' to create one.");
        println!();
        println!("Config path: {}", config_path.display());
    }

    Ok(())
}
