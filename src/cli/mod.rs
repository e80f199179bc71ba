//! CLI layer: argument parsing, command dispatch, and subcommand implementations.

pub mod args;

pub use args::*;

use std::fmt::Write as _;
use std::path::Path;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use lodashlint::analysis::{Analyzer, Parsers, ScanReport};
use lodashlint::engine::iteratee_position;
use lodashlint::methods::{profile_for_major, VersionProfile};
use lodashlint::{read_file_lossy, LintError};

// ─── CLI ─────────────────────────────────────────────────────────────

/// Version-aware lodash call resolution and lint rules for JavaScript/TypeScript
#[derive(Parser, Debug)]
#[command(
    name = "lodashlint",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATETIME"), ")"),
    about,
    after_help = "\
Run 'lodashlint <COMMAND> --help' for detailed options and examples.\n\
Common options: -d <DIR> (directory), -e <EXT> (extension filter), --lodash-version <N>"
)]
pub(crate) struct Cli {
    /// Log level for stderr output (RUST_LOG overrides)
    #[arg(
        long,
        global = true,
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Lint every JavaScript/TypeScript file under a directory
    Check(CheckArgs),

    /// Print every resolved lodash call of one file as JSON lines
    Calls(CallsArgs),

    /// Show the method tables of a lodash version
    Methods(MethodsArgs),
}

// ─── Main entry point ───────────────────────────────────────────────

pub fn run() {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_json);

    let result = match cli.command {
        Commands::Check(args) => cmd_check(args),
        Commands::Calls(args) => cmd_calls(args).map(|()| false),
        Commands::Methods(args) => cmd_methods(args).map(|()| false),
    };

    match result {
        Ok(false) => {}
        Ok(true) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.with_target(true).init();
    }
}

// ─── check ───────────────────────────────────────────────────────────

/// Returns `true` when findings were reported.
fn cmd_check(args: CheckArgs) -> Result<bool, LintError> {
    let options = args.scan_options()?;
    let settings = args.settings.resolve(&options.dir)?;
    let analyzer = Analyzer::from_settings(&settings)?;
    info!(
        dir = %options.dir.display(),
        version = settings.version,
        pragma = %settings.pragma,
        rules = ?analyzer.rule_names(),
        "Checking"
    );

    let report = analyzer.analyze_dir(&options)?;
    match args.format {
        OutputFormat::Text => {
            print!("{}", render_text(&report));
            eprintln!(
                "{} finding(s) in {} file(s), {} file(s) scanned",
                report.finding_count(),
                report.reports.len(),
                report.files_scanned
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(report.finding_count() > 0)
}

/// One `path:line:column: [rule] message` line per finding.
fn render_text(report: &ScanReport) -> String {
    let mut out = String::new();
    for file in &report.reports {
        for finding in &file.findings {
            let _ = writeln!(out, "{}:{}", file.path, finding);
        }
    }
    out
}

// ─── calls ───────────────────────────────────────────────────────────

fn cmd_calls(args: CallsArgs) -> Result<(), LintError> {
    let dir = args.file.parent().unwrap_or(Path::new("."));
    let settings = args.settings.resolve(dir)?;
    let analyzer = Analyzer::from_settings(&settings)?;
    let (source, _) = read_file_lossy(&args.file)?;

    let mut parsers = Parsers::new()?;
    let records = analyzer.resolved_calls(parsers.for_path(&args.file), &source);
    debug!(file = %args.file.display(), calls = records.len(), "resolved calls");
    for record in &records {
        println!("{}", serde_json::to_string(record)?);
    }
    Ok(())
}

// ─── methods ─────────────────────────────────────────────────────────

/// Everything a profile knows about one method.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MethodInfo {
    pub name: String,
    pub canonical: &'static str,
    pub version: u8,
    pub aliases: Vec<&'static str>,
    pub chainable: bool,
    pub chain_breaker: bool,
    pub wrapper_only: bool,
    pub shorthand: bool,
    pub collection: bool,
    pub side_effect_iteration: bool,
    pub accepts_iteratee: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteratee_position: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg_count: Option<usize>,
}

impl MethodInfo {
    /// `None` when `name` is neither a canonical name nor an alias.
    pub fn describe(profile: &VersionProfile, name: &str) -> Option<Self> {
        let canonical = profile.canonical_name(name)?;
        Some(Self {
            name: name.to_string(),
            canonical,
            version: profile.version().major(),
            aliases: profile.aliases_of(canonical).to_vec(),
            chainable: profile.is_chainable(canonical),
            chain_breaker: profile.is_chain_breaker(canonical),
            wrapper_only: profile.is_wrapper_method(canonical),
            shorthand: profile.is_shorthand_method(canonical),
            collection: profile.is_collection_method(canonical),
            side_effect_iteration: profile.is_side_effect_iteration(canonical),
            accepts_iteratee: profile.accepts_iteratee(canonical),
            iteratee_position: iteratee_position(canonical, profile),
            arg_count: profile.arg_count(canonical),
        })
    }
}

fn cmd_methods(args: MethodsArgs) -> Result<(), LintError> {
    let profile = profile_for_major(args.lodash_version)?;
    match args.name {
        Some(name) => {
            let info = MethodInfo::describe(profile, &name).ok_or_else(|| {
                LintError::InvalidArgs(format!(
                    "Unknown method '{}' for lodash {}",
                    name,
                    profile.version()
                ))
            })?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        None => {
            for name in profile.canonical_names() {
                println!("{}", name);
            }
        }
    }
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
