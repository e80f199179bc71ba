//! CLI argument structs for all subcommands.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, ValueEnum};
use regex::Regex;

use lodashlint::analysis::{parse_extensions, ScanOptions, DEFAULT_EXTENSIONS};
use lodashlint::rules::RuleSetting;
use lodashlint::{LintError, Settings};

/// Settings sources shared by every analyzing command.
///
/// Lookup order: `--settings`, else `lodashlint.json` in the scanned
/// directory, else defaults. Individual flags override the loaded file.
#[derive(Args, Debug, Default, Clone)]
pub struct SettingsArgs {
    /// Settings file (default: lodashlint.json in the scanned directory)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Lodash major version (3 or 4)
    #[arg(long)]
    pub lodash_version: Option<u8>,

    /// Identifier bound to the lodash object
    #[arg(long)]
    pub pragma: Option<String>,

    /// Disallow lodash chaining
    #[arg(long)]
    pub no_chaining: bool,

    /// Rule option as NAME=VALUE, e.g. identity-shorthand=never. Repeatable.
    #[arg(long = "rule", value_name = "NAME=VALUE")]
    pub rules: Vec<String>,
}

impl SettingsArgs {
    /// Load the settings for `dir` and apply command-line overrides.
    pub fn resolve(&self, dir: &Path) -> Result<Settings, LintError> {
        let mut settings = match &self.settings {
            Some(path) => Settings::load(path)?,
            None => Settings::discover(dir)?,
        };
        if let Some(version) = self.lodash_version {
            settings.version = version;
        }
        if let Some(pragma) = &self.pragma {
            settings.pragma = pragma.clone();
        }
        if self.no_chaining {
            settings.chaining_allowed = false;
        }
        for rule in &self.rules {
            let (name, setting) = parse_rule(rule)?;
            settings.rules.insert(name, setting);
        }
        Ok(settings)
    }
}

/// Split `name=value` into a rule name and its setting.
pub fn parse_rule(raw: &str) -> Result<(String, RuleSetting), LintError> {
    let Some((name, value)) = raw.split_once('=') else {
        return Err(LintError::InvalidArgs(format!(
            "--rule expects NAME=VALUE, got '{}'",
            raw
        )));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(LintError::InvalidArgs(format!("--rule has an empty name: '{}'", raw)));
    }
    let setting = match value.trim().parse::<RuleSetting>() {
        Ok(setting) => setting,
        Err(never) => match never {},
    };
    Ok((name.to_string(), setting))
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// path:line:column: [rule] message
    #[default]
    Text,
    /// One pretty-printed JSON report
    Json,
}

#[derive(Parser, Debug)]
#[command(after_long_help = r#"EXAMPLES:
  Whole project:    lodashlint check -d ./src
  lodash 3:         lodashlint check -d ./src --lodash-version 3
  Custom pragma:    lodashlint check --pragma lodash
  No chaining:      lodashlint check --no-chaining
  Rule options:     lodashlint check --rule identity-shorthand=never --rule chaining=off
  Skip bundles:     lodashlint check --exclude "dist|vendor"
  Machine output:   lodashlint check --format json

NOTES:
  - Exit status is 1 when any finding is reported
  - .gitignore'd and hidden files are skipped unless --no-ignore / --hidden
  - Settings come from lodashlint.json in the scanned directory unless --settings is given
"#)]
pub struct CheckArgs {
    /// Directory to scan
    #[arg(short, long, default_value = ".")]
    pub dir: String,

    /// File extensions to scan, comma-separated
    #[arg(short, long, default_value = DEFAULT_EXTENSIONS)]
    pub ext: String,

    /// Skip files whose path matches this regex
    #[arg(long)]
    pub exclude: Option<String>,

    /// Include hidden files
    #[arg(long)]
    pub hidden: bool,

    /// Also scan .gitignore'd files
    #[arg(long)]
    pub no_ignore: bool,

    /// Number of parallel threads (0 = auto)
    #[arg(short, long, default_value = "0")]
    pub threads: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

impl CheckArgs {
    pub fn scan_options(&self) -> Result<ScanOptions, LintError> {
        let exclude = match &self.exclude {
            Some(pattern) => Some(Regex::new(pattern).map_err(|source| LintError::InvalidRegex {
                pattern: pattern.clone(),
                source,
            })?),
            None => None,
        };
        let extensions = parse_extensions(&self.ext);
        if extensions.is_empty() {
            return Err(LintError::InvalidArgs("--ext must name at least one extension".to_string()));
        }
        Ok(ScanOptions {
            dir: PathBuf::from(&self.dir),
            extensions,
            exclude,
            hidden: self.hidden,
            no_ignore: self.no_ignore,
            threads: self.threads,
        })
    }
}

#[derive(Parser, Debug)]
#[command(after_long_help = r#"EXAMPLES:
  lodashlint calls src/app.js
  lodashlint calls src/app.ts --lodash-version 3 --pragma lodash

Prints one JSON object per resolved call, in source order.
"#)]
pub struct CallsArgs {
    /// Source file to resolve
    pub file: PathBuf,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

#[derive(Parser, Debug)]
#[command(after_long_help = r#"EXAMPLES:
  All canonical names:  lodashlint methods
  One method:           lodashlint methods each --lodash-version 3
"#)]
pub struct MethodsArgs {
    /// Method or alias to describe; lists every canonical name when omitted
    pub name: Option<String>,

    /// Lodash major version (3 or 4)
    #[arg(long, default_value = "4")]
    pub lodash_version: u8,
}
