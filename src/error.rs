//! Unified error type for lodashlint.

use thiserror::Error;

/// All errors that can abort an analysis pass.
///
/// Per-call-site ambiguity is never an error: the engine rejects such calls
/// silently. Only configuration and I/O problems surface here.
#[derive(Error, Debug)]
pub enum LintError {
    /// I/O error (file read, directory access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested lodash major version has no method tables
    #[error("Unsupported lodash version {version} (supported: 3, 4)")]
    UnsupportedVersion { version: u8 },

    /// Settings file could not be parsed
    #[error("Invalid settings in {path}: {message}")]
    InvalidSettings { path: String, message: String },

    /// Rule name not known to the rule registry
    #[error("Unknown rule '{name}'")]
    UnknownRule { name: String },

    /// Rule option outside its closed enumeration
    #[error("Invalid option '{value}' for rule '{rule}' (expected one of: {expected})")]
    InvalidRuleOption {
        rule: String,
        value: String,
        expected: String,
    },

    /// tree-sitter grammar could not be loaded into the parser
    #[error("Failed to load grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// Invalid --exclude pattern
    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Report could not be rendered as JSON
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// Directory does not exist
    #[error("Directory does not exist: {0}")]
    DirNotFound(String),

    /// Mutually exclusive flags or other argument validation error
    #[error("{0}")]
    InvalidArgs(String),
}
