//! # lodashlint: Version-Aware lodash Call Resolution
//!
//! Recognizes lodash invocations in JavaScript/TypeScript parse trees and
//! resolves each one to a canonical method of the configured lodash major
//! version, its call style, its iteratee argument and whether its result is
//! used. Lint rules consume the resolved calls.
//!
//! ## Library usage
//!
//! This crate is primarily a CLI tool, but the engine, method tables and
//! rules are exposed as a library for benchmarking and integration testing.
//!
//! ```
//! use lodashlint::methods::{profile_for, Version};
//!
//! let v3 = profile_for(Version::V3);
//! assert_eq!(v3.canonical_name("each"), Some("forEach"));
//! assert_eq!(profile_for(Version::V4).canonical_name("first"), Some("head"));
//! ```

pub mod analysis;
pub mod engine;
pub mod error;
pub mod methods;
pub mod rules;
pub mod settings;

pub use analysis::{Analyzer, ScanOptions, ScanReport};
pub use engine::{CallStyle, Resolution, ResolutionContext, ResolvedCall};
pub use error::LintError;
pub use methods::{Version, VersionProfile};
pub use rules::Finding;
pub use settings::Settings;

// ─── Path helpers ────────────────────────────────────────────────────

/// Strip the `\\?\` extended-length path prefix that Windows canonicalize adds.
#[must_use]
pub fn clean_path(p: &str) -> String {
    p.strip_prefix(r"\\?\").unwrap_or(p).to_string()
}

/// Read a file as a String, using lossy UTF-8 conversion for non-UTF8 files.
/// Returns `(content, was_lossy)` where `was_lossy` is true if replacement characters
/// were inserted. Legacy bundles often carry Windows-1252 bytes in comments.
pub fn read_file_lossy(path: &std::path::Path) -> std::io::Result<(String, bool)> {
    let raw = std::fs::read(path)?;
    match String::from_utf8(raw) {
        Ok(s) => Ok((s, false)),
        Err(e) => Ok((String::from_utf8_lossy(e.as_bytes()).into_owned(), true)),
    }
}
