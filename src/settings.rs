//! Analysis settings: lodash version, pragma, chaining and rule options.
//!
//! Loaded from a JSON file (`lodashlint.json`) and overridden by CLI flags.
//! Validation happens when the settings are turned into a
//! [`ResolutionContext`], before any source is parsed.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::ResolutionContext;
use crate::error::LintError;
use crate::methods::{profile_for_major, Version};
use crate::rules::{self, Rule, RuleSetting};

/// Settings file looked up in the scanned directory.
pub const SETTINGS_FILE_NAME: &str = "lodashlint.json";

/// Default identifier for the lodash object.
pub const DEFAULT_PRAGMA: &str = "_";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Settings {
    /// Major lodash version; only 3 and 4 have method tables.
    pub version: u8,
    pub pragma: String,
    pub chaining_allowed: bool,
    pub rules: BTreeMap<String, RuleSetting>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: Version::default().major(),
            pragma: DEFAULT_PRAGMA.to_string(),
            chaining_allowed: true,
            rules: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Parse settings JSON. `origin` names the source in error messages.
    pub fn from_json(text: &str, origin: &str) -> Result<Self, LintError> {
        serde_json::from_str(text).map_err(|e| LintError::InvalidSettings {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, LintError> {
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&text, &path.to_string_lossy())?;
        debug!(path = %path.display(), version = settings.version, pragma = %settings.pragma, "loaded settings");
        Ok(settings)
    }

    /// `lodashlint.json` in `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self, LintError> {
        let candidate = dir.join(SETTINGS_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate version and pragma and build the per-pass context.
    pub fn resolution_context(&self) -> Result<ResolutionContext, LintError> {
        let profile = profile_for_major(self.version)?;
        if self.pragma.is_empty() {
            return Err(LintError::InvalidSettings {
                path: "settings".to_string(),
                message: "pragma must not be empty".to_string(),
            });
        }
        Ok(ResolutionContext::new(profile, self.pragma.clone(), self.chaining_allowed))
    }

    pub fn rules(&self) -> Result<Vec<Box<dyn Rule>>, LintError> {
        rules::build_rules(&self.rules)
    }
}
