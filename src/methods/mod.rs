//! Version-aware lodash method data.
//!
//! One immutable [`VersionProfile`] per supported major version, built once
//! from the static tables in `v3.rs` / `v4.rs` and shared process-wide.

mod v3;
mod v4;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::LintError;

/// Conventional value-extraction method that ends a chain.
pub const VALUE_METHOD: &str = "value";
/// Method that turns an implicit wrapper into an explicit chain.
pub const CHAIN_METHOD: &str = "chain";
/// Method that executes a chain's side effects and keeps it wrapped.
pub const COMMIT_METHOD: &str = "commit";
/// `_.identity`, the function every shorthand iteratee stands for.
pub const IDENTITY_METHOD: &str = "identity";

// ─── Version ─────────────────────────────────────────────────────────

/// Supported lodash major versions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum Version {
    V3,
    #[default]
    V4,
}

impl Version {
    pub const ALL: [Version; 2] = [Version::V3, Version::V4];

    pub fn major(self) -> u8 {
        match self {
            Self::V3 => 3,
            Self::V4 => 4,
        }
    }
}

impl TryFrom<u8> for Version {
    type Error = LintError;

    fn try_from(major: u8) -> Result<Self, Self::Error> {
        match major {
            3 => Ok(Self::V3),
            4 => Ok(Self::V4),
            version => Err(LintError::UnsupportedVersion { version }),
        }
    }
}

impl From<Version> for u8 {
    fn from(version: Version) -> u8 {
        version.major()
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.major())
    }
}

// ─── Static table layout ─────────────────────────────────────────────

/// Raw per-version data, exactly as declared in the version modules.
pub(super) struct ProfileTable {
    /// canonical name → alias names
    pub aliases: &'static [(&'static str, &'static [&'static str])],
    /// methods that only exist on the wrapper object
    pub wrapper: &'static [&'static str],
    /// names equivalent to `value()`
    pub wrapper_value_aliases: &'static [&'static str],
    /// methods whose iteratee may be omitted
    pub shorthand: &'static [&'static str],
    /// methods whose result stays wrapped in an implicit chain
    pub chainable: &'static [&'static str],
    /// methods that accept an iteratee
    pub iteratee: &'static [&'static str],
    pub iteratee_index: &'static [(&'static str, usize)],
    /// total formal parameter count
    pub arg_counts: &'static [(&'static str, usize)],
    /// collection methods whose value is the point of the call
    pub collection: &'static [&'static str],
    /// iteration methods called for their side effects
    pub side_effect_iteration: &'static [&'static str],
}

// ─── VersionProfile ──────────────────────────────────────────────────

/// Immutable method tables for one lodash major version.
#[derive(Debug)]
pub struct VersionProfile {
    version: Version,
    /// canonical name → ordered aliases (empty for most methods)
    aliases: HashMap<&'static str, Vec<&'static str>>,
    /// any known name (canonical or alias) → canonical name
    canonical_by_name: HashMap<&'static str, &'static str>,
    wrapper: HashSet<&'static str>,
    wrapper_value_aliases: HashSet<&'static str>,
    shorthand: HashSet<&'static str>,
    chainable: HashSet<&'static str>,
    iteratee: HashSet<&'static str>,
    iteratee_index: HashMap<&'static str, usize>,
    arg_counts: HashMap<&'static str, usize>,
    collection: HashSet<&'static str>,
    side_effect_iteration: HashSet<&'static str>,
}

impl VersionProfile {
    fn from_table(version: Version, table: &ProfileTable) -> Self {
        let mut aliases: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
        let mut alias_names: HashSet<&'static str> = HashSet::new();
        for &(canonical, names) in table.aliases {
            aliases.entry(canonical).or_default().extend(names.iter().copied());
            alias_names.extend(names.iter().copied());
        }

        // Every other name mentioned anywhere is a canonical method with no aliases.
        let mentioned = table
            .wrapper
            .iter()
            .chain(table.wrapper_value_aliases)
            .chain(table.shorthand)
            .chain(table.chainable)
            .chain(table.iteratee)
            .chain(table.collection)
            .chain(table.side_effect_iteration)
            .chain(table.iteratee_index.iter().map(|(name, _)| name))
            .chain(table.arg_counts.iter().map(|(name, _)| name))
            .chain(std::iter::once(&VALUE_METHOD));
        for name in mentioned {
            if !alias_names.contains(name) {
                aliases.entry(*name).or_default();
            }
        }

        let mut canonical_by_name = HashMap::with_capacity(aliases.len() + alias_names.len());
        for (canonical, names) in &aliases {
            canonical_by_name.insert(*canonical, *canonical);
            for alias in names {
                canonical_by_name.insert(*alias, *canonical);
            }
        }

        let profile = Self {
            version,
            aliases,
            canonical_by_name,
            wrapper: table.wrapper.iter().copied().collect(),
            wrapper_value_aliases: table.wrapper_value_aliases.iter().copied().collect(),
            shorthand: table.shorthand.iter().copied().collect(),
            chainable: table.chainable.iter().copied().collect(),
            iteratee: table.iteratee.iter().copied().collect(),
            iteratee_index: table.iteratee_index.iter().copied().collect(),
            arg_counts: table.arg_counts.iter().copied().collect(),
            collection: table.collection.iter().copied().collect(),
            side_effect_iteration: table.side_effect_iteration.iter().copied().collect(),
        };
        #[cfg(debug_assertions)]
        if let Err(message) = profile.check_invariants() {
            panic!("invalid method tables: {message}");
        }
        profile
    }

    /// Verify the table invariants: alias sets are pairwise disjoint, no alias
    /// doubles as a canonical name, and every iteratee index override belongs
    /// to a method that accepts an iteratee.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut owner: HashMap<&str, &str> = HashMap::new();
        for (canonical, names) in &self.aliases {
            for alias in names {
                if let Some(previous) = owner.insert(*alias, *canonical) {
                    return Err(format!(
                        "{}: alias '{}' is claimed by both '{}' and '{}'",
                        self.version, alias, previous, canonical
                    ));
                }
                if self.aliases.contains_key(alias) {
                    return Err(format!(
                        "{}: alias '{}' of '{}' is also a canonical name",
                        self.version, alias, canonical
                    ));
                }
            }
        }
        for name in self.iteratee_index.keys() {
            if !self.iteratee.contains(name) {
                return Err(format!(
                    "{}: iteratee index override for '{}', which takes no iteratee",
                    self.version, name
                ));
            }
        }
        Ok(())
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Resolve a raw member name to the profile's canonical method name.
    ///
    /// Case-sensitive. Returns `None` for names the profile does not know.
    pub fn canonical_name(&self, raw: &str) -> Option<&'static str> {
        self.canonical_by_name.get(raw).copied()
    }

    /// Aliases declared for a canonical name, in declaration order.
    pub fn aliases_of(&self, canonical: &str) -> &[&'static str] {
        self.aliases.get(canonical).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every `(alias, canonical)` pair declared by the profile.
    pub fn alias_pairs(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.aliases
            .iter()
            .flat_map(|(canonical, names)| names.iter().map(move |alias| (*alias, *canonical)))
    }

    /// All canonical names, sorted.
    pub fn canonical_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.aliases.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn is_wrapper_method(&self, name: &str) -> bool {
        self.wrapper.contains(name)
    }

    pub fn is_wrapper_value_alias(&self, name: &str) -> bool {
        self.wrapper_value_aliases.contains(name)
    }

    /// `value()` or one of its wrapper aliases: extracts a plain value from a chain.
    pub fn is_chain_breaker(&self, canonical: &str) -> bool {
        canonical == VALUE_METHOD || self.is_wrapper_value_alias(canonical)
    }

    pub fn is_shorthand_method(&self, name: &str) -> bool {
        self.shorthand.contains(name)
    }

    pub fn is_chainable(&self, name: &str) -> bool {
        self.chainable.contains(name)
    }

    pub fn accepts_iteratee(&self, name: &str) -> bool {
        self.iteratee.contains(name)
    }

    pub fn iteratee_index_override(&self, name: &str) -> Option<usize> {
        self.iteratee_index.get(name).copied()
    }

    pub fn arg_count(&self, name: &str) -> Option<usize> {
        self.arg_counts.get(name).copied()
    }

    pub fn is_collection_method(&self, name: &str) -> bool {
        self.collection.contains(name)
    }

    pub fn is_side_effect_iteration(&self, name: &str) -> bool {
        self.side_effect_iteration.contains(name)
    }
}

// ─── Registry ────────────────────────────────────────────────────────

static PROFILES: LazyLock<[VersionProfile; 2]> = LazyLock::new(|| {
    [
        VersionProfile::from_table(Version::V3, &v3::TABLE),
        VersionProfile::from_table(Version::V4, &v4::TABLE),
    ]
});

/// Profile for a supported version.
pub fn profile_for(version: Version) -> &'static VersionProfile {
    match version {
        Version::V3 => &PROFILES[0],
        Version::V4 => &PROFILES[1],
    }
}

/// Profile for a raw major version number, as found in settings.
pub fn profile_for_major(major: u8) -> Result<&'static VersionProfile, LintError> {
    Ok(profile_for(Version::try_from(major)?))
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "methods_tests.rs"]
mod tests;
