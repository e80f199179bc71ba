//! Diagnostic rules: consumers of [`ResolvedCall`]s.
//!
//! The engine decides *what* is called; a rule decides whether that is worth
//! a finding. Rules are configured by name with a closed set of options.

mod chaining;
mod collection_method_value;
mod identity_shorthand;

pub use chaining::Chaining;
pub use collection_method_value::CollectionMethodValue;
pub use identity_shorthand::{IdentityShorthand, ShorthandMode};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tree_sitter::Node;

use crate::engine::{ResolutionContext, ResolvedCall};
use crate::error::LintError;

/// Names of every rule, in registry order.
pub const RULE_NAMES: &[&str] = &[
    chaining::NAME,
    collection_method_value::NAME,
    identity_shorthand::NAME,
];

// ─── Findings ────────────────────────────────────────────────────────

/// One diagnostic, anchored at the offending sub-expression.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub rule: &'static str,
    pub message: String,
    /// 1-based
    pub line: usize,
    /// 1-based
    pub column: usize,
}

impl Finding {
    pub fn at(rule: &'static str, node: Node, message: impl Into<String>) -> Self {
        let start = node.start_position();
        Self {
            rule,
            message: message.into(),
            line: start.row + 1,
            column: start.column + 1,
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: [{}] {}", self.line, self.column, self.rule, self.message)
    }
}

// ─── Rule trait ──────────────────────────────────────────────────────

/// What a rule sees besides the call itself.
pub struct RuleContext<'c, 'a> {
    pub resolution: &'c ResolutionContext,
    pub source: &'a str,
}

pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Inspect one resolved call and push any findings.
    fn check(&self, call: &ResolvedCall<'_>, ctx: &RuleContext<'_, '_>, findings: &mut Vec<Finding>);

    /// Inspect a `<pragma>(value)` wrap. Wraps never resolve as method calls,
    /// so rules about chain starts see them here.
    fn check_wrap(&self, _wrap: Node<'_>, _ctx: &RuleContext<'_, '_>, _findings: &mut Vec<Finding>) {}
}

// ─── Configuration ───────────────────────────────────────────────────

/// A rule's configured value: `true`/`false`, or a named option.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RuleSetting {
    Toggle(bool),
    Mode(String),
}

impl std::str::FromStr for RuleSetting {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "true" | "on" => Self::Toggle(true),
            "false" | "off" => Self::Toggle(false),
            other => Self::Mode(other.to_string()),
        })
    }
}

/// Build the active rules. Rules missing from `config` run with defaults.
pub fn build_rules(config: &BTreeMap<String, RuleSetting>) -> Result<Vec<Box<dyn Rule>>, LintError> {
    if let Some(unknown) = config.keys().find(|name| !RULE_NAMES.contains(&name.as_str())) {
        return Err(LintError::UnknownRule {
            name: unknown.clone(),
        });
    }

    let mut rules: Vec<Box<dyn Rule>> = Vec::new();
    for &name in RULE_NAMES {
        let setting = config.get(name);
        let rule: Option<Box<dyn Rule>> = match name {
            chaining::NAME => toggle(name, setting)?.then(|| Box::new(Chaining) as Box<dyn Rule>),
            collection_method_value::NAME => {
                toggle(name, setting)?.then(|| Box::new(CollectionMethodValue) as Box<dyn Rule>)
            }
            identity_shorthand::NAME => ShorthandMode::from_setting(setting)?
                .map(|mode| Box::new(IdentityShorthand::new(mode)) as Box<dyn Rule>),
            _ => None,
        };
        rules.extend(rule);
    }
    Ok(rules)
}

/// On/off rules accept only a boolean (or `on`/`off`). Absent means on.
fn toggle(rule: &str, setting: Option<&RuleSetting>) -> Result<bool, LintError> {
    match setting {
        None => Ok(true),
        Some(RuleSetting::Toggle(enabled)) => Ok(*enabled),
        Some(RuleSetting::Mode(value)) => Err(LintError::InvalidRuleOption {
            rule: rule.to_string(),
            value: value.clone(),
            expected: "true, false".to_string(),
        }),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
