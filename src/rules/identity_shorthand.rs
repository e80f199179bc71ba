//! `identity-shorthand`: prefer (or forbid) omitting identity iteratees.

use tree_sitter::Node;

use super::{Finding, Rule, RuleContext, RuleSetting};
use crate::engine::syntax::{self, Expr};
use crate::engine::ResolvedCall;
use crate::error::LintError;
use crate::methods::IDENTITY_METHOD;

pub(super) const NAME: &str = "identity-shorthand";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShorthandMode {
    /// Report iteratees that could be omitted.
    #[default]
    Always,
    /// Report omitted iteratees.
    Never,
}

impl ShorthandMode {
    const EXPECTED: &'static str = "always, never, false";

    /// `None` when the rule is switched off.
    pub(super) fn from_setting(setting: Option<&RuleSetting>) -> Result<Option<Self>, LintError> {
        match setting {
            None | Some(RuleSetting::Toggle(true)) => Ok(Some(Self::default())),
            Some(RuleSetting::Toggle(false)) => Ok(None),
            Some(RuleSetting::Mode(value)) => match value.as_str() {
                "always" => Ok(Some(Self::Always)),
                "never" => Ok(Some(Self::Never)),
                _ => Err(LintError::InvalidRuleOption {
                    rule: NAME.to_string(),
                    value: value.clone(),
                    expected: Self::EXPECTED.to_string(),
                }),
            },
        }
    }
}

pub struct IdentityShorthand {
    mode: ShorthandMode,
}

impl IdentityShorthand {
    pub fn new(mode: ShorthandMode) -> Self {
        Self { mode }
    }
}

impl Rule for IdentityShorthand {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, call: &ResolvedCall<'_>, ctx: &RuleContext<'_, '_>, findings: &mut Vec<Finding>) {
        if !ctx.resolution.profile().is_shorthand_method(call.method) {
            return;
        }
        match (self.mode, call.iteratee) {
            (ShorthandMode::Always, Some(iteratee))
                if is_identity_iteratee(iteratee, ctx.source, ctx.resolution.pragma()) =>
            {
                findings.push(Finding::at(
                    NAME,
                    iteratee,
                    "Prefer omitting the iteratee over a function that returns its argument",
                ));
            }
            (ShorthandMode::Never, None) => {
                findings.push(Finding::at(NAME, call.property, "Do not use the identity shorthand syntax"));
            }
            _ => {}
        }
    }
}

/// `x => x`, `function (x) { return x; }` or `<pragma>.identity`.
fn is_identity_iteratee(iteratee: Node, source: &str, pragma: &str) -> bool {
    is_explicit_identity_function(iteratee, source) || is_lodash_identity(iteratee, source, pragma)
}

fn is_explicit_identity_function(iteratee: Node, source: &str) -> bool {
    let Some(param) = syntax::first_param_name(iteratee, source) else {
        return false;
    };
    syntax::value_returned_in_first_line(iteratee)
        .is_some_and(|returned| syntax::is_identifier_named(returned, source, param))
}

fn is_lodash_identity(iteratee: Node, source: &str, pragma: &str) -> bool {
    match syntax::shape(iteratee, source) {
        Expr::Member { object, name, .. } => {
            name == IDENTITY_METHOD && syntax::is_identifier_named(object, source, pragma)
        }
        _ => false,
    }
}
