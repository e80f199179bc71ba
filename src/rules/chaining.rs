//! `chaining`: flag chain syntax when chaining is disallowed.

use tree_sitter::Node;

use super::{Finding, Rule, RuleContext};
use crate::engine::{CallStyle, ResolvedCall};
use crate::methods::CHAIN_METHOD;

pub(super) const NAME: &str = "chaining";

/// Reports each chain once, at its start, when the pass runs with chaining
/// disallowed.
pub struct Chaining;

impl Rule for Chaining {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, call: &ResolvedCall<'_>, ctx: &RuleContext<'_, '_>, findings: &mut Vec<Finding>) {
        if ctx.resolution.chaining_allowed() {
            return;
        }
        // `_.chain(value)`
        if call.style == CallStyle::Direct && call.method == CHAIN_METHOD {
            findings.push(Finding::at(NAME, call.node, "Do not use explicit chaining"));
        }
    }

    /// `_(value)`, reported even when nothing is called on the wrapper.
    fn check_wrap(&self, wrap: Node<'_>, ctx: &RuleContext<'_, '_>, findings: &mut Vec<Finding>) {
        if !ctx.resolution.chaining_allowed() {
            findings.push(Finding::at(NAME, wrap, "Do not use implicit chaining"));
        }
    }
}
