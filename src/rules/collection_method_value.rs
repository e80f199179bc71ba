//! `collection-method-value`: collection results must be used, side-effect
//! iteration results must not be.

use super::{Finding, Rule, RuleContext};
use crate::engine::ResolvedCall;
use crate::methods::COMMIT_METHOD;

pub(super) const NAME: &str = "collection-method-value";

pub struct CollectionMethodValue;

impl Rule for CollectionMethodValue {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, call: &ResolvedCall<'_>, ctx: &RuleContext<'_, '_>, findings: &mut Vec<Finding>) {
        let profile = ctx.resolution.profile();
        let pragma = ctx.resolution.pragma();

        if profile.is_collection_method(call.method) && !call.parent_uses_value {
            findings.push(Finding::at(
                NAME,
                call.node,
                format!("Use value returned from {}.{}", pragma, call.method),
            ));
        } else if profile.is_side_effect_iteration(call.method)
            && call.parent_uses_value
            && !is_followed_by_commit(call)
        {
            findings.push(Finding::at(
                NAME,
                call.node,
                format!("Do not use value returned from {}.{}", pragma, call.raw_method),
            ));
        }
    }
}

/// `.forEach(fn).commit()` runs the chain for its effects; the wrapper is
/// legitimately consumed.
fn is_followed_by_commit(call: &ResolvedCall<'_>) -> bool {
    call.style.is_chained() && call.next_method == Some(COMMIT_METHOD)
}
