//! Call-site resolution engine.
//!
//! Given one `call_expression` node, decide whether it invokes lodash and, if
//! so, produce a [`ResolvedCall`]: canonical method, call style, iteratee and
//! whether the surrounding code uses the call's result.
//!
//! Each call goes through `ClassifyingStyle → ResolvingAlias → LocatingIteratee`
//! and ends `Resolved` or `Rejected`. Nothing is kept between calls; the only
//! shared state is the immutable [`VersionProfile`] held by the
//! [`ResolutionContext`].

mod classifier;
mod iteratee;
pub mod syntax;

pub use classifier::{CallStyle, ChainInfo, ChainStartKind, Classification, Rejection};
pub use iteratee::{iteratee_position, locate_iteratee};

use serde::Serialize;
use tracing::trace;
use tree_sitter::Node;

use crate::methods::{Version, VersionProfile};

// ─── Context ─────────────────────────────────────────────────────────

/// Per-pass resolution settings, built once and passed to every resolution.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    profile: &'static VersionProfile,
    pragma: String,
    chaining_allowed: bool,
}

impl ResolutionContext {
    pub fn new(
        profile: &'static VersionProfile,
        pragma: impl Into<String>,
        chaining_allowed: bool,
    ) -> Self {
        Self {
            profile,
            pragma: pragma.into(),
            chaining_allowed,
        }
    }

    pub fn profile(&self) -> &'static VersionProfile {
        self.profile
    }

    pub fn version(&self) -> Version {
        self.profile.version()
    }

    /// Identifier assumed to name the lodash object.
    pub fn pragma(&self) -> &str {
        &self.pragma
    }

    pub fn chaining_allowed(&self) -> bool {
        self.chaining_allowed
    }

    /// Resolve one call expression.
    pub fn resolve<'a>(&self, call: Node<'a>, source: &'a str) -> Resolution<'a> {
        let Some(site) = CallSite::new(call, source) else {
            return reject(call, Stage::ClassifyingStyle, Rejection::NotMemberCall);
        };

        let classification = match classifier::classify(&site, self) {
            Ok(classification) => classification,
            Err(reason) => return reject(call, Stage::ClassifyingStyle, reason),
        };

        let Some(method) = self.profile.canonical_name(classification.method) else {
            return reject(call, Stage::ResolvingAlias, Rejection::UnknownMethod);
        };
        trace!(raw = classification.method, method, "resolved alias");

        let iteratee = locate_iteratee(method, self.profile, &site.arguments, classification.style);
        trace!(method, found = iteratee.is_some(), "located iteratee");

        let next = syntax::outer_method_call(call, source);
        let next_method = next.and_then(|(_, name)| self.profile.canonical_name(name));
        let parent_uses_value = self.parent_uses_value(&site, classification.style, next);

        Resolution::Resolved(ResolvedCall {
            node: call,
            property: classification.property,
            method,
            raw_method: classification.method,
            version: self.profile.version(),
            style: classification.style,
            iteratee,
            arguments: site.arguments,
            parent_uses_value,
            is_chain_breaker: self.profile.is_chain_breaker(method),
            wrapper_only: self.profile.is_wrapper_method(method),
            chain: classification.chain,
            next_method,
        })
    }

    /// [`resolve`](Self::resolve), keeping only resolved calls.
    pub fn resolve_call<'a>(&self, call: Node<'a>, source: &'a str) -> Option<ResolvedCall<'a>> {
        match self.resolve(call, source) {
            Resolution::Resolved(resolved) => Some(resolved),
            Resolution::Rejected { .. } => None,
        }
    }

    /// True for `<pragma>(value)`, the call that opens an implicit chain,
    /// whether or not any method is ever called on it.
    pub fn is_chain_wrap(&self, call: Node, source: &str) -> bool {
        call.kind() == "call_expression"
            && call
                .child_by_field_name("function")
                .is_some_and(|callee| syntax::is_identifier_named(callee, source, &self.pragma))
    }

    /// A result is discarded when its parent is an expression statement. For
    /// chained calls immediately unwrapped by a chain breaker, the breaker's
    /// parent decides instead.
    fn parent_uses_value(
        &self,
        site: &CallSite<'_>,
        style: CallStyle,
        next: Option<(Node, &str)>,
    ) -> bool {
        let anchor = match next {
            Some((outer, name))
                if style.is_chained()
                    && self
                        .profile
                        .canonical_name(name)
                        .is_some_and(|m| self.profile.is_chain_breaker(m)) =>
            {
                outer
            }
            _ => site.node,
        };
        let parent = if anchor == site.node {
            site.parent
        } else {
            syntax::enclosing_parent(anchor)
        };
        parent.is_none_or(|parent| parent.kind() != "expression_statement")
    }
}

fn reject(call: Node, stage: Stage, reason: Rejection) -> Resolution {
    trace!(line = call.start_position().row + 1, ?stage, ?reason, "rejected call");
    Resolution::Rejected { stage, reason }
}

// ─── Call site ───────────────────────────────────────────────────────

/// One visited call expression, split into the parts classification needs.
#[derive(Debug, Clone)]
pub struct CallSite<'a> {
    pub node: Node<'a>,
    pub callee: Node<'a>,
    pub arguments: Vec<Node<'a>>,
    /// Lexical parent, parentheses skipped.
    pub parent: Option<Node<'a>>,
    pub source: &'a str,
}

impl<'a> CallSite<'a> {
    /// `None` unless `node` is a call expression.
    pub fn new(node: Node<'a>, source: &'a str) -> Option<Self> {
        if node.kind() != "call_expression" {
            return None;
        }
        Some(Self {
            node,
            callee: node.child_by_field_name("function")?,
            arguments: syntax::call_arguments(node),
            parent: syntax::enclosing_parent(node),
            source,
        })
    }
}

// ─── Resolution result ───────────────────────────────────────────────

/// Pipeline stage a call was rejected in. Iteratee location never rejects.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    ClassifyingStyle,
    ResolvingAlias,
}

/// Terminal state of one call expression.
#[derive(Debug, Clone)]
pub enum Resolution<'a> {
    Resolved(ResolvedCall<'a>),
    Rejected { stage: Stage, reason: Rejection },
}

/// A call expression recognized as a lodash invocation.
///
/// Borrowed from the parsed tree; built fresh per visit and never mutated.
#[derive(Debug, Clone)]
pub struct ResolvedCall<'a> {
    /// The call expression itself.
    pub node: Node<'a>,
    /// The member name node (`map` in `_.map(...)`).
    pub property: Node<'a>,
    /// Canonical method name.
    pub method: &'static str,
    /// Method name as written.
    pub raw_method: &'a str,
    pub version: Version,
    pub style: CallStyle,
    pub iteratee: Option<Node<'a>>,
    pub arguments: Vec<Node<'a>>,
    /// False when the result is thrown away by an expression statement.
    pub parent_uses_value: bool,
    /// `value()` or one of its aliases.
    pub is_chain_breaker: bool,
    /// Method exists only on the wrapper object.
    pub wrapper_only: bool,
    pub chain: Option<ChainInfo<'a>>,
    /// Canonical name of a library method called on this call's result.
    pub next_method: Option<&'static str>,
}

impl ResolvedCall<'_> {
    /// 1-based line of the call.
    pub fn line(&self) -> usize {
        self.node.start_position().row + 1
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
