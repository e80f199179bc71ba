//! Call-style classification.
//!
//! A call is matched against an ordered list of matchers, direct first and
//! wrapped second. The first matcher that applies decides the outcome; the
//! remaining ones are not consulted.

use serde::Serialize;
use tracing::trace;
use tree_sitter::Node;

use super::syntax::{self, Expr};
use super::{CallSite, ResolutionContext};
use crate::methods::CHAIN_METHOD;

/// How the library method is reached.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CallStyle {
    /// `_.method(value, ...)`
    Direct,
    /// `_(value).method(...)`
    WrapperChain,
    /// `_(value).chain().method(...)` or `_.chain(value).method(...)`
    ExplicitChain,
}

impl CallStyle {
    /// Chain styles pass the wrapped value implicitly, not as an argument.
    pub fn is_chained(self) -> bool {
        !matches!(self, Self::Direct)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::WrapperChain => "wrapperChain",
            Self::ExplicitChain => "explicitChain",
        }
    }
}

impl std::fmt::Display for CallStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the chain a call belongs to was started.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ChainStartKind {
    /// `_(value)`
    Implicit,
    /// `_.chain(value)`
    Explicit,
}

/// Where a chained call's chain begins.
#[derive(Debug, Clone, Copy)]
pub struct ChainInfo<'a> {
    /// The `_(value)` or `_.chain(value)` call.
    pub start: Node<'a>,
    pub kind: ChainStartKind,
    /// Number of chain calls between the start and the classified call.
    pub depth: usize,
}

/// Why a call is not a library call.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Rejection {
    /// Callee is not a `receiver.name` member access.
    NotMemberCall,
    /// Receiver is neither the pragma nor a wrapped value.
    ForeignReceiver,
    /// Member name is not a method of the configured version.
    UnknownMethod,
    /// The receiver was wrapped, but an earlier call unwrapped it.
    BrokenChain,
}

/// Result of a successful classification.
#[derive(Debug, Clone)]
pub struct Classification<'a> {
    pub style: CallStyle,
    /// Member name as written at the call site.
    pub method: &'a str,
    pub property: Node<'a>,
    pub chain: Option<ChainInfo<'a>>,
}

/// `receiver.method(...)` split into its parts.
struct MemberCall<'a> {
    receiver: Node<'a>,
    property: Node<'a>,
    method: &'a str,
}

enum Verdict<'a> {
    /// Shape does not apply; try the next matcher.
    Skip,
    Match(Classification<'a>),
    Reject(Rejection),
}

type Matcher = for<'a> fn(&MemberCall<'a>, &'a str, &ResolutionContext) -> Verdict<'a>;

/// Matchers in precedence order.
const MATCHERS: &[(&str, Matcher)] = &[("direct", match_direct), ("wrapped", match_wrapped)];

/// Classify a call site, or say why it is not a library call.
pub(crate) fn classify<'a>(
    site: &CallSite<'a>,
    ctx: &ResolutionContext,
) -> Result<Classification<'a>, Rejection> {
    let Expr::Member {
        object,
        property,
        name,
    } = syntax::shape(site.callee, site.source)
    else {
        return Err(Rejection::NotMemberCall);
    };
    let member = MemberCall {
        receiver: object,
        property,
        method: name,
    };

    for (label, matcher) in MATCHERS {
        match matcher(&member, site.source, ctx) {
            Verdict::Skip => continue,
            Verdict::Match(classification) => {
                trace!(matcher = label, style = %classification.style, method = name, "classified");
                return Ok(classification);
            }
            Verdict::Reject(reason) => {
                trace!(matcher = label, ?reason, method = name, "rejected");
                return Err(reason);
            }
        }
    }
    Err(Rejection::ForeignReceiver)
}

/// `<pragma>.method(...)`
fn match_direct<'a>(
    member: &MemberCall<'a>,
    source: &'a str,
    ctx: &ResolutionContext,
) -> Verdict<'a> {
    if !syntax::is_identifier_named(member.receiver, source, ctx.pragma()) {
        return Verdict::Skip;
    }
    Verdict::Match(Classification {
        style: CallStyle::Direct,
        method: member.method,
        property: member.property,
        chain: None,
    })
}

/// `<pragma>(value)...method(...)` and `<pragma>.chain(value)...method(...)`
fn match_wrapped<'a>(
    member: &MemberCall<'a>,
    source: &'a str,
    ctx: &ResolutionContext,
) -> Verdict<'a> {
    let profile = ctx.profile();

    // Chase receivers inward until the wrap; links are collected outermost first.
    let mut links: Vec<&str> = Vec::new();
    let mut current = member.receiver;
    let (start, kind) = loop {
        let Expr::Call { callee } = syntax::shape(current, source) else {
            return Verdict::Skip;
        };
        match syntax::shape(callee, source) {
            Expr::Identifier(name) if name == ctx.pragma() => {
                break (syntax::unparenthesize(current), ChainStartKind::Implicit);
            }
            Expr::Member { object, name, .. } => {
                if syntax::is_identifier_named(object, source, ctx.pragma())
                    && profile.canonical_name(name) == Some(CHAIN_METHOD)
                {
                    break (syntax::unparenthesize(current), ChainStartKind::Explicit);
                }
                links.push(name);
                current = object;
            }
            _ => return Verdict::Skip,
        }
    };

    // Replay the chain from the wrap outward.
    let mut explicit = kind == ChainStartKind::Explicit;
    for raw in links.iter().rev() {
        let Some(link) = profile.canonical_name(raw) else {
            return Verdict::Reject(Rejection::BrokenChain);
        };
        if profile.is_chain_breaker(link) {
            return Verdict::Reject(Rejection::BrokenChain);
        }
        if link == CHAIN_METHOD {
            explicit = true;
        } else if !explicit && !profile.is_chainable(link) {
            return Verdict::Reject(Rejection::BrokenChain);
        }
    }

    Verdict::Match(Classification {
        style: if explicit {
            CallStyle::ExplicitChain
        } else {
            CallStyle::WrapperChain
        },
        method: member.method,
        property: member.property,
        chain: Some(ChainInfo {
            start,
            kind,
            depth: links.len(),
        }),
    })
}
