//! Locating the iteratee argument of a resolved call.

use tree_sitter::Node;

use super::classifier::CallStyle;
use super::syntax;
use crate::methods::VersionProfile;

/// Position used for iteratee methods the tables give no arity for
/// (variadic methods such as `zipWith`): the slot after the collection.
const DEFAULT_ITERATEE_POSITION: usize = 1;

/// Formal position of the iteratee of `method`, counting the collection as 0.
///
/// An explicit override wins; otherwise the iteratee is the last formal slot.
pub fn iteratee_position(method: &str, profile: &VersionProfile) -> Option<usize> {
    if !profile.accepts_iteratee(method) {
        return None;
    }
    if let Some(position) = profile.iteratee_index_override(method) {
        return Some(position);
    }
    match profile.arg_count(method) {
        Some(count) => count.checked_sub(1),
        None => Some(DEFAULT_ITERATEE_POSITION),
    }
}

/// The argument acting as iteratee, if the call passes one.
///
/// Chained calls receive the wrapped value implicitly, so their argument list
/// starts one slot later. Returns `None` when the method takes no iteratee,
/// when the call passes too few arguments (a shorthand omission), or when a
/// spread argument makes positions unknowable. The shape of the returned
/// argument is not inspected.
pub fn locate_iteratee<'a>(
    method: &str,
    profile: &VersionProfile,
    arguments: &[Node<'a>],
    style: CallStyle,
) -> Option<Node<'a>> {
    let position = iteratee_position(method, profile)?;
    let index = if style.is_chained() {
        position.checked_sub(1)?
    } else {
        position
    };
    let leading = arguments.get(..=index)?;
    if leading.iter().any(|arg| syntax::is_spread(*arg)) {
        return None;
    }
    leading.last().copied()
}
