//! Expression shapes over the tree-sitter JavaScript/TypeScript grammar.
//!
//! The engine never compares raw nodes structurally; it first projects a node
//! onto the closed [`Expr`] set and matches on that.

use tree_sitter::Node;

/// The only expression shapes the engine distinguishes.
#[derive(Debug, Clone)]
pub enum Expr<'a> {
    /// `name`
    Identifier(&'a str),
    /// `object.name`
    Member {
        object: Node<'a>,
        property: Node<'a>,
        name: &'a str,
    },
    /// `callee(...)`; arguments come from [`call_arguments`] where needed.
    Call { callee: Node<'a> },
    Other,
}

/// Project a node onto [`Expr`], looking through parentheses.
pub fn shape<'a>(node: Node<'a>, source: &'a str) -> Expr<'a> {
    let node = unparenthesize(node);
    match node.kind() {
        "identifier" => Expr::Identifier(node_text(node, source)),
        "member_expression" => {
            let (Some(object), Some(property)) = (
                node.child_by_field_name("object"),
                node.child_by_field_name("property"),
            ) else {
                return Expr::Other;
            };
            if property.kind() != "property_identifier" {
                return Expr::Other;
            }
            Expr::Member {
                object,
                property,
                name: node_text(property, source),
            }
        }
        "call_expression" => match node.child_by_field_name("function") {
            Some(callee) => Expr::Call { callee },
            None => Expr::Other,
        },
        _ => Expr::Other,
    }
}

pub fn node_text<'a>(node: Node<'a>, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// True if `node` is (a parenthesized) identifier spelled exactly `name`.
pub fn is_identifier_named(node: Node, source: &str, name: &str) -> bool {
    matches!(shape(node, source), Expr::Identifier(text) if text == name)
}

/// Argument expressions of a call, in order. Tagged template calls have none.
pub fn call_arguments(call: Node) -> Vec<Node> {
    let Some(args) = call.child_by_field_name("arguments") else {
        return Vec::new();
    };
    if args.kind() != "arguments" {
        return Vec::new();
    }
    let mut cursor = args.walk();
    let arguments = args
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();
    arguments
}

/// Strip any number of enclosing `( ... )`.
pub fn unparenthesize(mut node: Node) -> Node {
    while node.kind() == "parenthesized_expression" {
        match first_named_child(node) {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// Lexical parent, skipping parenthesized expressions that merely wrap `node`.
pub fn enclosing_parent(node: Node) -> Option<Node> {
    let mut parent = node.parent()?;
    while parent.kind() == "parenthesized_expression" {
        parent = parent.parent()?;
    }
    Some(parent)
}

/// If `call` is the receiver of a further method call (`call.name(...)`),
/// return that outer call and the member name.
pub fn outer_method_call<'a>(call: Node<'a>, source: &'a str) -> Option<(Node<'a>, &'a str)> {
    let member = enclosing_parent(call)?;
    if member.kind() != "member_expression" {
        return None;
    }
    let object = member.child_by_field_name("object")?;
    if unparenthesize(object).id() != call.id() {
        return None;
    }
    let property = member.child_by_field_name("property")?;
    let outer = enclosing_parent(member)?;
    if outer.kind() != "call_expression" {
        return None;
    }
    let callee = outer.child_by_field_name("function")?;
    if unparenthesize(callee).id() != member.id() {
        return None;
    }
    Some((outer, node_text(property, source)))
}

pub fn is_spread(node: Node) -> bool {
    node.kind() == "spread_element"
}

// ─── Function-like expressions ───────────────────────────────────────

pub fn is_function_like(node: Node) -> bool {
    matches!(
        unparenthesize(node).kind(),
        "arrow_function" | "function_expression" | "function"
    )
}

/// Name of the first parameter of an arrow or function expression, if it is a
/// plain identifier.
pub fn first_param_name<'a>(func: Node<'a>, source: &'a str) -> Option<&'a str> {
    let func = unparenthesize(func);
    if !is_function_like(func) {
        return None;
    }
    // `x => ...`
    if let Some(param) = func.child_by_field_name("parameter") {
        return (param.kind() == "identifier").then(|| node_text(param, source));
    }
    let params = func.child_by_field_name("parameters")?;
    let first = first_named_child(params)?;
    let pattern = match first.kind() {
        "identifier" => first,
        "required_parameter" => first.child_by_field_name("pattern")?,
        _ => return None,
    };
    (pattern.kind() == "identifier").then(|| node_text(pattern, source))
}

/// The expression returned by the first statement of a function: the body
/// of an expression-bodied arrow, or the argument of a leading `return`.
pub fn value_returned_in_first_line(func: Node) -> Option<Node> {
    let func = unparenthesize(func);
    if !is_function_like(func) {
        return None;
    }
    let body = func.child_by_field_name("body")?;
    if body.kind() != "statement_block" {
        return Some(unparenthesize(body));
    }
    let first = first_named_child(body)?;
    if first.kind() != "return_statement" {
        return None;
    }
    first_named_child(first).map(unparenthesize)
}

fn first_named_child(node: Node) -> Option<Node> {
    let mut cursor = node.walk();
    let first = node
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    first
}
