//! Classifies conditionals as simple or complex.
//!
//! A conditional is complex when it takes part in an `else if` chain:
//! either it is itself the `else if` branch of an enclosing conditional,
//! or it opens the file and its own `else` branch is an `else if`. Simple
//! conditionals are held to 1TBS, complex ones to Stroustrup.

use brace_lint_core::{Node, SourceTree};

use super::policy::BraceStyle;

/// What follows the `else` of a conditional.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Alternative<'t> {
    /// `else if (...)`: the nested conditional.
    ElseIf(Node<'t>),
    /// Terminal `else`: its body statement.
    Else(Node<'t>),
}

/// One conditional in an `else if` chain whose consequence is a braced block.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChainLink<'t> {
    pub(crate) consequence: Node<'t>,
    pub(crate) alternative: Option<Alternative<'t>>,
}

fn is_comment(node: Node<'_>) -> bool {
    matches!(node.kind(), "comment" | "html_comment")
}

/// Returns the consequence of `node` if it is a braced block.
pub(crate) fn block_consequence(node: Node<'_>) -> Option<Node<'_>> {
    node.child_by_field_name("consequence")
        .filter(|c| c.kind() == "statement_block")
}

/// Returns what follows the `else` of `node`, if it has one.
pub(crate) fn alternative(node: Node<'_>) -> Option<Alternative<'_>> {
    let clause = node.child_by_field_name("alternative")?;
    let mut cursor = clause.walk();
    for child in clause.named_children(&mut cursor) {
        if is_comment(child) {
            continue;
        }
        return Some(if child.kind() == "if_statement" {
            Alternative::ElseIf(child)
        } else {
            Alternative::Else(child)
        });
    }
    None
}

/// Follows `else if` links from `node` while each link has a braced consequence.
pub(crate) fn else_chain(node: Node<'_>) -> Vec<ChainLink<'_>> {
    let mut links = Vec::new();
    let mut current = Some(node);

    while let Some(link) = current.take() {
        let Some(consequence) = block_consequence(link) else {
            break;
        };
        let alternative = alternative(link);
        if let Some(Alternative::ElseIf(next)) = alternative {
            current = Some(next);
        }
        links.push(ChainLink {
            consequence,
            alternative,
        });
    }

    links
}

/// Decides whether the conditional `node` is complex.
pub(crate) fn is_complex(source: &SourceTree, node: Node<'_>) -> bool {
    match source.token_before_node(node) {
        Some(prev) => source.token(prev).kind == "else" && block_consequence(node).is_some(),
        None => matches!(
            alternative(node),
            Some(Alternative::ElseIf(inner)) if block_consequence(inner).is_some()
        ),
    }
}

/// Returns the style enforced on `node` and its own blocks.
pub(crate) fn effective_style(source: &SourceTree, node: Node<'_>) -> BraceStyle {
    if is_complex(source, node) {
        BraceStyle::Stroustrup
    } else {
        BraceStyle::OneTrueBrace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditionals(source: &SourceTree) -> Vec<Node<'_>> {
        fn collect<'t>(node: Node<'t>, out: &mut Vec<Node<'t>>) {
            if node.kind() == "if_statement" {
                out.push(node);
            }
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                collect(child, out);
            }
        }
        let mut out = Vec::new();
        collect(source.root(), &mut out);
        out
    }

    fn classify(code: &str) -> Vec<bool> {
        let source = SourceTree::parse(code).unwrap();
        conditionals(&source)
            .into_iter()
            .map(|n| is_complex(&source, n))
            .collect()
    }

    #[test]
    fn simple_if_else_at_file_start() {
        assert_eq!(classify("if (a) {\n} else {\n}\n"), vec![false]);
    }

    #[test]
    fn property_named_else_is_not_the_keyword() {
        assert_eq!(
            classify("x.else\nif (a) {\n  b();\n} else {\n  c();\n}\n"),
            vec![false]
        );
    }

    #[test]
    fn chain_at_file_start_is_complex_throughout() {
        assert_eq!(
            classify("if (a) {\n} else if (b) {\n} else {\n}\n"),
            vec![true, true]
        );
    }

    #[test]
    fn leading_comment_does_not_count_as_token() {
        assert_eq!(
            classify("// intro\nif (a) {\n} else if (b) {\n}\n"),
            vec![true, true]
        );
    }

    #[test]
    fn chain_head_after_other_code_stays_simple() {
        assert_eq!(
            classify("x();\nif (a) {\n} else if (b) {\n}\n"),
            vec![false, true]
        );
    }

    #[test]
    fn if_inside_else_block_is_not_an_else_if() {
        assert_eq!(
            classify("x();\nif (a) {\n} else {\n  if (b) {\n  } else if (c) {\n  }\n}\n"),
            vec![false, false, true]
        );
    }

    #[test]
    fn unbraced_else_if_is_simple() {
        assert_eq!(
            classify("if (a) {\n} else if (b) c();\n"),
            vec![false, false]
        );
    }

    #[test]
    fn effective_style_follows_complexity() {
        let source = SourceTree::parse("x();\nif (a) {\n} else if (b) {\n}\n").unwrap();
        let ifs = conditionals(&source);
        assert_eq!(effective_style(&source, ifs[0]), BraceStyle::OneTrueBrace);
        assert_eq!(effective_style(&source, ifs[1]), BraceStyle::Stroustrup);
    }

    #[test]
    fn else_chain_stops_at_terminal_else() {
        let source =
            SourceTree::parse("if (a) {\n} else if (b) {\n} else if (c) {\n} else {\n}\n").unwrap();
        let head = conditionals(&source)[0];
        let chain = else_chain(head);
        assert_eq!(chain.len(), 3);
        assert!(matches!(chain[0].alternative, Some(Alternative::ElseIf(_))));
        assert!(matches!(chain[2].alternative, Some(Alternative::Else(b)) if b.kind() == "statement_block"));
    }

    #[test]
    fn else_chain_stops_at_unbraced_consequence() {
        let source = SourceTree::parse("if (a) {\n} else if (b) c();\nelse {\n}\n").unwrap();
        let head = conditionals(&source)[0];
        assert_eq!(else_chain(head).len(), 1);
    }
}
