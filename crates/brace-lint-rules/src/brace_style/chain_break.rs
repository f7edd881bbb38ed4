//! Line-break harmony across a complex `else if` chain.

use brace_lint_core::Node;

use super::complexity::{block_consequence, else_chain, Alternative};
use super::report::{Reporter, ViolationKind};

/// Reports the chain starting at `node` once if any link is cuddled.
///
/// A link is cuddled when its closing `}` shares a line with the following
/// `else` and that `else` introduces another braced `else if`, or, for a
/// link after the first, a braced terminal `else`. Returns `false` when a
/// violation was reported.
pub(crate) fn validate_chain_breaks(reporter: &mut Reporter<'_>, node: Node<'_>) -> bool {
    let source = reporter.source;

    for (position, link) in else_chain(node).iter().enumerate() {
        let Some(alternative) = link.alternative else {
            break;
        };
        let Some(close) = source.last_token(link.consequence) else {
            continue;
        };
        let Some(else_kw) = source.token_after(close) else {
            continue;
        };
        if !source.on_same_line(close, else_kw) {
            continue;
        }

        let dense = match alternative {
            Alternative::ElseIf(inner) => block_consequence(inner).is_some(),
            Alternative::Else(body) => position > 0 && body.kind() == "statement_block",
        };
        if dense {
            tracing::debug!(
                "Dense else-if chain at line {}",
                node.start_position().row + 1
            );
            reporter.report_node(ViolationKind::DenseElseIfChain, node, else_kw);
            return false;
        }
    }

    true
}
