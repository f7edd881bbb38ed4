//! Token and tree access over a parsed JavaScript source file.
//!
//! [`SourceTree`] owns the source text and its Tree-sitter syntax tree and
//! exposes the token stream the way a host linter does: comments are kept
//! aside as trivia, and neighbouring tokens are found by index.

use tree_sitter::{Language, Parser, Tree};

pub use tree_sitter::Node;

/// Node kinds lexed as a single token even though Tree-sitter gives them children.
///
/// Template strings are not listed: their text pieces and the tokens inside
/// `${...}` substitutions appear in the stream individually.
const ATOMIC_KINDS: &[&str] = &["string", "regex"];

/// Node kinds treated as comments.
const COMMENT_KINDS: &[&str] = &["comment", "html_comment", "hash_bang_line"];

/// Index of a token in [`SourceTree::tokens`].
pub type TokenId = usize;

/// A single lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Tree-sitter kind of the leaf (`"{"`, `"else"`, `"identifier"`, ...).
    pub kind: &'static str,
    /// Source text of the token.
    pub text: String,
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Line the token starts on (1-indexed).
    pub line: usize,
    /// Line the token ends on (1-indexed).
    pub end_line: usize,
    /// Column the token starts at (1-indexed, bytes).
    pub column: usize,
}

impl Token {
    fn from_node(node: Node<'_>, text: &str) -> Self {
        Self {
            kind: node.kind(),
            text: text[node.start_byte()..node.end_byte()].to_owned(),
            start: node.start_byte(),
            end: node.end_byte(),
            line: node.start_position().row + 1,
            end_line: node.end_position().row + 1,
            column: node.start_position().column + 1,
        }
    }

    /// Returns true if this token is the punctuator or keyword `value`.
    #[must_use]
    pub fn is(&self, value: &str) -> bool {
        self.text == value
    }
}

/// Errors raised while building a [`SourceTree`].
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The JavaScript grammar could not be loaded.
    #[error("failed to load grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The parser gave up without producing a tree.
    #[error("parser produced no tree")]
    Unparsed,

    /// The source contains a syntax error.
    #[error("syntax error at {line}:{column}")]
    Syntax {
        /// Line of the first error (1-indexed).
        line: usize,
        /// Column of the first error (1-indexed).
        column: usize,
    },
}

/// A parsed source file with its token stream.
pub struct SourceTree {
    text: String,
    tree: Tree,
    tokens: Vec<Token>,
    comments: Vec<Token>,
}

impl std::fmt::Debug for SourceTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceTree")
            .field("tokens", &self.tokens.len())
            .field("comments", &self.comments.len())
            .finish_non_exhaustive()
    }
}

impl SourceTree {
    /// Parses JavaScript source text.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Syntax`] if the text does not parse cleanly.
    pub fn parse(text: impl Into<String>) -> Result<Self, SourceError> {
        let text = text.into();
        let language: Language = tree_sitter_javascript::LANGUAGE.into();
        let mut parser = Parser::new();
        parser.set_language(&language)?;

        let tree = parser.parse(&text, None).ok_or(SourceError::Unparsed)?;
        let root = tree.root_node();
        if root.has_error() {
            let (line, column) = first_error(root).map_or((1, 1), |n| {
                let p = n.start_position();
                (p.row + 1, p.column + 1)
            });
            return Err(SourceError::Syntax { line, column });
        }

        let (tokens, comments) = collect_tokens(root, &text);
        Ok(Self {
            text,
            tree,
            tokens,
            comments,
        })
    }

    /// Returns the full source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the root node of the syntax tree.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Returns all non-comment tokens in source order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns all comments in source order.
    #[must_use]
    pub fn comments(&self) -> &[Token] {
        &self.comments
    }

    /// Returns the token with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this tree.
    #[must_use]
    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id]
    }

    /// Returns the first token inside `node`.
    #[must_use]
    pub fn first_token(&self, node: Node<'_>) -> Option<TokenId> {
        let idx = self.tokens.partition_point(|t| t.start < node.start_byte());
        self.tokens
            .get(idx)
            .filter(|t| t.end <= node.end_byte())
            .map(|_| idx)
    }

    /// Returns the last token inside `node`.
    #[must_use]
    pub fn last_token(&self, node: Node<'_>) -> Option<TokenId> {
        let idx = self.tokens.partition_point(|t| t.end <= node.end_byte());
        let last = idx.checked_sub(1)?;
        (self.tokens[last].start >= node.start_byte()).then_some(last)
    }

    /// Returns the token preceding `id`.
    #[must_use]
    pub fn token_before(&self, id: TokenId) -> Option<TokenId> {
        id.checked_sub(1)
    }

    /// Returns the token following `id`.
    #[must_use]
    pub fn token_after(&self, id: TokenId) -> Option<TokenId> {
        let next = id + 1;
        (next < self.tokens.len()).then_some(next)
    }

    /// Returns the token immediately preceding `node`.
    #[must_use]
    pub fn token_before_node(&self, node: Node<'_>) -> Option<TokenId> {
        let idx = self.tokens.partition_point(|t| t.end <= node.start_byte());
        idx.checked_sub(1)
    }

    /// Returns true if `left` ends on the line `right` starts on.
    #[must_use]
    pub fn on_same_line(&self, left: TokenId, right: TokenId) -> bool {
        self.tokens[left].end_line == self.tokens[right].line
    }

    /// Returns the source text of `node`.
    #[must_use]
    pub fn text_of(&self, node: Node<'_>) -> &str {
        &self.text[node.start_byte()..node.end_byte()]
    }

    /// Returns the raw text between two tokens.
    #[must_use]
    pub fn text_between(&self, left: TokenId, right: TokenId) -> &str {
        let start = self.tokens[left].end;
        let end = self.tokens[right].start.max(start);
        &self.text[start..end]
    }
}

/// Walks the tree in source order, splitting leaves into tokens and comments.
fn collect_tokens(root: Node<'_>, text: &str) -> (Vec<Token>, Vec<Token>) {
    let mut tokens = Vec::new();
    let mut comments = Vec::new();
    let mut cursor = root.walk();

    'walk: loop {
        let node = cursor.node();
        let is_leaf = node.id() != root.id()
            && (node.child_count() == 0 || ATOMIC_KINDS.contains(&node.kind()));

        if is_leaf {
            if !node.is_missing() && node.end_byte() > node.start_byte() {
                let token = Token::from_node(node, text);
                if COMMENT_KINDS.contains(&token.kind) {
                    comments.push(token);
                } else {
                    tokens.push(token);
                }
            }
        } else if cursor.goto_first_child() {
            continue;
        }

        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                break 'walk;
            }
        }
    }

    (tokens, comments)
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tree: &SourceTree) -> Vec<&str> {
        tree.tokens().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn tokens_skip_comments() {
        let tree = SourceTree::parse("if (a) { // note\n  b(); /* x */ }\n").unwrap();
        assert_eq!(
            texts(&tree),
            vec!["if", "(", "a", ")", "{", "b", "(", ")", ";", "}"]
        );
        assert_eq!(tree.comments().len(), 2);
    }

    #[test]
    fn string_literals_are_single_tokens() {
        let tree = SourceTree::parse("x = \"{ }\";\ny = /}/g;\n").unwrap();
        assert_eq!(
            texts(&tree),
            vec!["x", "=", "\"{ }\"", ";", "y", "=", "/}/g", ";"]
        );
    }

    #[test]
    fn template_substitutions_are_tokenized() {
        let tree = SourceTree::parse("y = `a\n${b}`;\n").unwrap();
        let texts = texts(&tree);
        assert_eq!(texts.first(), Some(&"y"));
        assert_eq!(texts.last(), Some(&";"));
        assert!(texts.iter().all(|t| !t.contains("${b}")));

        let open = texts.iter().position(|t| *t == "${").unwrap();
        assert_eq!(&texts[open + 1..open + 3], ["b", "}"]);
        assert_eq!(tree.token(open).line, 2);
    }

    #[test]
    fn first_and_last_token_of_node() {
        let tree = SourceTree::parse("foo();\nwhile (x) {\n  y();\n}\n").unwrap();
        let root = tree.root();
        let mut cursor = root.walk();
        let stmt = root
            .children(&mut cursor)
            .find(|n| n.kind() == "while_statement")
            .unwrap();

        let first = tree.first_token(stmt).unwrap();
        let last = tree.last_token(stmt).unwrap();
        assert!(tree.token(first).is("while"));
        assert!(tree.token(last).is("}"));

        let before = tree.token_before_node(stmt).unwrap();
        assert!(tree.token(before).is(";"));
        assert_eq!(tree.token_before(first), Some(before));
        assert_eq!(tree.token_after(last), None);
    }

    #[test]
    fn token_before_node_at_file_start() {
        let tree = SourceTree::parse("// header\nif (a) {\n}\n").unwrap();
        let root = tree.root();
        let mut cursor = root.walk();
        let stmt = root
            .children(&mut cursor)
            .find(|n| n.kind() == "if_statement")
            .unwrap();
        assert_eq!(tree.token_before_node(stmt), None);
    }

    #[test]
    fn same_line_uses_end_line_of_left_token() {
        let tree = SourceTree::parse("f(\"a\\\nb\", {\n});\n").unwrap();
        let string = tree.tokens().iter().position(|t| t.kind == "string");
        let brace = tree.tokens().iter().position(|t| t.is("{"));
        let comma = tree.tokens().iter().position(|t| t.is(","));
        let (string, comma, brace) = (string.unwrap(), comma.unwrap(), brace.unwrap());
        assert_eq!(tree.token(string).end_line, 2);
        assert!(tree.on_same_line(string, comma));
        assert!(tree.on_same_line(comma, brace));
    }

    #[test]
    fn text_between_tokens() {
        let tree = SourceTree::parse("if (a) {\n} /* c */\nelse {\n}\n").unwrap();
        let close = tree.tokens().iter().position(|t| t.is("}")).unwrap();
        let else_kw = tree.token_after(close).unwrap();
        assert!(tree.token(else_kw).is("else"));
        assert_eq!(tree.text_between(close, else_kw), " /* c */\n");
    }

    #[test]
    fn syntax_error_is_reported() {
        let err = SourceTree::parse("if (a {\n").unwrap_err();
        assert!(matches!(err, SourceError::Syntax { .. }));
        assert!(err.to_string().starts_with("syntax error at "));
    }

    #[test]
    fn empty_source_has_no_tokens() {
        let tree = SourceTree::parse("").unwrap();
        assert!(tree.tokens().is_empty());
        assert_eq!(tree.first_token(tree.root()), None);
        assert_eq!(tree.last_token(tree.root()), None);
    }
}
