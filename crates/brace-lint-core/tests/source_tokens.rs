//! Token stream behaviour of the JavaScript front end.

use brace_lint_core::{SourceError, SourceTree};

fn token_texts(code: &str) -> String {
    let source = SourceTree::parse(code).unwrap();
    source
        .tokens()
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn conditional_tokens() {
    insta::assert_snapshot!(
        token_texts("if (a) { b(); } else { c(); }"),
        @"if ( a ) { b ( ) ; } else { c ( ) ; }"
    );
}

#[test]
fn literals_and_comments_do_not_split_tokens() {
    let code = "const s = \"{ }\"; // }\nconst r = /}/g;\n";
    let source = SourceTree::parse(code).unwrap();

    assert!(source.tokens().iter().all(|t| t.text != "}"));
    assert_eq!(source.comments().len(), 1);
    assert_eq!(source.comments()[0].text, "// }");
}

#[test]
fn tokens_carry_line_spans() {
    let source = SourceTree::parse("x = `a\nb`;\ny();\n").unwrap();
    let fragment = source
        .tokens()
        .iter()
        .find(|t| t.text.contains('\n'))
        .unwrap();
    assert_eq!(fragment.line, 1);
    assert_eq!(fragment.end_line, 2);
    assert!(source.tokens().iter().any(|t| t.is("`")));
}

#[test]
fn block_inside_template_substitution_has_boundary_tokens() {
    let code = "const s = `${(() =>\n{\n  return 1;\n})()}`;\n";
    let source = SourceTree::parse(code).unwrap();
    let open = source.tokens().iter().position(|t| t.is("{")).unwrap();
    let before = source.token_before(open).unwrap();
    assert!(source.token(before).is("=>"));
    assert!(!source.on_same_line(before, open));
    assert!(source.tokens().iter().any(|t| t.is("${")));
}

#[test]
fn unbalanced_braces_are_rejected() {
    assert!(matches!(
        SourceTree::parse("function f() {\n"),
        Err(SourceError::Syntax { .. })
    ));
}

#[test]
fn node_text_and_first_last_tokens() {
    let code = "let x = 1;\nwhile (x) {\n  x--;\n}\n";
    let source = SourceTree::parse(code).unwrap();
    let root = source.root();
    let mut cursor = root.walk();
    let loop_node = root
        .named_children(&mut cursor)
        .find(|n| n.kind() == "while_statement")
        .unwrap();

    assert_eq!(source.text_of(loop_node), "while (x) {\n  x--;\n}");
    let first = source.first_token(loop_node).unwrap();
    let last = source.last_token(loop_node).unwrap();
    assert!(source.token(first).is("while"));
    assert!(source.token(last).is("}"));
    assert!(source.token(source.token_before(first).unwrap()).is(";"));
    assert_eq!(source.text(), code);
}
