use tree_sitter::Node;

/// Leaves whose text is taken verbatim instead of descending into them.
const ATOMIC_KINDS: &[&str] = &[
    "interpreted_string_literal",
    "raw_string_literal",
    "rune_literal",
];

/// Canonical text of a node: its tokens in order with comments and layout
/// dropped. A single space separates two adjacent word-like tokens.
pub fn render(node: Node<'_>, source: &str) -> String {
    let mut out = String::new();
    push_tokens(node, source, &mut out);
    out
}

fn push_tokens(node: Node<'_>, source: &str, out: &mut String) {
    if node.kind() == "comment" {
        return;
    }

    if node.child_count() == 0 || ATOMIC_KINDS.contains(&node.kind()) {
        let text = &source[node.byte_range()];
        if text.trim().is_empty() {
            return;
        }
        if needs_space(out.chars().last(), text.chars().next()) {
            out.push(' ');
        }
        out.push_str(text);
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        push_tokens(child, source, out);
    }
}

fn needs_space(prev: Option<char>, next: Option<char>) -> bool {
    match (prev, next) {
        (Some(a), Some(b)) => is_word_char(a) && is_word_char(b),
        _ => false,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
