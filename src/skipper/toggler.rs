use std::fmt;
use std::ops::Range;

use tree_sitter::Node;

use super::matcher::TestFunction;
use crate::source::{line_ending, line_indent, line_start, render, skip_blanks, TextEdit};

/// The `<param>.Skip()` statement toggled at the top of a test body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipMarker(String);

impl SkipMarker {
    /// `None` for names that cannot be called through (`_`, empty).
    pub fn for_param(name: &str) -> Option<Self> {
        if name.is_empty() || name == "_" {
            return None;
        }
        Some(Self(format!("{name}.Skip()")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkipMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// Prepend the marker.
    Skip,
    /// Drop a leading marker.
    Unskip,
}

impl ToggleAction {
    pub fn from_unskip(unskip: bool) -> Self {
        if unskip {
            Self::Unskip
        } else {
            Self::Skip
        }
    }

    pub fn apply(self, func: &TestFunction<'_>, source: &str) -> Option<TextEdit> {
        match self {
            Self::Skip => insert_skip(func, source),
            Self::Unskip => remove_skip(func, source),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::Unskip => "unskip",
        }
    }
}

pub fn marker_for(func: &TestFunction<'_>) -> Option<SkipMarker> {
    func.param_name().and_then(SkipMarker::for_param)
}

/// Plans the insertion of the marker as the body's first statement. An
/// existing marker is not looked for; skipping twice yields two markers.
pub fn insert_skip(func: &TestFunction<'_>, source: &str) -> Option<TextEdit> {
    let marker = marker_for(func)?;
    let body = func.body()?;
    let (open, close) = braces(body)?;
    let newline = line_ending(source);

    let edit = match body_statements(body).first() {
        Some(first) if first.start_position().row == open.start_position().row => {
            TextEdit::insert(first.start_byte(), format!("{marker}; "))
        }
        Some(first) => {
            let indent = line_indent(source, first.start_byte());
            TextEdit::insert(first.start_byte(), format!("{marker}{newline}{indent}"))
        }
        None => {
            let indent = line_indent(source, func.node().start_byte());
            let interior = open.end_byte()..close.start_byte();
            if source[interior.clone()].trim().is_empty() {
                TextEdit::replace(
                    interior,
                    format!("{newline}{indent}\t{marker}{newline}{indent}"),
                )
            } else {
                TextEdit::insert(open.end_byte(), format!("{newline}{indent}\t{marker}"))
            }
        }
    };
    Some(edit)
}

/// Plans the removal of a leading marker. Bodies whose first statement is
/// anything else, and empty bodies, are left alone.
pub fn remove_skip(func: &TestFunction<'_>, source: &str) -> Option<TextEdit> {
    let marker = marker_for(func)?;
    let body = func.body()?;
    let (open, close) = braces(body)?;
    let statements = body_statements(body);
    let first = statements.first()?;

    if render(*first, source) != marker.as_str() {
        return None;
    }

    let interior = open.end_byte()..close.start_byte();
    if statements.len() == 1 {
        let before = &source[interior.start..first.start_byte()];
        let after = &source[first.end_byte()..interior.end];
        let only_marker = before
            .chars()
            .chain(after.chars())
            .all(|c| c.is_whitespace() || c == ';');
        if only_marker {
            return Some(TextEdit::delete(interior));
        }
    }

    Some(TextEdit::delete(removal_range(source, first.byte_range())))
}

/// The marker plus its separator: a `;`, or its whole line when the marker
/// stands alone on it.
fn removal_range(source: &str, stmt: Range<usize>) -> Range<usize> {
    let mut end = skip_blanks(source, stmt.end);
    if source[end..].starts_with(';') {
        end = skip_blanks(source, end + 1);
    }

    let start_of_line = line_start(source, stmt.start);
    if source[start_of_line..stmt.start].trim().is_empty() {
        if source[end..].starts_with("\r\n") {
            return start_of_line..end + 2;
        }
        if source[end..].starts_with('\n') {
            return start_of_line..end + 1;
        }
    }
    stmt.start..end
}

fn braces(body: Node<'_>) -> Option<(Node<'_>, Node<'_>)> {
    let open = body.child(0)?;
    let close = body.child(body.child_count().checked_sub(1)?)?;
    if open.kind() != "{" || close.kind() != "}" || open.id() == close.id() {
        return None;
    }
    Some((open, close))
}

/// Statements of a block in order, comments excluded.
pub fn body_statements(body: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = body.walk();
    let children: Vec<_> = body.named_children(&mut cursor).collect();

    let mut statements = Vec::new();
    for child in children {
        if child.kind() == "statement_list" {
            let mut inner = child.walk();
            statements.extend(child.named_children(&mut inner));
        } else {
            statements.push(child);
        }
    }
    statements.retain(|node| node.kind() != "comment");
    statements
}
