//! Parsed Go source files.
//!
//! A [`SourceUnit`] pairs the text of one file with its tree-sitter tree.
//! Trees are read-only, so changes are expressed as [`TextEdit`]s which are
//! spliced into the text; the tree is then edited and re-parsed incrementally
//! so both stay in sync.

mod edit;
mod render;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;
use tree_sitter::{Node, Parser, Tree};

use crate::error::{IoError, ParserError, Result};

pub use edit::{line_ending, line_indent, line_start, point_at, skip_blanks, TextEdit};
pub use render::render;

const SNIPPET_LEN: usize = 24;

pub fn go_parser() -> std::result::Result<Parser, ParserError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|_| ParserError::language_setup_failed("go"))?;
    Ok(parser)
}

#[derive(Debug)]
pub struct SourceUnit {
    path: PathBuf,
    source: String,
    tree: Tree,
}

impl SourceUnit {
    pub fn read(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;
        Ok(Self::parse(path, source)?)
    }

    /// Parses `source`, rejecting text the Go grammar does not accept.
    pub fn parse(
        path: impl Into<PathBuf>,
        source: impl Into<String>,
    ) -> std::result::Result<Self, ParserError> {
        let path = path.into();
        let source = source.into();

        let mut parser = go_parser()?;
        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| ParserError::parse_failed(&path))?;

        if let Some(node) = first_syntax_error(tree.root_node()) {
            let position = node.start_position();
            return Err(ParserError::syntax_error(
                &path,
                position.row + 1,
                position.column + 1,
                describe_syntax_error(node, &source),
            ));
        }

        trace!(path = %path.display(), bytes = source.len(), "parsed source unit");
        Ok(Self { path, source, tree })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Splices `edits` into the text and re-parses. Edits must not overlap and
    /// are all relative to the current text. Returns the number applied.
    pub fn apply_edits(
        &mut self,
        mut edits: Vec<TextEdit>,
    ) -> std::result::Result<usize, ParserError> {
        if edits.is_empty() {
            return Ok(0);
        }

        edits.sort_by(|a, b| b.range.start.cmp(&a.range.start));
        for edit in &edits {
            let input = edit.input_edit(&self.source);
            edit.apply_to(&mut self.source);
            self.tree.edit(&input);
        }

        let mut parser = go_parser()?;
        self.tree = parser
            .parse(&self.source, Some(&self.tree))
            .ok_or_else(|| ParserError::parse_failed(&self.path))?;

        trace!(path = %self.path.display(), edits = edits.len(), "applied edits");
        Ok(edits.len())
    }

    /// Consumes the unit, yielding its current text.
    pub fn into_text(self) -> String {
        self.source
    }
}

fn first_syntax_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_syntax_error)
}

fn describe_syntax_error(node: Node<'_>, source: &str) -> String {
    if node.is_missing() {
        return format!("missing {}", node.kind());
    }
    let text = &source[node.byte_range()];
    let line = text.lines().next().unwrap_or("").trim();
    let snippet: String = line.chars().take(SNIPPET_LEN).collect();
    if snippet.is_empty() {
        "syntax error".to_string()
    } else {
        format!("unexpected \"{snippet}\"")
    }
}
