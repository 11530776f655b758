use std::ops::Range;
use tree_sitter::{InputEdit, Point};

/// A byte-range replacement planned against one version of a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub replacement: String,
}

impl TextEdit {
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            range: at..at,
            replacement: text.into(),
        }
    }

    pub fn replace(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            range,
            replacement: text.into(),
        }
    }

    pub fn delete(range: Range<usize>) -> Self {
        Self::replace(range, String::new())
    }

    pub fn apply_to(&self, text: &mut String) {
        text.replace_range(self.range.clone(), &self.replacement);
    }

    /// Describes this edit for `Tree::edit`. `source` is the text *before* the edit.
    pub fn input_edit(&self, source: &str) -> InputEdit {
        let start_position = point_at(source, self.range.start);
        let old_end_position = point_at(source, self.range.end);
        let new_end_position = advance(start_position, &self.replacement);

        InputEdit {
            start_byte: self.range.start,
            old_end_byte: self.range.end,
            new_end_byte: self.range.start + self.replacement.len(),
            start_position,
            old_end_position,
            new_end_position,
        }
    }
}

/// Row/column (both zero based, column in bytes) of `byte` within `text`.
pub fn point_at(text: &str, byte: usize) -> Point {
    let before = &text[..byte];
    let row = before.matches('\n').count();
    let column = match before.rfind('\n') {
        Some(newline) => byte - newline - 1,
        None => byte,
    };
    Point::new(row, column)
}

fn advance(start: Point, inserted: &str) -> Point {
    let rows = inserted.matches('\n').count();
    match inserted.rfind('\n') {
        Some(newline) => Point::new(start.row + rows, inserted.len() - newline - 1),
        None => Point::new(start.row, start.column + inserted.len()),
    }
}

pub fn line_start(text: &str, byte: usize) -> usize {
    text[..byte].rfind('\n').map_or(0, |newline| newline + 1)
}

/// Leading blanks of the line containing `byte`.
pub fn line_indent(text: &str, byte: usize) -> &str {
    let start = line_start(text, byte);
    let line = &text[start..];
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

pub fn line_ending(text: &str) -> &'static str {
    if text.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

pub fn skip_blanks(text: &str, from: usize) -> usize {
    text[from..]
        .find(|c: char| c != ' ' && c != '\t')
        .map_or(text.len(), |offset| from + offset)
}
