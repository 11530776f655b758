use tracing::{debug, trace, warn};
use tree_sitter::Node;

use super::matcher::{FunctionCandidate, SignatureTemplate, TestFunction};
use super::toggler::{marker_for, ToggleAction};
use crate::error::ParserError;
use crate::source::{SourceUnit, TextEdit};

/// What the walker does after visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Descend,
    Stop,
}

pub trait Visitor<'a> {
    fn visit(&mut self, node: Node<'a>) -> Walk;
}

/// Depth-first walk over named nodes in source order.
pub fn walk<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, node: Node<'a>) {
    if visitor.visit(node) == Walk::Stop {
        return;
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        walk(visitor, child);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleStats {
    /// Test functions found.
    pub matched: usize,
    /// Test functions whose body was changed.
    pub changed: usize,
}

/// Plans one toggle edit per test function; matched functions are not
/// descended into.
pub struct TestFuncVisitor<'t, 'a> {
    template: &'t SignatureTemplate,
    action: ToggleAction,
    source: &'a str,
    edits: Vec<TextEdit>,
    stats: ToggleStats,
}

impl<'t, 'a> TestFuncVisitor<'t, 'a> {
    pub fn new(template: &'t SignatureTemplate, action: ToggleAction, source: &'a str) -> Self {
        Self {
            template,
            action,
            source,
            edits: Vec::new(),
            stats: ToggleStats::default(),
        }
    }

    pub fn finish(self) -> (Vec<TextEdit>, ToggleStats) {
        (self.edits, self.stats)
    }
}

impl<'a> Visitor<'a> for TestFuncVisitor<'_, 'a> {
    fn visit(&mut self, node: Node<'a>) -> Walk {
        let Some(candidate) = FunctionCandidate::from_node(node, self.source) else {
            return Walk::Descend;
        };
        let Some(func) = self.template.match_function(candidate) else {
            return Walk::Descend;
        };

        self.stats.matched += 1;
        if marker_for(&func).is_none() {
            let line = func.node().start_position().row + 1;
            warn!(function = func.name(), line, "test handle parameter has no usable name, leaving it alone");
        }

        if let Some(edit) = self.action.apply(&func, self.source) {
            trace!(function = func.name(), action = self.action.as_str(), "planned edit");
            self.stats.changed += 1;
            self.edits.push(edit);
        }
        Walk::Stop
    }
}

/// Collects every test function without changing anything.
struct TestFuncCollector<'t, 'a> {
    template: &'t SignatureTemplate,
    source: &'a str,
    found: Vec<TestFunction<'a>>,
}

impl<'a> Visitor<'a> for TestFuncCollector<'_, 'a> {
    fn visit(&mut self, node: Node<'a>) -> Walk {
        match FunctionCandidate::from_node(node, self.source)
            .and_then(|candidate| self.template.match_function(candidate))
        {
            Some(func) => {
                self.found.push(func);
                Walk::Stop
            }
            None => Walk::Descend,
        }
    }
}

pub fn test_functions<'a>(
    template: &SignatureTemplate,
    root: Node<'a>,
    source: &'a str,
) -> Vec<TestFunction<'a>> {
    let mut collector = TestFuncCollector {
        template,
        source,
        found: Vec::new(),
    };
    walk(&mut collector, root);
    collector.found
}

/// Runs one toggle pass over `unit`.
pub fn toggle_unit(
    unit: &mut SourceUnit,
    template: &SignatureTemplate,
    action: ToggleAction,
) -> Result<ToggleStats, ParserError> {
    let (edits, stats) = {
        let mut visitor = TestFuncVisitor::new(template, action, unit.source());
        walk(&mut visitor, unit.root_node());
        visitor.finish()
    };
    unit.apply_edits(edits)?;

    debug!(
        path = %unit.path().display(),
        action = action.as_str(),
        matched = stats.matched,
        changed = stats.changed,
        "toggled source unit"
    );
    Ok(stats)
}
