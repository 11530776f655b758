use tree_sitter::Node;

use crate::source::render;

pub const DEFAULT_TEST_PREFIX: &str = "Test";
pub const DEFAULT_TEST_IMPORT: &str = "testing";

/// Name prefix and parameter type a function needs to count as a test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureTemplate {
    prefix: String,
    param_type: String,
}

impl Default for SignatureTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEST_PREFIX, DEFAULT_TEST_IMPORT)
    }
}

impl SignatureTemplate {
    pub fn new(prefix: impl Into<String>, test_import: &str) -> Self {
        Self {
            prefix: prefix.into(),
            param_type: handle_type(test_import),
        }
    }

    /// Expects the handle type under another import name, e.g. after
    /// `import foobar "testing"`.
    pub fn with_test_import(mut self, test_import: &str) -> Self {
        self.param_type = handle_type(test_import);
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn param_type(&self) -> &str {
        &self.param_type
    }

    pub fn matches(&self, candidate: &FunctionCandidate<'_>) -> bool {
        if candidate.has_receiver {
            return false;
        }
        if !is_test(candidate.name, &self.prefix) {
            return false;
        }
        match candidate.sole_parameter() {
            Some(param) => param.type_text == self.param_type,
            None => false,
        }
    }

    /// Promotes a candidate to a [`TestFunction`] if it matches.
    pub fn match_function<'a>(&self, candidate: FunctionCandidate<'a>) -> Option<TestFunction<'a>> {
        if !self.matches(&candidate) {
            return None;
        }
        let param_name = candidate
            .sole_parameter()
            .and_then(|param| param.names.first().copied());
        Some(TestFunction {
            node: candidate.node,
            name: candidate.name,
            param_name,
            body: candidate.body,
        })
    }
}

fn handle_type(test_import: &str) -> String {
    format!("*{test_import}.T")
}

/// Reports whether `name` looks like a test for `prefix`: either the prefix
/// itself or the prefix followed by anything but a lower-case letter, so
/// `TestFoo` and `Test_foo` qualify while `Testify` does not.
pub fn is_test(name: &str, prefix: &str) -> bool {
    let Some(rest) = name.strip_prefix(prefix) else {
        return false;
    };
    match rest.chars().next() {
        None => true,
        Some(c) => !c.is_lowercase(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter<'a> {
    pub names: Vec<&'a str>,
    pub type_text: String,
}

impl Parameter<'_> {
    /// `a, b *testing.T` declares two parameters; an unnamed one still counts.
    pub fn arity(&self) -> usize {
        self.names.len().max(1)
    }
}

/// View of a function or method declaration while walking a tree.
#[derive(Debug, Clone)]
pub struct FunctionCandidate<'a> {
    node: Node<'a>,
    name: &'a str,
    has_receiver: bool,
    params: Vec<Parameter<'a>>,
    body: Option<Node<'a>>,
}

impl<'a> FunctionCandidate<'a> {
    pub fn from_node(node: Node<'a>, source: &'a str) -> Option<Self> {
        let has_receiver = match node.kind() {
            "function_declaration" => node.child_by_field_name("receiver").is_some(),
            "method_declaration" => true,
            _ => return None,
        };
        let name_node = node.child_by_field_name("name")?;
        let params = node
            .child_by_field_name("parameters")
            .map(|list| parameters(list, source))
            .unwrap_or_default();

        Some(Self {
            node,
            name: &source[name_node.byte_range()],
            has_receiver,
            params,
            body: node.child_by_field_name("body"),
        })
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn has_receiver(&self) -> bool {
        self.has_receiver
    }

    pub fn params(&self) -> &[Parameter<'a>] {
        &self.params
    }

    pub fn parameter_count(&self) -> usize {
        self.params.iter().map(Parameter::arity).sum()
    }

    fn sole_parameter(&self) -> Option<&Parameter<'a>> {
        if self.parameter_count() != 1 {
            return None;
        }
        self.params.first()
    }
}

fn parameters<'a>(list: Node<'a>, source: &'a str) -> Vec<Parameter<'a>> {
    let mut cursor = list.walk();
    let decls: Vec<_> = list.named_children(&mut cursor).collect();

    decls
        .into_iter()
        .filter_map(|decl| {
            let variadic = match decl.kind() {
                "parameter_declaration" => false,
                "variadic_parameter_declaration" => true,
                _ => return None,
            };
            let mut name_cursor = decl.walk();
            let names = decl
                .children_by_field_name("name", &mut name_cursor)
                .map(|n| &source[n.byte_range()])
                .collect();
            let type_text = decl
                .child_by_field_name("type")
                .map(|ty| render(ty, source))
                .unwrap_or_default();
            let type_text = if variadic {
                format!("...{type_text}")
            } else {
                type_text
            };
            Some(Parameter { names, type_text })
        })
        .collect()
}

/// A function accepted by a [`SignatureTemplate`]. Only the template can
/// create one, so toggling is never attempted on anything else.
#[derive(Debug, Clone)]
pub struct TestFunction<'a> {
    node: Node<'a>,
    name: &'a str,
    param_name: Option<&'a str>,
    body: Option<Node<'a>>,
}

impl<'a> TestFunction<'a> {
    pub fn node(&self) -> Node<'a> {
        self.node
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Local name of the handle parameter; `None` when it is unnamed.
    pub fn param_name(&self) -> Option<&'a str> {
        self.param_name
    }

    pub fn body(&self) -> Option<Node<'a>> {
        self.body
    }
}
