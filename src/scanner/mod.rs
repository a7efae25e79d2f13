use tracing::{debug, trace};
use tree_sitter::{Node, Tree};

use crate::output::SuiteEntry;
use crate::utils::unquote_go_string;

/// The two syntactic shapes a matching call can take.
///
/// Ginkgo bootstraps show up either as a bare call (`RunSpecs(...)` after a
/// dot-import) or through a selector (`ginkgo.RunSpecs(...)`); both carry the
/// target name in their final identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Callee {
    Direct(String),
    Member(String),
}

impl Callee {
    fn of(call: &Node<'_>, source: &[u8]) -> Option<Self> {
        let function = call.child_by_field_name("function")?;
        match function.kind() {
            "identifier" => Some(Self::Direct(node_text(&function, source))),
            "selector_expression" => {
                let field = function.child_by_field_name("field")?;
                Some(Self::Member(node_text(&field, source)))
            }
            _ => None,
        }
    }

    fn target_name(&self) -> &str {
        match self {
            Self::Direct(name) | Self::Member(name) => name,
        }
    }
}

/// Detects suite bootstraps in a parsed Go test file.
pub struct SuiteScanner {
    entry_point: String,
}

impl Default for SuiteScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl SuiteScanner {
    pub const DEFAULT_ENTRY_POINT: &'static str = "RunSpecs";

    pub fn new() -> Self {
        Self::with_entry_point(Self::DEFAULT_ENTRY_POINT)
    }

    pub fn with_entry_point(name: impl Into<String>) -> Self {
        Self {
            entry_point: name.into(),
        }
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    /// Walks the file's top-level declarations and returns one entry per
    /// `Test`-prefixed function that calls the entry point somewhere in its
    /// body. Entries come back in declaration order.
    pub fn scan_tree(&self, tree: &Tree, source: &[u8], file_name: &str) -> Vec<SuiteEntry> {
        trace!(file_name, "scanning tree");

        let mut entries = Vec::new();
        let root = tree.root_node();

        let mut cursor = root.walk();
        for decl in root.named_children(&mut cursor) {
            if decl.kind() != "function_declaration" && decl.kind() != "method_declaration" {
                continue;
            }
            let Some(name_node) = decl.child_by_field_name("name") else {
                continue;
            };
            let name = node_text(&name_node, source);
            if !name.starts_with("Test") {
                continue;
            }
            let Some(body) = decl.child_by_field_name("body") else {
                continue;
            };

            if let Some(call) = self.find_bootstrap_call(body, source) {
                let suite = self
                    .suite_name(&call, source)
                    .unwrap_or_else(|| name.clone());
                entries.push(SuiteEntry::new(file_name, suite, name));
            }
        }

        debug!(file_name, entries = entries.len(), "scan complete");
        entries
    }

    /// Depth-first, pre-order search for the first call expression whose
    /// callee matches the entry point. Returning the node short-circuits the
    /// traversal, so at most one match is recorded per function even when
    /// several qualifying calls exist. The search descends into every nested
    /// expression and block, function literals included.
    fn find_bootstrap_call<'a>(&self, node: Node<'a>, source: &[u8]) -> Option<Node<'a>> {
        if node.kind() == "call_expression" {
            if let Some(callee) = Callee::of(&node, source) {
                if callee.target_name() == self.entry_point {
                    return Some(node);
                }
            }
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if let Some(found) = self.find_bootstrap_call(child, source) {
                return Some(found);
            }
        }

        None
    }

    /// Resolves the suite's display name from a matched call: a
    /// string-literal second argument wins, anything else means the caller
    /// falls back to the function name.
    fn suite_name(&self, call: &Node<'_>, source: &[u8]) -> Option<String> {
        let args = call.child_by_field_name("arguments")?;

        let mut cursor = args.walk();
        let second = args
            .named_children(&mut cursor)
            .filter(|n| n.kind() != "comment")
            .nth(1)?;

        match second.kind() {
            "interpreted_string_literal" | "raw_string_literal" => {
                let raw = node_text(&second, source);
                match unquote_go_string(&raw) {
                    Ok(name) => Some(name),
                    Err(e) => {
                        debug!(error = %e, "could not unquote suite name, using function name");
                        None
                    }
                }
            }
            _ => None,
        }
    }
}

fn node_text(node: &Node<'_>, source: &[u8]) -> String {
    node.utf8_text(source).unwrap_or("").to_string()
}
