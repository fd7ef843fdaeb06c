use std::fmt::Write;

use crate::ast::Node;

/// Preamble of every generated graph.
pub const DOT_HEADER: &str = r#"digraph astgraph {
  node [shape=circle, fontsize=12, fontname="Courier", height=.1];
  ranksep=.3;
  edge [arrowsize=.5]
"#;

/// Renders a tree as a Graphviz DOT description.
///
/// Nodes are numbered in pre-order starting at zero. A node's line is written
/// when it is visited and each edge to a child is written once that child's
/// subtree is complete.
#[derive(Debug, Default)]
pub struct AstVisualizer {
    next_id: usize,
    buffer:  String,
}

impl AstVisualizer {
    /// Creates an empty visualizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `tree` and returns the complete DOT text.
    ///
    /// # Example
    /// ```
    /// use minipas::{interpreter::parser::parse, visualizer::AstVisualizer};
    ///
    /// let tree = parse("PROGRAM p; BEGIN x := 1 END.").unwrap();
    /// let dot = AstVisualizer::new().render(&tree);
    ///
    /// assert!(dot.starts_with("digraph astgraph {"));
    /// assert!(dot.contains("Node0 [label=\"Program\\np\"]"));
    /// assert!(dot.contains("Node0 -> Node1"));
    /// assert!(dot.ends_with("}\n"));
    /// ```
    #[must_use]
    pub fn render(mut self, tree: &Node) -> String {
        self.visit(tree);
        let mut dot = String::from(DOT_HEADER);
        dot.push_str(&self.buffer);
        dot.push_str("}\n");
        dot
    }

    /// Visits a node and returns the id it was given.
    ///
    /// One arm per node variant; leaves only emit their label.
    pub fn visit(&mut self, node: &Node) -> usize {
        match node {
            Node::Program { block, .. } => self.visit_parent(node, [block.as_ref()]),
            Node::Block { declarations,
                          compound, } => {
                self.visit_parent(node,
                                  declarations.iter().chain(std::iter::once(compound.as_ref())))
            },
            Node::VarDecl { variable,
                            type_spec, } => {
                self.visit_parent(node, [variable.as_ref(), type_spec.as_ref()])
            },
            Node::Compound { children } => self.visit_parent(node, children),
            Node::Assign { target, value } => {
                self.visit_parent(node, [target.as_ref(), value.as_ref()])
            },
            Node::BinaryOp { left, right, .. } => {
                self.visit_parent(node, [left.as_ref(), right.as_ref()])
            },
            Node::UnaryOp { expr, .. } => self.visit_parent(node, [expr.as_ref()]),
            Node::TypeSpec(_) | Node::Number(_) | Node::Variable { .. } | Node::NoOp => {
                self.emit_node(node)
            },
        }
    }

    /// Emits `node`, then each child subtree followed by its edge.
    fn visit_parent<'a>(&mut self,
                        node: &Node,
                        children: impl IntoIterator<Item = &'a Node>)
                        -> usize {
        let id = self.emit_node(node);
        for child in children {
            let child_id = self.visit(child);
            self.emit_edge(id, child_id);
        }
        id
    }

    fn emit_node(&mut self, node: &Node) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        let _ = writeln!(self.buffer, "Node{id} [label=\"{}\"]", escape_label(&node.label()));
        id
    }

    fn emit_edge(&mut self, parent: usize, child: usize) {
        let _ = writeln!(self.buffer, "Node{parent} -> Node{child}");
    }
}

/// Escapes a label for use inside a quoted DOT string.
fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}
