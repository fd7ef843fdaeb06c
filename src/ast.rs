/// An operator tag carried by unary and binary nodes.
///
/// The tag mirrors the lexical operator it was parsed from, so `DIV` and `/`
/// stay distinct in the tree even though they evaluate identically.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition or unary identity (`+`)
    Plus,
    /// Subtraction or negation (`-`)
    Minus,
    /// Multiplication (`*`)
    Mul,
    /// Integer division keyword (`DIV`)
    IntegerDiv,
    /// Division (`/`)
    FloatDiv,
}

/// The declared kind of a variable.
///
/// Declared types are kept in the tree for inspection only; they never
/// constrain or tag runtime values.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// `INTEGER`
    Integer,
    /// `REAL`
    Real,
}

/// An abstract syntax tree (AST) node.
///
/// Each variant owns its children exclusively; a parsed tree has exactly one
/// [`Node::Program`] root and is never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// The whole program: `PROGRAM name; block.`
    Program {
        /// Name given after `PROGRAM`.
        name:  String,
        /// The program body, always a [`Node::Block`].
        block: Box<Self>,
    },
    /// Declarations followed by the main compound statement.
    Block {
        /// One [`Node::VarDecl`] per declared identifier, in source order.
        declarations: Vec<Self>,
        /// The `BEGIN ... END` body, always a [`Node::Compound`].
        compound:     Box<Self>,
    },
    /// Declaration of a single identifier.
    VarDecl {
        /// The declared variable, always a [`Node::Variable`].
        variable:  Box<Self>,
        /// The declared type, always a [`Node::TypeSpec`].
        type_spec: Box<Self>,
    },
    /// A declared type.
    TypeSpec(TypeKind),
    /// `BEGIN statement; ... END`
    Compound {
        /// Statements in source order.
        children: Vec<Self>,
    },
    /// `target := value`
    Assign {
        /// The assigned variable, always a [`Node::Variable`] when parsed.
        target: Box<Self>,
        /// The assigned expression.
        value:  Box<Self>,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    Operator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (`+x` or `-x`).
    UnaryOp {
        /// The operator to apply.
        op:   Operator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A numeric literal. Integer and real literals are both stored as `f64`.
    Number(f64),
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// The empty statement.
    NoOp,
}

/// The variant tag of a [`Node`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    Block,
    VarDecl,
    TypeSpec,
    Compound,
    Assign,
    BinaryOp,
    UnaryOp,
    Number,
    Variable,
    NoOp,
}

impl NodeKind {
    /// Every node kind, in declaration order.
    pub const ALL: [Self; 11] = [Self::Program,
                                 Self::Block,
                                 Self::VarDecl,
                                 Self::TypeSpec,
                                 Self::Compound,
                                 Self::Assign,
                                 Self::BinaryOp,
                                 Self::UnaryOp,
                                 Self::Number,
                                 Self::Variable,
                                 Self::NoOp];
}

impl Node {
    /// Gets the variant tag of `self`.
    ///
    /// ## Example
    /// ```
    /// use minipas::ast::{Node, NodeKind};
    ///
    /// assert_eq!(Node::Number(1.0).kind(), NodeKind::Number);
    /// assert_eq!(Node::NoOp.kind(), NodeKind::NoOp);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Program { .. } => NodeKind::Program,
            Self::Block { .. } => NodeKind::Block,
            Self::VarDecl { .. } => NodeKind::VarDecl,
            Self::TypeSpec(_) => NodeKind::TypeSpec,
            Self::Compound { .. } => NodeKind::Compound,
            Self::Assign { .. } => NodeKind::Assign,
            Self::BinaryOp { .. } => NodeKind::BinaryOp,
            Self::UnaryOp { .. } => NodeKind::UnaryOp,
            Self::Number(_) => NodeKind::Number,
            Self::Variable { .. } => NodeKind::Variable,
            Self::NoOp => NodeKind::NoOp,
        }
    }

    /// A human-readable label for the node: the operator symbol, literal
    /// value or identifier name where the node has one.
    ///
    /// ## Example
    /// ```
    /// use minipas::ast::{Node, Operator};
    ///
    /// let node = Node::BinaryOp { left:  Box::new(Node::Number(10.0)),
    ///                             op:    Operator::IntegerDiv,
    ///                             right: Box::new(Node::Number(4.0)),
    ///                             line:  1, };
    ///
    /// assert_eq!(node.label(), "DIV");
    /// assert_eq!(Node::Number(2.5).label(), "2.5");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Program { name, .. } => format!("Program\n{name}"),
            Self::Block { .. } => "Block".to_string(),
            Self::VarDecl { .. } => "VarDecl".to_string(),
            Self::TypeSpec(kind) => kind.to_string(),
            Self::Compound { .. } => "Compound".to_string(),
            Self::Assign { .. } => ":=".to_string(),
            Self::BinaryOp { op, .. } | Self::UnaryOp { op, .. } => op.to_string(),
            Self::Number(value) => value.to_string(),
            Self::Variable { name, .. } => name.clone(),
            Self::NoOp => "NoOp".to_string(),
        }
    }

    /// The node's children, in source order.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Program { block, .. } => vec![block.as_ref()],
            Self::Block { declarations,
                          compound, } => {
                declarations.iter().chain(std::iter::once(compound.as_ref())).collect()
            },
            Self::VarDecl { variable,
                            type_spec, } => vec![variable.as_ref(), type_spec.as_ref()],
            Self::Compound { children } => children.iter().collect(),
            Self::Assign { target, value } => vec![target.as_ref(), value.as_ref()],
            Self::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Self::UnaryOp { expr, .. } => vec![expr.as_ref()],
            Self::TypeSpec(_) | Self::Number(_) | Self::Variable { .. } | Self::NoOp => Vec::new(),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::IntegerDiv => "DIV",
            Self::FloatDiv => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "INTEGER"),
            Self::Real => write!(f, "REAL"),
        }
    }
}
