use std::fmt;

use petgraph::{graph::{NodeIndex, Graph}, dot::{Dot, Config}};
use string_builder::Builder;

use crate::varlang::ast_node::{AstNode, NonTerminals};
use crate::varlang::token::{Position, TokenType};

#[derive (Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum BinaryOperator {
    #[strum (serialize = "+")]
    Add,
    #[strum (serialize = "-")]
    Subtract,
    #[strum (serialize = "*")]
    Multiply,
    #[strum (serialize = "/")]
    Divide
}

impl BinaryOperator {
    // Maps an operator token onto the operation it stands for
    pub fn from_token_type(token_type: TokenType) -> Option<Self> {
        return match token_type {
            TokenType::Plus => Some(BinaryOperator::Add),
            TokenType::Minus => Some(BinaryOperator::Subtract),
            TokenType::Times => Some(BinaryOperator::Multiply),
            TokenType::Divide => Some(BinaryOperator::Divide),
            _ => None
        };
    }

    fn non_terminal(&self) -> NonTerminals {
        return match self {
            BinaryOperator::Add => NonTerminals::Add,
            BinaryOperator::Subtract => NonTerminals::Subtract,
            BinaryOperator::Multiply => NonTerminals::Multiply,
            BinaryOperator::Divide => NonTerminals::Divide
        };
    }
}

#[derive (Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(u64),
    Reference {
        name: String,
        position: Position
    },
    BinaryOp {
        op: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>
    }
}

impl Expr {
    pub fn binary(op: BinaryOperator, left: Expr, right: Expr) -> Self {
        return Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right)
        };
    }

    // Every variable reference in the expression, left to right
    pub fn references(&self) -> Vec<(&str, Position)> {
        let mut out: Vec<(&str, Position)> = Vec::new();
        self.collect_references(&mut out);
        return out;
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<(&'a str, Position)>) {
        match self {
            Expr::Literal(_) => {},
            Expr::Reference { name, position } => out.push((name.as_str(), *position)),
            Expr::BinaryOp { left, right, .. } => {
                left.collect_references(out);
                right.collect_references(out);
            }
        }
    }

    fn flatten_into(&self, nodes: &mut Vec<(usize, AstNode)>, level: usize) {
        match self {
            Expr::Literal(value) => nodes.push((level, AstNode::Terminal(value.to_string()))),
            Expr::Reference { name, .. } => nodes.push((level, AstNode::Terminal(name.to_owned()))),
            Expr::BinaryOp { op, left, right } => {
                nodes.push((level, AstNode::NonTerminal(op.non_terminal())));
                left.flatten_into(nodes, level + 1);
                right.flatten_into(nodes, level + 1);
            }
        }
    }
}

// Binary operations always get parentheses so the text parses back to the same tree
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{}", value),
            Expr::Reference { name, .. } => write!(f, "{}", name),
            Expr::BinaryOp { op, left, right } => write!(f, "({} {} {})", left, op, right)
        }
    }
}

#[derive (Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    VarDecl {
        name: String,
        position: Position
    },
    Assign {
        name: String,
        position: Position,
        value: Expr
    },
    ExprStatement(Expr)
}

impl Statement {
    fn flatten_into(&self, nodes: &mut Vec<(usize, AstNode)>, level: usize) {
        match self {
            Statement::VarDecl { name, .. } => {
                nodes.push((level, AstNode::NonTerminal(NonTerminals::VarDecl)));
                nodes.push((level + 1, AstNode::Terminal(name.to_owned())));
            },
            Statement::Assign { name, value, .. } => {
                nodes.push((level, AstNode::NonTerminal(NonTerminals::Assign)));
                nodes.push((level + 1, AstNode::Terminal(name.to_owned())));
                value.flatten_into(nodes, level + 1);
            },
            Statement::ExprStatement(value) => {
                nodes.push((level, AstNode::NonTerminal(NonTerminals::ExprStatement)));
                value.flatten_into(nodes, level + 1);
            }
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::VarDecl { name, .. } => write!(f, "var {}", name),
            Statement::Assign { name, value, .. } => write!(f, "{} = {}", name, value),
            Statement::ExprStatement(value) => write!(f, "{}", value)
        }
    }
}

/// A parsed program: its statements in source order.
///
/// The tree is built once by the parser and never changed afterwards. Each
/// node owns its children outright.
#[derive (Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        return Program {
            statements
        };
    }

    pub fn len(&self) -> usize {
        return self.statements.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.statements.is_empty();
    }

    // Preorder list of (depth, node) pairs shared by both renderings
    fn flatten(&self) -> Vec<(usize, AstNode)> {
        let mut nodes: Vec<(usize, AstNode)> = vec![(0, AstNode::NonTerminal(NonTerminals::Program))];
        for statement in self.statements.iter() {
            statement.flatten_into(&mut nodes, 1);
        }
        return nodes;
    }

    // Text version of the tree, one node per line with a dash per level of depth
    pub fn create_text(&self) -> String {
        let mut tree_builder: Builder = Builder::default();

        for (level, node) in self.flatten().iter() {
            for _i in 0..*level {
                tree_builder.append("-");
            }

            // Set the appropriate text output
            match node {
                AstNode::Terminal(text) => tree_builder.append(format!("[{}]\n", text)),
                AstNode::NonTerminal(non_terminal) => tree_builder.append(format!("<{}>\n", non_terminal))
            }
        }

        // Only str pieces went in, so the bytes are valid utf-8
        return tree_builder.string().unwrap_or_default();
    }

    // Graphviz version of the tree
    pub fn to_dot(&self) -> String {
        let mut graph: Graph<AstNode, ()> = Graph::new();

        // The chain of nodes from the root down to the last one added
        let mut parents: Vec<NodeIndex> = Vec::new();

        for (level, node) in self.flatten().into_iter() {
            parents.truncate(level);
            let new_node: NodeIndex = graph.add_node(node);
            if let Some(parent) = parents.last() {
                graph.add_edge(*parent, new_node, ());
            }
            parents.push(new_node);
        }

        // Convert the graph into a dot format
        let graph_dot: Dot<&Graph<AstNode, ()>> = Dot::with_config(&graph, &[Config::EdgeNoLabel]);
        return format!("{:?}", graph_dot);
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.statements.iter().map(|statement| format!("{};", statement)).collect();
        write!(f, "{}", rendered.join(" "))
    }
}
