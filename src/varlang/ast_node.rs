use std::fmt;

// A node of the rendered tree, either a piece of source text or a named construct
#[derive (Clone, PartialEq, Eq)]
pub enum AstNode {
    Terminal(String),
    NonTerminal(NonTerminals)
}

// Instead of deriving Debug, we are going to implement it so it prints out the way we want it to when the debug print is called
// Basic idea found from https://users.rust-lang.org/t/how-can-i-implement-fmt-display-for-enum/24111/10
impl fmt::Debug for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            // Print out the text if it is a terminal
            AstNode::Terminal(text) => write!(f, "{}", text),
            // Otherwise print the display text for NonTerminals, which will be in PascalCase
            AstNode::NonTerminal(non_term) => write!(f, "{}", non_term)
        }
    }
}

#[derive (Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum (serialize_all = "PascalCase")]
pub enum NonTerminals {
    Program,
    VarDecl,
    Assign,
    ExprStatement,
    Add,
    Subtract,
    Multiply,
    Divide
}
