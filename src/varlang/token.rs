use std::fmt;

// A position in the source code as (line, column), both starting at 1
pub type Position = (usize, usize);

// Defines a token
#[derive (Debug, Clone, PartialEq, Eq)]
pub struct Token {
    // The type of the token
    pub token_type: TokenType,
    // The exact text that was matched
    pub text: String,
    // The position in the source code the token is located
    pub position: Position
}

impl Token {
    // Create a new token with the given information
    pub fn new(token_type_in: TokenType, token_text: String, line_number: usize, col_number: usize) -> Self {
        return Token {
            token_type: token_type_in,
            text: token_text,
            position: (line_number, col_number)
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [ {} ] at {:?}", self.token_type, self.text, self.position)
    }
}

// Defines the token types, named the way the grammar names them
#[derive (Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum (serialize_all = "UPPERCASE")]
pub enum TokenType {
    Var, // var
    Identifier, // [a-zA-Z_][a-zA-Z0-9_]*
    Number, // [0-9]+
    Plus, // +
    Minus, // -
    Times, // *
    Divide, // /
    LParen, // (
    RParen, // )
    Equals, // =
    Semicolon // ;
}
