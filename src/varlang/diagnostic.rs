use thiserror::Error;

use crate::varlang::token::{Position, Token};

// The stage of the pipeline a diagnostic came from
#[derive (Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Stage {
    Lexer,
    Parser,
    SemanticAnalyzer
}

/// Everything the front end can report about a program.
///
/// Illegal characters are soft: the lexer skips them and keeps going, so any
/// number of them can show up in one run. Every other variant is fatal to the
/// stage that raised it and is reported at most once per compilation.
#[derive (Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("Illegal character {character:?} at {position:?}")]
    IllegalCharacter {
        character: char,
        position: Position
    },

    #[error("Syntax error: expected {expected}, found {}", describe_found(.found))]
    SyntaxError {
        found: Option<Token>,
        expected: String
    },

    #[error("Syntax error: number literal '{text}' at {position:?} does not fit in 64 bits")]
    InvalidNumber {
        text: String,
        position: Position
    },

    #[error("Syntax error: parentheses at {position:?} nest deeper than {limit} levels")]
    NestingTooDeep {
        position: Position,
        limit: usize
    },

    #[error("Variable '{name}' already declared at {position:?} (first declared at {first_declared:?}).")]
    DuplicateDeclaration {
        name: String,
        position: Position,
        first_declared: Position
    },

    #[error("Variable '{name}' not declared (used at {position:?}).")]
    UndeclaredVariable {
        name: String,
        position: Position
    }
}

impl Diagnostic {
    pub fn stage(&self) -> Stage {
        return match self {
            Diagnostic::IllegalCharacter { .. } => Stage::Lexer,
            Diagnostic::SyntaxError { .. } | Diagnostic::InvalidNumber { .. } | Diagnostic::NestingTooDeep { .. } => Stage::Parser,
            Diagnostic::DuplicateDeclaration { .. } | Diagnostic::UndeclaredVariable { .. } => Stage::SemanticAnalyzer
        };
    }

    // Only illegal characters let the pipeline keep going
    pub fn is_fatal(&self) -> bool {
        return !matches!(self, Diagnostic::IllegalCharacter { .. });
    }

    // The identifier or character the diagnostic is about, when there is one
    pub fn subject(&self) -> Option<String> {
        return match self {
            Diagnostic::IllegalCharacter { character, .. } => Some(character.to_string()),
            Diagnostic::SyntaxError { found, .. } => found.as_ref().map(|token| token.text.to_owned()),
            Diagnostic::InvalidNumber { text, .. } => Some(text.to_owned()),
            Diagnostic::NestingTooDeep { .. } => Some(String::from("(")),
            Diagnostic::DuplicateDeclaration { name, .. } => Some(name.to_owned()),
            Diagnostic::UndeclaredVariable { name, .. } => Some(name.to_owned())
        };
    }
}

fn describe_found(found: &Option<Token>) -> String {
    return match found {
        Some(token) => format!("{}", token),
        None => String::from("end of input")
    };
}
