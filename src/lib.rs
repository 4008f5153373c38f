//! Front end for a small variable language: declarations, assignments, and
//! two-tier arithmetic expressions.
//!
//! Source text goes through the lexer, the parser, and the semantic analyzer
//! in that order. Use [`compile`] for a verdict or [`Compiler::run`] for a
//! full report of every stage.

pub mod varlang;
pub mod util;

pub use crate::varlang::ast::{BinaryOperator, Expr, Program, Statement};
pub use crate::varlang::compiler::{compile, CompilationContext, CompileReport, Compiler, CompilerConfig};
pub use crate::varlang::diagnostic::{Diagnostic, Stage};
pub use crate::varlang::lexer::{self, lex, LexOutput, Lexer};
pub use crate::varlang::parser::MAX_NESTING_DEPTH;
pub use crate::varlang::token::{Position, Token, TokenType};
