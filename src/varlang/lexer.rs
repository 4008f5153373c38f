use std::sync::OnceLock;

use regex::Regex;

use crate::varlang::diagnostic::Diagnostic;
use crate::varlang::token::{Token, TokenType};
use crate::util::compiler_log::{LogSources, StageLogger};

// The matchers in the order they are tried. The first one that matches at the
// current position wins, so the keyword has to come before the identifier
// rule it overlaps with. The keyword pattern requires an ascii word boundary so
// `variable` and `var1` still lex as identifiers while `varé` is the keyword
// followed by an illegal character.
const TOKEN_RULES: [(TokenType, &str); 11] = [
    (TokenType::Var, r"^var(?-u:\b)"),
    (TokenType::Identifier, r"^[a-zA-Z_][a-zA-Z0-9_]*"),
    (TokenType::Number, r"^[0-9]+"),
    (TokenType::Plus, r"^\+"),
    (TokenType::Minus, r"^-"),
    (TokenType::Times, r"^\*"),
    (TokenType::Divide, r"^/"),
    (TokenType::LParen, r"^\("),
    (TokenType::RParen, r"^\)"),
    (TokenType::Equals, r"^="),
    (TokenType::Semicolon, r"^;")
];

// The patterns are constants, so compiling them can only fail on a typo in the table
fn compiled_rules() -> &'static Vec<(TokenType, Regex)> {
    static RULES: OnceLock<Vec<(TokenType, Regex)>> = OnceLock::new();
    return RULES.get_or_init(|| {
        TOKEN_RULES
            .iter()
            .map(|(token_type, pattern)| (*token_type, Regex::new(pattern).expect("Token patterns should be valid regular expressions")))
            .collect()
    });
}

// Everything the lexer produced for one source string
#[derive (Debug, Clone, Default, PartialEq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>
}

/// Lazy tokenizer over a source string.
///
/// Yields `Ok(token)` for every recognized token and `Err(IllegalCharacter)`
/// for every character no rule matches; the bad character is skipped and
/// lexing continues. The sequence always ends at the end of the input and
/// can be started over with [`Lexer::reset`].
#[derive (Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,

    // Byte offset of the next character to look at
    offset: usize,

    // Position of the next character
    line_number: usize,
    col_number: usize,

    logger: StageLogger
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        return Lexer {
            source,
            offset: 0,
            line_number: 1,
            col_number: 1,
            logger: StageLogger::new(LogSources::Lexer, false)
        };
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.logger.set_verbose(verbose);
        return self;
    }

    // Go back to the start of the source
    pub fn reset(&mut self) {
        self.offset = 0;
        self.line_number = 1;
        self.col_number = 1;
    }

    // Moves past spaces, tabs, and newlines
    fn skip_whitespace(&mut self) {
        while let Some(cur_char) = self.source[self.offset..].chars().next() {
            match cur_char {
                ' ' | '\t' | '\r' => {
                    self.offset += 1;
                    self.col_number += 1;
                },
                '\n' => {
                    self.offset += 1;
                    self.line_number += 1;
                    self.col_number = 1;
                },
                _ => break
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, Diagnostic>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();

        let remaining: &str = &self.source[self.offset..];
        let cur_char: char = remaining.chars().next()?;
        let col_number: usize = self.col_number;

        for (token_type, rule) in compiled_rules().iter() {
            if let Some(found) = rule.find(remaining) {
                let new_token: Token = Token::new(*token_type, String::from(found.as_str()), self.line_number, col_number);
                self.offset += found.end();
                self.col_number += found.as_str().chars().count();

                self.logger.debug(format_args!("Found {}", new_token));
                return Some(Ok(new_token));
            }
        }

        // Nothing matched, so report the character and skip exactly that one
        self.offset += cur_char.len_utf8();
        self.col_number += 1;
        let illegal: Diagnostic = Diagnostic::IllegalCharacter {
            character: cur_char,
            position: (self.line_number, col_number)
        };
        self.logger.error(illegal.to_string());
        return Some(Err(illegal));
    }
}

// Lex the whole source, splitting tokens from the illegal character reports
pub fn lex(source: &str) -> LexOutput {
    return lex_with(Lexer::new(source));
}

pub fn lex_with(lexer: Lexer<'_>) -> LexOutput {
    let mut output: LexOutput = LexOutput::default();

    for item in lexer {
        match item {
            Ok(token) => output.tokens.push(token),
            Err(diagnostic) => output.diagnostics.push(diagnostic)
        }
    }

    return output;
}
