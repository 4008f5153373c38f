use crate::varlang::ast::{BinaryOperator, Expr, Program, Statement};
use crate::varlang::diagnostic::Diagnostic;
use crate::varlang::token::{Token, TokenType};
use crate::util::compiler_log::{LogSources, StageLogger};

/// Recursive descent parser for the grammar
///
/// ```text
/// program     := statement (SEMICOLON statement)* SEMICOLON
/// statement   := VAR IDENTIFIER | IDENTIFIER EQUALS expression | expression
/// expression  := term ((PLUS|MINUS) term)?
/// term        := factor ((TIMES|DIVIDE) factor)?
/// factor      := NUMBER | IDENTIFIER | LPAREN expression RPAREN
/// ```
///
/// Each tier takes at most one operator, so `1 + 2 + 3` has to be written
/// with parentheses. The first token that does not fit ends the parse.
/// Parentheses may nest up to [`MAX_NESTING_DEPTH`] levels; one more is a
/// `NestingTooDeep` error instead of unbounded recursion.
pub struct Parser {
    cur_token_index: usize,

    // How many parentheses enclose the factor being parsed
    nesting_depth: usize,

    logger: StageLogger
}

pub const MAX_NESTING_DEPTH: usize = 256;

impl Default for Parser {
    fn default() -> Self {
        return Parser::new();
    }
}

impl Parser {
    // Constructor for the parser
    pub fn new() -> Self {
        return Parser {
            cur_token_index: 0,
            nesting_depth: 0,
            logger: StageLogger::new(LogSources::Parser, false)
        };
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.logger.set_verbose(verbose);
        return self;
    }

    // Calls for a program to be parsed
    pub fn parse_program(&mut self, token_stream: &[Token]) -> Result<Program, Diagnostic> {
        self.logger.info(String::from("Parsing Program"));

        // Reset the index to be 0
        self.cur_token_index = 0;
        self.nesting_depth = 0;

        let mut statements: Vec<Statement> = Vec::new();

        // Every statement is followed by a semicolon, and there is at least one
        loop {
            let statement_res: Result<Statement, Diagnostic> = self.parse_statement(token_stream)
                .and_then(|statement| self.match_token(token_stream, TokenType::Semicolon).map(|_| statement));

            match statement_res {
                Ok(statement) => statements.push(statement),
                Err(e) => {
                    self.logger.error(String::from("Parser failed"));
                    return Err(e);
                }
            }

            if self.peek(token_stream).is_none() {
                break;
            }
        }

        self.logger.info(format!("Parser completed with {} statement(s)", statements.len()));
        return Ok(Program::new(statements));
    }

    fn parse_statement(&mut self, token_stream: &[Token]) -> Result<Statement, Diagnostic> {
        self.logger.debug(format_args!("Parsing Statement"));

        let next_token_type: Option<TokenType> = self.peek(token_stream).map(|token| token.token_type);
        let following_token_type: Option<TokenType> = token_stream.get(self.cur_token_index + 1).map(|token| token.token_type);

        // Parse the next section in the stream based on the next token
        return match (next_token_type, following_token_type) {
            (Some(TokenType::Var), _) => self.parse_var_declaration(token_stream),
            (Some(TokenType::Identifier), Some(TokenType::Equals)) => self.parse_assignment_statement(token_stream),
            _ => {
                // Anything else has to be a bare expression
                let value: Expr = self.parse_expression(token_stream)?;
                Ok(Statement::ExprStatement(value))
            }
        };
    }

    fn parse_var_declaration(&mut self, token_stream: &[Token]) -> Result<Statement, Diagnostic> {
        self.logger.debug(format_args!("Parsing VarDecl"));

        self.match_token(token_stream, TokenType::Var)?;
        let id_token: &Token = self.match_token(token_stream, TokenType::Identifier)?;

        return Ok(Statement::VarDecl {
            name: id_token.text.to_owned(),
            position: id_token.position
        });
    }

    fn parse_assignment_statement(&mut self, token_stream: &[Token]) -> Result<Statement, Diagnostic> {
        self.logger.debug(format_args!("Parsing AssignmentStatement"));

        // Assignment statements begin with an identifier
        let id_token: &Token = self.match_token(token_stream, TokenType::Identifier)?;
        self.match_token(token_stream, TokenType::Equals)?;

        // The right hand side of the statement is an expression
        let value: Expr = self.parse_expression(token_stream)?;

        return Ok(Statement::Assign {
            name: id_token.text.to_owned(),
            position: id_token.position,
            value
        });
    }

    fn parse_expression(&mut self, token_stream: &[Token]) -> Result<Expr, Diagnostic> {
        self.logger.debug(format_args!("Parsing Expr"));

        let left: Expr = self.parse_term(token_stream)?;

        // One optional sum-level operator
        match self.next_operator(token_stream, &[TokenType::Plus, TokenType::Minus]) {
            Some(op) => {
                let right: Expr = self.parse_term(token_stream)?;
                return Ok(Expr::binary(op, left, right));
            },
            None => return Ok(left)
        }
    }

    fn parse_term(&mut self, token_stream: &[Token]) -> Result<Expr, Diagnostic> {
        self.logger.debug(format_args!("Parsing Term"));

        let left: Expr = self.parse_factor(token_stream)?;

        // One optional product-level operator
        match self.next_operator(token_stream, &[TokenType::Times, TokenType::Divide]) {
            Some(op) => {
                let right: Expr = self.parse_factor(token_stream)?;
                return Ok(Expr::binary(op, left, right));
            },
            None => return Ok(left)
        }
    }

    fn parse_factor(&mut self, token_stream: &[Token]) -> Result<Expr, Diagnostic> {
        self.logger.debug(format_args!("Parsing Factor"));

        let next_token: Option<&Token> = self.peek(token_stream);
        match next_token.map(|token| token.token_type) {
            Some(TokenType::Number) => {
                let num_token: &Token = self.match_token(token_stream, TokenType::Number)?;
                let value: u64 = num_token.text.parse::<u64>().map_err(|_| {
                    let invalid: Diagnostic = Diagnostic::InvalidNumber {
                        text: num_token.text.to_owned(),
                        position: num_token.position
                    };
                    self.logger.error(invalid.to_string());
                    invalid
                })?;
                return Ok(Expr::Literal(value));
            },
            Some(TokenType::Identifier) => {
                let id_token: &Token = self.match_token(token_stream, TokenType::Identifier)?;
                return Ok(Expr::Reference {
                    name: id_token.text.to_owned(),
                    position: id_token.position
                });
            },
            Some(TokenType::LParen) => {
                let lparen_token: &Token = self.match_token(token_stream, TokenType::LParen)?;
                if self.nesting_depth >= MAX_NESTING_DEPTH {
                    let too_deep: Diagnostic = Diagnostic::NestingTooDeep {
                        position: lparen_token.position,
                        limit: MAX_NESTING_DEPTH
                    };
                    self.logger.error(too_deep.to_string());
                    return Err(too_deep);
                }

                self.nesting_depth += 1;
                let inner_res: Result<Expr, Diagnostic> = self.parse_expression(token_stream);
                self.nesting_depth -= 1;

                let inner: Expr = inner_res?;
                self.match_token(token_stream, TokenType::RParen)?;
                return Ok(inner);
            },
            _ => return Err(self.syntax_error(next_token, String::from("NUMBER, IDENTIFIER, or LPAREN")))
        }
    }

    // Consumes the next token if it is one of the given operators
    fn next_operator(&mut self, token_stream: &[Token], operators: &[TokenType]) -> Option<BinaryOperator> {
        let next_token_type: TokenType = self.peek(token_stream)?.token_type;
        if !operators.contains(&next_token_type) {
            return None;
        }

        self.cur_token_index += 1;
        return BinaryOperator::from_token_type(next_token_type);
    }

    fn peek<'t>(&self, token_stream: &'t [Token]) -> Option<&'t Token> {
        return token_stream.get(self.cur_token_index);
    }

    // Function to ensure the token is correct
    fn match_token<'t>(&mut self, token_stream: &'t [Token], expected_token: TokenType) -> Result<&'t Token, Diagnostic> {
        // Check for an index out of range error
        match token_stream.get(self.cur_token_index) {
            Some(cur_token) if cur_token.token_type == expected_token => {
                // Consume the next token
                self.cur_token_index += 1;
                return Ok(cur_token);
            },
            cur_token => return Err(self.syntax_error(cur_token, expected_token.to_string()))
        }
    }

    fn syntax_error(&self, found: Option<&Token>, expected: String) -> Diagnostic {
        let error: Diagnostic = Diagnostic::SyntaxError {
            found: found.cloned(),
            expected
        };
        self.logger.error(error.to_string());
        return error;
    }
}
