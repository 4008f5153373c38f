use crate::varlang::ast::{Expr, Program, Statement};
use crate::varlang::diagnostic::Diagnostic;
use crate::varlang::symbol_table::{SymbolTable, SymbolTableEntryField};
use crate::varlang::token::Position;
use crate::util::compiler_log::{LogSources, StageLogger};

/// Checks declaration discipline in one left to right pass.
///
/// A `var` declaration fails if the name is already declared, and an
/// assignment fails if its target is not declared yet. Names used inside an
/// assignment's value or a bare expression are only checked when strict
/// references are turned on. Analysis stops at the first failure.
pub struct SemanticAnalyzer {
    strict_references: bool,
    num_warnings: usize,
    pub symbol_table: SymbolTable,
    logger: StageLogger
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        return SemanticAnalyzer::new();
    }
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        return SemanticAnalyzer {
            strict_references: false,
            num_warnings: 0,
            symbol_table: SymbolTable::new(),
            logger: StageLogger::new(LogSources::SemanticAnalyzer, false)
        };
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.logger.set_verbose(verbose);
        return self;
    }

    pub fn with_strict_references(mut self, strict_references: bool) -> Self {
        self.strict_references = strict_references;
        return self;
    }

    pub fn num_warnings(&self) -> usize {
        return self.num_warnings;
    }

    pub fn analyze_program(&mut self, program: &Program) -> Result<(), Diagnostic> {
        self.logger.info(String::from("Beginning semantic analysis"));

        // Every run starts from an empty table
        self.symbol_table.reset();
        self.num_warnings = 0;

        for statement in program.statements.iter() {
            if let Err(e) = self.analyze_statement(statement) {
                self.logger.error(e.to_string());
                self.logger.error(String::from("Semantic analysis failed"));
                return Err(e);
            }
        }

        self.logger.debug(format_args!("Symbol table: {:?}", self.symbol_table));
        self.num_warnings = self.symbol_table.mass_warnings(&self.logger);

        self.logger.info(format!("Semantic analysis passed with {} warning(s)", self.num_warnings));
        return Ok(());
    }

    fn analyze_statement(&mut self, statement: &Statement) -> Result<(), Diagnostic> {
        match statement {
            Statement::VarDecl { name, position } => self.analyze_var_decl(name, *position),
            Statement::Assign { name, position, value } => {
                if !self.symbol_table.set_entry_field(name, SymbolTableEntryField::Initialized) {
                    return Err(Diagnostic::UndeclaredVariable {
                        name: name.to_owned(),
                        position: *position
                    });
                }
                self.logger.debug(format_args!("Assigned to [ {} ] at {:?}", name, position));
                self.analyze_expression(value)
            },
            Statement::ExprStatement(value) => self.analyze_expression(value)
        }
    }

    fn analyze_var_decl(&mut self, name: &str, position: Position) -> Result<(), Diagnostic> {
        if let Some(entry) = self.symbol_table.get_identifier(name) {
            return Err(Diagnostic::DuplicateDeclaration {
                name: name.to_owned(),
                position,
                first_declared: entry.position
            });
        }

        self.symbol_table.new_identifier(name.to_owned(), position);
        self.logger.debug(format_args!("Declared [ {} ] at {:?}", name, position));
        return Ok(());
    }

    fn analyze_expression(&mut self, value: &Expr) -> Result<(), Diagnostic> {
        for (name, position) in value.references() {
            let found: bool = self.symbol_table.set_entry_field(name, SymbolTableEntryField::Used);
            if !found && self.strict_references {
                return Err(Diagnostic::UndeclaredVariable {
                    name: name.to_owned(),
                    position
                });
            }
        }
        return Ok(());
    }
}
