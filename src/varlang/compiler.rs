use crate::varlang::ast::Program;
use crate::varlang::diagnostic::Diagnostic;
use crate::varlang::lexer::{self, Lexer, LexOutput};
use crate::varlang::parser::Parser;
use crate::varlang::semantic_analyzer::SemanticAnalyzer;
use crate::varlang::symbol_table::SymbolTable;
use crate::varlang::token::Token;
use crate::util::compiler_log::{LogSources, StageLogger};

// Settings shared by every run of a compiler
#[derive (Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerConfig {
    // Also check the names used inside expressions
    pub strict_references: bool,

    // Sources that log in verbose mode
    pub verbose: Vec<LogSources>
}

impl CompilerConfig {
    pub fn new() -> Self {
        return CompilerConfig::default();
    }

    pub fn strict_references(mut self, strict_references: bool) -> Self {
        self.strict_references = strict_references;
        return self;
    }

    pub fn verbose_source(mut self, src: LogSources) -> Self {
        if !self.verbose.contains(&src) {
            self.verbose.push(src);
        }
        return self;
    }

    pub fn verbose_all(self) -> Self {
        return self
            .verbose_source(LogSources::Compiler)
            .verbose_source(LogSources::Lexer)
            .verbose_source(LogSources::Parser)
            .verbose_source(LogSources::SemanticAnalyzer);
    }

    pub fn is_verbose(&self, src: LogSources) -> bool {
        return self.verbose.contains(&src);
    }
}

/// Everything one run of the pipeline produced.
#[derive (Debug, Clone, PartialEq)]
pub struct CompileReport {
    pub tokens: Vec<Token>,

    // Illegal characters, in source order
    pub lex_diagnostics: Vec<Diagnostic>,

    // Present whenever parsing succeeded, even if analysis then failed
    pub program: Option<Program>,

    // The table as it stood when analysis finished or stopped
    pub symbol_table: SymbolTable,

    // The syntax or semantic error that stopped the run
    pub failure: Option<Diagnostic>
}

impl CompileReport {
    pub fn passed(&self) -> bool {
        return self.failure.is_none() && self.program.is_some();
    }

    // Every diagnostic of the run, illegal characters first
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut out: Vec<Diagnostic> = self.lex_diagnostics.to_owned();
        out.extend(self.failure.iter().cloned());
        return out;
    }

    pub fn into_result(self) -> Result<Program, Vec<Diagnostic>> {
        let diagnostics: Vec<Diagnostic> = self.diagnostics();
        return match (self.failure, self.program) {
            (None, Some(program)) => Ok(program),
            _ => Err(diagnostics)
        };
    }
}

/// The state of a single compilation: the stages and the symbol table they
/// fill in. A context is built for one source string and consumed by
/// [`CompilationContext::run`], so nothing carries over between runs.
pub struct CompilationContext {
    logger: StageLogger,
    lexer_verbose: bool,
    parser: Parser,
    semantic_analyzer: SemanticAnalyzer
}

impl CompilationContext {
    pub fn new(config: &CompilerConfig) -> Self {
        return CompilationContext {
            logger: StageLogger::new(LogSources::Compiler, config.is_verbose(LogSources::Compiler)),
            lexer_verbose: config.is_verbose(LogSources::Lexer),
            parser: Parser::new().with_verbose(config.is_verbose(LogSources::Parser)),
            semantic_analyzer: SemanticAnalyzer::new()
                .with_verbose(config.is_verbose(LogSources::SemanticAnalyzer))
                .with_strict_references(config.strict_references)
        };
    }

    pub fn run(mut self, source_code: &str) -> CompileReport {
        self.logger.info(String::from("Compile called"));

        let lex_output: LexOutput = lexer::lex_with(Lexer::new(source_code).with_verbose(self.lexer_verbose));
        self.logger.info(format!(
            "Lexer produced {} token(s) with {} illegal character(s)",
            lex_output.tokens.len(),
            lex_output.diagnostics.len()
        ));

        // Illegal characters are dropped and the parser gets whatever is left
        let mut report: CompileReport = CompileReport {
            tokens: lex_output.tokens,
            lex_diagnostics: lex_output.diagnostics,
            program: None,
            symbol_table: SymbolTable::new(),
            failure: None
        };

        let program: Program = match self.parser.parse_program(&report.tokens) {
            Ok(program) => program,
            Err(e) => {
                report.failure = Some(e);
                self.logger.error(String::from("Compilation stopped by a syntax error"));
                return report;
            }
        };

        let analysis_res: Result<(), Diagnostic> = self.semantic_analyzer.analyze_program(&program);
        report.program = Some(program);
        report.symbol_table = self.semantic_analyzer.symbol_table;

        match analysis_res {
            Ok(()) => self.logger.info(String::from("Semantic analysis passed.")),
            Err(e) => {
                report.failure = Some(e);
                self.logger.error(String::from("Semantic analysis failed."));
            }
        }

        return report;
    }
}

/// A reusable front end. Each call builds its own [`CompilationContext`], so
/// one compiler can be shared between callers.
#[derive (Debug, Clone, Default)]
pub struct Compiler {
    config: CompilerConfig
}

impl Compiler {
    pub fn new(config: CompilerConfig) -> Self {
        return Compiler {
            config
        };
    }

    pub fn config(&self) -> &CompilerConfig {
        return &self.config;
    }

    pub fn run(&self, source_code: &str) -> CompileReport {
        return CompilationContext::new(&self.config).run(source_code);
    }

    pub fn compile(&self, source_code: &str) -> Result<Program, Vec<Diagnostic>> {
        return self.run(source_code).into_result();
    }
}

// Compiles the source with the default settings
pub fn compile(source_code: &str) -> Result<Program, Vec<Diagnostic>> {
    return Compiler::default().compile(source_code);
}
