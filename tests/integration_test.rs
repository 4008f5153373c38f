// Integration tests for the varlang front end

use varlang::util::test::{get_tests, Test, TestType};
use varlang::{compile, lexer, BinaryOperator, CompileReport, Compiler, CompilerConfig, Diagnostic, Expr, LexOutput, Program, Stage, Statement, MAX_NESTING_DEPTH, lex};

#[test]
fn test_reference_scenario() {
    let source = "var x; var y; x = 10; y = (x + 5) * 2;";

    let report: CompileReport = Compiler::default().run(source);
    assert!(report.passed(), "Compilation failed: {:?}", report.diagnostics());
    assert_eq!(report.program.as_ref().map(|program| program.len()), Some(4));
    assert_eq!(report.symbol_table.names(), vec!["x".to_string(), "y".to_string()]);
}

#[test]
fn test_statement_shapes() {
    let program: Program = compile("var x;").expect("Compilation failed");
    assert!(matches!(&program.statements[..], [Statement::VarDecl { name, .. }] if name == "x"));

    let program: Program = compile("var x; x = 10;").expect("Compilation failed");
    assert!(matches!(&program.statements[1], Statement::Assign { name, value: Expr::Literal(10), .. } if name == "x"));

    let program: Program = compile("var x; x - 1;").expect("Compilation failed");
    assert!(matches!(
        &program.statements[1],
        Statement::ExprStatement(Expr::BinaryOp { op: BinaryOperator::Subtract, .. })
    ));
}

#[test]
fn test_grammar_arity_limit() {
    let diagnostics: Vec<Diagnostic> = compile("var y; y = 1 + 2 + 3;").expect_err("Chained sums should not parse");
    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(diagnostics[0], Diagnostic::SyntaxError { .. }));
}

#[test]
fn test_duplicate_declaration() {
    let diagnostics: Vec<Diagnostic> = compile("var x; var x;").expect_err("Duplicate should fail");
    assert!(matches!(&diagnostics[..], [Diagnostic::DuplicateDeclaration { name, .. }] if name == "x"));
}

#[test]
fn test_undeclared_use() {
    let diagnostics: Vec<Diagnostic> = compile("y = 5;").expect_err("Undeclared assignment should fail");
    assert!(matches!(&diagnostics[..], [Diagnostic::UndeclaredVariable { name, .. }] if name == "y"));
}

#[test]
fn test_illegal_character_tolerance() {
    let source = "var x; x = 1 @ 2;";

    let lexed = lexer::lex(source);
    assert_eq!(lexed.diagnostics.len(), 1);
    assert!(matches!(lexed.diagnostics[0], Diagnostic::IllegalCharacter { character: '@', .. }));

    let diagnostics: Vec<Diagnostic> = compile(source).expect_err("Adjacent numbers should not parse");
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].stage(), Stage::Lexer);
    assert_eq!(diagnostics[1].stage(), Stage::Parser);
}

#[test]
fn test_deeply_nested_program_returns_a_result() {
    let depth: usize = 100_000;
    let source: String = format!("var x; x = {}1{};", "(".repeat(depth), ")".repeat(depth));

    let diagnostics: Vec<Diagnostic> = compile(&source).expect_err("Nesting past the limit should fail");
    assert!(matches!(&diagnostics[..], [Diagnostic::NestingTooDeep { limit: MAX_NESTING_DEPTH, .. }]));

    let at_limit: String = format!("var x; x = {}1{};", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    let program: Program = compile(&at_limit).expect("Nesting at the limit should compile");
    assert_eq!(program.to_string(), "var x; x = 1;");
}

#[test]
fn test_lexes_a_long_line() {
    let lexed: LexOutput = lex(&"var a; ".repeat(40_000));
    assert_eq!(lexed.tokens.len(), 120_000);
    assert_eq!(lexed.tokens[119_999].position, (1, 40_000 * 7 - 1));
    assert!(compile(&"1; ".repeat(50_000)).is_ok());
}

#[test]
fn test_idempotence() {
    let source = "var a; var b; a = 3; b = a * (a - 1);";
    let compiler: Compiler = Compiler::default();

    let first: CompileReport = compiler.run(source);
    let second: CompileReport = compiler.run(source);
    assert_eq!(first, second);
    assert_eq!(compile(source), compile(source));
}

#[test]
fn test_runs_do_not_share_symbols() {
    let compiler: Compiler = Compiler::default();
    assert!(compiler.compile("var x;").is_ok());
    // A second run declaring x again is not a duplicate
    assert!(compiler.compile("var x;").is_ok());
    // Nor does x survive into a run that never declares it
    assert!(compiler.compile("x = 1;").is_err());
}

#[test]
fn test_concurrent_compilations() {
    let compiler: Compiler = Compiler::new(CompilerConfig::new().strict_references(true));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let compiler: &Compiler = &compiler;
                scope.spawn(move || compiler.compile(&format!("var v{i}; v{i} = {i} * 2;")))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().expect("Compiler thread panicked").is_ok());
        }
    });
}

#[test]
fn test_display_round_trip() {
    let program: Program = compile("var x; var y; x = 10; y = (x + 5) * 2; x / 2;").expect("Compilation failed");
    let rendered: String = program.to_string();
    assert_eq!(rendered, "var x; var y; x = 10; y = ((x + 5) * 2); (x / 2);");

    let reparsed: Program = compile(&rendered).expect("Rendered program should compile");
    assert_eq!(reparsed.to_string(), rendered);
}

#[test]
fn test_tree_text() {
    let program: Program = compile("var x; x = 1 + 2;").expect("Compilation failed");
    assert_eq!(program.create_text(), "<Program>\n-<VarDecl>\n--[x]\n-<Assign>\n--[x]\n--<Add>\n---[1]\n---[2]\n");
    assert!(program.to_dot().contains("Add"));
}

#[test]
fn test_sample_catalog() {
    let tests: Vec<Test> = get_tests();
    assert!(tests.iter().any(|test| test.test_type == TestType::SemanticAnalysis));

    for test in tests.iter() {
        let report: CompileReport = Compiler::default().run(&test.test_code);

        assert_eq!(
            report.failure.as_ref().map(|failure| failure.stage()),
            test.expected_failure,
            "[{}] - {}: {:?}",
            test.test_type,
            test.test_name,
            report.diagnostics()
        );
        assert_eq!(report.lex_diagnostics.len(), test.illegal_characters, "[{}] - {}", test.test_type, test.test_name);
    }
}
