use crate::varlang::diagnostic::Stage;

// Basic struct for a sample program
#[derive (Debug)]
pub struct Test {
    pub test_type: TestType,
    pub test_name: String,
    pub test_code: String,

    // The stage expected to stop the program, or None if it should pass
    pub expected_failure: Option<Stage>,

    // How many illegal characters the lexer should report
    pub illegal_characters: usize
}

// Basic test types
#[derive (Debug, PartialEq, strum::Display)]
#[strum (serialize_all = "UPPERCASE")]
pub enum TestType {
    Lex,
    Parse,
    SemanticAnalysis,
    Compile
}

impl Test {
    fn new(test_type: TestType, test_name: &str, test_code: &str, expected_failure: Option<Stage>, illegal_characters: usize) -> Self {
        return Test {
            test_type,
            test_name: String::from(test_name),
            test_code: String::from(test_code),
            expected_failure,
            illegal_characters
        };
    }
}

// Function that returns a vector of all of the sample programs
pub fn get_tests() -> Vec<Test> {
    let tests: Vec<Test> = vec![
        Test::new(TestType::Compile, "Reference program", "var x; var y; x = 10; y = (x + 5) * 2;", None, 0),
        Test::new(TestType::Compile, "Multi-line program", "var total;\nvar rate;\nrate = 3;\ntotal = (rate * 4) - 2;\n", None, 0),
        Test::new(TestType::Compile, "Bare expressions", "var a; a; 1 + 2; (a * 3) / 4;", None, 0),
        Test::new(TestType::Lex, "Keyword prefixes", "var variable; var var_2; variable = var_2;", None, 0),
        Test::new(TestType::Lex, "Skipped illegal character", "var x#; x = 1;", None, 1),
        Test::new(TestType::Lex, "Illegal character splits an expression", "var x; x = 1 @ 2;", Some(Stage::Parser), 1),
        Test::new(TestType::Lex, "Only garbage", "$%^&", Some(Stage::Parser), 4),
        Test::new(TestType::Parse, "Chained sum", "var y; y = 1 + 2 + 3;", Some(Stage::Parser), 0),
        Test::new(TestType::Parse, "Chained product", "var y; y = 2 * 3 * 4;", Some(Stage::Parser), 0),
        Test::new(TestType::Parse, "Parenthesized chain", "var y; y = (1 + 2) + 3;", None, 0),
        Test::new(TestType::Parse, "Missing final semicolon", "var x; x = 1", Some(Stage::Parser), 0),
        Test::new(TestType::Parse, "Unclosed parenthesis", "var x; x = (1 + 2;", Some(Stage::Parser), 0),
        Test::new(TestType::Parse, "Empty program", "", Some(Stage::Parser), 0),
        Test::new(TestType::SemanticAnalysis, "Duplicate declaration", "var x; var x;", Some(Stage::SemanticAnalyzer), 0),
        Test::new(TestType::SemanticAnalysis, "Undeclared assignment", "y = 5;", Some(Stage::SemanticAnalyzer), 0),
        Test::new(TestType::SemanticAnalysis, "Assignment before declaration", "x = 1; var x;", Some(Stage::SemanticAnalyzer), 0),
        Test::new(TestType::SemanticAnalysis, "Undeclared name in a value", "var x; x = y + 1;", None, 0)
    ];

    return tests;
}
