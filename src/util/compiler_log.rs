use std::fmt;

use log::Level;

// Defines the type of logs
// https://stackoverflow.com/questions/69015213/how-can-i-display-an-enum-in-lowercase
#[derive (Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum (serialize_all = "UPPERCASE")]
pub enum LogTypes {
    Info,
    Warning,
    Error,
    Debug
}

impl LogTypes {
    // The log facade level each type is forwarded at
    fn level(&self) -> Level {
        return match self {
            LogTypes::Info => Level::Info,
            LogTypes::Warning => Level::Warn,
            LogTypes::Error => Level::Error,
            LogTypes::Debug => Level::Debug
        };
    }
}

// Defines where the logs can come from
#[derive (Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum (serialize_all = "UPPERCASE")]
pub enum LogSources {
    Compiler,
    Lexer,
    Parser,
    SemanticAnalyzer
}

impl LogSources {
    // The target string handed to the log facade so backends can filter per stage
    pub fn target(&self) -> &'static str {
        return match self {
            LogSources::Compiler => "varlang::compiler",
            LogSources::Lexer => "varlang::lexer",
            LogSources::Parser => "varlang::parser",
            LogSources::SemanticAnalyzer => "varlang::semantic_analyzer"
        };
    }
}

// Function that builds the text of a log line
pub fn format_log(log_type: LogTypes, src: LogSources, msg: &str) -> String {
    return format!("[{} - {}]: {}", log_type, src, msg);
}

// Each stage of the compiler owns one of these and sends everything through it
#[derive (Debug, Clone, Copy)]
pub struct StageLogger {
    // Where the logs are coming from
    src: LogSources,

    // Debug logs are only emitted in verbose mode
    verbose: bool
}

impl StageLogger {
    pub fn new(src: LogSources, verbose: bool) -> Self {
        return StageLogger {
            src,
            verbose
        };
    }

    pub fn source(&self) -> LogSources {
        return self.src;
    }

    pub fn is_verbose(&self) -> bool {
        return self.verbose;
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    // Function that logs a message with the given type
    pub fn log(&self, log_type: LogTypes, msg: String) {
        // Simple mode drops the debug output
        if log_type == LogTypes::Debug && !self.verbose {
            return;
        }

        log::log!(target: self.src.target(), log_type.level(), "{}", format_log(log_type, self.src, &msg));
    }

    pub fn info(&self, msg: String) {
        self.log(LogTypes::Info, msg);
    }

    pub fn warning(&self, msg: String) {
        self.log(LogTypes::Warning, msg);
    }

    pub fn error(&self, msg: String) {
        self.log(LogTypes::Error, msg);
    }

    // Takes the arguments unformatted so simple mode never builds the string
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        if !self.verbose {
            return;
        }
        self.log(LogTypes::Debug, args.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_log() {
        assert_eq!(format_log(LogTypes::Error, LogSources::Parser, "Parser failed"), "[ERROR - PARSER]: Parser failed");
        assert_eq!(format_log(LogTypes::Warning, LogSources::SemanticAnalyzer, "x"), "[WARNING - SEMANTICANALYZER]: x");
    }

    // Formatting this value is a test failure
    struct NeverFormatted;

    impl fmt::Display for NeverFormatted {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            panic!("Debug arguments were formatted in simple mode");
        }
    }

    #[test]
    fn test_simple_mode_skips_debug_formatting() {
        let logger: StageLogger = StageLogger::new(LogSources::Parser, false);
        logger.debug(format_args!("{}", NeverFormatted));
    }

    #[test]
    fn test_verbose_toggle() {
        let mut logger: StageLogger = StageLogger::new(LogSources::Lexer, false);
        assert!(!logger.is_verbose());
        logger.set_verbose(true);
        assert!(logger.is_verbose());
        assert_eq!(logger.source(), LogSources::Lexer);
        assert_eq!(logger.source().target(), "varlang::lexer");
    }
}
