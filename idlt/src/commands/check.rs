//! Check command implementation.
//!
//! Scans input files without printing tokens, reports every illegal token
//! as a diagnostic and prints a one-line summary.

use std::path::PathBuf;

use idlc_lex::tokenize_with_options;
use tracing::{debug, info};

use crate::commands::common::{read_source, report_illegal_tokens};
use crate::config::Config;
use crate::error::{IdltError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Input files to check.
    pub files: Vec<PathBuf>,
    /// Enable strict keyword-case checking.
    pub strict: bool,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Create a new CheckCommand.
    pub fn new(args: CheckArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let options = self.config.lexer.options(self.args.strict);
        let mut errors = 0;

        for path in &self.args.files {
            let file = read_source(path)?;
            let tokens = tokenize_with_options(file.content(), options);
            let file_errors = report_illegal_tokens(&file, &tokens);
            debug!(file = %file.name(), tokens = tokens.len(), errors = file_errors, "checked");
            errors += file_errors;
        }

        println!("{}", summary(self.args.files.len(), errors));
        info!(files = self.args.files.len(), errors, "check finished");

        if errors > 0 {
            return Err(IdltError::Lexical(format!("{} illegal token(s)", errors)));
        }
        Ok(())
    }
}

/// Summary line: `<n> file(s) checked, <m> error(s)`.
fn summary(files: usize, errors: usize) -> String {
    format!("{} file(s) checked, {} error(s)", files, errors)
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    CheckCommand::new(args, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_summary_format() {
        assert_eq!(summary(2, 0), "2 file(s) checked, 0 error(s)");
    }

    #[test]
    fn test_check_clean_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "ok.idl", "module m { struct S { long x; }; };");
        let args = CheckArgs {
            files: vec![path],
            strict: false,
        };
        assert!(run_check(args, Config::default()).is_ok());
    }

    #[test]
    fn test_check_reports_lexical_errors() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bad.idl", "const double d = 3.56e;");
        let args = CheckArgs {
            files: vec![path],
            strict: false,
        };
        let result = run_check(args, Config::default());
        assert!(matches!(result, Err(IdltError::Lexical(_))));
    }

    #[test]
    fn test_check_strict_from_config() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "case.idl", "struct Module {};");
        let mut config = Config::default();
        config.lexer.strict_keyword_case = true;

        let args = CheckArgs {
            files: vec![path],
            strict: false,
        };
        assert!(matches!(
            run_check(args, config),
            Err(IdltError::Lexical(_))
        ));
    }

    #[test]
    fn test_check_missing_file() {
        let args = CheckArgs {
            files: vec![PathBuf::from("/nonexistent/a.idl")],
            strict: false,
        };
        assert!(matches!(
            run_check(args, Config::default()),
            Err(IdltError::FileOperation(_))
        ));
    }
}
