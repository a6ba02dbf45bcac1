//! Check command implementation.
//!
//! Runs every input through the parser, renders lexical diagnostics with a
//! source snippet, and fails when any file has errors (or warnings, with
//! `--deny-warnings`).

use std::path::{Path, PathBuf};

use somc_lex::Lexer;
use somc_par::Parser;
use somc_util::{Handler, Level, SourceMap};

use crate::commands::common::{error_messages, read_source, render_diagnostic};
use crate::commands::traits::Command;
use crate::config::{CheckConfig, Config};
use crate::error::{Result, SomtError};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source files to check.
    pub files: Vec<PathBuf>,
    /// Treat warnings as failures.
    pub deny_warnings: bool,
}

/// Diagnostic counts for one checked file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileReport {
    /// Tokens consumed before end of input.
    pub tokens: usize,
    /// Error diagnostics.
    pub errors: usize,
    /// Warning diagnostics.
    pub warnings: usize,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        if self.args.files.is_empty() {
            return Err(SomtError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }

        let settings = self.effective_config();
        let mut map = SourceMap::new();
        let mut errors = 0;
        let mut warnings = 0;

        for path in &self.args.files {
            let report = self.check_file(&mut map, path)?;
            errors += report.errors;
            warnings += report.warnings;
        }

        if self.args.verbose {
            eprintln!(
                "checked {} file(s): {} error(s), {} warning(s)",
                self.args.files.len(),
                errors,
                warnings
            );
        }

        if errors > 0 || (settings.deny_warnings && warnings > 0) {
            return Err(SomtError::CheckFailed { errors, warnings });
        }
        Ok(())
    }

    /// Check a single file and print its diagnostics and verdict.
    pub fn check_file(&self, map: &mut SourceMap, path: &Path) -> Result<FileReport> {
        let source = read_source(path)?;
        let name = path.display().to_string();
        let file_id = map.add_file(name.clone(), source.as_str());

        let handler = Handler::new();
        let result = {
            let mut parser = Parser::new(Lexer::new(&source, &handler).with_file_id(file_id));
            parser.parse()
        };

        let diagnostics = handler.take();
        for diagnostic in &diagnostics {
            eprintln!("{}", render_diagnostic(map, diagnostic));
        }

        let mut report = FileReport {
            errors: count_level(&diagnostics, Level::Error),
            warnings: count_level(&diagnostics, Level::Warning),
            ..FileReport::default()
        };

        match result {
            Ok(tokens) => {
                report.tokens = tokens;
                println!("{}: ok ({} tokens)", name, tokens);
            }
            Err(err) => {
                eprintln!("error[{}]: {}: {}", err.code(), name, err);
            }
        }

        tracing::debug!(
            file = %name,
            errors = report.errors,
            warnings = report.warnings,
            "checked file"
        );
        Ok(report)
    }

    /// Get the effective check configuration.
    pub fn effective_config(&self) -> CheckConfig {
        let mut config = self.config.check.clone();
        config.deny_warnings |= self.args.deny_warnings;
        config
    }
}

fn count_level(diagnostics: &[somc_util::Diagnostic], level: Level) -> usize {
    diagnostics.iter().filter(|d| d.level == level).count()
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = ();

    fn with_config(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    let command = CheckCommand::with_config(args, config);
    tracing::debug!(command = CheckCommand::name(), "running");
    command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_check_file_clean() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_source(&temp_dir, "Hello.som", "Hello = ( run = ( ^self ) )");

        let command = CheckCommand::new(CheckArgs::default());
        let mut map = SourceMap::new();
        let report = command.check_file(&mut map, &path).unwrap();

        assert_eq!(
            report,
            FileReport {
                tokens: 10,
                errors: 0,
                warnings: 0,
            }
        );
        assert_eq!(map.file_count(), 1);
    }

    #[test]
    fn test_check_file_with_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_source(&temp_dir, "Bad.som", "x := $ 'open");

        let command = CheckCommand::new(CheckArgs::default());
        let report = command.check_file(&mut SourceMap::new(), &path).unwrap();
        assert_eq!(report.errors, 2);
        assert_eq!(report.tokens, 0);
    }

    #[test]
    fn test_run_fails_on_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_source(&temp_dir, "Bad.som", "x ! y");

        let args = CheckArgs {
            files: vec![path],
            ..CheckArgs::default()
        };
        let err = CheckCommand::new(args).run().unwrap_err();
        assert!(matches!(
            err,
            SomtError::CheckFailed {
                errors: 1,
                warnings: 0
            }
        ));
    }

    #[test]
    fn test_warnings_pass_unless_denied() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_source(&temp_dir, "Warn.som", r"s := 'a\qb'");

        let args = CheckArgs {
            files: vec![path.clone()],
            ..CheckArgs::default()
        };
        assert!(CheckCommand::new(args).run().is_ok());

        let args = CheckArgs {
            files: vec![path.clone()],
            deny_warnings: true,
            ..CheckArgs::default()
        };
        assert!(matches!(
            CheckCommand::new(args).run(),
            Err(SomtError::CheckFailed { warnings: 1, .. })
        ));

        let mut config = Config::default();
        config.check.deny_warnings = true;
        let args = CheckArgs {
            files: vec![path],
            ..CheckArgs::default()
        };
        assert!(CheckCommand::with_config(args, config).run().is_err());
    }

    #[test]
    fn test_run_missing_file() {
        let args = CheckArgs {
            files: vec![PathBuf::from("/nonexistent/Missing.som")],
            ..CheckArgs::default()
        };
        assert!(matches!(
            CheckCommand::new(args).run(),
            Err(SomtError::Validation(_))
        ));
    }

    #[test]
    fn test_run_without_files() {
        let command = CheckCommand::new(CheckArgs::default());
        assert!(matches!(command.run(), Err(SomtError::Validation(_))));
    }
}
