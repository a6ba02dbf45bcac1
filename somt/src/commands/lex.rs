//! Lex command implementation.
//!
//! Dumps the token stream of each input file, either as text lines or as a
//! JSON array. Lexical diagnostics go to stderr and never fail the command;
//! use `somt check` for a pass/fail verdict.

use std::path::PathBuf;

use serde::Serialize;
use somc_lex::{Lexer, Token};
use somc_util::{Handler, SourceMap};

use crate::commands::common::{
    error_messages, printable, read_source, render_diagnostic, OutputFormat,
};
use crate::commands::traits::Command;
use crate::config::{Config, LexConfig};
use crate::error::{Result, SomtError};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source files to tokenize.
    pub files: Vec<PathBuf>,
    /// Output format, overriding the configuration.
    pub format: Option<OutputFormat>,
    /// Print `@line:col` after each token.
    pub spans: bool,
}

/// One token as written in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    /// File the token came from.
    pub file: String,
    /// Upper-case kind name, e.g. `KEYWORD_SEQUENCE`.
    pub kind: &'static str,
    /// Token literal.
    pub literal: String,
    /// Start byte offset.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

impl TokenRecord {
    fn new(file: &str, token: &Token) -> Self {
        Self {
            file: file.to_string(),
            kind: token.kind.name(),
            literal: token.literal.clone(),
            start: token.span.start,
            end: token.span.end,
            line: token.span.line,
            column: token.span.column,
        }
    }
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
    config: Config,
}

impl LexCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        if self.args.files.is_empty() {
            return Err(SomtError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }

        let settings = self.effective_config();
        let mut map = SourceMap::new();
        let mut records = Vec::new();
        let multiple = self.args.files.len() > 1;

        for path in &self.args.files {
            let source = read_source(path)?;
            let name = path.display().to_string();
            let file_id = map.add_file(name.clone(), source.as_str());

            let handler = Handler::new();
            let tokens: Vec<Token> = Lexer::new(&source, &handler)
                .with_file_id(file_id)
                .collect();
            tracing::debug!(file = %name, tokens = tokens.len(), "lexed file");

            match settings.format {
                OutputFormat::Text => {
                    if multiple {
                        println!("# {}", name);
                    }
                    for token in &tokens {
                        println!("{}", format_token(token, settings.show_spans));
                    }
                }
                OutputFormat::Json => {
                    records.extend(tokens.iter().map(|token| TokenRecord::new(&name, token)));
                }
            }

            for diagnostic in handler.take() {
                eprintln!("{}", render_diagnostic(&map, &diagnostic));
            }

            if self.args.verbose {
                eprintln!("{}: {} tokens", name, tokens.len());
            }
        }

        if settings.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }

        Ok(())
    }

    /// Get the effective lex configuration.
    pub fn effective_config(&self) -> LexConfig {
        let mut config = self.config.lex.clone();

        if let Some(format) = self.args.format {
            config.format = format;
        }

        config.show_spans |= self.args.spans;

        config
    }
}

/// Format one token as a text dump line.
pub fn format_token(token: &Token, show_spans: bool) -> String {
    let mut line = token.kind.name().to_string();
    if !token.literal.is_empty() {
        line.push(' ');
        line.push_str(&printable(&token.literal));
    }
    if show_spans {
        line.push_str(&format!(" @{}:{}", token.span.line, token.span.column));
    }
    line
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = ();

    fn with_config(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "lex"
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs, config: Config) -> Result<()> {
    let command = LexCommand::with_config(args, config);
    tracing::debug!(command = LexCommand::name(), "running");
    command.execute()
}
