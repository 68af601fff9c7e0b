//! Tokens command implementation.
//!
//! Scans each input file and prints its token stream, as text or JSON.
//! Illegal tokens stay in the stream and are also reported as diagnostics.

use std::io::Write;
use std::path::{Path, PathBuf};

use idlc_lex::{tokenize_with_options, LexerOptions, Token};
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{read_source, report_illegal_tokens, OutputFormat};
use crate::config::Config;
use crate::error::{IdltError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Input files to scan.
    pub files: Vec<PathBuf>,
    /// Output format override.
    pub format: Option<String>,
    /// Prefix each text line with `line:column`.
    pub spans: bool,
    /// Enable strict keyword-case checking.
    pub strict: bool,
}

/// One token as written in JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    text: &'a str,
    start: usize,
    end: usize,
    line: u32,
    column: u32,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind.name(),
            text: &token.text,
            start: token.span.start,
            end: token.span.end,
            line: token.span.line,
            column: token.span.column,
        }
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Create a new TokensCommand.
    pub fn new(args: TokensArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let format = self.output_format()?;
        let options = self.config.lexer.options(self.args.strict);
        let show_spans = self.args.spans || self.config.output.show_spans;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let mut errors = 0;

        for path in &self.args.files {
            errors += self.scan_file(path, options, format, show_spans, &mut out)?;
        }
        out.flush()?;

        if errors > 0 {
            return Err(IdltError::Lexical(format!("{} illegal token(s)", errors)));
        }
        Ok(())
    }

    /// Effective output format: the flag, else the configuration.
    fn output_format(&self) -> Result<OutputFormat> {
        let name = self
            .args
            .format
            .as_deref()
            .unwrap_or(&self.config.output.format);
        name.parse()
    }

    fn scan_file(
        &self,
        path: &Path,
        options: LexerOptions,
        format: OutputFormat,
        show_spans: bool,
        out: &mut impl Write,
    ) -> Result<usize> {
        let file = read_source(path)?;
        let tokens = tokenize_with_options(file.content(), options);
        debug!(file = %path.display(), tokens = tokens.len(), "scanned");

        if self.args.files.len() > 1 && format == OutputFormat::Text {
            writeln!(out, "==> {} <==", file.name())?;
        }

        match format {
            OutputFormat::Text => write_text(out, &tokens, show_spans)?,
            OutputFormat::Json => write_json(out, &tokens)?,
        }

        let errors = report_illegal_tokens(&file, &tokens);
        debug!(file = %path.display(), errors, "reported diagnostics");
        Ok(errors)
    }
}

/// Write one `KIND 'text'` line per token.
fn write_text(out: &mut impl Write, tokens: &[Token], show_spans: bool) -> Result<()> {
    for token in tokens {
        if show_spans {
            writeln!(out, "{} {}", token.span, token)?;
        } else {
            writeln!(out, "{}", token)?;
        }
    }
    Ok(())
}

/// Write the tokens as a pretty-printed JSON array.
fn write_json(out: &mut impl Write, tokens: &[Token]) -> Result<()> {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs, config: Config) -> Result<()> {
    TokensCommand::new(args, config).run()
}
