use std::io::{self, Write};
use serde_json::json;
use crate::enums::output_format::OutputFormat;
use crate::structs::mutation_result::MutationResult;
use crate::structs::run_summary::RunSummary;

/// Writes per-file outcomes and the final summary.
pub struct ResultLogger<W: Write> {
    out: W,
    format: OutputFormat,
    verbose: bool,
}

impl ResultLogger<io::Stdout> {
    /// Logger writing to the process stdout.
    pub fn stdout(format: OutputFormat, verbose: bool) -> Self {
        Self::new(io::stdout(), format, verbose)
    }
}

impl<W: Write> ResultLogger<W> {
    /// Logger writing to any sink.
    pub const fn new(out: W, format: OutputFormat, verbose: bool) -> Self {
        Self { out, format, verbose }
    }

    /// Give back the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Report one file. Failures are also logged at error level.
    pub fn print_result(&mut self, result: &MutationResult) -> io::Result<()> {
        if !result.is_success() {
            log::error!("❌ {}", result.output);
        }

        match self.format {
            OutputFormat::Json => {
                let line = serde_json::to_string(result).map_err(io::Error::other)?;
                writeln!(self.out, "{line}")
            }
            OutputFormat::Text if self.verbose => self.print_block(result),
            OutputFormat::Text => Ok(()),
        }
    }

    fn print_block(&mut self, result: &MutationResult) -> io::Result<()> {
        let title = format!("{}:", result.path.display());

        writeln!(self.out)?;
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{}", "-".repeat(title.chars().count()))?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", result.output)?;
        writeln!(self.out)
    }

    /// Log the totals; in JSON mode also print them as a final object.
    pub fn print_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        log::info!(
            "📊 {} files: {} replaced, {} unchanged, {} dry run, {} failed",
            summary.files_processed, summary.replaced, summary.unchanged, summary.dry_run, summary.failed
        );

        if self.format == OutputFormat::Json {
            writeln!(self.out, "{}", json!({ "summary": summary }))?;
        }

        self.out.flush()
    }
}
