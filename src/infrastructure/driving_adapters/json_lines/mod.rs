//! JSON Lines Driver
//!
//! Reads one JSON balance request per input line and writes one JSON result
//! per line. Blank lines are skipped.

pub mod dto;

use std::io::{self, BufRead, Write};

use crate::application::use_cases::chains::ResolveChainInfoUseCase;
use crate::domain::models::balance::BalanceRequest;
use crate::shared::errors::ErrorResponse;

pub use dto::{ChainInfoDto, LineOutput};

/// Counts of processed lines
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub resolved: usize,
    pub failed: usize,
}

/// Resolve a single raw input line
///
/// Bytes that are not valid JSON (including invalid UTF-8) produce an
/// `INVALID_REQUEST` result rather than an error.
#[must_use]
pub fn handle_line(use_case: &ResolveChainInfoUseCase, line: &[u8]) -> LineOutput {
    let request: BalanceRequest = match serde_json::from_slice(line) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(error = %err, "Malformed request line");
            return LineOutput::Failed(ErrorResponse::new("INVALID_REQUEST", err.to_string()));
        }
    };

    match use_case.execute(&request.chain) {
        Ok(info) => LineOutput::Resolved(ChainInfoDto::new(request.address, &info)),
        Err(err) => LineOutput::Failed(ErrorResponse::from(&err)),
    }
}

/// Process every line of `input`, writing results to `output`
///
/// # Errors
///
/// Returns an I/O error only if reading input or writing output fails;
/// malformed lines are reported in the output.
pub fn run<R: BufRead, W: Write>(
    use_case: &ResolveChainInfoUseCase,
    input: R,
    mut output: W,
) -> io::Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (index, raw) in input.split(b'\n').enumerate() {
        let raw = raw?;
        let line = raw.strip_suffix(b"\r").unwrap_or(&raw);
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let span = tracing::debug_span!("line", line_number = index + 1);
        let _guard = span.enter();

        let result = handle_line(use_case, line);
        match result {
            LineOutput::Resolved(_) => summary.resolved += 1,
            LineOutput::Failed(_) => summary.failed += 1,
        }

        serde_json::to_writer(&mut output, &result)?;
        output.write_all(b"\n")?;
    }

    output.flush()?;
    Ok(summary)
}
