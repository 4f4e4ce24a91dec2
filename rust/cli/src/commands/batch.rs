//! Batch solve: one coin table per input line, one JSON report per output line.
//!
//! Input may be plain text or Zstandard-compressed (`.zst`). Lines that fail
//! to parse or solve are reported on stderr with their line number; the rest
//! of the file is still processed.

use crate::error::CliError;
use crate::io_utils::{ensure_parent_dir, read_text_auto};
use crate::ui;
use crate::validation::parse_batch_lines;
use royale_engine::GameReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Handle the batch command.
///
/// Reports go to `output` when given, otherwise to `out`. The summary goes to
/// `out` only when it cannot corrupt the JSONL stream.
pub fn handle_batch_command(
    input: &str,
    output: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(input).map_err(CliError::InvalidInput)?;
    let tables = parse_batch_lines(&content);

    let mut file_writer = match output {
        Some(path) => {
            let path = Path::new(path);
            ensure_parent_dir(path).map_err(CliError::InvalidInput)?;
            Some(BufWriter::new(File::create(path)?))
        }
        None => None,
    };

    let mut solved = 0usize;
    let mut failed = 0usize;
    for (line_no, parsed) in tables {
        let report = parsed.and_then(|coins| GameReport::solve(&coins).map_err(|e| e.to_string()));
        match report {
            Ok(report) => {
                let json = report.to_json().map_err(std::io::Error::other)?;
                match file_writer.as_mut() {
                    Some(w) => writeln!(w, "{}", json)?,
                    None => writeln!(out, "{}", json)?,
                }
                solved += 1;
            }
            Err(msg) => {
                debug!(line = line_no, error = %msg, "table skipped");
                ui::write_error(err, &format!("line {}: {}", line_no, msg))?;
                failed += 1;
            }
        }
    }

    if let Some(mut w) = file_writer {
        w.flush()?;
        writeln!(out, "Solved: {} tables", solved)?;
    } else {
        writeln!(err, "Solved: {} tables", solved)?;
    }

    if failed > 0 {
        return Err(CliError::InvalidInput(format!(
            "{} of {} tables failed",
            failed,
            solved + failed
        )));
    }
    Ok(())
}
