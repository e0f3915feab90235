use std::io::{self, Write};

use crate::bench::BenchReport;
use crate::error::{BenchError, Result};

/// Write the run summary as a single compact JSON line on stdout.
///
/// The line is fully serialized before anything is written.
pub fn output_report(report: &BenchReport) -> Result<()> {
    let line = serde_json::to_string(report)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    stdout.flush()?;
    Ok(())
}

/// Print an error diagnostic on stderr
pub fn output_error(err: &BenchError) {
    eprintln!("error: {} [{}]", err, err.error_code());
}
