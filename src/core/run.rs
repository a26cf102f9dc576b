use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use crate::core::counter::{Counter, CounterError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Counter(#[from] CounterError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Summary written by `--json` once every increment has succeeded.
#[derive(Serialize, Debug)]
pub struct Report<'a> {
    pub counter: &'a Counter,
    pub values: Vec<i64>,
}

/// Increments `counter` `times` times and writes the results to `out`.
///
/// Plain output writes each value as soon as it is produced, so values
/// before an overflow are still visible. JSON output is all or nothing.
#[instrument(name = "run_counter", level = "info", skip(counter, out))]
pub fn run_counter<W: Write>(
    counter: &mut Counter,
    times: u64,
    json: bool,
    out: &mut W,
) -> Result<(), RunError> {
    let mut values = Vec::new();
    for _ in 0..times {
        let value = counter.increment()?;
        if json {
            values.push(value);
        } else {
            writeln!(out, "{}", value)?;
        }
    }

    if json {
        let report = Report { counter: &*counter, values };
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
