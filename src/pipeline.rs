//! Single-pass driver: stream a log file through the decoder into the
//! aggregate, then compile the ranked report rows.

use crate::error::AnalyzeError;
use crate::log::{self, Decoded, LineDecoder};
use crate::model::{self, Aggregate, ReportRow};
use std::io::BufRead;
use std::path::Path;

/// Parse `path` and return at most `limit` report rows.
///
/// `limit` is validated before the file is touched. Lines that do not decode
/// are skipped and not counted; a file with no decodable lines yields an
/// empty vector. Read, decompression and UTF-8 failures abort the run.
pub fn run(path: &Path, limit: usize) -> Result<Vec<ReportRow>, AnalyzeError> {
    if limit == 0 {
        return Err(AnalyzeError::InvalidLimit(0));
    }

    let decoder = LineDecoder::new()?;
    let reader = log::open_lines(path)?;
    let aggregate = aggregate_lines(reader, &decoder, path)?;

    if aggregate.is_empty() {
        tracing::debug!(path = %path.display(), "no decodable lines");
        return Ok(Vec::new());
    }

    Ok(model::compile(&aggregate, limit))
}

/// Feed every line of `reader` through `decoder` into a fresh aggregate.
pub fn aggregate_lines(
    reader: impl BufRead,
    decoder: &LineDecoder,
    path: &Path,
) -> Result<Aggregate, AnalyzeError> {
    let mut aggregate = Aggregate::new();
    let mut rejected = 0u64;

    for line in reader.lines() {
        let line = line.map_err(|e| AnalyzeError::source_read(path, e))?;
        match decoder.decode(&line) {
            Decoded::Record(record) => aggregate.accept(record),
            Decoded::Rejected => rejected += 1,
        }
    }

    tracing::debug!(
        path = %path.display(),
        accepted = aggregate.totals().total_count,
        rejected,
        urls = aggregate.len(),
        "log file aggregated"
    );

    Ok(aggregate)
}
