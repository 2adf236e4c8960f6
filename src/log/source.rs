use crate::error::AnalyzeError;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const READ_BUFFER_BYTES: usize = 64 * 1024;

/// True when the file name marks a gzip-compressed log.
pub fn is_compressed(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Open a log file for line-by-line streaming.
///
/// `.gz` files go through a gzip decoder, everything else is read as-is. The
/// caller gets UTF-8 lines; invalid UTF-8 surfaces as an `io::Error` from
/// the iterator.
pub fn open_lines(path: &Path) -> Result<Box<dyn BufRead>, AnalyzeError> {
    let file = File::open(path).map_err(|e| AnalyzeError::source_read(path, e))?;

    let reader: Box<dyn BufRead> = if is_compressed(path) {
        Box::new(BufReader::with_capacity(
            READ_BUFFER_BYTES,
            MultiGzDecoder::new(file),
        ))
    } else {
        Box::new(BufReader::with_capacity(READ_BUFFER_BYTES, file))
    };

    Ok(reader)
}
