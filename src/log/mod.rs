//! Access log decoding: the fixed `ui_short` line grammar and the readers
//! that stream plain or gzip-compressed log files.

pub mod parse;
pub mod row;
pub mod source;

pub use parse::LineDecoder;
pub use row::{Decoded, LogRecord};
pub use source::open_lines;
