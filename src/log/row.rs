/// A single request extracted from one access log line.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub url: String,
    pub request_time: f64,
}

/// Outcome of decoding one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Record(LogRecord),
    Rejected,
}

#[cfg(test)]
impl Decoded {
    pub fn into_record(self) -> Option<LogRecord> {
        match self {
            Decoded::Record(record) => Some(record),
            Decoded::Rejected => None,
        }
    }
}
