//! Aggregation model: per-URL accumulators plus global totals, and the
//! compiled report rows built from them.

pub mod report;

pub use report::{ReportRow, compile, median, round3};

use crate::log::LogRecord;
use std::collections::HashMap;

/// Running statistics for one URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlAccumulator {
    pub count: u64,
    /// Request times in encounter order.
    pub times: Vec<f64>,
    pub time_sum: f64,
}

impl UrlAccumulator {
    fn push(&mut self, request_time: f64) {
        self.count += 1;
        self.times.push(request_time);
        self.time_sum += request_time;
    }

    pub fn time_max(&self) -> f64 {
        self.times.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlobalTotals {
    pub total_count: u64,
    pub total_time: f64,
}

/// Everything accumulated over one pass of a log file.
///
/// URLs are kept in the order they were first seen so that ranking ties are
/// broken deterministically.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    index: HashMap<String, usize>,
    entries: Vec<(String, UrlAccumulator)>,
    totals: GlobalTotals,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, record: LogRecord) {
        let LogRecord { url, request_time } = record;

        let slot = match self.index.get(&url) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(url.clone(), slot);
                self.entries.push((url, UrlAccumulator::default()));
                slot
            }
        };
        self.entries[slot].1.push(request_time);

        self.totals.total_count += 1;
        self.totals.total_time += request_time;
    }

    pub fn totals(&self) -> GlobalTotals {
        self.totals
    }

    pub fn is_empty(&self) -> bool {
        self.totals.total_count == 0
    }

    /// Number of distinct URLs seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Accumulators in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UrlAccumulator)> {
        self.entries.iter().map(|(url, acc)| (url.as_str(), acc))
    }
}

#[cfg(test)]
impl Aggregate {
    pub fn get(&self, url: &str) -> Option<&UrlAccumulator> {
        self.index.get(url).map(|&slot| &self.entries[slot].1)
    }
}
