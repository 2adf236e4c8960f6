use crate::model::Aggregate;
use serde::Serialize;

/// One finished line of the report. Float fields are rounded to 3 places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub url: String,
    pub count: u64,
    pub count_perc: f64,
    pub time_sum: f64,
    pub time_perc: f64,
    pub time_avg: f64,
    pub time_max: f64,
    pub time_med: f64,
}

/// Round to 3 decimal places, half to even on the exact decimal value.
///
/// Goes through the float formatter rather than `x * 1000.0` so that values
/// like `0.0005` (stored slightly above the tie) are not pulled onto it.
pub fn round3(value: f64) -> f64 {
    format!("{:.3}", value).parse().unwrap_or(value)
}

/// Standard median: mean of the two middle values for even lengths.
/// Returns `None` for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Turn the accumulated state into ranked, truncated report rows.
///
/// Rows are ordered by `time_sum` descending; equal sums keep the order in
/// which their URLs first appeared. An empty aggregate yields no rows.
pub fn compile(aggregate: &Aggregate, limit: usize) -> Vec<ReportRow> {
    if aggregate.is_empty() {
        return Vec::new();
    }
    let totals = aggregate.totals();
    let total_count = totals.total_count as f64;

    let mut rows: Vec<ReportRow> = aggregate
        .iter()
        .map(|(url, acc)| {
            let count = acc.count as f64;
            ReportRow {
                url: url.to_string(),
                count: acc.count,
                count_perc: round3(count / total_count * 100.0),
                time_sum: round3(acc.time_sum),
                time_perc: round3(acc.time_sum / totals.total_time * 100.0),
                time_avg: round3(acc.time_sum / count),
                time_max: round3(acc.time_max()),
                time_med: round3(median(&acc.times).unwrap_or_default()),
            }
        })
        .collect();

    // `sort_by` is stable, so ties stay in encounter order.
    rows.sort_by(|a, b| b.time_sum.total_cmp(&a.time_sum));
    rows.truncate(limit);
    rows
}
