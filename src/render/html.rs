use crate::Result;
use crate::model::ReportRow;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Template file looked up in the data dir.
pub const TEMPLATE_FILE: &str = "report.html";

/// Placeholder replaced by the JSON array of rows.
pub const TABLE_PLACEHOLDER: &str = "$table_json";

/// Table sorting script the template links to; copied next to each report.
pub const TABLESORTER_JS: &str = "jquery.tablesorter.min.js";

/// Substitute the rows into `template`.
///
/// Plain string replacement rather than `format!()`: the template is full of
/// `{}` from JS and CSS.
pub fn render_html_report(template: &str, rows: &[ReportRow]) -> Result<String> {
    let json = serde_json::to_string(rows)?;
    Ok(template.replace(TABLE_PLACEHOLDER, &json))
}

/// Render `rows` with `<data_dir>/report.html` into `<report_dir>/<report_name>`.
/// Creates `report_dir` if needed and returns the written path.
pub fn write_report(
    rows: &[ReportRow],
    data_dir: &Path,
    report_dir: &Path,
    report_name: &str,
) -> Result<PathBuf> {
    let template_path = data_dir.join(TEMPLATE_FILE);
    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("read report template {}", template_path.display()))?;

    let html = render_html_report(&template, rows)?;

    fs::create_dir_all(report_dir)
        .with_context(|| format!("create report dir {}", report_dir.display()))?;
    let out = report_dir.join(report_name);
    fs::write(&out, html).with_context(|| format!("write report {}", out.display()))?;

    Ok(out)
}

/// Copy the table sorting script from `data_dir` into `report_dir`.
///
/// The script is optional: the template sorts on its own when it is absent.
/// Returns `false` when `data_dir` has no copy to ship.
pub fn copy_static_assets(data_dir: &Path, report_dir: &Path) -> Result<bool> {
    let src = data_dir.join(TABLESORTER_JS);
    if !src.is_file() {
        return Ok(false);
    }
    let dst = report_dir.join(TABLESORTER_JS);
    fs::copy(&src, &dst)
        .with_context(|| format!("copy {} to {}", src.display(), dst.display()))?;
    Ok(true)
}
