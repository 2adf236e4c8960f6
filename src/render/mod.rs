//! HTML report output.

pub mod html;

pub use html::{TABLESORTER_JS, copy_static_assets, render_html_report, write_report};
