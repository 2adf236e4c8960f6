//! Integration tests for the parse → aggregate → compile pipeline over real
//! files on disk, plain and gzip-compressed.

use flate2::Compression;
use flate2::write::GzEncoder;
use nginx_log_analyzer::AnalyzeError;
use nginx_log_analyzer::pipeline;
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn line(url: &str, request_time: &str) -> String {
    format!(
        concat!(
            r#"1.196.116.32 -  - [29/Jun/2017:03:50:22 +0300] "GET {} HTTP/1.1" 200 927 "#,
            r#""-" "Lynx/2.8.8dev.9 libwww-FM/2.14 SSL-MM/1.4.1 GNUTLS/2.10.5" "-" "#,
            r#""1498697422-2190034393-4708-9752759" "dc7161be3" {}"#,
        ),
        url, request_time
    )
}

fn sample_lines() -> Vec<String> {
    vec![
        line("/api/v2/banner/25019354", "0.390"),
        line("/api/1/photogenic_banners/list/?server_name=WIN7RB4", "0.133"),
        "garbage that is not a log line".to_string(),
        line("/api/v2/banner/25019354", "0.200"),
        line("/api/v2/banner/16852664", "0.199"),
        String::new(),
        line("/api/v2/slot/4705/groups", "0.704"),
        line("/api/v2/banner/25019354", "0.100"),
    ]
}

fn write_plain(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut text = lines.join("\n");
    text.push('\n');
    fs::write(&path, text).unwrap();
    path
}

fn write_gz(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut enc = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    for l in lines {
        writeln!(enc, "{}", l).unwrap();
    }
    enc.finish().unwrap();
    path
}

#[test]
fn plain_file_produces_ranked_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_plain(dir.path(), "nginx-access-ui.log-20170630", &sample_lines());

    let rows = pipeline::run(&path, 10).unwrap();

    let urls: Vec<&str> = rows.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "/api/v2/slot/4705/groups",
            "/api/v2/banner/25019354",
            "/api/v2/banner/16852664",
            "/api/1/photogenic_banners/list/?server_name=WIN7RB4",
        ]
    );

    let banner = &rows[1];
    assert_eq!(banner.count, 3);
    assert_eq!(banner.count_perc, 50.0);
    assert_eq!(banner.time_sum, 0.69);
    assert_eq!(banner.time_max, 0.39);
    assert_eq!(banner.time_med, 0.2);
    assert_eq!(banner.time_avg, 0.23);

    let total: u64 = rows.iter().map(|r| r.count).sum();
    assert_eq!(total, 6);
}

#[test]
fn gz_and_plain_give_identical_rows() {
    let dir = TempDir::new().unwrap();
    let lines = sample_lines();
    let plain = write_plain(dir.path(), "nginx-access-ui.log-20170630", &lines);
    let gz = write_gz(dir.path(), "nginx-access-ui.log-20170630.gz", &lines);

    assert_eq!(
        pipeline::run(&plain, 10).unwrap(),
        pipeline::run(&gz, 10).unwrap()
    );
}

#[test]
fn repeated_runs_are_identical() {
    let dir = TempDir::new().unwrap();
    let path = write_plain(dir.path(), "access.log", &sample_lines());

    let first = serde_json::to_string(&pipeline::run(&path, 3).unwrap()).unwrap();
    let second = serde_json::to_string(&pipeline::run(&path, 3).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn truncates_to_limit() {
    let dir = TempDir::new().unwrap();
    let path = write_plain(dir.path(), "access.log", &sample_lines());

    assert_eq!(pipeline::run(&path, 1).unwrap().len(), 1);
    assert_eq!(pipeline::run(&path, 4).unwrap().len(), 4);
    assert_eq!(pipeline::run(&path, 100).unwrap().len(), 4);
}

#[test]
fn line_missing_duration_is_skipped() {
    let dir = TempDir::new().unwrap();
    let good = line("/ok", "0.5");
    let bad = good.trim_end_matches(" 0.5").to_string();
    let path = write_plain(dir.path(), "access.log", &[good, bad]);

    let rows = pipeline::run(&path, 10).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].count, 1);
    assert_eq!(rows[0].count_perc, 100.0);
}

#[test]
fn empty_and_all_malformed_files_yield_no_rows() {
    let dir = TempDir::new().unwrap();
    let empty = dir.path().join("empty.log");
    fs::write(&empty, "").unwrap();
    let junk = write_plain(dir.path(), "junk.log", &["nope".to_string(), "  ".to_string()]);
    let empty_gz = write_gz(dir.path(), "empty.log.gz", &[]);

    assert!(pipeline::run(&empty, 10).unwrap().is_empty());
    assert!(pipeline::run(&junk, 10).unwrap().is_empty());
    assert!(pipeline::run(&empty_gz, 10).unwrap().is_empty());
}

#[test]
fn missing_file_is_a_source_error() {
    let dir = TempDir::new().unwrap();
    let err = pipeline::run(&dir.path().join("absent.log"), 10).unwrap_err();
    assert!(matches!(err, AnalyzeError::SourceRead { .. }));
}

#[test]
fn corrupt_gz_is_a_source_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.log.gz");
    fs::write(&path, b"this is not gzip data at all").unwrap();

    let err = pipeline::run(&path, 10).unwrap_err();
    assert!(matches!(err, AnalyzeError::SourceRead { .. }));
}

#[test]
fn zero_limit_fails_fast() {
    let dir = TempDir::new().unwrap();
    let path = write_plain(dir.path(), "access.log", &sample_lines());
    let err = pipeline::run(&path, 0).unwrap_err();
    assert!(matches!(err, AnalyzeError::InvalidLimit(0)));
}
