use clap::Parser;
use nginx_log_analyzer::config::Config;
use nginx_log_analyzer::{Result, discovery, logging, pipeline, render};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code reported when the run is stopped by SIGTERM/SIGINT.
const EXIT_TERMINATED: i32 = 143;

#[derive(Parser)]
#[command(name = "nla")]
#[command(about = "Nginx access log analyzer", long_about = None)]
struct Cli {
    /// Path to the JSON config file.
    #[arg(long, default_value = "./data/config.json")]
    config: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "run failed");
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // 1) Config + limit are validated before anything else happens.
    let config = Config::load(&cli.config)?;
    let limit = config.report_limit()?;

    logging::init_logging(config.struct_log_file.as_deref())?;
    tracing::info!(config = ?config, "config loaded");

    ctrlc::set_handler(|| {
        tracing::warn!("termination requested, shutting down");
        std::process::exit(EXIT_TERMINATED);
    })?;

    // 2) Find the newest log.
    let Some(latest) = discovery::find_latest_log(&config.log_dir)? else {
        tracing::info!(log_dir = %config.log_dir.display(), "log dir is empty");
        return Ok(());
    };
    tracing::info!(path = %latest.path.display(), "latest log file found");

    let report_name = latest.report_name();
    let report_path = config.report_dir.join(&report_name);
    if report_path.exists() {
        tracing::info!(path = %report_path.display(), "report already exists");
        return Ok(());
    }

    // 3) Parse + aggregate.
    let rows = pipeline::run(&latest.path, limit)?;
    if rows.is_empty() {
        tracing::warn!(path = %latest.path.display(), "no valid log lines, report not written");
        return Ok(());
    }

    // 4) Render HTML.
    let out = render::write_report(&rows, &config.data_dir, &config.report_dir, &report_name)?;
    tracing::info!(path = %out.display(), rows = rows.len(), "report created");

    match render::copy_static_assets(&config.data_dir, &config.report_dir) {
        Ok(true) => {}
        Ok(false) => {
            tracing::debug!(asset = render::TABLESORTER_JS, "static asset not in data dir, skipped")
        }
        Err(e) => {
            tracing::error!(error = ?e, asset = render::TABLESORTER_JS, "failed to copy static asset")
        }
    }

    Ok(())
}
