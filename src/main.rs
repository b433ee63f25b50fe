//! CLI entry point for the grade reporter tool.
//!
//! Loads a student dataset CSV, writes the five report files, and prints the
//! overall average of all students to standard output.

use anyhow::{Context, Result};
use clap::Parser;
use grade_reporter::{
    output::{
        RunSummary, print_json, print_pretty, write_bottom_n,
        write_details_sorted_by_average, write_sorted_by_average, write_top_n, write_with_names,
    },
    roster::StudentRoster,
};
use std::ffi::OsStr;
use std::fs::File;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_reporter")]
#[command(about = "A tool to compute per-student grade averages and write report CSVs", long_about = None)]
struct Cli {
    /// CSV file with one row per student
    #[arg(short, long, default_value = "student_dataset.csv")]
    input: String,

    /// Directory to write the report files to
    #[arg(short, long, default_value = ".")]
    output_dir: String,

    /// Number of records in the top/bottom reports
    #[arg(short, long, default_value_t = 3)]
    n: usize,

    /// Print the run summary as JSON instead of debug format
    #[arg(long, default_value_t = false)]
    summary_json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/grade_reporter.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("grade_reporter.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let input = File::open(&cli.input)
        .with_context(|| format!("failed to open input file '{}'", cli.input))?;
    let roster = StudentRoster::load(input)?;
    info!(input = %cli.input, record_count = roster.len(), "Roster loaded");

    std::fs::create_dir_all(&cli.output_dir)?;
    let out_dir = Path::new(&cli.output_dir);

    let with_names = out_dir.join("averages_with_names.csv");
    let sorted = out_dir.join("sorted_averages.csv");
    let top = out_dir.join("top_three_averages.csv");
    let bottom = out_dir.join("bottom_three_averages.csv");
    let details = out_dir.join("student_details_by_average.csv");

    write_with_names(&with_names, &roster)?;
    write_sorted_by_average(&sorted, &roster)?;
    write_top_n(&top, &roster, cli.n)?;
    write_bottom_n(&bottom, &roster, cli.n)?;

    let overall_average = roster.overall_average()?;
    println!("Overall average of all students: {overall_average}");

    write_details_sorted_by_average(&details, &roster)?;

    let reports = [&with_names, &sorted, &top, &bottom, &details]
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    let summary = RunSummary::from_roster(&roster, reports)?;
    if cli.summary_json {
        print_json(&summary)?;
    } else {
        print_pretty(&summary);
    }

    info!(output_dir = %out_dir.display(), "All reports written");
    Ok(())
}
