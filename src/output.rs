//! Report sinks and summary printing.
//!
//! Each report writer truncates its destination file, writes the header row,
//! then the rows for its view of the roster. Re-running always overwrites.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::RosterResult;
use crate::roster::StudentRoster;

#[derive(Debug, Serialize)]
struct NameAverageRow<'a> {
    name: &'a str,
    average: f64,
}

#[derive(Debug, Serialize)]
struct AverageRow {
    average: f64,
}

#[derive(Debug, Serialize)]
struct DetailRow<'a> {
    name: &'a str,
    nationality: &'a str,
    age: u32,
    average: f64,
}

/// Truncates `path` and writes the header followed by the given rows.
///
/// The header is written explicitly so an empty roster still produces a
/// file with a header row.
fn write_report<S: Serialize>(
    path: &Path,
    header: &[&str],
    rows: impl IntoIterator<Item = S>,
) -> RosterResult<()> {
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    writer.write_record(header)?;
    let mut row_count = 0;
    for row in rows {
        writer.serialize(row)?;
        row_count += 1;
    }
    writer.flush()?;

    debug!(path = %path.display(), row_count, "Report written");
    Ok(())
}

/// Writes `(name, average)` pairs in original load order.
pub fn write_with_names(path: impl AsRef<Path>, roster: &StudentRoster) -> RosterResult<()> {
    write_report(
        path.as_ref(),
        &["name", "average"],
        roster.records().iter().map(|r| NameAverageRow {
            name: &r.name,
            average: r.average,
        }),
    )
}

/// Writes `(name, average)` pairs sorted ascending by average.
pub fn write_sorted_by_average(
    path: impl AsRef<Path>,
    roster: &StudentRoster,
) -> RosterResult<()> {
    write_report(
        path.as_ref(),
        &["name", "average"],
        roster
            .sorted_by_average()
            .into_iter()
            .map(|r| NameAverageRow {
                name: &r.name,
                average: r.average,
            }),
    )
}

/// Writes `(name, average)` for the `n` highest averages, descending.
pub fn write_top_n(path: impl AsRef<Path>, roster: &StudentRoster, n: usize) -> RosterResult<()> {
    write_report(
        path.as_ref(),
        &["name", "average"],
        roster.top_n(n).into_iter().map(|r| NameAverageRow {
            name: &r.name,
            average: r.average,
        }),
    )
}

/// Writes the `n` lowest averages, ascending, without names.
pub fn write_bottom_n(
    path: impl AsRef<Path>,
    roster: &StudentRoster,
    n: usize,
) -> RosterResult<()> {
    write_report(
        path.as_ref(),
        &["average"],
        roster
            .bottom_n(n)
            .into_iter()
            .map(|r| AverageRow { average: r.average }),
    )
}

/// Writes `(name, nationality, age, average)` sorted ascending by average.
pub fn write_details_sorted_by_average(
    path: impl AsRef<Path>,
    roster: &StudentRoster,
) -> RosterResult<()> {
    write_report(
        path.as_ref(),
        &["name", "nationality", "age", "average"],
        roster.sorted_by_average().into_iter().map(|r| DetailRow {
            name: &r.name,
            nationality: &r.nationality,
            age: r.age,
            average: r.average,
        }),
    )
}

/// Summary of one reporting run.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub record_count: usize,
    pub overall_average: f64,
    pub min_average: f64,
    pub max_average: f64,
    pub reports: Vec<String>,
}

impl RunSummary {
    /// Builds the summary for a non-empty roster.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::RosterError::EmptyDataset`] for an empty
    /// roster, the same as [`StudentRoster::overall_average`].
    pub fn from_roster(roster: &StudentRoster, reports: Vec<String>) -> RosterResult<Self> {
        let overall_average = roster.overall_average()?;
        let sorted = roster.sorted_by_average();

        Ok(RunSummary {
            generated_at: Utc::now(),
            record_count: roster.len(),
            overall_average,
            min_average: sorted.first().unwrap().average,
            max_average: sorted.last().unwrap().average,
            reports,
        })
    }
}

/// Logs the run summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &RunSummary) {
    debug!("{:#?}", summary);
}

/// Logs the run summary as pretty-printed JSON.
pub fn print_json(summary: &RunSummary) -> RosterResult<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
