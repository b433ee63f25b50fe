//! The in-memory roster: ordered records, derived views, and aggregates.

use std::io::Read;

use tracing::debug;

use crate::error::{RosterError, RosterResult};
use crate::record::{Schema, StudentRecord};

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Ordered collection of all loaded student records.
///
/// Input order is preserved; every view below is derived on demand and
/// borrows from the roster rather than cloning it.
#[derive(Debug, Default)]
pub struct StudentRoster {
    records: Vec<StudentRecord>,
}

impl StudentRoster {
    /// Loads the roster from a CSV source with a header row.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DataFormat`] when a required column is absent
    /// or a numeric field does not parse. A source with a valid header and
    /// zero data rows loads successfully; aggregates over it fail later.
    pub fn load<R: Read>(source: R) -> RosterResult<Self> {
        // Flexible so a short row reports which field is missing instead of
        // failing inside the reader.
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(source);
        let schema = Schema::from_headers(rdr.headers()?)?;

        let mut records = Vec::new();
        for (i, row) in rdr.records().enumerate() {
            let row = row?;
            // Header is line 1, so the first data row is line 2.
            records.push(schema.parse_row(i + 2, &row)?);
        }

        debug!(record_count = records.len(), "Roster loaded");
        Ok(StudentRoster { records })
    }

    /// All records in original load order.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records sorted ascending by average. The sort is stable, so records
    /// with equal averages keep their original relative order.
    pub fn sorted_by_average(&self) -> Vec<&StudentRecord> {
        let mut sorted: Vec<&StudentRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.average.total_cmp(&b.average));
        sorted
    }

    /// The `n` highest-average records, descending; ties keep load order.
    /// Returns fewer than `n` records when the roster is smaller.
    pub fn top_n(&self, n: usize) -> Vec<&StudentRecord> {
        let mut sorted: Vec<&StudentRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.average.total_cmp(&a.average));
        sorted.truncate(n);
        sorted
    }

    /// The `n` lowest-average records, ascending; ties keep load order.
    pub fn bottom_n(&self, n: usize) -> Vec<&StudentRecord> {
        let mut sorted = self.sorted_by_average();
        sorted.truncate(n);
        sorted
    }

    /// Mean of all per-record averages.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyDataset`] when the roster has no records.
    pub fn overall_average(&self) -> RosterResult<f64> {
        if self.records.is_empty() {
            return Err(RosterError::EmptyDataset);
        }
        let averages: Vec<f64> = self.records.iter().map(|r| r.average).collect();
        Ok(mean(&averages))
    }
}
