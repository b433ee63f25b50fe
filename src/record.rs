//! Input row schema and the parse/validate step at the load boundary.
//!
//! The source is a mapping-based tabular file (header row names the columns),
//! so column positions are resolved once from the header and each row is then
//! parsed into a fixed-schema [`StudentRecord`].

use csv::StringRecord;
use serde::Serialize;

use crate::error::RosterError;

/// Columns required in the source header row, in schema order.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "name",
    "nationality",
    "age",
    "english.grade",
    "math.grade",
    "sciences.grade",
    "language.grade",
];

const GRADE_COUNT: usize = 4;

/// One student with the derived average over the four subject grades.
///
/// Immutable after load; `average` is the arithmetic mean of the english,
/// math, sciences and language grades.
#[derive(Debug, Clone, Serialize)]
pub struct StudentRecord {
    pub name: String,
    pub nationality: String,
    pub age: u32,
    pub average: f64,
}

/// Column positions resolved once from the header row.
#[derive(Debug)]
pub(crate) struct Schema {
    indexes: [usize; REQUIRED_FIELDS.len()],
}

impl Schema {
    /// Resolves every required column, failing on the first one missing.
    pub(crate) fn from_headers(headers: &StringRecord) -> Result<Self, RosterError> {
        let mut indexes = [0usize; REQUIRED_FIELDS.len()];
        for (slot, field) in REQUIRED_FIELDS.iter().enumerate() {
            indexes[slot] = headers.iter().position(|h| h == *field).ok_or_else(|| {
                RosterError::DataFormat {
                    line: 1,
                    field: (*field).to_string(),
                    message: "missing column in header row".to_string(),
                }
            })?;
        }
        Ok(Schema { indexes })
    }

    /// Parses one data row into a [`StudentRecord`], computing the average.
    ///
    /// `line` is the 1-based line number in the source file, used in error
    /// messages.
    pub(crate) fn parse_row(
        &self,
        line: usize,
        row: &StringRecord,
    ) -> Result<StudentRecord, RosterError> {
        let name = self.get(line, row, 0)?.to_string();
        let nationality = self.get(line, row, 1)?.to_string();
        let age = parse_number::<u32>(line, 2, self.get(line, row, 2)?)?;

        let mut sum = 0.0;
        for slot in 3..REQUIRED_FIELDS.len() {
            sum += parse_number::<f64>(line, slot, self.get(line, row, slot)?)?;
        }
        let average = sum / GRADE_COUNT as f64;

        Ok(StudentRecord {
            name,
            nationality,
            age,
            average,
        })
    }

    fn get<'r>(
        &self,
        line: usize,
        row: &'r StringRecord,
        slot: usize,
    ) -> Result<&'r str, RosterError> {
        row.get(self.indexes[slot])
            .ok_or_else(|| RosterError::DataFormat {
                line,
                field: REQUIRED_FIELDS[slot].to_string(),
                message: "field missing from row".to_string(),
            })
    }
}

fn parse_number<T: std::str::FromStr>(
    line: usize,
    slot: usize,
    raw: &str,
) -> Result<T, RosterError> {
    raw.trim().parse().map_err(|_| RosterError::DataFormat {
        line,
        field: REQUIRED_FIELDS[slot].to_string(),
        message: format!("expected a number, got '{raw}'"),
    })
}
