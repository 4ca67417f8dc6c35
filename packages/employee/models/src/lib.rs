#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Employee record types and value pools.
//!
//! This crate defines the fixed schema of a synthetic employee row: the
//! column order, the enumerated value pools that categorical columns are
//! drawn from, and the ID-derived text fields. The generator in
//! `employee_csv_generate` only decides *which* pool value to use; every
//! label that ends up in the CSV is defined here.

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

/// Column names of the CSV header row, in output order.
pub const HEADER: [&str; 9] = [
    "ID",
    "Name",
    "Email",
    "Department",
    "Position",
    "Salary",
    "Start Date",
    "Status",
    "Notes",
];

/// Closed range that salaries are drawn from.
pub const SALARY_RANGE: RangeInclusive<u32> = 30_000..=150_000;

/// Year shared by every start date.
pub const START_YEAR: u16 = 2025;

/// Highest day-of-month a start date may use. Every month has at least this
/// many days, so no calendar validation is needed.
pub const MAX_START_DAY: u8 = 28;

/// Department an employee belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    #[strum(serialize = "HR")]
    Hr,
    Finance,
    Operations,
}

impl Department {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Engineering,
            Self::Marketing,
            Self::Sales,
            Self::Hr,
            Self::Finance,
            Self::Operations,
        ]
    }
}

/// Seniority level of an employee.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Position {
    Junior,
    Senior,
    Lead,
    Manager,
    Director,
}

impl Position {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Junior,
            Self::Senior,
            Self::Lead,
            Self::Manager,
            Self::Director,
        ]
    }
}

/// Employment status.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Status {
    Active,
    #[serde(rename = "On Leave")]
    #[strum(serialize = "On Leave")]
    OnLeave,
    Terminated,
    Suspended,
}

impl Status {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Active,
            Self::OnLeave,
            Self::Terminated,
            Self::Suspended,
        ]
    }
}

/// A start date within [`START_YEAR`], rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StartDate {
    /// Month of the year, 1-12.
    pub month: u8,
    /// Day of the month, 1-[`MAX_START_DAY`].
    pub day: u8,
}

impl StartDate {
    /// Creates a start date from a month and day.
    ///
    /// # Errors
    ///
    /// Returns an error if `month` is not in 1-12 or `day` is not in
    /// 1-[`MAX_START_DAY`].
    pub const fn new(month: u8, day: u8) -> Result<Self, InvalidStartDateError> {
        if month < 1 || month > 12 || day < 1 || day > MAX_START_DAY {
            return Err(InvalidStartDateError::OutOfRange { month, day });
        }
        Ok(Self { month, day })
    }
}

impl std::fmt::Display for StartDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{START_YEAR}-{:02}-{:02}", self.month, self.day)
    }
}

impl Serialize for StartDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for StartDate {
    type Err = InvalidStartDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidStartDateError::Malformed(s.to_string());

        let mut parts = s.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(malformed());
        }
        if year.parse::<u16>().map_err(|_| malformed())? != START_YEAR {
            return Err(malformed());
        }

        let month = month.parse::<u8>().map_err(|_| malformed())?;
        let day = day.parse::<u8>().map_err(|_| malformed())?;

        Self::new(month, day)
    }
}

/// Error returned when a [`StartDate`] cannot be built or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidStartDateError {
    /// Month or day is outside the allowed range.
    OutOfRange {
        /// The month that was provided.
        month: u8,
        /// The day that was provided.
        day: u8,
    },
    /// The text is not a `YYYY-MM-DD` date in [`START_YEAR`].
    Malformed(String),
}

impl std::fmt::Display for InvalidStartDateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { month, day } => write!(
                f,
                "invalid start date month {month} day {day}: expected month 1-12 and day 1-{MAX_START_DAY}"
            ),
            Self::Malformed(s) => {
                write!(f, "invalid start date '{s}': expected {START_YEAR}-MM-DD")
            }
        }
    }
}

impl std::error::Error for InvalidStartDateError {}

/// One synthetic employee row.
///
/// Fields serialize in [`HEADER`] order. `name`, `email` and `notes` are
/// derived from `id`; use [`EmployeeRecord::new`] to keep them consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRecord {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Department")]
    pub department: Department,
    #[serde(rename = "Position")]
    pub position: Position,
    #[serde(rename = "Salary")]
    pub salary: u32,
    #[serde(rename = "Start Date")]
    pub start_date: StartDate,
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl EmployeeRecord {
    /// Builds a record, deriving the name, email and notes from `id`.
    #[must_use]
    pub fn new(
        id: u64,
        department: Department,
        position: Position,
        salary: u32,
        start_date: StartDate,
        status: Status,
    ) -> Self {
        Self {
            id,
            name: name_for(id),
            email: email_for(id),
            department,
            position,
            salary,
            start_date,
            status,
            notes: notes_for(id),
        }
    }
}

/// Display name for the employee with the given ID.
#[must_use]
pub fn name_for(id: u64) -> String {
    format!("Person {id}")
}

/// Email address for the employee with the given ID.
#[must_use]
pub fn email_for(id: u64) -> String {
    format!("person{id}@example.com")
}

/// Long free-text notes for the employee with the given ID.
///
/// Long enough to force text wrapping in report and PDF renderers that
/// consume the CSV.
#[must_use]
pub fn notes_for(id: u64) -> String {
    format!(
        "This is a longer text field with some additional notes about employee {id}. \
         It contains more characters to test how the PDF generator handles longer text content. \
         The purpose is to ensure that text wrapping and cell sizing work correctly."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_have_expected_sizes() {
        assert_eq!(Department::all().len(), 6);
        assert_eq!(Position::all().len(), 5);
        assert_eq!(Status::all().len(), 4);
    }

    #[test]
    fn labels_match_csv_values() {
        let departments: Vec<String> = Department::all().iter().map(ToString::to_string).collect();
        assert_eq!(
            departments,
            ["Engineering", "Marketing", "Sales", "HR", "Finance", "Operations"]
        );

        let statuses: Vec<&str> = Status::all().iter().map(AsRef::as_ref).collect();
        assert_eq!(statuses, ["Active", "On Leave", "Terminated", "Suspended"]);
    }

    #[test]
    fn parses_labels() {
        assert_eq!("HR".parse::<Department>().unwrap(), Department::Hr);
        assert_eq!("On Leave".parse::<Status>().unwrap(), Status::OnLeave);
        assert_eq!("Director".parse::<Position>().unwrap(), Position::Director);
        assert!("Hr".parse::<Department>().is_err());
    }

    #[test]
    fn start_date_formats_with_padding() {
        let date = StartDate::new(3, 7).unwrap();
        assert_eq!(date.to_string(), "2025-03-07");

        let date = StartDate::new(12, 28).unwrap();
        assert_eq!(date.to_string(), "2025-12-28");
    }

    #[test]
    fn start_date_rejects_out_of_range() {
        assert!(StartDate::new(0, 1).is_err());
        assert!(StartDate::new(13, 1).is_err());
        assert!(StartDate::new(2, 0).is_err());
        assert_eq!(
            StartDate::new(1, 29),
            Err(InvalidStartDateError::OutOfRange { month: 1, day: 29 })
        );
    }

    #[test]
    fn start_date_parses() {
        assert_eq!(
            "2025-11-04".parse::<StartDate>().unwrap(),
            StartDate { month: 11, day: 4 }
        );
    }

    #[test]
    fn start_date_rejects_malformed_text() {
        assert!("2024-01-01".parse::<StartDate>().is_err());
        assert!("2025-1-01".parse::<StartDate>().is_err());
        assert!("2025-01-01-01".parse::<StartDate>().is_err());
        assert!("2025-01-30".parse::<StartDate>().is_err());
        assert!("not a date".parse::<StartDate>().is_err());
    }

    #[test]
    fn record_derives_text_fields_from_id() {
        let record = EmployeeRecord::new(
            42,
            Department::Sales,
            Position::Lead,
            55_000,
            StartDate::new(6, 15).unwrap(),
            Status::Active,
        );

        assert_eq!(record.name, "Person 42");
        assert_eq!(record.email, "person42@example.com");
        assert!(record.notes.starts_with(
            "This is a longer text field with some additional notes about employee 42. "
        ));
        assert!(record.notes.ends_with("cell sizing work correctly."));
        assert!(!record.notes.contains(','));
    }

    #[test]
    fn salary_range_bounds() {
        assert_eq!(*SALARY_RANGE.start(), 30_000);
        assert_eq!(*SALARY_RANGE.end(), 150_000);
    }
}
