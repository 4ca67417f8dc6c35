//! Streaming CSV serialization of employee records.

use std::io::Write;

use employee_csv_employee_models::{EmployeeRecord, HEADER};

/// Thin wrapper over [`csv::Writer`] that writes the header row once and
/// then serializes records one at a time without retaining them.
pub struct RecordWriter<W: Write> {
    inner: csv::Writer<W>,
    rows: u64,
}

impl<W: Write> RecordWriter<W> {
    /// Wraps `out` in a CSV writer. Nothing is written until
    /// [`Self::write_header`] is called.
    #[must_use]
    pub fn new(out: W) -> Self {
        let inner = csv::WriterBuilder::new()
            .has_headers(false)
            .delimiter(b',')
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(out);

        Self { inner, rows: 0 }
    }

    /// Writes the header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_header(&mut self) -> Result<(), csv::Error> {
        self.inner.write_record(HEADER)
    }

    /// Serializes one data row.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized or the underlying
    /// writer fails.
    pub fn write_record(&mut self, record: &EmployeeRecord) -> Result<(), csv::Error> {
        self.inner.serialize(record)?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written so far.
    #[must_use]
    pub const fn rows(&self) -> u64 {
        self.rows
    }

    /// Flushes all buffered output and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush fails.
    pub fn finish(self) -> Result<W, csv::Error> {
        self.inner
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use employee_csv_employee_models::{Department, Position, StartDate, Status};

    use super::*;

    fn sample(id: u64) -> EmployeeRecord {
        EmployeeRecord::new(
            id,
            Department::Hr,
            Position::Manager,
            72_500,
            StartDate { month: 4, day: 9 },
            Status::OnLeave,
        )
    }

    #[test]
    fn writes_header_and_rows() {
        let mut writer = RecordWriter::new(Vec::new());
        writer.write_header().unwrap();
        writer.write_record(&sample(1)).unwrap();
        assert_eq!(writer.rows(), 1);

        let text = String::from_utf8(writer.finish().unwrap()).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("ID,Name,Email,Department,Position,Salary,Start Date,Status,Notes")
        );
        assert_eq!(
            lines.next(),
            Some(
                "1,Person 1,person1@example.com,HR,Manager,72500,2025-04-09,On Leave,\
                 This is a longer text field with some additional notes about employee 1. \
                 It contains more characters to test how the PDF generator handles longer text content. \
                 The purpose is to ensure that text wrapping and cell sizing work correctly."
            )
        );
        assert_eq!(lines.next(), None);
        assert!(text.ends_with('\n'));
        assert!(!text.contains('\r'));
    }

    #[test]
    fn quotes_fields_that_need_it() {
        let mut record = sample(2);
        record.notes = "Said \"hi\", then left\nearly".to_string();

        let mut writer = RecordWriter::new(Vec::new());
        writer.write_record(&record).unwrap();
        let text = String::from_utf8(writer.finish().unwrap()).unwrap();

        assert!(text.ends_with(",\"Said \"\"hi\"\", then left\nearly\"\n"));

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(text.as_bytes());
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(row.len(), HEADER.len());
        assert_eq!(&row[8], "Said \"hi\", then left\nearly");
    }
}
