//! Row schemas as ordered field-descriptor lists.
//!
//! Each record kind declares one `&'static [Column<Self>]`. A column's
//! position in that slice is its position in every row, its `name` is the
//! header label, and its `parse`/`render` pair moves the value between the
//! cell text and the record. Adding a field is one new descriptor.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

/// The one timestamp layout shared by decode and encode.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Why a single cell could not be parsed. The decoder adds row and column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Numeric(String),
    Temporal(String),
}

pub struct Column<R> {
    pub name: &'static str,
    pub parse: fn(&mut R, &str) -> Result<(), FieldError>,
    pub render: fn(&R) -> String,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column").field("name", &self.name).finish()
    }
}

/// A record kind stored as a reference list.
///
/// `Default` provides the draft that the decoder fills column by column.
pub trait ListEntry: Default + Clone + 'static {
    /// Short lowercase name used in error messages ("mount").
    const KIND: &'static str;
    const COLUMNS: &'static [Column<Self>];

    /// Natural key used by the sequencer.
    fn code(&self) -> &str;

    fn schema() -> RowSchema<Self> {
        RowSchema::new(Self::COLUMNS)
    }
}

pub struct RowSchema<R: 'static> {
    columns: &'static [Column<R>],
}

impl<R: 'static> Clone for RowSchema<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static> Copy for RowSchema<R> {}

impl<R: 'static> fmt::Debug for RowSchema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.columns.iter().map(|c| c.name))
            .finish()
    }
}

impl<R: 'static> RowSchema<R> {
    pub const fn new(columns: &'static [Column<R>]) -> Self {
        Self { columns }
    }

    /// Number of cells every row must carry.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, idx: usize) -> Option<&Column<R>> {
        self.columns.get(idx)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column<R>> {
        self.columns.iter()
    }

    /// Header labels in column order.
    pub fn header(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.to_string()).collect()
    }

    /// Render one record as a row in column order.
    pub fn render(&self, record: &R) -> Vec<String> {
        self.columns.iter().map(|c| (c.render)(record)).collect()
    }
}

pub fn parse_text(cell: &str) -> String {
    cell.trim().to_string()
}

pub fn render_text(value: &str) -> String {
    value.trim().to_string()
}

/// Parse a finite `f64`. No trimming and no range checks.
pub fn parse_float(cell: &str) -> Result<f64, FieldError> {
    let value: f64 = cell
        .parse()
        .map_err(|e: std::num::ParseFloatError| FieldError::Numeric(e.to_string()))?;
    if !value.is_finite() {
        return Err(FieldError::Numeric("value is not finite".into()));
    }
    Ok(value)
}

/// Shortest text that parses back to the same bits; `Display` never uses
/// exponent notation.
pub fn render_float(value: f64) -> String {
    value.to_string()
}

/// Parse a timestamp in exactly the [`DATE_TIME_FORMAT`] layout.
///
/// chrono tolerates padding-free fields, surrounding spaces, a signed year
/// and leap seconds; the cell must instead render back to itself.
pub fn parse_time(cell: &str) -> Result<DateTime<Utc>, FieldError> {
    let t = NaiveDateTime::parse_from_str(cell, DATE_TIME_FORMAT)
        .map(|t| t.and_utc())
        .map_err(|e| FieldError::Temporal(e.to_string()))?;
    if t.nanosecond() >= 1_000_000_000 {
        return Err(FieldError::Temporal("leap seconds are not allowed".into()));
    }
    if render_time(&t) != cell {
        return Err(FieldError::Temporal(format!(
            "not in the form YYYY-MM-DDTHH:MM:SSZ, expected {:?}",
            render_time(&t)
        )));
    }
    Ok(t)
}

pub fn render_time(value: &DateTime<Utc>) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}
