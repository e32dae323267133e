//! Rows <-> records.
//!
//! `decode` is all-or-nothing: the first bad row aborts the call and nothing
//! decoded before it is returned. Within a row, cells are parsed in column
//! order. Text cells are only trimmed and never fail, so the first error a
//! mount row can report is a coordinate (latitude, longitude, elevation),
//! then a timestamp (start, end).
//! Neither direction logs or performs I/O.

use crate::error::{Error, Result};
use crate::schema::{ListEntry, RowSchema};

/// One row of text cells.
pub type Row = Vec<String>;

/// Whether the first input row is a header to be skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Header {
    #[default]
    Present,
    Absent,
}

impl Header {
    fn skip(self) -> usize {
        match self {
            Header::Present => 1,
            Header::Absent => 0,
        }
    }
}

pub fn decode<R, S>(rows: &[Vec<S>], header: Header) -> Result<Vec<R>>
where
    R: ListEntry,
    S: AsRef<str>,
{
    let schema = R::schema();
    let skip = header.skip();
    let data = rows.get(skip..).unwrap_or(&[]);

    let mut records = Vec::with_capacity(data.len());
    for (i, cells) in data.iter().enumerate() {
        records.push(decode_row(&schema, cells, i + skip + 1)?);
    }
    Ok(records)
}

fn decode_row<R, S>(schema: &RowSchema<R>, cells: &[S], row: usize) -> Result<R>
where
    R: ListEntry,
    S: AsRef<str>,
{
    if cells.len() != schema.len() {
        return Err(Error::Arity {
            kind: R::KIND,
            row,
            expected: schema.len(),
            found: cells.len(),
        });
    }

    let mut draft = R::default();
    for (column, cell) in schema.iter().zip(cells) {
        let cell: &str = cell.as_ref();
        (column.parse)(&mut draft, cell).map_err(|e| Error::field(e, row, column.name, cell))?;
    }
    Ok(draft)
}

/// Header row followed by one row per record, in the order given.
pub fn encode<R: ListEntry>(records: &[R]) -> Vec<Row> {
    let schema = R::schema();
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(schema.header());
    rows.extend(records.iter().map(|r| schema.render(r)));
    rows
}
