//! Row collaborators.
//!
//! A source hands back every row at a location, header included, or fails
//! as a whole. A sink replaces the rows at a location as a whole.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use csv as csv_crate;
use geometa_core::codec::Row;

use crate::error::{Error, Result};

pub trait RowSource {
    fn read(&self, location: &Path) -> Result<Vec<Row>>;
}

pub trait RowSink {
    fn write(&self, location: &Path, rows: &[Row]) -> Result<()>;
}

/// CSV files under a base directory. Absolute locations ignore the base.
#[derive(Debug, Clone)]
pub struct CsvRows {
    base_dir: PathBuf,
}

impl Default for CsvRows {
    fn default() -> Self {
        Self::new(".")
    }
}

impl CsvRows {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn path(&self, location: &Path) -> PathBuf {
        self.base_dir.join(location)
    }
}

impl RowSource for CsvRows {
    fn read(&self, location: &Path) -> Result<Vec<Row>> {
        let file = File::open(self.path(location))?;
        read_rows(file)
    }
}

impl RowSink for CsvRows {
    fn write(&self, location: &Path, rows: &[Row]) -> Result<()> {
        let path = self.path(location);
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        // Write next to the target, then swap it in so readers never see
        // a half-written list.
        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        write_rows(tmp.as_file_mut(), rows)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|source| Error::Persist {
            path: path.display().to_string(),
            source,
        })?;
        Ok(())
    }
}

/// Read every CSV record as a row. Row lengths are not checked here.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut rdr = csv_crate::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(rec.iter().map(|s| s.to_string()).collect());
    }
    Ok(rows)
}

pub fn write_rows<W: Write>(writer: W, rows: &[Row]) -> Result<()> {
    let mut wtr = csv_crate::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// In-memory rows keyed by location.
#[derive(Debug, Default)]
pub struct MemoryRows {
    lists: Mutex<HashMap<PathBuf, Vec<Row>>>,
}

impl MemoryRows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(location: impl Into<PathBuf>, rows: Vec<Row>) -> Self {
        Self {
            lists: Mutex::new(HashMap::from([(location.into(), rows)])),
        }
    }

    pub fn get(&self, location: &Path) -> Option<Vec<Row>> {
        self.lists.lock().ok()?.get(location).cloned()
    }
}

impl RowSource for MemoryRows {
    fn read(&self, location: &Path) -> Result<Vec<Row>> {
        let lists = self
            .lists
            .lock()
            .map_err(|_| Error::Other("row store lock poisoned".into()))?;
        lists
            .get(location)
            .cloned()
            .ok_or_else(|| Error::NotFound(location.display().to_string()))
    }
}

impl RowSink for MemoryRows {
    fn write(&self, location: &Path, rows: &[Row]) -> Result<()> {
        let mut lists = self
            .lists
            .lock()
            .map_err(|_| Error::Other("row store lock poisoned".into()))?;
        lists.insert(location.to_path_buf(), rows.to_vec());
        Ok(())
    }
}
