use std::path::Path;

use geometa_core::error::Result;
use geometa_core::schema::ListEntry;
use geometa_core::sequence::sequence;

use crate::loader::load;
use crate::source::RowSource;

/// A loaded reference list, kept ordered by code.
///
/// The entries are replaced wholesale by `reload`, and only when the new
/// list decoded cleanly; on error the previous entries stay in place.
#[derive(Debug, Clone)]
pub struct ReferenceList<R> {
    entries: Vec<R>,
}

impl<R: ListEntry> Default for ReferenceList<R> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<R: ListEntry> ReferenceList<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<R>) -> Self {
        Self {
            entries: sequence(entries),
        }
    }

    /// Returns the number of entries now held.
    pub fn reload<S: RowSource + ?Sized>(&mut self, source: &S, location: &Path) -> Result<usize> {
        self.entries = load(source, location)?;
        Ok(self.entries.len())
    }

    pub fn entries(&self) -> &[R] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.entries.iter()
    }

    /// All entries sharing `code`, in list order.
    pub fn find(&self, code: &str) -> &[R] {
        let lo = self.entries.partition_point(|r| r.code().trim() < code);
        let hi = lo + self.entries[lo..].partition_point(|r| r.code().trim() == code);
        &self.entries[lo..hi]
    }

    pub fn into_entries(self) -> Vec<R> {
        self.entries
    }
}
