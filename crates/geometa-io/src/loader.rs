//! Load: source -> decode -> sequence. Store: encode -> sink.

use std::fs;
use std::path::Path;

use geometa_core::codec::{decode, encode, Header};
use geometa_core::error::{Error, Result};
use geometa_core::mount::Mount;
use geometa_core::schema::ListEntry;
use geometa_core::sequence::sequence;

use crate::source::{write_rows, CsvRows, RowSink, RowSource};

/// Read one list, decode every row and return it ordered by code.
///
/// The source is called once. Source failures surface as
/// [`Error::Source`]; decode failures are returned as-is.
pub fn load<R, S>(source: &S, location: &Path) -> Result<Vec<R>>
where
    R: ListEntry,
    S: RowSource + ?Sized,
{
    #[cfg(feature = "tracing")]
    let _span =
        tracing::debug_span!("load", kind = R::KIND, location = %location.display()).entered();

    let rows = source.read(location).map_err(Error::from_source)?;
    let records = decode::<R, _>(&rows, Header::Present)?;
    let records = sequence(records);

    #[cfg(feature = "tracing")]
    tracing::debug!(rows = rows.len(), records = records.len(), "loaded list");

    Ok(records)
}

/// Encode `records` in the order given and replace the list at `location`.
pub fn store<R, S>(sink: &S, location: &Path, records: &[R]) -> Result<()>
where
    R: ListEntry,
    S: RowSink + ?Sized,
{
    let rows = encode(records);
    sink.write(location, &rows).map_err(Error::from_source)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(kind = R::KIND, location = %location.display(), records = records.len(), "stored list");

    Ok(())
}

/// Load a mount list from a CSV file.
pub fn load_mounts(path: impl AsRef<Path>) -> Result<Vec<Mount>> {
    load(&CsvRows::default(), path.as_ref())
}

/// True when the CSV list at `location` is byte-for-byte what `store` would
/// write for it: sorted by code, trimmed, shortest numbers.
pub fn is_canonical<R: ListEntry>(source: &CsvRows, location: &Path) -> Result<bool> {
    let records: Vec<R> = load(source, location)?;

    let mut canonical = Vec::new();
    write_rows(&mut canonical, &encode(&records)).map_err(Error::from_source)?;
    let current = fs::read(source.path(location)).map_err(Error::from_source)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(kind = R::KIND, location = %location.display(), canonical = current == canonical, "checked list");

    Ok(current == canonical)
}
