#![forbid(unsafe_code)]
//! geometa-io: row collaborators and list loading.
//!
//! - `source`: the `RowSource`/`RowSink` traits plus CSV and in-memory impls.
//! - `loader`: `load`/`store` wiring a source or sink to the core codec.
//! - `list`: `ReferenceList`, a loaded list that only changes on a clean reload.

pub mod error;
pub mod list;
pub mod loader;
pub mod source;

pub use list::ReferenceList;
pub use loader::{is_canonical, load, load_mounts, store};
pub use source::{CsvRows, MemoryRows, RowSink, RowSource};
