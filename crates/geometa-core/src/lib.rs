#![forbid(unsafe_code)]
//! geometa-core: shared kernel for geodetic reference lists.
//!
//! This crate contains only *pure* types and the row codec. There is
//! **no I/O** here: rows arrive as `Vec<Vec<String>>` from whatever source the
//! caller uses, and leave the same way.
//!
//! Layout:
//! - `schema`: field descriptors (`Column`) and the `ListEntry` trait.
//! - `types`: `Reference`, `Point`, `Span` shared by every record kind.
//! - `mount`: the mount record kind.
//! - `codec`: rows -> records (`decode`) and records -> rows (`encode`).
//! - `sequence`: canonical ordering of decoded lists.
//!
//! Crates that use this:
//! - geometa-io: row sources/sinks (CSV, memory) and `load`/`store`.
//! - geometa-cli: `check`, `fmt` and `show` commands.

pub mod codec;
pub mod config;
pub mod error;
pub mod mount;
pub mod prelude;
pub mod schema;
pub mod sequence;
pub mod types;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
