#![forbid(unsafe_code)]
//! geometa: geodetic reference list loading.
//!
//! Re-exports the workspace crates so integration tests and embedders can
//! depend on one package.

pub use geometa_core;
pub use geometa_io;
