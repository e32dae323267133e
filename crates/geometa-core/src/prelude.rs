//! Convenience re-exports for downstream crates.

pub use crate::codec::{decode, encode, Header, Row};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::mount::Mount;
pub use crate::schema::{Column, FieldError, ListEntry, RowSchema};
pub use crate::sequence::{by_code, sequence, sort_records};
pub use crate::types::{Point, Reference, Span, SpanEnd, Spanned};
