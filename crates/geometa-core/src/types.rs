//! Value types shared by every reference list record kind.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Text form of the far-future instant that marks a span as still open.
pub const OPEN_END: &str = "9999-01-01T00:00:00Z";

/// The far-future instant behind [`OPEN_END`].
pub fn open_end() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(9999, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|t| t.and_utc())
        .expect("9999-01-01T00:00:00 is a valid UTC instant")
}

/// Identity of a station or mark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub code: String,
    pub network: String,
    pub name: String,
}

/// Geographic position. Values are kept as given; no range checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    /// Geodetic reference frame, e.g. "WGS84".
    pub datum: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanEnd {
    #[default]
    Open,
    At(DateTime<Utc>),
}

impl SpanEnd {
    /// The stored instant; [`open_end`] for open spans.
    pub fn instant(&self) -> DateTime<Utc> {
        match self {
            SpanEnd::Open => open_end(),
            SpanEnd::At(t) => *t,
        }
    }
}

impl From<DateTime<Utc>> for SpanEnd {
    fn from(t: DateTime<Utc>) -> Self {
        if t == open_end() {
            SpanEnd::Open
        } else {
            SpanEnd::At(t)
        }
    }
}

/// Validity interval of a record. `start <= end` is not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: DateTime<Utc>,
    pub end: SpanEnd,
}

impl Span {
    pub fn new(start: DateTime<Utc>, end: impl Into<SpanEnd>) -> Self {
        Self {
            start,
            end: end.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.end, SpanEnd::Open)
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.end.instant()
    }

    /// True when `at` falls in `[start, end)`.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end_time()
    }
}

/// Records carrying a validity span.
pub trait Spanned {
    fn span(&self) -> &Span;
}
