use thiserror::Error;

use crate::schema::FieldError;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`], independent of row/column detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SchemaArity,
    NumericFormat,
    TemporalFormat,
    Source,
}

#[derive(Debug, Error)]
pub enum Error {
    /// `row` is the 1-based position of the row in the input, header included.
    #[error("incorrect number of {kind} fields on row {row}: expected {expected}, found {found}")]
    Arity {
        kind: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid number in column '{column}' on row {row}: {value:?} ({reason})")]
    Numeric {
        row: usize,
        column: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid timestamp in column '{column}' on row {row}: {value:?} ({reason})")]
    Temporal {
        row: usize,
        column: &'static str,
        value: String,
        reason: String,
    },

    // Row sources live outside core; their failures are carried opaquely.
    #[error("row source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Error with context chain for better debugging
    #[error("Error in {context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Wrap a row-source failure.
    pub fn from_source(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Source(err.into())
    }

    pub(crate) fn field(err: FieldError, row: usize, column: &'static str, value: &str) -> Self {
        let value = value.to_string();
        match err {
            FieldError::Numeric(reason) => Error::Numeric {
                row,
                column,
                value,
                reason,
            },
            FieldError::Temporal(reason) => Error::Temporal {
                row,
                column,
                value,
                reason,
            },
        }
    }

    /// Add context to an error, creating an error chain.
    ///
    /// # Example
    /// ```rust,no_run
    /// use geometa_core::error::Error;
    /// let err = Error::from_source("permission denied");
    /// let err = err.with_context("while loading mounts.csv");
    /// ```
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self) as Box<dyn std::error::Error + Send + Sync>,
        }
    }

    /// Classify the error, looking through any context wrappers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Arity { .. } => ErrorKind::SchemaArity,
            Error::Numeric { .. } => ErrorKind::NumericFormat,
            Error::Temporal { .. } => ErrorKind::TemporalFormat,
            Error::Source(_) => ErrorKind::Source,
            Error::Context { source, .. } => source
                .downcast_ref::<Error>()
                .map(Error::kind)
                .unwrap_or(ErrorKind::Source),
        }
    }

    /// Get suggestions for common errors.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Error::Arity {
                expected, found, ..
            } => {
                let mut hints = vec![format!(
                    "Each row needs exactly {} comma separated fields, this one has {}",
                    expected, found
                )];
                if found > expected {
                    hints.push("Quote any field that contains a comma".into());
                }
                hints
            }
            Error::Numeric { .. } => vec![
                "Use a plain decimal number such as -41.2 or 1.5e3".into(),
                "Numbers must not carry surrounding spaces or thousands separators".into(),
            ],
            Error::Temporal { .. } => vec![
                "Timestamps use the form 2006-01-02T15:04:05Z".into(),
                "Use 9999-01-01T00:00:00Z for an entry that is still open".into(),
            ],
            Error::Context { source, .. } => source
                .downcast_ref::<Error>()
                .map(Error::suggestions)
                .unwrap_or_default(),
            Error::Source(_) => vec![],
        }
    }
}
