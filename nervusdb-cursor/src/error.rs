//! Error and result types for the cursor crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("result set is closed")]
    CursorClosed,

    #[error("unknown column label: {0}")]
    UnknownColumn(String),

    #[error("invalid column index {index}: result has {count} column(s)")]
    InvalidColumnIndex { index: i64, count: usize },

    #[error("cannot convert {from} to {to}")]
    UnsupportedConversion { from: &'static str, to: &'static str },

    #[error("no current row: cursor is not positioned on a record")]
    NoCurrentRow,

    /// Failure reported by the underlying query engine, passed through as-is.
    #[error("query engine error: {0}")]
    Engine(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn engine<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Engine(Box::new(err))
    }

    pub(crate) fn conversion(from: &'static str, to: &'static str) -> Self {
        Error::UnsupportedConversion { from, to }
    }
}
