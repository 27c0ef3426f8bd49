use thiserror::Error;

/// Per-request failures of the search pipeline.
///
/// An empty result set is *not* an error; the only rejected input is a query
/// that contains no tokens at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("query is empty or whitespace-only")]
    BadQuery,
}

/// Load-time integrity failures. Any of these abort snapshot construction;
/// a previously published snapshot keeps serving.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("duplicate login '{0}' in record set")]
    DuplicateIdentifier(String),

    #[error("invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}
