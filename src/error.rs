use thiserror::Error;

/// Reasons a query is rejected as a client error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown target: {0:?}")]
    UnknownTarget(String),

    #[error("malformed range.{field}: {value:?}")]
    MalformedTime { field: &'static str, value: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("a workout with timestamp {0} already exists")]
    Conflict(i64),

    #[error("timestamp {0} is outside the representable date range")]
    UnrenderableTimestamp(i64),
}
