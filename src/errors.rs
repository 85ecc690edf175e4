use thiserror::Error;

/// Error type that captures the crate's few fallible seams.
///
/// The engine itself is infallible by design: degenerate numeric inputs
/// produce degenerate but well-defined outputs. Errors arise only when
/// parsing a month selector or addressing a record that does not exist.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid month key: {0}")]
    InvalidMonthKey(String),
    #[error("Record not found: {0}")]
    RecordNotFound(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
