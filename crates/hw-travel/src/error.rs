use hw_tables::TableError;

/// Result type for travel operations.
pub type TravelResult<T> = Result<T, TravelError>;

/// Fatal errors from the travel loop and its data.
///
/// Refused or impossible moves are not errors; they come back as an
/// unsuccessful segment or search with a reason.
#[derive(Debug, thiserror::Error)]
pub enum TravelError {
    /// Table content was broken while rolling an encounter.
    #[error(transparent)]
    Table(#[from] TableError),

    /// The hex atlas could not be parsed.
    #[error("invalid hex atlas: {0}")]
    Atlas(String),

    /// The hex atlas file could not be read.
    #[error("failed to read hex atlas: {0}")]
    Io(#[from] std::io::Error),
}
