use thiserror::Error;

/// Typed outcome of a failed storage call.
///
/// Backends decide the variant at their own boundary so callers never have
/// to inspect driver messages.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Movie not found: {0}")]
    NotFound(String),

    #[error("Duplicate movie: {imdb_id}")]
    DuplicateKey { imdb_id: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
