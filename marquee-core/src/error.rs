use marquee_model::ModelError;
use thiserror::Error;

/// Why a resource could not be produced.
///
/// Stored verbatim on the cache entry and handed to every subscriber, so it
/// is `Clone` and carries rendered messages rather than source errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    NetworkFailure(String),

    #[error("Not found")]
    NotFound,

    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// The payload arrived but is missing a field the domain model requires,
    /// or could not be decoded at all.
    #[error("Mapping error: {0}")]
    MappingFailure(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound)
    }
}

impl From<ModelError> for FetchError {
    fn from(err: ModelError) -> Self {
        FetchError::MappingFailure(err.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::MappingFailure(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::ServerError {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            FetchError::NetworkFailure(err.to_string())
        }
    }
}
