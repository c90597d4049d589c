use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("Request rejected with status {status}")]
    Rejected {
        status: u16,
        /// `message` field of the JSON error body, when present.
        message: Option<String>,
    },

    #[error("Decode error: {0}")]
    Decode(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::Decode(err.to_string())
        } else {
            RepositoryError::Transport(err.to_string())
        }
    }
}
