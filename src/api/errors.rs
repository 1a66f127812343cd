use reqwest::StatusCode;
use thiserror::Error;
use uuid::Uuid;

/// Failure modes of a single call against the collector API.
///
/// Nothing here is retried. A call that fails never hands back partial data.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout, or a body that could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered, but not with the status code the caller declared.
    /// `body` is the raw response text so the backend's own message reaches the user.
    #[error("the expected status code did not come back from the api (expected {expected}, got {status}): {body}")]
    UnexpectedStatus {
        expected: StatusCode,
        status: StatusCode,
        body: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Rejected before any network I/O happened.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The envelope decoded fine but carried no payload for a single-entity read.
    #[error("api returned no payload (status {status}): {message}")]
    EmptyPayload { status: i32, message: String },

    #[error("got the wrong record back: asked for {requested}, received {received}")]
    MismatchedRecord { requested: Uuid, received: Uuid },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// HTTP status the backend actually returned, when there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Passes `value` through when `received` is the id that was asked for.
    pub fn ensure_id<T>(requested: Uuid, received: Uuid, value: T) -> ApiResult<T> {
        if requested != received {
            return Err(ApiError::MismatchedRecord { requested, received });
        }
        Ok(value)
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::Validation(format!("malformed url: {err}"))
    }
}

impl From<uuid::Error> for ApiError {
    fn from(err: uuid::Error) -> Self {
        ApiError::Validation(format!("malformed id: {err}"))
    }
}
