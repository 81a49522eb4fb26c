use axum::http::StatusCode;

/// Errors raised by the counter subsystem. They never leave a session as
/// HTTP failures; the session turns them into status messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CounterError {
    #[error("\"{0}\" is already in your list")]
    DuplicatePhrase(String),

    #[error("please enter a dhikr phrase")]
    EmptyPhrase,

    /// Carries the offending import line verbatim.
    #[error("invalid import line: {0}")]
    FormatError(String),

    #[error("unknown dhikr \"{0}\"")]
    UnknownPhrase(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
