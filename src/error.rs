#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid argument. JSON payload has no valid structure: {source}")]
    InvalidPayload {
        payload: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    InvalidInput(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Unexpected state '{state}' for item {item}")]
    UnexpectedState { item: String, state: String },

    #[error("API error: {message}")]
    Api { message: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Every failure exits with 1; the calling pipeline only checks for zero.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Whether the user can fix this by re-invoking with different arguments.
    pub fn is_usage(&self) -> bool {
        matches!(self, AppError::InvalidPayload { .. } | AppError::InvalidInput(_))
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidPayload { .. } => "invalid_payload",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::ItemNotFound(_) => "item_not_found",
            AppError::UnexpectedState { .. } => "unexpected_state",
            AppError::Api { .. } => "api",
            AppError::Http(_) => "http",
            AppError::Json(_) => "json",
            AppError::Io(_) => "io",
        }
    }
}
