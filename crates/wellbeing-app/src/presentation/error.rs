use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use wellbeing_domain::shared::{DomainError, ErrorCode, ErrorSeverity};

/// Structured error response for HTTP handlers
///
/// The body carries the numeric error code, a human-readable message, the
/// severity and whether retrying can help. The status is derived from the code
/// unless a rejection supplied its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Numeric error code (1xxx-6xxx range)
    pub code: u16,

    /// Human-readable error message
    pub message: String,

    /// Error severity level
    pub severity: ErrorSeverity,

    /// Whether the operation can be retried
    pub recoverable: bool,

    #[serde(skip)]
    status: Option<StatusCode>,
}

impl ApiError {
    /// Create an error from an error code and message
    pub fn from_code(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: error_code.code(),
            message: message.into(),
            severity: error_code.severity(),
            recoverable: error_code.is_recoverable(),
            status: None,
        }
    }

    /// Missing or malformed `Authorization` header
    pub fn unauthenticated() -> Self {
        Self::from_code(ErrorCode::InvalidCredentials, "Not authenticated")
    }

    /// Create a generic infrastructure error
    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::InfrastructureError, message)
    }

    fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    pub fn status(&self) -> StatusCode {
        if let Some(status) = self.status {
            return status;
        }

        match self.code {
            1000..=1999 => StatusCode::UNAUTHORIZED,
            2000..=2999 => StatusCode::NOT_FOUND,
            // Business rules, matching the 400s clients already handle
            3000..=3999 => StatusCode::BAD_REQUEST,
            c if c == ErrorCode::DatabaseConstraintViolation.code() => StatusCode::CONFLICT,
            6000..=6999 => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self {
            code: err.code().code(),
            message: err.message().to_string(),
            severity: err.severity(),
            recoverable: err.is_recoverable(),
            status: None,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::from_code(ErrorCode::InvalidInput, rejection.body_text())
            .with_status(rejection.status())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::from_code(ErrorCode::InvalidInput, rejection.body_text())
            .with_status(rejection.status())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::infrastructure(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            log::error!("[http] {} {}", status, self);
        } else {
            log::debug!("[http] {} {}", status, self);
        }

        let mut response = (status, Json(self)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
