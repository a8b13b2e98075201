use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_graphql::ErrorExtensions;
use serde::Serialize;
use thiserror::Error;

/// Failures of the scheduling core. Both are raised before any session is
/// emitted, so a caller never sees a partial plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Invalid schedule: {reason}")]
    InvalidSchedule { reason: String },

    #[error("Schedule overflow: {shortfall_minutes} minutes of topics do not fit in the available days")]
    ScheduleOverflow { shortfall_minutes: u64 },
}

impl ScheduleError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ScheduleError::InvalidSchedule {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Schedule overflow: {0} minutes of topics do not fit in the available days")]
    ScheduleOverflow(u64),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ScheduleOverflow(_) => "SCHEDULE_OVERFLOW",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortfall_minutes: Option<u64>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ScheduleOverflow(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let shortfall_minutes = match self {
            AppError::ScheduleOverflow(minutes) => Some(*minutes),
            _ => None,
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            shortfall_minutes,
        })
    }
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::InvalidSchedule { reason } => AppError::ValidationError(reason),
            ScheduleError::ScheduleOverflow { shortfall_minutes } => {
                AppError::ScheduleOverflow(shortfall_minutes)
            }
        }
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_err, e| {
            e.set("code", self.error_code());
            if let AppError::ScheduleOverflow(minutes) = self {
                e.set("shortfallMinutes", *minutes);
            }
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;
