use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

use crate::api::ApiError;
use crate::web::types::ErrorTemplate;

/// Errors a portal page can end in. Rendered as the HTML error page.
#[derive(Debug)]
pub enum AppError {
    // Validation Errors
    InvalidInput { field: String, message: String },
    ResourceNotFound { resource: String },

    // Collector API Errors
    Api(ApiError),

    // System Errors
    TemplateError,
    InternalError,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput { field, message } => write!(f, "Invalid {}: {}", field, message),
            AppError::ResourceNotFound { resource } => write!(f, "{} not found", resource),
            AppError::Api(err) => write!(f, "{}", err),
            AppError::TemplateError => write!(f, "The page failed to render"),
            AppError::InternalError => write!(f, "An unexpected error occurred - please try again"),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn invalid_input(field: &str, message: &str) -> Self {
        AppError::InvalidInput {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn resource_not_found(resource: &str) -> Self {
        AppError::ResourceNotFound {
            resource: resource.to_string(),
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AppError::InvalidInput { .. } => "The request was not valid",
            AppError::ResourceNotFound { .. } => "Nothing here",
            AppError::Api(_) => "The collector API returned an error",
            AppError::TemplateError | AppError::InternalError => "This didn't load correctly...",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Api(err) => match err {
                ApiError::Validation(_) => StatusCode::BAD_REQUEST,
                err if err.is_not_found() => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_GATEWAY,
            },
            AppError::TemplateError | AppError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::TemplateError | AppError::InternalError => {
                log::error!("Server error: {:?}", self);
            }
            AppError::Api(err) => {
                log::warn!("Collector API error: {}", err);
            }
            _ => {
                log::info!("Client error: {:?}", self);
            }
        }

        let page = ErrorTemplate {
            title: self.title().to_string(),
            subtitle: "See the error for details.".to_string(),
            errors: Vec::new(),
            code: status.as_u16(),
            error: self.to_string(),
        };

        match page.render() {
            Ok(html) => HttpResponse::build(status)
                .content_type("text/html; charset=utf-8")
                .body(html),
            Err(err) => {
                log::error!("Failed to render error page: {}", err);
                HttpResponse::build(status)
                    .content_type("text/plain; charset=utf-8")
                    .body(self.to_string())
            }
        }
    }
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        AppError::Api(err)
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        log::error!("Template error: {}", err);
        AppError::TemplateError
    }
}
