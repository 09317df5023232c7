use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use super::{impl_into_response, AppError};

/// Errors related to contact management operations
#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Contact not found")]
    NotFound,

    #[error("Contact with ID {id} not found")]
    NotFoundById { id: Uuid },

    #[error("Invalid field: {message}")]
    InvalidField { message: String },

    #[error("Internal server error: {message}")]
    InternalServerError { message: String },
}

impl AppError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::NotFound | ContactError::NotFoundById { .. } => StatusCode::NOT_FOUND,
            ContactError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            ContactError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            ContactError::NotFound | ContactError::NotFoundById { .. } => {
                "Contact not found".to_string()
            }
            ContactError::InvalidField { message } => message.clone(),
            ContactError::InternalServerError { .. } => "An internal error occurred".to_string(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ContactError::NotFound => "CONTACT_NOT_FOUND",
            ContactError::NotFoundById { .. } => "CONTACT_NOT_FOUND_BY_ID",
            ContactError::InvalidField { .. } => "CONTACT_INVALID_FIELD",
            ContactError::InternalServerError { .. } => "CONTACT_INTERNAL_SERVER_ERROR",
        }
    }
}

impl_into_response!(ContactError);

/// Convenience methods for creating common contact errors
impl ContactError {
    pub fn not_found_by_id(id: Uuid) -> Self {
        Self::NotFoundById { id }
    }

    pub fn invalid_field<S: Into<String>>(message: S) -> Self {
        Self::InvalidField {
            message: message.into(),
        }
    }

    pub fn internal_server_error<S: Into<String>>(message: S) -> Self {
        Self::InternalServerError {
            message: message.into(),
        }
    }
}
