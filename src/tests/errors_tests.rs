#[cfg(test)]
mod tests {
    use crate::errors::contact::ContactError;
    use crate::errors::AppError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use uuid::Uuid;

    #[test]
    fn test_status_codes() {
        assert_eq!(ContactError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ContactError::not_found_by_id(Uuid::new_v4()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ContactError::invalid_field("phone must not be empty").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ContactError::internal_server_error("connection refused").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(ContactError::NotFound.error_code(), "CONTACT_NOT_FOUND");
        assert_eq!(
            ContactError::not_found_by_id(Uuid::new_v4()).error_code(),
            "CONTACT_NOT_FOUND_BY_ID"
        );
        assert_eq!(
            ContactError::invalid_field("x").error_code(),
            "CONTACT_INVALID_FIELD"
        );
        assert_eq!(
            ContactError::internal_server_error("x").error_code(),
            "CONTACT_INTERNAL_SERVER_ERROR"
        );
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ContactError::not_found_by_id(Uuid::new_v4()).user_message(),
            "Contact not found"
        );
        assert_eq!(
            ContactError::invalid_field("phone must not be empty").user_message(),
            "phone must not be empty"
        );
        // Internal details never leak into the user-facing message
        assert_eq!(
            ContactError::internal_server_error("connection refused").user_message(),
            "An internal error occurred"
        );
    }

    #[test]
    fn test_into_response_uses_error_status() {
        let response = ContactError::not_found_by_id(Uuid::new_v4()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ContactError::invalid_field("bad").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
