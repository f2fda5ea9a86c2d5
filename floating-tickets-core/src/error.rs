use crate::{repository, service::document_generator_service::DocumentGeneratorError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jwt_auth::error::MissingRoleError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ticket not exist")]
    TicketNotExist,

    #[error("validation error: {0}")]
    Validation(String),

    #[error("auth error: {0}")]
    Auth(#[from] MissingRoleError),

    #[error("document generator error: {0}")]
    DocumentGenerator(#[from] DocumentGeneratorError),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::TicketNotExist => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Auth(_) => StatusCode::FORBIDDEN,
            Error::DocumentGenerator(_) => StatusCode::BAD_GATEWAY,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validation_unprocessable_entity() {
        let response = Error::Validation("limit".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn document_generator_bad_gateway() {
        let err = DocumentGeneratorError::Status(StatusCode::INTERNAL_SERVER_ERROR);

        let response = Error::from(err).into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn missing_role_forbidden() {
        let err = MissingRoleError {
            missing_role: "travel_agency_floating_tickets".to_string(),
        };

        let response = Error::from(err).into_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
