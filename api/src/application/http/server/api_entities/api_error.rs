use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use utoipa::ToSchema;
use validator::Validate;

use lowcarbon_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    BadGateway(String),
}

/// Caller-facing error body. Diagnostic detail (raw model text, parse
/// errors) stays in the logs; only the classification reaches the caller.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingConfig(_) => ApiError::InternalServerError(err.to_string()),
            CoreError::ModelUnavailable(detail) => {
                tracing::error!(%detail, "model call failed");
                ApiError::BadGateway("Failed to contact the generative model".to_string())
            }
            CoreError::EmptyModelResponse => {
                ApiError::BadGateway("Failed to parse the model response".to_string())
            }
            CoreError::InvalidModelJson(detail) => {
                tracing::error!(%detail, "model returned invalid JSON");
                ApiError::BadGateway("Model returned invalid JSON".to_string())
            }
            CoreError::SchemaMismatch(detail) => {
                tracing::error!(%detail, "model response schema mismatch");
                ApiError::BadGateway("Model response schema mismatch".to_string())
            }
            CoreError::InvalidImage(detail) => ApiError::BadRequest(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ApiErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// JSON extractor that runs `validator` rules before the handler sees the
/// payload.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| ApiError::BadRequest(err.to_string()))?;
        payload
            .validate()
            .map_err(|err| ApiError::UnprocessableEntity(err.to_string()))?;
        Ok(ValidateJson(payload))
    }
}
