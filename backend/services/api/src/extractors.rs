use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

/// JSON body extractor that ignores `Content-Type`.
///
/// Browser and script clients often post JSON as `text/plain` or with no
/// content type at all; the body is parsed as JSON either way.
pub struct LenientJson<T>(pub T);

#[derive(Debug)]
pub struct LenientJsonRejection {
    status: StatusCode,
    message: String,
}

impl IntoResponse for LenientJsonRejection {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, axum::Json(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = LenientJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| LenientJsonRejection {
                status: StatusCode::BAD_REQUEST,
                message: e.body_text(),
            })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| LenientJsonRejection {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: format!("invalid JSON body: {e}"),
        })?;

        Ok(LenientJson(value))
    }
}
