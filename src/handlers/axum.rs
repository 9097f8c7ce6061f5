#[cfg(feature = "axum")]
use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
#[cfg(feature = "axum")]
use legacy_session_core::{AuthResponse, HookError};

/// Convert an [`AuthResponse`] into an axum [`Response`].
///
/// Headers are appended, so repeated `set-cookie` entries all reach the
/// client. Headers that are not valid HTTP are dropped with a warning.
#[cfg(feature = "axum")]
pub fn into_axum_response(auth_response: AuthResponse) -> Response {
    let status =
        StatusCode::from_u16(auth_response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut response = Response::new(axum::body::Body::from(auth_response.body));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    for (name, value) in auth_response.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(&value),
        ) {
            (Ok(header_name), Ok(header_value)) => {
                headers.append(header_name, header_value);
            }
            _ => {
                tracing::warn!(target: "legacy_session", header = %name, "Dropping invalid response header");
            }
        }
    }

    response
}

/// Convert a [`HookError`] into a 500 JSON error response.
///
/// The details go to the log; the client only sees a generic message.
#[cfg(feature = "axum")]
pub fn into_axum_error(err: HookError) -> Response {
    tracing::error!(target: "legacy_session", error = %err, "Tree hook failed");

    let body = serde_json::json!({
        "message": "Internal server error"
    });

    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}
