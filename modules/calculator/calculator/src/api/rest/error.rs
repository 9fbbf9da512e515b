use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use calculator_sdk::{CalculatorError, Shape};

use super::dto::CalculateResponse;
use super::messages::render;
use crate::config::Locale;

/// Map a calculator error to an HTTP response with an `{"error": ...}` body.
///
/// Calculation failures are reported with `200 OK`; only a request for a
/// profile that does not exist yields `404`.
pub fn error_response(error: &CalculatorError, shape: Option<Shape>, locale: Locale) -> Response {
    let status = match error {
        CalculatorError::UnknownProfile(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };

    match error {
        CalculatorError::Internal(_) | CalculatorError::Conversion(_) => {
            tracing::error!(error = %error, "Calculation failed unexpectedly");
        }
        _ => tracing::debug!(error = %error, "Calculation rejected"),
    }

    let body = CalculateResponse::error(render(error, shape, locale));
    (status, Json(body)).into_response()
}
