//! REST handlers for calculator module

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path};
use axum::response::{IntoResponse, Response};
use axum::Json;
use calculator_sdk::{CalculatorApi, CalculatorError};

use super::dto::{CalculateRequest, CalculateResponse, ProfilesResponse};
use super::error::error_response;
use crate::config::Locale;

/// Handler for POST /calculate
///
/// Runs the default profile.
pub async fn calculate_default(
    Extension(api): Extension<Arc<dyn CalculatorApi>>,
    Extension(locale): Extension<Locale>,
    body: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
    let profile = api.default_profile().to_owned();
    respond(api.as_ref(), locale, &profile, body)
}

/// Handler for POST /{profile}/calculate
pub async fn calculate(
    Path(profile): Path<String>,
    Extension(api): Extension<Arc<dyn CalculatorApi>>,
    Extension(locale): Extension<Locale>,
    body: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
    respond(api.as_ref(), locale, &profile, body)
}

/// Handler for GET /profiles
pub async fn list_profiles(
    Extension(api): Extension<Arc<dyn CalculatorApi>>,
) -> Json<ProfilesResponse> {
    Json(ProfilesResponse {
        default_profile: api.default_profile().to_owned(),
        profiles: api.profiles(),
    })
}

fn respond(
    api: &dyn CalculatorApi,
    locale: Locale,
    name: &str,
    body: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
    let profile = match api.profile(name) {
        Ok(profile) => profile,
        Err(e) => return error_response(&e, None, locale),
    };

    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let e = CalculatorError::Internal(rejection.body_text());
            return error_response(&e, Some(profile.shape), locale);
        }
    };

    match api.calculate(name, &request.into_input(profile.shape)) {
        Ok(calculation) => {
            Json(CalculateResponse::from_calculation(calculation, profile.shape)).into_response()
        }
        Err(e) => error_response(&e, Some(profile.shape), locale),
    }
}
