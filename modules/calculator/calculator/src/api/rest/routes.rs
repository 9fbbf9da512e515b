use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};
use calculator_sdk::CalculatorApi;

use crate::api::rest::handlers;
use crate::config::Locale;

/// Mount the calculator endpoints on `router`.
///
/// - `POST /calculate` runs the default profile
/// - `POST /{profile}/calculate` runs a named profile
/// - `GET /profiles` lists configured profiles
pub fn register_routes(router: Router, api: Arc<dyn CalculatorApi>, locale: Locale) -> Router {
    let calculator = Router::new()
        .route("/calculate", post(handlers::calculate_default))
        .route("/{profile}/calculate", post(handlers::calculate))
        .route("/profiles", get(handlers::list_profiles))
        .layer(Extension(api))
        .layer(Extension(locale));

    router.merge(calculator)
}
