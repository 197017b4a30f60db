pub mod asn;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /asn/validate                                    validate an ASN document
/// /asn/sample                                      canonical valid template
/// /asn/samples                                     named valid/invalid templates
/// /asn/rules                                       active rule thresholds
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/asn", asn::router())
}

/// Root-level routes for clients that predate `/api/v1`.
///
/// ```text
/// GET    /              -> banner
/// POST   /validate-asn  -> validate (bare verdict)
/// GET    /sample-asn    -> sample template
/// ```
pub fn legacy_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::asn::root))
        .route("/validate-asn", post(handlers::asn::validate_legacy))
        .route("/sample-asn", get(handlers::asn::sample_legacy))
}
