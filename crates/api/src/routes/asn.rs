//! Route definitions for the `/asn` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::asn;
use crate::state::AppState;

/// Routes mounted at `/asn`.
///
/// ```text
/// POST   /validate    -> validate
/// GET    /sample      -> sample
/// GET    /samples     -> list_samples
/// GET    /rules       -> rules
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/validate", post(asn::validate))
        .route("/sample", get(asn::sample))
        .route("/samples", get(asn::list_samples))
        .route("/rules", get(asn::rules))
}
