//! Handlers for ASN validation, sample templates and rule introspection.
//!
//! The `/api/v1/asn` handlers wrap their payload in [`DataResponse`]; the
//! root-level legacy handlers return the bare payload.

use asn_core::samples::{self, SampleTemplate};
use asn_core::{RuleConfig, ValidationVerdict};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Banner returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct Banner {
    pub message: &'static str,
    pub version: &'static str,
}

/// A single valid template with a caption.
#[derive(Debug, Serialize)]
pub struct SampleResponse {
    pub message: &'static str,
    pub template: Value,
}

/// Every named template, grouped by expected outcome.
#[derive(Debug, Serialize)]
pub struct SampleCatalog {
    pub valid: Vec<SampleTemplate>,
    pub invalid: Vec<SampleTemplate>,
}

/// GET /
pub async fn root() -> Json<Banner> {
    Json(Banner {
        message: "ASN Validator API - Dick's Sporting Goods Compliance",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Run the engine over a request body.
///
/// Undecodable bodies are a 400; bodies that decode but do not form a
/// shipment document are a 422 via [`asn_core::StructuralError`]. A verdict
/// with `valid = false` is still a successful response.
fn run_validation(
    state: &AppState,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<ValidationVerdict> {
    let Json(raw) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let verdict = state.engine.validate(raw)?;
    tracing::info!(
        valid = verdict.valid,
        errors = verdict.errors.len(),
        warnings = verdict.warnings.len(),
        cartons = verdict.summary.total_cartons,
        "ASN validated"
    );
    Ok(verdict)
}

/// POST /api/v1/asn/validate
pub async fn validate(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<DataResponse<ValidationVerdict>>> {
    let verdict = run_validation(&state, body)?;
    Ok(Json(DataResponse { data: verdict }))
}

/// POST /validate-asn
pub async fn validate_legacy(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<ValidationVerdict>> {
    run_validation(&state, body).map(Json)
}

fn current_sample() -> SampleResponse {
    SampleResponse {
        message: "Sample valid ASN template",
        template: samples::sample_document(Utc::now().date_naive()),
    }
}

/// GET /api/v1/asn/sample
pub async fn sample() -> Json<DataResponse<SampleResponse>> {
    Json(DataResponse {
        data: current_sample(),
    })
}

/// GET /sample-asn
pub async fn sample_legacy() -> Json<SampleResponse> {
    Json(current_sample())
}

/// GET /api/v1/asn/samples
pub async fn list_samples() -> Json<DataResponse<SampleCatalog>> {
    let today = Utc::now().date_naive();
    Json(DataResponse {
        data: SampleCatalog {
            valid: samples::valid_samples(today),
            invalid: samples::invalid_samples(today),
        },
    })
}

/// GET /api/v1/asn/rules
///
/// The thresholds the running engine enforces.
pub async fn rules(State(state): State<AppState>) -> Json<DataResponse<RuleConfig>> {
    Json(DataResponse {
        data: state.engine.config().clone(),
    })
}
