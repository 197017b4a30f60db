//! HTTP-level integration tests for the ASN validation endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router.
//! Documents come from the bundled sample templates so their dates stay
//! relative to the current day.

mod common;

use asn_core::samples;
use asn_core::validation::ids;
use asn_core::RuleProfile;
use axum::http::StatusCode;
use chrono::Utc;
use common::{body_json, build_test_app, get, post_json, post_raw};
use serde_json::{json, Value};

fn valid_asn() -> Value {
    samples::sample_document(Utc::now().date_naive())
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/asn/validate with a compliant document
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validate_compliant_asn_returns_valid_verdict() {
    let response = post_json(build_test_app(), "/api/v1/asn/validate", valid_asn()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["valid"], true);
    assert_eq!(data["errors"].as_array().unwrap().len(), 0);
    assert_eq!(data["summary"]["total_cartons"], 1);
    assert_eq!(data["summary"]["total_units"], 100);
    assert!(data["timestamp"].is_string());
}

// ---------------------------------------------------------------------------
// Test: Rule failures are a 200 with valid = false
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validate_carton_mismatch_reports_tms_violation() {
    let mut asn = valid_asn();
    asn["tms_routing"]["cartons"] = json!(2);

    let response = post_json(build_test_app(), "/api/v1/asn/validate", asn).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let errors = json["data"]["errors"].as_array().unwrap();
    assert_eq!(json["data"]["valid"], false);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["rule"], ids::TMS_ACCURACY);
    assert_eq!(errors[0]["field"], "tms_routing.cartons");
    assert_eq!(errors[0]["impact"], "$500 flat fee per shipment");
    assert_eq!(errors[0]["severity"], "error");
}

// ---------------------------------------------------------------------------
// Test: Every bundled invalid sample trips its rule over HTTP
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_samples_fail_over_http() {
    for sample in samples::invalid_samples(Utc::now().date_naive()) {
        let response =
            post_json(build_test_app(), "/api/v1/asn/validate", sample.document).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", sample.name);

        let json = body_json(response).await;
        assert_eq!(json["data"]["valid"], false, "{}", sample.name);
        let rule = sample.expected_rule.unwrap();
        assert!(
            json["data"]["errors"]
                .as_array()
                .unwrap()
                .iter()
                .any(|e| e["rule"] == rule),
            "{} should report {rule}",
            sample.name
        );
    }
}

// ---------------------------------------------------------------------------
// Test: Structural errors are 422 with the offending field
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_sscc_is_a_structural_error() {
    let mut asn = valid_asn();
    asn["cartons"][0]["ucc128_label"]["sscc"] = json!("12345");

    let response = post_json(build_test_app(), "/api/v1/asn/validate", asn).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "STRUCTURAL_ERROR");
    assert_eq!(json["fields"][0]["field"], "cartons[0].ucc128_label.sscc");
}

#[tokio::test]
async fn missing_vendor_id_is_a_structural_error() {
    let mut asn = valid_asn();
    asn.as_object_mut().unwrap().remove("vendor_id");

    let response = post_json(build_test_app(), "/api/v1/asn/validate", asn).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["fields"][0]["field"], "vendor_id");
}

#[tokio::test]
async fn wrong_nested_type_names_the_nested_field() {
    let mut asn = valid_asn();
    asn["cartons"][0]["weight"] = json!("heavy");

    let response = post_json(build_test_app(), "/api/v1/asn/validate", asn).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["fields"][0]["field"], "cartons[0].weight");
}

// ---------------------------------------------------------------------------
// Test: Undecodable JSON is a 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn garbage_body_returns_400() {
    let response = post_raw(build_test_app(), "/api/v1/asn/validate", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Test: Legacy POST /validate-asn returns the bare verdict
// ---------------------------------------------------------------------------

#[tokio::test]
async fn legacy_validate_returns_bare_verdict() {
    let response = post_json(build_test_app(), "/validate-asn", valid_asn()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json.get("data").is_none());
    assert_eq!(json["valid"], true);
}

// ---------------------------------------------------------------------------
// Test: Sample endpoints return templates that validate cleanly
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sample_template_round_trips_through_validate() {
    let response = get(build_test_app(), "/api/v1/asn/sample").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["message"], "Sample valid ASN template");

    let template = json["data"]["template"].clone();
    let response = post_json(build_test_app(), "/api/v1/asn/validate", template).await;
    let verdict = body_json(response).await;
    assert_eq!(verdict["data"]["valid"], true);
}

#[tokio::test]
async fn legacy_sample_is_unwrapped() {
    let response = get(build_test_app(), "/sample-asn").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["template"]["vendor_id"], "V12345");
}

#[tokio::test]
async fn samples_catalog_lists_valid_and_invalid() {
    let response = get(build_test_app(), "/api/v1/asn/samples").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let invalid = json["data"]["invalid"].as_array().unwrap();
    assert!(!json["data"]["valid"].as_array().unwrap().is_empty());
    assert!(invalid
        .iter()
        .any(|s| s["expected_rule"] == ids::SSCC_PREFIX));
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/asn/rules exposes the active thresholds
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rules_endpoint_reports_active_profile() {
    let response = get(build_test_app(), "/api/v1/asn/rules").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["profile"], "strict");
    assert_eq!(json["data"]["max_weight_lbs"], 50.0);
    assert_eq!(json["data"]["label_completeness_severity"], "error");
}

#[tokio::test]
async fn lenient_profile_downgrades_incomplete_labels() {
    let mut config = common::test_config();
    config.rule_profile = RuleProfile::Lenient;

    let mut asn = valid_asn();
    asn["cartons"][0]["ucc128_label"]["sort_letter"] = json!("");

    let response = post_json(
        common::build_test_app_with(config),
        "/api/v1/asn/validate",
        asn,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["valid"], true);
    assert_eq!(json["data"]["warnings"][0]["rule"], ids::LABEL_COMPLETE);
}
