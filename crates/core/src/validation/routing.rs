//! Rule group D: TMS routing and cross-document consistency.

use crate::document::ShipmentDocument;

use super::engine::RuleContext;
use super::rules::{ids, Severity, Violation};

pub fn check(document: &ShipmentDocument, ctx: &RuleContext<'_>) -> Vec<Violation> {
    let config = ctx.config;
    let impact = config.impacts.routing.as_str();
    let routing = &document.tms_routing;
    let mut violations = Vec::new();

    let actual = document.cartons.len();
    if usize::try_from(routing.cartons).ok() != Some(actual) {
        violations.push(Violation::error(
            ids::TMS_ACCURACY,
            "tms_routing.cartons",
            format!(
                "Routing declares {} carton(s) but the ASN contains {actual}",
                routing.cartons
            ),
            impact,
        ));
    }

    let shipment_id = routing.shipment_id.as_deref().map(str::trim);
    if shipment_id.is_none_or(str::is_empty) {
        violations.push(Violation::error(
            ids::TMS_ACCURACY,
            "tms_routing.shipment_id",
            "TMS shipment ID is required so the BOL can be matched to this ASN",
            impact,
        ));
    }

    if let Some(carrier) = document.carrier.as_deref() {
        if !config.is_known_carrier(carrier) {
            violations.push(Violation::error(
                ids::CARRIER,
                "carrier",
                format!(
                    "Unknown carrier '{carrier}'. Must be one of: {}",
                    config.carriers.join(", ")
                ),
                impact,
            ));
        }
    }

    // Blank counts as not supplied.
    let tracking = document
        .tracking_number
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(tracking) = tracking {
        if tracking.chars().count() < config.min_tracking_number_len {
            violations.push(Violation::error(
                ids::TRACKING_NUMBER,
                "tracking_number",
                format!(
                    "Tracking number must be at least {} characters long",
                    config.min_tracking_number_len
                ),
                impact,
            ));
        }
    }

    if let Some(declared) = routing.weight {
        let actual_weight = document.total_weight();
        if (declared - actual_weight).abs() > config.weight_tolerance_lbs {
            violations.push(Violation::new(
                Severity::Info,
                ids::TMS_WEIGHT,
                "tms_routing.weight",
                format!(
                    "Routing declares {declared} lbs but cartons total {actual_weight:.2} lbs"
                ),
                impact,
            ));
        }
    }

    violations
}
