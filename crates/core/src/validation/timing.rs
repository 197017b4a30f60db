//! Rule group A: ASN timing.

use chrono::NaiveDate;

use crate::document::ShipmentDocument;

use super::engine::RuleContext;
use super::rules::{ids, Severity, Violation};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Ship date must parse and not lie in the past; expected delivery, when
/// given, must come strictly after it. An unparseable ship date stops the
/// group there.
pub fn check(document: &ShipmentDocument, ctx: &RuleContext<'_>) -> Vec<Violation> {
    let impact = ctx.config.impacts.timing.as_str();
    let mut violations = Vec::new();

    let Some(ship_date) = parse_date(&document.ship_date) else {
        violations.push(Violation::error(
            ids::DATE_FORMAT,
            "ship_date",
            format!(
                "Ship date '{}' must be in YYYY-MM-DD format",
                document.ship_date
            ),
            impact,
        ));
        return violations;
    };

    if ship_date < ctx.today {
        violations.push(Violation::error(
            ids::ASN_TIMING,
            "ship_date",
            format!(
                "Ship date {ship_date} is in the past; the ASN must be sent within 1 hour of shipment departure"
            ),
            impact,
        ));
    }

    if let Some(expected) = document.expected_delivery.as_deref() {
        match parse_date(expected) {
            None => violations.push(Violation::error(
                ids::DATE_FORMAT,
                "expected_delivery",
                format!("Expected delivery '{expected}' must be in YYYY-MM-DD format"),
                impact,
            )),
            Some(delivery) if delivery <= ship_date => violations.push(Violation::error(
                ids::DELIVERY_WINDOW,
                "expected_delivery",
                format!("Expected delivery {delivery} must be after ship date {ship_date}"),
                impact,
            )),
            Some(_) => {}
        }
    }

    if let Some(ready) = document.tms_routing.ready_date.as_deref().and_then(parse_date) {
        if ready > ship_date {
            violations.push(Violation::new(
                Severity::Warning,
                ids::READY_DATE,
                "tms_routing.ready_date",
                format!("Routing ready date {ready} is after ship date {ship_date}"),
                impact,
            ));
        }
    }

    violations
}
