//! Violation and verdict types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable rule identifiers reported in [`Violation::rule`].
pub mod ids {
    pub const DATE_FORMAT: &str = "date_format";
    pub const ASN_TIMING: &str = "dsg_asn_timing";
    pub const DELIVERY_WINDOW: &str = "dsg_delivery_window";
    pub const READY_DATE: &str = "dsg_ready_date";

    pub const ONE_PO_PER_CARTON: &str = "dsg_one_po_per_carton";
    pub const CARTON_WEIGHT: &str = "dsg_carton_weight";
    pub const CARTON_SIZE: &str = "dsg_carton_size";

    pub const SSCC_PREFIX: &str = "dsg_sscc_prefix";
    pub const LABEL_COMPLETE: &str = "dsg_label_complete";
    pub const LABEL_UPC: &str = "dsg_label_upc";
    pub const LABEL_PO_MATCH: &str = "dsg_label_po_match";

    pub const TMS_ACCURACY: &str = "dsg_tms_accuracy";
    pub const TMS_WEIGHT: &str = "dsg_tms_weight";
    pub const CARRIER: &str = "dsg_carrier";
    pub const TRACKING_NUMBER: &str = "dsg_tracking_number";
}

/// How a violation affects the verdict. Only `Error` makes a document invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A single business-rule failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: String,
    /// Indexed path, e.g. `cartons[2].items[0].po_number`.
    pub field: String,
    pub message: String,
    /// Business impact, typically the chargeback assessed.
    pub impact: String,
    pub severity: Severity,
}

impl Violation {
    pub fn new(
        severity: Severity,
        rule: &str,
        field: impl Into<String>,
        message: impl Into<String>,
        impact: &str,
    ) -> Self {
        Self {
            rule: rule.to_string(),
            field: field.into(),
            message: message.into(),
            impact: impact.to_string(),
            severity,
        }
    }

    pub fn error(
        rule: &str,
        field: impl Into<String>,
        message: impl Into<String>,
        impact: &str,
    ) -> Self {
        Self::new(Severity::Error, rule, field, message, impact)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Aggregate figures over an already-validated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentSummary {
    pub total_cartons: usize,
    /// Item lines across all cartons.
    pub total_items: usize,
    /// Sum of item quantities.
    pub total_units: u64,
    /// Pounds.
    pub total_weight: f64,
}

/// Outcome of evaluating every rule group against one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationVerdict {
    pub valid: bool,
    pub errors: Vec<Violation>,
    /// Warning- and info-severity violations; never affect `valid`.
    pub warnings: Vec<Violation>,
    pub summary: ShipmentSummary,
    pub timestamp: DateTime<Utc>,
}

impl ValidationVerdict {
    /// Split violations by severity, preserving order, and derive the verdict.
    pub fn from_violations(violations: Vec<Violation>, summary: ShipmentSummary) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            violations.into_iter().partition(Violation::is_error);
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            summary,
            timestamp: Utc::now(),
        }
    }

    /// All violations, errors first.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.errors.iter().chain(self.warnings.iter())
    }

    /// Whether any reported violation carries `rule`.
    pub fn has_rule(&self, rule: &str) -> bool {
        self.violations().any(|v| v.rule == rule)
    }
}
