//! Rule engine: runs every rule group against one document and aggregates.

use chrono::{NaiveDate, Utc};

use crate::document::ShipmentDocument;
use crate::error::StructuralError;

use super::config::RuleConfig;
use super::rules::{ShipmentSummary, ValidationVerdict, Violation};
use super::{cartons, labeling, routing, timing};

/// Read-only inputs shared by every rule group for one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub config: &'a RuleConfig,
    /// Calendar date the timing rules compare against.
    pub today: NaiveDate,
}

impl<'a> RuleContext<'a> {
    pub fn new(config: &'a RuleConfig, today: NaiveDate) -> Self {
        Self { config, today }
    }
}

type RuleGroupFn = fn(&ShipmentDocument, &RuleContext<'_>) -> Vec<Violation>;

/// Fixed evaluation order; violations are reported in this order.
const RULE_GROUPS: [(&str, RuleGroupFn); 4] = [
    ("timing", timing::check),
    ("cartons", cartons::check),
    ("labeling", labeling::check),
    ("routing", routing::check),
];

/// Stateless validator. Holds only its immutable [`RuleConfig`], so one
/// instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    config: RuleConfig,
}

impl RuleEngine {
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Parse raw input and evaluate it against today's date (UTC).
    pub fn validate(&self, raw: serde_json::Value) -> Result<ValidationVerdict, StructuralError> {
        self.validate_on(raw, Utc::now().date_naive())
    }

    /// Parse raw input and evaluate it as of `today`.
    pub fn validate_on(
        &self,
        raw: serde_json::Value,
        today: NaiveDate,
    ) -> Result<ValidationVerdict, StructuralError> {
        let document = ShipmentDocument::from_value(raw)?;
        Ok(self.evaluate_on(&document, today))
    }

    pub fn evaluate(&self, document: &ShipmentDocument) -> ValidationVerdict {
        self.evaluate_on(document, Utc::now().date_naive())
    }

    /// Run all rule groups in order. Never fails: every business-rule
    /// problem is a [`Violation`] in the returned verdict.
    pub fn evaluate_on(&self, document: &ShipmentDocument, today: NaiveDate) -> ValidationVerdict {
        let ctx = RuleContext::new(&self.config, today);
        let mut violations = Vec::new();
        for (group, check) in RULE_GROUPS {
            let found = check(document, &ctx);
            tracing::trace!(group, count = found.len(), "Rule group evaluated");
            violations.extend(found);
        }

        let summary = ShipmentSummary {
            total_cartons: document.cartons.len(),
            total_items: document.total_items(),
            total_units: document.total_units(),
            total_weight: document.total_weight(),
        };
        let verdict = ValidationVerdict::from_violations(violations, summary);
        tracing::debug!(
            vendor_id = %document.vendor_id,
            valid = verdict.valid,
            errors = verdict.errors.len(),
            warnings = verdict.warnings.len(),
            "ASN evaluated"
        );
        verdict
    }
}
