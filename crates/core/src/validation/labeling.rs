//! Rule group C: UCC-128 label compliance.

use crate::document::{is_upc, ShipmentDocument};

use super::engine::RuleContext;
use super::rules::{ids, Violation};

/// GS1 extension digit required as the first SSCC character.
const SSCC_EXTENSION_DIGIT: char = '0';

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

pub fn check(document: &ShipmentDocument, ctx: &RuleContext<'_>) -> Vec<Violation> {
    let impact = ctx.config.impacts.labeling.as_str();
    let mut violations = Vec::new();

    for (index, carton) in document.cartons.iter().enumerate() {
        let label = &carton.ucc128_label;
        let path = format!("cartons[{index}].ucc128_label");

        if !label.sscc.starts_with(SSCC_EXTENSION_DIGIT) {
            violations.push(Violation::error(
                ids::SSCC_PREFIX,
                format!("{path}.sscc"),
                format!(
                    "SSCC {} must start with the GS1 extension digit '{SSCC_EXTENSION_DIGIT}'",
                    label.sscc
                ),
                impact,
            ));
        }

        for (field, value) in label.required_fields() {
            if is_blank(value) {
                violations.push(Violation::new(
                    ctx.config.label_completeness_severity,
                    ids::LABEL_COMPLETE,
                    format!("{path}.{field}"),
                    format!("Label field '{field}' is required on carton {}", index + 1),
                    impact,
                ));
            }
        }

        if let Some(upc) = label.upc.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            if !upc.eq_ignore_ascii_case("mixed") && !is_upc(upc) {
                violations.push(Violation::error(
                    ids::LABEL_UPC,
                    format!("{path}.upc"),
                    format!("Label UPC '{upc}' must be a 12-13 digit UPC or 'Mixed'"),
                    impact,
                ));
            }
        }

        let label_po = label.po_number.as_deref().map(str::trim);
        if let Some(label_po) = label_po.filter(|p| !p.is_empty()) {
            if label_po != carton.po_number {
                violations.push(Violation::error(
                    ids::LABEL_PO_MATCH,
                    format!("{path}.po_number"),
                    format!(
                        "Label PO {label_po} does not match carton PO {}",
                        carton.po_number
                    ),
                    impact,
                ));
            }
        }
    }

    violations
}
