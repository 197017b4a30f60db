//! Rule group B: carton physical constraints.

use std::collections::BTreeSet;

use crate::document::{Carton, ShipmentDocument};

use super::engine::RuleContext;
use super::rules::{ids, Violation};

/// One-PO-per-carton, weight bounds and size bounds, per carton in order.
pub fn check(document: &ShipmentDocument, ctx: &RuleContext<'_>) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (index, carton) in document.cartons.iter().enumerate() {
        check_single_po(index, carton, ctx, &mut violations);
        check_weight(index, carton, ctx, &mut violations);
        check_size(index, carton, ctx, &mut violations);
    }
    violations
}

fn check_single_po(index: usize, carton: &Carton, ctx: &RuleContext<'_>, out: &mut Vec<Violation>) {
    let impact = ctx.config.impacts.carton.as_str();
    let distinct: BTreeSet<&str> = carton.items.iter().map(|i| i.po_number.as_str()).collect();
    let mismatched: Vec<_> = carton
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.po_number != carton.po_number)
        .collect();

    if distinct.len() <= 1 && mismatched.is_empty() {
        return;
    }

    for (item_index, item) in &mismatched {
        out.push(Violation::error(
            ids::ONE_PO_PER_CARTON,
            format!("cartons[{index}].items[{item_index}].po_number"),
            format!(
                "Item {} references PO {} but carton is packed for PO {}",
                item.sku, item.po_number, carton.po_number
            ),
            impact,
        ));
    }

    let listed = distinct.into_iter().collect::<Vec<_>>().join(", ");
    out.push(Violation::error(
        ids::ONE_PO_PER_CARTON,
        format!("cartons[{index}].po_number"),
        format!(
            "Carton {} must contain items from a single PO ({}); found: {listed}",
            index + 1,
            carton.po_number
        ),
        impact,
    ));
}

fn check_weight(index: usize, carton: &Carton, ctx: &RuleContext<'_>, out: &mut Vec<Violation>) {
    let config = ctx.config;
    let impact = config.impacts.carton.as_str();
    if carton.weight < config.min_weight_lbs {
        out.push(Violation::error(
            ids::CARTON_WEIGHT,
            format!("cartons[{index}].weight"),
            format!(
                "Carton weight {} lbs is below the {} lbs minimum",
                carton.weight, config.min_weight_lbs
            ),
            impact,
        ));
    }
    if carton.weight > config.max_weight_lbs {
        out.push(Violation::error(
            ids::CARTON_WEIGHT,
            format!("cartons[{index}].weight"),
            format!(
                "Carton weight {} lbs exceeds the {} lbs maximum",
                carton.weight, config.max_weight_lbs
            ),
            impact,
        ));
    }
}

fn check_size(index: usize, carton: &Carton, ctx: &RuleContext<'_>, out: &mut Vec<Violation>) {
    let Some((length, width, height)) = carton.size() else {
        return;
    };
    let (min, max) = (ctx.config.min_size, ctx.config.max_size);
    let impact = ctx.config.impacts.carton.as_str();

    if length < min.length || width < min.width || height < min.height {
        out.push(Violation::error(
            ids::CARTON_SIZE,
            format!("cartons[{index}].dimensions"),
            format!(
                "Carton {length}x{width}x{height} in is below the minimum {}x{}x{} in",
                min.length, min.width, min.height
            ),
            impact,
        ));
    }
    if length > max.length || width > max.width || height > max.height {
        out.push(Violation::error(
            ids::CARTON_SIZE,
            format!("cartons[{index}].dimensions"),
            format!(
                "Carton {length}x{width}x{height} in exceeds the maximum {}x{}x{} in",
                max.length, max.width, max.height
            ),
            impact,
        ));
    }
}
