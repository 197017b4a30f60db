//! Sample ASN templates served to clients as starting points.
//!
//! Dates are generated relative to the caller's "today" so the valid samples
//! keep passing the timing rules.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use serde_json::{json, Value};

use crate::validation::ids;

/// A named sample document and what it demonstrates.
#[derive(Debug, Clone, Serialize)]
pub struct SampleTemplate {
    pub name: &'static str,
    pub description: &'static str,
    /// Rule the sample is expected to trip; `None` for valid samples.
    pub expected_rule: Option<&'static str>,
    pub document: Value,
}

fn date(base: NaiveDate, offset_days: u64) -> String {
    base.checked_add_days(Days::new(offset_days))
        .unwrap_or(base)
        .format("%Y-%m-%d")
        .to_string()
}

fn label(sscc: &str, po: &str, sort_letter: &str, upc: &str) -> Value {
    json!({
        "sscc": sscc,
        "department_number": "10 - Athletic Apparel",
        "vendor_name": "Vendor Name, 123 Vendor St, City, ST 12345",
        "dsg_dc_name": "DSG - PA1, 456 DC St, City, PA 12345",
        "po_number": po,
        "sort_letter": sort_letter,
        "upc": upc,
        "dc_store_number": "PA1"
    })
}

fn item(sku: &str, description: &str, quantity: u32, upc: &str, po: &str) -> Value {
    json!({
        "sku": sku,
        "description": description,
        "quantity": quantity,
        "upc": upc,
        "po_number": po
    })
}

fn carton(label: Value, po: &str, items: Vec<Value>, weight: f64, dims: [u32; 3]) -> Value {
    json!({
        "ucc128_label": label,
        "po_number": po,
        "items": items,
        "weight": weight,
        "dimensions": dims
    })
}

fn document(
    vendor_id: &str,
    ship: &str,
    delivery: &str,
    shipment_id: &str,
    declared_cartons: u32,
    cartons: Vec<Value>,
) -> Value {
    let weight: f64 = cartons.iter().filter_map(|c| c["weight"].as_f64()).sum();
    json!({
        "vendor_id": vendor_id,
        "ship_date": ship,
        "expected_delivery": delivery,
        "warehouse_code": "PA1",
        "carrier": "FEDEX",
        "tracking_number": "12345678901234567890",
        "tms_routing": {
            "shipment_id": shipment_id,
            "ready_date": ship,
            "cartons": declared_cartons,
            "cube": 15.5,
            "pallets": 1,
            "weight": weight
        },
        "cartons": cartons
    })
}

/// The canonical valid template: one compliant carton.
pub fn sample_document(today: NaiveDate) -> Value {
    let po = "DSG-2024-001234";
    document(
        "V12345",
        &date(today, 0),
        &date(today, 5),
        "TMS12345678",
        1,
        vec![carton(
            label("000123456789012345", po, "A", "123456789012"),
            po,
            vec![item("ITEM001", "Basketball Jersey", 100, "123456789012", po)],
            25.1,
            [24, 18, 12],
        )],
    )
}

/// Documents that pass every rule.
pub fn valid_samples(today: NaiveDate) -> Vec<SampleTemplate> {
    let po = "DSG-2024-001234";
    let multi = document(
        "V12345",
        &date(today, 0),
        &date(today, 5),
        "TMS12345678",
        2,
        vec![
            carton(
                label("000123456789012345", po, "A", "123456789012"),
                po,
                vec![item("ITEM001", "Basketball Jersey", 100, "123456789012", po)],
                25.1,
                [24, 18, 12],
            ),
            carton(
                label("000123456789012346", po, "B", "123456789013"),
                po,
                vec![item("ITEM002", "Basketball Shorts", 50, "123456789013", po)],
                20.1,
                [20, 16, 10],
            ),
        ],
    );

    vec![
        SampleTemplate {
            name: "multi_carton",
            description: "Two compliant cartons on one PO",
            expected_rule: None,
            document: multi,
        },
        SampleTemplate {
            name: "single_carton",
            description: "One compliant carton",
            expected_rule: None,
            document: sample_document(today),
        },
    ]
}

/// Structurally valid documents that each break one business rule.
pub fn invalid_samples(today: NaiveDate) -> Vec<SampleTemplate> {
    let po = "DSG-2024-001235";
    let other_po = "DSG-2024-001223";
    let single = |sscc: &str, items: Vec<Value>, weight: f64, dims: [u32; 3], declared: u32| {
        document(
            "V12346",
            &date(today, 1),
            &date(today, 6),
            "TMS12345679",
            declared,
            vec![carton(label(sscc, po, "A", "123456789014"), po, items, weight, dims)],
        )
    };
    let running_shoes = || item("ITEM003", "Running Shoes", 25, "123456789014", po);

    let last_month = date(today - Days::new(30), 0);
    let mut past = sample_document(today);
    past["ship_date"] = json!(last_month);
    past["tms_routing"]["ready_date"] = json!(last_month);

    vec![
        SampleTemplate {
            name: "sscc_prefix",
            description: "SSCC does not start with the GS1 extension digit 0",
            expected_rule: Some(ids::SSCC_PREFIX),
            document: single("123456789012345678", vec![running_shoes()], 22.5, [18, 14, 8], 1),
        },
        SampleTemplate {
            name: "tms_carton_count",
            description: "Routing declares 3 cartons but only 1 is shipped",
            expected_rule: Some(ids::TMS_ACCURACY),
            document: single("000123456789012347", vec![running_shoes()], 22.5, [18, 14, 8], 3),
        },
        SampleTemplate {
            name: "overweight_carton",
            description: "Carton weighs more than 50 lbs",
            expected_rule: Some(ids::CARTON_WEIGHT),
            document: single("000123456789012348", vec![running_shoes()], 51.5, [18, 14, 8], 1),
        },
        SampleTemplate {
            name: "mixed_po_carton",
            description: "Carton mixes items from two POs",
            expected_rule: Some(ids::ONE_PO_PER_CARTON),
            document: single(
                "000123456789012349",
                vec![
                    running_shoes(),
                    item("ITEM004", "Training Shorts", 10, "123456789015", other_po),
                ],
                22.5,
                [18, 14, 8],
                1,
            ),
        },
        SampleTemplate {
            name: "undersized_carton",
            description: "Carton length below the 9 inch minimum",
            expected_rule: Some(ids::CARTON_SIZE),
            document: single("000123456789012350", vec![running_shoes()], 22.5, [7, 10, 8], 1),
        },
        SampleTemplate {
            name: "past_ship_date",
            description: "Ship date is before the current date",
            expected_rule: Some(ids::ASN_TIMING),
            document: past,
        },
    ]
}
