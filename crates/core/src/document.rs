//! Typed Advance Ship Notice document model.
//!
//! A [`ShipmentDocument`] can only be obtained through [`ShipmentDocument::from_value`]
//! or [`ShipmentDocument::from_json`], which decode the raw input and then run
//! every field-level structural check. Business rules never see a document
//! that failed here.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::StructuralError;

/// Warehouse (distribution center) codes accepted on an ASN.
pub const WAREHOUSE_CODES: [&str; 8] = ["PA1", "PA2", "CA1", "TX1", "GA1", "OH1", "IL1", "NY1"];

static VENDOR_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^V[0-9]{5}$").expect("valid regex"));
static PO_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^DSG-[0-9]{4}-[0-9]{6}$").expect("valid regex"));
static SSCC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{18}$").expect("valid regex"));
static UPC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{12,13}$").expect("valid regex"));
static SHIPMENT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{8,12}$").expect("valid regex"));

/// Root ASN entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ShipmentDocument {
    #[validate(custom(function = "validate_vendor_id"))]
    pub vendor_id: String,
    /// `YYYY-MM-DD`; parsed by the timing rules so a bad date is a violation,
    /// not a structural rejection.
    pub ship_date: String,
    pub expected_delivery: Option<String>,
    #[validate(custom(function = "validate_warehouse_code"))]
    pub warehouse_code: String,
    #[validate(custom(function = "validate_po_number"))]
    pub po_number: Option<String>,
    pub carrier: Option<String>,
    pub tracking_number: Option<String>,
    pub special_instructions: Option<String>,
    #[serde(alias = "routing")]
    #[validate(nested)]
    pub tms_routing: RoutingInfo,
    #[validate(nested)]
    pub cartons: Vec<Carton>,
}

/// TMS routing request as declared by the vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RoutingInfo {
    /// Blank identifiers pass structural checks and are reported by the
    /// routing rules instead.
    #[validate(custom(function = "validate_shipment_id"))]
    pub shipment_id: Option<String>,
    pub ready_date: Option<String>,
    /// Declared carton count.
    pub cartons: u32,
    pub cube: Option<f64>,
    pub pallets: Option<u32>,
    /// Declared total weight in pounds.
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Carton {
    #[serde(alias = "label")]
    #[validate(nested)]
    pub ucc128_label: ShippingLabel,
    #[validate(custom(function = "validate_po_number"))]
    pub po_number: String,
    #[validate(length(min = 1), nested)]
    pub items: Vec<Item>,
    /// Pounds.
    #[validate(range(exclusive_min = 0.0))]
    pub weight: f64,
    /// `[length, width, height]` in inches.
    #[validate(custom(function = "validate_dimensions"))]
    pub dimensions: Vec<f64>,
}

impl Carton {
    /// `(length, width, height)`; always present on a constructed document.
    pub fn size(&self) -> Option<(f64, f64, f64)> {
        match *self.dimensions.as_slice() {
            [length, width, height] => Some((length, width, height)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Item {
    #[serde(alias = "item_number")]
    #[validate(length(min = 1))]
    pub sku: String,
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub quantity: u32,
    #[validate(custom(function = "validate_upc"))]
    pub upc: String,
    #[validate(custom(function = "validate_po_number"))]
    pub po_number: String,
    pub unit_cost: Option<f64>,
}

/// UCC-128 / GS1 carton label.
///
/// Only the SSCC is structurally required. The remaining fields are checked
/// for completeness by the labeling rules, whose severity is configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ShippingLabel {
    #[validate(custom(function = "validate_sscc"))]
    pub sscc: String,
    pub department_number: Option<String>,
    pub vendor_name: Option<String>,
    pub dsg_dc_name: Option<String>,
    pub po_number: Option<String>,
    pub sort_letter: Option<String>,
    /// A UPC, or `Mixed` for multi-SKU cartons.
    pub upc: Option<String>,
    pub dc_store_number: Option<String>,
}

impl ShippingLabel {
    /// The seven fields a compliant label must fill, with their JSON names.
    pub fn required_fields(&self) -> [(&'static str, Option<&str>); 7] {
        [
            ("department_number", self.department_number.as_deref()),
            ("vendor_name", self.vendor_name.as_deref()),
            ("dsg_dc_name", self.dsg_dc_name.as_deref()),
            ("po_number", self.po_number.as_deref()),
            ("sort_letter", self.sort_letter.as_deref()),
            ("upc", self.upc.as_deref()),
            ("dc_store_number", self.dc_store_number.as_deref()),
        ]
    }
}

impl ShipmentDocument {
    /// Decode and structurally validate an untyped JSON value.
    pub fn from_value(raw: serde_json::Value) -> Result<Self, StructuralError> {
        let document: Self = serde_path_to_error::deserialize(raw)
            .map_err(|e| StructuralError::from_serde(&e))?;
        document.check_structure()?;
        Ok(document)
    }

    /// Decode and structurally validate JSON text.
    pub fn from_json(text: &str) -> Result<Self, StructuralError> {
        let mut de = serde_json::Deserializer::from_str(text);
        let document: Self = serde_path_to_error::deserialize(&mut de)
            .map_err(|e| StructuralError::from_serde(&e))?;
        de.end()
            .map_err(|e| StructuralError::new("document", e.to_string()))?;
        document.check_structure()?;
        Ok(document)
    }

    fn check_structure(&self) -> Result<(), StructuralError> {
        self.validate()
            .map_err(|errors| StructuralError::from_validation(&errors))
    }

    /// Number of item lines across all cartons.
    pub fn total_items(&self) -> usize {
        self.cartons.iter().map(|c| c.items.len()).sum()
    }

    /// Sum of item quantities across all cartons.
    pub fn total_units(&self) -> u64 {
        self.cartons
            .iter()
            .flat_map(|c| &c.items)
            .map(|i| u64::from(i.quantity))
            .sum()
    }

    /// Sum of carton weights in pounds.
    pub fn total_weight(&self) -> f64 {
        self.cartons.iter().map(|c| c.weight).sum()
    }
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

fn field_error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

fn validate_vendor_id(value: &str) -> Result<(), ValidationError> {
    if VENDOR_ID_RE.is_match(value) {
        Ok(())
    } else {
        Err(field_error(
            "vendor_id",
            "must be V followed by 5 digits (e.g. V12345)",
        ))
    }
}

fn validate_warehouse_code(value: &str) -> Result<(), ValidationError> {
    if WAREHOUSE_CODES.contains(&value) {
        Ok(())
    } else {
        Err(field_error(
            "warehouse_code",
            format!("must be one of: {}", WAREHOUSE_CODES.join(", ")),
        ))
    }
}

fn validate_po_number(value: &str) -> Result<(), ValidationError> {
    if PO_NUMBER_RE.is_match(value) {
        Ok(())
    } else {
        Err(field_error(
            "po_number",
            "must match DSG-YYYY-NNNNNN (e.g. DSG-2024-001234)",
        ))
    }
}

fn validate_sscc(value: &str) -> Result<(), ValidationError> {
    if SSCC_RE.is_match(value) {
        Ok(())
    } else {
        Err(field_error("sscc", "must be exactly 18 digits"))
    }
}

fn validate_upc(value: &str) -> Result<(), ValidationError> {
    if UPC_RE.is_match(value) {
        Ok(())
    } else {
        Err(field_error("upc", "must be 12 or 13 digits"))
    }
}

fn validate_shipment_id(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || SHIPMENT_ID_RE.is_match(value) {
        Ok(())
    } else {
        Err(field_error(
            "shipment_id",
            "must be 8-12 uppercase letters or digits",
        ))
    }
}

fn validate_dimensions(dimensions: &[f64]) -> Result<(), ValidationError> {
    if dimensions.len() != 3 {
        return Err(field_error(
            "dimensions",
            "must contain exactly 3 values: length, width, height",
        ));
    }
    if dimensions.iter().any(|d| !d.is_finite() || *d <= 0.0) {
        return Err(field_error("dimensions", "every dimension must be positive"));
    }
    Ok(())
}

/// Whether a string is a 12/13-digit UPC. Shared with the labeling rules.
pub fn is_upc(value: &str) -> bool {
    UPC_RE.is_match(value)
}
