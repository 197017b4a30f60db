//! ASN compliance core.
//!
//! Turns raw Advance Ship Notice JSON into a typed [`ShipmentDocument`]
//! (structural checks) and scores it with the [`RuleEngine`] (business
//! rules). No I/O; the HTTP service in `asn-api` is a thin wrapper.

pub mod document;
pub mod error;
pub mod samples;
pub mod validation;

pub use document::ShipmentDocument;
pub use error::{CoreError, FieldIssue, StructuralError};
pub use validation::{RuleConfig, RuleEngine, RuleProfile, Severity, ValidationVerdict, Violation};
