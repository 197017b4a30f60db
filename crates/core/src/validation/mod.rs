//! ASN business-rule engine.
//!
//! Four independent rule groups (timing, carton physical constraints,
//! labeling, routing) inspect a structurally valid [`ShipmentDocument`] and
//! emit [`Violation`]s. The [`RuleEngine`] runs them in a fixed order and
//! folds the result into a [`ValidationVerdict`]. Pure logic, no I/O.
//!
//! [`ShipmentDocument`]: crate::document::ShipmentDocument

pub mod cartons;
pub mod config;
pub mod engine;
pub mod labeling;
pub mod routing;
pub mod rules;
pub mod timing;

pub use config::{CartonSize, ImpactTable, RuleConfig, RuleProfile};
pub use engine::{RuleContext, RuleEngine};
pub use rules::{ids, Severity, ShipmentSummary, ValidationVerdict, Violation};
