//! Immutable rule thresholds.
//!
//! A [`RuleConfig`] is built once at startup and handed to the
//! [`RuleEngine`](super::engine::RuleEngine); nothing mutates it afterwards.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

use super::rules::Severity;

/// Carton size in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartonSize {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Business impact text attached to each rule group's violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactTable {
    pub timing: String,
    pub carton: String,
    pub labeling: String,
    pub routing: String,
}

impl Default for ImpactTable {
    fn default() -> Self {
        Self {
            timing: "$250 chargeback per shipment".to_string(),
            carton: "$7.50 per carton + $250 service fee".to_string(),
            labeling: "$7.50 per carton + $250 service fee".to_string(),
            routing: "$500 flat fee per shipment".to_string(),
        }
    }
}

/// Named rule profiles selectable at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleProfile {
    /// Every rule at its documented severity.
    #[default]
    Strict,
    /// Incomplete labels are warnings instead of errors.
    Lenient,
}

impl FromStr for RuleProfile {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(CoreError::Config(format!(
                "unknown rule profile '{other}' (expected 'strict' or 'lenient')"
            ))),
        }
    }
}

/// Thresholds and policy knobs for every rule group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub profile: RuleProfile,
    /// Inclusive lower weight bound in pounds.
    pub min_weight_lbs: f64,
    /// Inclusive upper weight bound in pounds.
    pub max_weight_lbs: f64,
    /// Inclusive per-dimension minimum.
    pub min_size: CartonSize,
    /// Inclusive per-dimension maximum.
    pub max_size: CartonSize,
    /// Accepted carriers, upper case.
    pub carriers: Vec<String>,
    pub min_tracking_number_len: usize,
    pub label_completeness_severity: Severity,
    /// Allowed gap between declared routing weight and summed carton weight.
    pub weight_tolerance_lbs: f64,
    pub impacts: ImpactTable,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            profile: RuleProfile::Strict,
            min_weight_lbs: 3.0,
            max_weight_lbs: 50.0,
            min_size: CartonSize {
                length: 9.0,
                width: 6.0,
                height: 3.0,
            },
            max_size: CartonSize {
                length: 48.0,
                width: 30.0,
                height: 30.0,
            },
            carriers: ["FEDEX", "UPS", "USPS", "DHL", "ESTES", "YRC", "ABF", "SAIA"]
                .into_iter()
                .map(String::from)
                .collect(),
            min_tracking_number_len: 10,
            label_completeness_severity: Severity::Error,
            weight_tolerance_lbs: 1.0,
            impacts: ImpactTable::default(),
        }
    }
}

impl RuleConfig {
    pub fn for_profile(profile: RuleProfile) -> Self {
        match profile {
            RuleProfile::Strict => Self::default(),
            RuleProfile::Lenient => Self::lenient(),
        }
    }

    /// Strict thresholds, but missing label fields only warn.
    pub fn lenient() -> Self {
        Self {
            profile: RuleProfile::Lenient,
            label_completeness_severity: Severity::Warning,
            ..Self::default()
        }
    }

    /// Case-insensitive carrier membership.
    pub fn is_known_carrier(&self, carrier: &str) -> bool {
        let carrier = carrier.trim();
        self.carriers.iter().any(|c| c.eq_ignore_ascii_case(carrier))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn default_is_strict() {
        let config = RuleConfig::default();
        assert_eq!(config.profile, RuleProfile::Strict);
        assert_eq!(config.label_completeness_severity, Severity::Error);
        assert_eq!(config.min_weight_lbs, 3.0);
        assert_eq!(config.max_weight_lbs, 50.0);
    }

    #[test]
    fn lenient_only_relaxes_label_completeness() {
        let lenient = RuleConfig::lenient();
        assert_eq!(lenient.label_completeness_severity, Severity::Warning);
        assert_eq!(lenient.max_size, RuleConfig::default().max_size);
        assert_eq!(RuleConfig::for_profile(RuleProfile::Lenient), lenient);
    }

    #[test]
    fn parses_profiles() {
        assert_eq!("strict".parse::<RuleProfile>().unwrap(), RuleProfile::Strict);
        assert_eq!(" Lenient ".parse::<RuleProfile>().unwrap(), RuleProfile::Lenient);
        assert_matches!("loose".parse::<RuleProfile>(), Err(CoreError::Config(_)));
    }

    #[test]
    fn carrier_lookup_ignores_case() {
        let config = RuleConfig::default();
        assert!(config.is_known_carrier("fedex"));
        assert!(config.is_known_carrier("UPS"));
        assert!(!config.is_known_carrier("ACME"));
    }
}
