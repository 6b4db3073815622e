//! Calculator field state

use crate::currency::Wallet;
use crate::parse::permissive_count;
use crate::plan::{plan, GuaranteeMode, PullReport, PullTarget};
use serde::{Deserialize, Serialize};

/// Raw calculator fields, kept exactly as entered.
///
/// This is the shape that persists and travels through export/import.
/// Numbers are only parsed out at calculation time, under the Permissive
/// policy. Every field defaults when absent from a stored or imported
/// document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    #[serde(default)]
    pub gems: String,
    #[serde(default)]
    pub fates: String,
    /// Carried for display and persistence; the arithmetic ignores it
    #[serde(default)]
    pub pity: String,
    #[serde(default)]
    pub target_pulls: String,
    #[serde(default)]
    pub guarantee: GuaranteeMode,
}

impl CalculatorInputs {
    /// Current wallet under the Permissive policy.
    pub fn wallet(&self) -> Wallet {
        Wallet::new(permissive_count(&self.gems), permissive_count(&self.fates))
    }

    /// Current target under the Permissive policy.
    pub fn target(&self) -> PullTarget {
        PullTarget {
            pulls: permissive_count(&self.target_pulls),
            guarantee: self.guarantee,
        }
    }

    /// Run the feasibility engine over the current fields.
    pub fn report(&self) -> PullReport {
        plan(&self.wallet(), &self.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_parse_permissively() {
        let inputs = CalculatorInputs {
            gems: "1000".to_string(),
            fates: "junk".to_string(),
            ..Default::default()
        };
        assert_eq!(inputs.wallet(), Wallet::new(1000, 0));
        assert_eq!(inputs.target().pulls, 0);
    }

    #[test]
    fn test_report_wires_wallet_and_target_through() {
        let inputs = CalculatorInputs {
            gems: "0".to_string(),
            fates: "10".to_string(),
            target_pulls: "90".to_string(),
            ..Default::default()
        };
        let report = inputs.report();
        assert_eq!(report.required_gems, 14400);
        assert_eq!(report.shortfall, 12800);
        assert_eq!(report.convertible_pulls, 10);
        assert!(!report.feasible);
    }

    #[test]
    fn test_extreme_entries_clamp_instead_of_overflowing() {
        // 18-digit counts are valid u64s and reach the engine unclamped.
        let inputs = CalculatorInputs {
            gems: "115292150460684698".to_string(),
            fates: "115292150460684698".to_string(),
            target_pulls: "115292150460684698".to_string(),
            ..Default::default()
        };
        let report = inputs.report();
        assert_eq!(report.required_gems, u64::MAX);
        assert_eq!(report.shortfall, 0);
        assert!(report.milestones.iter().all(|m| m.reachable));
    }

    #[test]
    fn test_guarantee_rides_along_into_the_target() {
        let inputs = CalculatorInputs {
            guarantee: GuaranteeMode::On,
            ..Default::default()
        };
        assert_eq!(inputs.target().guarantee, GuaranteeMode::On);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let inputs: CalculatorInputs = serde_json::from_str("{}").unwrap();
        assert_eq!(inputs, CalculatorInputs::default());

        let inputs: CalculatorInputs =
            serde_json::from_str(r#"{"gems": "500", "guarantee": "on"}"#).unwrap();
        assert_eq!(inputs.gems, "500");
        assert_eq!(inputs.target_pulls, "");
        assert_eq!(inputs.guarantee, GuaranteeMode::On);
    }
}
