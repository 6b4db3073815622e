//! Crit score derivation
//!
//! A crit value weighs rate double against damage, rounds to two decimals,
//! and lands in a quality tier. Field text parses under the Strict policy:
//! bad input is an error here, never a silent zero.

use crate::error::Result;
use crate::parse::strict_stat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gauge ceiling for presentation. Scores above it still classify as
/// [`Tier::God`]; only the drawn gauge is clamped.
pub const GAUGE_MAX: f64 = 60.0;

/// Raw text entered into the two stat fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CritInputs {
    pub crit_rate: String,
    pub crit_damage: String,
}

impl CritInputs {
    pub fn new(crit_rate: impl Into<String>, crit_damage: impl Into<String>) -> Self {
        Self {
            crit_rate: crit_rate.into(),
            crit_damage: crit_damage.into(),
        }
    }

    /// Parse both fields strictly and derive the score.
    pub fn evaluate(&self) -> Result<CritScore> {
        let rate = strict_stat("crit rate", &self.crit_rate)?;
        let damage = strict_stat("crit damage", &self.crit_damage)?;
        Ok(CritScore::from_stats(rate, damage))
    }
}

/// Derived crit value and its tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CritScore {
    pub value: f64,
    pub tier: Tier,
}

impl CritScore {
    /// `rate * 2 + damage`, rounded to two decimals.
    pub fn from_stats(crit_rate: f64, crit_damage: f64) -> Self {
        let value = round2(crit_rate * 2.0 + crit_damage);
        Self {
            value,
            tier: Tier::classify(value),
        }
    }

    /// The value clamped to `0..=GAUGE_MAX` for drawing. The stored value
    /// is untouched.
    pub fn gauge(&self) -> f64 {
        self.value.clamp(0.0, GAUGE_MAX)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Quality bucket for a crit value, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Skip,
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    God,
}

impl Tier {
    /// Every tier, ascending.
    pub const ALL: [Tier; 7] = [
        Tier::Skip,
        Tier::Common,
        Tier::Uncommon,
        Tier::Rare,
        Tier::Epic,
        Tier::Legendary,
        Tier::God,
    ];

    /// Highest tier whose threshold the value meets.
    pub fn classify(value: f64) -> Tier {
        match value {
            v if v >= 60.0 => Tier::God,
            v if v >= 50.0 => Tier::Legendary,
            v if v >= 40.0 => Tier::Epic,
            v if v >= 30.0 => Tier::Rare,
            v if v >= 20.0 => Tier::Uncommon,
            v if v >= 10.0 => Tier::Common,
            _ => Tier::Skip,
        }
    }

    /// Value at which this tier starts.
    pub fn threshold(&self) -> f64 {
        match self {
            Tier::Skip => 0.0,
            Tier::Common => 10.0,
            Tier::Uncommon => 20.0,
            Tier::Rare => 30.0,
            Tier::Epic => 40.0,
            Tier::Legendary => 50.0,
            Tier::God => 60.0,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::Skip => "Skip",
            Tier::Common => "Common",
            Tier::Uncommon => "Uncommon",
            Tier::Rare => "Rare",
            Tier::Epic => "Epic",
            Tier::Legendary => "Legendary",
            Tier::God => "God",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_weighs_rate_double() {
        let score = CritScore::from_stats(25.5, 15.0);
        assert_eq!(score.value, 66.0);
        assert_eq!(score.tier, Tier::God);
    }

    #[test]
    fn test_score_rounds_to_two_decimals() {
        let score = CritScore::from_stats(10.555, 0.0);
        assert_eq!(score.value, 21.11);
    }

    #[test]
    fn test_evaluate_accepts_comma_decimals() {
        let score = CritInputs::new("25,5", "15.0").evaluate().unwrap();
        assert_eq!(score.value, 66.0);
        assert_eq!(score.tier, Tier::God);
    }

    #[test]
    fn test_evaluate_rejects_bad_fields() {
        assert!(CritInputs::new("", "10").evaluate().is_err());
        assert!(CritInputs::new("10", "abc").evaluate().is_err());
        assert!(CritInputs::new("-1", "10").evaluate().is_err());
    }

    #[test]
    fn test_tier_boundaries_are_inclusive() {
        assert_eq!(Tier::classify(0.0), Tier::Skip);
        assert_eq!(Tier::classify(9.99), Tier::Skip);
        assert_eq!(Tier::classify(10.0), Tier::Common);
        assert_eq!(Tier::classify(20.0), Tier::Uncommon);
        assert_eq!(Tier::classify(30.0), Tier::Rare);
        assert_eq!(Tier::classify(40.0), Tier::Epic);
        assert_eq!(Tier::classify(50.0), Tier::Legendary);
        assert_eq!(Tier::classify(59.99), Tier::Legendary);
        assert_eq!(Tier::classify(60.0), Tier::God);
    }

    #[test]
    fn test_thresholds_ascend_and_classify_back() {
        // Boundaries are inclusive, so each tier starts exactly at its
        // own threshold.
        let mut last = -1.0;
        for tier in Tier::ALL {
            assert!(tier.threshold() > last);
            assert_eq!(Tier::classify(tier.threshold()), tier);
            last = tier.threshold();
        }
    }

    #[test]
    fn test_tiers_never_regress_as_value_grows() {
        let mut last = Tier::classify(0.0);
        for tenths in 0..=800 {
            let tier = Tier::classify(tenths as f64 / 10.0);
            assert!(tier >= last);
            last = tier;
        }
    }

    #[test]
    fn test_gauge_clamps_but_value_survives() {
        let score = CritScore::from_stats(25.5, 15.0);
        assert_eq!(score.gauge(), 60.0);
        assert_eq!(score.value, 66.0);

        let low = CritScore::from_stats(5.0, 2.0);
        assert_eq!(low.gauge(), 12.0);
    }
}
