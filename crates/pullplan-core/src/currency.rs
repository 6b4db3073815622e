//! Gem and fate arithmetic

use serde::{Deserialize, Serialize};

/// Gem cost of a single pull. One fate converts at the same fixed rate.
pub const GEMS_PER_PULL: u64 = 160;

/// Spendable currency on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Wallet {
    /// Loose gems
    pub gems: u64,
    /// Banked fates, each worth [`GEMS_PER_PULL`] gems
    pub fates: u64,
}

impl Wallet {
    pub fn new(gems: u64, fates: u64) -> Self {
        Self { gems, fates }
    }

    /// Total holdings expressed in gems. Saturates at `u64::MAX` on
    /// extreme counts.
    ///
    /// ```
    /// use pullplan_core::Wallet;
    ///
    /// assert_eq!(Wallet::new(0, 10).gem_value(), 1600);
    /// ```
    pub fn gem_value(&self) -> u64 {
        self.gems.saturating_add(self.fates.saturating_mul(GEMS_PER_PULL))
    }

    /// Whole pulls the holdings convert into. Remainder gems are kept,
    /// never rounded up.
    pub fn pulls_affordable(&self) -> u64 {
        self.gem_value() / GEMS_PER_PULL
    }
}

/// Gem cost of a pull count. Saturates at `u64::MAX`.
pub fn gems_for_pulls(pulls: u64) -> u64 {
    pulls.saturating_mul(GEMS_PER_PULL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gem_value_combines_gems_and_fates() {
        assert_eq!(Wallet::new(1000, 5).gem_value(), 1800);
        assert_eq!(Wallet::new(0, 0).gem_value(), 0);
        assert_eq!(Wallet::new(0, 10).gem_value(), 1600);
    }

    #[test]
    fn test_pulls_affordable_floors_the_remainder() {
        assert_eq!(Wallet::new(159, 0).pulls_affordable(), 0);
        assert_eq!(Wallet::new(160, 0).pulls_affordable(), 1);
        assert_eq!(Wallet::new(479, 0).pulls_affordable(), 2);
        assert_eq!(Wallet::new(0, 10).pulls_affordable(), 10);
    }

    #[test]
    fn test_gems_for_pulls() {
        assert_eq!(gems_for_pulls(0), 0);
        assert_eq!(gems_for_pulls(90), 14400);
    }

    #[test]
    fn test_gem_value_saturates_on_extreme_holdings() {
        // An 18-digit fate count is a valid u64; its gem value must
        // clamp at the ceiling instead of wrapping.
        assert_eq!(Wallet::new(0, 115_292_150_460_684_698).gem_value(), u64::MAX);
        assert_eq!(Wallet::new(u64::MAX, 1).gem_value(), u64::MAX);
        assert_eq!(Wallet::new(u64::MAX, u64::MAX).gem_value(), u64::MAX);
    }

    #[test]
    fn test_gems_for_pulls_saturates_on_extreme_targets() {
        assert_eq!(gems_for_pulls(u64::MAX), u64::MAX);
        assert_eq!(gems_for_pulls(115_292_150_460_684_698), u64::MAX);
    }
}
