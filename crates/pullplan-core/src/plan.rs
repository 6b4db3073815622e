//! Pull feasibility engine
//!
//! Turns a wallet and a pull target into a [`PullReport`]: gem shortfall,
//! convertible pulls, and the annotated milestone ladder. Reports are built
//! whole on every calculation and never patched in place.

use crate::currency::{gems_for_pulls, Wallet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pull counts at which banner outcomes are evaluated.
pub const MILESTONE_PULLS: [u64; 6] = [90, 180, 270, 360, 450, 540];

/// Whether the next featured drop is already guaranteed.
///
/// Losing a milestone's even-odds roll guarantees the next one, so the
/// ladder annotations alternate; an active guarantee inverts the whole
/// alternation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuaranteeMode {
    #[default]
    Off,
    On,
}

impl fmt::Display for GuaranteeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuaranteeMode::Off => write!(f, "off"),
            GuaranteeMode::On => write!(f, "on"),
        }
    }
}

/// Odds attached to a reachable milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BannerOdds {
    /// The featured drop is certain at this milestone.
    Guaranteed,
    /// Even odds between the featured and the standard drop.
    FiftyFifty,
}

impl fmt::Display for BannerOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BannerOdds::Guaranteed => write!(f, "guaranteed"),
            BannerOdds::FiftyFifty => write!(f, "50/50"),
        }
    }
}

/// Desired pull count plus the active guarantee state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PullTarget {
    pub pulls: u64,
    pub guarantee: GuaranteeMode,
}

/// One row of the milestone ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub pulls: u64,
    pub reachable: bool,
    /// `None` while the milestone is out of reach.
    pub odds: Option<BannerOdds>,
}

/// Everything the calculator derives from one wallet and target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullReport {
    /// Gem cost of the target
    pub required_gems: u64,
    /// Gems still missing, 0 when the target is covered
    pub shortfall: u64,
    /// Whole pulls the wallet converts into
    pub convertible_pulls: u64,
    /// Whether the wallet covers the target
    pub feasible: bool,
    /// Pulls left over beyond the target, 0 when infeasible
    pub surplus_pulls: u64,
    /// One row per entry of [`MILESTONE_PULLS`], in order
    pub milestones: Vec<Milestone>,
}

/// Run the feasibility calculation for one wallet and target.
pub fn plan(wallet: &Wallet, target: &PullTarget) -> PullReport {
    let total = wallet.gem_value();
    let required_gems = gems_for_pulls(target.pulls);
    let convertible_pulls = wallet.pulls_affordable();

    let milestones = MILESTONE_PULLS
        .iter()
        .enumerate()
        .map(|(index, &pulls)| {
            let reachable = total >= gems_for_pulls(pulls);
            Milestone {
                pulls,
                reachable,
                odds: reachable.then(|| odds_at(index, target.guarantee)),
            }
        })
        .collect();

    PullReport {
        required_gems,
        shortfall: required_gems.saturating_sub(total),
        convertible_pulls,
        feasible: convertible_pulls >= target.pulls,
        surplus_pulls: convertible_pulls.saturating_sub(target.pulls),
        milestones,
    }
}

/// Odds at a ladder index under the given guarantee state.
///
/// With the guarantee off, even indices roll even odds and odd indices are
/// guaranteed; an active guarantee swaps the two.
fn odds_at(index: usize, guarantee: GuaranteeMode) -> BannerOdds {
    let even = index % 2 == 0;
    match guarantee {
        GuaranteeMode::Off if even => BannerOdds::FiftyFifty,
        GuaranteeMode::Off => BannerOdds::Guaranteed,
        GuaranteeMode::On if even => BannerOdds::Guaranteed,
        GuaranteeMode::On => BannerOdds::FiftyFifty,
    }
}
