//! Pullplan Core - planning arithmetic for a gacha resource tracker
//!
//! This crate provides the pure calculation layer of the pullplan toolkit:
//! - Gem/fate currency arithmetic (`Wallet`, `GEMS_PER_PULL`)
//! - Pull feasibility reports with an annotated milestone ladder (`plan`)
//! - Crit score derivation and tier classification (`CritScore`, `Tier`)
//! - Ascension material checklists with completion roll-ups (`Checklist`)
//! - The two field-parsing policies everything above shares
//!
//! Nothing in here touches storage or files; state comes in as plain
//! values and results come back as plain values. The companion crates
//! layer persistence (`pullplan-store`), reference catalogs
//! (`pullplan-data`), and document exchange (`pullplan-exchange`) on top.

mod crit;
mod currency;
mod error;
mod parse;
mod plan;
mod progress;
mod session;

pub use crit::{CritInputs, CritScore, Tier, GAUGE_MAX};
pub use currency::{gems_for_pulls, Wallet, GEMS_PER_PULL};
pub use error::{Error, Result};
pub use parse::{permissive_count, strict_stat};
pub use plan::{plan, BannerOdds, GuaranteeMode, Milestone, PullReport, PullTarget, MILESTONE_PULLS};
pub use progress::{
    group_by_category, is_complete, remaining, Checklist, MaterialRequirement, OwnedMaterials,
    ProgressSummary,
};
pub use session::CalculatorInputs;
