//! Ascension material progress
//!
//! A [`Checklist`] holds the owned-material counts for the one character
//! currently on screen. Switching characters replaces the whole map with
//! that character's persisted counts; there is no merging.

use crate::parse::permissive_count;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One material line for a character, from the reference catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRequirement {
    pub name: String,
    /// Display grouping ("Gems", "Boss", "Local Specialty", ...)
    #[serde(default)]
    pub category: String,
    pub required: u64,
}

impl MaterialRequirement {
    pub fn new(name: impl Into<String>, category: impl Into<String>, required: u64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            required,
        }
    }
}

/// Owned quantity per material name, in insertion order.
pub type OwnedMaterials = IndexMap<String, u64>;

/// Units still missing for one material line.
pub fn remaining(required: u64, owned: u64) -> u64 {
    required.saturating_sub(owned)
}

/// Whether one material line is fully gathered.
pub fn is_complete(required: u64, owned: u64) -> bool {
    owned >= required
}

/// Requirement lines grouped by category, preserving line order inside
/// each group and group order of first appearance.
pub fn group_by_category(requirements: &[MaterialRequirement]) -> IndexMap<&str, Vec<&MaterialRequirement>> {
    let mut groups: IndexMap<&str, Vec<&MaterialRequirement>> = IndexMap::new();
    for requirement in requirements {
        groups.entry(requirement.category.as_str()).or_default().push(requirement);
    }
    groups
}

/// The active character's owned-material counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub character: String,
    pub owned: OwnedMaterials,
}

impl Checklist {
    /// Fresh checklist with nothing owned.
    pub fn new(character: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            owned: OwnedMaterials::default(),
        }
    }

    /// Checklist over an already-persisted owned map.
    pub fn with_owned(character: impl Into<String>, owned: OwnedMaterials) -> Self {
        Self {
            character: character.into(),
            owned,
        }
    }

    /// Record an owned quantity from raw field text (Permissive policy).
    pub fn set_owned(&mut self, material: impl Into<String>, quantity_text: &str) {
        self.owned.insert(material.into(), permissive_count(quantity_text));
    }

    /// Owned count for a material, 0 when never entered.
    pub fn owned(&self, material: &str) -> u64 {
        self.owned.get(material).copied().unwrap_or(0)
    }

    pub fn remaining_for(&self, requirement: &MaterialRequirement) -> u64 {
        remaining(requirement.required, self.owned(&requirement.name))
    }

    pub fn is_complete_for(&self, requirement: &MaterialRequirement) -> bool {
        is_complete(requirement.required, self.owned(&requirement.name))
    }

    /// Roll up completion across the character's requirement list.
    pub fn summary(&self, requirements: &[MaterialRequirement]) -> ProgressSummary {
        let total = requirements.len();
        let completed = requirements.iter().filter(|r| self.is_complete_for(r)).count();
        let percentage = if total == 0 {
            0
        } else {
            (completed as f64 / total as f64 * 100.0).round() as u32
        };
        ProgressSummary {
            completed,
            total,
            percentage,
        }
    }
}

/// Completion roll-up across a requirement list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    /// Rounded to a whole percent; 0 when the list is empty
    pub percentage: u32,
}

impl ProgressSummary {
    pub fn is_all_collected(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirements() -> Vec<MaterialRequirement> {
        vec![
            MaterialRequirement::new("Shivada Jade Sliver", "Gems", 1),
            MaterialRequirement::new("Shivada Jade Fragment", "Gems", 9),
            MaterialRequirement::new("Sakura Bloom", "Local Specialty", 168),
        ]
    }

    #[test]
    fn test_remaining_never_goes_negative() {
        assert_eq!(remaining(5, 0), 5);
        assert_eq!(remaining(5, 5), 0);
        assert_eq!(remaining(5, 9), 0);
    }

    #[test]
    fn test_exact_count_is_complete() {
        assert!(is_complete(5, 5));
        assert!(is_complete(5, 6));
        assert!(!is_complete(5, 4));
        assert!(is_complete(0, 0));
    }

    #[test]
    fn test_set_owned_parses_permissively() {
        let mut checklist = Checklist::new("Ayaka");
        checklist.set_owned("Sakura Bloom", "42");
        checklist.set_owned("Shivada Jade Sliver", "oops");
        checklist.set_owned("Shivada Jade Fragment", "-3");
        assert_eq!(checklist.owned("Sakura Bloom"), 42);
        assert_eq!(checklist.owned("Shivada Jade Sliver"), 0);
        assert_eq!(checklist.owned("Shivada Jade Fragment"), 0);
        assert_eq!(checklist.owned("Never Entered"), 0);
    }

    #[test]
    fn test_summary_counts_complete_lines() {
        let reqs = requirements();
        let mut checklist = Checklist::new("Ayaka");
        checklist.set_owned("Shivada Jade Sliver", "1");
        let summary = checklist.summary(&reqs);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.percentage, 33);
        assert!(!summary.is_all_collected());
    }

    #[test]
    fn test_summary_full_completion() {
        let reqs = vec![MaterialRequirement::new("Sakura Bloom", "Local Specialty", 5)];
        let mut checklist = Checklist::new("Ayaka");
        checklist.set_owned("Sakura Bloom", "5");
        let summary = checklist.summary(&reqs);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total, 1);
        assert_eq!(summary.percentage, 100);
        assert!(summary.is_all_collected());
    }

    #[test]
    fn test_empty_requirement_list_is_zero_percent() {
        let checklist = Checklist::new("Ayaka");
        let summary = checklist.summary(&[]);
        assert_eq!(summary.percentage, 0);
        assert!(!summary.is_all_collected());
    }

    #[test]
    fn test_group_by_category_keeps_first_appearance_order() {
        let reqs = requirements();
        let groups = group_by_category(&reqs);
        let names: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(names, vec!["Gems", "Local Specialty"]);
        assert_eq!(groups["Gems"].len(), 2);
    }
}
