//! Minimal skill records.
//!
//! Skill resolution is not part of this engine; skills exist here only so the
//! character snapshot covers them alongside stats, attrs, conditions, and
//! traits at every persistence checkpoint.

use indexmap::IndexMap;

/// A learned skill with its current rating.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    pub rating: i32,
}

impl Skill {
    pub fn new(name: impl Into<String>, rating: i32) -> Self {
        Self {
            name: name.into(),
            rating,
        }
    }
}

/// Insertion-ordered collection of a character's skills.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillSet {
    skills: IndexMap<String, Skill>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a skill by name.
    pub fn add(&mut self, skill: Skill) {
        self.skills.insert(skill.name.clone(), skill);
    }

    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.skills.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.values()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Plain records for snapshotting.
    pub fn records(&self) -> Vec<Skill> {
        self.skills.values().cloned().collect()
    }

    /// Rebuild from snapshot records.
    pub fn from_records(records: Vec<Skill>) -> Self {
        let mut set = Self::new();
        for skill in records {
            set.add(skill);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_replaces_by_name() {
        let mut set = SkillSet::new();
        set.add(Skill::new("destruction", 10));
        set.add(Skill::new("destruction", 15));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("destruction").unwrap().rating, 15);
    }

    #[test]
    fn records_round_trip_preserves_order() {
        let mut set = SkillSet::new();
        set.add(Skill::new("sneak", 5));
        set.add(Skill::new("alchemy", 8));
        let rebuilt = SkillSet::from_records(set.records());
        let names: Vec<_> = rebuilt.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["sneak", "alchemy"]);
    }
}
