//! Registry of every party name seen during a run.
//!
//! A [`PartyRegistry`] is created empty by the top-level run and handed to
//! every [`MemberCollection::load`](crate::collection::MemberCollection::load)
//! call. It only grows; dropping it at the end of the run is the only reset.

use crate::models::member::MemberRecord;
use std::collections::BTreeSet;

#[derive(Debug, Default, Clone)]
pub struct PartyRegistry {
    parties: BTreeSet<String>,
}

impl PartyRegistry {
    pub fn new() -> Self {
        PartyRegistry {
            parties: BTreeSet::new(),
        }
    }

    /// Adds the non-empty party of every record. Already known parties are ignored.
    pub fn register<'a, I>(&mut self, members: I)
    where
        I: IntoIterator<Item = &'a MemberRecord>,
    {
        for party in members.into_iter().filter_map(|m| m.party.as_ref()) {
            self.parties.insert(party.clone());
        }
    }

    pub fn parties(&self) -> impl Iterator<Item = &str> {
        self.parties.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.parties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::member::Sex;
    use chrono::NaiveDate;

    fn member(name: &str, party: Option<&str>) -> MemberRecord {
        let birth = NaiveDate::from_ymd_opt(1975, 6, 1).unwrap();
        MemberRecord::new(name, Sex::Female, birth, party)
    }

    #[test]
    fn starts_empty() {
        let registry = PartyRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.parties().count(), 0);
    }

    #[test]
    fn register_skips_members_without_party() {
        let mut registry = PartyRegistry::new();
        registry.register(&[member("a", Some("A")), member("b", None)]);

        assert_eq!(registry.parties().collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn register_accumulates_union_of_parties() {
        let mut registry = PartyRegistry::new();
        registry.register(&[member("a", Some("A")), member("b", Some("B"))]);
        registry.register(&[member("c", Some("B")), member("d", Some("C"))]);
        registry.register(&[member("e", Some("A"))]);

        let parties: Vec<&str> = registry.parties().collect();
        assert_eq!(parties, vec!["A", "B", "C"]);
    }

    #[test]
    fn registering_nothing_keeps_known_parties() {
        let mut registry = PartyRegistry::new();
        registry.register(&[member("a", Some("A"))]);
        registry.register(&Vec::<MemberRecord>::new());

        assert_eq!(registry.parties().collect::<Vec<_>>(), vec!["A"]);
    }
}
