//! Collection of parliament members and the views computed over it.
//!
//! A [`MemberCollection`] is populated once, either from a file through
//! [`MemberCollection::load`] or from records already in memory, and is read
//! only afterwards. Partitioning (by party, by age) always produces new,
//! independently owned collections.

use crate::error::{IndexError, Result};
use crate::models::member::{MemberAge, MemberRecord, Sex};
use crate::parser::read_members;
use crate::registry::PartyRegistry;
use chrono::{Local, NaiveDate};
use std::{
    cell::OnceCell,
    cmp::Ordering,
    collections::{BTreeMap, HashSet},
    fmt,
    path::Path,
};
use tracing::debug;

/// Members younger than this cannot sit in parliament.
pub const MINIMUM_MP_AGE: i64 = 18;

/// Female and male head counts of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenderBalance {
    pub female: usize,
    pub male: usize,
}

impl GenderBalance {
    pub fn total(&self) -> usize {
        self.female + self.male
    }
}

#[derive(Debug, Clone)]
pub struct MemberCollection {
    name: String,
    members: Vec<MemberRecord>,
    /// Lazily computed, one entry per member, same order as `members`.
    ages: OnceCell<Vec<MemberAge>>,
}

impl MemberCollection {
    /// Loads the members of a semicolon separated file and registers their parties.
    ///
    /// # Errors
    /// Fails with [`AnalysisError::SourceNotFound`](crate::error::AnalysisError::SourceNotFound)
    /// when `source` does not exist, or with a CSV error when a row is malformed.
    pub fn load(name: &str, source: &Path, registry: &mut PartyRegistry) -> Result<Self> {
        let members = read_members(source)?;
        registry.register(&members);

        debug!(
            "Loaded {} members into '{}', {} parties registered",
            members.len(),
            name,
            registry.len()
        );
        Ok(Self::from_members(name, members))
    }

    pub fn from_members(name: &str, members: Vec<MemberRecord>) -> Self {
        MemberCollection {
            name: name.to_string(),
            members,
            ages: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of members. Derived from the records, there is no way to set it.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn members(&self) -> &[MemberRecord] {
        &self.members
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m.name == name)
    }

    /// Returns the member at position `index`, in source order.
    pub fn at(&self, index: i64) -> core::result::Result<&MemberRecord, IndexError> {
        let position = usize::try_from(index).map_err(|_| IndexError::Negative { index })?;

        self.members.get(position).ok_or(IndexError::TooLarge {
            index,
            size: self.size(),
        })
    }

    pub fn gender_balance(&self) -> GenderBalance {
        self.members
            .iter()
            .fold(GenderBalance::default(), |mut balance, member| {
                match member.sex {
                    Sex::Female => balance.female += 1,
                    Sex::Male => balance.male += 1,
                }
                balance
            })
    }

    /// Splits the collection by party, in order of first appearance.
    ///
    /// Members without a party do not appear in any of the returned collections.
    pub fn by_party(&self) -> Vec<(String, MemberCollection)> {
        let mut parties: Vec<&str> = Vec::new();
        for party in self.members.iter().filter_map(|m| m.party.as_deref()) {
            if !parties.contains(&party) {
                parties.push(party);
            }
        }

        parties
            .into_iter()
            .map(|party| {
                let subset = self.select(&format!("MPs from party '{}'", party), |member, _| {
                    member.party.as_deref() == Some(party)
                });
                (party.to_string(), subset)
            })
            .collect()
    }

    /// Number of members of every registered party, zero included.
    pub fn party_counts(&self, registry: &PartyRegistry) -> BTreeMap<String, usize> {
        registry
            .parties()
            .map(|party| {
                let count = self
                    .members
                    .iter()
                    .filter(|m| m.party.as_deref() == Some(party))
                    .count();
                (party.to_string(), count)
            })
            .collect()
    }

    /// Ages of every member, computed against today's date on first use.
    pub fn ages(&self) -> &[MemberAge] {
        self.ages_on(Local::now().date_naive())
    }

    /// Ages of every member computed against `today`.
    ///
    /// Ages are cached on first computation; later calls return the cached
    /// values whatever `today` is.
    pub fn ages_on(&self, today: NaiveDate) -> &[MemberAge] {
        self.ages
            .get_or_init(|| self.members.iter().map(|m| m.age_on(today)).collect())
    }

    pub fn ages_in_years(&self) -> Vec<i64> {
        self.ages().iter().map(|age| age.years).collect()
    }

    pub fn by_age(&self, threshold: i64) -> Vec<(String, MemberCollection)> {
        self.by_age_on(threshold, Local::now().date_naive())
    }

    /// Splits the collection around an age `threshold`, in years.
    ///
    /// Below [`MINIMUM_MP_AGE`] nobody can be on the lower side of the split,
    /// so a single bucket holding every member is returned. Otherwise the first
    /// bucket holds members aged `threshold` or less, the second the older ones.
    pub fn by_age_on(&self, threshold: i64, today: NaiveDate) -> Vec<(String, MemberCollection)> {
        let ages = self.ages_on(today);

        if threshold < MINIMUM_MP_AGE {
            let label = format!("Under (or equal) {} years old", MINIMUM_MP_AGE);
            let everyone = self.select(&label, |_, _| true);
            return vec![(label, everyone)];
        }

        let under_label = format!("Under (or equal) {} years old", threshold);
        let over_label = format!("Over {} years old", threshold);
        let under = self.select(&under_label, |_, i| ages[i].years <= threshold);
        let over = self.select(&over_label, |_, i| ages[i].years > threshold);

        vec![(under_label, under), (over_label, over)]
    }

    /// Union of both collections without duplicated rows, `self` first.
    pub fn combine(&self, other: &MemberCollection) -> MemberCollection {
        let name = format!("{} - {}", self.name, other.name);
        let mut seen: HashSet<&MemberRecord> = HashSet::new();
        let mut members = Vec::new();
        let mut ages = Vec::new();

        let both_aged = self.ages.get().zip(other.ages.get());
        let rows = self.members.iter().chain(other.members.iter());
        for (i, member) in rows.enumerate() {
            if !seen.insert(member) {
                continue;
            }
            members.push(member.clone());
            if let Some((left, right)) = both_aged {
                let age = if i < left.len() {
                    left[i]
                } else {
                    right[i - left.len()]
                };
                ages.push(age);
            }
        }

        let combined = Self::from_members(&name, members);
        if both_aged.is_some() {
            let _ = combined.ages.set(ages);
        }
        combined
    }

    /// Folds [`combine`](Self::combine) over `collections`, left to right.
    ///
    /// A single collection comes back unchanged; an empty sequence gives `None`.
    pub fn combine_all<'a, I>(collections: I) -> Option<MemberCollection>
    where
        I: IntoIterator<Item = &'a MemberCollection>,
    {
        collections
            .into_iter()
            .fold(None, |combined, next| match combined {
                None => Some(next.clone()),
                Some(combined) => Some(combined.combine(next)),
            })
    }

    pub fn cmp_size(&self, other: &MemberCollection) -> Ordering {
        self.size().cmp(&other.size())
    }

    /// Keeps the `n` biggest collections, biggest first.
    ///
    /// Collections of equal size keep their relative order.
    pub fn biggest(mut collections: Vec<MemberCollection>, n: usize) -> Vec<MemberCollection> {
        collections.sort_by(|a, b| b.cmp_size(a));
        collections.truncate(n);
        collections
    }

    /// One-line description stating the number of members.
    pub fn summary(&self) -> String {
        format!("MemberCollection: {} members", self.size())
    }

    /// New collection with the members matching `keep`, carrying their cached ages.
    fn select<F>(&self, name: &str, keep: F) -> MemberCollection
    where
        F: Fn(&MemberRecord, usize) -> bool,
    {
        let indices: Vec<usize> = self
            .members
            .iter()
            .enumerate()
            .filter(|(i, member)| keep(*member, *i))
            .map(|(i, _)| i)
            .collect();

        let members = indices.iter().map(|&i| self.members[i].clone()).collect();
        let subset = Self::from_members(name, members);
        if let Some(ages) = self.ages.get() {
            let _ = subset.ages.set(indices.iter().map(|&i| ages[i]).collect());
        }
        subset
    }
}

/// Lists member names, one per line, in source order.
impl fmt::Display for MemberCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for member in &self.members {
            writeln!(f, "{}", member.name)?;
        }
        Ok(())
    }
}
