use super::serde_helpers::{BIRTH_DATE_FORMAT, blank_as_none, parse_birth_date};
use chrono::{NaiveDate, TimeDelta};
use serde::Deserialize;
use std::{collections::BTreeMap, fmt};

pub const NAME_COLUMN: &str = "nom";
pub const SEX_COLUMN: &str = "sexe";
pub const BIRTH_DATE_COLUMN: &str = "date_naissance";
pub const PARTY_COLUMN: &str = "parti_ratt_financier";

/// Sex code as written in the `sexe` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Sex {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "H")]
    Male,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Female => write!(f, "Female"),
            Sex::Male => write!(f, "Male"),
        }
    }
}

/// One row of the members file.
///
/// Two records are equal only when every column of their source row is equal,
/// so `columns` takes part in equality and hashing. `columns` is also what
/// gets printed when a single member is dumped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct MemberRecord {
    #[serde(rename = "nom")]
    pub name: String,

    #[serde(rename = "sexe")]
    pub sex: Sex,

    #[serde(rename = "date_naissance", deserialize_with = "parse_birth_date")]
    pub birth_date: NaiveDate,

    #[serde(
        rename = "parti_ratt_financier",
        default,
        deserialize_with = "blank_as_none"
    )]
    pub party: Option<String>,

    /// Raw source row keyed by header name.
    #[serde(skip)]
    pub columns: BTreeMap<String, String>,
}

impl MemberRecord {
    pub fn new(name: &str, sex: Sex, birth_date: NaiveDate, party: Option<&str>) -> Self {
        let mut columns = BTreeMap::new();
        columns.insert(NAME_COLUMN.to_string(), name.to_string());
        columns.insert(
            SEX_COLUMN.to_string(),
            match sex {
                Sex::Female => "F",
                Sex::Male => "H",
            }
            .to_string(),
        );
        columns.insert(
            BIRTH_DATE_COLUMN.to_string(),
            birth_date.format(BIRTH_DATE_FORMAT).to_string(),
        );
        columns.insert(
            PARTY_COLUMN.to_string(),
            party.unwrap_or_default().to_string(),
        );

        MemberRecord {
            name: name.to_string(),
            sex,
            birth_date,
            party: party.map(String::from),
            columns,
        }
    }

    /// Age of the member on `today`.
    pub fn age_on(&self, today: NaiveDate) -> MemberAge {
        MemberAge::between(self.birth_date, today)
    }
}

/// Age derived from a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberAge {
    pub elapsed: TimeDelta,
    pub years: i64,
}

impl MemberAge {
    pub fn between(birth_date: NaiveDate, today: NaiveDate) -> Self {
        let elapsed = today.signed_duration_since(birth_date);
        MemberAge {
            elapsed,
            years: elapsed.num_days().div_euclid(365),
        }
    }
}
