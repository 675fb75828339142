//! Custom serde helpers for the members CSV format.
//!
//! The source file stores dates as plain `YYYY-MM-DD` strings and leaves the
//! party column blank for members without a financial party attachment.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de};

/// Format of the `date_naissance` column.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Deserializes a `YYYY-MM-DD` string into a [`NaiveDate`].
///
/// # Examples
/// ```text
/// Input:  "1970-03-21"
/// Output: NaiveDate(1970, 3, 21)
/// ```
pub fn parse_birth_date<'a, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'a>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(raw.trim(), BIRTH_DATE_FORMAT).map_err(|e| {
        de::Error::custom(format!(
            "invalid birth date '{}', expected {}: {}",
            raw, BIRTH_DATE_FORMAT, e
        ))
    })
}

/// Deserializes an optional party name, mapping blank values to `None`.
///
/// # Examples
/// ```text
/// Input:  ""      -> None
/// Input:  "  "    -> None
/// Input:  " LR "  -> Some("LR")
/// ```
pub fn blank_as_none<'a, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'a>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
