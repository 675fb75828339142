//! Output and reporting functions for the analysis.
//!
//! This module handles all report output, including:
//! - Gender balance charts
//! - Party breakdowns and distributions
//! - Name listing, search and single member dumps
//! - Age histograms
//!
//! Every function writes to the given writer; the binary hands them stdout.

use crate::charts::{AgeHistogram, HISTOGRAM_BINS, gender_chart};
use crate::collection::MemberCollection;
use crate::error::Result;
use crate::models::member::MemberRecord;
use std::collections::BTreeMap;
use std::io::Write;

const SEPARATOR_WIDTH: usize = 50;

/// Prints the female/male chart of a collection.
pub fn print_gender_chart<W: Write>(out: &mut W, collection: &MemberCollection) -> Result<()> {
    writeln!(
        out,
        "\n{}",
        gender_chart(collection.name(), collection.gender_balance())
    )?;
    Ok(())
}

/// Prints the name and the gender chart of every party.
pub fn print_party_charts<W: Write>(
    out: &mut W,
    parties: &[(String, MemberCollection)],
) -> Result<()> {
    writeln!(out, "\n🏛️  Gender balance by party ({} parties)", parties.len())?;
    for (party, party_set) in parties {
        writeln!(out, "\n{}", party)?;
        print_gender_chart(out, party_set)?;
    }
    Ok(())
}

pub fn print_info<W: Write>(out: &mut W, collection: &MemberCollection) -> Result<()> {
    writeln!(out, "\n{}", collection.summary())?;
    Ok(())
}

pub fn print_names<W: Write>(out: &mut W, collection: &MemberCollection) -> Result<()> {
    writeln!(out, "\n{}", collection)?;
    Ok(())
}

pub fn print_search_result<W: Write>(out: &mut W, name: &str, is_present: bool) -> Result<()> {
    writeln!(out, "\nTesting if {} is present: {}", name, is_present)?;
    Ok(())
}

/// Prints the whole source row of one member as pretty JSON.
///
/// # Arguments
/// * `index` - Position of the member in the collection
/// * `member` - The member found at that position
pub fn print_member<W: Write>(out: &mut W, index: i64, member: &MemberRecord) -> Result<()> {
    writeln!(out, "\n🔎 MP #{}", index)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&member.columns)?)?;
    Ok(())
}

/// Prints the names of the biggest parties, then the chart of their union.
///
/// # Arguments
/// * `requested` - Number of parties the user asked for
/// * `biggest` - The biggest parties, biggest first
/// * `combined` - Union of `biggest`, if there was at least one party
pub fn print_biggest_groups<W: Write>(
    out: &mut W,
    requested: usize,
    biggest: &[MemberCollection],
    combined: Option<&MemberCollection>,
) -> Result<()> {
    writeln!(out, "\nInfo: the {} biggest groups are :", requested)?;
    for party in biggest {
        writeln!(out, "\t- {}", party.name())?;
    }

    match combined {
        Some(combined) => print_gender_chart(out, combined),
        None => {
            writeln!(out, "⚠️  No political party found, nothing to group")?;
            Ok(())
        }
    }
}

pub fn print_age_histogram<W: Write>(out: &mut W, collection: &MemberCollection) -> Result<()> {
    let histogram = AgeHistogram::from_ages(&collection.ages_in_years(), HISTOGRAM_BINS);
    writeln!(out, "\n{}", histogram.render())?;
    Ok(())
}

/// Prints an age bucket: its label, its gender chart and its party distribution.
///
/// # Arguments
/// * `label` - Human readable age range of the bucket
/// * `bucket` - Members of the bucket
/// * `party_counts` - Number of members of the bucket in every known party
pub fn print_age_bucket<W: Write>(
    out: &mut W,
    label: &str,
    bucket: &MemberCollection,
    party_counts: &BTreeMap<String, usize>,
) -> Result<()> {
    writeln!(out, "\n{}", "-".repeat(SEPARATOR_WIDTH))?;
    writeln!(out, "{}:", label)?;
    print_gender_chart(out, bucket)?;
    writeln!(out, "\n{} : Distribution by party :\n", label)?;
    writeln!(out, "{}", serde_json::to_string_pretty(party_counts)?)?;
    Ok(())
}
