//! Runs the reports requested on the command line against one members file.

use crate::collection::MemberCollection;
use crate::error::{AnalysisError, Result};
use crate::registry::PartyRegistry;
use crate::ui::cli::{Args, SourceFormat, resolve_datafile, resolve_format};
use crate::ui::output::{
    print_age_bucket, print_age_histogram, print_biggest_groups, print_gender_chart, print_info,
    print_member, print_names, print_party_charts, print_search_result,
};
use std::io::Write;
use tracing::{debug, info};

const ALL_MPS: &str = "All MPs";

/// Loads the datafile named by `args` and writes every requested report to `out`.
///
/// The party registry lives for the duration of this call.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let datafile = resolve_datafile(args)?;
    let format = resolve_format(args, &datafile)?;
    debug!("Analysing '{}' as {:?}", datafile.display(), format);

    match format {
        SourceFormat::Csv => {}
        SourceFormat::Xml => return Err(AnalysisError::UnsupportedFormat("xml".to_string())),
    }

    let mut registry = PartyRegistry::new();
    let all_mps = MemberCollection::load(ALL_MPS, &datafile, &mut registry)?;
    info!(
        "📂 Loaded {} MPs from '{}'",
        all_mps.size(),
        datafile.display()
    );

    report(out, args, &all_mps, &registry)
}

/// Writes the reports selected in `args`, in a fixed order.
pub fn report<W: Write>(
    out: &mut W,
    args: &Args,
    all_mps: &MemberCollection,
    registry: &PartyRegistry,
) -> Result<()> {
    print_gender_chart(out, all_mps)?;

    if args.by_party {
        print_party_charts(out, &all_mps.by_party())?;
    }

    if args.info {
        print_info(out, all_mps)?;
    }

    if args.display_names {
        print_names(out, all_mps)?;
    }

    if let Some(ref name) = args.search_name {
        print_search_result(out, name, all_mps.contains(name))?;
    }

    if let Some(index) = args.index {
        let member = all_mps.at(index)?;
        print_member(out, index, member)?;
    }

    if let Some(group_first) = args.group_first {
        let parties = all_mps
            .by_party()
            .into_iter()
            .map(|(_, party_set)| party_set)
            .collect();
        let biggest = MemberCollection::biggest(parties, group_first);
        let combined = MemberCollection::combine_all(&biggest);
        print_biggest_groups(out, group_first, &biggest, combined.as_ref())?;
    }

    if let Some(threshold) = args.by_age {
        print_age_histogram(out, all_mps)?;
        for (label, bucket) in all_mps.by_age(threshold) {
            print_age_bucket(out, &label, &bucket, &bucket.party_counts(registry))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexError;
    use clap::Parser;
    use tempfile::NamedTempFile;

    const MEMBERS: &str = "nom;sexe;date_naissance;parti_ratt_financier\n\
                           Alice;F;1990-01-01;A\n\
                           Bob;H;1960-01-01;B\n\
                           Carol;F;1980-01-01;A\n\
                           Dan;H;1950-01-01;B\n\
                           Eve;F;1955-01-01;B\n";

    fn members_file(suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(MEMBERS.as_bytes()).unwrap();
        file
    }

    fn args_for(path: &std::path::Path, extra: &[&str]) -> Args {
        let mut argv = vec![
            "mp_balance".to_string(),
            "-d".to_string(),
            path.to_string_lossy().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Args::try_parse_from(argv).unwrap()
    }

    fn run_to_string(args: &Args) -> Result<String> {
        let mut out = Vec::new();
        run(args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn always_starts_with_the_gender_chart_of_all_mps() {
        let file = members_file(".csv");
        let text = run_to_string(&args_for(file.path(), &[])).unwrap();

        assert!(text.contains("All MPs (5 MPs)"));
        assert!(text.contains("Female (3)"));
        assert!(text.contains("Male (2)"));
    }

    #[test]
    fn runs_every_report() {
        let file = members_file(".csv");
        let args = args_for(
            file.path(),
            &["-p", "-i", "-n", "-s", "Alice", "-I", "2", "-g", "1", "-a", "200"],
        );

        let text = run_to_string(&args).unwrap();
        assert!(text.contains("Gender balance by party (2 parties)"));
        assert!(text.contains("MPs from party 'A' (2 MPs)"));
        assert!(text.contains("MemberCollection: 5 members"));
        assert!(text.contains("Alice\nBob\nCarol\nDan\nEve\n"));
        assert!(text.contains("Testing if Alice is present: true"));
        assert!(text.contains("MP #2"));
        assert!(text.contains("\"nom\": \"Carol\""));
        assert!(text.contains("Info: the 1 biggest groups are :\n\t- MPs from party 'B'\n"));
        assert!(text.contains("Ages (5 MPs)"));
        assert!(text.contains("Under (or equal) 200 years old:"));
        assert!(text.contains("Over 200 years old:"));
    }

    #[test]
    fn age_buckets_report_their_party_distribution() {
        let file = members_file(".csv");
        let text = run_to_string(&args_for(file.path(), &["-a", "200"])).unwrap();

        let under = text.find("Under (or equal) 200 years old : Distribution by party :").unwrap();
        let over = text.find("Over 200 years old : Distribution by party :").unwrap();
        assert!(under < over);
        assert!(text[under..over].contains("\"A\": 2"));
        assert!(text[under..over].contains("\"B\": 3"));
        assert!(text[over..].contains("\"A\": 0"));
        assert!(text[over..].contains("\"B\": 0"));
    }

    #[test]
    fn out_of_range_index_stops_the_run() {
        let file = members_file(".csv");

        let args = args_for(file.path(), &["-I", "5"]);
        assert!(matches!(
            run_to_string(&args),
            Err(AnalysisError::Index(IndexError::TooLarge { index: 5, size: 5 }))
        ));

        let args = args_for(file.path(), &["-I", "-1"]);
        assert!(matches!(
            run_to_string(&args),
            Err(AnalysisError::Index(IndexError::Negative { index: -1 }))
        ));
    }

    #[test]
    fn index_dumps_every_column_of_the_sample_file() {
        let sample = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/current_mps.csv");
        let text = run_to_string(&args_for(&sample, &["-I", "0"])).unwrap();

        assert!(text.contains("\"id\": \"1\""));
        assert!(text.contains("\"num_deptmt\": \"01\""));
        assert!(text.contains("\"nom\": \"Marie Durand\""));
        assert!(text.contains("\"date_naissance\": \"1965-04-12\""));
    }

    #[test]
    fn xml_sources_are_unsupported() {
        let file = members_file(".xml");

        assert!(matches!(
            run_to_string(&args_for(file.path(), &[])),
            Err(AnalysisError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn missing_source_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.csv");

        assert!(matches!(
            run_to_string(&args_for(&missing, &[])),
            Err(AnalysisError::SourceNotFound { .. })
        ));
    }

    #[test]
    fn grouping_more_parties_than_exist_lists_them_all() {
        let file = members_file(".csv");
        let text = run_to_string(&args_for(file.path(), &["-g", "10", "-a", "5"])).unwrap();

        assert!(text.contains(
            "Info: the 10 biggest groups are :\n\t- MPs from party 'B'\n\t- MPs from party 'A'\n"
        ));
        assert!(text.contains("MPs from party 'B' - MPs from party 'A' (5 MPs)"));
        // below the minimum age there is a single bucket
        assert!(text.contains("Under (or equal) 18 years old:"));
        assert!(!text.contains("Over 5 years old"));
    }
}
