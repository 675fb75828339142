use crate::error::{AnalysisError, Result};
use crate::models::member::MemberRecord;
use std::path::Path;
use tracing::debug;

const DELIMITER: u8 = b';';

/// Reads every member of a semicolon separated file, in file order.
///
/// Each record keeps its full raw row in [`MemberRecord::columns`].
///
/// # Errors
/// - [`AnalysisError::SourceNotFound`] if `path` is not an existing file
/// - [`AnalysisError::Csv`] if a row cannot be read or deserialized
pub fn read_members(path: &Path) -> Result<Vec<MemberRecord>> {
    if !path.exists() || !path.is_file() {
        return Err(AnalysisError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!("File '{}' found, reading members...", path.display());

    let csv_error = |source: csv::Error| AnalysisError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error)?;
    let headers = csv_reader.headers().map_err(csv_error)?.clone();

    let mut members = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(csv_error)?;
        let mut member: MemberRecord = row.deserialize(Some(&headers)).map_err(csv_error)?;
        member.columns = headers
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        members.push(member);
    }

    debug!("Read {} members from '{}'", members.len(), path.display());
    Ok(members)
}
