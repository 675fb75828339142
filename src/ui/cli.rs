//! Command-line interface module.
//!
//! This module handles CLI argument parsing and the resolution of the input
//! file and its format.

use crate::error::{AnalysisError, Result};
use clap::Parser;
use regex::Regex;
use std::path::PathBuf;

/// CLI arguments for the gender balance analysis of parliament members
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// CSV file containing pieces of information about the members of parliament
    #[arg(short = 'd', long = "datafile", env = "MP_BALANCE_DATAFILE")]
    pub datafile: Option<PathBuf>,

    /// Directory the datafile is looked up in
    #[arg(long = "data-dir", env = "MP_BALANCE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Kind of file to analyse (csv or xml). Guessed from the datafile name if omitted
    #[arg(short = 'e', long = "extension")]
    pub extension: Option<String>,

    /// Displays a chart for each political party
    #[arg(short = 'p', long = "byparty")]
    pub by_party: bool,

    /// Information about the file
    #[arg(short = 'i', long = "info")]
    pub info: bool,

    /// Displays the names of all the MPs
    #[arg(short = 'n', long = "displaynames")]
    pub display_names: bool,

    /// Searches for an MP name
    #[arg(short = 's', long = "searchname")]
    pub search_name: Option<String>,

    /// Displays information about the Ith MP
    #[arg(short = 'I', long = "index", allow_negative_numbers = true)]
    pub index: Option<i64>,

    /// Displays a chart grouping the G biggest political parties
    #[arg(short = 'g', long = "groupfirst")]
    pub group_first: Option<usize>,

    /// Displays charts for the MPs split between those over and those under this age
    #[arg(short = 'a', long = "byage", allow_negative_numbers = true)]
    pub by_age: Option<i64>,

    /// Make the application talk!
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Formats a members file can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Xml,
}

impl SourceFormat {
    fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "xml" => Ok(SourceFormat::Xml),
            other => Err(AnalysisError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Resolves the datafile path from CLI arguments.
///
/// When a data directory is given the datafile is looked up inside it.
///
/// # Errors
/// [`AnalysisError::MissingDatafile`] if no datafile was given
pub fn resolve_datafile(args: &Args) -> Result<PathBuf> {
    let datafile = args
        .datafile
        .as_ref()
        .ok_or(AnalysisError::MissingDatafile)?;

    Ok(match args.data_dir {
        Some(ref dir) => dir.join(datafile),
        None => datafile.clone(),
    })
}

/// Determines the format of the datafile.
///
/// An explicit `--extension` wins; otherwise the three letter extension of
/// the file name is used.
///
/// # Errors
/// [`AnalysisError::UnsupportedFormat`] if the extension is unknown or missing
pub fn resolve_format(args: &Args, datafile: &std::path::Path) -> Result<SourceFormat> {
    if let Some(ref extension) = args.extension {
        return SourceFormat::from_extension(extension);
    }

    let file_name = datafile.to_string_lossy();
    let re = Regex::new(r"^.+\.(\D{3})$").expect("Invalid regex pattern");
    let extension = re
        .captures(&file_name)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| AnalysisError::UnsupportedFormat(file_name.to_string()))?;

    SourceFormat::from_extension(extension)
}
