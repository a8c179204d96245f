use std::path::PathBuf;
use std::str::FromStr;
use crate::address::PostalCodeStyle;
use crate::error::{FootnoteError, Result};
use crate::footnote::FootnoteDelimiter;

const DEFAULT_CANDIDATES: &str = "candidates.json";
const DEFAULT_REPORT: &str = "result/report.csv";

/// Settings for the report run, loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `CANDIDATES`: JSON array of US Street API candidates
    pub candidates_path: PathBuf,
    /// `REPORT`: where the CSV report is written
    pub report_path: PathBuf,
    /// `FOOTNOTE_DELIMITER`: `stripped` or `attached`
    pub footnote_delimiter: FootnoteDelimiter,
    /// `POSTAL_CODE_STYLE`: `hyphenated` or `omit-empty-plus4`
    pub postal_code_style: PostalCodeStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            candidates_path: PathBuf::from(DEFAULT_CANDIDATES),
            report_path: PathBuf::from(DEFAULT_REPORT),
            footnote_delimiter: FootnoteDelimiter::default(),
            postal_code_style: PostalCodeStyle::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// build settings from any variable source, unset variables keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        Ok(
            Self {
                candidates_path: lookup("CANDIDATES").map(PathBuf::from).unwrap_or(defaults.candidates_path),
                report_path: lookup("REPORT").map(PathBuf::from).unwrap_or(defaults.report_path),
                footnote_delimiter: match lookup("FOOTNOTE_DELIMITER") {
                    Some(value) => value.parse()?,
                    None => defaults.footnote_delimiter,
                },
                postal_code_style: match lookup("POSTAL_CODE_STYLE") {
                    Some(value) => value.parse()?,
                    None => defaults.postal_code_style,
                },
            }
        )
    }
}

impl FromStr for FootnoteDelimiter {
    type Err = FootnoteError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stripped" => Ok(FootnoteDelimiter::Stripped),
            "attached" => Ok(FootnoteDelimiter::Attached),
            _ => Err(FootnoteError::InvalidSetting {
                name: "FOOTNOTE_DELIMITER",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for PostalCodeStyle {
    type Err = FootnoteError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hyphenated" => Ok(PostalCodeStyle::AlwaysHyphenated),
            "omit-empty-plus4" => Ok(PostalCodeStyle::OmitEmptyPlus4),
            _ => Err(FootnoteError::InvalidSetting {
                name: "POSTAL_CODE_STYLE",
                value: s.to_string(),
            }),
        }
    }
}
