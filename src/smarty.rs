use std::sync::LazyLock;
use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};
use smarty_rust_sdk::us_street_api::candidate::Candidate;
use smarty_rust_sdk::us_street_api::lookup::{Lookup, MatchStrategy};
use crate::address::{Address, AddressComponents};
use crate::error::FootnoteError;
use crate::footnote::{decode_analysis_footnotes_with, decode_dpv_footnotes, AnalysisFootnote, DpvFootnote, FootnoteDelimiter};

/// 12345, 12345-6789 or 12345 6789
static POSTAL_CODE_REG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{5})(?:[-\s](\d{4}))?$").unwrap());

/// At most this many candidates are requested per lookup.
const MAX_CANDIDATES: u8 = 4;

impl From<&Address> for Lookup {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street_address.clone(),
            secondary: address.unit_apt_number.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            zipcode: entered_postal_code(&address.postal_code),
            max_candidates: MAX_CANDIDATES.into(),
            match_strategy: MatchStrategy::Enhanced,
            ..Default::default()
        }
    }
}

/// normalize `12345 6789` to `12345-6789`, anything unrecognized is sent as is
fn entered_postal_code(postal_code: &str) -> String {
    let postal_code = postal_code.trim();
    match POSTAL_CODE_REG.captures(postal_code) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(zip), Some(plus4)) => format!("{}-{}", zip.as_str(), plus4.as_str()),
            (Some(zip), None) => zip.as_str().to_string(),
            _ => postal_code.to_string(),
        },
        None => {
            warn!("entered postal code [{}] is not a ZIP or ZIP+4", postal_code);
            postal_code.to_string()
        }
    }
}

impl From<&Candidate> for AddressComponents {
    fn from(candidate: &Candidate) -> Self {
        let c = &candidate.components;
        Self {
            primary_number: c.primary_number.clone(),
            street_predirection: c.street_predirection.clone(),
            street_name: c.street_name.clone(),
            street_suffix: c.street_suffix.clone(),
            street_postdirection: c.street_postdirection.clone(),
            secondary_designator: c.secondary_designator.clone(),
            secondary_number: c.secondary_number.clone(),
            extra_secondary_designator: c.extra_secondary_designator.clone(),
            extra_secondary_number: c.extra_secondary_number.clone(),
            city_name: c.city_name.clone(),
            state: c.state_abbreviation.clone(),
            zipcode: c.zipcode.clone(),
            plus4_code: c.plus4_code.clone(),
        }
    }
}

/// DPV match code of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DpvConfirmation {
    /// Y: confirmed for both primary and secondary numbers
    Confirmed,
    /// S: confirmed by dropping the secondary number
    ConfirmedSecondaryIgnored,
    /// D: confirmed for the primary number only, the secondary is missing
    ConfirmedMissingSecondary,
    /// N or absent
    NotConfirmed,
}

impl TryFrom<&str> for DpvConfirmation {
    type Error = FootnoteError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_uppercase().as_str() {
            "Y" => Ok(DpvConfirmation::Confirmed),
            "S" => Ok(DpvConfirmation::ConfirmedSecondaryIgnored),
            "D" => Ok(DpvConfirmation::ConfirmedMissingSecondary),
            "N" | "" => Ok(DpvConfirmation::NotConfirmed),
            _ => Err(FootnoteError::UnknownMatchCode(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum YesOrNo {
    N,
    Y,
}

impl YesOrNo {
    /// an empty flag means the service did not report it
    pub fn parse_flag(value: &str) -> Result<Option<Self>, FootnoteError> {
        match value.to_lowercase().as_str() {
            "y" => Ok(Some(YesOrNo::Y)),
            "n" => Ok(Some(YesOrNo::N)),
            "" => Ok(None),
            _ => Err(FootnoteError::UnknownFlag(value.to_string())),
        }
    }
}

/// The parts of a candidate's analysis that drive user guidance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateAnalysis {
    pub dpv_footnotes: Vec<DpvFootnote>,
    pub footnotes: Vec<AnalysisFootnote>,
    pub confirmation: DpvConfirmation,
    pub vacant: Option<YesOrNo>,
    pub no_stat: Option<YesOrNo>,
}

impl CandidateAnalysis {
    pub fn from_raw(
        dpv_match_code: &str,
        dpv_footnotes: &str,
        footnotes: &str,
        vacant: &str,
        no_stat: &str,
        delimiter: FootnoteDelimiter,
    ) -> Result<Self, FootnoteError> {
        Ok(
            Self {
                dpv_footnotes: decode_dpv_footnotes(Some(dpv_footnotes))?,
                footnotes: decode_analysis_footnotes_with(Some(footnotes), delimiter),
                confirmation: DpvConfirmation::try_from(dpv_match_code)?,
                vacant: YesOrNo::parse_flag(vacant)?,
                no_stat: YesOrNo::parse_flag(no_stat)?,
            }
        )
    }

    pub fn from_candidate(candidate: &Candidate, delimiter: FootnoteDelimiter) -> Result<Self, FootnoteError> {
        let analysis = &candidate.analysis;
        Self::from_raw(
            &analysis.dpv_match_code,
            &analysis.dpv_footnotes,
            &analysis.footnotes,
            &analysis.dpv_vacant,
            &analysis.dpv_no_stat,
            delimiter,
        )
    }

    /// confirmed, occupied, a USPS delivery point, and actually served by USPS
    pub fn is_deliverable(&self) -> bool {
        self.confirmation == DpvConfirmation::Confirmed
            && self.vacant == Some(YesOrNo::N)
            && self.no_stat == Some(YesOrNo::N)
            && !self.dpv_footnotes.iter().any(DpvFootnote::is_no_usps_delivery)
    }
}

impl TryFrom<&Candidate> for CandidateAnalysis {
    type Error = FootnoteError;

    fn try_from(candidate: &Candidate) -> Result<Self, Self::Error> {
        Self::from_candidate(candidate, FootnoteDelimiter::default())
    }
}
