use log::{error, info};
use serde::Serialize;
use smarty_rust_sdk::us_street_api::candidate::Candidate;
use crate::address::{normalize_address_with, Address, AddressComponents};
use crate::config::Settings;
use crate::guidance::Guidance;
use crate::smarty::{CandidateAnalysis, DpvConfirmation};

/// One row of the CSV report
#[derive(Debug, Serialize)]
pub struct Record {
    index: usize,
    street: String,
    unit: String,
    city: String,
    state: String,
    postal_code: String,
    #[serde(rename = "DPV")]
    pub confirmation: DpvConfirmation,
    pub deliverable: bool,
    dpv_footnotes: String,
    footnotes: String,
    messages: String,
}

impl Record {
    pub fn from_address_and_analysis(index: usize, address: Address, analysis: &CandidateAnalysis) -> Self {
        let guidance = Guidance::from_analysis(analysis);
        Self {
            index,
            street: address.street_address,
            unit: address.unit_apt_number,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
            confirmation: analysis.confirmation,
            deliverable: analysis.is_deliverable(),
            dpv_footnotes: join_codes(&analysis.dpv_footnotes),
            footnotes: join_codes(&analysis.footnotes),
            messages: guidance.messages().join("; "),
        }
    }
}

/// Build one record per candidate. Candidates that cannot be decoded are logged and skipped.
pub fn build_records(candidates: &[Candidate], settings: &Settings) -> Vec<Record> {
    let total = candidates.len();
    candidates.iter().enumerate().filter_map(|(idx, candidate)| {
        let analysis = match CandidateAnalysis::from_candidate(candidate, settings.footnote_delimiter) {
            Ok(analysis) => analysis,
            Err(e) => {
                error!("[{}/{total}] cannot decode candidate: {:?}", idx + 1, e);
                return None;
            }
        };
        let address = normalize_address_with(&AddressComponents::from(candidate), settings.postal_code_style);
        info!("[{}/{total}] [{}] is {:?}", idx + 1, address.street_address, analysis.confirmation);
        Some(Record::from_address_and_analysis(idx, address, &analysis))
    })
        .collect()
}

/// deliverable first, then by match code
pub fn sort_records(records: &mut [Record]) {
    records.sort_by_key(|r| (!r.deliverable, r.confirmation));
}

fn join_codes<T: AsRef<str>>(codes: &[T]) -> String {
    codes.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::PostalCodeStyle;
    use crate::footnote::FootnoteDelimiter;

    fn candidate(match_code: &str, dpv_footnotes: &str, plus4: &str) -> Candidate {
        let mut candidate = Candidate::default();
        candidate.components.primary_number = "123".into();
        candidate.components.street_name = "Main".into();
        candidate.components.street_suffix = "St".into();
        candidate.components.zipcode = "20001".into();
        candidate.components.plus4_code = plus4.into();
        candidate.analysis.dpv_match_code = match_code.into();
        candidate.analysis.dpv_footnotes = dpv_footnotes.into();
        candidate.analysis.dpv_vacant = "N".into();
        candidate.analysis.dpv_no_stat = "N".into();
        candidate
    }

    #[test]
    fn undecodable_candidates_are_skipped() {
        let candidates = vec![
            candidate("Y", "AABB", "1234"),
            candidate("Y", "AAB", "1234"),
            candidate("X", "AABB", "1234"),
            candidate("N", "A1", "1234"),
        ];
        let records = build_records(&candidates, &Settings::default());
        assert_eq!(records.iter().map(|r| r.index).collect::<Vec<_>>(), vec![0, 3]);
        assert!(records[0].deliverable);
        assert_eq!(records[1].confirmation, DpvConfirmation::NotConfirmed);
    }

    #[test]
    fn records_follow_postal_code_style() {
        let candidates = vec![candidate("Y", "AABB", "")];
        let settings = Settings {
            postal_code_style: PostalCodeStyle::OmitEmptyPlus4,
            ..Settings::default()
        };
        assert_eq!(build_records(&candidates, &Settings::default())[0].postal_code, "20001-");
        assert_eq!(build_records(&candidates, &settings)[0].postal_code, "20001");
    }

    #[test]
    fn deliverable_records_sort_first_then_by_match() {
        let candidates = vec![
            candidate("N", "A1", "1234"),
            candidate("D", "AAN1", "1234"),
            candidate("Y", "AABBR7", "1234"),
            candidate("Y", "AABB", "1234"),
            candidate("S", "AACC", "1234"),
        ];
        let mut records = build_records(&candidates, &Settings::default());
        sort_records(&mut records);
        assert_eq!(records.iter().map(|r| r.index).collect::<Vec<_>>(), vec![3, 2, 4, 1, 0]);
        assert!(records[0].deliverable);
        assert!(records[1..].iter().all(|r| !r.deliverable));
    }

    #[test]
    fn record_carries_codes_and_messages() {
        let analysis = CandidateAnalysis::from_raw("S", "AACC", "S#", "N", "N", FootnoteDelimiter::Attached).unwrap();
        let address = Address {
            street_address: "123 Main St".into(),
            postal_code: "20001-1234".into(),
            ..Default::default()
        };
        let record = Record::from_address_and_analysis(3, address, &analysis);
        assert_eq!(record.index, 3);
        assert_eq!(record.confirmation, DpvConfirmation::ConfirmedSecondaryIgnored);
        assert!(!record.deliverable);
        assert_eq!(record.dpv_footnotes, "AA CC");
        assert_eq!(record.footnotes, "S#");
        assert_eq!(record.messages, "You provided a unit/apartment number, which is not required for this address.");
    }
}
