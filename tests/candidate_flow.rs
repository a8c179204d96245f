//! Decode and normalize candidates the way the address form consumes them.

use smarty_footnotes::address::{normalize_address, AddressComponents};
use smarty_footnotes::footnote::{
    analysis_warnings, decode_analysis_footnotes, decode_analysis_footnotes_with, decode_dpv_footnotes,
    dpv_messages, FootnoteDelimiter,
};
use smarty_footnotes::guidance::{Guidance, SubmitDecision, ValidationAttempts};
use smarty_footnotes::smarty::{CandidateAnalysis, DpvConfirmation};
use smarty_footnotes::FootnoteError;

fn components() -> AddressComponents {
    AddressComponents {
        primary_number: "123".into(),
        street_name: "Main".into(),
        street_suffix: "St".into(),
        secondary_designator: "Apt".into(),
        secondary_number: "4B".into(),
        city_name: "Washington".into(),
        state: "DC".into(),
        zipcode: "20001".into(),
        plus4_code: "1234".into(),
        ..Default::default()
    }
}

#[test]
fn dpv_decoding_contract() {
    assert!(decode_dpv_footnotes(None).unwrap().is_empty());
    assert!(decode_dpv_footnotes(Some("")).unwrap().is_empty());

    let one = decode_dpv_footnotes(Some("AA")).unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].as_str(), "AA");

    let two = decode_dpv_footnotes(Some("AABB")).unwrap();
    assert_eq!(two.iter().map(|f| f.as_str()).collect::<Vec<_>>(), vec!["AA", "BB"]);

    assert!(matches!(
        decode_dpv_footnotes(Some("A")),
        Err(FootnoteError::MalformedInput { len: 1, .. })
    ));
}

#[test]
fn analysis_decoding_contract() {
    let codes = |s: &str| {
        decode_analysis_footnotes(Some(s))
            .into_iter()
            .map(|f| f.as_str().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(codes("A1#B2#"), vec!["A1", "B2"]);
    assert_eq!(codes("#A1#"), vec!["A1"]);
    assert_eq!(codes("A1"), vec!["A1"]);
}

#[test]
fn both_delimiter_rules_yield_the_same_warnings() {
    let stripped = decode_analysis_footnotes_with(Some("A#B#LI#"), FootnoteDelimiter::Stripped);
    let attached = decode_analysis_footnotes_with(Some("A#B#LI#"), FootnoteDelimiter::Attached);
    assert_ne!(stripped, attached);
    assert_eq!(analysis_warnings(&stripped), analysis_warnings(&attached));
    assert_eq!(analysis_warnings(&stripped).len(), 3);
}

#[test]
fn unknown_codes_pass_through_but_have_no_message() {
    let dpv = decode_dpv_footnotes(Some("Q9C1")).unwrap();
    assert_eq!(dpv.len(), 2);
    assert_eq!(dpv_messages(&dpv).len(), 1);
}

#[test]
fn normalizes_candidate_components() {
    let address = normalize_address(&components());
    assert_eq!(address.street_address, "123 Main St");
    assert_eq!(address.unit_apt_number, "Apt 4B");
    assert_eq!(address.postal_code, "20001-1234");
    assert_eq!(address, normalize_address(&components()));

    let no_unit = AddressComponents {
        secondary_designator: String::new(),
        secondary_number: String::new(),
        ..components()
    };
    assert_eq!(normalize_address(&no_unit).unit_apt_number, "");
}

#[test]
fn missing_unit_flow() {
    let mut attempts = ValidationAttempts::new();

    let first = CandidateAnalysis::from_raw("D", "AAN1", "H#", "N", "N", FootnoteDelimiter::Stripped).unwrap();
    assert_eq!(first.confirmation, DpvConfirmation::ConfirmedMissingSecondary);
    let guidance = Guidance::from_analysis(&first);
    assert_eq!(guidance.messages(), &["Unit/Apartment # is required for this address but is missing."]);
    assert_eq!(attempts.record(first.is_deliverable()), SubmitDecision::NotReady);

    let second = CandidateAnalysis::from_raw("Y", "AABB", "", "N", "N", FootnoteDelimiter::Stripped).unwrap();
    assert_eq!(Guidance::from_analysis(&second), Guidance::Confirmed { warnings: vec![] });
    assert_eq!(attempts.record(second.is_deliverable()), SubmitDecision::Ready);
}
