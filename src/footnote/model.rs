use std::fmt;
use serde::Serialize;

/// A USPS delivery point validation footnote, i.e. `AA`, `N1`.
///
/// Codes are kept as opaque strings so that codes added to the service later
/// still decode; use [`DpvFootnote::name`] to check against the known set.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct DpvFootnote(String);

impl DpvFootnote {
    pub(super) fn new(code: String) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// debug name of a known code
    pub fn name(&self) -> Option<&'static str> {
        DPV_FOOTNOTES.iter()
            .find(|(code, _, _)| *code == self.0)
            .map(|(_, name, _)| *name)
    }

    /// description of a known code as published by USPS
    pub fn description(&self) -> Option<&'static str> {
        DPV_FOOTNOTES.iter()
            .find(|(code, _, _)| *code == self.0)
            .map(|(_, _, description)| *description)
    }

    /// plain-language message for codes the user can act on
    pub fn correction_message(&self) -> Option<&'static str> {
        match self.0.as_str() {
            SECONDARY_NOT_RECOGNIZED_SECONDARY_IS_REQUIRED => {
                Some("Unit/Apartment # is required for this address, but the provided value is not deliverable.")
            }
            SECONDARY_NOT_RECOGNIZED_SECONDARY_NOT_REQUIRED => {
                Some("You provided a unit/apartment number, which is not required for this address.")
            }
            MISSING_REQUIRED_SECONDARY => {
                Some("Unit/Apartment # is required for this address but is missing.")
            }
            _ => None,
        }
    }

    /// carrier route R777/R779: the address exists but USPS does not deliver to it
    pub fn is_no_usps_delivery(&self) -> bool {
        self.0 == VALID_ADDRESS_WITHOUT_USPS_DELIVERY
    }
}

impl fmt::Display for DpvFootnote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DpvFootnote {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

const SECONDARY_NOT_RECOGNIZED_SECONDARY_IS_REQUIRED: &str = "C1";
const SECONDARY_NOT_RECOGNIZED_SECONDARY_NOT_REQUIRED: &str = "CC";
const MISSING_REQUIRED_SECONDARY: &str = "N1";
const VALID_ADDRESS_WITHOUT_USPS_DELIVERY: &str = "R7";

/// (code, name, description)
const DPV_FOOTNOTES: &[(&str, &str, &str)] = &[
    ("AA", "StreetCityStateZipValid", "Street name, city, state, and ZIP are all valid."),
    ("A1", "AddressNotPresentInUspsData", "Address not present in USPS data."),
    ("BB", "EntireAddressValid", "Entire address is valid."),
    ("CC", "SecondaryNotRecognizedSecondaryNotRequired", "The submitted secondary information was not recognized. Secondary number is NOT required for delivery."),
    ("C1", "SecondaryNotRecognizedSecondaryIsRequired", "The submitted secondary information was not recognized. Secondary number IS required for delivery."),
    ("F1", "MilitaryOrDiplomaticAddress", "Military or diplomatic address."),
    ("G1", "GeneralDeliveryAddress", "General delivery address."),
    ("IA", "InformedAddressIdentified", "Informed Address identified."),
    ("M1", "PrimaryNumberMissing", "Primary number (e.g., house number) is missing."),
    ("M3", "PrimaryNumberInvalid", "Primary number (e.g., house number) is invalid."),
    ("N1", "MissingRequiredSecondary", "Address is missing secondary information which IS required for delivery."),
    ("PB", "PoBoxStreetStyleAddress", "PO Box street style address."),
    ("P1", "PoRrHcBoxNumberMissing", "PO, RR, or HC box number is missing."),
    ("P3", "PoRrHcBoxNumberInvalid", "PO, RR, or HC box number is invalid."),
    ("RR", "ConfirmedWithPmb", "Confirmed address with private mailbox (PMB) info."),
    ("R1", "ConfirmedWithoutPmb", "Confirmed address without private mailbox (PMB) info."),
    ("R7", "ValidAddressThatDoesNotReceiveUspsDelivery", "Carrier route R777 or R779 record: a valid address that does not receive USPS delivery."),
    ("TA", "PrimaryNumberMatchedByDroppingTrailingAlpha", "Primary number was matched by dropping trailing alpha."),
    ("U1", "UniqueZipCode", "Address has a \"unique\" ZIP Code."),
];

/// A general address-analysis footnote, i.e. `A#` (corrected ZIP code).
///
/// Depending on the delimiter rule the token may or may not carry the
/// trailing `#`; lookups accept both.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct AnalysisFootnote(String);

impl AnalysisFootnote {
    pub(super) fn new(code: String) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// the code without any trailing delimiter
    pub fn code(&self) -> &str {
        self.0.trim_end_matches(super::DELIMITER)
    }

    pub fn description(&self) -> Option<&'static str> {
        let code = self.code();
        ANALYSIS_FOOTNOTES.iter()
            .find(|(known, _)| known.trim_end_matches(super::DELIMITER) == code)
            .map(|(_, description)| *description)
    }
}

impl fmt::Display for AnalysisFootnote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AnalysisFootnote {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

const ANALYSIS_FOOTNOTES: &[(&str, &str)] = &[
    ("A#", "Corrected ZIP Code"),
    ("B#", "Fixed city/state spelling"),
    ("C#", "Invalid city/state/ZIP"),
    ("D#", "No ZIP+4 assigned"),
    ("E#", "Same ZIP for multiple"),
    ("F#", "Address not found"),
    ("G#", "Used addressee data"),
    ("H#", "Missing secondary number"),
    ("I#", "Insufficient/incorrect address data"),
    ("J#", "Dual address"),
    ("K#", "Cardinal rule match"),
    ("L#", "Changed address component"),
    ("LI#", "Flagged address for LACSLink"),
    ("M#", "Fixed street spelling"),
    ("N#", "Fixed abbreviations"),
    ("O#", "Multiple ZIP+4; lowest used"),
    ("P#", "Better address exists"),
    ("Q#", "Unique ZIP match"),
    ("R#", "No match; EWS: Match soon"),
    ("S#", "Unrecognized secondary address"),
    ("T#", "Multiple response due to magnet street syndrome"),
    ("U#", "Unofficial post office name"),
    ("V#", "Unverifiable city/state"),
    ("W#", "Invalid delivery address"),
    ("X#", "Unique ZIP Code"),
    ("Y#", "Military match"),
    ("Z#", "Matched with ZIPMOVE"),
];

/// messages for the correction-worthy DPV footnotes, unknown or silent codes dropped
pub fn dpv_messages(footnotes: &[DpvFootnote]) -> Vec<&'static str> {
    footnotes.iter()
        .filter_map(DpvFootnote::correction_message)
        .collect()
}

/// descriptions for analysis footnotes, unknown codes dropped
pub fn analysis_warnings(footnotes: &[AnalysisFootnote]) -> Vec<&'static str> {
    footnotes.iter()
        .filter_map(AnalysisFootnote::description)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_dpv_codes_have_names() {
        assert_eq!(DpvFootnote::new("N1".into()).name(), Some("MissingRequiredSecondary"));
        assert_eq!(DpvFootnote::new("ZZ".into()).name(), None);
        assert!(DpvFootnote::new("ZZ".into()).description().is_none());
    }

    #[test]
    fn only_secondary_codes_have_correction_messages() {
        let footnotes = ["AA", "C1", "ZZ", "N1", "BB"]
            .into_iter()
            .map(|c| DpvFootnote::new(c.to_string()))
            .collect::<Vec<_>>();
        let messages = dpv_messages(&footnotes);
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("not deliverable"));
        assert!(messages[1].contains("missing"));
    }

    #[test]
    fn analysis_lookup_ignores_trailing_delimiter() {
        let stripped = AnalysisFootnote::new("LI".into());
        let attached = AnalysisFootnote::new("LI#".into());
        assert_eq!(stripped.description(), Some("Flagged address for LACSLink"));
        assert_eq!(attached.description(), stripped.description());
        assert_eq!(attached.code(), "LI");
    }

    #[test]
    fn unknown_analysis_footnotes_are_dropped_from_warnings() {
        let footnotes = vec![
            AnalysisFootnote::new("A".into()),
            AnalysisFootnote::new("QQ".into()),
            AnalysisFootnote::new("N#".into()),
        ];
        assert_eq!(analysis_warnings(&footnotes), vec!["Corrected ZIP Code", "Fixed abbreviations"]);
    }
}
