use log::debug;
use serde::{Deserialize, Serialize};
use smarty_rust_sdk::us_autocomplete_pro_api::lookup::Lookup;
use smarty_rust_sdk::us_autocomplete_pro_api::suggestion::Suggestion as SdkSuggestion;
use crate::address::Address;

/// Searches shorter than this are not sent.
const MIN_SEARCH_LEN: usize = 4;
const SOURCE: &str = "postal";
const DEFAULT_CITY: &str = "Washington, DC";
const DEFAULT_STATES: [&str; 3] = ["DC", "MD", "VA"];

/// A US autocomplete suggestion, as returned by the autocomplete service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Suggestion {
    pub street_line: String,
    pub secondary: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    /// number of secondary units behind this suggestion
    pub entries: u32,
}

impl Suggestion {
    /// label shown in the suggestion list
    pub fn option_label(&self) -> String {
        format!("{}, {}, {} {}", self.street_line, self.city, self.state, self.zipcode)
    }

    /// `selected` parameter that expands a suggestion into its secondary units
    pub fn secondary_selected(&self) -> String {
        format!(
            "{} {} ({}) {} {} {}",
            self.street_line, self.secondary, self.entries, self.city, self.state, self.zipcode
        )
    }

    /// picking this suggestion should list its units rather than fill the form
    pub fn needs_secondary_expansion(&self) -> bool {
        !self.secondary.is_empty() && self.entries > 1
    }
}

impl From<&SdkSuggestion> for Suggestion {
    fn from(suggestion: &SdkSuggestion) -> Self {
        Self {
            street_line: suggestion.street_line.clone(),
            secondary: suggestion.secondary.clone(),
            city: suggestion.city.clone(),
            state: suggestion.state.clone(),
            zipcode: suggestion.zipcode.clone(),
            entries: u32::try_from(suggestion.entries).unwrap_or(0),
        }
    }
}

impl From<&Suggestion> for Address {
    fn from(suggestion: &Suggestion) -> Self {
        Self {
            street_address: suggestion.street_line.clone(),
            unit_apt_number: suggestion.secondary.clone(),
            city: suggestion.city.clone(),
            state: suggestion.state.clone(),
            postal_code: suggestion.zipcode.clone(),
        }
    }
}

/// What the address form already holds; empty fields are unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionFilters {
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// An autocomplete request, before it is turned into an SDK lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteRequest {
    pub search: String,
    pub city_filter: Vec<String>,
    pub state_filter: Vec<String>,
    pub zip_filter: Vec<String>,
    /// the suggestion being expanded into its units, see [`Suggestion::secondary_selected`]
    pub selected: Option<String>,
}

impl AutocompleteRequest {
    /// Request suggestions for typed text.
    ///
    /// A known postal code limits results to that ZIP. Otherwise results are
    /// limited to the entered city and state, falling back to the DC area.
    /// Returns `None` when the text is too short to search.
    pub fn suggestions(text: &str, filters: &SuggestionFilters, selected: Option<&Suggestion>) -> Option<Self> {
        if text.chars().count() < MIN_SEARCH_LEN {
            debug!("search [{}] is too short for suggestions", text);
            return None;
        }

        let postal_code = filters.postal_code.trim();
        let (city_filter, state_filter, zip_filter) = if !postal_code.is_empty() {
            (Vec::new(), Vec::new(), vec![postal_code.to_string()])
        } else {
            let city = non_empty_or(&filters.city, DEFAULT_CITY);
            let states = match filters.state.trim() {
                "" => DEFAULT_STATES.iter().map(|s| s.to_string()).collect(),
                state => vec![state.to_string()],
            };
            (vec![city], states, Vec::new())
        };

        Some(
            Self {
                search: text.to_string(),
                city_filter,
                state_filter,
                zip_filter,
                selected: selected.map(Suggestion::secondary_selected),
            }
        )
    }

    /// Request the secondary units behind a chosen suggestion.
    pub fn secondary_suggestions(selected: &Suggestion) -> Self {
        Self {
            search: selected.street_line.clone(),
            city_filter: Vec::new(),
            state_filter: Vec::new(),
            zip_filter: vec![selected.zipcode.clone()],
            selected: Some(selected.secondary_selected()),
        }
    }
}

fn non_empty_or(value: &str, default: &str) -> String {
    match value.trim() {
        "" => default.to_string(),
        value => value.to_string(),
    }
}

impl From<&AutocompleteRequest> for Lookup {
    fn from(request: &AutocompleteRequest) -> Self {
        // TODO: forward `selected` once the SDK lookup carries that parameter
        Self {
            search: request.search.clone(),
            source: SOURCE.to_string(),
            city_filter: request.city_filter.clone(),
            state_filter: request.state_filter.clone(),
            zip_filter: request.zip_filter.clone(),
            ..Default::default()
        }
    }
}
