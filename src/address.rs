use serde::{Deserialize, Serialize};
use crate::utils::join_non_empty;

/// The component breakdown of a validated address, as returned by the
/// validation service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressComponents {
    pub primary_number: String,
    pub street_predirection: String,
    pub street_name: String,
    pub street_suffix: String,
    pub street_postdirection: String,
    pub secondary_designator: String,
    pub secondary_number: String,
    pub extra_secondary_designator: String,
    pub extra_secondary_number: String,
    pub city_name: String,
    pub state: String,
    pub zipcode: String,
    pub plus4_code: String,
}

/// Canonical address record, shaped like the address form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub street_address: String,
    /// unit, apartment, suite, etc. Empty when there is none.
    pub unit_apt_number: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// How the ZIP and ZIP+4 are joined into a postal code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostalCodeStyle {
    /// always `{zip}-{plus4}`, so an empty plus4 leaves a dangling hyphen
    #[default]
    AlwaysHyphenated,
    /// `{zip}` alone when plus4 is empty
    OmitEmptyPlus4,
}

impl PostalCodeStyle {
    fn join(self, zip: &str, plus4: &str) -> String {
        match self {
            PostalCodeStyle::OmitEmptyPlus4 if plus4.is_empty() => zip.to_string(),
            _ => format!("{}-{}", zip, plus4),
        }
    }
}

/// Reassemble the standardized address from its components.
pub fn normalize_address(components: &AddressComponents) -> Address {
    normalize_address_with(components, PostalCodeStyle::default())
}

pub fn normalize_address_with(components: &AddressComponents, postal_style: PostalCodeStyle) -> Address {
    let c = components;

    let street_address = join_non_empty(
        [
            c.primary_number.as_str(),
            c.street_predirection.as_str(),
            c.street_name.as_str(),
            c.street_suffix.as_str(),
            c.street_postdirection.as_str(),
        ],
        " ",
    );

    let extra_secondary = join_non_empty([c.extra_secondary_designator.as_str(), c.extra_secondary_number.as_str()], " ");
    let secondary = join_non_empty([c.secondary_designator.as_str(), c.secondary_number.as_str()], " ");
    let unit_apt_number = join_non_empty([extra_secondary.as_str(), secondary.as_str()], ", ");

    Address {
        street_address,
        unit_apt_number,
        city: c.city_name.clone(),
        state: c.state.clone(),
        postal_code: postal_style.join(&c.zipcode, &c.plus4_code),
    }
}
