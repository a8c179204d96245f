//! Decoding of Smarty US Street API footnotes and normalization of validated
//! address components.
//!
//! ```
//! use smarty_footnotes::address::{normalize_address, AddressComponents};
//! use smarty_footnotes::footnote::{decode_analysis_footnotes, decode_dpv_footnotes};
//!
//! let dpv = decode_dpv_footnotes(Some("AAN1")).unwrap();
//! assert_eq!(dpv[1].correction_message(), Some("Unit/Apartment # is required for this address but is missing."));
//!
//! let footnotes = decode_analysis_footnotes(Some("A#N#"));
//! assert_eq!(footnotes.len(), 2);
//!
//! let address = normalize_address(&AddressComponents {
//!     primary_number: "123".into(),
//!     street_name: "Main".into(),
//!     street_suffix: "St".into(),
//!     zipcode: "20001".into(),
//!     plus4_code: "1234".into(),
//!     ..Default::default()
//! });
//! assert_eq!(address.street_address, "123 Main St");
//! assert_eq!(address.postal_code, "20001-1234");
//! ```

pub mod address;
pub mod autocomplete;
pub mod config;
pub mod error;
pub mod footnote;
pub mod guidance;
pub mod record;
pub mod smarty;
mod utils;

pub use error::{FootnoteError, Result};
