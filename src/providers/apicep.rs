//! apicep.com response schema
//!
//! The CDN endpoint answers `GET {base}/{NNNNN-NNN}.json` with a flat JSON
//! object that embeds its own status alongside the address fields. Missing
//! fields decode to their defaults, matching the service's habit of omitting
//! empty values.

use serde::{Deserialize, Serialize};

use crate::cep::PostalCode;
use crate::providers::Provider;

/// Address record returned by the apicep endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiCepAddress {
    /// Hyphenated postal code, e.g. `06550-000`
    #[serde(default)]
    pub code: String,
    /// Two-letter state code, e.g. `SP`
    #[serde(default)]
    pub state: String,
    /// City name
    #[serde(default)]
    pub city: String,
    /// District (neighborhood) name
    #[serde(default)]
    pub district: String,
    /// Street address
    #[serde(default)]
    pub address: String,
    /// HTTP-like status flag carried in the body
    #[serde(default)]
    pub status: i64,
    /// Whether the service considers the lookup successful
    #[serde(default)]
    pub ok: bool,
    /// Human-readable status text
    #[serde(rename = "statusText", default)]
    pub status_text: String,
}

/// Build the apicep request URL: `{base}/{NNNNN-NNN}.json`
pub fn request_url(base: &str, cep: &PostalCode) -> String {
    Provider::ApiCep.request_url(base, cep)
}
