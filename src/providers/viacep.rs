//! viacep.com.br response schema
//!
//! The web service answers `GET {base}/{NNNNNNNN}/json` with a flat JSON
//! object of string fields. Its "not found" answer is `{"erro": true}`,
//! which decodes to an all-empty record rather than a decode failure.

use serde::{Deserialize, Serialize};

use crate::cep::PostalCode;
use crate::providers::Provider;

/// Address record returned by the viacep web service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViaCepAddress {
    /// Hyphenated postal code, e.g. `06233-030`
    #[serde(default)]
    pub cep: String,
    /// Street name
    #[serde(default)]
    pub logradouro: String,
    /// Address complement
    #[serde(default)]
    pub complemento: String,
    /// District (neighborhood) name
    #[serde(default)]
    pub bairro: String,
    /// City name
    #[serde(default)]
    pub localidade: String,
    /// Two-letter state code, e.g. `SP`
    #[serde(default)]
    pub uf: String,
    /// IBGE municipality code
    #[serde(default)]
    pub ibge: String,
    /// GIA taxpayer code (São Paulo state only)
    #[serde(default)]
    pub gia: String,
    /// Telephone area code
    #[serde(default)]
    pub ddd: String,
    /// SIAFI federal accounting code
    #[serde(default)]
    pub siafi: String,
}

/// Build the viacep request URL: `{base}/{NNNNNNNN}/json`
pub fn request_url(base: &str, cep: &PostalCode) -> String {
    Provider::ViaCep.request_url(base, cep)
}
