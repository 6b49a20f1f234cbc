//! CEP lookup providers
//!
//! Two public services resolve a CEP to an address. They take different URL
//! shapes and answer with different schemas; both are queried with a plain
//! GET (no headers, no auth) and decoded with serde.

pub mod apicep;
pub mod viacep;

pub use apicep::ApiCepAddress;
pub use viacep::ViaCepAddress;

use crate::cep::PostalCode;
use crate::lookup::LookupError;
use serde::Serialize;
use std::fmt;

/// CEP lookup provider services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Provider {
    /// apicep.com CDN file endpoint
    #[default]
    ApiCep,
    /// viacep.com.br web service
    ViaCep,
}

impl Provider {
    /// Short name used in diagnostics and JSON output
    pub fn name(&self) -> &'static str {
        match self {
            Provider::ApiCep => "apicep",
            Provider::ViaCep => "viacep",
        }
    }

    /// Get the default base URL for this provider
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::ApiCep => "https://cdn.apicep.com/file/apicep",
            Provider::ViaCep => "http://viacep.com.br/ws",
        }
    }

    /// Get all providers that take part in a lookup race
    pub fn all() -> &'static [Provider] {
        &[Provider::ApiCep, Provider::ViaCep]
    }

    /// Build the request URL for `cep` against `base`
    ///
    /// apicep takes the hyphenated code with a `.json` suffix; viacep takes
    /// the bare code with a `/json` path segment. A trailing slash on the
    /// base is tolerated.
    pub fn request_url(&self, base: &str, cep: &PostalCode) -> String {
        let base = base.trim_end_matches('/');
        match self {
            Provider::ApiCep => format!("{}/{}.json", base, cep.hyphenated()),
            Provider::ViaCep => format!("{}/{}/json", base, cep),
        }
    }

    /// Decode a response body into this provider's address record
    pub fn decode(&self, body: &str) -> Result<AddressRecord, serde_json::Error> {
        match self {
            Provider::ApiCep => {
                serde_json::from_str::<ApiCepAddress>(body).map(AddressRecord::ApiCep)
            }
            Provider::ViaCep => {
                serde_json::from_str::<ViaCepAddress>(body).map(AddressRecord::ViaCep)
            }
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded address from either provider
///
/// The two schemas are disjoint and intentionally not unified. Serialization
/// is untagged so each record serializes exactly as its provider returned it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AddressRecord {
    /// Record returned by apicep
    ApiCep(ApiCepAddress),
    /// Record returned by viacep
    ViaCep(ViaCepAddress),
}

impl AddressRecord {
    /// The provider that produced this record
    pub fn provider(&self) -> Provider {
        match self {
            AddressRecord::ApiCep(_) => Provider::ApiCep,
            AddressRecord::ViaCep(_) => Provider::ViaCep,
        }
    }
}

/// Fetch and decode an address record from a single provider
///
/// Issues one GET against `url` and parses the body into the provider's
/// record. Transport failures are reported distinctly from decode failures.
/// Unless `strict_status` is set, a non-2xx status is not itself an error
/// and the body is parsed regardless.
///
/// The caller owns the deadline: the request is cancelled by dropping the
/// returned future (or by a timeout configured on `client`).
pub async fn fetch_address(
    client: &reqwest::Client,
    provider: Provider,
    url: &str,
    strict_status: bool,
) -> Result<AddressRecord, LookupError> {
    let response = client.get(url).send().await.map_err(classify_reqwest)?;

    let status = response.status();
    if strict_status && !status.is_success() {
        return Err(LookupError::HttpStatus(status.as_u16()));
    }

    let body = response.text().await.map_err(classify_reqwest)?;

    provider
        .decode(&body)
        .map_err(|e| LookupError::Decode(e.to_string()))
}

/// Map a reqwest error to the lookup error taxonomy
fn classify_reqwest(e: reqwest::Error) -> LookupError {
    if e.is_timeout() {
        LookupError::DeadlineExceeded
    } else {
        LookupError::Transport(e.to_string())
    }
}
