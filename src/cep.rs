//! Postal code ("CEP") parsing and formatting
//!
//! A CEP is the 8-digit Brazilian postal code. Providers disagree on the
//! wire format: apicep takes the hyphenated `NNNNN-NNN` form while viacep
//! takes the bare 8 digits. [`PostalCode`] stores the bare form and can
//! render either.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of digits in a CEP
pub const CEP_DIGITS: usize = 8;

/// Error returned when a string is not a valid CEP
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid CEP '{input}': expected exactly 8 ASCII digits")]
pub struct ParseCepError {
    /// The input that was rejected
    pub input: String,
}

/// A validated Brazilian postal code
///
/// Invariant: exactly 8 ASCII digits, no separators. Construction goes
/// through [`PostalCode::new`] (or `FromStr`/serde, which use it), so a
/// value of this type is always well-formed.
///
/// # Examples
///
/// ```
/// use cepr::PostalCode;
///
/// let cep: PostalCode = "06550000".parse()?;
/// assert_eq!(cep.as_str(), "06550000");
/// assert_eq!(cep.hyphenated(), "06550-000");
/// # Ok::<(), cepr::ParseCepError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostalCode(String);

impl PostalCode {
    /// Parse and validate a postal code from its bare 8-digit form
    ///
    /// # Errors
    ///
    /// Returns [`ParseCepError`] if the input is not exactly 8 ASCII digits.
    /// Hyphenated input is rejected; callers strip separators themselves.
    pub fn new(input: &str) -> Result<Self, ParseCepError> {
        if input.len() == CEP_DIGITS && input.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(input.to_string()))
        } else {
            Err(ParseCepError {
                input: input.to_string(),
            })
        }
    }

    /// The bare 8-digit form, e.g. `06550000`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hyphenated `NNNNN-NNN` form, e.g. `06550-000`
    pub fn hyphenated(&self) -> String {
        format!("{}-{}", &self.0[..5], &self.0[5..])
    }
}

impl FromStr for PostalCode {
    type Err = ParseCepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PostalCode {
    type Error = ParseCepError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PostalCode> for String {
    fn from(cep: PostalCode) -> Self {
        cep.0
    }
}
